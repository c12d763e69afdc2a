//! GFM-class markdown to HTML.
//!
//! Tables, strikethrough and task lists come from pulldown-cmark. Bare
//! `http://`, `https://` and `www.` URLs in running text are turned into
//! links here. Raw HTML in the source is escaped rather than passed through,
//! and every link opens in a new browsing context with no opener and no
//! referrer.

use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html};

const LINK_OPEN: &str = "<a href=\"";
const HARDENED_LINK_OPEN: &str = "<a target=\"_blank\" rel=\"noopener noreferrer\" href=\"";

const URL_PREFIXES: [&str; 3] = ["https://", "http://", "www."];
const TRAILING_PUNCTUATION: &str = ".,:;!?\"'*_~";

/// Parser options for chat markdown.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Renders a markdown document to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let parser = TextMergeStream::new(Parser::new_ext(source, markdown_options()));
    let events = autolink(parser.map(escape_raw_html));

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    // Text, code and raw HTML are all escaped by this point, so the only
    // literal `<a href="` left is one the writer emitted for a link.
    out.replace(LINK_OPEN, HARDENED_LINK_OPEN)
}

fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

/// Rewrites bare URLs in text events into link events. Text inside links,
/// images and code blocks is left alone.
fn autolink<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut suppressed = 0usize;

    for event in events {
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => {
                suppressed += 1;
            }
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                suppressed = suppressed.saturating_sub(1);
            }
            Event::Text(text) if suppressed == 0 && find_url(text).is_some() => {
                push_autolinked(text, &mut out);
                continue;
            }
            _ => {}
        }
        out.push(event);
    }
    out
}

fn push_autolinked<'a>(text: &str, out: &mut Vec<Event<'a>>) {
    let mut rest = text;
    while let Some((start, end)) = find_url(rest) {
        if start > 0 {
            out.push(Event::Text(rest[..start].to_string().into()));
        }
        let url = &rest[start..end];
        let href = if url.starts_with("www.") {
            format!("http://{url}")
        } else {
            url.to_string()
        };
        out.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: href.into(),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(url.to_string().into()));
        out.push(Event::End(TagEnd::Link));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push(Event::Text(rest.to_string().into()));
    }
}

/// Byte range of the first bare URL in `text`.
fn find_url(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while from < text.len() {
        let rest = &text[from..];
        let start = from + URL_PREFIXES.iter().filter_map(|p| rest.find(p)).min()?;

        let at_word_boundary = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        if at_word_boundary {
            let end = url_end(text, start);
            if has_host(&text[start..end]) {
                return Some((start, end));
            }
        }
        // Prefixes are ASCII, so `start + 1` is a char boundary.
        from = start + 1;
    }
    None
}

fn url_end(text: &str, start: usize) -> usize {
    let tail = &text[start..];
    let mut end = tail
        .find(|c: char| c.is_whitespace() || c == '<')
        .unwrap_or(tail.len());

    loop {
        let candidate = &tail[..end];
        match candidate.chars().next_back() {
            Some(c) if TRAILING_PUNCTUATION.contains(c) => end -= c.len_utf8(),
            Some(')') if candidate.matches('(').count() < candidate.matches(')').count() => {
                end -= 1
            }
            _ => break,
        }
    }
    start + end
}

fn has_host(url: &str) -> bool {
    URL_PREFIXES
        .iter()
        .find_map(|p| url.strip_prefix(p))
        .is_some_and(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_renders_as_strong() {
        let html = render_markdown("**bold**");
        assert_eq!(html, "<p><strong>bold</strong></p>\n");
    }

    #[test]
    fn fenced_code_is_literal() {
        let html = render_markdown("```\n**not bold** [x](y) https://example.com\n```\n");
        assert!(
            html.contains("<pre><code>**not bold** [x](y) https://example.com\n</code></pre>"),
            "got: {html}"
        );
        assert!(!html.contains("<strong>"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn fenced_code_keeps_language_class() {
        let html = render_markdown("```python\nprint(1)\n```");
        assert!(html.contains(r#"<code class="language-python">"#), "got: {html}");
    }

    #[test]
    fn tables_render() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"), "got: {html}");
        assert!(html.contains("<td>1</td>"), "got: {html}");
    }

    #[test]
    fn strikethrough_renders() {
        let html = render_markdown("~~gone~~");
        assert!(html.contains("<del>gone</del>"), "got: {html}");
    }

    #[test]
    fn links_open_without_opener_or_referrer() {
        let html = render_markdown("[Example Link](https://example.com)");
        assert_eq!(
            html,
            "<p><a target=\"_blank\" rel=\"noopener noreferrer\" href=\"https://example.com\">Example Link</a></p>\n"
        );
    }

    #[test]
    fn bare_urls_become_links() {
        let html = render_markdown("see https://example.com/docs. thanks");
        assert!(
            html.contains(
                "<a target=\"_blank\" rel=\"noopener noreferrer\" href=\"https://example.com/docs\">https://example.com/docs</a>. thanks"
            ),
            "got: {html}"
        );
    }

    #[test]
    fn www_urls_get_a_scheme() {
        let html = render_markdown("visit www.example.com");
        assert!(html.contains("href=\"http://www.example.com\""), "got: {html}");
    }

    #[test]
    fn angle_autolinks_are_hardened() {
        let html = render_markdown("<https://example.com>");
        assert!(html.contains("rel=\"noopener noreferrer\""), "got: {html}");
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"), "got: {html}");
        assert!(html.contains("&lt;script&gt;"), "got: {html}");
    }

    #[test]
    fn url_inside_link_text_is_not_relinked() {
        let html = render_markdown("[https://a.example](https://b.example)");
        assert_eq!(html.matches("<a ").count(), 1, "got: {html}");
    }

    #[test]
    fn find_url_respects_word_boundaries_and_punctuation() {
        assert_eq!(find_url("xhttps://a.b"), None);
        assert_eq!(find_url("(https://a.b/c)"), Some((1, 14)));
        assert_eq!(find_url("go to www."), None);
        assert_eq!(find_url("no links here"), None);
    }
}
