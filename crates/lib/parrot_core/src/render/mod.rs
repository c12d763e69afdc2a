//! HTML rendering for conversation entries.

pub mod markdown;
pub mod theme;
pub mod transcript;

pub use markdown::render_markdown;
pub use theme::Palette;
pub use transcript::render_transcript;

use crate::message::{Message, MessageFormat};

/// Renders one message body to an HTML fragment according to its format.
pub fn render_message(message: &Message) -> String {
    render_content(message.content(), message.format())
}

/// Renders `content` as markdown or as verbatim text.
pub fn render_content(content: &str, format: MessageFormat) -> String {
    match format {
        MessageFormat::Markdown => render_markdown(content),
        MessageFormat::Text => render_text(content),
    }
}

/// Verbatim text: escaped, whitespace and line breaks preserved.
pub fn render_text(content: &str) -> String {
    format!(
        "<div class=\"message-text\" style=\"white-space: pre-wrap; word-break: break-word\">{}</div>",
        escape_html(content)
    )
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_not_interpreted() {
        let html = render_content("**not bold**\n  <b>indented</b>", MessageFormat::Text);
        assert_eq!(
            html,
            "<div class=\"message-text\" style=\"white-space: pre-wrap; word-break: break-word\">**not bold**\n  &lt;b&gt;indented&lt;/b&gt;</div>"
        );
    }

    #[test]
    fn message_format_selects_renderer() {
        let user = Message::user("**hi**");
        let bot = Message::bot("**hi**", MessageFormat::Markdown);
        assert!(render_message(&user).contains("**hi**"));
        assert!(render_message(&bot).contains("<strong>hi</strong>"));
    }

    #[test]
    fn escape_html_handles_quotes() {
        assert_eq!(escape_html(r#"a "b" 'c' & d"#), "a &quot;b&quot; &#39;c&#39; &amp; d");
    }
}
