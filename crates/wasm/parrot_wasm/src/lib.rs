use parrot_core::MessageFormat;
use wasm_bindgen::prelude::*;

/// Returns the version of the parrot_wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    parrot_core::version().to_string()
}

/// Renders message content to an HTML fragment.
///
/// `format` is `"markdown"` or `"text"`. Anything else renders as text.
#[wasm_bindgen(js_name = renderMessage)]
pub fn render_message(content: &str, format: &str) -> String {
    let format = format.parse().unwrap_or(MessageFormat::Text);
    parrot_core::render::render_content(content, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_format_renders_markdown() {
        assert_eq!(
            render_message("**bold**", "markdown"),
            "<p><strong>bold</strong></p>\n"
        );
    }

    #[test]
    fn unknown_format_falls_back_to_text() {
        let html = render_message("**bold**", "rich");
        assert!(html.contains("**bold**"));
        assert!(html.contains("pre-wrap"));
    }

    #[test]
    fn version_matches_core() {
        assert_eq!(version(), parrot_core::version());
    }
}
