//! Standalone HTML page for a whole conversation.

use std::fmt::Write;

use chrono::{Local, TimeZone};

use super::theme::Palette;
use super::{escape_html, render_message};
use crate::message::Message;

/// Local wall-clock `HH:MM:SS` for an epoch-millis timestamp.
pub fn format_time(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Renders `messages` in order as a complete HTML document.
pub fn render_transcript(messages: &[Message], palette: &Palette) -> String {
    let mut body = String::new();
    for message in messages {
        let side = if message.is_user() { "user" } else { "bot" };
        // Writing into a String cannot fail.
        let _ = write!(
            body,
            "<div class=\"message {side}\" id=\"m-{id}\">\
             <div class=\"bubble\">{content}</div>\
             <div class=\"time\">{time}</div>\
             </div>\n",
            id = escape_html(message.id()),
            content = render_message(message),
            time = format_time(message.timestamp()),
        );
    }
    if messages.is_empty() {
        body.push_str("<div class=\"empty\">Start a new conversation</div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Parrot conversation</title>
<style>
body {{ margin: 0; padding: 24px; background: {background}; color: {text}; font-family: "SF Pro Display", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }}
.conversation {{ display: flex; flex-direction: column; gap: 24px; }}
.message {{ max-width: 80%; display: flex; flex-direction: column; }}
.message.user {{ align-self: flex-end; text-align: right; }}
.message.bot {{ align-self: flex-start; }}
.bubble {{ padding: 16px; border-radius: 16px; text-align: left; overflow-x: auto; }}
.user .bubble {{ background: {primary}; color: #FFFFFF; }}
.bot .bubble {{ background: {bot_bubble}; color: {text}; }}
.bot .bubble a {{ color: {primary}; text-decoration: none; }}
pre, code {{ background: {code_background}; border-radius: 4px; }}
pre {{ padding: 12px; overflow-x: auto; }}
.time {{ margin-top: 4px; font-size: 0.75rem; color: {text_secondary}; }}
.empty {{ text-align: center; color: {text_secondary}; padding: 48px; }}
</style>
</head>
<body>
<div class="conversation">
{body}</div>
</body>
</html>
"#,
        background = palette.background,
        text = palette.text_primary,
        text_secondary = palette.text_secondary,
        primary = palette.primary,
        bot_bubble = palette.bot_bubble,
        code_background = palette.code_background,
    )
}
