//! Markdown rendering for assistant replies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// GitHub-style extensions the answer model tends to emit.
const REPLY_EXTENSIONS: Options =
    Options::ENABLE_TABLES.union(Options::ENABLE_STRIKETHROUGH).union(Options::ENABLE_TASKLISTS);

/// Raw HTML from a model reply is never rendered.
fn is_markup_passthrough(event: &Event<'_>) -> bool {
    matches!(event, Event::Html(_) | Event::InlineHtml(_))
}

/// Render an assistant reply to HTML, dropping any raw HTML in the source.
pub fn render_markdown_html(reply: &str) -> String {
    let events = Parser::new_ext(reply, REPLY_EXTENSIONS).filter(|event| !is_markup_passthrough(event));

    let mut out = String::with_capacity(reply.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
