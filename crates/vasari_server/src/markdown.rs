//! Markdown rendering for generated content.

use pulldown_cmark::{Options, Parser, html};

/// Render markdown text to HTML.
///
/// Gemini replies arrive as markdown; the page swaps in the rendered HTML
/// so outlines, caption lists, and tables display with structure intact.
pub fn render_markdown(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(input, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
