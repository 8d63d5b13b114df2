//! Markdown to HTML conversion.
//!
//! A thin wrapper over [pulldown-cmark](https://docs.rs/pulldown-cmark).
//! CommonMark plus the GitHub-flavored extensions most sites expect:
//! tables, strikethrough and task lists.

use pulldown_cmark::{Options, Parser, html as md_html};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a complete Markdown document to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, options());
    let mut html = String::with_capacity(source.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}
