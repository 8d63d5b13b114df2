//! Rendering and writing a single page.
//!
//! Read the source, convert it, splice it into the template, write the
//! output. The output file is created or truncated; nothing from a previous
//! render survives.

use crate::markdown::render_markdown;
use crate::template::Template;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot read source {path}: {source}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The full page for a Markdown document: template with the rendered body.
pub fn render_page_text(markdown: &str, template: &Template) -> String {
    template.splice(&render_markdown(markdown))
}

/// Render `source` into `output`.
///
/// Sources must be UTF-8; anything else fails as a read error
/// (`ErrorKind::InvalidData`).
pub async fn render_page(
    source: &Path,
    output: &Path,
    template: &Template,
) -> Result<(), RenderError> {
    let markdown = tokio::fs::read_to_string(source)
        .await
        .map_err(|e| RenderError::ReadSource {
            path: source.to_path_buf(),
            source: e,
        })?;
    let page = render_page_text(&markdown, template);
    tokio::fs::write(output, page)
        .await
        .map_err(|e| RenderError::WriteOutput {
            path: output.to_path_buf(),
            source: e,
        })
}
