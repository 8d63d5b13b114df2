//! The shared page template.
//!
//! One HTML skeleton wraps every generated page. It is read once per build
//! and then only ever read, so the pipeline hands it to every render task
//! behind an `Arc`.
//!
//! Splicing is a single-occurrence replace: the first placeholder in the
//! template receives the page body; any later copy of the token is left as
//! literal text.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Cannot read template {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read modification time of template {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Template {
    pub path: PathBuf,
    pub text: String,
    pub modified: SystemTime,
    pub placeholder: String,
}

impl Template {
    /// Read the template's text and modification time.
    pub async fn load(path: &Path, placeholder: &str) -> Result<Self, TemplateError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| TemplateError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let modified = tokio::fs::metadata(path)
            .await
            .and_then(|m| m.modified())
            .map_err(|source| TemplateError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
            modified,
            placeholder: placeholder.to_string(),
        })
    }

    /// Whether the placeholder appears anywhere in the template.
    ///
    /// A template without it still renders (every page comes out identical
    /// to the template), so this is only used to warn.
    pub fn has_placeholder(&self) -> bool {
        self.text.contains(&self.placeholder)
    }

    /// The template with its first placeholder replaced by `body`.
    pub fn splice(&self, body: &str) -> String {
        self.text.replacen(&self.placeholder, body, 1)
    }
}
