//! Build configuration.
//!
//! There is no config file. A site is a directory with a template at its
//! root and Markdown files anywhere below it; [`BuildConfig`] just names
//! those conventions so the rest of the crate never hard-codes them:
//!
//! ```text
//! site/
//! ├── index.html          # Template, contains {{body}} once
//! ├── about.md            → about.html
//! └── notes/
//!     ├── a.md            → notes/a.html
//!     └── deep/er/b.md    → notes/deep/er/b.html
//! ```
//!
//! The only value a user can change is the root, through the CLI.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Default template file name, relative to the build root.
pub const DEFAULT_TEMPLATE: &str = "index.html";
/// Token in the template replaced by each page's rendered Markdown.
pub const DEFAULT_PLACEHOLDER: &str = "{{body}}";

/// Where the site lives and what the well-known names are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory scanned for sources; also where the template is looked up.
    pub root: PathBuf,
    /// Template file name, relative to `root`.
    pub template: PathBuf,
    pub placeholder: String,
    /// Source extension without the dot. Matched case-sensitively.
    pub source_extension: String,
    pub output_extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            source_extension: "md".to_string(),
            output_extension: "html".to_string(),
        }
    }
}

impl BuildConfig {
    /// Default configuration rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Absolute-or-relative path of the template, joined onto the root.
    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template)
    }

    /// Output path for a source: the source extension swapped for the
    /// output extension, directory untouched.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        source.with_extension(&self.output_extension)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.is_empty() {
            return Err(ConfigError::Validation(
                "placeholder token must not be empty".into(),
            ));
        }
        if self.source_extension.is_empty() || self.output_extension.is_empty() {
            return Err(ConfigError::Validation(
                "source and output extensions must not be empty".into(),
            ));
        }
        if self.source_extension == self.output_extension {
            return Err(ConfigError::Validation(format!(
                "output extension must differ from source extension ({})",
                self.source_extension
            )));
        }
        Ok(())
    }
}
