//! One build pass.
//!
//! ```text
//! 1. Template   index.html  →  Arc<Template>        (once, shared read-only)
//! 2. Discover   root/       →  [*.md]               (one task per directory)
//! 3. Classify   [*.md]      →  [stale *.md]         (one task per file)
//! 4. Render     [stale]     →  *.html on disk       (one task per file)
//! ```
//!
//! Each phase is a [`JoinSet`] that is fully drained before the next phase
//! starts. Completion order inside a phase is arbitrary and never affects
//! what ends up on disk: every output depends only on its own source, its
//! own previous output and the template.
//!
//! ## Failure policy
//!
//! Steps 1 and 2 have no per-page granularity, so their errors end the build
//! with [`BuildError`]. Steps 3 and 4 isolate failures: a page that cannot be
//! stat'ed, read or written is recorded in [`BuildSummary::failures`] and the
//! remaining pages carry on. A panicking task is a bug and aborts the build.
//!
//! A source whose output path is the template itself (`index.md` next to
//! `index.html`) is never rendered: writing it would replace the template
//! mid-build. It is recorded as a failure instead.
//!
//! ## Progress
//!
//! Pass a channel sender to receive [`BuildEvent`]s as they happen; the CLI
//! drains it on a printer thread (see [`crate::output`]).

use crate::config::{BuildConfig, ConfigError};
use crate::discover::{DiscoverError, find_sources};
use crate::render::{RenderError, render_page};
use crate::stale::{Freshness, StaleError, StaleReason, classify};
use crate::template::{Template, TemplateError};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Discover(#[from] DiscoverError),
    #[error("Build task failed: {0}")]
    Task(#[from] JoinError),
}

/// Why a single page was not built.
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Stale(#[from] StaleError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Output {output} is the template; refusing to overwrite it")]
    OverwritesTemplate { output: PathBuf },
}

#[derive(Debug)]
pub struct FileFailure {
    /// The Markdown source the failure belongs to.
    pub path: PathBuf,
    pub error: PageError,
}

/// Progress notifications, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// The template does not contain the placeholder; pages will be copies
    /// of the template.
    PlaceholderMissing {
        template: PathBuf,
        placeholder: String,
    },
    Stale {
        source: PathBuf,
        reason: StaleReason,
    },
    /// All stale sources, sorted, sent once classification has finished.
    Queued { sources: Vec<PathBuf> },
    Written { output: PathBuf },
    Failed { source: PathBuf, message: String },
}

#[derive(Debug, Default)]
pub struct BuildSummary {
    pub discovered: usize,
    /// Sources that needed a rebuild, sorted.
    pub stale: Vec<PathBuf>,
    /// Outputs written this pass, sorted.
    pub written: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
}

impl BuildSummary {
    pub fn fresh(&self) -> usize {
        self.discovered - self.stale.len() - self.classify_failures()
    }

    /// True when every page was either fresh or rebuilt.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures that happened before a page could be queued.
    fn classify_failures(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| !matches!(f.error, PageError::Render(_)))
            .count()
    }
}

fn emit(events: &Option<Sender<BuildEvent>>, event: BuildEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is watching.
        let _ = tx.send(event);
    }
}

fn failure(events: &Option<Sender<BuildEvent>>, path: PathBuf, error: PageError) -> FileFailure {
    emit(
        events,
        BuildEvent::Failed {
            source: path.clone(),
            message: error.to_string(),
        },
    );
    FileFailure { path, error }
}

/// Run one full build pass over `config.root`.
pub async fn build(
    config: &BuildConfig,
    events: Option<Sender<BuildEvent>>,
) -> Result<BuildSummary, BuildError> {
    config.validate()?;

    let template = Arc::new(Template::load(&config.template_path(), &config.placeholder).await?);
    if !template.has_placeholder() {
        emit(
            &events,
            BuildEvent::PlaceholderMissing {
                template: template.path.clone(),
                placeholder: template.placeholder.clone(),
            },
        );
    }

    let sources = find_sources(&config.root, &config.source_extension).await?;
    let mut summary = BuildSummary {
        discovered: sources.len(),
        ..BuildSummary::default()
    };

    let template_path = config.template_path();
    let mut checks = JoinSet::new();
    for source in sources {
        let output = config.output_path(&source);
        if output == template_path {
            let error = PageError::OverwritesTemplate { output };
            summary.failures.push(failure(&events, source, error));
            continue;
        }
        let template_modified = template.modified;
        checks.spawn(async move {
            let freshness = classify(&source, &output, template_modified).await;
            (source, output, freshness)
        });
    }

    let mut queue = Vec::new();
    while let Some(joined) = checks.join_next().await {
        let (source, output, freshness) = joined?;
        match freshness {
            Ok(Freshness::Fresh) => {}
            Ok(Freshness::Stale(reason)) => {
                emit(
                    &events,
                    BuildEvent::Stale {
                        source: source.clone(),
                        reason,
                    },
                );
                queue.push((source, output));
            }
            Err(e) => summary.failures.push(failure(&events, source, e.into())),
        }
    }

    queue.sort();
    summary.stale = queue.iter().map(|(source, _)| source.clone()).collect();
    emit(
        &events,
        BuildEvent::Queued {
            sources: summary.stale.clone(),
        },
    );

    let mut renders = JoinSet::new();
    for (source, output) in queue {
        let template = Arc::clone(&template);
        renders.spawn(async move {
            let rendered = render_page(&source, &output, &template).await;
            (source, output, rendered)
        });
    }

    while let Some(joined) = renders.join_next().await {
        let (source, output, rendered) = joined?;
        match rendered {
            Ok(()) => {
                emit(
                    &events,
                    BuildEvent::Written {
                        output: output.clone(),
                    },
                );
                summary.written.push(output);
            }
            Err(e) => summary.failures.push(failure(&events, source, e.into())),
        }
    }

    summary.written.sort();
    summary.failures.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(summary)
}
