//! Timestamp-based staleness.
//!
//! A page is rebuilt when its output is missing, or when either of its two
//! inputs (the Markdown source and the shared template) was modified strictly
//! after the output. Equal timestamps count as fresh.
//!
//! Missing output is the only stat failure that means "stale". Anything else
//! (permission denied on the output, the source vanishing mid-build) is a
//! [`StaleError`] for that one page; it is never folded into "missing".

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaleError {
    #[error("Cannot stat output {path}: {source}")]
    OutputMetadata {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot stat source {path}: {source}")]
    SourceMetadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of looking up an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStat {
    Present(SystemTime),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    MissingOutput,
    SourceNewer,
    TemplateNewer,
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::MissingOutput => write!(f, "no output yet"),
            StaleReason::SourceNewer => write!(f, "source changed"),
            StaleReason::TemplateNewer => write!(f, "template changed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale(StaleReason),
}

/// Decide from the three timestamps alone.
///
/// When both inputs are newer, the source wins as the reported reason.
pub fn decide(source: SystemTime, output: OutputStat, template: SystemTime) -> Freshness {
    match output {
        OutputStat::Missing => Freshness::Stale(StaleReason::MissingOutput),
        OutputStat::Present(out) if source > out => Freshness::Stale(StaleReason::SourceNewer),
        OutputStat::Present(out) if template > out => Freshness::Stale(StaleReason::TemplateNewer),
        OutputStat::Present(_) => Freshness::Fresh,
    }
}

/// Stat an output path, separating "does not exist" from real failures.
pub async fn stat_output(path: &Path) -> Result<OutputStat, StaleError> {
    let err = |source| StaleError::OutputMetadata {
        path: path.to_path_buf(),
        source,
    };
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(OutputStat::Present(meta.modified().map_err(err)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(OutputStat::Missing),
        Err(e) => Err(err(e)),
    }
}

/// Classify one source against its output and the template's mtime.
///
/// The output is stat'ed first; the source is only stat'ed when an output
/// exists to compare against.
pub async fn classify(
    source: &Path,
    output: &Path,
    template_modified: SystemTime,
) -> Result<Freshness, StaleError> {
    let output_stat = stat_output(output).await?;
    if output_stat == OutputStat::Missing {
        return Ok(Freshness::Stale(StaleReason::MissingOutput));
    }
    let source_modified = tokio::fs::metadata(source)
        .await
        .and_then(|m| m.modified())
        .map_err(|e| StaleError::SourceMetadata {
            path: source.to_path_buf(),
            source: e,
        })?;
    Ok(decide(source_modified, output_stat, template_modified))
}
