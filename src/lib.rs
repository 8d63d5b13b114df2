//! # mdstale
//!
//! A minimal incremental static site generator. Point it at a directory
//! holding an `index.html` template and any number of Markdown files; every
//! `page.md` whose `page.html` is missing or older than the page or the
//! template is rendered, spliced into the template in place of `{{body}}`,
//! and written next to its source.
//!
//! ```text
//! site/
//! ├── index.html        # <html>…{{body}}…</html>
//! ├── about.md          → about.html
//! └── notes/a.md        → notes/a.html
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Well-known names (root, template, placeholder, extensions) |
//! | [`discover`] | Concurrent recursive search for `.md` sources |
//! | [`stale`] | Timestamp comparison deciding which pages to rebuild |
//! | [`template`] | Loads the shared template and splices page bodies into it |
//! | [`markdown`] | Markdown to HTML via pulldown-cmark |
//! | [`render`] | Read, convert, splice and write one page |
//! | [`pipeline`] | One build pass: template → discover → classify → render |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Timestamps Are the Only Cache
//!
//! There is no manifest and no hashing. An output is fresh exactly when it
//! is at least as new as both its source and the template. Touching the
//! template rebuilds the whole site; `touch page.md` rebuilds one page.
//!
//! ## Single-Threaded Fan-Out
//!
//! The work is almost entirely filesystem calls, so the CLI runs a
//! `current_thread` tokio runtime and fans out one task per directory and
//! per page with [`tokio::task::JoinSet`]. Outputs are partitioned one to
//! one by path and the template is shared read-only, so no task ever needs
//! a lock.
//!
//! ## One Page Failing Is Not a Failed Build
//!
//! A page that cannot be read, stat'ed or written is reported and skipped;
//! the rest of the site still builds and the process exits successfully.
//! Only a missing template or an unreadable directory stops the build,
//! since neither leaves anything meaningful to do.

pub mod config;
pub mod discover;
pub mod markdown;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod stale;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
