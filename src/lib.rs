//! # navmeta
//!
//! Keeps a documentation site's per-directory `meta.json` files in sync with
//! its navigation descriptor. Maintainers edit one `docs.json`; navmeta
//! derives the sidebar title and entry order for every directory it implies.
//!
//! # Pipeline
//!
//! ```text
//! docs.json  →  NavigationDescriptor  →  compile  →  <dir>/meta.json
//!                (descriptor)             (compile)    (types::MetaFile)
//! ```
//!
//! The whole run is one synchronous pass. The only state is the set of
//! directories already emitted, owned by the compiler and threaded through
//! the traversal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`descriptor`] | Navigation descriptor types, loading, and first-page search |
//! | [`naming`] | Page path helpers and dropdown label → directory resolution |
//! | [`compile`] | Group/dropdown/language traversal and once-per-directory emission |
//! | [`types`] | The `meta.json` artifact and its serialization |
//! | [`config`] | Optional `navmeta.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting for compile events |
//!
//! # Design Decisions
//!
//! ## Directories Come From Pages, Not Titles
//!
//! Group titles are display text and are translated per language, so they
//! cannot name directories. A group's directory is instead the directory of
//! the first page reachable inside it, and a nested group is listed in its
//! parent by that directory's name. Renaming a group in `docs.json` changes
//! its sidebar title and nothing else.
//!
//! ## First Emission Wins
//!
//! Several traversal paths can land on the same directory. Exactly one file is
//! written per directory per run, by whichever path gets there first, so the
//! output is a pure function of the descriptor and the directory tree. Running
//! twice produces identical files.
//!
//! ## Missing Directories Are Not Errors
//!
//! The navigation is often edited ahead of the content. A directory that does
//! not exist yet is reported and skipped rather than failing the run.
//! `navmeta check` is the strict mode for CI: it exits non-zero when any
//! metadata file is stale or missing.

pub mod compile;
pub mod config;
pub mod descriptor;
pub mod naming;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
