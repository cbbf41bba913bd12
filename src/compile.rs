//! Navigation-to-metadata compilation.
//!
//! Walks the navigation descriptor once and writes a `meta.json` into every
//! directory the tree implies. Per language:
//!
//! 1. Each dropdown's directory name is appended to the language root's
//!    entries, then its groups are processed recursively.
//! 2. The language root (`en/`, `zh/`, ...) gets its metadata file.
//! 3. Each existing dropdown directory (`en/use-dify/`) gets a file listing
//!    the subdirectories its top-level groups live in.
//!
//! ## Group Directories
//!
//! A group's directory is the directory of the first page reachable
//! depth-first through its children. Its entries are, in declaration order,
//! the base name of each direct page and, for each nested group, the name of
//! the subdirectory that group resolves to. Nested groups are compiled before
//! their parent is written.
//!
//! ## Once Per Directory
//!
//! A directory may be reachable through several paths (a group sharing its
//! parent's directory, a dropdown directory that is also some group's
//! directory). The first emission wins; later emissions for the same
//! directory are ignored. Directories that do not exist on disk are reported
//! and skipped without aborting the run, and are not remembered, so a later
//! emission reports them again.
//!
//! In [`Mode::Check`] nothing is written: each file that would be written is
//! compared with what is on disk instead.

use crate::config::MetaConfig;
use crate::descriptor::{
    Dropdown, Group, LanguageConfig, NavItem, NavigationDescriptor, first_page,
};
use crate::naming::{
    dropdown_directory_name, page_base_name, page_directory, subdirectory_name,
    top_level_subdirectory,
};
use crate::types::MetaFile;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write every metadata file, overwriting existing ones.
    Write,
    /// Compare every metadata file with the one on disk; write nothing.
    Check,
}

/// How an existing metadata file compares with the generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Progress reported while compiling, in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileEvent {
    LanguageStarted {
        language: String,
    },
    Written {
        dir: String,
        path: PathBuf,
    },
    Checked {
        dir: String,
        path: PathBuf,
        status: MetaStatus,
    },
    /// The directory a metadata file belongs in does not exist.
    SkippedMissing {
        dir: String,
    },
}

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct CompileReport {
    /// Directories that received a metadata file (or were checked), in order.
    pub emitted: Vec<String>,
    /// Directories skipped because they do not exist. May repeat.
    pub skipped: Vec<String>,
    /// Check mode only: directories whose metadata is stale or missing.
    pub out_of_sync: Vec<String>,
}

impl CompileReport {
    pub fn is_in_sync(&self) -> bool {
        self.out_of_sync.is_empty()
    }
}

/// Compile every language in `descriptor` against the docs tree at `root`.
///
/// `on_event` is called for every [`CompileEvent`] as it happens.
pub fn compile(
    descriptor: &NavigationDescriptor,
    root: &Path,
    config: &MetaConfig,
    mode: Mode,
    on_event: impl FnMut(&CompileEvent),
) -> Result<CompileReport, CompileError> {
    let mut compiler = Compiler::new(root, config, mode, on_event);
    for language in descriptor.languages() {
        compiler.compile_language(language)?;
    }
    Ok(compiler.report)
}

/// Single-pass compiler state.
///
/// `emitted` holds every directory that already received its metadata file
/// during this run.
struct Compiler<'a, F> {
    root: &'a Path,
    config: &'a MetaConfig,
    mode: Mode,
    emitted: HashSet<String>,
    report: CompileReport,
    on_event: F,
}

impl<'a, F: FnMut(&CompileEvent)> Compiler<'a, F> {
    fn new(root: &'a Path, config: &'a MetaConfig, mode: Mode, on_event: F) -> Self {
        Self {
            root,
            config,
            mode,
            emitted: HashSet::new(),
            report: CompileReport::default(),
            on_event,
        }
    }

    fn compile_language(&mut self, language: &LanguageConfig) -> Result<(), CompileError> {
        let lang = language.language.as_str();
        (self.on_event)(&CompileEvent::LanguageStarted {
            language: lang.to_string(),
        });

        let mut root_meta = MetaFile::new(self.config.root_title(lang));
        for dropdown in &language.dropdowns {
            root_meta.push_page(&dropdown_directory_name(&dropdown.dropdown));
            self.process_dropdown(dropdown)?;
        }
        self.emit(lang, root_meta)?;

        for dropdown in &language.dropdowns {
            let dir = format!("{lang}/{}", dropdown_directory_name(&dropdown.dropdown));
            if !self.root.join(&dir).is_dir() {
                continue;
            }
            let listing = dropdown_listing(dropdown);
            if !listing.pages.is_empty() {
                self.emit(&dir, listing)?;
            }
        }
        Ok(())
    }

    fn process_dropdown(&mut self, dropdown: &Dropdown) -> Result<(), CompileError> {
        for group in dropdown.top_level_groups() {
            self.process_group(group)?;
        }
        Ok(())
    }

    fn process_group(&mut self, group: &Group) -> Result<(), CompileError> {
        let children = group.children();
        let Some(first) = first_page(children) else {
            return Ok(());
        };
        let dir = page_directory(first);

        let mut meta = MetaFile::new(group.title());
        for item in children {
            match item {
                NavItem::Page(path) => {
                    meta.push_page(page_base_name(path));
                }
                NavItem::Group(nested) => {
                    let Some(nested_first) = first_page(nested.children()) else {
                        continue;
                    };
                    meta.push_page(subdirectory_name(dir, page_directory(nested_first)));
                    self.process_group(nested)?;
                }
            }
        }

        if !meta.pages.is_empty() {
            self.emit(dir, meta)?;
        }
        Ok(())
    }

    /// Write (or check) the metadata file for `dir` unless it was already handled.
    fn emit(&mut self, dir: &str, meta: MetaFile) -> Result<(), CompileError> {
        if self.emitted.contains(dir) {
            return Ok(());
        }

        let dir_path = self.root.join(dir);
        if !dir_path.is_dir() {
            self.report.skipped.push(dir.to_string());
            (self.on_event)(&CompileEvent::SkippedMissing {
                dir: dir.to_string(),
            });
            return Ok(());
        }

        self.emitted.insert(dir.to_string());
        let path = dir_path.join(&self.config.meta_file);
        let contents = meta.to_json()?;

        let event = match self.mode {
            Mode::Write => {
                fs::write(&path, &contents).map_err(|source| CompileError::Write {
                    path: path.clone(),
                    source,
                })?;
                CompileEvent::Written {
                    dir: dir.to_string(),
                    path,
                }
            }
            Mode::Check => {
                let status = compare_existing(&path, &contents)?;
                if status != MetaStatus::UpToDate {
                    self.report.out_of_sync.push(dir.to_string());
                }
                CompileEvent::Checked {
                    dir: dir.to_string(),
                    path,
                    status,
                }
            }
        };
        self.report.emitted.push(dir.to_string());
        (self.on_event)(&event);
        Ok(())
    }
}

/// Metadata for a dropdown's own directory: its label and the subdirectory of
/// each top-level group, in first-seen order.
fn dropdown_listing(dropdown: &Dropdown) -> MetaFile {
    let mut meta = MetaFile::new(dropdown.dropdown.as_str());
    for group in dropdown.top_level_groups() {
        if let Some(subdir) = first_page(group.children()).and_then(top_level_subdirectory) {
            meta.push_page(subdir);
        }
    }
    meta
}

fn compare_existing(path: &Path, expected: &str) -> Result<MetaStatus, CompileError> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == expected => Ok(MetaStatus::UpToDate),
        Ok(_) => Ok(MetaStatus::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(MetaStatus::Missing),
        Err(source) => Err(CompileError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
