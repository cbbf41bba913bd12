//! CLI output formatting.
//!
//! Each compile event maps to one line. Languages head their block and the
//! per-directory lines are indented under them:
//!
//! ```text
//! Processing language: en
//!   Created: docs/en/use-dify/getting-started/meta.json
//!   Skip (dir not found): en/self-host/legacy
//!   Created: docs/en/meta.json
//!
//! Done! Wrote 9 metadata files, skipped 1 missing directory
//! ```
//!
//! In check mode the `Created:` lines become status lines:
//!
//! ```text
//!   Up to date: docs/en/meta.json
//!   Stale: docs/en/use-dify/meta.json
//!   Missing: docs/en/api-reference/meta.json
//! ```
//!
//! `format_*` functions are pure and return lines for testability; `print_*`
//! wrappers write them to stdout.

use crate::compile::{CompileEvent, CompileReport, MetaStatus};

fn status_label(status: MetaStatus) -> &'static str {
    match status {
        MetaStatus::UpToDate => "Up to date",
        MetaStatus::Stale => "Stale",
        MetaStatus::Missing => "Missing",
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Format a single compile event.
///
/// A language header is preceded by a blank line unless it is the first.
pub fn format_event(event: &CompileEvent, first: bool) -> Vec<String> {
    match event {
        CompileEvent::LanguageStarted { language } => {
            let header = format!("Processing language: {language}");
            if first {
                vec![header]
            } else {
                vec![String::new(), header]
            }
        }
        CompileEvent::Written { path, .. } => vec![format!("  Created: {}", path.display())],
        CompileEvent::Checked { path, status, .. } => {
            vec![format!("  {}: {}", status_label(*status), path.display())]
        }
        CompileEvent::SkippedMissing { dir } => vec![format!("  Skip (dir not found): {dir}")],
    }
}

/// Format the closing summary for a `generate` run.
pub fn format_generate_summary(report: &CompileReport) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Done! Wrote {}, skipped {}",
            plural(report.emitted.len(), "metadata file", "metadata files"),
            plural(report.skipped.len(), "missing directory", "missing directories"),
        ),
    ]
}

/// Format the closing summary for a `check` run.
pub fn format_check_summary(report: &CompileReport) -> Vec<String> {
    let summary = if report.is_in_sync() {
        format!(
            "Done! {} up to date",
            plural(report.emitted.len(), "metadata file", "metadata files")
        )
    } else {
        format!(
            "Out of sync: {} of {} need regenerating (run `navmeta generate`)",
            report.out_of_sync.len(),
            plural(report.emitted.len(), "metadata file", "metadata files"),
        )
    };
    vec![String::new(), summary]
}

/// Stateful printer for streaming events as they arrive.
#[derive(Debug, Default)]
pub struct EventPrinter {
    seen_language: bool,
}

impl EventPrinter {
    pub fn print(&mut self, event: &CompileEvent) {
        let first = !self.seen_language;
        if matches!(event, CompileEvent::LanguageStarted { .. }) {
            self.seen_language = true;
        }
        for line in format_event(event, first) {
            println!("{line}");
        }
    }
}

pub fn print_generate_summary(report: &CompileReport) {
    for line in format_generate_summary(report) {
        println!("{line}");
    }
}

pub fn print_check_summary(report: &CompileReport) {
    for line in format_check_summary(report) {
        println!("{line}");
    }
}
