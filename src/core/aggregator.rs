use crate::core::classifier::classify_line;
use crate::domain::model::{DomainSet, DomainToken, FileOutcome, RunStats};
use crate::domain::ports::SourceTree;
use std::path::Path;

/// Accumulates domains for one run. Never shared between runs.
#[derive(Debug, Default)]
pub struct DomainAggregator {
    domains: DomainSet,
    stats: RunStats,
    outcomes: Vec<FileOutcome>,
}

#[derive(Debug)]
pub struct ExtractReport {
    pub domains: DomainSet,
    pub outcomes: Vec<FileOutcome>,
    pub stats: RunStats,
}

impl ExtractReport {
    pub fn skipped(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_skipped())
    }
}

impl DomainAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line; returns the domain it contributed, if any.
    pub fn ingest_line<'a>(&mut self, raw: &'a str) -> Option<&'a str> {
        let class = classify_line(raw);
        self.stats.record_line(&class);

        let domain = class.domain()?;
        if let Some(token) = DomainToken::parse(domain) {
            self.domains.insert(token);
        }
        Some(domain)
    }

    /// Returns `(lines, extracted)` for the text.
    pub fn ingest_text(&mut self, text: &str) -> (usize, usize) {
        let mut lines = 0;
        let mut extracted = 0;

        // \n, \r\n 以及單獨的 \r 都視為換行；結尾的換行不產生空行
        let lines_iter = text
            .split_terminator('\n')
            .flat_map(|l| l.strip_suffix('\r').unwrap_or(l).split('\r'));
        for line in lines_iter {
            lines += 1;
            if self.ingest_line(line).is_some() {
                extracted += 1;
            }
        }

        (lines, extracted)
    }

    pub fn ingest_file<T: SourceTree>(&mut self, tree: &T, path: &Path) -> &FileOutcome {
        let outcome = match tree.read_file(path) {
            Ok(bytes) => {
                let text = decode_utf8_dropping_invalid(&bytes);
                let (lines, extracted) = self.ingest_text(&text);
                self.stats.files_read += 1;
                tracing::debug!(
                    "📄 {}: {} lines, {} domains",
                    path.display(),
                    lines,
                    extracted
                );
                FileOutcome::Read {
                    path: path.to_path_buf(),
                    lines,
                    extracted,
                }
            }
            Err(e) => {
                self.stats.files_skipped += 1;
                tracing::debug!("⏭️  Skipping unreadable file {}: {}", path.display(), e);
                FileOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        };

        self.outcomes.push(outcome);
        &self.outcomes[self.outcomes.len() - 1]
    }

    /// Visit every file under `root`. A missing root contributes nothing.
    pub fn collect_from_dir<T: SourceTree>(&mut self, tree: &T, root: &Path) {
        let files = tree.files_under(root);
        if files.is_empty() {
            tracing::debug!("📁 No source files under {}", root.display());
        }

        for path in &files {
            self.ingest_file(tree, path);
        }
    }

    pub fn domains(&self) -> &DomainSet {
        &self.domains
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn finish(mut self, elapsed_ms: u64) -> ExtractReport {
        self.stats.finish(self.domains.len(), elapsed_ms);
        ExtractReport {
            domains: self.domains,
            outcomes: self.outcomes,
            stats: self.stats,
        }
    }
}

/// UTF-8 decode that drops undecodable byte sequences instead of replacing them.
pub fn decode_utf8_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
