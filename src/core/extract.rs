use crate::core::aggregator::{DomainAggregator, ExtractReport};
use crate::domain::model::DomainSet;
use crate::domain::ports::SourceTree;
use crate::utils::error::{ExtractError, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

pub struct ExtractEngine<T: SourceTree> {
    tree: T,
}

impl<T: SourceTree> ExtractEngine<T> {
    pub fn new(tree: T) -> Self {
        Self { tree }
    }

    /// Aggregate every root, in order. Roots never fail the run.
    pub fn run<P: AsRef<Path>>(&self, roots: &[P]) -> ExtractReport {
        let start = Instant::now();
        let mut aggregator = DomainAggregator::new();

        for root in roots {
            let root = root.as_ref();
            tracing::info!("🔍 Scanning {}", root.display());
            aggregator.collect_from_dir(&self.tree, root);
        }

        let report = aggregator.finish(start.elapsed().as_millis() as u64);
        tracing::info!(
            "✅ {} unique domains from {} files ({} skipped)",
            report.domains.len(),
            report.stats.files_read,
            report.stats.files_skipped
        );
        report
    }
}

/// One `||domain^` per line, sorted, each newline-terminated.
pub fn write_rules<W: Write>(domains: &DomainSet, writer: &mut W) -> io::Result<()> {
    for rule in domains.rules() {
        writeln!(writer, "{}", rule)?;
    }
    writer.flush()
}

/// Write to `output`, or to stdout when `None`.
pub fn emit_rules(domains: &DomainSet, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let output_error = |source: io::Error| ExtractError::OutputError {
                path: path.display().to_string(),
                source,
            };

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(output_error)?;
            }

            let file = fs::File::create(path).map_err(output_error)?;
            write_rules(domains, &mut BufWriter::new(file)).map_err(output_error)?;
            tracing::info!("📁 Rules saved to: {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            write_rules(domains, &mut BufWriter::new(stdout.lock())).map_err(|source| {
                ExtractError::OutputError {
                    path: "<stdout>".to_string(),
                    source,
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DomainToken;

    #[test]
    fn test_write_rules_format() {
        let mut set = DomainSet::new();
        set.insert(DomainToken::parse("b.com").unwrap());
        set.insert(DomainToken::parse("a.com").unwrap());

        let mut out = Vec::new();
        write_rules(&set, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "||a.com^\n||b.com^\n");
    }

    #[test]
    fn test_write_rules_empty_set() {
        let mut out = Vec::new();
        write_rules(&DomainSet::new(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_rules_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/out/upstream-domains.txt");

        let mut set = DomainSet::new();
        set.insert(DomainToken::parse("ads.example.com").unwrap());
        emit_rules(&set, Some(&path)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "||ads.example.com^\n"
        );
    }
}
