use crate::domain::grammar;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// A lowercase ASCII domain accepted by the domain grammar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DomainToken(String);

impl DomainToken {
    /// Full-match parse; `None` unless the whole input is a domain token.
    pub fn parse(s: &str) -> Option<Self> {
        grammar::is_domain_token(s).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_rule(&self) -> Rule<'_> {
        Rule(self)
    }
}

impl Borrow<str> for DomainToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical `||domain^` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<'a>(&'a DomainToken);

impl fmt::Display for Rule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "||{}^", self.0)
    }
}

/// Unique domains, iterated in byte-lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSet {
    domains: BTreeSet<DomainToken>,
}

impl DomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the domain was already present.
    pub fn insert(&mut self, domain: DomainToken) -> bool {
        self.domains.insert(domain)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainToken> {
        self.domains.iter()
    }

    pub fn rules(&self) -> impl Iterator<Item = Rule<'_>> {
        self.iter().map(DomainToken::to_rule)
    }
}

/// Verdict for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Comment,
    Adblock(&'a str),
    Hosts(&'a str),
    /// `||...^` that failed the grammar; never reinterpreted.
    MalformedAdblock,
    Plain(&'a str),
    Unrecognized,
}

impl<'a> LineClass<'a> {
    pub fn domain(&self) -> Option<&'a str> {
        match *self {
            LineClass::Adblock(d) | LineClass::Hosts(d) | LineClass::Plain(d) => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Read {
        path: PathBuf,
        lines: usize,
        extracted: usize,
    },
    Skipped {
        path: PathBuf,
        reason: String,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Read { path, .. } | FileOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FileOutcome::Skipped { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub files_read: usize,
    pub files_skipped: usize,
    pub total_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub adblock_rules: usize,
    pub hosts_rules: usize,
    pub plain_domains: usize,
    pub malformed_adblock: usize,
    pub unrecognized_lines: usize,
    pub unique_domains: usize,
    pub duplicate_domains: usize,
    /// Percentage of extracted domains dropped as duplicates.
    pub deduplication_rate: f64,
    pub elapsed_ms: u64,
    pub generated_at: Option<DateTime<Utc>>,
}

impl RunStats {
    pub fn record_line(&mut self, class: &LineClass<'_>) {
        self.total_lines += 1;
        match class {
            LineClass::Blank => self.blank_lines += 1,
            LineClass::Comment => self.comment_lines += 1,
            LineClass::Adblock(_) => self.adblock_rules += 1,
            LineClass::Hosts(_) => self.hosts_rules += 1,
            LineClass::MalformedAdblock => self.malformed_adblock += 1,
            LineClass::Plain(_) => self.plain_domains += 1,
            LineClass::Unrecognized => self.unrecognized_lines += 1,
        }
    }

    pub fn extracted(&self) -> usize {
        self.adblock_rules + self.hosts_rules + self.plain_domains
    }

    pub(crate) fn finish(&mut self, unique_domains: usize, elapsed_ms: u64) {
        self.unique_domains = unique_domains;
        self.duplicate_domains = self.extracted().saturating_sub(unique_domains);
        self.deduplication_rate = if self.extracted() > 0 {
            (self.duplicate_domains as f64 / self.extracted() as f64) * 100.0
        } else {
            0.0
        };
        self.elapsed_ms = elapsed_ms;
        self.generated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_display() {
        let domain = DomainToken::parse("ads.example.com").unwrap();
        assert_eq!(domain.to_rule().to_string(), "||ads.example.com^");
    }

    #[test]
    fn test_domain_token_rejects_non_grammar_input() {
        assert!(DomainToken::parse("Example.com").is_none());
        assert!(DomainToken::parse("bad*domain.com").is_none());
        assert!(DomainToken::parse("example.com/path").is_none());
    }

    #[test]
    fn test_domain_set_is_unique_and_sorted() {
        let mut set = DomainSet::new();
        for d in ["b.com", "a.com", "b.com", "a-b.com"] {
            set.insert(DomainToken::parse(d).unwrap());
        }
        let rules: Vec<String> = set.rules().map(|r| r.to_string()).collect();
        assert_eq!(rules, vec!["||a-b.com^", "||a.com^", "||b.com^"]);
        assert!(set.contains("a.com"));
        assert!(!set.contains("c.com"));

        let domains: Vec<&str> = set.iter().map(DomainToken::as_str).collect();
        assert_eq!(domains, vec!["a-b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_stats_deduplication_rate() {
        let mut stats = RunStats::default();
        for _ in 0..3 {
            stats.record_line(&LineClass::Adblock("a.com"));
        }
        stats.record_line(&LineClass::Hosts("b.com"));
        stats.record_line(&LineClass::Comment);
        stats.finish(2, 5);

        assert_eq!(stats.total_lines, 5);
        assert_eq!(stats.extracted(), 4);
        assert_eq!(stats.duplicate_domains, 2);
        assert!((stats.deduplication_rate - 50.0).abs() < f64::EPSILON);
        assert!(stats.generated_at.is_some());
    }
}
