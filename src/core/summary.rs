use crate::domain::model::RunStats;
use crate::utils::error::Result;

pub fn render_json(stats: &RunStats) -> Result<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}

pub fn render_text(stats: &RunStats) -> String {
    let generated = stats
        .generated_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    [
        format!("📊 Run summary ({})", generated),
        format!(
            "   Files:      {} read, {} skipped",
            stats.files_read, stats.files_skipped
        ),
        format!(
            "   Lines:      {} total, {} blank, {} comments",
            stats.total_lines, stats.blank_lines, stats.comment_lines
        ),
        format!(
            "   Extracted:  {} adblock, {} hosts, {} plain",
            stats.adblock_rules, stats.hosts_rules, stats.plain_domains
        ),
        format!(
            "   Discarded:  {} malformed adblock, {} unrecognized",
            stats.malformed_adblock, stats.unrecognized_lines
        ),
        format!(
            "   Domains:    {} unique, {} duplicates ({:.2}%)",
            stats.unique_domains, stats.duplicate_domains, stats.deduplication_rate
        ),
        format!("   Time:       {}ms", stats.elapsed_ms),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LineClass;

    fn sample() -> RunStats {
        let mut stats = RunStats::default();
        stats.files_read = 2;
        stats.record_line(&LineClass::Adblock("a.com"));
        stats.record_line(&LineClass::Plain("a.com"));
        stats.record_line(&LineClass::MalformedAdblock);
        stats.finish(1, 3);
        stats
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample());
        assert!(text.contains("2 read, 0 skipped"));
        assert!(text.contains("1 adblock, 0 hosts, 1 plain"));
        assert!(text.contains("1 malformed adblock"));
        assert!(text.contains("1 unique, 1 duplicates (50.00%)"));
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(json["files_read"], 2);
        assert_eq!(json["unique_domains"], 1);
        assert_eq!(json["duplicate_domains"], 1);
        assert!(json["generated_at"].is_string());
    }
}
