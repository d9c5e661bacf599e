use crate::domain::grammar::{is_domain_token, leading_domain_token};
use crate::domain::model::LineClass;

/// Null/loopback prefixes accepted in hosts-style lines, in match order.
const HOSTS_PREFIXES: [&str; 4] = ["0.0.0.0", "127.0.0.1", "::1", "::"];

/// Whitespace for trimming and the hosts separator. Includes the ASCII
/// information separators U+001C..=U+001F, which upstream tooling strips.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Classify one raw line.
///
/// The line is trimmed first. Empty lines and lines starting with `!` or `#`
/// are skipped. The remaining rules are tried in order and the first match
/// wins: adblock `||domain^`, hosts `<ip> domain ...`, malformed adblock
/// (`||...^` that failed the grammar, discarded) and then a bare domain.
pub fn classify_line(raw: &str) -> LineClass<'_> {
    let line = raw.trim_matches(is_separator);

    if line.is_empty() {
        return LineClass::Blank;
    }
    if line.starts_with('!') || line.starts_with('#') {
        return LineClass::Comment;
    }

    if let Some(domain) = adblock_domain(line) {
        return LineClass::Adblock(domain);
    }

    if let Some(domain) = hosts_domain(line) {
        return LineClass::Hosts(domain);
    }

    if line.starts_with("||") && line.ends_with('^') {
        return LineClass::MalformedAdblock;
    }

    if !line.contains(&[' ', '\t'][..]) && is_domain_token(line) {
        return LineClass::Plain(line);
    }

    LineClass::Unrecognized
}

fn adblock_domain(line: &str) -> Option<&str> {
    line.strip_prefix("||")
        .and_then(|rest| rest.strip_suffix('^'))
        .filter(|domain| is_domain_token(domain))
}

fn hosts_domain(line: &str) -> Option<&str> {
    HOSTS_PREFIXES.iter().find_map(|prefix| {
        let rest = line.strip_prefix(*prefix)?;
        if !rest.starts_with(is_separator) {
            return None;
        }
        leading_domain_token(rest.trim_start_matches(is_separator))
    })
}
