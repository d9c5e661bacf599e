//! Domain token grammar: `[a-z0-9][a-z0-9.-]*\.[a-z]{2,}`.
//!
//! Matching is done by scanning byte classes. `*`, `/`, uppercase letters and
//! non-ASCII bytes are outside every class, so any line carrying them fails.

#[inline]
fn is_leading_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

#[inline]
fn is_domain_byte(b: u8) -> bool {
    is_leading_byte(b) || b == b'-' || b == b'.'
}

/// Whole-string match.
pub fn is_domain_token(s: &str) -> bool {
    let bytes = s.as_bytes();

    match bytes.first() {
        Some(&b) if is_leading_byte(b) => {}
        _ => return false,
    }

    if !bytes.iter().all(|&b| is_domain_byte(b)) {
        return false;
    }

    // TLD has no dots, so it must follow the last one
    match s.rfind('.') {
        Some(dot) => {
            let tld = &bytes[dot + 1..];
            tld.len() >= 2 && tld.iter().all(u8::is_ascii_lowercase)
        }
        None => false,
    }
}

/// Longest prefix of `s` that is a domain token and ends on a word boundary
/// (next char is neither alphanumeric nor `_`, or end of input).
///
/// ```
/// use upstream_domains::domain::grammar::leading_domain_token;
///
/// assert_eq!(leading_domain_token("example.org alias"), Some("example.org"));
/// assert_eq!(leading_domain_token("a.example.com.evil9"), Some("a.example.com"));
/// assert_eq!(leading_domain_token("example.com_x"), None);
/// ```
pub fn leading_domain_token(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();

    match bytes.first() {
        Some(&b) if is_leading_byte(b) => {}
        _ => return None,
    }

    let run = bytes
        .iter()
        .position(|&b| !is_domain_byte(b))
        .unwrap_or(bytes.len());

    // 由右至左嘗試每個點，取第一個合格的結尾
    (1..run).rev().filter(|&i| bytes[i] == b'.').find_map(|dot| {
        let letters = bytes[dot + 1..run]
            .iter()
            .take_while(|b| b.is_ascii_lowercase())
            .count();
        let end = dot + 1 + letters;
        (letters >= 2 && at_word_boundary(&s[end..])).then(|| &s[..end])
    })
}

fn at_word_boundary(rest: &str) -> bool {
    rest.chars()
        .next()
        .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
}
