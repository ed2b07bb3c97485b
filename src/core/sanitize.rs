// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "12,345" → 12345. Whitespace around the number is ignored; anything else fails.
pub fn parse_count(s: &str) -> Option<u64> {
    let digits: String = s.trim().chars().filter(|&c| c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Subject banner text: the herald separates name / guild / realm with
/// stray `>` `<` markup remnants; turn those into " - ".
pub fn normalize_description(s: &str) -> String {
    let flat = normalize_ws(s);
    normalize_ws(&flat.replace("> ", " - ").replace(" <", " - "))
}

/// Footer fragments → one line, stamped with the herald's timezone.
pub fn normalize_last_updated<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let joined = parts.into_iter().collect::<Vec<_>>().join(" ");
    let text = normalize_ws(&joined);
    if text.is_empty() { s!("(UTC)") } else { format!("{text} (UTC)") }
}
