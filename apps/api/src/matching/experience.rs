//! Experience estimation — turns free-text experience entries into a total
//! years-of-experience figure.

use std::sync::OnceLock;

use regex::Regex;

fn year_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{4})\D+(\d{4})").expect("valid pattern"))
}

fn explicit_years_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*years?").expect("valid pattern"))
}

/// Estimates total years of experience across free-text entries.
///
/// Per entry, the first matching pattern wins — never both:
/// 1. a "YYYY ... YYYY" range adds the year delta,
/// 2. an explicit "N years" phrase adds N,
/// 3. otherwise the entry counts as one year.
pub fn estimate_years(entries: &[String]) -> u32 {
    entries.iter().map(|entry| entry_years(entry)).sum()
}

fn entry_years(entry: &str) -> u32 {
    if let Some(caps) = year_range_re().captures(entry) {
        let start: i64 = caps[1].parse().unwrap_or(0);
        let end: i64 = caps[2].parse().unwrap_or(0);
        // Backwards ranges floor at zero rather than going negative
        return (end - start).max(0) as u32;
    }

    if let Some(caps) = explicit_years_re().captures(entry) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return n;
        }
    }

    1
}
