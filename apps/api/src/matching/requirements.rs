//! Requirement extraction — derives a structured requirement set from a raw
//! job description. Pure string analysis, no side effects.

use std::sync::OnceLock;

use regex::Regex;

/// Skill vocabulary scanned against job descriptions: languages, platforms,
/// and soft skills. Read-only; a term counts when it appears anywhere in the
/// lower-cased description.
pub const SKILL_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "rust",
    "c++",
    "sql",
    "react",
    "angular",
    "vue",
    "node",
    "html",
    "css",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "mongodb",
    "postgresql",
    "rest",
    "graphql",
    "agile",
    "leadership",
    "communication",
    "teamwork",
];

/// Requirements derived from a single job description.
/// Created fresh on every analysis call; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRequirements {
    /// Lower-cased vocabulary terms found in the description, in vocabulary order.
    pub skills: Vec<String>,
    /// First "N years experience" figure; 0 when the description states none.
    pub experience_years: u32,
}

fn experience_years_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*\+?\s*years?\s*(?:of\s*)?experience").expect("valid pattern")
    })
}

/// Extracts skills and a required-years figure from a free-text description.
/// Empty input yields empty requirements, never an error.
pub fn extract(description: &str) -> JobRequirements {
    let text = description.to_lowercase();

    let skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect();

    let experience_years = experience_years_re()
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    JobRequirements {
        skills,
        experience_years,
    }
}
