//! Factor matchers — four independent comparators, each scoring 0–100.
//!
//! Neutral defaults live here: an absent constraint scores 100 (skills,
//! experience) and an absent preference scores 50 (location, salary).
//! Parsing ambiguity degrades to the neutral score, never to an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::candidate::SalaryExpectation;

/// Counts required skills covered by the candidate and returns the coverage
/// ratio as 0–100. A requirement is covered when either side contains the
/// other, case-insensitive.
pub fn skills_match(required: &[String], candidate: &[String]) -> u32 {
    if required.is_empty() {
        return 100; // no constraint, full match
    }

    let matches = required
        .iter()
        .filter(|req| has_skill(candidate, req))
        .count();

    ((matches as f64 / required.len() as f64) * 100.0).round() as u32
}

/// True when any candidate skill is a substring of the requirement or vice versa.
pub fn has_skill(candidate: &[String], required: &str) -> bool {
    let req = required.to_lowercase();
    candidate.iter().any(|skill| {
        let skill = skill.to_lowercase();
        skill.contains(&req) || req.contains(&skill)
    })
}

/// Scores candidate years against the requirement, capped at 100.
pub fn experience_match(required_years: u32, candidate_years: u32) -> u32 {
    if required_years == 0 {
        return 100;
    }
    let ratio = candidate_years as f64 / required_years as f64;
    ((ratio * 100.0).round() as u32).min(100)
}

/// Scores the job location against the candidate's stated preferences.
/// Location is a soft constraint: a miss penalizes to 30, never to zero.
pub fn location_match(job_location: &str, preferred: &[String]) -> u32 {
    if preferred.is_empty() {
        return 50; // no stated preference
    }

    let job = job_location.to_lowercase();

    let direct_hit = preferred.iter().any(|loc| {
        let loc = loc.to_lowercase();
        job.contains(&loc) || loc.contains(&job)
    });
    if direct_hit {
        return 100;
    }

    let remote_job = job.contains("remote");
    let remote_preference = preferred
        .iter()
        .any(|loc| loc.to_lowercase().contains("remote"));
    if remote_job && remote_preference {
        return 100;
    }

    30
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d[\d,]*").expect("valid pattern"))
}

/// Scores the job's advertised salary text against the candidate's expected band.
///
/// Absent preferences and unparsable ranges are both neutral 50. Overlapping
/// bands score by how much of the expected band the overlap covers; disjoint
/// bands degrade from neutral toward zero with the relative gap.
pub fn salary_match(job_salary_text: &str, preferred: SalaryExpectation) -> u32 {
    if preferred.min == 0 && preferred.max == 0 {
        return 50; // no stated preference
    }

    let Some((job_min, job_max)) = parse_salary_range(job_salary_text) else {
        return 50; // advertised range not parsable
    };

    let overlap_low = job_min.max(preferred.min);
    let overlap_high = job_max.min(preferred.max);

    if overlap_low <= overlap_high {
        let preferred_size = preferred.max - preferred.min;
        if preferred_size <= 0 {
            return 100; // point preference inside the advertised band
        }
        let coverage = (overlap_high - overlap_low) as f64 / preferred_size as f64;
        return ((coverage * 100.0).round() as u32).min(100);
    }

    // Disjoint: gap between the nearer edges, normalized against the
    // preferred midpoint, eats into the neutral score.
    let gap = if job_min > preferred.max {
        job_min - preferred.max
    } else {
        preferred.min - job_max
    };
    let midpoint = (preferred.min + preferred.max) as f64 / 2.0;
    if midpoint <= 0.0 {
        return 0;
    }
    let gap_pct = (gap as f64 / midpoint) * 100.0;
    (50.0 - gap_pct).max(0.0).round() as u32
}

/// Parses the first two numeric groups out of a free-text salary range.
/// Commas are thousands separators, not group boundaries.
fn parse_salary_range(text: &str) -> Option<(i64, i64)> {
    let mut numbers = number_re()
        .find_iter(text)
        .filter_map(|m| m.as_str().replace(',', "").parse::<i64>().ok());
    let first = numbers.next()?;
    let second = numbers.next()?;
    Some((first, second))
}
