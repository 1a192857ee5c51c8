//! Response generation — selects and fills a template for a classified intent.
//!
//! Content-independent intents draw uniformly from their pool via the injected
//! random source; data-dependent intents fill slots deterministically and fall
//! back to a generic phrasing when the relevant profile data is empty. Every
//! path returns a grammatically complete, non-empty sentence.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dialogue::intent::Intent;
use crate::dialogue::templates;
use crate::models::candidate::CandidateProfile;
use crate::models::conversation::ConversationTurn;
use crate::models::job::JobPosting;

/// Generates a single response string for a classified question.
///
/// `history` is accepted for interface symmetry with a stateful dialogue
/// system and is not read. The random source is injected so callers can pass
/// a seeded generator and assert over the full template space.
pub fn generate<R: Rng + ?Sized>(
    intent: Intent,
    job: &JobPosting,
    candidate: &CandidateProfile,
    _history: &[ConversationTurn],
    rng: &mut R,
) -> String {
    match intent {
        Intent::Experience => experience_answer(job, candidate),
        Intent::Skills => skills_answer(job, candidate),
        Intent::Salary => salary_answer(candidate),
        Intent::WhyInterested => templates::WHY_INTERESTED_TEMPLATE
            .replace("{title}", title_or_default(job))
            .replace("{company}", company_or_default(job)),
        Intent::Generic => templates::GENERIC_TEMPLATE.replace("{title}", title_or_default(job)),
        Intent::Weakness => pick(templates::WEAKNESS_POOL, rng),
        Intent::Strength => pick(templates::STRENGTH_POOL, rng),
        Intent::Teamwork => pick(templates::TEAMWORK_POOL, rng),
        Intent::Project => pick(templates::PROJECT_POOL, rng),
        Intent::Availability => pick(templates::AVAILABILITY_POOL, rng),
        Intent::CandidateQuestion => pick(templates::CANDIDATE_QUESTION_POOL, rng),
    }
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng)
        .copied()
        .unwrap_or("I'd be glad to talk through that in more detail.")
        .to_string()
}

fn experience_answer(job: &JobPosting, candidate: &CandidateProfile) -> String {
    if candidate.experience_entries.is_empty() {
        return templates::EXPERIENCE_FALLBACK.replace("{title}", title_or_default(job));
    }
    templates::EXPERIENCE_TEMPLATE
        .replace("{entries}", &candidate.experience_entries.join(", "))
        .replace("{title}", title_or_default(job))
}

fn skills_answer(job: &JobPosting, candidate: &CandidateProfile) -> String {
    if candidate.skills.is_empty() {
        return templates::SKILLS_FALLBACK.to_string();
    }
    templates::SKILLS_TEMPLATE
        .replace("{skills}", &candidate.skills.join(", "))
        .replace("{company}", company_or_default(job))
}

fn salary_answer(candidate: &CandidateProfile) -> String {
    let salary = candidate.preferences.salary;
    if salary.min == 0 && salary.max == 0 {
        return templates::SALARY_FALLBACK.to_string();
    }
    templates::SALARY_TEMPLATE
        .replace("{min}", &format_salary(salary.min))
        .replace("{max}", &format_salary(salary.max))
}

fn title_or_default(job: &JobPosting) -> &str {
    if job.title.trim().is_empty() {
        "advertised"
    } else {
        job.title.as_str()
    }
}

fn company_or_default(job: &JobPosting) -> &str {
    if job.company.trim().is_empty() {
        "your company"
    } else {
        job.company.as_str()
    }
}

/// Formats a salary figure with thousands separators, e.g. 50000 → "$50,000".
fn format_salary(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
