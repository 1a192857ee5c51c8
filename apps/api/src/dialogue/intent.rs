//! Intent classification — assigns a free-text question to a fixed intent set
//! via ordered keyword groups.

use serde::{Deserialize, Serialize};

/// Question intents, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Experience,
    Skills,
    Salary,
    Weakness,
    Strength,
    WhyInterested,
    Teamwork,
    Project,
    Availability,
    CandidateQuestion,
    Generic,
}

/// Keyword groups tested in priority order — the first group with any keyword
/// present in the lower-cased question wins. Partial stems ("motivat",
/// "collaborat") deliberately cover inflected forms.
const KEYWORD_GROUPS: &[(Intent, &[&str])] = &[
    (
        Intent::Experience,
        &["experience", "background", "worked", "previous role"],
    ),
    (
        Intent::Skills,
        &["skill", "technolog", "proficien", "tech stack"],
    ),
    (Intent::Salary, &["salary", "compensation", "pay", "wage"]),
    (
        Intent::Weakness,
        &["weakness", "challenge", "difficult", "improve"],
    ),
    (
        Intent::Strength,
        &["strength", "excel", "best at", "good at"],
    ),
    (
        Intent::WhyInterested,
        &["why", "interested", "motivat", "attract"],
    ),
    (
        Intent::Teamwork,
        &["team", "collaborat", "work with others"],
    ),
    (
        Intent::Project,
        &["project", "achievement", "accomplish", "proud"],
    ),
    (
        Intent::Availability,
        &["start", "available", "availability", "notice period"],
    ),
    (
        Intent::CandidateQuestion,
        &["question", "ask", "anything else", "curious"],
    ),
];

/// Classifies a question. Deterministic and independent of conversation
/// history; unmatched questions fall through to `Generic`.
pub fn classify(question: &str) -> Intent {
    let q = question.to_lowercase();
    for (intent, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|kw| q.contains(kw)) {
            return *intent;
        }
    }
    Intent::Generic
}
