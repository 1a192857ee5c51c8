use serde::{Deserialize, Serialize};

/// A job posting as supplied by the listings collaborator.
///
/// Free text throughout — the matching engine derives structure on the fly
/// and never mutates the posting. Every field defaults so null-ish input
/// degrades instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Free text, e.g. "$50,000 - $80,000". Parsed leniently by the salary matcher.
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub company: String,
}
