use serde::{Deserialize, Serialize};

/// A candidate profile, supplied whole by the profile collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text entries, e.g. "Software Engineer at X (2020-2023)".
    #[serde(default)]
    pub experience_entries: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub job_types: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub salary: SalaryExpectation,
    #[serde(default)]
    pub remote: bool,
}

/// Expected salary band. min == max == 0 means no stated preference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SalaryExpectation {
    #[serde(default)]
    pub min: i64,
    #[serde(default)]
    pub max: i64,
}
