//! Score aggregation — combines the four factor sub-scores into a MatchResult.
//!
//! Weights are fixed design constants: technical fit dominates the decision,
//! so skills and experience carry 80% of the final score between them.

use serde::{Deserialize, Serialize};

use crate::matching::experience::estimate_years;
use crate::matching::factors::{
    experience_match, has_skill, location_match, salary_match, skills_match,
};
use crate::matching::recommendation;
use crate::matching::requirements::{extract, JobRequirements};
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;

/// Sentinel emitted when no weakness condition triggers — `weaknesses` is
/// never an empty list.
pub const NO_WEAKNESSES: &str = "No significant weaknesses identified";

/// Factor weights applied to the four sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            location: 0.1,
            salary: 0.1,
        }
    }
}

/// Per-factor sub-scores, all in [0,100].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub skills_match: u32,
    pub experience_match: u32,
    pub location_match: u32,
    pub salary_match: u32,
}

/// Full compatibility report. Ephemeral — produced once per request, the
/// caller decides whether to persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
    pub detailed_analysis: DetailedAnalysis,
}

/// The compatibility scorer seam. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`. Synchronous: the scorer
/// is pure CPU work with no I/O.
pub trait MatchScorer: Send + Sync {
    fn analyze(&self, job: &JobPosting, candidate: &CandidateProfile) -> MatchResult;
}

/// Default heuristic scorer — pure string analysis, fast, deterministic.
pub struct HeuristicScorer;

impl MatchScorer for HeuristicScorer {
    fn analyze(&self, job: &JobPosting, candidate: &CandidateProfile) -> MatchResult {
        compute_match(job, candidate, &FactorWeights::default())
    }
}

/// Runs the full compatibility pipeline: extract → estimate → factor match →
/// weighted aggregate → strengths/weaknesses → recommendation.
///
/// Never mutates its inputs; all outputs are newly constructed.
pub fn compute_match(
    job: &JobPosting,
    candidate: &CandidateProfile,
    weights: &FactorWeights,
) -> MatchResult {
    let requirements = extract(&job.description);
    let candidate_years = estimate_years(&candidate.experience_entries);

    let analysis = DetailedAnalysis {
        skills_match: skills_match(&requirements.skills, &candidate.skills),
        experience_match: experience_match(requirements.experience_years, candidate_years),
        location_match: location_match(&job.location, &candidate.preferences.locations),
        salary_match: salary_match(&job.salary_range, candidate.preferences.salary),
    };

    let score = aggregate(&analysis, weights);

    MatchResult {
        score,
        strengths: derive_strengths(&requirements, candidate, candidate_years, &analysis),
        weaknesses: derive_weaknesses(&requirements, candidate, candidate_years),
        recommendation: recommendation::classify(score),
        detailed_analysis: analysis,
    }
}

/// Weighted sum of sub-scores, rounded and clamped to [0,100].
pub fn aggregate(analysis: &DetailedAnalysis, weights: &FactorWeights) -> u32 {
    let weighted = analysis.skills_match as f64 * weights.skills
        + analysis.experience_match as f64 * weights.experience
        + analysis.location_match as f64 * weights.location
        + analysis.salary_match as f64 * weights.salary;
    (weighted.round() as u32).min(100)
}

/// Derives qualitative strengths in priority order: skill overlap quality,
/// experience surplus, location preference hit. May be empty when nothing
/// qualifies — unlike weaknesses, strengths carry no sentinel.
fn derive_strengths(
    requirements: &JobRequirements,
    candidate: &CandidateProfile,
    candidate_years: u32,
    analysis: &DetailedAnalysis,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if !requirements.skills.is_empty() {
        let overlap: Vec<&str> = requirements
            .skills
            .iter()
            .filter(|req| has_skill(&candidate.skills, req))
            .map(|s| s.as_str())
            .collect();
        let ratio = overlap.len() as f64 / requirements.skills.len() as f64;

        if ratio >= 1.0 {
            strengths.push("You have all the skills required for this role".to_string());
        } else if ratio >= 0.7 {
            strengths.push("Strong overlap with the required skills".to_string());
        } else if ratio >= 0.5 {
            strengths.push("Good coverage of the required skills".to_string());
        } else if !overlap.is_empty() {
            strengths.push(format!("Relevant skills: {}", overlap.join(", ")));
        }
    }

    if requirements.experience_years > 0 && candidate_years >= requirements.experience_years {
        let surplus = candidate_years - requirements.experience_years;
        if surplus > 0 {
            strengths.push(format!(
                "Your {candidate_years} years of experience exceed the {}-year requirement by {surplus}",
                requirements.experience_years
            ));
        } else {
            strengths.push(format!(
                "You meet the {}-year experience requirement",
                requirements.experience_years
            ));
        }
    }

    if analysis.location_match == 100 && !candidate.preferences.locations.is_empty() {
        strengths.push("The job location matches your preferences".to_string());
    }

    strengths
}

/// Derives weaknesses: uncovered required skills (named), experience
/// shortfall, and a salary caveat whenever any salary preference is stated.
/// Falls back to the sentinel when nothing triggers.
fn derive_weaknesses(
    requirements: &JobRequirements,
    candidate: &CandidateProfile,
    candidate_years: u32,
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    let missing: Vec<&str> = requirements
        .skills
        .iter()
        .filter(|req| !has_skill(&candidate.skills, req))
        .map(|s| s.as_str())
        .collect();
    if !missing.is_empty() {
        weaknesses.push(format!("Missing required skills: {}", missing.join(", ")));
    }

    if requirements.experience_years > candidate_years {
        let shortfall = requirements.experience_years - candidate_years;
        weaknesses.push(format!(
            "You may need {shortfall} more years of experience for this role"
        ));
    }

    // Flagged whenever the candidate states any salary preference at all,
    // whether or not it conflicts with the advertised range.
    if candidate.preferences.salary.min != 0 || candidate.preferences.salary.max != 0 {
        weaknesses.push("Salary expectations may need to be discussed".to_string());
    }

    if weaknesses.is_empty() {
        weaknesses.push(NO_WEAKNESSES.to_string());
    }

    weaknesses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Preferences, SalaryExpectation};

    fn make_job(description: &str) -> JobPosting {
        JobPosting {
            title: "Frontend Developer".to_string(),
            description: description.to_string(),
            location: "Berlin".to_string(),
            salary_range: String::new(),
            company: "Acme".to_string(),
        }
    }

    fn make_candidate(skills: &[&str], experience: &[&str]) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_entries: experience.iter().map(|s| s.to_string()).collect(),
            preferences: Preferences::default(),
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = FactorWeights::default();
        let sum = w.skills + w.experience + w.location + w.salary;
        assert!((sum - 1.0).abs() < f64::EPSILON, "weights sum was {sum}");
    }

    #[test]
    fn test_aggregate_applies_fixed_weights() {
        let analysis = DetailedAnalysis {
            skills_match: 100,
            experience_match: 100,
            location_match: 50,
            salary_match: 50,
        };
        // 100*0.5 + 100*0.3 + 50*0.1 + 50*0.1 = 90
        assert_eq!(aggregate(&analysis, &FactorWeights::default()), 90);
    }

    #[test]
    fn test_aggregate_stays_in_bounds() {
        let analysis = DetailedAnalysis {
            skills_match: 100,
            experience_match: 100,
            location_match: 100,
            salary_match: 100,
        };
        assert_eq!(aggregate(&analysis, &FactorWeights::default()), 100);
        let zero = DetailedAnalysis {
            skills_match: 0,
            experience_match: 0,
            location_match: 0,
            salary_match: 0,
        };
        assert_eq!(aggregate(&zero, &FactorWeights::default()), 0);
    }

    #[test]
    fn test_react_scenario_scores_high() {
        let job = make_job("Looking for a React developer with 3+ years experience");
        let candidate = make_candidate(&["React", "CSS"], &["Frontend Dev (2019-2023)"]);

        let result = HeuristicScorer.analyze(&job, &candidate);

        assert_eq!(result.detailed_analysis.skills_match, 100);
        // 4 actual years against 3 required, capped
        assert_eq!(result.detailed_analysis.experience_match, 100);
        assert!(
            result.score >= 75,
            "expected good-or-better tier, got {}",
            result.score
        );
        assert!(
            result.recommendation.starts_with("Good")
                || result.recommendation.starts_with("Excellent"),
            "unexpected recommendation: {}",
            result.recommendation
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let job = make_job("TypeScript and AWS role, 5 years experience required");
        let candidate = make_candidate(&["TypeScript"], &["Cloud engineer, 3 years"]);

        let first = HeuristicScorer.analyze(&job, &candidate);
        let second = HeuristicScorer.analyze(&job, &candidate);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "repeated analysis must be byte-identical"
        );
    }

    #[test]
    fn test_empty_candidate_against_skilled_job() {
        let job = make_job("React and SQL shop, 2 years experience needed");
        let candidate = make_candidate(&[], &[]);

        let result = HeuristicScorer.analyze(&job, &candidate);

        assert_eq!(result.detailed_analysis.skills_match, 0);
        let missing = result
            .weaknesses
            .iter()
            .find(|w| w.starts_with("Missing required skills"))
            .expect("missing-skills weakness expected");
        assert!(missing.contains("react"), "weakness was: {missing}");
        assert!(missing.contains("sql"), "weakness was: {missing}");
    }

    #[test]
    fn test_weakness_sentinel_when_nothing_triggers() {
        // No detected skills, no experience figure, no salary preference
        let job = make_job("A friendly workplace seeking motivated people");
        let candidate = make_candidate(&["React"], &["Dev (2020-2023)"]);

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert_eq!(result.weaknesses, vec![NO_WEAKNESSES.to_string()]);
    }

    #[test]
    fn test_experience_shortfall_named_in_weaknesses() {
        let job = make_job("Needs 6 years experience");
        let candidate = make_candidate(&[], &["2 years at a startup"]);

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert!(
            result
                .weaknesses
                .iter()
                .any(|w| w.contains("4 more years")),
            "weaknesses were: {:?}",
            result.weaknesses
        );
    }

    /// Documents the intentional simplification: any stated salary preference
    /// is flagged as a caveat even when it sits inside the advertised range.
    #[test]
    fn test_salary_preference_always_flagged_even_when_ranges_agree() {
        let mut job = make_job("React role");
        job.salary_range = "$40,000 - $90,000".to_string();
        let mut candidate = make_candidate(&["React"], &[]);
        candidate.preferences.salary = SalaryExpectation {
            min: 50_000,
            max: 80_000,
        };

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert_eq!(result.detailed_analysis.salary_match, 100);
        assert!(
            result
                .weaknesses
                .iter()
                .any(|w| w.contains("Salary expectations")),
            "weaknesses were: {:?}",
            result.weaknesses
        );
    }

    #[test]
    fn test_all_skills_strength_message() {
        let job = make_job("React and CSS needed");
        let candidate = make_candidate(&["react", "css"], &[]);

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("all the skills")));
    }

    #[test]
    fn test_partial_overlap_names_relevant_skills() {
        // 1 of 3 required covered → below the "good" threshold, so the
        // overlapping skills are named instead
        let job = make_job("We use React, SQL and AWS daily");
        let candidate = make_candidate(&["react"], &[]);

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert!(
            result
                .strengths
                .iter()
                .any(|s| s.starts_with("Relevant skills") && s.contains("react")),
            "strengths were: {:?}",
            result.strengths
        );
    }

    #[test]
    fn test_experience_surplus_strength() {
        let job = make_job("3 years experience required");
        let candidate = make_candidate(&[], &["Engineer (2015-2023)"]);

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert!(
            result.strengths.iter().any(|s| s.contains("exceed")),
            "strengths were: {:?}",
            result.strengths
        );
    }

    #[test]
    fn test_location_preference_hit_strength() {
        let job = make_job("Any role");
        let mut candidate = make_candidate(&[], &[]);
        candidate.preferences.locations = vec!["Berlin".to_string()];

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert_eq!(result.detailed_analysis.location_match, 100);
        assert!(result
            .strengths
            .iter()
            .any(|s| s.contains("location matches")));
    }

    #[test]
    fn test_strengths_may_be_empty() {
        let job = make_job("Kubernetes platform team, 10 years experience");
        let candidate = make_candidate(&["cobol"], &[]);

        let result = HeuristicScorer.analyze(&job, &candidate);
        assert!(
            result.strengths.is_empty(),
            "strengths were: {:?}",
            result.strengths
        );
    }

    #[test]
    fn test_result_serializes_with_camel_case_keys() {
        let result = HeuristicScorer.analyze(&make_job("React"), &make_candidate(&[], &[]));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("detailedAnalysis").is_some());
        assert!(json["detailedAnalysis"].get("skillsMatch").is_some());
        assert!(json["detailedAnalysis"].get("salaryMatch").is_some());
    }
}
