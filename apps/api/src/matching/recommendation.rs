//! Recommendation tiers — pure threshold lookup over the final score.

/// Maps a 0–100 compatibility score to an application recommendation.
/// Thresholds: 90 / 75 / 60.
pub fn classify(score: u32) -> String {
    if score >= 90 {
        "Excellent match! Apply immediately with a customized application.".to_string()
    } else if score >= 75 {
        "Good match. Apply with a strong, tailored cover letter.".to_string()
    } else if score >= 60 {
        "Fair match. Address the identified weaknesses and emphasize your strengths when applying."
            .to_string()
    } else {
        "Weak match. Consider improving the relevant skills before applying.".to_string()
    }
}
