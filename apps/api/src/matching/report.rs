use serde::Serialize;

use crate::matching::keywords::KeywordSet;
use crate::matching::scorer::MatchScorer;

/// How many missing keywords the recommendation text names.
const RECOMMENDATION_GAP_LIMIT: usize = 5;

/// Full match report returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub score: f64, // 0 – 100
    pub matching_keywords: KeywordSet,
    /// Requirement keywords absent from the resume.
    pub missing_keywords: KeywordSet,
    pub requirement_keyword_count: usize,
    pub resume_keyword_count: usize,
    pub recommendation: String,
    pub scorer_backend: String,
}

impl MatchReport {
    pub fn build(scorer: &dyn MatchScorer, resume: &KeywordSet, requirements: &KeywordSet) -> Self {
        let result = scorer.score(resume, requirements);
        let missing_keywords = requirements.difference(&result.matching_keywords);
        let recommendation = build_recommendation(result.percentage, &missing_keywords);

        Self {
            score: result.percentage,
            matching_keywords: result.matching_keywords,
            missing_keywords,
            requirement_keyword_count: requirements.len(),
            resume_keyword_count: resume.len(),
            recommendation,
            scorer_backend: scorer.backend().to_string(),
        }
    }
}

fn build_recommendation(score: f64, missing: &KeywordSet) -> String {
    let top_gaps: Vec<&str> = missing.iter().take(RECOMMENDATION_GAP_LIMIT).collect();

    if score >= 80.0 {
        format!("Strong match ({score}%). The resume covers most of the job requirements.")
    } else if score >= 50.0 {
        format!(
            "Moderate match ({score}%). Consider highlighting: {}.",
            top_gaps.join(", ")
        )
    } else if missing.is_empty() {
        "No requirement keywords to match against.".to_string()
    } else {
        format!(
            "Low match ({score}%). Missing keywords: {}.",
            top_gaps.join(", ")
        )
    }
}
