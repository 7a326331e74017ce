//! Keyword overlap scoring. A trait-based scorer comparing a resume against job
//! requirements.
//!
//! The score is requirement-centric: the denominator is always the size of the requirement
//! set, so extra resume keywords are never penalized and the score is stable across
//! resumes for a fixed job description.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`.

use crate::matching::keywords::KeywordSet;

/// Percentage of requirement keywords found in the resume, plus the keywords that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// 0.0 – 100.0, rounded to 2 decimal places
    pub percentage: f64,
    pub matching_keywords: KeywordSet,
}

impl ScoreResult {
    pub fn empty() -> Self {
        Self {
            percentage: 0.0,
            matching_keywords: KeywordSet::new(),
        }
    }
}

/// Implement this to swap scoring backends without touching the handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume: &KeywordSet, requirements: &KeywordSet) -> ScoreResult;

    /// Short label reported back to clients, e.g. "keyword_overlap".
    fn backend(&self) -> &'static str;
}

/// Lexical overlap: |resume ∩ requirements| / |requirements| × 100.
pub struct KeywordOverlapScorer;

impl MatchScorer for KeywordOverlapScorer {
    fn score(&self, resume: &KeywordSet, requirements: &KeywordSet) -> ScoreResult {
        score(resume, requirements)
    }

    fn backend(&self) -> &'static str {
        "keyword_overlap"
    }
}

/// An empty requirement set scores 0 with no matches rather than dividing by zero.
pub fn score(resume: &KeywordSet, requirements: &KeywordSet) -> ScoreResult {
    if requirements.is_empty() {
        return ScoreResult::empty();
    }

    let matching_keywords = resume.intersection(requirements);
    let ratio = matching_keywords.len() as f64 / requirements.len() as f64;

    ScoreResult {
        percentage: round_to_hundredths(ratio * 100.0),
        matching_keywords,
    }
}

/// Half-to-even, so 3.125 rounds to 3.12.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> KeywordSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_empty_requirements_scores_zero() {
        let result = score(&set(&["python", "sql"]), &KeywordSet::new());
        assert_eq!(result, ScoreResult::empty());
    }

    #[test]
    fn test_both_empty_scores_zero() {
        let result = score(&KeywordSet::new(), &KeywordSet::new());
        assert_eq!(result.percentage, 0.0);
        assert!(result.matching_keywords.is_empty());
    }

    #[test]
    fn test_half_match() {
        let result = score(&set(&["manag", "develop"]), &set(&["manag", "lead"]));
        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.matching_keywords, set(&["manag"]));
    }

    #[test]
    fn test_denominator_is_requirement_set() {
        let resume = set(&["python", "sql", "java"]);
        let requirements = set(&["python", "sql", "c++", "go"]);

        let forward = score(&resume, &requirements);
        assert_eq!(forward.percentage, 50.0);
        assert_eq!(forward.matching_keywords, set(&["python", "sql"]));

        // Swapping the arguments changes the denominator from 4 to 3.
        let reverse = score(&requirements, &resume);
        assert_eq!(reverse.percentage, 66.67);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn test_full_match_is_100() {
        let requirements = set(&["rust", "sql"]);
        let resume = set(&["rust", "sql", "kubernetes", "go"]);
        assert_eq!(score(&resume, &requirements).percentage, 100.0);
    }

    #[test]
    fn test_no_overlap_is_zero() {
        let result = score(&set(&["java"]), &set(&["rust", "go"]));
        assert_eq!(result.percentage, 0.0);
        assert!(result.matching_keywords.is_empty());
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let requirements = set(&["a", "b", "c"]);
        assert_eq!(score(&set(&["a"]), &requirements).percentage, 33.33);
        assert_eq!(score(&set(&["a", "b"]), &requirements).percentage, 66.67);
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // 1 of 32 = 3.125%, exactly representable.
        let requirements: KeywordSet = (0..32).map(|i| format!("k{i}")).collect();
        let resume = set(&["k0"]);
        assert_eq!(score(&resume, &requirements).percentage, 3.12);
    }

    #[test]
    fn test_score_is_bounded() {
        let requirements = set(&["rust", "go", "sql"]);
        for resume in [set(&[]), set(&["rust"]), set(&["rust", "go", "sql", "java"])] {
            let pct = score(&resume, &requirements).percentage;
            assert!((0.0..=100.0).contains(&pct), "{pct}");
        }
    }

    #[test]
    fn test_trait_backend_delegates() {
        let scorer = KeywordOverlapScorer;
        let result = scorer.score(&set(&["rust"]), &set(&["rust", "go"]));
        assert_eq!(result.percentage, 50.0);
        assert_eq!(scorer.backend(), "keyword_overlap");
    }
}
