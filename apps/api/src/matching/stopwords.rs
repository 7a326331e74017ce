//! Closed English stopword list. Tokens are compared after lowercasing.

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

pub fn is_stopword(token: &str) -> bool {
    ENGLISH_STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_has_no_duplicates() {
        let unique: HashSet<_> = ENGLISH_STOPWORDS.iter().collect();
        assert_eq!(unique.len(), ENGLISH_STOPWORDS.len());
        assert_eq!(ENGLISH_STOPWORDS.len(), 179);
    }

    #[test]
    fn test_list_is_lowercase() {
        for word in ENGLISH_STOPWORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_common_words() {
        for word in ["the", "is", "and", "of", "with", "for"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
        for word in ["python", "rust", "experience", "lead"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn test_match_is_exact_not_case_folded() {
        assert!(!is_stopword("The"));
    }
}
