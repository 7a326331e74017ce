//! Normalizer: turns free text into a `KeywordSet`.
//!
//! Pipeline: lowercase → word tokenize → drop non-alphanumeric tokens → drop stopwords →
//! stem → collect. Stems come from the Porter algorithm (see `porter`) and may not be
//! dictionary words (`experience` → `experi`).

use crate::matching::keywords::KeywordSet;
use crate::matching::porter;
use crate::matching::stopwords::is_stopword;
use crate::matching::tokenizer::Tokenizer;

pub struct Normalizer {
    tokenizer: Tokenizer,
}

impl Normalizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    pub fn normalize(&self, text: &str) -> KeywordSet {
        let lowered = text.to_lowercase();
        self.tokenizer
            .tokenize(&lowered)
            .into_iter()
            .filter(|token| is_alphanumeric(token))
            .filter(|token| !is_stopword(token))
            .map(|token| self.stem(&token))
            .collect()
    }

    pub fn stem(&self, token: &str) -> String {
        porter::stem(token)
    }
}

fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}
