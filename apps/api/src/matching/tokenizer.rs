//! Treebank-style word tokenizer.
//!
//! Punctuation and brackets become their own tokens, English clitics are split from their
//! host word (`don't` → `do n't`, `it's` → `it 's`), and numbers such as `1,000` or `3.5`
//! stay whole. Hyphenated words and symbols like `c++` are kept as single tokens.

use regex::Regex;

/// Ordered rewrite rules. Each pads the matched punctuation with spaces so the final
/// whitespace split yields separate tokens.
pub struct Tokenizer {
    quotes: Regex,
    ellipsis: Regex,
    comma_colon: Regex,
    trailing_comma_colon: Regex,
    symbols: Regex,
    final_period: Regex,
    brackets: Regex,
    dashes: Regex,
    clitics: Regex,
    contractions: Regex,
    fused: Vec<Regex>,
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            quotes: Regex::new(r#"["“”«»`]"#)?,
            ellipsis: Regex::new(r"\.\.\.")?,
            comma_colon: Regex::new(r"([:,])([^\d])")?,
            trailing_comma_colon: Regex::new(r"([:,])$")?,
            symbols: Regex::new(r"[;@#$%&?!]")?,
            final_period: Regex::new(r"([^.\s])\.(\s|$)")?,
            brackets: Regex::new(r"[\]\[(){}<>]")?,
            dashes: Regex::new(r"--")?,
            clitics: Regex::new(r"(?i)([^' ])('s|'m|'d|') ")?,
            contractions: Regex::new(r"(?i)([^' ])('ll|'re|'ve|n't) ")?,
            fused: [
                r"(?i)\b(can)(not)\b",
                r"(?i)\b(gon)(na)\b",
                r"(?i)\b(got)(ta)\b",
                r"(?i)\b(wan)(na)\b",
                r"(?i)\b(gim)(me)\b",
                r"(?i)\b(lem)(me)\b",
            ]
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, regex::Error>>()?,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut text = text.split_whitespace().collect::<Vec<_>>().join(" ");

        text = self.quotes.replace_all(&text, " $0 ").into_owned();
        text = self.ellipsis.replace_all(&text, " ... ").into_owned();
        text = self.comma_colon.replace_all(&text, " ${1} ${2}").into_owned();
        text = self.trailing_comma_colon.replace_all(&text, " ${1} ").into_owned();
        text = self.symbols.replace_all(&text, " $0 ").into_owned();
        text = self.final_period.replace_all(&text, "${1} .${2}").into_owned();
        text = self.brackets.replace_all(&text, " $0 ").into_owned();
        text = self.dashes.replace_all(&text, " -- ").into_owned();

        // Clitic rules need a space on both ends of every word.
        text = format!(" {text} ");
        text = self.clitics.replace_all(&text, "${1} ${2} ").into_owned();
        text = self.contractions.replace_all(&text, "${1} ${2} ").into_owned();
        for rule in &self.fused {
            text = rule.replace_all(&text, "${1} ${2}").into_owned();
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}
