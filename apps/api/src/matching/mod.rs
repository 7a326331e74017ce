// Resume matching: text normalization, keyword overlap scoring, and the HTTP handlers that
// run the extract → normalize → score pipeline.

pub mod handlers;
pub mod keywords;
pub mod normalizer;
pub mod porter;
pub mod report;
pub mod scorer;
pub mod stopwords;
pub mod tokenizer;
