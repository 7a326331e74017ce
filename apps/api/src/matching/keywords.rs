use std::collections::BTreeSet;

use serde::Serialize;

/// A set of normalized keyword tokens.
///
/// Backed by a `BTreeSet` so serialized output is sorted and stable across requests;
/// ordering carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keywords present in both sets.
    pub fn intersection(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// Keywords in `self` that are absent from `other`.
    pub fn difference(&self, other: &KeywordSet) -> KeywordSet {
        KeywordSet(self.0.difference(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let set: KeywordSet = ["rust", "sql", "rust"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_intersection_and_difference() {
        let a: KeywordSet = ["python", "sql", "java"].into_iter().collect();
        let b: KeywordSet = ["python", "sql", "c++", "go"].into_iter().collect();

        let both = a.intersection(&b);
        assert_eq!(both.iter().collect::<Vec<_>>(), vec!["python", "sql"]);

        let missing = b.difference(&a);
        assert_eq!(missing.iter().collect::<Vec<_>>(), vec!["c++", "go"]);
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let set: KeywordSet = ["sql", "go", "python"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["go","python","sql"]"#
        );
    }
}
