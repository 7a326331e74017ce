//! Porter stemmer (M. F. Porter, "An algorithm for suffix stripping", 1980).
//!
//! Follows the variant shipped as NLTK's default `PorterStemmer`, which differs from the
//! published paper in a handful of places:
//!
//! - a small table of irregular forms (`dying` → `die`, `skies` → `sky`, `news`)
//! - words of two letters or fewer are returned unchanged
//! - `ies`/`ied` on four-letter words keep the `ie` (`ties` → `tie`)
//! - `y` → `i` only after a consonant that is not the first letter (`say` stays `say`)
//! - `alli` is reduced before the rest of step 2, plus the `fulli` and `logi` rules
//!
//! Words are processed as `char` sequences; every suffix the rules mention is ASCII.

/// Condition checked against the stem left after removing a rule's suffix.
type Condition = fn(&[char]) -> bool;

/// `(suffix, replacement, condition)`. The first rule whose suffix matches decides the
/// outcome, whether or not its condition holds.
type Rule = (&'static str, &'static str, Condition);

pub fn stem(word: &str) -> String {
    if let Some(form) = irregular_form(word) {
        return form.to_string();
    }

    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return word.to_string();
    }

    let chars = step1a(chars);
    let chars = step1b(chars);
    let chars = step1c(chars);
    let chars = step2(chars);
    let chars = step3(chars);
    let chars = step4(chars);
    let chars = step5a(chars);
    let chars = step5b(chars);
    chars.into_iter().collect()
}

fn irregular_form(word: &str) -> Option<&'static str> {
    match word {
        "sky" | "skies" => Some("sky"),
        "dying" => Some("die"),
        "lying" => Some("lie"),
        "tying" => Some("tie"),
        "news" => Some("news"),
        "inning" | "innings" => Some("inning"),
        "outing" | "outings" => Some("outing"),
        "canning" | "cannings" => Some("canning"),
        "howe" => Some("howe"),
        "proceed" => Some("proceed"),
        "exceed" => Some("exceed"),
        "succeed" => Some("succeed"),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Letter classes and measure
// ────────────────────────────────────────────────────────────────────────────

fn is_consonant(word: &[char], i: usize) -> bool {
    match word[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, `m` in `[C](VC){m}[V]`.
fn measure(stem: &[char]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..stem.len() {
        let vowel = !is_consonant(stem, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

fn contains_vowel(stem: &[char]) -> bool {
    (0..stem.len()).any(|i| !is_consonant(stem, i))
}

fn ends_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(word: &[char]) -> bool {
    let n = word.len();
    if n >= 3 {
        is_consonant(word, n - 3)
            && !is_consonant(word, n - 2)
            && is_consonant(word, n - 1)
            && !matches!(word[n - 1], 'w' | 'x' | 'y')
    } else {
        n == 2 && !is_consonant(word, 0) && is_consonant(word, 1)
    }
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    word.len() >= suffix.len() && word[word.len() - suffix.len()..].iter().copied().eq(suffix.chars())
}

fn join(stem: &[char], tail: &str) -> Vec<char> {
    stem.iter().copied().chain(tail.chars()).collect()
}

fn apply_rules(word: Vec<char>, rules: &[Rule]) -> Vec<char> {
    for &(suffix, replacement, condition) in rules {
        if ends_with(&word, suffix) {
            let stem = &word[..word.len() - suffix.len()];
            return if condition(stem) {
                join(stem, replacement)
            } else {
                word
            };
        }
    }
    word
}

fn always(_: &[char]) -> bool {
    true
}

fn positive_measure(stem: &[char]) -> bool {
    measure(stem) > 0
}

fn measure_above_one(stem: &[char]) -> bool {
    measure(stem) > 1
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

fn step1a(word: Vec<char>) -> Vec<char> {
    if word.len() == 4 && ends_with(&word, "ies") {
        return join(&word[..1], "ie");
    }
    apply_rules(
        word,
        &[
            ("sses", "ss", always),
            ("ies", "i", always),
            ("ss", "ss", always),
            ("s", "", always),
        ],
    )
}

fn step1b(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "ied") {
        let tail = if word.len() == 4 { "ie" } else { "i" };
        return join(&word[..word.len() - 3], tail);
    }

    if ends_with(&word, "eed") {
        let stem = &word[..word.len() - 3];
        return if measure(stem) > 0 {
            join(stem, "ee")
        } else {
            word
        };
    }

    let cut = ["ed", "ing"]
        .into_iter()
        .find(|suffix| {
            ends_with(&word, suffix) && contains_vowel(&word[..word.len() - suffix.len()])
        })
        .map(str::len);
    let Some(cut) = cut else {
        return word;
    };
    let stem = &word[..word.len() - cut];

    if ends_with(stem, "at") || ends_with(stem, "bl") || ends_with(stem, "iz") {
        return join(stem, "e");
    }
    if ends_double_consonant(stem) {
        return match stem[stem.len() - 1] {
            'l' | 's' | 'z' => stem.to_vec(),
            _ => stem[..stem.len() - 1].to_vec(),
        };
    }
    if measure(stem) == 1 && ends_cvc(stem) {
        return join(stem, "e");
    }
    stem.to_vec()
}

fn step1c(word: Vec<char>) -> Vec<char> {
    fn after_non_initial_consonant(stem: &[char]) -> bool {
        stem.len() > 1 && is_consonant(stem, stem.len() - 1)
    }
    apply_rules(word, &[("y", "i", after_non_initial_consonant)])
}

fn step2(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "alli") {
        let stem = &word[..word.len() - 4];
        if positive_measure(stem) {
            return step2(join(stem, "al"));
        }
    }

    // The `l` of `logi` stays with the stem so short stems such as `geo` qualify.
    fn logi_condition(stem: &[char]) -> bool {
        positive_measure(&join(stem, "l"))
    }

    apply_rules(
        word,
        &[
            ("ational", "ate", positive_measure),
            ("tional", "tion", positive_measure),
            ("enci", "ence", positive_measure),
            ("anci", "ance", positive_measure),
            ("izer", "ize", positive_measure),
            ("bli", "ble", positive_measure),
            ("alli", "al", positive_measure),
            ("entli", "ent", positive_measure),
            ("eli", "e", positive_measure),
            ("ousli", "ous", positive_measure),
            ("ization", "ize", positive_measure),
            ("ation", "ate", positive_measure),
            ("ator", "ate", positive_measure),
            ("alism", "al", positive_measure),
            ("iveness", "ive", positive_measure),
            ("fulness", "ful", positive_measure),
            ("ousness", "ous", positive_measure),
            ("aliti", "al", positive_measure),
            ("iviti", "ive", positive_measure),
            ("biliti", "ble", positive_measure),
            ("fulli", "ful", positive_measure),
            ("logi", "log", logi_condition),
        ],
    )
}

fn step3(word: Vec<char>) -> Vec<char> {
    apply_rules(
        word,
        &[
            ("icate", "ic", positive_measure),
            ("ative", "", positive_measure),
            ("alize", "al", positive_measure),
            ("iciti", "ic", positive_measure),
            ("ical", "ic", positive_measure),
            ("ful", "", positive_measure),
            ("ness", "", positive_measure),
        ],
    )
}

fn step4(word: Vec<char>) -> Vec<char> {
    fn ion_condition(stem: &[char]) -> bool {
        measure(stem) > 1 && matches!(stem.last(), Some('s' | 't'))
    }
    apply_rules(
        word,
        &[
            ("al", "", measure_above_one),
            ("ance", "", measure_above_one),
            ("ence", "", measure_above_one),
            ("er", "", measure_above_one),
            ("ic", "", measure_above_one),
            ("able", "", measure_above_one),
            ("ible", "", measure_above_one),
            ("ant", "", measure_above_one),
            ("ement", "", measure_above_one),
            ("ment", "", measure_above_one),
            ("ent", "", measure_above_one),
            ("ion", "", ion_condition),
            ("ou", "", measure_above_one),
            ("ism", "", measure_above_one),
            ("ate", "", measure_above_one),
            ("iti", "", measure_above_one),
            ("ous", "", measure_above_one),
            ("ive", "", measure_above_one),
            ("ize", "", measure_above_one),
        ],
    )
}

fn step5a(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "e") {
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return stem.to_vec();
        }
    }
    word
}

fn step5b(word: Vec<char>) -> Vec<char> {
    // Measured on the word minus its final `l`.
    fn double_l_condition(stem: &[char]) -> bool {
        measure_above_one(&join(stem, "l"))
    }
    apply_rules(word, &[("ll", "l", double_l_condition)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_stems(pairs: &[(&str, &str)]) {
        for (word, expected) in pairs {
            assert_eq!(stem(word), *expected, "stem({word})");
        }
    }

    #[test]
    fn test_variants_share_a_stem() {
        assert_stems(&[
            ("generate", "gener"),
            ("general", "gener"),
            ("communication", "commun"),
            ("community", "commun"),
            ("communism", "commun"),
        ]);
    }

    #[test]
    fn test_step1_plurals_and_participles() {
        assert_stems(&[
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("agreed", "agre"),
            ("plastered", "plaster"),
            ("motoring", "motor"),
            ("sing", "sing"),
            ("conflated", "conflat"),
            ("troubled", "troubl"),
            ("sized", "size"),
            ("hopping", "hop"),
            ("tanned", "tan"),
            ("falling", "fall"),
            ("hissing", "hiss"),
            ("fizzed", "fizz"),
            ("failing", "fail"),
            ("filing", "file"),
            ("happy", "happi"),
        ]);
    }

    #[test]
    fn test_step2_and_step3_suffixes() {
        assert_stems(&[
            ("relational", "relat"),
            ("conditional", "condit"),
            ("rational", "ration"),
            ("digitizer", "digit"),
            ("hopefulness", "hope"),
            ("sensibiliti", "sensibl"),
            ("electriciti", "electr"),
            ("formalize", "formal"),
            ("goodness", "good"),
        ]);
    }

    #[test]
    fn test_step4_and_step5_suffixes() {
        assert_stems(&[
            ("allowance", "allow"),
            ("inference", "infer"),
            ("adjustable", "adjust"),
            ("replacement", "replac"),
            ("adoption", "adopt"),
            ("effective", "effect"),
            ("controll", "control"),
            ("roll", "roll"),
            ("rate", "rate"),
        ]);
    }

    #[test]
    fn test_irregular_and_short_words() {
        assert_stems(&[
            ("dying", "die"),
            ("skies", "sky"),
            ("ties", "tie"),
            ("news", "news"),
            ("go", "go"),
            ("5", "5"),
        ]);
    }

    #[test]
    fn test_y_after_vowel_is_kept() {
        assert_stems(&[("say", "say"), ("deploy", "deploy"), ("try", "tri")]);
    }

    #[test]
    fn test_common_resume_words() {
        assert_stems(&[
            ("experience", "experi"),
            ("experienced", "experienc"),
            ("developer", "develop"),
            ("managing", "manag"),
            ("manager", "manag"),
            ("engineers", "engin"),
            ("requirements", "requir"),
            ("running", "run"),
        ]);
    }

    #[test]
    fn test_non_ascii_letters_pass_through() {
        assert_eq!(stem("zürich"), "zürich");
        assert_eq!(stem("café"), "café");
    }
}
