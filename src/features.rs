//! Feature extraction for person-name spans.
//!
//! Every feature is a named real value. Indicator features are emitted as
//! `1.0` when they fire. Scalar features such as `all_caps` are always
//! present, carrying `0.0` when they do not fire, so the same names appear in
//! every vector.

use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::example::Example;
use crate::model::Model;
use crate::vocab::{
    ALPHA_OR_SPACE_RE, DATE_EXACT_RE, DATE_RE, DIGITS_RE, DIGIT_RE, INITIAL_RE, PARTICLES,
    PERSON_VERBS, RANKED_NUM_RE, SPEAKER_VERBS, TITLECASE_RE, TITLES,
};

/// Sparse feature vector. Absent names are zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureVector {
    features: HashMap<String, f64>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn insert<S>(&mut self, name: S, value: f64)
    where
        S: Into<String>,
    {
        self.features.insert(name.into(), value);
    }

    /// Returns the value of `name`, or `0.0` when it is absent.
    pub fn get(&self, name: &str) -> f64 {
        self.features.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Sparse inner product with the weights of `model`.
    pub fn dot(&self, model: &Model) -> f64 {
        self.iter()
            .map(|(name, value)| value * model.weight(name))
            .sum()
    }

    fn flag(&mut self, name: &str, value: bool) {
        self.insert(name, indicator(value));
    }
}

impl<S> FromIterator<(S, f64)> for FeatureVector
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[inline]
fn indicator(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// True if `s` has an upper-case character and every cased character is
/// upper-case. Title-case letters such as "ǅ" count as cased.
fn is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase)
        && !s.chars().any(char::is_lowercase)
        && !TITLECASE_RE.is_match(s)
}

fn is_digits(s: &str) -> bool {
    DIGITS_RE.is_match(s)
}

fn is_title_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if c.is_uppercase() => {
            let rest = chars.as_str();
            rest.is_empty() || !is_upper(rest)
        }
        _ => false,
    }
}

/// Computes the feature vector of `example`.
///
/// # Errors
///
/// [`Error::InvalidExample`] is returned when the entity is empty, since the
/// capitalization and length features are undefined without a word.
pub fn extract_features(example: &Example) -> Result<FeatureVector> {
    let Example {
        left,
        entity,
        right,
    } = example;
    let words: Vec<&str> = example.entity_tokens().collect();
    let first_char = match words.first().and_then(|w| w.chars().next()) {
        Some(c) => c,
        None => {
            return Err(Error::invalid_example(
                example.text(),
                "the entity between the left and right tokens is empty",
            ))
        }
    };

    let mut phi = FeatureVector::new();

    phi.insert(format!("entity is {}", entity), 1.0);
    phi.insert(format!("left is {}", left), 1.0);
    phi.insert(format!("right is {}", right), 1.0);

    for word in &words {
        phi.insert(format!("entity word: {}", word), 1.0);
    }

    for word in &words {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        for n in 2..=4 {
            if chars.len() >= n {
                let prefix: String = chars[..n].iter().collect();
                let suffix: String = chars[chars.len() - n..].iter().collect();
                phi.insert(format!("pre{}:{}", n, prefix), 1.0);
                phi.insert(format!("suf{}:{}", n, suffix), 1.0);
            }
        }
    }

    // Capitalization
    phi.flag("all_caps", words.iter().all(|w| is_upper(w)));
    phi.flag("title_case", words.iter().all(|w| is_title_word(w)));
    phi.flag("first_cap", first_char.is_uppercase());
    phi.flag("starts_lower", first_char.is_lowercase());
    phi.flag("has_initial", words.iter().any(|w| INITIAL_RE.is_match(w)));

    // Length
    let n_words = words.len();
    phi.insert("num_words", n_words as f64);
    phi.flag("1_word", n_words == 1);
    phi.flag("2_words", n_words == 2);
    phi.flag("3_words", n_words == 3);
    phi.flag("4plus_words", n_words >= 4);

    // Characters that rarely occur in names
    phi.flag("has_digit", DIGIT_RE.is_match(entity));
    phi.flag("has_hyphen", entity.contains('-'));
    phi.flag("all_alpha", ALPHA_OR_SPACE_RE.is_match(entity));
    phi.flag("has_date", DATE_RE.is_match(entity));
    phi.flag("has_slash", entity.contains('/'));

    // Right context
    phi.flag("right_open_paren", right == "(");
    phi.flag("right_close_paren", right == ")");
    phi.flag("right_is_b", right == "b");
    phi.flag("right_is_c", right == "c");
    phi.flag("right_is_date", DATE_EXACT_RE.is_match(right));
    phi.flag("right_is_number", is_digits(right));
    phi.flag("right_speaker_verb", SPEAKER_VERBS.contains(right.as_str()));
    phi.flag("right_person_verb", PERSON_VERBS.contains(right.as_str()));

    // Left context
    let left_lower = left.to_lowercase();
    phi.flag("paren_wrap", left == "(" && right == ")");
    phi.flag("left_is_title", TITLES.contains(left_lower.as_str()));
    phi.flag("left_beat", left_lower == "beat");
    phi.flag("left_ranked_num", RANKED_NUM_RE.is_match(left));
    phi.flag("score_context", is_digits(left) && is_digits(right));
    phi.flag("rank_before_paren", is_digits(left) && right == "(");
    phi.flag("left_the", left_lower == "the");
    phi.flag("left_is_b", left == "b");

    // Conjunctions of the features above
    let before_paren = right == "(";
    phi.flag(
        "title_case_before_paren",
        phi.get("title_case") != 0.0 && before_paren,
    );
    phi.flag(
        "title_plus_name",
        phi.get("left_is_title") != 0.0 && phi.get("title_case") != 0.0,
    );
    phi.flag(
        "caps_paren_wrap",
        phi.get("all_caps") != 0.0 && phi.get("paren_wrap") != 0.0,
    );
    phi.flag(
        "initial_before_paren",
        phi.get("has_initial") != 0.0 && before_paren,
    );

    phi.flag(
        "has_particle",
        words
            .iter()
            .any(|w| PARTICLES.contains(w.to_lowercase().as_str())),
    );

    Ok(phi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(text: &str) -> FeatureVector {
        extract_features(&Example::parse(text).unwrap()).unwrap()
    }

    #[test]
    fn test_feature_vector_get_or_zero() {
        let mut phi = FeatureVector::new();
        phi.insert("a", 2.0);
        assert_eq!(phi.get("a"), 2.0);
        assert_eq!(phi.get("b"), 0.0);
        assert!(!phi.contains("b"));
        assert_eq!(phi.len(), 1);
    }

    #[test]
    fn test_title_before_verb() {
        let phi = features("Gen. Ratko Mladic was");
        assert_eq!(phi.get("entity is Ratko Mladic"), 1.0);
        assert_eq!(phi.get("left is Gen."), 1.0);
        assert_eq!(phi.get("right is was"), 1.0);
        assert_eq!(phi.get("entity word: Ratko"), 1.0);
        assert_eq!(phi.get("entity word: Mladic"), 1.0);
        assert_eq!(phi.get("title_case"), 1.0);
        assert_eq!(phi.get("all_caps"), 0.0);
        assert_eq!(phi.get("first_cap"), 1.0);
        assert_eq!(phi.get("starts_lower"), 0.0);
        assert_eq!(phi.get("num_words"), 2.0);
        assert_eq!(phi.get("2_words"), 1.0);
        assert_eq!(phi.get("right_person_verb"), 1.0);
        assert_eq!(phi.get("right_speaker_verb"), 0.0);
        assert_eq!(phi.get("left_is_title"), 0.0);
        assert_eq!(phi.get("title_plus_name"), 0.0);
        assert_eq!(phi.get("has_particle"), 0.0);
        assert_eq!(phi.get("all_alpha"), 1.0);
    }

    #[test]
    fn test_parenthesized_name() {
        let phi = features("( John Smith )");
        assert_eq!(phi.get("paren_wrap"), 1.0);
        assert_eq!(phi.get("title_case"), 1.0);
        assert_eq!(phi.get("all_caps"), 0.0);
        assert_eq!(phi.get("caps_paren_wrap"), 0.0);
        assert_eq!(phi.get("right_close_paren"), 1.0);
        assert_eq!(phi.get("right_open_paren"), 0.0);
    }

    #[test]
    fn test_caps_with_particle() {
        let phi = features("beat VAN DER BERG today");
        assert_eq!(phi.get("left_beat"), 1.0);
        assert_eq!(phi.get("all_caps"), 1.0);
        assert_eq!(phi.get("title_case"), 0.0);
        assert_eq!(phi.get("has_particle"), 1.0);
        assert_eq!(phi.get("3_words"), 1.0);
        assert_eq!(phi.get("num_words"), 3.0);
    }

    #[test]
    fn test_prefix_suffix() {
        let phi = features("the Mauritius into");
        assert_eq!(phi.get("pre2:ma"), 1.0);
        assert_eq!(phi.get("pre3:mau"), 1.0);
        assert_eq!(phi.get("pre4:maur"), 1.0);
        assert_eq!(phi.get("suf2:us"), 1.0);
        assert_eq!(phi.get("suf3:ius"), 1.0);
        assert_eq!(phi.get("suf4:tius"), 1.0);
        assert_eq!(phi.get("left_the"), 1.0);

        let phi = features("( Li Xu )");
        assert_eq!(phi.get("pre2:li"), 1.0);
        assert_eq!(phi.get("suf2:li"), 1.0);
        assert!(!phi.iter().any(|(name, _)| name.starts_with("pre3:")));
    }

    #[test]
    fn test_initial_before_paren() {
        let phi = features("by J. Smith (");
        assert_eq!(phi.get("has_initial"), 1.0);
        assert_eq!(phi.get("title_case"), 1.0);
        assert_eq!(phi.get("initial_before_paren"), 1.0);
        assert_eq!(phi.get("title_case_before_paren"), 1.0);
        assert_eq!(phi.get("all_alpha"), 0.0);
    }

    #[test]
    fn test_title_plus_name() {
        let phi = features("President Bill Clinton said");
        assert_eq!(phi.get("left_is_title"), 1.0);
        assert_eq!(phi.get("title_plus_name"), 1.0);
        assert_eq!(phi.get("right_speaker_verb"), 1.0);
    }

    #[test]
    fn test_left_context_is_case_insensitive() {
        for left in ["president", "PRESIDENT", "President", "pReSiDeNt"] {
            let phi = features(&format!("{} Bill Clinton said", left));
            assert_eq!(phi.get("left_is_title"), 1.0, "{}", left);
        }
        for left in ["beat", "BEAT", "Beat"] {
            assert_eq!(features(&format!("{} Smith 6-3", left)).get("left_beat"), 1.0);
        }
        for left in ["the", "THE", "The"] {
            assert_eq!(features(&format!("{} Smith 6-3", left)).get("left_the"), 1.0);
        }
    }

    #[test]
    fn test_numeric_context() {
        let phi = features("3 Fiorentina 4");
        assert_eq!(phi.get("score_context"), 1.0);
        assert_eq!(phi.get("right_is_number"), 1.0);

        let phi = features("12 Boris Becker (");
        assert_eq!(phi.get("rank_before_paren"), 1.0);
        assert_eq!(phi.get("score_context"), 0.0);

        let phi = features("4. Jan Ullrich 1996-07-21");
        assert_eq!(phi.get("left_ranked_num"), 1.0);
        assert_eq!(phi.get("right_is_date"), 1.0);
        assert_eq!(phi.get("right_is_number"), 0.0);
    }

    #[test]
    fn test_non_name_characters() {
        let phi = features("on 1996-08-27 results b");
        assert_eq!(phi.get("has_date"), 1.0);
        assert_eq!(phi.get("has_digit"), 1.0);
        assert_eq!(phi.get("has_hyphen"), 1.0);
        assert_eq!(phi.get("all_alpha"), 0.0);
        assert_eq!(phi.get("right_is_b"), 1.0);
        assert_eq!(phi.get("starts_lower"), 0.0);

        let phi = features("b US/Canada c");
        assert_eq!(phi.get("has_slash"), 1.0);
        assert_eq!(phi.get("left_is_b"), 1.0);
        assert_eq!(phi.get("right_is_c"), 1.0);
    }

    #[test]
    fn test_numerals_are_not_digits_or_letters() {
        let phi = features("King Louis Ⅳ said");
        assert_eq!(phi.get("has_digit"), 0.0);
        assert_eq!(phi.get("all_alpha"), 0.0);

        let phi = features("x Smith ½");
        assert_eq!(phi.get("right_is_number"), 0.0);

        let phi = features("½ Smith 3");
        assert_eq!(phi.get("score_context"), 0.0);

        let phi = features("٣ Smith (");
        assert_eq!(phi.get("rank_before_paren"), 1.0);

        let phi = features("٣ Smith ٤");
        assert_eq!(phi.get("score_context"), 1.0);
        assert_eq!(phi.get("right_is_number"), 1.0);

        let phi = features("in Route ٦٦ west");
        assert_eq!(phi.get("has_digit"), 1.0);
    }

    #[test]
    fn test_titlecase_letters_are_not_upper() {
        assert!(is_upper("NATO"));
        assert!(is_upper("J."));
        assert!(!is_upper("Aǅ"));
        assert!(!is_upper("."));
        // The tail "ǅB" is not upper-case, so the word still reads as a title.
        assert!(is_title_word("AǅB"));
        assert!(!is_title_word("ǅx"));
    }

    #[test]
    fn test_lower_case_entity() {
        let phi = features("took over from into");
        assert_eq!(phi.get("starts_lower"), 1.0);
        assert_eq!(phi.get("first_cap"), 0.0);
        assert_eq!(phi.get("title_case"), 0.0);
        assert_eq!(phi.get("all_caps"), 0.0);
    }

    #[test]
    fn test_title_case_rejects_all_caps_tail() {
        assert!(is_title_word("Smith"));
        assert!(is_title_word("A"));
        assert!(is_title_word("O'Neill"));
        assert!(!is_title_word("NATO"));
        assert!(!is_title_word("smith"));
        assert!(is_title_word("J."));
    }

    #[test]
    fn test_length_buckets_are_exclusive() {
        let texts = [
            "x A y",
            "x A B y",
            "x A B C y",
            "x A B C D y",
            "x A B C D E F G y",
        ];
        for text in texts {
            let phi = features(text);
            let fired: f64 = ["1_word", "2_words", "3_words", "4plus_words"]
                .iter()
                .map(|name| phi.get(name))
                .sum();
            assert_eq!(fired, 1.0, "{}", text);
        }
        assert_eq!(features("x A B C D E F G y").get("num_words"), 7.0);
    }

    #[test]
    fn test_values_are_binary_except_num_words() {
        for text in [
            "Gen. Ratko Mladic was",
            "( John Smith )",
            "beat VAN DER BERG today",
            "on 1996-08-27 results b",
        ] {
            for (name, value) in features(text).iter() {
                if name == "num_words" {
                    assert!(value >= 1.0 && value.fract() == 0.0);
                } else {
                    assert!(value == 0.0 || value == 1.0, "{} = {}", name, value);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let ex = Example::parse("said Jean-Claude van Damme was").unwrap();
        assert_eq!(extract_features(&ex).unwrap(), extract_features(&ex).unwrap());
    }

    #[test]
    fn test_empty_entity_is_rejected() {
        let ex = Example::parse("( )").unwrap();
        assert!(matches!(
            extract_features(&ex),
            Err(Error::InvalidExample(_))
        ));
    }

    #[test]
    fn test_dot_with_model() {
        let mut model = Model::new();
        let phi: FeatureVector = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        model.increment(0.5, &phi);
        let psi: FeatureVector = [("b", 1.0), ("c", 3.0)].into_iter().collect();
        assert_eq!(psi.dot(&model), 1.0);
    }
}
