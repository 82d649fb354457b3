//! Keyword phrase records as the clustering view lists them.

use crate::morph::{Stemmer, WordForms};
use crate::search::{Matcher, QueryMatcher};
use serde::{Deserialize, Serialize};

/// One keyword phrase with its Wordstat count and minus-word state.
///
/// A phrase with `is_minus_word` set and a `minus_term` is a candidate: a
/// minus phrase matched it and the user has not confirmed it yet. Once
/// confirmed, `minus_term` is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub phrase: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub is_minus_word: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minus_term: Option<String>,
}

impl Phrase {
    pub fn new(phrase: impl Into<String>, count: u64) -> Self {
        Self {
            phrase: phrase.into(),
            count,
            is_minus_word: false,
            minus_term: None,
        }
    }

    /// A minus word the user has already accepted.
    pub fn is_confirmed_minus(&self) -> bool {
        self.is_minus_word && self.minus_term.is_none()
    }

    /// A minus word suggested by a minus phrase, awaiting confirmation.
    pub fn is_minus_candidate(&self) -> bool {
        self.is_minus_word && self.minus_term.is_some()
    }

    /// Accept this phrase as a minus word.
    pub fn confirm_minus(&mut self) {
        self.is_minus_word = true;
        self.minus_term = None;
    }
}

/// Order phrases for display: confirmed minus words last, everything else by
/// descending count. The sort is stable.
pub fn sort_phrases(mut phrases: Vec<Phrase>) -> Vec<Phrase> {
    phrases.sort_by(|a, b| {
        a.is_confirmed_minus()
            .cmp(&b.is_confirmed_minus())
            .then_with(|| b.count.cmp(&a.count))
    });
    phrases
}

/// Keep the phrases `matcher` accepts for `query`. A blank query keeps all.
pub fn filter_phrases<'a>(phrases: &'a [Phrase], query: &str, matcher: &Matcher) -> Vec<&'a Phrase> {
    if query.trim().is_empty() {
        return phrases.iter().collect();
    }
    phrases
        .iter()
        .filter(|p| matcher.is_match(&p.phrase, query))
        .collect()
}

/// Mark every phrase that one of `minus_phrases` hits as a minus candidate.
///
/// Confirmed minus words are left alone. The first matching minus phrase is
/// recorded in `minus_term`. Returns how many phrases were marked.
pub fn mark_minus_candidates<S: Stemmer>(
    phrases: &mut [Phrase],
    minus_phrases: &[String],
    forms: &WordForms<S>,
    use_word_forms: bool,
) -> usize {
    let mut marked = 0;
    for phrase in phrases.iter_mut().filter(|p| !p.is_confirmed_minus()) {
        let hit = minus_phrases
            .iter()
            .find(|m| forms.matches_minus_phrase(&phrase.phrase, m, use_word_forms));
        if let Some(term) = hit {
            log::debug!("{:?} marked by minus phrase {:?}", phrase.phrase, term);
            phrase.is_minus_word = true;
            phrase.minus_term = Some(term.clone());
            marked += 1;
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::SuffixStemmer;
    use crate::search::MatchStrategy;
    use pretty_assertions::assert_eq;

    fn minus(phrase: &str, count: u64, term: Option<&str>) -> Phrase {
        Phrase {
            phrase: phrase.to_string(),
            count,
            is_minus_word: true,
            minus_term: term.map(str::to_string),
        }
    }

    // -- sort_phrases --

    #[test]
    fn test_sort_confirmed_minus_last() {
        let sorted = sort_phrases(vec![
            minus("a", 5, None),
            Phrase::new("b", 10),
            minus("c", 1, Some("x")),
        ]);
        let names: Vec<&str> = sorted.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_count_desc() {
        let sorted = sort_phrases(vec![
            Phrase::new("low", 1),
            Phrase::new("high", 100),
            Phrase::new("mid", 50),
        ]);
        let counts: Vec<u64> = sorted.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![100, 50, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let sorted = sort_phrases(vec![
            Phrase::new("first", 7),
            minus("confirmed", 99, None),
            Phrase::new("second", 7),
            Phrase::new("third", 7),
        ]);
        let names: Vec<&str> = sorted.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third", "confirmed"]);
    }

    // -- Serialization --

    #[test]
    fn test_phrase_json_shape() {
        let p: Phrase =
            serde_json::from_str(r#"{"phrase":"окна","count":3,"isMinusWord":true,"minusTerm":"x"}"#)
                .unwrap();
        assert!(p.is_minus_candidate());

        let p: Phrase = serde_json::from_str(r#"{"phrase":"окна"}"#).unwrap();
        assert_eq!(p, Phrase::new("окна", 0));
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"phrase":"окна","count":0,"isMinusWord":false}"#
        );
    }

    // -- filter_phrases --

    #[test]
    fn test_filter_by_strategy() {
        let phrases = vec![
            Phrase::new("купить окна пвх", 10),
            Phrase::new("окна пвх", 5),
            Phrase::new("двери", 1),
        ];

        let exact = Matcher::new(MatchStrategy::Exact, false);
        let hits = filter_phrases(&phrases, "\"окна пвх\"", &exact);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phrase, "окна пвх");

        let free = Matcher::new(MatchStrategy::FreeText, false);
        let hits = filter_phrases(&phrases, "окна -купить", &free);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].phrase, "окна пвх");
    }

    #[test]
    fn test_filter_blank_query_keeps_all() {
        let phrases = vec![Phrase::new("a", 1), Phrase::new("b", 2)];
        let free = Matcher::new(MatchStrategy::FreeText, true);
        assert_eq!(filter_phrases(&phrases, "  ", &free).len(), 2);
    }

    // -- Minus candidates --

    #[test]
    fn test_mark_minus_candidates() {
        let mut phrases = vec![
            Phrase::new("окна своими руками", 4),
            Phrase::new("купить пластиковые окна", 40),
            minus("окна бу", 2, None),
        ];
        let minus_phrases = vec!["своими руками".to_string(), "бу".to_string()];

        let forms = WordForms::<SuffixStemmer>::default();
        let marked = mark_minus_candidates(&mut phrases, &minus_phrases, &forms, true);
        assert_eq!(marked, 1);
        assert!(phrases[0].is_minus_candidate());
        assert_eq!(phrases[0].minus_term.as_deref(), Some("своими руками"));
        assert!(!phrases[1].is_minus_word);
        // confirmed entries are untouched
        assert!(phrases[2].is_confirmed_minus());
    }

    #[test]
    fn test_mark_minus_with_word_forms() {
        let mut phrases = vec![Phrase::new("ремонт квартиры", 4)];
        let minus_phrases = vec!["квартира".to_string()];
        let forms = WordForms::<SuffixStemmer>::default();

        assert_eq!(mark_minus_candidates(&mut phrases, &minus_phrases, &forms, false), 0);
        assert_eq!(mark_minus_candidates(&mut phrases, &minus_phrases, &forms, true), 1);
    }

    #[test]
    fn test_confirm_minus() {
        let mut p = minus("окна бу", 2, Some("бу"));
        assert!(!p.is_confirmed_minus());
        p.confirm_minus();
        assert!(p.is_confirmed_minus());
    }
}
