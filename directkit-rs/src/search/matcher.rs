//! Query evaluation against a candidate phrase.

use crate::morph::{Stemmer, SuffixStemmer, WordForms};
use crate::search::parser::{parse_free_text, parse_yandex};
use crate::search::types::{MatchStrategy, ParsedQuery, Term, YandexQuery};
use crate::text::{has_token, words};

/// Something that decides whether a phrase satisfies a query.
pub trait QueryMatcher {
    fn is_match(&self, phrase: &str, query: &str) -> bool;
}

// ============================================================================
// Free-text grammar
// ============================================================================

/// Matcher for the free-text filter box.
///
/// Operators combine freely: `-word`, `-"word"`, `+word`, `+"word"`,
/// `"word"` and plain words. With word forms enabled, unquoted `+`/`-`
/// operands and plain words also match other inflections of the same root.
#[derive(Debug, Clone, Default)]
pub struct FreeTextOperatorMatcher<S = SuffixStemmer> {
    forms: WordForms<S>,
    use_word_forms: bool,
}

impl FreeTextOperatorMatcher<SuffixStemmer> {
    pub fn new(use_word_forms: bool) -> Self {
        Self {
            forms: WordForms::default(),
            use_word_forms,
        }
    }
}

impl<S: Stemmer> FreeTextOperatorMatcher<S> {
    pub fn with_stemmer(stemmer: S, use_word_forms: bool) -> Self {
        Self {
            forms: WordForms::new(stemmer),
            use_word_forms,
        }
    }

    pub fn uses_word_forms(&self) -> bool {
        self.use_word_forms
    }

    /// Parse `query` and evaluate it against `phrase`.
    pub fn matches(&self, phrase: &str, query: &str) -> bool {
        self.evaluate(phrase, &parse_free_text(query))
    }

    /// Evaluate an already parsed query. Conjuncts are checked in order
    /// (negative, required, quoted, plain) and the first failure wins.
    pub fn evaluate(&self, phrase: &str, query: &ParsedQuery) -> bool {
        let phrase_lower = phrase.to_lowercase();
        let phrase_words = words(&phrase_lower);

        if let Some(term) = query
            .negative
            .iter()
            .find(|t| self.term_present(&phrase_lower, &phrase_words, t))
        {
            log::trace!("{:?}: excluded by -{}", phrase, term.text);
            return false;
        }

        if let Some(term) = query
            .required
            .iter()
            .find(|t| !self.term_present(&phrase_lower, &phrase_words, t))
        {
            log::trace!("{:?}: missing +{}", phrase, term.text);
            return false;
        }

        if !query.quoted.iter().all(|w| has_token(&phrase_words, w)) {
            return false;
        }

        query.plain.iter().all(|w| {
            if self.use_word_forms {
                self.forms.matches_word_form(&phrase_lower, w)
            } else {
                phrase_lower.contains(w.as_str())
            }
        })
    }

    fn term_present(&self, phrase: &str, phrase_words: &[String], term: &Term) -> bool {
        if term.exact {
            let term_words = words(&term.text);
            return !term_words.is_empty() && term_words.iter().all(|w| has_token(phrase_words, w));
        }
        has_token(phrase_words, &term.text)
            || (self.use_word_forms && self.forms.matches_word_form(phrase, &term.text))
    }
}

impl<S: Stemmer> QueryMatcher for FreeTextOperatorMatcher<S> {
    fn is_match(&self, phrase: &str, query: &str) -> bool {
        self.matches(phrase, query)
    }
}

/// Free-text match used by the general filter box.
///
/// A blank search term means "nothing to search for" and matches nothing.
pub fn matches_search(phrase: &str, search_term: &str, use_word_forms: bool) -> bool {
    if search_term.trim().is_empty() {
        return false;
    }
    FreeTextOperatorMatcher::new(use_word_forms).matches(phrase, search_term)
}

// ============================================================================
// Yandex operator grammar
// ============================================================================

/// Matcher for the cluster search box, which speaks Yandex-Direct operators.
///
/// Only one branch applies per query: a whole-query `"..."` (same word set),
/// a whole-query `[...]` (adjacent, ordered), `!word` tokens, `+word`
/// tokens, or plain substrings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactOperatorMatcher;

impl ExactOperatorMatcher {
    pub fn matches(&self, phrase: &str, query: &str) -> bool {
        self.evaluate(phrase, &parse_yandex(query))
    }

    pub fn evaluate(&self, phrase: &str, query: &YandexQuery) -> bool {
        let phrase_lower = phrase.to_lowercase();
        let phrase_words = words(&phrase_lower);

        match query {
            YandexQuery::ExactPhrase { words } => {
                words.iter().all(|w| has_token(&phrase_words, w))
                    && phrase_words.iter().all(|w| has_token(words, w))
            }
            YandexQuery::OrderedPhrase { words } => contains_window(&phrase_words, words),
            YandexQuery::ExactForms { forms: tokens, rest }
            | YandexQuery::RequiredWords {
                required: tokens,
                rest,
            } => {
                tokens.iter().all(|w| has_token(&phrase_words, w))
                    && rest.iter().all(|w| phrase_lower.contains(w.as_str()))
            }
            YandexQuery::AllWords { words } => {
                words.iter().all(|w| phrase_lower.contains(w.as_str()))
            }
        }
    }
}

impl QueryMatcher for ExactOperatorMatcher {
    fn is_match(&self, phrase: &str, query: &str) -> bool {
        self.matches(phrase, query)
    }
}

/// Yandex-operator match used by the cluster search box.
pub fn match_with_yandex_operators(phrase: &str, query: &str) -> bool {
    ExactOperatorMatcher.matches(phrase, query)
}

/// Whether `needle` occurs as a contiguous run inside `haystack`.
fn contains_window(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

// ============================================================================
// Strategy selection
// ============================================================================

/// One of the two grammars, chosen explicitly by the caller.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(ExactOperatorMatcher),
    FreeText(FreeTextOperatorMatcher),
}

impl Matcher {
    /// Build a matcher for `strategy`. `use_word_forms` only affects the
    /// free-text grammar.
    pub fn new(strategy: MatchStrategy, use_word_forms: bool) -> Self {
        match strategy {
            MatchStrategy::Exact => Matcher::Exact(ExactOperatorMatcher),
            MatchStrategy::FreeText => {
                Matcher::FreeText(FreeTextOperatorMatcher::new(use_word_forms))
            }
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        match self {
            Matcher::Exact(_) => MatchStrategy::Exact,
            Matcher::FreeText(_) => MatchStrategy::FreeText,
        }
    }
}

impl QueryMatcher for Matcher {
    fn is_match(&self, phrase: &str, query: &str) -> bool {
        match self {
            Matcher::Exact(m) => m.matches(phrase, query),
            Matcher::FreeText(m) => m.matches(phrase, query),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
