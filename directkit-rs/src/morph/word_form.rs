//! Word-form comparison built on a [`Stemmer`].

use crate::morph::stemmer::{MIN_ROOT_LEN, Stemmer, SuffixStemmer};
use crate::text::{char_len, has_token, words};

/// Tokens shorter than this never take the re-stemming fallback.
const FALLBACK_MIN_TOKEN_LEN: usize = 5;

/// Maximum length difference between tokens for the re-stemming fallback.
const FALLBACK_MAX_LEN_DELTA: usize = 3;

/// Minus-phrase words this short always need a literal token match.
const MINUS_LITERAL_MAX_LEN: usize = 3;

/// Word-form comparator over any stemmer.
#[derive(Debug, Clone, Default)]
pub struct WordForms<S = SuffixStemmer> {
    stemmer: S,
}

impl<S: Stemmer> WordForms<S> {
    pub fn new(stemmer: S) -> Self {
        Self { stemmer }
    }

    pub fn stemmer(&self) -> &S {
        &self.stemmer
    }

    /// Whether any word of `phrase` is a form of `target`.
    pub fn matches_word_form(&self, phrase: &str, target: &str) -> bool {
        let target = target.trim().to_lowercase();
        if target.is_empty() {
            return false;
        }

        let target_root = self.stemmer.stem(&target);
        let target_len = char_len(&target);

        words(phrase).iter().any(|word| {
            if *word == target {
                return true;
            }

            let root = self.stemmer.stem(word);
            if char_len(&root) >= MIN_ROOT_LEN
                && char_len(&target_root) >= MIN_ROOT_LEN
                && root == target_root
            {
                log::trace!("word form: '{}' ~ '{}' via root '{}'", word, target, root);
                return true;
            }

            let word_len = char_len(word);
            if word_len >= FALLBACK_MIN_TOKEN_LEN
                && target_len >= FALLBACK_MIN_TOKEN_LEN
                && word_len.abs_diff(target_len) <= FALLBACK_MAX_LEN_DELTA
                && self.stemmer.stem(&root) == self.stemmer.stem(&target_root)
            {
                log::trace!("word form: '{}' ~ '{}' via second stem", word, target);
                return true;
            }

            false
        })
    }

    /// Whether every word of `minus_phrase` occurs in `phrase`.
    ///
    /// Short words (three characters or fewer) must be literal tokens;
    /// longer ones go through [`Self::matches_word_form`] when
    /// `use_word_forms` is set. A blank minus phrase matches nothing.
    pub fn matches_minus_phrase(&self, phrase: &str, minus_phrase: &str, use_word_forms: bool) -> bool {
        let minus_words = words(minus_phrase);
        if minus_words.is_empty() {
            return false;
        }

        let phrase_words = words(phrase);
        minus_words.iter().all(|word| {
            if char_len(word) <= MINUS_LITERAL_MAX_LEN || !use_word_forms {
                has_token(&phrase_words, word)
            } else {
                self.matches_word_form(phrase, word)
            }
        })
    }
}

/// [`WordForms::matches_word_form`] with the default stemmer.
pub fn matches_word_form(phrase: &str, target: &str) -> bool {
    WordForms::<SuffixStemmer>::default().matches_word_form(phrase, target)
}

/// [`WordForms::matches_minus_phrase`] with the default stemmer.
pub fn matches_minus_phrase(phrase: &str, minus_phrase: &str, use_word_forms: bool) -> bool {
    WordForms::<SuffixStemmer>::default().matches_minus_phrase(phrase, minus_phrase, use_word_forms)
}
