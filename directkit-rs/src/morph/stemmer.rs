//! Suffix-stripping stemmer for Russian inflections.
//!
//! This is a hand-tuned table, not a morphological analyzer. It folds the
//! common case/number/gender endings so that "квартира" and "квартиру"
//! share the root "квартир". Anything smarter can be plugged in through
//! the [`Stemmer`] trait.

use crate::text::char_len;
use std::sync::LazyLock;

/// Words of this many characters or fewer are never stemmed.
pub const MIN_STEMMABLE_LEN: usize = 3;

/// A stripped root must keep at least this many characters.
pub const MIN_ROOT_LEN: usize = 3;

/// Inflectional endings recognised by [`SuffixStemmer`].
pub const RUSSIAN_ENDINGS: &[&str] = &[
    // Verbal nouns
    "ением", "ениям", "ениях", "ению", "ения", "ение", "ений",
    // Plural instrumental and adjective cases
    "иями", "ами", "ями", "ого", "его", "ому", "ему", "ыми", "ими", "ией", "ием",
    "иях", "иям",
    // Two-letter case endings
    "ов", "ев", "ей", "ой", "ий", "ый", "ая", "яя", "ое", "ее", "ые", "ие", "ую",
    "юю", "ом", "ем", "ам", "ям", "ах", "ях", "ых", "их", "ия", "ию",
    // Single-letter endings
    "а", "я", "о", "е", "ы", "и", "у", "ю", "ь",
];

// Longest first, so "ами" wins over "и". The sort is stable, so equal
// lengths keep table order.
static ENDINGS_BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut endings = RUSSIAN_ENDINGS.to_vec();
    endings.sort_by_key(|e| std::cmp::Reverse(char_len(e)));
    endings
});

/// Reduces a word to a comparable root.
pub trait Stemmer: Send + Sync {
    /// Return the root of `word`, lowercased.
    fn stem(&self, word: &str) -> String;
}

impl<S: Stemmer + ?Sized> Stemmer for &S {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

impl<S: Stemmer + ?Sized> Stemmer for Box<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

/// The default stemmer: strips at most one ending from [`RUSSIAN_ENDINGS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStemmer;

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        let len = char_len(&word);
        if len <= MIN_STEMMABLE_LEN {
            return word;
        }

        for ending in ENDINGS_BY_LENGTH.iter() {
            if word.ends_with(ending) && len - char_len(ending) >= MIN_ROOT_LEN {
                return word[..word.len() - ending.len()].to_string();
            }
        }

        word
    }
}

/// Stem `word` with the default [`SuffixStemmer`].
pub fn normalize_root(word: &str) -> String {
    SuffixStemmer.stem(word)
}
