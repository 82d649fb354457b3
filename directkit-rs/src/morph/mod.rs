//! Russian word-form folding: a pluggable stemmer and the comparators
//! built on top of it.

pub mod stemmer;
pub mod word_form;

pub use stemmer::{normalize_root, Stemmer, SuffixStemmer, RUSSIAN_ENDINGS};
pub use word_form::{matches_minus_phrase, matches_word_form, WordForms};
