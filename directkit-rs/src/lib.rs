//! DirectKit - phrase matching for Yandex.Direct keyword work.
//!
//! # Overview
//!
//! - Two query grammars, picked explicitly by the caller:
//!   - [`FreeTextOperatorMatcher`]: `-word`, `+word`, `"word"` and plain words
//!     combined, with optional Russian word-form folding
//!   - [`ExactOperatorMatcher`]: Yandex-Direct operators (`"exact phrase"`,
//!     `[ordered words]`, `!form`, `+word`)
//! - A pluggable [`Stemmer`] with a suffix-stripping default
//! - Minus-phrase detection and phrase list ordering
//!
//! # Example
//!
//! ```
//! use directkit::{match_with_yandex_operators, matches_search, matches_word_form};
//!
//! assert!(matches_search("купить квартиру", "квартира -аренда", true));
//! assert!(match_with_yandex_operators("купить окна пвх", "[окна пвх]"));
//! assert!(!match_with_yandex_operators("купить окна пвх", "\"окна пвх\""));
//! assert!(matches_word_form("купить квартиру", "квартира"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod morph;
pub mod phrases;
pub mod search;
pub mod text;

// Re-export main types at crate root
pub use config::Config;
pub use error::{DirectKitError, Result};
pub use morph::{
    matches_minus_phrase, matches_word_form, normalize_root, Stemmer, SuffixStemmer, WordForms,
};
pub use phrases::{filter_phrases, mark_minus_candidates, sort_phrases, Phrase};
pub use search::{
    match_with_yandex_operators, matches_search, ExactOperatorMatcher, FreeTextOperatorMatcher,
    MatchStrategy, Matcher, QueryMatcher,
};
