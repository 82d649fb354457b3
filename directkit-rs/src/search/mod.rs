//! Phrase search with Yandex-Direct style operators.
//!
//! Two grammars live here side by side and are never mixed:
//! [`FreeTextOperatorMatcher`] for the general filter box and
//! [`ExactOperatorMatcher`] for the cluster search box.

pub mod matcher;
pub mod parser;
pub mod types;

pub use matcher::{
    match_with_yandex_operators, matches_search, ExactOperatorMatcher, FreeTextOperatorMatcher,
    Matcher, QueryMatcher,
};
pub use parser::{parse_free_text, parse_yandex};
pub use types::*;
