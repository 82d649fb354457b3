//! Regex-driven parsers for the free-text and Yandex operator grammars.
//!
//! Neither parser validates its input. A fragment no pattern claims (an
//! unbalanced quote, a lone `-`) is left in the text and ends up as a
//! plain word.

use crate::search::types::{ParsedQuery, Term, YandexQuery};
use crate::text::words;
use regex::Regex;
use std::sync::LazyLock;

// Operators only count at the start of a token, so "wi-fi" stays one word.
// The leading whitespace is consumed by the match and replaced by a space.
static NEGATIVE_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)-"([^"]*)""#).unwrap());
static NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)-([^\s"]+)"#).unwrap());
static REQUIRED_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)\+"([^"]*)""#).unwrap());
static REQUIRED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)\+([^\s"]+)"#).unwrap());
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

static EXACT_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)!(\S+)").unwrap());
static REQUIRED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)\+(\S+)").unwrap());

/// Pull every capture of `re` out of `text`, returning the captured operands
/// (trimmed, blanks dropped) and the text with the matches blanked out.
fn extract(re: &Regex, text: &str) -> (Vec<String>, String) {
    let found = re
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let rest = re.replace_all(text, " ").into_owned();
    (found, rest)
}

/// Parse a free-text filter query.
///
/// Operator classes are extracted in a fixed order (`-"…"`, `-word`,
/// `+"…"`, `+word`, `"…"`), each one stripped from the text before the next
/// runs; what remains becomes plain words.
pub fn parse_free_text(query: &str) -> ParsedQuery {
    let text = query.to_lowercase();

    let (negative_exact, text) = extract(&NEGATIVE_EXACT, &text);
    let (negative, text) = extract(&NEGATIVE, &text);
    let (required_exact, text) = extract(&REQUIRED_EXACT, &text);
    let (required, text) = extract(&REQUIRED, &text);
    let (quoted, text) = extract(&QUOTED, &text);

    let parsed = ParsedQuery {
        negative: negative_exact
            .into_iter()
            .map(|w| Term::new(w, true))
            .chain(negative.into_iter().map(|w| Term::new(w, false)))
            .collect(),
        required: required_exact
            .into_iter()
            .map(|w| Term::new(w, true))
            .chain(required.into_iter().map(|w| Term::new(w, false)))
            .collect(),
        quoted: quoted.iter().flat_map(|group| words(group)).collect(),
        plain: words(&text),
    };

    log::debug!("free-text query {:?} parsed as {:?}", query, parsed);
    parsed
}

/// Parse a query in the Yandex operator grammar.
pub fn parse_yandex(query: &str) -> YandexQuery {
    let text = query.trim().to_lowercase();

    let parsed = if let Some(inner) = wrapped(&text, '"', '"') {
        YandexQuery::ExactPhrase {
            words: words(inner),
        }
    } else if let Some(inner) = wrapped(&text, '[', ']') {
        YandexQuery::OrderedPhrase {
            words: words(inner),
        }
    } else if EXACT_FORM.is_match(&text) {
        let (forms, rest) = extract(&EXACT_FORM, &text);
        YandexQuery::ExactForms {
            forms,
            rest: words(&rest),
        }
    } else if REQUIRED_WORD.is_match(&text) {
        let (required, rest) = extract(&REQUIRED_WORD, &text);
        YandexQuery::RequiredWords {
            required,
            rest: words(&rest),
        }
    } else {
        YandexQuery::AllWords {
            words: words(&text),
        }
    };

    log::debug!("yandex query {:?} parsed as {:?}", query, parsed);
    parsed
}

/// The text between `open` and `close` if `text` is wrapped in them.
fn wrapped(text: &str, open: char, close: char) -> Option<&str> {
    if text.chars().count() < 2 {
        return None;
    }
    text.strip_prefix(open)?.strip_suffix(close)
}
