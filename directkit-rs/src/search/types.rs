//! Parsed query forms for the two operator grammars.

use serde::{Deserialize, Serialize};

/// Which query grammar a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Yandex-Direct operators for the cluster search box: a whole-query
    /// `"..."` or `[...]`, or `!word`/`+word` tokens.
    Exact,
    /// Free-text filter: `-word`, `+word`, `"word"` mixed freely with plain
    /// words, optionally folded by word forms.
    #[default]
    FreeText,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::Exact => "exact",
            MatchStrategy::FreeText => "free_text",
        }
    }
}

/// A `+`/`-` operand of the free-text grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// The operand text, lowercased. Quoted operands may hold several words.
    pub text: String,
    /// Written in quotes (`-"word"`, `+"word"`): literal tokens only, never
    /// word forms.
    pub exact: bool,
}

impl Term {
    pub fn new(text: impl Into<String>, exact: bool) -> Self {
        Self {
            text: text.into(),
            exact,
        }
    }
}

/// A free-text query split into its operator classes.
///
/// Every non-empty class is a conjunct of the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Words that must not occur in the phrase.
    pub negative: Vec<Term>,
    /// Words that must occur in the phrase.
    pub required: Vec<Term>,
    /// Words from `"..."` groups, required as literal tokens.
    pub quoted: Vec<String>,
    /// Everything else.
    pub plain: Vec<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.negative.is_empty()
            && self.required.is_empty()
            && self.quoted.is_empty()
            && self.plain.is_empty()
    }
}

/// A query in the Yandex operator grammar. Exactly one branch applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YandexQuery {
    /// `"a b"`: the phrase has exactly these words, in any order.
    ExactPhrase { words: Vec<String> },
    /// `[a b]`: these words appear adjacent and in this order.
    OrderedPhrase { words: Vec<String> },
    /// `!a rest`: each form is a literal token, each rest word a substring.
    ExactForms { forms: Vec<String>, rest: Vec<String> },
    /// `+a rest`: each required word is a literal token, each rest word a
    /// substring.
    RequiredWords { required: Vec<String>, rest: Vec<String> },
    /// No operators: each word is a substring of the phrase.
    AllWords { words: Vec<String> },
}
