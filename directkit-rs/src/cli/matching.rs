//! Single-phrase commands: match, parse, stem, word-form, minus.

use crate::cli::args::{MatchArgs, MinusArgs, ParseArgs, StemArgs, WordFormArgs};
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{ExitCode, Result};
use crate::morph::{normalize_root, matches_minus_phrase, matches_word_form};
use crate::search::{
    parse_free_text, parse_yandex, MatchStrategy, Matcher, ParsedQuery, QueryMatcher, YandexQuery,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub phrase: String,
    pub query: String,
    pub strategy: MatchStrategy,
    pub use_word_forms: bool,
    pub matched: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ParsedForm {
    FreeText(ParsedQuery),
    Exact(YandexQuery),
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub query: String,
    pub strategy: MatchStrategy,
    pub parsed: ParsedForm,
}

#[derive(Debug, Serialize)]
pub struct StemEntry {
    pub word: String,
    pub root: String,
}

#[derive(Debug, Serialize)]
pub struct StemResponse {
    pub stems: Vec<StemEntry>,
}

#[derive(Debug, Serialize)]
pub struct WordFormResponse {
    pub phrase: String,
    pub target: String,
    pub matched: bool,
}

#[derive(Debug, Serialize)]
pub struct MinusResponse {
    pub phrase: String,
    pub minus_phrase: String,
    pub use_word_forms: bool,
    pub matched: bool,
}

pub fn run_match(args: &MatchArgs, config: &Config, output: &Output) -> Result<ExitCode> {
    let strategy = args
        .strategy
        .map(MatchStrategy::from)
        .unwrap_or(config.matching.strategy);
    let use_word_forms = args.forms.resolve(config);
    let matcher = Matcher::new(strategy, use_word_forms);

    let matched = if strategy == MatchStrategy::FreeText && args.query.trim().is_empty() {
        false
    } else {
        matcher.is_match(&args.phrase, &args.query)
    };

    output.print(&MatchResponse {
        phrase: args.phrase.clone(),
        query: args.query.clone(),
        strategy,
        use_word_forms,
        matched,
    })?;

    if !matched && args.fail_on_miss {
        Ok(ExitCode::NoMatch)
    } else {
        Ok(ExitCode::Success)
    }
}

pub fn run_parse(args: &ParseArgs, config: &Config, output: &Output) -> Result<()> {
    let strategy = args
        .strategy
        .map(MatchStrategy::from)
        .unwrap_or(config.matching.strategy);
    let parsed = match strategy {
        MatchStrategy::FreeText => ParsedForm::FreeText(parse_free_text(&args.query)),
        MatchStrategy::Exact => ParsedForm::Exact(parse_yandex(&args.query)),
    };
    output.print(&ParseResponse {
        query: args.query.clone(),
        strategy,
        parsed,
    })
}

pub fn run_stem(args: &StemArgs, output: &Output) -> Result<()> {
    let stems = args
        .words
        .iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|word| StemEntry {
            word: word.to_string(),
            root: normalize_root(word),
        })
        .collect();
    output.print(&StemResponse { stems })
}

pub fn run_word_form(args: &WordFormArgs, output: &Output) -> Result<()> {
    output.print(&WordFormResponse {
        phrase: args.phrase.clone(),
        target: args.target.clone(),
        matched: matches_word_form(&args.phrase, &args.target),
    })
}

pub fn run_minus(args: &MinusArgs, config: &Config, output: &Output) -> Result<()> {
    let use_word_forms = args.forms.resolve(config);
    output.print(&MinusResponse {
        phrase: args.phrase.clone(),
        minus_phrase: args.minus_phrase.clone(),
        use_word_forms,
        matched: matches_minus_phrase(&args.phrase, &args.minus_phrase, use_word_forms),
    })
}
