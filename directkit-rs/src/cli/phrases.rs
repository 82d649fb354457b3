//! Phrase-list commands: filter, sort, mark-minus.

use crate::cli::args::{FilterArgs, InputArgs, MarkMinusArgs};
use crate::cli::input::read_phrases;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::morph::{SuffixStemmer, WordForms};
use crate::phrases::{filter_phrases, mark_minus_candidates, sort_phrases, Phrase};
use crate::search::{MatchStrategy, Matcher};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PhrasesResponse {
    pub total: usize,
    pub phrases: Vec<Phrase>,
}

impl PhrasesResponse {
    fn new(phrases: Vec<Phrase>) -> Self {
        Self {
            total: phrases.len(),
            phrases,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub query: String,
    pub strategy: MatchStrategy,
    pub use_word_forms: bool,
    pub total: usize,
    pub phrases: Vec<Phrase>,
}

#[derive(Debug, Serialize)]
pub struct MarkMinusResponse {
    pub marked: usize,
    pub phrases: Vec<Phrase>,
}

pub fn run_filter(args: &FilterArgs, config: &Config, output: &Output) -> Result<()> {
    let phrases = read_phrases(&args.input)?;
    let strategy = args
        .strategy
        .map(MatchStrategy::from)
        .unwrap_or(config.matching.strategy);
    let use_word_forms = args.forms.resolve(config);
    let matcher = Matcher::new(strategy, use_word_forms);

    let mut hits: Vec<Phrase> = filter_phrases(&phrases, &args.query, &matcher)
        .into_iter()
        .cloned()
        .collect();
    if args.sorted {
        hits = sort_phrases(hits);
    }
    output.info(&format!("{} of {} phrases match", hits.len(), phrases.len()));

    output.print(&FilterResponse {
        query: args.query.clone(),
        strategy,
        use_word_forms,
        total: hits.len(),
        phrases: hits,
    })
}

pub fn run_sort(args: &InputArgs, output: &Output) -> Result<()> {
    let phrases = read_phrases(args)?;
    output.print(&PhrasesResponse::new(sort_phrases(phrases)))
}

pub fn run_mark_minus(args: &MarkMinusArgs, config: &Config, output: &Output) -> Result<()> {
    let mut phrases = read_phrases(&args.input)?;
    let use_word_forms = args.forms.resolve(config);
    let forms = WordForms::<SuffixStemmer>::default();

    let marked = mark_minus_candidates(&mut phrases, &args.minus, &forms, use_word_forms);
    if marked == 0 {
        output.warn("no phrase matched any minus phrase");
    }
    output.print(&MarkMinusResponse { marked, phrases })
}
