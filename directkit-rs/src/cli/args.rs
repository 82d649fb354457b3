//! CLI argument definitions using clap.

use crate::config::{Config, OutputFormat};
use crate::search::MatchStrategy;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "directkit")]
#[command(author, version, about = "Yandex.Direct phrase matching and minus-word tools", long_about = None)]
pub struct Cli {
    /// Path to a config file (overrides DIRECTKIT_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format from flags, falling back to the config file.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            config.output.format
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Test one phrase against a query
    Match(MatchArgs),

    /// Show how a query is parsed
    Parse(ParseArgs),

    /// Keep the phrases that match a query
    Filter(FilterArgs),

    /// Order phrases: confirmed minus words last, the rest by count
    Sort(InputArgs),

    /// Mark phrases hit by minus phrases as minus-word candidates
    #[command(name = "mark-minus")]
    MarkMinus(MarkMinusArgs),

    /// Print the stemmed root of each word
    Stem(StemArgs),

    /// Check whether a phrase contains a form of a word
    #[command(name = "word-form")]
    WordForm(WordFormArgs),

    /// Check whether a minus phrase hits a phrase
    Minus(MinusArgs),
}

/// Query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Yandex operators: "exact phrase", [ordered words], !form, +word
    Exact,
    /// Free text: -word, +word, "word" and plain words combined
    FreeText,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exact => MatchStrategy::Exact,
            StrategyArg::FreeText => MatchStrategy::FreeText,
        }
    }
}

/// Word-form switches shared by several commands.
#[derive(Args, Debug, Clone, Default)]
pub struct WordFormFlags {
    /// Match other inflections of the same word
    #[arg(long, conflicts_with = "no_word_forms")]
    pub word_forms: bool,

    /// Match literal words only (overrides the config file)
    #[arg(long)]
    pub no_word_forms: bool,
}

impl WordFormFlags {
    pub fn resolve(&self, config: &Config) -> bool {
        if self.word_forms {
            true
        } else if self.no_word_forms {
            false
        } else {
            config.matching.use_word_forms
        }
    }
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Candidate phrase
    pub phrase: String,

    /// Query, possibly with operators
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Query grammar (default from config)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    #[command(flatten)]
    pub forms: WordFormFlags,

    /// Exit with code 2 when the phrase does not match
    #[arg(long)]
    pub fail_on_miss: bool,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Query to parse
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Query grammar (default from config)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Phrase file: a JSON array of phrase records or one phrase per line
    /// (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Query, possibly with operators
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Query grammar (default from config)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    #[command(flatten)]
    pub forms: WordFormFlags,

    /// Sort the result like `sort` does
    #[arg(long)]
    pub sorted: bool,
}

#[derive(Args, Debug)]
pub struct MarkMinusArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minus phrase (repeatable)
    #[arg(short, long = "minus", required = true)]
    pub minus: Vec<String>,

    #[command(flatten)]
    pub forms: WordFormFlags,
}

#[derive(Args, Debug)]
pub struct StemArgs {
    /// Words to stem
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[derive(Args, Debug)]
pub struct WordFormArgs {
    /// Phrase to search in
    pub phrase: String,

    /// Word whose forms to look for
    pub target: String,
}

#[derive(Args, Debug)]
pub struct MinusArgs {
    /// Candidate phrase
    pub phrase: String,

    /// Minus phrase; every word must be present for a hit
    #[arg(allow_hyphen_values = true)]
    pub minus_phrase: String,

    #[command(flatten)]
    pub forms: WordFormFlags,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::parse_from([
            "directkit", "match", "купить окна", "окна", "--strategy", "exact", "--yaml",
        ]);
        assert_eq!(cli.output_format(&Config::default()), OutputFormat::Yaml);
        match cli.command {
            Commands::Match(args) => {
                assert_eq!(args.phrase, "купить окна");
                assert_eq!(args.strategy, Some(StrategyArg::Exact));
                assert!(!args.fail_on_miss);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_word_form_flags_resolve() {
        let mut config = Config::default();
        config.matching.use_word_forms = true;

        assert!(WordFormFlags::default().resolve(&config));
        let off = WordFormFlags {
            word_forms: false,
            no_word_forms: true,
        };
        assert!(!off.resolve(&config));

        config.matching.use_word_forms = false;
        let on = WordFormFlags {
            word_forms: true,
            no_word_forms: false,
        };
        assert!(on.resolve(&config));
    }

    #[test]
    fn test_output_format_falls_back_to_config() {
        let cli = Cli::parse_from(["directkit", "stem", "окна"]);
        let mut config = Config::default();
        config.output.format = OutputFormat::Toml;
        assert_eq!(cli.output_format(&config), OutputFormat::Toml);
    }

    #[test]
    fn test_mark_minus_requires_minus() {
        assert!(Cli::try_parse_from(["directkit", "mark-minus"]).is_err());
    }
}
