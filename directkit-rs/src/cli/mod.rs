//! CLI command implementations.

pub mod args;
pub mod input;
pub mod matching;
pub mod output;
pub mod phrases;

pub use args::{Cli, Commands};
pub use output::Output;

/// Install the `env_logger` backend. `RUST_LOG` wins over the flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
