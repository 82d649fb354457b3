//! Reading phrase lists from a file or stdin.

use crate::cli::args::InputArgs;
use crate::error::{DirectKitError, Result};
use crate::phrases::Phrase;
use std::io::{self, Read};

/// Read phrases from `--input` or, when it is absent, from piped stdin.
pub fn read_phrases(args: &InputArgs) -> Result<Vec<Phrase>> {
    let text = if let Some(path) = &args.input {
        std::fs::read_to_string(path)?
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        return Err(DirectKitError::InvalidInput(
            "no phrases provided (use --input or pipe them on stdin)".to_string(),
        ));
    };
    parse_phrases(&text)
}

/// Parse a phrase list: a JSON array of phrase records when the text starts
/// with `[`, otherwise one phrase per non-blank line with a zero count.
pub fn parse_phrases(text: &str) -> Result<Vec<Phrase>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Phrase::new(line, 0))
        .collect())
}

// Check if stdin is a terminal (for reading from pipe)
mod atty {
    pub enum Stream {
        Stdin,
    }

    pub fn isnt(stream: Stream) -> bool {
        match stream {
            Stream::Stdin => {
                #[cfg(unix)]
                {
                    use std::os::unix::io::AsRawFd;
                    unsafe { libc::isatty(std::io::stdin().as_raw_fd()) == 0 }
                }
                #[cfg(not(unix))]
                {
                    true
                }
            }
        }
    }
}
