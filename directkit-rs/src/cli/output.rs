//! Output formatting for CLI commands.

use crate::config::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render a serializable value in the configured format.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let text = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Toml => toml::to_string_pretty(value)?,
        };
        Ok(text)
    }

    /// Print a serializable value in the configured format.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    /// Print a message if not in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        matched: bool,
        words: Vec<String>,
    }

    fn sample() -> Sample {
        Sample {
            matched: true,
            words: vec!["окна".to_string()],
        }
    }

    #[test]
    fn test_render_json() {
        let out = Output::new(OutputFormat::Json, false).render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["matched"], true);
        assert_eq!(value["words"][0], "окна");
    }

    #[test]
    fn test_render_yaml() {
        let out = Output::new(OutputFormat::Yaml, false).render(&sample()).unwrap();
        assert!(out.contains("matched: true"));
    }

    #[test]
    fn test_render_toml() {
        let out = Output::new(OutputFormat::Toml, true).render(&sample()).unwrap();
        assert!(out.contains("matched = true"));
    }
}
