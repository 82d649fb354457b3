//! Word splitting shared by the stemmer and both query grammars.

/// Lowercase `text` and split it on whitespace.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether `word` appears as a whole token in `tokens`.
pub fn has_token(tokens: &[String], word: &str) -> bool {
    tokens.iter().any(|t| t == word)
}

/// Number of characters (not bytes) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_lowercases_and_splits() {
        assert_eq!(words("  Купить   ОКНА\tпвх "), vec!["купить", "окна", "пвх"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_has_token_is_whole_word() {
        let tokens = words("пластиковые окна");
        assert!(has_token(&tokens, "окна"));
        assert!(!has_token(&tokens, "окн"));
    }

    #[test]
    fn test_char_len_counts_cyrillic_chars() {
        assert_eq!(char_len("окна"), 4);
        assert_eq!("окна".len(), 8);
    }
}
