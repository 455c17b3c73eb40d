//! Lyric text normalization for prompts.
//!
//! Word characters are Unicode alphanumerics. Everything else, including `_`,
//! becomes whitespace, so cleaned text never carries punctuation.

/// Words that carry no imagery
const STOP_WORDS: [&str; 6] = ["this", "that", "then", "than", "with", "from"];

/// Lines read in keyword mode
pub const KEYWORD_LINES: usize = 5;
/// Keywords kept at most
pub const MAX_KEYWORDS: usize = 10;
/// Lines read in excerpt mode
pub const EXCERPT_LINES: usize = 8;
/// Characters kept in excerpt mode
pub const EXCERPT_CHARS: usize = 200;

/// Join the first `max_lines` lines, replace non-word characters with spaces
/// and collapse whitespace.
pub fn clean_lines(text: &str, max_lines: usize) -> String {
    let joined = text
        .trim()
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ");

    let stripped: String = joined
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep words longer than 3 characters that are not stop words, lowercased,
/// first [`MAX_KEYWORDS`] in order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    clean_lines(text, KEYWORD_LINES)
        .split(' ')
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() > 3)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// First [`EXCERPT_LINES`] lines, cleaned and cut to [`EXCERPT_CHARS`] characters.
pub fn excerpt(text: &str) -> String {
    let cleaned = clean_lines(text, EXCERPT_LINES);
    match cleaned.char_indices().nth(EXCERPT_CHARS) {
        // Cutting may leave a trailing space before the next word
        Some((idx, _)) => cleaned[..idx].trim_end().to_string(),
        None => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_lines_strips_punctuation() {
        let cleaned = clean_lines("Hello, world!\nIt's   a  (beautiful) day...", 5);
        assert_eq!(cleaned, "Hello world It s a beautiful day");
    }

    #[test]
    fn test_clean_lines_limits_lines() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(clean_lines(text, 2), "one two");
    }

    #[test]
    fn test_clean_lines_treats_underscore_as_punctuation() {
        assert_eq!(clean_lines("snake_case", 1), "snake case");
    }

    #[test]
    fn test_clean_lines_keeps_unicode_letters() {
        assert_eq!(clean_lines("Café — déjà vu!", 1), "Café déjà vu");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_lines("", 5), "");
        assert_eq!(clean_lines("?!...", 5), "");
    }

    #[test]
    fn test_extract_keywords_filters() {
        let keywords = extract_keywords("This is the night that we ride with Thunder from heaven");
        assert_eq!(keywords, vec!["night", "ride", "thunder", "heaven"]);
    }

    #[test]
    fn test_extract_keywords_caps_at_ten() {
        let text = "alpha bravo charlie delta echoes foxtrot golf hotel india juliet kilo lima";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "alpha");
        assert_eq!(keywords[9], "juliet");
    }

    #[test]
    fn test_extract_keywords_only_first_five_lines() {
        let text = "line\nline\nline\nline\nline\ndragons";
        assert!(!extract_keywords(text).contains(&"dragons".to_string()));
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "word ".repeat(100);
        let result = excerpt(&long);
        assert!(result.chars().count() <= EXCERPT_CHARS);
        assert!(!result.ends_with(' '));
    }

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("Short line."), "Short line");
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Cleaned text has no punctuation and no doubled whitespace
        #[test]
        fn clean_lines_has_no_punctuation(input in "\\PC{0,200}", lines in 1usize..10) {
            let cleaned = clean_lines(&input, lines);
            prop_assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()), "punctuation in {:?}", cleaned);
            prop_assert!(!cleaned.contains("  "), "double space in {:?}", cleaned);
            prop_assert!(cleaned.chars().all(|c| c == ' ' || c.is_alphanumeric()));
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }

        /// Keywords are lowercase, long enough and capped
        #[test]
        fn keywords_are_well_formed(input in "[a-zA-Z ,.!?'\n]{0,300}") {
            let keywords = extract_keywords(&input);
            prop_assert!(keywords.len() <= MAX_KEYWORDS);
            for word in &keywords {
                prop_assert!(word.chars().count() > 3);
                prop_assert!(!STOP_WORDS.contains(&word.as_str()));
                prop_assert!(word.chars().all(char::is_alphanumeric));
                prop_assert_eq!(word.to_lowercase(), word.clone());
            }
        }

        /// Excerpts respect the character cap
        #[test]
        fn excerpt_is_capped(input in "\\PC{0,600}") {
            let result = excerpt(&input);
            prop_assert!(result.chars().count() <= EXCERPT_CHARS);
            prop_assert!(!result.contains("  "));
        }
    }
}
