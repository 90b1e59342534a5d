//! Sentence splitting for better prosody.

use std::sync::LazyLock;

use regex::Regex;

/// Terminal punctuation followed by the whitespace run that ends a sentence.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence break pattern is valid"));

/// Separator placed between sentences when rebuilding the synthesis input.
const SENTENCE_JOINER: &str = ". ";

/// Split text into trimmed, non-empty sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace. The punctuation stays
/// with the sentence before it and the whitespace run is dropped.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Punctuation marks are single-byte, so the sentence ends one byte into the match.
        push_trimmed(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Join sentences into one synthesis input.
///
/// Every pair is separated by `". "` regardless of the sentence's own punctuation,
/// so `"Hi!"` followed by `"Bye."` becomes `"Hi!. Bye."`.
pub fn join_sentences(sentences: &[String]) -> String {
    sentences.join(SENTENCE_JOINER)
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        assert_eq!(split_into_sentences("Hello. World!  Bye?"), vec!["Hello.", "World!", "Bye?"]);
    }

    #[test]
    fn test_no_breaks_returns_trimmed_input() {
        assert_eq!(split_into_sentences("  just one line without a stop  "), vec!["just one line without a stop"]);
        // Punctuation not followed by whitespace does not split.
        assert_eq!(split_into_sentences("v1.2.3 is out"), vec!["v1.2.3 is out"]);
        assert_eq!(split_into_sentences("Wait...what?"), vec!["Wait...what?"]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(split_into_sentences("").is_empty());
        assert!(split_into_sentences(" \n\t ").is_empty());
    }

    #[test]
    fn test_newlines_and_tabs_break_sentences() {
        assert_eq!(split_into_sentences("First line.\nSecond line?\t\tThird"), vec!["First line.", "Second line?", "Third"]);
    }

    #[test]
    fn test_trailing_whitespace_after_last_stop() {
        assert_eq!(split_into_sentences("Hi. There.   "), vec!["Hi.", "There."]);
    }

    #[test]
    fn test_ellipsis_followed_by_space() {
        assert_eq!(split_into_sentences("Well... Maybe."), vec!["Well...", "Maybe."]);
    }

    #[test]
    fn test_unicode_text_around_breaks() {
        assert_eq!(split_into_sentences("Ça va? Très bien.\u{00A0}Merci"), vec!["Ça va?", "Très bien.", "Merci"]);
    }

    #[test]
    fn test_join_duplicates_punctuation() {
        let sentences = split_into_sentences("Hi! How are you? Fine.");
        assert_eq!(join_sentences(&sentences), "Hi!. How are you?. Fine.");
        assert_eq!(join_sentences(&[]), "");
    }

    #[test]
    fn test_split_join_keeps_boundaries() {
        let text = "The rain fell. Nobody moved! Was it over? It was";
        let first = split_into_sentences(text);
        let second = split_into_sentences(&join_sentences(&first));
        assert_eq!(first.len(), second.len());
        assert_eq!(second, vec!["The rain fell..", "Nobody moved!.", "Was it over?.", "It was"]);
    }
}
