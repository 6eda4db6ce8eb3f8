//! Alphanumeric-run tokenizer.
//!
//! Splits text on every non-alphanumeric character and yields the runs in
//! between as borrowed slices. Casing is preserved; stopword filtering and
//! canonicalization happen downstream. No allocation per token.

/// Lazy iterator over the alphanumeric runs of a borrowed string.
///
/// Cloning yields an independent iterator from the same position, so a
/// fresh `Tokens` (or a clone taken before iteration) restarts the sequence.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize, // byte offset of the next unread char
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        let (start, _) = rest.char_indices().find(|(_, c)| c.is_alphanumeric())?;
        let start = self.pos + start;

        let end = self.text[start..]
            .char_indices()
            .find(|(_, c)| !c.is_alphanumeric())
            .map_or(self.text.len(), |(i, _)| start + i);

        self.pos = end;
        Some(&self.text[start..end])
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize text into maximal alphanumeric runs, preserving casing.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let words: Vec<&str> = tokenize("The film proves perfection.").collect();
        assert_eq!(words, vec!["The", "film", "proves", "perfection"]);
    }

    #[test]
    fn test_tokenize_empty_and_separators_only() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" ' ., -- !? ").count(), 0);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let words: Vec<&str> = tokenize("it's a so-so movie,really").collect();
        assert_eq!(words, vec!["it", "s", "a", "so", "so", "movie", "really"]);
    }

    #[test]
    fn test_digits_are_token_chars() {
        let words: Vec<&str> = tokenize("notfound404 is 2nd-rate").collect();
        assert_eq!(words, vec!["notfound404", "is", "2nd", "rate"]);
    }

    #[test]
    fn test_casing_preserved() {
        let words: Vec<&str> = tokenize("MOVIE mOvIe").collect();
        assert_eq!(words, vec!["MOVIE", "mOvIe"]);
    }

    #[test]
    fn test_multibyte_separators() {
        let words: Vec<&str> = tokenize("great…film — truly").collect();
        assert_eq!(words, vec!["great", "film", "truly"]);
    }

    #[test]
    fn test_restartable_via_clone() {
        let tokens = tokenize("one two three");
        let first: Vec<&str> = tokens.clone().collect();
        let second: Vec<&str> = tokens.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_empty_tokens() {
        assert!(tokenize(",,a,,b,,").all(|t| !t.is_empty()));
    }
}
