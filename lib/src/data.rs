use crate::results::*;
use std::fmt;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::ops::Deref;
use std::path::Path;
use std::result::Result;
use std::sync::Arc;
use tracing::debug;

/// A word of exactly [`WORD_LENGTH`] upper-case letters.
///
/// Both the secret and every accepted guess are stored as a `Word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([char; WORD_LENGTH]);

impl Word {
    /// Normalizes the given input to upper case and checks that it is exactly [`WORD_LENGTH`]
    /// letters long.
    ///
    /// Surrounding whitespace is ignored. Letters are counted after case conversion, so a letter
    /// whose upper-case form is several letters long counts as several letters.
    pub fn parse(raw: &str) -> Result<Word, WordleError> {
        let upper = raw.trim().to_uppercase();
        let length = upper.chars().count();
        if length != WORD_LENGTH {
            return Err(WordleError::WordLength(length));
        }
        let mut letters = [' '; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(upper.chars()) {
            *slot = letter;
        }
        Ok(Word(letters))
    }

    /// The letters of this word, in order.
    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.0
    }

    /// Returns `true` iff the letter appears anywhere in this word.
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Contains all the candidate secret words for a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading every whitespace-separated token from the given
    /// reader.
    ///
    /// Tokens may be split across lines in any way. Each word is converted to upper case. Word
    /// lengths are not checked here.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD` rather than failing the load.
    pub fn from_reader<R: BufRead>(mut word_reader: R) -> Result<Self, WordleError> {
        let mut all_words = Vec::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if word_reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            all_words.extend(upper_case_tokens(&String::from_utf8_lossy(&line)));
        }
        debug!(num_words = all_words.len(), "loaded word bank");
        Ok(WordBank { all_words })
    }

    /// Constructs a new `WordBank` from the file at the given path.
    ///
    /// Returns [`WordleError::ResourceNotFound`] if the file does not exist.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => WordleError::ResourceNotFound {
                path: path.to_path_buf(),
            },
            _ => WordleError::Io(err),
        })?;
        WordBank::from_reader(io::BufReader::new(file))
    }

    /// Constructs a new `WordBank` using the words from the given iterator.
    ///
    /// Each item is split on whitespace just like [`WordBank::from_reader`], so empty items are
    /// dropped.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .flat_map(|word| upper_case_tokens(word.as_ref()).collect::<Vec<_>>())
                .collect(),
        }
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}

/// Splits the text on whitespace and upper-cases every token.
fn upper_case_tokens(text: &str) -> impl Iterator<Item = Arc<str>> + '_ {
    text.split_whitespace()
        .map(|token| Arc::from(token.to_uppercase().as_str()))
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    #[test]
    fn word_parse_upper_cases() -> Result<(), WordleError> {
        let word = Word::parse("crane")?;

        assert_eq!(word.letters(), &['C', 'R', 'A', 'N', 'E']);
        assert_eq!(word.to_string(), "CRANE");
        Ok(())
    }

    #[test]
    fn word_parse_ignores_surrounding_whitespace() -> Result<(), WordleError> {
        assert_eq!(Word::parse("  Crane\n")?, Word::parse("CRANE")?);
        Ok(())
    }

    #[test]
    fn word_parse_wrong_length() {
        assert_matches!(Word::parse("abc"), Err(WordleError::WordLength(3)));
        assert_matches!(Word::parse("abcdef"), Err(WordleError::WordLength(6)));
        assert_matches!(Word::parse(""), Err(WordleError::WordLength(0)));
    }

    #[test]
    fn word_parse_counts_letters_not_bytes() -> Result<(), WordleError> {
        let word = Word::parse("éclat")?;

        assert_eq!(word.to_string(), "ÉCLAT");
        Ok(())
    }

    #[test]
    fn word_parse_counts_expanded_upper_case() {
        // 'ß' upper-cases to "SS".
        assert_matches!(Word::parse("straß"), Err(WordleError::WordLength(6)));
    }

    #[test]
    fn word_contains() -> Result<(), WordleError> {
        let word = Word::parse("robot")?;

        assert!(word.contains('O'));
        assert!(!word.contains('o'));
        assert!(!word.contains('Z'));
        Ok(())
    }

    #[test]
    fn word_bank_from_reader_splits_on_any_whitespace() -> Result<(), WordleError> {
        let cursor = Cursor::new(String::from("apple  crane\n\n\tstomp\nrobot "));

        let word_bank = WordBank::from_reader(cursor)?;

        assert_eq!(word_bank.len(), 4);
        assert_eq!(&*word_bank[0], "APPLE");
        assert_eq!(&*word_bank[1], "CRANE");
        assert_eq!(&*word_bank[2], "STOMP");
        assert_eq!(&*word_bank[3], "ROBOT");
        Ok(())
    }

    #[test]
    fn word_bank_from_reader_keeps_any_length() -> Result<(), WordleError> {
        let word_bank = WordBank::from_reader(Cursor::new("hi longword"))?;

        assert_eq!(word_bank.len(), 2);
        assert_eq!(&*word_bank[1], "LONGWORD");
        Ok(())
    }

    #[test]
    fn word_bank_from_reader_empty() -> Result<(), WordleError> {
        let word_bank = WordBank::from_reader(Cursor::new(" \n\n"))?;

        assert!(word_bank.is_empty());
        Ok(())
    }

    #[test]
    fn word_bank_from_path_missing_file() {
        assert_matches!(
            WordBank::from_path("this/file/does/not/exist.txt"),
            Err(WordleError::ResourceNotFound { path }) if path.ends_with("exist.txt")
        );
    }

    #[test]
    fn word_bank_from_iterator() {
        let word_bank = WordBank::from_iterator(vec!["", "apple", "Crane stomp"]);

        assert_eq!(word_bank.len(), 3);
        assert_eq!(&*word_bank[2], "STOMP");
    }
}
