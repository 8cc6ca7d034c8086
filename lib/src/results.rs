use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The number of letters in every secret and every accepted guess.
pub const WORD_LENGTH: usize = 5;

/// The number of guesses a player gets before the game is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum LetterResult {
    /// The letter is in the secret at this location.
    Correct,
    /// The letter appears somewhere in the secret, but not here.
    PresentNotHere,
    /// The letter does not appear anywhere in the secret.
    NotPresent,
}

impl LetterResult {
    /// The symbol shown on the board for this result.
    pub fn symbol(self) -> char {
        match self {
            LetterResult::Correct => 'G',
            LetterResult::PresentNotHere => 'Y',
            LetterResult::NotPresent => '_',
        }
    }
}

/// The results for every letter of one guess, in the same order as the guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct FeedbackRow(pub [LetterResult; WORD_LENGTH]);

impl FeedbackRow {
    /// Returns `true` iff every letter was [`LetterResult::Correct`].
    pub fn is_all_correct(&self) -> bool {
        self.0
            .iter()
            .all(|letter_result| *letter_result == LetterResult::Correct)
    }

    pub fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter_result in self.0 {
            write!(f, "{}", letter_result.symbol())?;
        }
        Ok(())
    }
}

/// Indicates that an error occurred while loading words or playing the game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The dictionary file does not exist.
    #[error("dictionary file not found: {}", .path.display())]
    ResourceNotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A secret was requested from a dictionary with no words in it.
    #[error("the dictionary is empty, so no secret word can be chosen")]
    EmptyDictionary,
    /// A word did not have [`WORD_LENGTH`] letters. Provides the length that was found.
    #[error("expected a five-letter word, but it had {0} letters")]
    WordLength(usize),
    /// The secret chosen from a dictionary file did not have [`WORD_LENGTH`] letters.
    #[error(
        "dictionary {} contains \"{}\", which has {} letters instead of five",
        .path.display(),
        .word,
        .length
    )]
    InvalidDictionaryWord {
        word: String,
        path: PathBuf,
        length: usize,
    },
    /// The board already holds [`MAX_ATTEMPTS`] rows.
    #[error("the board has no rows left for another guess")]
    BoardFull,
    /// Rows must be written in order, one after the other.
    #[error("expected to write row {expected}, but got row {actual}")]
    RowOutOfOrder { expected: usize, actual: usize },
    /// Feedback was given for a row that has no guess yet.
    #[error("row {0} has no guess to attach feedback to")]
    MissingGuess(usize),
    /// The game has already been won or lost.
    #[error("the game is already over")]
    GameOver,
    /// Input ended while waiting for the next guess.
    #[error("input closed before the game finished")]
    InputClosed,
}

/// Whether the game was won or lost by the player.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum GameResult {
    /// The player found the secret. Provides the 1-indexed attempt it was found on.
    Won { attempts: usize },
    /// The player used every attempt. Provides the secret so it can be revealed.
    Lost { secret: String },
}
