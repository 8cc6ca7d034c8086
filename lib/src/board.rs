use crate::data::Word;
use crate::results::*;
use std::io;
use std::io::Write;
use std::iter::zip;

/// The guesses made so far in one game, along with the feedback for each.
///
/// Rows are append-only: each row is written once, in order, and the board never holds more than
/// [`MAX_ATTEMPTS`] rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    guesses: Vec<Word>,
    results: Vec<FeedbackRow>,
}

impl Board {
    pub fn new() -> Board {
        Board {
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            results: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Writes the guess into the given row.
    ///
    /// The row must be the next unused row, and the previous row must already have its feedback.
    pub fn record_guess(&mut self, row: usize, guess: Word) -> Result<(), WordleError> {
        if row >= MAX_ATTEMPTS {
            return Err(WordleError::BoardFull);
        }
        if row != self.guesses.len() || self.results.len() != self.guesses.len() {
            return Err(WordleError::RowOutOfOrder {
                expected: self.results.len(),
                actual: row,
            });
        }
        self.guesses.push(guess);
        Ok(())
    }

    /// Writes the feedback for the guess already recorded in the given row.
    pub fn append_feedback(
        &mut self,
        row: usize,
        feedback: FeedbackRow,
    ) -> Result<(), WordleError> {
        if row != self.results.len() {
            return Err(WordleError::RowOutOfOrder {
                expected: self.results.len(),
                actual: row,
            });
        }
        if row >= self.guesses.len() {
            return Err(WordleError::MissingGuess(row));
        }
        self.results.push(feedback);
        Ok(())
    }

    pub fn guess(&self, row: usize) -> Option<&Word> {
        self.guesses.get(row)
    }

    pub fn feedback(&self, row: usize) -> Option<&FeedbackRow> {
        self.results.get(row)
    }

    /// The number of rows that have a guess, whether or not their feedback has been appended.
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Returns `true` once every row has a guess, so no further guess can be recorded.
    pub fn is_full(&self) -> bool {
        self.guesses.len() == MAX_ATTEMPTS
    }

    /// Returns `true` iff the most recent feedback row is all correct.
    pub fn is_won(&self) -> bool {
        self.results
            .last()
            .map_or(false, |feedback| feedback.is_all_correct())
    }

    /// Iterates over every row that has both a guess and its feedback.
    pub fn rows(&self) -> impl Iterator<Item = (&Word, &FeedbackRow)> {
        zip(self.guesses.iter(), self.results.iter())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Writes the board, up to and including `through_row`, in a human readable form.
///
/// Rows past the last scored row are skipped.
pub fn render_board<W: Write + ?Sized>(
    board: &Board,
    through_row: usize,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Current board:")?;
    let rows = board.rows().take(through_row.saturating_add(1));
    for (index, (guess, feedback)) in rows.enumerate() {
        writeln!(out, "Guess {}: {}   Result: {}", index + 1, guess, feedback)?;
    }
    writeln!(out)
}
