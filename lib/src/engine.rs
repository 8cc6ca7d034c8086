use crate::data::*;
use crate::results::*;
use rand::Rng;
use std::sync::Arc;

/// Picks indices for the secret-word selection, so that games can be made deterministic.
pub trait IndexPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Picks indices uniformly at random using any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngPicker<R: Rng>(pub R);

impl<R: Rng> IndexPicker for RngPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Chooses the secret word for a game from the word bank.
///
/// Returns [`WordleError::EmptyDictionary`] if there are no words to choose from.
pub fn choose_secret<P: IndexPicker + ?Sized>(
    bank: &WordBank,
    picker: &mut P,
) -> Result<Arc<str>, WordleError> {
    if bank.is_empty() {
        return Err(WordleError::EmptyDictionary);
    }
    let index = picker.pick_index(bank.len());
    Ok(Arc::clone(&bank[index % bank.len()]))
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Each letter is scored on its own: it is [`LetterResult::Correct`] if it matches the objective
/// at the same location, otherwise [`LetterResult::PresentNotHere`] if the objective contains that
/// letter anywhere at all, otherwise [`LetterResult::NotPresent`]. Letter counts are not
/// reconciled, so a letter that appears once in the objective can be marked present at every
/// location it is guessed.
pub fn get_result_for_guess(objective: &Word, guess: &Word) -> FeedbackRow {
    let mut results = [LetterResult::NotPresent; WORD_LENGTH];
    for (index, (result, letter)) in results.iter_mut().zip(guess.letters()).enumerate() {
        *result = if objective.letters()[index] == *letter {
            LetterResult::Correct
        } else if objective.contains(*letter) {
            LetterResult::PresentNotHere
        } else {
            LetterResult::NotPresent
        };
    }
    FeedbackRow(results)
}
