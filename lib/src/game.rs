use crate::board::*;
use crate::data::*;
use crate::engine::*;
use crate::input::TokenReader;
use crate::results::*;
use std::io::BufRead;
use std::io::Write;
use std::mem;
use tracing::{debug, info};

/// Where the game loop is between two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to type a guess.
    AwaitingInput,
    /// A raw guess was read and must be normalized and length-checked.
    Validating(String),
    /// A valid guess must be recorded and scored.
    Scoring(Word),
    /// The board must be shown to the player.
    Rendering,
    /// The latest feedback decides whether the game continues.
    CheckEnd,
    Terminated(GameResult),
}

/// A single game against one secret word.
///
/// The game owns its board and attempt counter. It can be driven one guess at a time with
/// [`Game::submit_guess`], or run to completion against an input and output with [`Game::play`].
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    board: Board,
    attempt: usize,
    state: GameState,
}

impl Game {
    /// Starts a new game. The secret must be a [`WORD_LENGTH`]-letter word.
    pub fn new(secret: &str) -> Result<Game, WordleError> {
        Ok(Game {
            secret: Word::parse(secret)?,
            board: Board::new(),
            attempt: 0,
            state: GameState::AwaitingInput,
        })
    }

    pub fn secret(&self) -> &Word {
        &self.secret
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The zero-based index of the current attempt. This only moves on after a valid guess that
    /// did not win.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the outcome once the game has terminated.
    pub fn result(&self) -> Option<&GameResult> {
        match &self.state {
            GameState::Terminated(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Validates and scores one guess without any console I/O.
    ///
    /// A guess with the wrong length returns [`WordleError::WordLength`] and does not use up an
    /// attempt.
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackRow, WordleError> {
        if self.is_over() {
            return Err(WordleError::GameOver);
        }
        let guess = validate(raw)?;
        let feedback = self.score(guess)?;
        self.state = self.check_end();
        Ok(feedback)
    }

    /// Runs the game until it is won or lost, reading guesses from `tokens` and writing prompts,
    /// the board and the final message to `out`.
    pub fn play<R: BufRead, W: Write + ?Sized>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<GameResult, WordleError> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result.clone());
            }
            self.advance(tokens, out)?;
        }
    }

    fn advance<R: BufRead, W: Write + ?Sized>(
        &mut self,
        tokens: &mut TokenReader<R>,
        out: &mut W,
    ) -> Result<(), WordleError> {
        let next = match mem::replace(&mut self.state, GameState::AwaitingInput) {
            GameState::AwaitingInput => {
                write!(out, "Enter your guess ({}-letter word): ", WORD_LENGTH)?;
                out.flush()?;
                match tokens.next_token()? {
                    Some(raw) => GameState::Validating(raw),
                    None => return Err(WordleError::InputClosed),
                }
            }
            GameState::Validating(raw) => match validate(&raw) {
                Ok(guess) => GameState::Scoring(guess),
                Err(WordleError::WordLength(_)) => {
                    writeln!(out, "Invalid word. Please try again.")?;
                    GameState::AwaitingInput
                }
                Err(err) => return Err(err),
            },
            GameState::Scoring(guess) => {
                self.score(guess)?;
                GameState::Rendering
            }
            GameState::Rendering => {
                render_board(&self.board, self.attempt, out)?;
                GameState::CheckEnd
            }
            GameState::CheckEnd => {
                let next = self.check_end();
                if let GameState::Terminated(result) = &next {
                    announce(result, out)?;
                }
                next
            }
            terminated @ GameState::Terminated(_) => terminated,
        };
        self.state = next;
        Ok(())
    }

    fn score(&mut self, guess: Word) -> Result<FeedbackRow, WordleError> {
        self.board.record_guess(self.attempt, guess)?;
        let feedback = get_result_for_guess(&self.secret, &guess);
        self.board.append_feedback(self.attempt, feedback)?;
        debug!(attempt = self.attempt + 1, %guess, %feedback, "scored guess");
        Ok(feedback)
    }

    fn check_end(&mut self) -> GameState {
        if self.board.is_won() {
            let attempts = self.attempt + 1;
            info!(attempts, "secret word found");
            return GameState::Terminated(GameResult::Won { attempts });
        }
        self.attempt += 1;
        if self.attempt == MAX_ATTEMPTS {
            info!(attempts = self.attempt, "out of attempts");
            return GameState::Terminated(GameResult::Lost {
                secret: self.secret.to_string(),
            });
        }
        GameState::AwaitingInput
    }
}

fn validate(raw: &str) -> Result<Word, WordleError> {
    Word::parse(raw).map_err(|err| {
        debug!(raw, %err, "rejected guess");
        err
    })
}

fn announce<W: Write + ?Sized>(result: &GameResult, out: &mut W) -> std::io::Result<()> {
    match result {
        GameResult::Won { attempts } => writeln!(
            out,
            "Congratulations! You guessed the word in {} attempts.",
            attempts
        ),
        GameResult::Lost { secret } => {
            writeln!(out, "Sorry, you did not guess the word.")?;
            writeln!(out, "The secret word was: {}", secret)
        }
    }
}
