//! A Wordle-style word guessing game.
//!
//! A secret five-letter word is chosen from a [`WordBank`], and the player has [`MAX_ATTEMPTS`]
//! guesses to find it. After each guess, every letter is marked as correct, present elsewhere, or
//! not present.
//!
//! ```
//! use rs_wordle_game::*;
//!
//! let mut game = Game::new("crane")?;
//! let feedback = game.submit_guess("geese")?;
//! assert_eq!(feedback.to_string(), "_YY_G");
//! assert!(!game.is_over());
//! # Ok::<(), WordleError>(())
//! ```

mod board;
mod data;
mod engine;
mod game;
mod input;
mod results;

pub use board::*;
pub use data::Word;
pub use data::WordBank;
pub use engine::*;
pub use game::*;
pub use input::TokenReader;
pub use results::*;
