use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_wordle_game::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Play Wordle in the terminal: guess the secret five-letter word in six attempts.
///
/// After each guess, every letter is marked 'G' if it is in the right place, 'Y' if it is
/// somewhere else in the word, or '_' if it is not in the word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains the possible secret words, separated by whitespace.
    #[arg(short = 'f', long, default_value = "dictionary.txt")]
    words_file: PathBuf,

    /// Seed for choosing the secret word, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<GameResult, WordleError> {
    let word_bank = load_word_bank(args)?;

    let secret = match args.seed {
        Some(seed) => choose_secret(&word_bank, &mut RngPicker(StdRng::seed_from_u64(seed)))?,
        None => choose_secret(&word_bank, &mut RngPicker(rand::thread_rng()))?,
    };
    let mut game = Game::new(&secret).map_err(|err| match err {
        WordleError::WordLength(length) => WordleError::InvalidDictionaryWord {
            word: secret.to_string(),
            path: args.words_file.clone(),
            length,
        },
        err => err,
    })?;

    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    game.play(&mut tokens, &mut out)
}

/// A missing dictionary is reported and replaced by an empty one, which then fails when the
/// secret is chosen.
fn load_word_bank(args: &Args) -> Result<WordBank, WordleError> {
    match WordBank::from_path(&args.words_file) {
        Ok(word_bank) => Ok(word_bank),
        Err(WordleError::ResourceNotFound { path }) => {
            println!("Error: File not found.");
            warn!(path = %path.display(), "dictionary not found, continuing with no words");
            Ok(WordBank::default())
        }
        Err(err) => Err(err),
    }
}
