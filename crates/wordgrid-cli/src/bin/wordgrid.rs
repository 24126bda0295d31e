//! Command-line front end for the word-search engine.
//!
//! Loads a lexicon, sets up a board, then prints the board, every word found
//! on it and the total score. Individual words can be traced with `--find`.
//!
//! # Usage
//!
//! ```sh
//! wordgrid --lexicon words.txt
//! ```
//!
//! Use a custom board (row-major, must be square) and minimum word length:
//!
//! ```sh
//! wordgrid --lexicon words.txt --min-length 4 --tiles E E C A A L E P H N B O Q T T Y
//! ```
//!
//! Trace specific words instead of listing everything:
//!
//! ```sh
//! wordgrid --lexicon words.txt --find peel --find cleave --quiet
//! ```
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::{path::PathBuf, process};

use clap::Parser;
use wordgrid_core::Board;
use wordgrid_game::{GameError, WordSearchGame};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Lexicon file of whitespace-separated words.
    #[arg(short, long, value_name = "FILE")]
    lexicon: PathBuf,

    /// Board tiles in row-major order. Defaults to the standard 4x4 board.
    #[arg(short, long, value_name = "TILE", num_args = 1..)]
    tiles: Vec<String>,

    /// Minimum number of characters for a word to count.
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    min_length: usize,

    /// Word to trace on the board. Repeatable.
    #[arg(short, long = "find", value_name = "WORD")]
    finds: Vec<String>,

    /// Skip listing every word on the board.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GameError> {
    let mut game = WordSearchGame::new();
    if !args.tiles.is_empty() {
        game.set_board(&args.tiles)?;
    }
    game.load_lexicon(&args.lexicon)?;

    println!("Board:");
    print_board(game.board());
    println!();

    for word in &args.finds {
        print_trace(&game, word)?;
    }

    if !args.quiet {
        let words = game.all_valid_words(args.min_length)?;
        println!("Words ({}):", words.len());
        for word in &words {
            println!("  {word}");
        }
        println!();
        println!("Score: {}", game.score_words(&words, args.min_length)?);
    }
    Ok(())
}

fn print_board(board: &Board) {
    for line in board.to_string().lines() {
        println!("  {line}");
    }
}

fn print_trace(game: &WordSearchGame, word: &str) -> Result<(), GameError> {
    let path = game.is_on_board(word)?;
    if path.is_empty() {
        println!("{word}: not on the board");
        return Ok(());
    }
    let cells = path
        .iter()
        .map(|&index| game.board().position_of(index).to_string())
        .collect::<Vec<_>>();
    let marker = if game.is_valid_word(word)? {
        ""
    } else {
        " (not a word)"
    };
    println!("{word}: {}{marker}", cells.join(" -> "));
    Ok(())
}
