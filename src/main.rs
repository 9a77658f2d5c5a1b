//! Palavre - CLI
//!
//! Terminal Wordle-style word game in Portuguese. Defaults to the TUI with
//! the daily word; `simple` plays the same game as a plain line-based loop.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use palavre::{
    commands::run_simple,
    core::Word,
    game::GameSession,
    interactive::{App, run_tui},
    wordlists::{Lexicon, LexiconSource, SolutionPick},
};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Parser)]
#[command(
    name = "palavre",
    about = "Jogo de palavras no terminal: adivinhe a palavra de 5 letras em 6 tentativas",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Force a specific solution word (testing/practice)
    #[arg(short, long, global = true, conflicts_with_all = ["random", "date"])]
    solution: Option<String>,

    /// Pick a random solution instead of the daily word
    #[arg(short, long, global = true, conflicts_with = "date")]
    random: bool,

    /// Play the daily word of a specific date (YYYY-MM-DD, default today)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Custom allowed-guesses file (one word per line)
    #[arg(short = 'w', long, global = true, requires = "solutions")]
    wordlist: Option<String>,

    /// Custom solutions file (one word per line, daily order)
    #[arg(long, global = true, requires = "wordlist")]
    solutions: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain line-based mode (no TUI)
    Simple,
}

/// Build the lexicon from custom files or the embedded lists
fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    match (&cli.solutions, &cli.wordlist) {
        (Some(solutions), Some(allowed)) => Lexicon::from_files(solutions, allowed)
            .with_context(|| format!("Failed to load word lists {solutions} / {allowed}")),
        _ => Ok(Lexicon::embedded()),
    }
}

/// Decide how the session's solution gets picked
fn solution_pick(cli: &Cli) -> Result<SolutionPick> {
    if let Some(word) = &cli.solution {
        let word = Word::new(word).with_context(|| format!("Invalid solution word '{word}'"))?;
        return Ok(SolutionPick::Fixed(word));
    }
    if cli.random {
        return Ok(SolutionPick::Random);
    }
    let day = match &cli.date {
        Some(text) => time::Date::parse(text, DATE_FORMAT)
            .with_context(|| format!("Invalid date '{text}', expected YYYY-MM-DD"))?,
        None => OffsetDateTime::now_utc().date(),
    };
    Ok(SolutionPick::Daily(day))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli)?;
    let source = LexiconSource::new(lexicon, solution_pick(&cli)?);
    let game = GameSession::new(source).context("Could not start a game")?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(game),
    }
}
