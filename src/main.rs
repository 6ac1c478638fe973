use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::terminal;

use memdemo::constants::{FALLBACK_WIDTH, TYPING_DELAY_MAX_MS};
use memdemo::runner::ShellRunner;
use memdemo::state::ShowState;
use memdemo::typing::Typist;
use memdemo::{deck, input, show};

/// Slideshow for the "garbage collection in Docker" talk.
///
/// Navigation: any key advances, left arrow goes back, right arrow skips
/// the typing animation, 'r' replays the previous slide, 'q' quits.
#[derive(Debug, Parser)]
#[command(name = "memdemo", version, about)]
struct Cli {
    /// Slide number to start from (clamped into the deck)
    #[arg(long, short = 's', default_value_t = 0)]
    start: usize,

    /// Disable the simulated typing delay
    #[arg(long)]
    instant: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let width = terminal::size().map(|(cols, _)| cols).unwrap_or(FALLBACK_WIDTH);
    let delay = if cli.instant { 0 } else { TYPING_DELAY_MAX_MS };
    log::debug!("terminal width {width}, typing delay 0..{delay}ms");

    let deck = deck::talk();
    let mut state = ShowState::starting_at(cli.start);
    let mut typist = Typist::new(io::stdout(), width, delay);
    let mut runner = ShellRunner;

    show::run(&deck, &mut state, &mut typist, &mut runner, &mut input::wait_key)
}
