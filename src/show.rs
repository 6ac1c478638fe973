//! The playback loop: one keypress, one slide, forever (or until 'q').

use std::io::Write;

use anyhow::Result;

use crate::runner::CommandRunner;
use crate::slide::Slide;
use crate::state::{Control, NavKey, ShowState};
use crate::typing::Typist;

/// Drive the presentation until the quit key.
///
/// `next_key` is the blocking key source; it is a closure so tests can
/// script an entire run. A slide that fails to play does not end the
/// show: the error is printed inline in red and navigation continues.
pub fn run<W: Write>(
    deck: &[Slide],
    state: &mut ShowState,
    typist: &mut Typist<W>,
    runner: &mut dyn CommandRunner,
    next_key: &mut dyn FnMut() -> Result<NavKey>,
) -> Result<()> {
    anyhow::ensure!(!deck.is_empty(), "the deck has no slides");

    loop {
        let key = next_key()?;
        if state.handle(key, deck.len()) == Control::Quit {
            log::debug!("quit at slide {}", state.cursor);
            return Ok(());
        }

        if state.jump {
            typist.clear_screen()?;
            typist.line(&format!("Slide {}", state.cursor))?;
        }

        if let Err(err) = deck[state.cursor].play(typist, runner, state.jump) {
            log::warn!("slide {} failed: {err:#}", state.cursor);
            typist.error_line(&format!("[error: {err:#}]"))?;
        }
    }
}
