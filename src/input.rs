//! Raw-mode keystroke capture for the playback loop.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::state::NavKey;

/// Puts the terminal in raw mode for its lifetime. Raw mode is held only
/// while waiting for a key so slide output keeps cooked-mode line
/// discipline, and a panic mid-wait still restores the terminal.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("cannot enter raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Block until the presenter presses a key, then report its intent.
///
/// Keys that piled up while a slide was playing are drained; only the
/// most recent press counts, so holding an arrow down does not queue a
/// burst of navigation.
pub fn wait_key() -> Result<NavKey> {
    let _raw = RawModeGuard::enter()?;

    let mut latest = loop {
        if let Event::Key(key) = event::read().context("reading terminal input")? {
            if key.kind == KeyEventKind::Press {
                break key;
            }
        }
    };

    while event::poll(Duration::ZERO).context("polling terminal input")? {
        if let Event::Key(key) = event::read().context("reading terminal input")? {
            if key.kind == KeyEventKind::Press {
                latest = key;
            }
        }
    }

    Ok(decode(latest))
}

fn decode(key: KeyEvent) -> NavKey {
    match key.code {
        KeyCode::Left => NavKey::Previous,
        KeyCode::Right => NavKey::SkipNext,
        KeyCode::Char('r') | KeyCode::Char('R') => NavKey::Replay,
        KeyCode::Char('q') | KeyCode::Char('Q') => NavKey::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => NavKey::Quit,
        _ => NavKey::Advance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_navigate_without_animation() {
        assert_eq!(decode(press(KeyCode::Left)), NavKey::Previous);
        assert_eq!(decode(press(KeyCode::Right)), NavKey::SkipNext);
    }

    #[test]
    fn replay_and_quit_accept_both_cases() {
        assert_eq!(decode(press(KeyCode::Char('r'))), NavKey::Replay);
        assert_eq!(decode(press(KeyCode::Char('R'))), NavKey::Replay);
        assert_eq!(decode(press(KeyCode::Char('q'))), NavKey::Quit);
        assert_eq!(decode(press(KeyCode::Char('Q'))), NavKey::Quit);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_advances() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_c), NavKey::Quit);
        assert_eq!(decode(press(KeyCode::Char('c'))), NavKey::Advance);
    }

    #[test]
    fn anything_else_advances() {
        assert_eq!(decode(press(KeyCode::Char(' '))), NavKey::Advance);
        assert_eq!(decode(press(KeyCode::Enter)), NavKey::Advance);
        assert_eq!(decode(press(KeyCode::Down)), NavKey::Advance);
    }
}
