//! Cursor state and the key-to-slide transition rules.

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NavKey {
    Previous, // Left arrow: back one slide, animation off
    SkipNext, // Right arrow: on to the next slide, animation off
    Replay,   // 'r': play the previous slide again, animated
    Quit,     // 'q' or Ctrl-C: leave the presentation
    Advance,  // any other key: on to the next slide, animated
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Control {
    Continue,
    Quit,
}

/// Where the presentation is: the index of the slide most recently
/// played and whether the next play should skip its animation.
#[derive(Debug, Default)]
pub struct ShowState {
    pub cursor: usize,
    pub jump: bool,
    started: bool,
}

impl ShowState {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Begin the show at `slide` instead of the top of the deck.
    pub fn starting_at(slide: usize) -> Self {
        Self {
            cursor: slide,
            jump: false,
            started: false,
        }
    }

    /// Apply one keypress. The slide under the cursor has already been
    /// played (except before the first keypress), so every key first
    /// advances past it, then applies its own offset, then clamps into
    /// `[0, deck_len - 1]`.
    pub fn handle(&mut self, key: NavKey, deck_len: usize) -> Control {
        let mut next = self.cursor as isize;
        if self.started {
            next += 1;
        }
        self.started = true;
        self.jump = false;

        match key {
            NavKey::Previous => {
                next -= 2;
                self.jump = true;
            }
            NavKey::SkipNext => {
                self.jump = true;
            }
            NavKey::Replay => {
                next -= 1;
            }
            NavKey::Quit => return Control::Quit,
            NavKey::Advance => {}
        }

        self.cursor = next.clamp(0, deck_len as isize - 1) as usize;
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(cursor: usize) -> ShowState {
        ShowState {
            cursor,
            jump: false,
            started: true,
        }
    }

    #[test]
    fn first_keypress_plays_the_starting_slide() {
        let mut state = ShowState::new();
        state.handle(NavKey::Advance, 10);
        assert_eq!(state.cursor, 0);
        assert!(!state.jump);
    }

    #[test]
    fn first_keypress_honours_a_later_start() {
        let mut state = ShowState::starting_at(4);
        state.handle(NavKey::Advance, 10);
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn first_keypress_clamps_a_start_beyond_the_deck() {
        let mut state = ShowState::starting_at(99);
        state.handle(NavKey::Advance, 10);
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn advance_walks_the_deck_and_pins_at_the_end() {
        let mut state = ShowState::new();
        for expected in 0..5 {
            state.handle(NavKey::Advance, 5);
            assert_eq!(state.cursor, expected);
        }
        state.handle(NavKey::Advance, 5);
        assert_eq!(state.cursor, 4);
        state.handle(NavKey::SkipNext, 5);
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn previous_goes_back_one_and_requests_a_jump() {
        let mut state = started(3);
        state.handle(NavKey::Previous, 10);
        assert_eq!(state.cursor, 2);
        assert!(state.jump);
    }

    #[test]
    fn previous_pins_at_the_first_slide() {
        let mut state = started(0);
        state.handle(NavKey::Previous, 10);
        assert_eq!(state.cursor, 0);
        state.handle(NavKey::Previous, 10);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn skip_next_advances_without_animation() {
        let mut state = started(3);
        state.handle(NavKey::SkipNext, 10);
        assert_eq!(state.cursor, 4);
        assert!(state.jump);
    }

    #[test]
    fn replay_repeats_the_slide_just_played_with_animation() {
        let mut state = started(3);
        state.handle(NavKey::Replay, 10);
        assert_eq!(state.cursor, 3);
        assert!(!state.jump);
    }

    #[test]
    fn quit_stops_without_moving() {
        let mut state = started(3);
        assert_eq!(state.handle(NavKey::Quit, 10), Control::Quit);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn cursor_stays_in_range_for_any_key_sequence() {
        let keys = [
            NavKey::Previous,
            NavKey::SkipNext,
            NavKey::Replay,
            NavKey::Advance,
        ];
        let mut state = ShowState::new();
        for i in 0..200 {
            state.handle(keys[i % keys.len()], 7);
            assert!(state.cursor < 7);
        }
    }

    #[test]
    fn jump_resets_between_keypresses() {
        let mut state = started(2);
        state.handle(NavKey::SkipNext, 10);
        assert!(state.jump);
        state.handle(NavKey::Advance, 10);
        assert!(!state.jump);
    }
}
