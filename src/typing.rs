//! Simulated live typing with word wrap and inline emphasis markup.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use rand::Rng;

/// Emphasis sentinels: each toggles a foreground color on and off
/// instead of being printed.
fn sentinel_color(c: char) -> Option<Color> {
    match c {
        '`' => Some(Color::DarkYellow),
        '*' => Some(Color::DarkMagenta),
        '_' => Some(Color::DarkCyan),
        _ => None,
    }
}

/// Writes slide text to the terminal one character at a time, pausing a
/// random few milliseconds between characters to look hand-typed.
///
/// The typist tracks its own cursor column so it can word-wrap: a word
/// that does not fit on the remainder of the line is preceded by a line
/// break rather than split mid-word.
pub struct Typist<W: Write> {
    out: W,
    width: u16,        // terminal columns
    column: u16,       // tracked cursor column
    delay_max_ms: u64, // 0 disables the typing pause entirely
    active: Option<Color>,
}

impl<W: Write> Typist<W> {
    pub fn new(out: W, width: u16, delay_max_ms: u64) -> Self {
        Self {
            out,
            width,
            column: 0,
            delay_max_ms,
            active: None,
        }
    }

    /// Type out a message with emphasis markup enabled.
    pub fn say(&mut self, message: &str, jump: bool) -> Result<()> {
        self.type_out(message, jump, true)
    }

    /// Type out a message with markup suppressed: sentinel characters
    /// print literally. Used for command invocations.
    pub fn say_plain(&mut self, message: &str, jump: bool) -> Result<()> {
        self.type_out(message, jump, false)
    }

    fn type_out(&mut self, message: &str, jump: bool, markup: bool) -> Result<()> {
        for word in message.split(' ') {
            let visible = word
                .chars()
                .filter(|&c| c != '\n' && !(markup && sentinel_color(c).is_some()))
                .count() as u16;
            if visible >= self.width.saturating_sub(self.column) {
                queue!(self.out, Print('\n'))?;
                self.column = 0;
            }

            for c in word.chars() {
                if markup {
                    if let Some(color) = sentinel_color(c) {
                        self.toggle_color(color)?;
                        continue;
                    }
                }

                queue!(self.out, Print(c))?;
                if c == '\n' {
                    self.column = 0;
                } else {
                    self.column += 1;
                }
                self.out.flush()?;

                if !jump && self.delay_max_ms > 0 {
                    let pause = rand::rng().random_range(0..self.delay_max_ms);
                    thread::sleep(Duration::from_millis(pause));
                }
            }

            queue!(self.out, Print(' '))?;
            self.column += 1;
            // The terminal wraps oversized words itself; follow it.
            if self.width > 0 {
                self.column %= self.width;
            }
        }

        queue!(self.out, Print('\n'))?;
        self.column = 0;
        if self.active.is_some() {
            queue!(self.out, ResetColor)?;
            self.active = None;
        }
        self.out.flush()?;
        Ok(())
    }

    fn toggle_color(&mut self, desired: Color) -> Result<()> {
        if self.active == Some(desired) {
            queue!(self.out, ResetColor)?;
            self.active = None;
        } else {
            queue!(self.out, SetForegroundColor(desired))?;
            self.active = Some(desired);
        }
        Ok(())
    }

    /// Print a line immediately, no typing effect.
    pub fn line(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text), Print('\n'))?;
        self.column = 0;
        self.out.flush()?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    pub fn error_line(&mut self, text: &str) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Red),
            Print(text),
            ResetColor,
            Print('\n')
        )?;
        self.column = 0;
        self.out.flush()?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.column = 0;
        self.out.flush()?;
        Ok(())
    }

    /// Direct sink access for renderers that position the cursor and
    /// color spans themselves. They are expected to leave the cursor at
    /// the start of a fresh line.
    pub fn out_mut(&mut self) -> &mut W {
        &mut self.out
    }
}
