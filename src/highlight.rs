//! Instant rendering of code slides with a keyword coloring overlay.
//!
//! Code is printed verbatim line by line, then matched tokens are
//! rewritten in color at their original columns. Two fixed token sets:
//! language keywords and the runtime types the talk cares about.

use std::io::Write;
use std::sync::LazyLock;

use anyhow::Result;
use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use regex::Regex;

static KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(const|int|static|void|string|byte|new|try|for|using|catch)\b")
        .expect("keyword pattern")
});

static TYPES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(MemoryFailPoint|InsufficientMemoryException)\b").expect("type pattern")
});

/// Print a preformatted code block with no typing delay, followed by a
/// blank line.
pub fn print_block<W: Write>(out: &mut W, code: &str) -> Result<()> {
    for line in code.lines() {
        queue!(out, Print(line))?;
        colorize(out, line, &KEYWORDS, Color::Blue)?;
        colorize(out, line, &TYPES, Color::Cyan)?;
        queue!(out, Print('\n'))?;
    }
    queue!(out, Print('\n'))?;
    out.flush()?;
    Ok(())
}

/// Rewrite every `pattern` match of the line just printed, in `color`,
/// at the column it originally appeared in.
fn colorize<W: Write>(out: &mut W, line: &str, pattern: &Regex, color: Color) -> Result<()> {
    let mut matched = false;
    for m in pattern.find_iter(line) {
        if !matched {
            queue!(out, SetForegroundColor(color))?;
            matched = true;
        }
        queue!(out, MoveToColumn(m.start() as u16), Print(m.as_str()))?;
    }
    if matched {
        queue!(out, ResetColor)?;
    }
    Ok(())
}
