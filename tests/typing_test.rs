//! Integration tests for the typing renderer: word wrap, mid-word
//! integrity, emphasis markup, spacing, and jump mode.

use std::time::Instant;

use pretty_assertions::assert_eq;

use memdemo::typing::Typist;

fn typed(message: &str, width: u16, plain: bool) -> String {
    let mut typist = Typist::new(Vec::new(), width, 0);
    if plain {
        typist.say_plain(message, false).expect("typing never fails on a Vec");
    } else {
        typist.say(message, false).expect("typing never fails on a Vec");
    }
    String::from_utf8_lossy(typist.out_mut()).into_owned()
}

#[test]
fn short_message_is_emitted_word_by_word_with_trailing_spaces() {
    assert_eq!(typed("hello world", 80, false), "hello world \n");
}

#[test]
fn words_wrap_instead_of_splitting() {
    // Width 10: "first" fits, "second" (6 >= 10-6 remaining) wraps.
    let output = typed("first second", 10, false);
    assert_eq!(output, "first \nsecond \n");
}

#[test]
fn no_word_is_ever_broken_mid_word() {
    let message = "the collector needs headroom before big allocations";
    let output = typed(message, 12, false);
    for word in message.split(' ') {
        assert!(
            output.contains(word),
            "word {word:?} was split across lines in {output:?}"
        );
    }
}

#[test]
fn sentinels_toggle_color_instead_of_printing() {
    let output = typed("set with `cgroups` please", 80, false);
    assert!(!output.contains('`'));
    assert!(output.contains("cgroups"));
    // One escape to set the color, one to reset it.
    assert_eq!(output.matches('\u{1b}').count(), 2);
}

#[test]
fn an_unclosed_sentinel_is_reset_at_the_end_of_the_message() {
    let output = typed("going *loud", 80, false);
    assert!(!output.contains('*'));
    assert!(output.ends_with("\u{1b}[0m"));
}

#[test]
fn plain_mode_prints_sentinels_literally() {
    let output = typed("> docker run --memory=40mb alpine cat /x_y_z", 200, true);
    assert!(output.contains("/x_y_z"));
    assert!(!output.contains('\u{1b}'));
}

#[test]
fn sentinels_do_not_count_toward_the_wrap_width() {
    // Visible length of "*second*" is 6; counting the sentinels as
    // printable would force a wrap at width 13, visible length does not.
    let marked = typed("first *second*", 13, false);
    assert_eq!(marked.matches('\n').count(), 1, "unexpected wrap in {marked:?}");
    assert!(marked.ends_with('\n'));
}

#[test]
fn jump_mode_skips_the_delay() {
    let mut typist = Typist::new(Vec::new(), 80, 50);
    let start = Instant::now();
    typist
        .say("a handful of words to type out", true)
        .expect("typing never fails on a Vec");
    // 30 characters at up to 50ms each would take seconds when animated.
    assert!(start.elapsed().as_millis() < 200);
}

#[test]
fn line_and_blank_print_instantly_without_styling() {
    let mut typist = Typist::new(Vec::new(), 80, 0);
    typist.line("raw output line").expect("write to a Vec");
    typist.blank().expect("write to a Vec");
    let output = String::from_utf8_lossy(typist.out_mut()).into_owned();
    assert_eq!(output, "raw output line\n\n");
}

#[test]
fn error_lines_are_red_and_reset() {
    let mut typist = Typist::new(Vec::new(), 80, 0);
    typist.error_line("[error: it broke]").expect("write to a Vec");
    let output = String::from_utf8_lossy(typist.out_mut()).into_owned();
    assert!(output.contains("[error: it broke]"));
    assert!(output.starts_with('\u{1b}'));
    assert!(output.contains("\u{1b}[0m"));
}
