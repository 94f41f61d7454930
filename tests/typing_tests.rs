// Host-side tests for the typewriter state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod typing {
    include!("../src/typing.rs");
}

use constants::*;
use typing::Typewriter;

fn machine(strings: &[&str]) -> Typewriter {
    Typewriter::with_defaults(strings.iter().map(|s| s.to_string()).collect())
}

#[test]
fn types_one_char_per_tick() {
    let mut tw = machine(&["abc"]);

    let (text, delay) = tw.tick();
    assert_eq!(text, "a");
    assert_eq!(delay, TYPE_SPEED_MS);

    let (text, delay) = tw.tick();
    assert_eq!(text, "ab");
    assert_eq!(delay, TYPE_SPEED_MS);

    let (text, delay) = tw.tick();
    assert_eq!(text, "abc");
    assert_eq!(delay, TYPE_HOLD_MS, "completed string should hold");
}

#[test]
fn deletes_at_double_speed() {
    let mut tw = machine(&["ab"]);
    tw.tick(); // "a"
    tw.tick(); // "ab", hold

    let (text, delay) = tw.tick();
    assert_eq!(text, "a");
    assert_eq!(delay, TYPE_SPEED_MS / 2);
}

#[test]
fn wraps_to_next_string_after_pause() {
    let mut tw = machine(&["hi", "yo"]);
    tw.tick(); // "h"
    tw.tick(); // "hi", hold
    tw.tick(); // "h"

    let (text, delay) = tw.tick();
    assert_eq!(text, "", "string should empty before switching");
    assert_eq!(delay, TYPE_RESUME_MS);

    let (text, _) = tw.tick();
    assert_eq!(text, "y");
    let (text, _) = tw.tick();
    assert_eq!(text, "yo");
}

#[test]
fn loops_back_to_first_string() {
    let mut tw = machine(&["a", "b"]);
    // Type, hold, delete, pause -- twice -- then we are back at "a".
    for _ in 0..2 {
        tw.tick(); // full single char
        tw.tick(); // deleted, pause
    }
    let (text, _) = tw.tick();
    assert_eq!(text, "a");
}

#[test]
fn single_string_repeats() {
    let mut tw = machine(&["ok"]);
    tw.tick();
    tw.tick(); // "ok", hold
    tw.tick();
    tw.tick(); // emptied, pause
    let (text, _) = tw.tick();
    assert_eq!(text, "o");
}

#[test]
fn multibyte_text_truncates_on_char_boundaries() {
    let mut tw = machine(&["héllo"]);
    let (text, _) = tw.tick();
    assert_eq!(text, "h");
    let (text, _) = tw.tick();
    assert_eq!(text, "hé");
    let (text, _) = tw.tick();
    assert_eq!(text, "hél");
}

#[test]
fn empty_rotation_stays_idle() {
    let mut tw = Typewriter::with_defaults(Vec::new());
    for _ in 0..5 {
        let (text, _) = tw.tick();
        assert_eq!(text, "");
    }
}

#[test]
fn loading_dots_cycle_zero_to_three() {
    assert_eq!(typing::loading_dots(0), "");
    assert_eq!(typing::loading_dots(1), ".");
    assert_eq!(typing::loading_dots(2), "..");
    assert_eq!(typing::loading_dots(3), "...");
    // Wraps back around instead of growing.
    assert_eq!(typing::loading_dots(4), "");
    assert_eq!(typing::loading_dots(7), "...");
}

#[test]
fn custom_timing_is_respected() {
    let mut tw = Typewriter::new(vec!["xy".into()], 80, 1000);
    let (_, delay) = tw.tick();
    assert_eq!(delay, 80);
    let (_, delay) = tw.tick();
    assert_eq!(delay, 1000);
    let (_, delay) = tw.tick();
    assert_eq!(delay, 40);
}
