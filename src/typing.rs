use crate::constants::*;

/// Delay until the next typewriter tick, in milliseconds.
pub type DelayMs = u32;

/// Typewriter state machine: types each string out one character at a time,
/// holds it, deletes it twice as fast, pauses briefly, then moves to the
/// next string, wrapping forever. Pure so the cadence is host-testable; the
/// wasm driver owns the timer and the DOM write.
#[derive(Debug, Clone)]
pub struct Typewriter {
    strings: Vec<String>,
    speed_ms: u32,
    hold_ms: u32,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// Empty `strings` yields a permanently idle machine.
    pub fn new(strings: Vec<String>, speed_ms: u32, hold_ms: u32) -> Self {
        Typewriter {
            strings,
            speed_ms,
            hold_ms,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    pub fn with_defaults(strings: Vec<String>) -> Self {
        Self::new(strings, TYPE_SPEED_MS, TYPE_HOLD_MS)
    }

    pub fn display(&self) -> &str {
        match self.strings.get(self.index) {
            Some(s) => prefix_chars(s, self.shown),
            None => "",
        }
    }

    /// Advances one step and returns the text to display plus the delay
    /// before the next tick.
    pub fn tick(&mut self) -> (&str, DelayMs) {
        if self.strings.is_empty() {
            return ("", self.hold_ms);
        }
        let full_len = self.strings[self.index].chars().count();

        let delay = if self.deleting {
            if self.shown > 0 {
                self.shown -= 1;
            }
            if self.shown == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.strings.len();
                TYPE_RESUME_MS
            } else {
                self.speed_ms / 2
            }
        } else {
            if self.shown < full_len {
                self.shown += 1;
            }
            if self.shown == full_len {
                self.deleting = true;
                self.hold_ms
            } else {
                self.speed_ms
            }
        };

        (self.display(), delay)
    }
}

/// Loading-indicator text for a given animation step: zero to three dots,
/// cycling.
pub fn loading_dots(step: usize) -> &'static str {
    match step % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

// `shown` counts chars, not bytes, so multi-byte text truncates cleanly.
fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
