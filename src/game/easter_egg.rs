use std::collections::VecDeque;

use super::data::KONAMI_CODE;

/// The easter egg is revealed once the password grows beyond this many characters.
pub const EASTER_EGG_THRESHOLD: usize = 50;

pub const EASTER_EGG_MESSAGE: &str =
    "🥚 You found the easter egg! Fifty characters in and still going. Respect.";

/// Watches a stream of key codes for the Konami code.
#[derive(Debug, Default)]
pub struct KonamiDetector {
    /// The most recent key codes, at most `KONAMI_CODE.len()` of them.
    keys: VecDeque<String>,
}

impl KonamiDetector {
    /// Record a key press. Returns true if it completes the Konami code.
    pub fn push(&mut self, code: &str) -> bool {
        self.keys.push_back(code.to_owned());
        if self.keys.len() > KONAMI_CODE.len() {
            self.keys.pop_front();
        }
        self.keys
            .iter()
            .map(String::as_str)
            .eq(KONAMI_CODE.iter().copied())
    }
}
