use lazy_static::lazy_static;

/// Words the "no-common" rule refuses, matched case-insensitively.
pub const COMMON_WORDS: [&str; 6] = ["password", "123456", "qwerty", "admin", "login", "user"];

/// Country and capital pairs, matched case-sensitively with no separator.
pub const COUNTRY_CAPITALS: [&str; 8] = [
    "FranceParis",
    "GermanyBerlin",
    "ItalyRome",
    "SpainMadrid",
    "JapanTokyo",
    "ChinaBeijing",
    "IndiaDelhi",
    "BrazilBrasilia",
];

/// Every "Wordle answer" the game will accept, on any day.
pub const WORDLE_ANSWERS: [&str; 5] = ["ABOUT", "HEART", "WORLD", "SOUND", "GREAT"];

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const SPONSOR_MESSAGE: &str = "This password is sponsored by NordVPN";

/// Names for each difficulty level, indexed by the highest level among the active rules.
pub const IMPOSSIBILITY_LEVELS: [&str; 11] = [
    "Beginner",
    "Easy",
    "Normal",
    "Hard",
    "Expert",
    "Nightmare",
    "Impossible",
    "Absurd",
    "Ridiculous",
    "Insane",
    "Cosmic Horror",
];

/// Messages that occasionally interrupt the game.
pub const GLITCH_MESSAGES: [&str; 4] = [
    "ERROR: Password too secure, please make it weaker",
    "WARNING: This password might become sentient",
    "NOTICE: Your password is being judged by a committee of cats",
    "ALERT: Password rejected by the International Password Council",
];

/// Key codes that trigger the Konami easter egg, in order.
pub const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

lazy_static! {
    /// The first ten Fibonacci numbers, as the strings the password is searched for.
    pub static ref FIBONACCI: Vec<String> = {
        let mut v = Vec::new();
        let (mut a, mut b) = (1u32, 1u32);
        for _ in 0..10 {
            v.push(a.to_string());
            (a, b) = (b, a + b);
        }
        v.dedup();
        v
    };
}
