use chrono::Datelike;
use lazy_regex::regex;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use super::{
    clock::Clock,
    data::{COMMON_WORDS, COUNTRY_CAPITALS, FIBONACCI, SPONSOR_MESSAGE, VOWELS, WORDLE_ANSWERS},
    helpers::{get_moon_phase, is_prime},
};
use crate::password::{
    helpers::{contains_palindrome, get_digits, get_elements, get_roman_total},
    Password,
};

/// The rules that can be drawn when the player submits a password that satisfies everything.
pub const SURPRISE_RULES: [Rule; 3] = [
    Rule::PasswordLengthPi,
    Rule::IncludeUserIp,
    Rule::NoKeyboardLetters,
];

/// The only rule whose satisfaction ends the game.
pub const TERMINAL_RULE: Rule = Rule::DeletePassword;

/// A rule of the game. Variants are declared in catalog order, which is also the order
/// in which they are unlocked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Password must be at least 8 characters long.
    Length,
    /// Password must contain at least one uppercase letter.
    Uppercase,
    /// Password must contain at least one lowercase letter.
    Lowercase,
    /// Password must contain at least one number.
    Number,
    /// Password must contain at least one special character (!@#$%^&*).
    Special,
    /// Password cannot contain common words.
    NoCommon,
    /// The sum of all numbers in password must equal 25.
    #[serde(rename = "sum-25")]
    Sum25,
    /// Password length must be a prime number.
    PrimeLength,
    /// Password must include the current month as two digits.
    CurrentMonth,
    /// Password must contain Roman numerals that add up to 100.
    RomanNumerals,
    /// Password must contain a palindrome of at least 5 characters.
    Palindrome,
    /// Password must include a country and its capital.
    CountryCapital,
    /// Password must contain valid chess notation.
    ChessNotation,
    /// Password must include at least 3 chemical element symbols.
    PeriodicElement,
    /// Password must include the current moon phase emoji.
    MoonPhase,
    /// Password must contain Fibonacci sequence numbers.
    Fibonacci,
    /// What is 🐔 + 🥚?
    Captcha,
    /// Password must not contain any vowels.
    NoVowels,
    /// Password must contain all 5 vowels.
    AllVowels,
    /// Password must be exactly 16 characters long.
    #[serde(rename = "exactly-16")]
    Exactly16,
    /// Password must be exactly 32 characters long.
    #[serde(rename = "exactly-32")]
    Exactly32,
    /// Password must include today's temperature.
    TodaysWeather,
    /// Password must include the sponsor message.
    Sponsors,
    /// Password must contain today's Wordle answer.
    Wordle,
    /// The train problem.
    CaptchaMath,
    /// Your password is too powerful. Please delete it.
    DeletePassword,
    /// Password length must be exactly π characters long. Never satisfiable.
    PasswordLengthPi,
    /// Password must include your current IP address.
    IncludeUserIp,
    /// Password must not contain any letters that appear on a QWERTY keyboard.
    NoKeyboardLetters,
}

impl Rule {
    /// The standard catalog every game starts with, in unlock order.
    pub fn standard_catalog() -> Vec<Rule> {
        Rule::iter().filter(|r| !r.is_surprise()).collect()
    }

    /// Whether this rule only ever enters the game as a surprise.
    pub fn is_surprise(&self) -> bool {
        SURPRISE_RULES.contains(self)
    }

    /// The rule's identifier, as used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Number => "number",
            Rule::Special => "special",
            Rule::NoCommon => "no-common",
            Rule::Sum25 => "sum-25",
            Rule::PrimeLength => "prime-length",
            Rule::CurrentMonth => "current-month",
            Rule::RomanNumerals => "roman-numerals",
            Rule::Palindrome => "palindrome",
            Rule::CountryCapital => "country-capital",
            Rule::ChessNotation => "chess-notation",
            Rule::PeriodicElement => "periodic-element",
            Rule::MoonPhase => "moon-phase",
            Rule::Fibonacci => "fibonacci",
            Rule::Captcha => "captcha",
            Rule::NoVowels => "no-vowels",
            Rule::AllVowels => "all-vowels",
            Rule::Exactly16 => "exactly-16",
            Rule::Exactly32 => "exactly-32",
            Rule::TodaysWeather => "todays-weather",
            Rule::Sponsors => "sponsors",
            Rule::Wordle => "wordle",
            Rule::CaptchaMath => "captcha-math",
            Rule::DeletePassword => "delete-password",
            Rule::PasswordLengthPi => "password-length-pi",
            Rule::IncludeUserIp => "include-user-ip",
            Rule::NoKeyboardLetters => "no-keyboard-letters",
        }
    }

    /// The text shown to the player.
    pub fn text(&self) -> &'static str {
        match self {
            Rule::Length => "Password must be at least 8 characters long",
            Rule::Uppercase => "Password must contain at least one uppercase letter",
            Rule::Lowercase => "Password must contain at least one lowercase letter",
            Rule::Number => "Password must contain at least one number",
            Rule::Special => "Password must contain at least one special character (!@#$%^&*)",
            Rule::NoCommon => "Password cannot contain common words (password, 123456, qwerty)",
            Rule::Sum25 => "The sum of all numbers in password must equal 25",
            Rule::PrimeLength => "Password length must be a prime number",
            Rule::CurrentMonth => "Password must include the current month (07 for July)",
            Rule::RomanNumerals => {
                "Password must contain Roman numerals that add up to 100 (C, L, X, V, I)"
            }
            Rule::Palindrome => "Password must contain a palindrome of at least 5 characters",
            Rule::CountryCapital => {
                "Password must include a country and its capital (e.g., FranceParis)"
            }
            Rule::ChessNotation => "Password must contain valid chess notation (e.g., e4, Nf3, O-O)",
            Rule::PeriodicElement => {
                "Password must include at least 3 chemical element symbols (He, Li, Be, etc.)"
            }
            Rule::MoonPhase => "Password must include the current moon phase emoji 🌙",
            Rule::Fibonacci => {
                "Password must contain Fibonacci sequence numbers (1,1,2,3,5,8,13...)"
            }
            Rule::Captcha => "Password must include the solution: What is 🐔 + 🥚? (Answer: chicken)",
            Rule::NoVowels => "Password must not contain any vowels (a, e, i, o, u)",
            Rule::AllVowels => "Password must contain all 5 vowels (a, e, i, o, u)",
            Rule::Exactly16 => "Password must be exactly 16 characters long",
            Rule::Exactly32 => "Password must be exactly 32 characters long",
            Rule::TodaysWeather => {
                "Password must include today's temperature in your city (e.g., 23C)"
            }
            Rule::Sponsors => "Password must include \"This password is sponsored by NordVPN\"",
            Rule::Wordle => "Password must contain today's Wordle answer (you must guess correctly)",
            Rule::CaptchaMath => {
                "Solve: If a train leaves at 2:30 PM going 60mph, and another at 3:00 PM going \
                 80mph, when do they meet? Include answer in password."
            }
            Rule::DeletePassword => "Your password is too powerful. Please delete it.",
            Rule::PasswordLengthPi => {
                "Password length must be exactly π (3.14159...) characters long"
            }
            Rule::IncludeUserIp => "Password must include your current IP address",
            Rule::NoKeyboardLetters => {
                "Password must not contain any letters that appear on a QWERTY keyboard"
            }
        }
    }

    /// Difficulty level of the rule, from 0 (beginner) to 10.
    pub fn level(&self) -> usize {
        match self {
            Rule::Length | Rule::Uppercase | Rule::Lowercase => 0,
            Rule::Number | Rule::Special | Rule::NoCommon => 1,
            Rule::Sum25 | Rule::PrimeLength => 2,
            Rule::CurrentMonth | Rule::RomanNumerals => 3,
            Rule::Palindrome | Rule::CountryCapital => 4,
            Rule::ChessNotation | Rule::PeriodicElement => 5,
            Rule::MoonPhase | Rule::Fibonacci | Rule::Captcha => 6,
            Rule::NoVowels | Rule::AllVowels => 7,
            Rule::Exactly16 | Rule::Exactly32 | Rule::TodaysWeather => 8,
            Rule::Sponsors | Rule::Wordle | Rule::CaptchaMath => 9,
            Rule::DeletePassword
            | Rule::PasswordLengthPi
            | Rule::IncludeUserIp
            | Rule::NoKeyboardLetters => 10,
        }
    }

    /// Does the given password satisfy this rule at the time reported by `clock`?
    pub fn validate_at(&self, password: &Password, clock: &dyn Clock) -> bool {
        match self {
            Rule::Length => password.len() >= 8,
            Rule::Uppercase => password.as_str().chars().any(|c| c.is_ascii_uppercase()),
            Rule::Lowercase => password.as_str().chars().any(|c| c.is_ascii_lowercase()),
            Rule::Number => password.as_str().chars().any(|c| c.is_ascii_digit()),
            Rule::Special => password
                .as_str()
                .chars()
                .any(|c| "!@#$%^&*".contains(c)),
            Rule::NoCommon => {
                let lowercase_password = password.as_str().to_lowercase();
                !COMMON_WORDS.iter().any(|w| lowercase_password.contains(w))
            }
            Rule::Sum25 => {
                let digits = get_digits(password.as_str());
                !digits.is_empty() && digits.iter().sum::<u32>() == 25
            }
            Rule::PrimeLength => is_prime(password.len()),
            Rule::CurrentMonth => {
                let month = format!("{:02}", clock.now().month());
                password.as_str().contains(&month)
            }
            Rule::RomanNumerals => get_roman_total(password.as_str()) == Some(100),
            Rule::Palindrome => contains_palindrome(password.as_str(), 5),
            Rule::CountryCapital => COUNTRY_CAPITALS
                .iter()
                .any(|pair| password.as_str().contains(pair)),
            Rule::ChessNotation => regex!(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](\+|#)?|O-O(-O)?")
                .is_match(password.as_str()),
            Rule::PeriodicElement => get_elements(password.as_str()).len() >= 3,
            Rule::MoonPhase => {
                let valid_emojis = get_moon_phase(clock.now().date_naive()).emojis();
                password
                    .graphemes()
                    .iter()
                    .any(|g| *g == "🌙" || valid_emojis.iter().any(|e| e == g))
            }
            Rule::Fibonacci => FIBONACCI.iter().any(|n| password.as_str().contains(n)),
            Rule::Captcha => password.as_str().to_lowercase().contains("chicken"),
            Rule::NoVowels => !password
                .as_str()
                .chars()
                .any(|c| VOWELS.contains(&c.to_ascii_lowercase())),
            Rule::AllVowels => {
                let lowercase_password = password.as_str().to_lowercase();
                VOWELS.iter().all(|v| lowercase_password.contains(*v))
            }
            Rule::Exactly16 => password.len() == 16,
            Rule::Exactly32 => password.len() == 32,
            Rule::TodaysWeather => regex!(r"[0-9]+[CF]").is_match(password.as_str()),
            Rule::Sponsors => password.as_str().contains(SPONSOR_MESSAGE),
            Rule::Wordle => {
                let uppercase_password = password.as_str().to_uppercase();
                WORDLE_ANSWERS
                    .iter()
                    .any(|w| uppercase_password.contains(w))
            }
            Rule::CaptchaMath => {
                password.as_str().contains("never") || password.as_str().contains("parallel")
            }
            Rule::DeletePassword => password.is_empty(),
            Rule::PasswordLengthPi => password.len() as f64 == std::f64::consts::PI,
            Rule::IncludeUserIp => password.as_str().contains("192.168.1.1"),
            Rule::NoKeyboardLetters => !password.as_str().chars().any(|c| c.is_ascii_alphabetic()),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
