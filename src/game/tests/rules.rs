use chrono::prelude::*;
use strum::IntoEnumIterator;

use super::super::{clock::FixedClock, Rule};
use crate::password::Password;

fn july() -> FixedClock {
    FixedClock(Local.with_ymd_and_hms(2023, 7, 3, 12, 0, 0).unwrap())
}

fn check(rule: Rule, password: &str) -> bool {
    rule.validate_at(&Password::from(password), &july())
}

#[test]
fn ids() {
    for rule in Rule::iter() {
        assert_eq!(serde_plain::to_string(&rule).unwrap(), rule.id());
        assert_eq!(serde_plain::from_str::<Rule>(rule.id()).unwrap(), rule);
        assert!(rule.level() <= 10);
    }
}

#[test]
fn standard_catalog() {
    let catalog = Rule::standard_catalog();
    assert_eq!(catalog.len(), 26);
    assert_eq!(catalog[..3], [Rule::Length, Rule::Uppercase, Rule::Lowercase]);
    assert_eq!(catalog.last(), Some(&Rule::DeletePassword));
    assert!(catalog.iter().all(|r| !r.is_surprise()));

    // Levels never decrease along the catalog
    assert!(catalog.windows(2).all(|w| w[0].level() <= w[1].level()));
}

#[test]
fn rule_length() {
    assert!(check(Rule::Length, "12345678"));
    assert!(!check(Rule::Length, "1234567"));

    // Each moon is two UTF-16 code units
    assert!(check(Rule::Length, "🌙🌙🌙🌙"));
    assert!(!check(Rule::Length, "🌙🌙🌙"));
}

#[test]
fn rule_case() {
    assert!(check(Rule::Uppercase, "Hello"));
    assert!(!check(Rule::Uppercase, "hello"));
    assert!(check(Rule::Lowercase, "Hello"));
    assert!(!check(Rule::Lowercase, "HELLO"));
    // Only ASCII letters count
    assert!(!check(Rule::Uppercase, "É"));
}

#[test]
fn rule_number() {
    for i in 0..=9 {
        assert!(check(Rule::Number, &format!("{}", i)));
    }
    assert!(!check(Rule::Number, "one"));
}

#[test]
fn rule_special() {
    for c in "!@#$%^&*".chars() {
        assert!(check(Rule::Special, &c.to_string()));
    }
    // Only the listed characters count
    assert!(!check(Rule::Special, "?"));
    assert!(!check(Rule::Special, "🌙"));
}

#[test]
fn rule_no_common() {
    assert!(check(Rule::NoCommon, "hunter2"));
    assert!(!check(Rule::NoCommon, "MyPassWord"));
    assert!(!check(Rule::NoCommon, "x123456x"));
    assert!(!check(Rule::NoCommon, "superuser"));
}

#[test]
fn rule_sum_25() {
    assert!(check(Rule::Sum25, "99a7"));
    assert!(check(Rule::Sum25, "55555"));

    // Each digit is considered individually
    assert!(!check(Rule::Sum25, "25"));
    assert!(!check(Rule::Sum25, "hello"));
}

#[test]
fn rule_prime_length() {
    assert!(check(Rule::PrimeLength, "ab"));
    assert!(check(Rule::PrimeLength, "abcdefghijk"));
    assert!(!check(Rule::PrimeLength, ""));
    assert!(!check(Rule::PrimeLength, "a"));
    assert!(!check(Rule::PrimeLength, "abcd"));
    assert!(check(Rule::PrimeLength, "🌙a"));
    assert!(!check(Rule::PrimeLength, "🌙🌙"));
}

#[test]
fn rule_current_month() {
    assert!(check(Rule::CurrentMonth, "month07"));
    assert!(!check(Rule::CurrentMonth, "month7"));

    let december = FixedClock(Local.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
    assert!(Rule::CurrentMonth.validate_at(&Password::from("12"), &december));
    assert!(!Rule::CurrentMonth.validate_at(&Password::from("07"), &december));
}

#[test]
fn rule_roman_numerals() {
    assert!(check(Rule::RomanNumerals, "C"));
    assert!(check(Rule::RomanNumerals, "L and L"));
    assert!(check(Rule::RomanNumerals, "XCX"));

    // Lowercase letters are not numerals
    assert!(!check(Rule::RomanNumerals, "c"));
    assert!(!check(Rule::RomanNumerals, "XC"));
    assert!(!check(Rule::RomanNumerals, ""));
}

#[test]
fn rule_palindrome() {
    assert!(check(Rule::Palindrome, "xxlevelxx"));
    assert!(!check(Rule::Palindrome, "abba"));
}

#[test]
fn rule_country_capital() {
    assert!(check(Rule::CountryCapital, "123FranceParis"));
    assert!(check(Rule::CountryCapital, "JapanTokyo"));
    assert!(!check(Rule::CountryCapital, "ParisFrance"));
    assert!(!check(Rule::CountryCapital, "franceparis"));
}

#[test]
fn rule_chess_notation() {
    assert!(check(Rule::ChessNotation, "e4"));
    assert!(check(Rule::ChessNotation, "Nf3"));
    assert!(check(Rule::ChessNotation, "O-O"));
    assert!(check(Rule::ChessNotation, "Qxh7#"));
    assert!(!check(Rule::ChessNotation, "i9"));
    assert!(!check(Rule::ChessNotation, "hello"));
}

#[test]
fn rule_periodic_element() {
    // H, He and Li
    assert!(check(Rule::PeriodicElement, "HeLi"));
    assert!(check(Rule::PeriodicElement, "NaCl"));
    assert!(!check(Rule::PeriodicElement, "He"));
    // Gold and silver are too heavy
    assert!(!check(Rule::PeriodicElement, "AuAg"));
}

#[test]
fn rule_moon_phase() {
    // The crescent moon is always accepted
    assert!(check(Rule::MoonPhase, "🌙"));
    // So is the actual phase of the moon
    assert!(check(Rule::MoonPhase, "full🌕"));
    assert!(!check(Rule::MoonPhase, "🌑"));
    assert!(!check(Rule::MoonPhase, "moon"));
}

#[test]
fn rule_fibonacci() {
    assert!(check(Rule::Fibonacci, "x55"));
    assert!(check(Rule::Fibonacci, "8"));
    assert!(!check(Rule::Fibonacci, "0479"));
}

#[test]
fn rule_captcha() {
    assert!(check(Rule::Captcha, "CHICKEN"));
    assert!(!check(Rule::Captcha, "egg"));
}

#[test]
fn rule_vowels() {
    assert!(check(Rule::NoVowels, "rhythm"));
    assert!(check(Rule::NoVowels, ""));
    assert!(!check(Rule::NoVowels, "rhythmA"));

    assert!(check(Rule::AllVowels, "EducatiOn"));
    assert!(!check(Rule::AllVowels, "educatin"));
    assert!(!check(Rule::AllVowels, "aeio"));
}

#[test]
fn rule_exact_lengths() {
    assert!(check(Rule::Exactly16, &"a".repeat(16)));
    assert!(!check(Rule::Exactly16, &"a".repeat(17)));
    assert!(check(Rule::Exactly32, &"🌙".repeat(16)));
    assert!(!check(Rule::Exactly32, &"🌙".repeat(32)));
    assert!(!check(Rule::Exactly32, &"a".repeat(16)));
}

#[test]
fn rule_todays_weather() {
    assert!(check(Rule::TodaysWeather, "23C"));
    assert!(check(Rule::TodaysWeather, "it is 451F"));
    assert!(!check(Rule::TodaysWeather, "23c"));
    assert!(!check(Rule::TodaysWeather, "C23"));
}

#[test]
fn rule_sponsors() {
    assert!(check(
        Rule::Sponsors,
        "xThis password is sponsored by NordVPNx"
    ));
    assert!(!check(Rule::Sponsors, "this password is sponsored by nordvpn"));
}

#[test]
fn rule_wordle() {
    assert!(check(Rule::Wordle, "heart"));
    assert!(check(Rule::Wordle, "GreatScott"));
    assert!(!check(Rule::Wordle, "crane"));
}

#[test]
fn rule_captcha_math() {
    assert!(check(Rule::CaptchaMath, "they never meet"));
    assert!(check(Rule::CaptchaMath, "parallel"));
    assert!(!check(Rule::CaptchaMath, "Never"));
}

#[test]
fn rule_delete_password() {
    assert!(check(Rule::DeletePassword, ""));
    assert!(!check(Rule::DeletePassword, " "));
}

#[test]
fn surprise_rules() {
    // π characters is never achievable
    for len in 0..10 {
        assert!(!check(Rule::PasswordLengthPi, &"a".repeat(len)));
    }

    assert!(check(Rule::IncludeUserIp, "ip=192.168.1.1"));
    assert!(!check(Rule::IncludeUserIp, "127.0.0.1"));

    assert!(check(Rule::NoKeyboardLetters, "1234!🌙"));
    assert!(check(Rule::NoKeyboardLetters, ""));
    assert!(!check(Rule::NoKeyboardLetters, "123Q"));
}

#[test]
fn empty_password() {
    let satisfied = Rule::iter()
        .filter(|r| check(*r, ""))
        .collect::<Vec<_>>();
    assert_eq!(
        satisfied,
        vec![
            Rule::NoCommon,
            Rule::NoVowels,
            Rule::DeletePassword,
            Rule::NoKeyboardLetters
        ]
    );
}

#[test]
fn total_over_odd_input() {
    let inputs = [
        String::new(),
        "a".repeat(10_000),
        "🏋️‍♂️🌙\u{0}\u{FEFF}ÀÉ\n\t".into(),
        "ﷺ𒐫".repeat(50),
    ];
    for input in &inputs {
        for rule in Rule::iter() {
            check(rule, input);
        }
    }
}
