use cached::proc_macro::cached;
use chrono::prelude::*;
use suncalc::{moon_illumination, Timestamp};

/// Phases of the moon, as reported by the moon phase rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Emojis accepted for this phase.
    pub fn emojis(&self) -> Vec<&'static str> {
        match self {
            MoonPhase::New => vec!["🌑", "🌚"],
            MoonPhase::WaxingCrescent => vec!["🌒"],
            MoonPhase::FirstQuarter => vec!["🌓", "🌛"],
            MoonPhase::WaxingGibbous => vec!["🌔"],
            MoonPhase::Full => vec!["🌕", "🌝"],
            MoonPhase::WaningGibbous => vec!["🌖"],
            MoonPhase::LastQuarter => vec!["🌗", "🌜"],
            MoonPhase::WaningCrescent => vec!["🌘"],
        }
    }
}

/// Get the phase of the moon on the given date (UTC midnight to midnight).
#[cached]
pub fn get_moon_phase(date: NaiveDate) -> MoonPhase {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time");
    let today = Utc.from_utc_datetime(&midnight).timestamp_millis();
    let tomorrow = today + 24 * 60 * 60 * 1000;
    let phase_today = moon_illumination(Timestamp(today)).phase;
    let phase_tomorrow = moon_illumination(Timestamp(tomorrow)).phase;

    if phase_today <= 0.25 && phase_tomorrow >= 0.25 {
        MoonPhase::FirstQuarter
    } else if phase_today <= 0.5 && phase_tomorrow >= 0.5 {
        MoonPhase::Full
    } else if phase_today <= 0.75 && phase_tomorrow >= 0.75 {
        MoonPhase::LastQuarter
    } else if phase_today >= phase_tomorrow {
        MoonPhase::New
    } else if phase_today <= 0.25 {
        MoonPhase::WaxingCrescent
    } else if phase_today <= 0.5 {
        MoonPhase::WaxingGibbous
    } else if phase_today <= 0.75 {
        MoonPhase::WaningGibbous
    } else {
        MoonPhase::WaningCrescent
    }
}

/// Check if a number is prime.
#[cached]
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    let limit = (n as f64).sqrt() as usize;
    for i in 2..=limit {
        if n % i == 0 {
            return false;
        }
    }
    true
}
