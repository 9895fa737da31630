//! Which rules are currently in play.
//!
//! The active rules are always a prefix of the catalog. The window grows by one rule for
//! every two characters typed, and doing well unlocks two more on top.

use log::trace;

use super::Rule;

/// Rules active before anything has been typed.
pub const BASE_RULES: usize = 3;
/// Characters needed to unlock each further rule.
pub const CHARACTERS_PER_RULE: usize = 2;
/// Extra rules unlocked when the player is doing well.
pub const BONUS_RULES: usize = 2;
/// Fraction of the window that must be satisfied (strictly exceeded) to earn the bonus.
pub const BONUS_THRESHOLD: f64 = 0.8;

/// Number of catalog rules that are active for a password of `password_len` characters
/// of which `satisfied` rules currently pass.
pub fn active_rule_count(password_len: usize, satisfied: usize, catalog_len: usize) -> usize {
    let mut count = (password_len / CHARACTERS_PER_RULE + BASE_RULES).min(catalog_len);
    if satisfied as f64 > count as f64 * BONUS_THRESHOLD {
        count = (count + BONUS_RULES).min(catalog_len);
    }
    trace!(
        "{} characters, {} satisfied: {} of {} rules active",
        password_len,
        satisfied,
        count,
        catalog_len
    );
    count
}

/// The active prefix of `catalog`.
pub fn active_rules(catalog: &[Rule], password_len: usize, satisfied: usize) -> &[Rule] {
    &catalog[..active_rule_count(password_len, satisfied, catalog.len())]
}
