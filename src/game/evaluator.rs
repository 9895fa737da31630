use std::collections::BTreeSet;

use log::debug;

use super::{clock::Clock, Rule};
use crate::password::Password;

/// The rules satisfied by the current password.
pub type SatisfiedSet = BTreeSet<Rule>;

/// Check every rule in `rules` against the password, from scratch.
pub fn evaluate(rules: &[Rule], password: &Password, clock: &dyn Clock) -> SatisfiedSet {
    let satisfied = rules
        .iter()
        .filter(|rule| rule.validate_at(password, clock))
        .copied()
        .collect::<SatisfiedSet>();
    debug!(
        "Password: {:?}, satisfied {} of {} rules: {:?}",
        password.as_str(),
        satisfied.len(),
        rules.len(),
        satisfied
    );
    satisfied
}
