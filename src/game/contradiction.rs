use super::{rule::TERMINAL_RULE, Rule};

/// Pairs of rules that can never be satisfied at the same time.
pub const CONTRADICTIONS: [(Rule, Rule); 2] = [
    (Rule::NoVowels, Rule::AllVowels),
    (Rule::Exactly16, Rule::Exactly32),
];

/// Do any of the active rules contradict each other? The terminal rule contradicts
/// every other rule, since it demands an empty password.
pub fn has_contradiction(active: &[Rule]) -> bool {
    CONTRADICTIONS
        .iter()
        .any(|(a, b)| active.contains(a) && active.contains(b))
        || (active.contains(&TERMINAL_RULE) && active.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::has_contradiction;
    use crate::game::Rule;

    #[test]
    fn vowels() {
        assert!(has_contradiction(&[Rule::NoVowels, Rule::AllVowels]));
        assert!(has_contradiction(&[
            Rule::Length,
            Rule::AllVowels,
            Rule::Palindrome,
            Rule::NoVowels
        ]));
        assert!(!has_contradiction(&[Rule::Length, Rule::NoVowels]));
    }

    #[test]
    fn lengths() {
        assert!(has_contradiction(&[Rule::Exactly16, Rule::Exactly32]));
        assert!(!has_contradiction(&[Rule::Exactly16, Rule::Length]));
    }

    #[test]
    fn terminal_rule() {
        assert!(!has_contradiction(&[Rule::DeletePassword]));
        assert!(has_contradiction(&[Rule::Length, Rule::DeletePassword]));
    }

    #[test]
    fn none() {
        assert!(!has_contradiction(&[]));
        assert!(!has_contradiction(&Rule::standard_catalog()[..17]));
        assert!(has_contradiction(&Rule::standard_catalog()[..19]));
    }
}
