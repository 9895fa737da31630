use serde::Serialize;

use super::{data::IMPOSSIBILITY_LEVELS, Rule};

/// How a single active rule is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleStatus {
    Satisfied,
    Violated,
    /// Some of the active rules contradict each other.
    Impossible,
    /// Nothing has been typed yet.
    Pending,
}

impl RuleStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            RuleStatus::Satisfied => "✅",
            RuleStatus::Violated => "❌",
            RuleStatus::Impossible => "💀",
            RuleStatus::Pending => "⏳",
        }
    }
}

/// Narration shown beneath the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum Narration {
    #[strum(to_string = "Start typing to see the rules appear...")]
    Empty,
    #[strum(to_string = "😅 This is harder than it looks, isn't it?")]
    Struggling,
    #[strum(to_string = "🤔 This is getting tricky...")]
    Tricky,
    #[strum(to_string = "⚡ Good progress! Keep going!")]
    Progressing,
    #[strum(to_string = "🔥 You're doing great! Just a few more rules to go...")]
    Close,
    #[strum(to_string = "🎉 All current rules satisfied! But wait... there are more rules coming...")]
    AllSatisfied,
    #[strum(
        to_string = "💀 Wait... some of these rules contradict each other! This might be impossible..."
    )]
    Contradiction,
    #[strum(to_string = "🎪 Surprise! Here's another rule just for you!")]
    Surprise,
    #[strum(to_string = "🏆 You deleted your password. It is finally secure. You win!")]
    Victory,
}

impl Narration {
    /// Pick the narration for the given progress. A contradiction trumps everything else.
    pub fn for_progress(
        password_empty: bool,
        satisfied: usize,
        total: usize,
        contradiction: bool,
    ) -> Self {
        if contradiction {
            return Narration::Contradiction;
        }
        if password_empty {
            return Narration::Empty;
        }
        if total > 0 && satisfied == total {
            return Narration::AllSatisfied;
        }
        match progress(satisfied, total) {
            p if p >= 80.0 => Narration::Close,
            p if p >= 50.0 => Narration::Progressing,
            p if p >= 20.0 => Narration::Tricky,
            _ => Narration::Struggling,
        }
    }
}

/// A rule as displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleView {
    pub id: Rule,
    pub text: &'static str,
    pub status: RuleStatus,
}

/// Everything the player sees, derived from the game without side effects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    /// Active rules in catalog order.
    pub rules: Vec<RuleView>,
    pub satisfied: usize,
    pub total: usize,
    /// Name of the highest difficulty level among the active rules.
    pub difficulty: &'static str,
    /// Percentage of active rules satisfied, 0 to 100.
    pub progress: f64,
    pub submit_enabled: bool,
    pub narration: Narration,
    pub easter_egg: bool,
}

/// Percentage of `total` that `satisfied` represents. Zero when there is nothing to satisfy.
pub fn progress(satisfied: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        satisfied as f64 / total as f64 * 100.0
    }
}

/// Difficulty name for a set of active rules.
pub fn difficulty(active: &[Rule]) -> &'static str {
    let max_level = active.iter().map(Rule::level).max().unwrap_or_default();
    IMPOSSIBILITY_LEVELS[max_level.min(IMPOSSIBILITY_LEVELS.len() - 1)]
}
