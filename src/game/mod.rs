use log::{debug, info, warn};
use rand::{seq::SliceRandom, Rng};

pub use clock::{Clock, FixedClock, SystemClock};
pub use rule::Rule;
pub use state::GameState;
pub use view::{GameView, Narration, RuleStatus, RuleView};

use contradiction::has_contradiction;
use easter_egg::EASTER_EGG_THRESHOLD;
use rule::{SURPRISE_RULES, TERMINAL_RULE};
use crate::password::Password;

pub mod activation;
pub mod clock;
pub mod contradiction;
pub mod data;
pub mod easter_egg;
pub mod evaluator;
pub mod helpers;
pub mod rule;
mod state;
#[cfg(test)]
mod tests;
pub mod view;

/// What happened when the player pressed submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some active rule is still violated, nothing happens.
    NotReady,
    /// The password was deleted with every rule satisfied.
    Victory,
    /// Everything was satisfied, so here is another rule.
    Surprise(Rule),
}

/// An instance of the password game.
#[derive(Debug)]
pub struct Game {
    /// Rules that define this instance of the game, in unlock order. Only ever grows.
    pub rules: Vec<Rule>,
    /// Game state.
    pub state: GameState,
    /// Time source for the rules that care about it.
    clock: Box<dyn Clock>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Start a new game with the standard rules and the system clock.
    pub fn new() -> Self {
        Game::with_rules(Rule::standard_catalog(), Box::new(SystemClock))
    }

    /// Start a new game with the given catalog and clock.
    pub fn with_rules(rules: Vec<Rule>, clock: Box<dyn Clock>) -> Self {
        let mut game = Game {
            rules,
            state: GameState::default(),
            clock,
        };
        game.evaluate();
        game
    }

    /// Replace the password and re-check every rule.
    pub fn set_password(&mut self, password: impl Into<Password>) {
        self.state.password = password.into();
        self.evaluate();
        if self.state.password.len() > EASTER_EGG_THRESHOLD && !self.state.easter_egg_shown {
            info!("Easter egg revealed");
            self.state.easter_egg_shown = true;
        }
    }

    /// Recompute the satisfied set from scratch. Only the window unlocked by the password's
    /// length is checked, so any bonus rules start out unsatisfied.
    fn evaluate(&mut self) {
        let window = activation::active_rules(&self.rules, self.state.password.len(), 0);
        self.state.satisfied = evaluator::evaluate(window, &self.state.password, &*self.clock);
    }

    /// The rules currently in play.
    pub fn active_rules(&self) -> &[Rule] {
        activation::active_rules(
            &self.rules,
            self.state.password.len(),
            self.state.satisfied.len(),
        )
    }

    /// Do any of the active rules contradict each other?
    pub fn has_contradiction(&self) -> bool {
        has_contradiction(self.active_rules())
    }

    /// Is every active rule satisfied?
    pub fn all_satisfied(&self) -> bool {
        let active = self.active_rules();
        !active.is_empty() && self.state.satisfied.len() == active.len()
    }

    /// Status of one active rule.
    fn rule_status(&self, rule: &Rule, contradiction: bool) -> RuleStatus {
        if self.state.satisfied.contains(rule) {
            RuleStatus::Satisfied
        } else if contradiction {
            RuleStatus::Impossible
        } else if self.state.password.is_empty() {
            RuleStatus::Pending
        } else {
            RuleStatus::Violated
        }
    }

    /// Everything the player should see right now.
    pub fn view(&self) -> GameView {
        let active = self.active_rules();
        let contradiction = self.has_contradiction();
        let satisfied = self.state.satisfied.len();

        GameView {
            rules: active
                .iter()
                .map(|rule| RuleView {
                    id: *rule,
                    text: rule.text(),
                    status: self.rule_status(rule, contradiction),
                })
                .collect(),
            satisfied,
            total: active.len(),
            difficulty: view::difficulty(active),
            progress: view::progress(satisfied, active.len()),
            submit_enabled: self.all_satisfied(),
            narration: Narration::for_progress(
                self.state.password.is_empty(),
                satisfied,
                active.len(),
                contradiction,
            ),
            easter_egg: self.state.easter_egg_shown,
        }
    }

    /// Submit the current password. Winning the current window only earns another rule,
    /// unless the window contains the terminal rule.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SubmitOutcome {
        if !self.all_satisfied() {
            debug!("Submitted with violated rules");
            return SubmitOutcome::NotReady;
        }
        if self.active_rules().contains(&TERMINAL_RULE) {
            info!("Game complete!");
            return SubmitOutcome::Victory;
        }

        // Draw only from surprise rules not already in play, so ids stay unique
        let candidates = SURPRISE_RULES
            .iter()
            .filter(|r| !self.rules.contains(*r))
            .copied()
            .collect::<Vec<_>>();
        let Some(rule) = candidates.choose(rng).copied() else {
            // Only possible if the π rule were ever satisfied
            warn!("Every surprise rule is already in play");
            return SubmitOutcome::NotReady;
        };
        info!("Surprise! Adding rule {:?}", rule);
        self.rules.push(rule);
        self.evaluate();
        SubmitOutcome::Surprise(rule)
    }
}
