use super::evaluator::SatisfiedSet;
use crate::password::Password;

/// Game state.
#[derive(Debug, Default, Clone)]
pub struct GameState {
    /// The password as currently typed.
    pub password: Password,
    /// The rules the password currently satisfies.
    pub satisfied: SatisfiedSet,
    /// The easter egg has been revealed. Stays revealed until the game restarts.
    pub easter_egg_shown: bool,
}
