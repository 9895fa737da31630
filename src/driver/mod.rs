use thiserror::Error;

pub mod terminal;

/// Defines a front end that a player can use to play the game.
pub trait Driver {
    /// Play until the player quits or input runs out.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
    #[error("unknown rule")]
    UnknownRule(#[from] serde_plain::Error),
    #[error("failed to render game as json")]
    Json(#[from] serde_json::Error),
    #[error("no rules to play with")]
    EmptyCatalog,
}
