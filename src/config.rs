use chrono::prelude::*;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    driver::DriverError,
    game::{Clock, FixedClock, Game, Rule, SystemClock},
};

/// Settings for a session of the game, taken from the command line.
#[derive(Debug, Default, Parser)]
#[command(name = "impossible-password")]
#[command(about = "The password game where the rules never stop coming")]
pub struct Config {
    /// Seed for choosing surprise rules, for a repeatable game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretend it is always this time (RFC 3339, e.g. 2023-07-04T12:00:00+00:00)
    #[arg(long, value_parser = parse_datetime)]
    pub at: Option<DateTime<Local>>,

    /// Play with these rule ids, in this order, instead of the standard rules
    #[arg(long, value_delimiter = ',')]
    pub rules: Option<Vec<String>>,

    /// Print the game state as JSON after every change
    #[arg(long)]
    pub json: bool,

    /// Turn off the random glitch messages
    #[arg(long)]
    pub no_glitches: bool,
}

impl Config {
    /// The catalog a new game starts with. Repeated ids are only kept once.
    pub fn catalog(&self) -> Result<Vec<Rule>, DriverError> {
        let Some(ids) = &self.rules else {
            return Ok(Rule::standard_catalog());
        };

        let mut rules = Vec::new();
        for id in ids.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            let rule = serde_plain::from_str::<Rule>(id)?;
            if !rules.contains(&rule) {
                rules.push(rule);
            }
        }
        if rules.is_empty() {
            return Err(DriverError::EmptyCatalog);
        }
        Ok(rules)
    }

    /// The clock rules are checked against.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.at {
            Some(at) => Box::new(FixedClock(at)),
            None => Box::new(SystemClock),
        }
    }

    /// Random source for surprise rules.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// A fresh game.
    pub fn new_game(&self) -> Result<Game, DriverError> {
        Ok(Game::with_rules(self.catalog()?, self.clock()))
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Local>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Local))
}
