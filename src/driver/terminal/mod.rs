use log::{debug, info};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

use super::{Driver, DriverError};
use crate::{
    config::Config,
    game::{easter_egg::KonamiDetector, Game, GameView, Narration, SubmitOutcome},
};

pub mod glitch;
mod render;

const WELCOME: &str = "🔐 Choose a password. Type :help for commands.";
const HELP: &str = "\
Each line you enter replaces your password. An empty line deletes it.
Commands:
  :submit        submit the current password
  :restart       start a new game
  :keys <codes>  press keys, e.g. :keys ArrowUp ArrowDown KeyB
  :help          show this message
  :quit          leave the game
Start a line with :: to use a password that begins with ':'.";
const FLIP: &str = "🙃 ...and the whole page turns upside down for a moment.";

/// A line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Password(String),
    Submit,
    Restart,
    Keys(Vec<String>),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(escaped) = line.strip_prefix("::") {
            return Command::Password(format!(":{}", escaped));
        }
        let Some(command) = line.strip_prefix(':') else {
            return Command::Password(line.to_owned());
        };

        let mut words = command.split_whitespace();
        match words.next() {
            Some("submit" | "s") => Command::Submit,
            Some("restart" | "r") => Command::Restart,
            Some("keys" | "k") => Command::Keys(words.map(str::to_owned).collect()),
            Some("help" | "h") => Command::Help,
            Some("quit" | "q") => Command::Quit,
            _ => Command::Unknown(line.to_owned()),
        }
    }
}

/// A driver that plays the game over a line-based terminal.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
    config: Config,
    /// The game in progress. Replaced wholesale on restart.
    game: Game,
    rng: StdRng,
    konami: KonamiDetector,
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Result<Self, DriverError> {
        Ok(TerminalDriver {
            input,
            output,
            game: config.new_game()?,
            rng: config.rng(),
            konami: KonamiDetector::default(),
            config,
        })
    }

    fn render(&mut self) -> Result<(), DriverError> {
        let view = self.game.view();
        self.render_view(&view)
    }

    fn render_view(&mut self, view: &GameView) -> Result<(), DriverError> {
        if self.config.json {
            serde_json::to_writer(&mut self.output, view)?;
            writeln!(self.output)?;
        } else {
            write!(self.output, "{}", render::text(view))?;
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<(), DriverError> {
        match self.game.submit(&mut self.rng) {
            SubmitOutcome::NotReady => {
                writeln!(self.output, "Not every rule is satisfied yet.")?;
            }
            SubmitOutcome::Victory => {
                let mut view = self.game.view();
                view.narration = Narration::Victory;
                self.render_view(&view)?;
                writeln!(self.output, "Type :restart to play again.")?;
            }
            SubmitOutcome::Surprise(rule) => {
                debug!("Surprise rule {}", rule);
                let mut view = self.game.view();
                view.narration = Narration::Surprise;
                self.render_view(&view)?;
            }
        }
        Ok(())
    }

    fn restart(&mut self) -> Result<(), DriverError> {
        info!("Restarting game");
        self.game = self.config.new_game()?;
        self.render()
    }

    fn press_keys(&mut self, keys: &[String]) -> Result<(), DriverError> {
        for key in keys {
            if self.konami.push(key) {
                info!("Konami code entered");
                writeln!(self.output, "{}", FLIP)?;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Driver for TerminalDriver<R, W> {
    fn play(&mut self) -> Result<(), DriverError> {
        writeln!(self.output, "{}", WELCOME)?;
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input closed");
                return Ok(());
            }

            match Command::parse(&line) {
                Command::Password(password) => {
                    self.game.set_password(password);
                    self.render()?;
                }
                Command::Submit => self.submit()?,
                Command::Restart => self.restart()?,
                Command::Keys(keys) => self.press_keys(&keys)?,
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Quit => return Ok(()),
                Command::Unknown(command) => {
                    writeln!(self.output, "Unknown command {:?}, try :help", command)?;
                }
            }
        }
    }
}
