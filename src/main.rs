use anyhow::Context;
use clap::Parser;
use driver::{
    terminal::{
        glitch::{GlitchTimer, GLITCH_CHANCE, GLITCH_PERIOD},
        TerminalDriver,
    },
    Driver,
};
use log::info;

mod config;
mod driver;
mod game;
mod password;

fn main() -> anyhow::Result<()> {
    env_logger::try_init().unwrap_or(());

    let config = config::Config::parse();
    let _glitches = if config.no_glitches {
        None
    } else {
        Some(GlitchTimer::start(GLITCH_PERIOD, GLITCH_CHANCE, |message| {
            eprintln!("\n⚠️  {}", message);
        }))
    };

    let stdin = std::io::stdin();
    let mut driver = TerminalDriver::new(config, stdin.lock(), std::io::stdout())
        .context("failed to set up game")?;
    driver.play().context("game ended unexpectedly")?;
    info!("Goodbye");

    Ok(())
}
