use log::{debug, warn};
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::JoinHandle,
    time::Duration,
};

use crate::game::data::GLITCH_MESSAGES;

pub const GLITCH_PERIOD: Duration = Duration::from_secs(1);
pub const GLITCH_CHANCE: f64 = 0.01;

/// Every `period`, with probability `chance`, hands a random glitch message to a sink.
/// Runs on its own thread and never touches the game. Stopped when dropped.
pub struct GlitchTimer {
    /// Dropping the sender wakes the thread and tells it to stop.
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl GlitchTimer {
    pub fn start<F>(period: Duration, chance: f64, mut sink: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        let chance = chance.clamp(0.0, 1.0);
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || {
            let mut rng = thread_rng();
            while let Err(RecvTimeoutError::Timeout) = stopped.recv_timeout(period) {
                if rng.gen_bool(chance) {
                    if let Some(message) = GLITCH_MESSAGES.choose(&mut rng) {
                        debug!("Glitch: {}", message);
                        sink(message);
                    }
                }
            }
        });
        GlitchTimer {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Stop the timer and wait for its thread to finish.
    pub fn stop(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Glitch timer thread panicked");
            }
        }
    }
}

impl Drop for GlitchTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
