// src/throttle.rs
// Courtesy pause between requests. Fixed policy, no reaction to the server.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::config::options::PauseRange;

pub trait Throttle {
    fn pause(&self);
}

/// Sleeps a uniformly random duration within `range`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPause {
    range: PauseRange,
}

impl RandomPause {
    pub fn new(range: PauseRange) -> Self {
        Self { range }
    }

    pub fn next_delay(&self) -> Duration {
        rand::thread_rng().gen_range(self.range.min..=self.range.max)
    }
}

impl Throttle for RandomPause {
    fn pause(&self) {
        let d = self.next_delay();
        trace!(delay = ?d, "pause");
        thread::sleep(d);
    }
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Throttle for NoPause {
    fn pause(&self) {}
}
