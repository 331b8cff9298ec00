//! Round timer.
//!
//! Counts elapsed play time for one round. The engine starts it on the
//! first pick, stops it when the last pair locks, and resets it on every
//! rebuild.

use serde::{Deserialize, Serialize};

/// Stopwatch advanced once per frame tick while running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundTimer {
    running: bool,
    elapsed: f32,
}

impl RoundTimer {
    /// Create a stopped timer at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. Elapsed time is kept.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting. Elapsed time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the timer.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    /// Advance by `delta_seconds` if running.
    pub fn tick(&mut self, delta_seconds: f32) {
        if !self.running {
            return;
        }
        self.elapsed += delta_seconds;
    }

    /// Is the timer currently counting?
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed seconds so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Format elapsed seconds as `mm:ss.ff` for display.
///
/// Negative inputs render as zero.
///
/// ```
/// use pairup::core::format_elapsed;
///
/// assert_eq!(format_elapsed(83.5), "01:23.50");
/// ```
#[must_use]
pub fn format_elapsed(seconds: f32) -> String {
    let total = seconds.max(0.0);
    let minutes = (total / 60.0).floor() as u32;
    let secs = (total % 60.0).floor() as u32;
    let hundredths = ((total % 1.0) * 100.0).floor() as u32;
    format!("{minutes:02}:{secs:02}.{hundredths:02}")
}
