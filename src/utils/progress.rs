//! Progress reporting with rate-limited updates
//!
//! Progress is purely observational: the trackers never influence the
//! pipeline's behavior. Each phase owns its own tracker, so the rate-limit
//! state starts fresh when the phase starts.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Minimum wall-clock time between visible progress updates
const UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Wall-clock throttle for observational output
pub struct RateLimiter {
    interval: Duration,
    last_update: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter that permits one update per interval
    pub fn new(interval: Duration) -> Self {
        RateLimiter {
            interval,
            last_update: None,
        }
    }

    /// True when enough time has passed since the last permitted update
    ///
    /// The first call is always permitted.
    pub fn ready(&mut self) -> bool {
        let now = Instant::now();
        match self.last_update {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_update = Some(now);
                true
            }
        }
    }
}

/// Rate-limited progress display for one pipeline phase
pub struct ProgressTracker {
    bar: ProgressBar,
    limiter: RateLimiter,
}

impl ProgressTracker {
    /// Progress bar for a phase with a known number of steps
    pub fn bar(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"));
        bar.set_message(description.to_string());

        ProgressTracker {
            bar,
            limiter: RateLimiter::new(UPDATE_INTERVAL),
        }
    }

    /// Spinner for a phase whose total is not known up front
    pub fn spinner(description: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} {msg}")
                .unwrap(),
        );
        bar.set_message(description.to_string());

        ProgressTracker {
            bar,
            limiter: RateLimiter::new(UPDATE_INTERVAL),
        }
    }

    /// Record progress, redrawing at most once per update interval
    pub fn update(&mut self, position: u64) {
        if self.limiter.ready() {
            self.bar.set_position(position);
        }
    }

    /// Show the final position and close the display
    pub fn finish(&mut self, position: u64) {
        self.bar.set_position(position);
        self.bar.finish_with_message("Completed");
    }
}
