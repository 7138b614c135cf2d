use std::time::Duration;

use tracing::{debug, warn};

/// Courtesy delay between consecutive page visits, drawn uniformly from
/// `[min_secs, max_secs]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacer {
    min_secs: f64,
    max_secs: f64,
}

/// Longest pause a single bound may ask for.
pub const MAX_DELAY_SECS: f64 = 300.0;

const DEFAULT_MIN_SECS: f64 = 1.0;
const DEFAULT_MAX_SECS: f64 = 3.0;

impl Pacer {
    /// Bounds are clamped to `[0, MAX_DELAY_SECS]` and swapped if given in
    /// the wrong order. A NaN or infinite bound falls back to its default.
    pub fn new(min_secs: f64, max_secs: f64) -> Self {
        let (a, b) = (bound(min_secs, DEFAULT_MIN_SECS), bound(max_secs, DEFAULT_MAX_SECS));
        Self {
            min_secs: a.min(b),
            max_secs: a.max(b),
        }
    }

    /// Never sleeps. Used by tests and `--no-delay`.
    pub fn none() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn next_delay(&self) -> Duration {
        let span = self.max_secs - self.min_secs;
        let secs = if span > 0.0 {
            self.min_secs + span * unit_random()
        } else {
            self.min_secs
        };
        Duration::from_secs_f64(secs)
    }

    pub async fn pause(&self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        debug!(delay_ms = delay.as_millis() as u64, "pacing before next source");
        tokio::time::sleep(delay).await;
    }
}

fn bound(secs: f64, default: f64) -> f64 {
    if secs.is_finite() {
        secs.clamp(0.0, MAX_DELAY_SECS)
    } else {
        warn!(secs, default, "non-finite delay bound, using default");
        default
    }
}

/// Uniform sample in `[0, 1)`. Falls back to the midpoint if the OS RNG is
/// unavailable.
fn unit_random() -> f64 {
    let mut buf = [0u8; 8];
    if let Err(e) = getrandom::fill(&mut buf) {
        warn!(error = %e, "random source unavailable, using fixed delay");
        return 0.5;
    }
    // 53 high bits -> exact f64 mantissa
    (u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64
}
