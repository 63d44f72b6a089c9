use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

use crate::configuration::PacingSettings;

/// Randomized minimum spacing between one worker's successive requests.
///
/// The first request goes out immediately; every later one waits until a
/// random delay in `[min, max]` has passed since the previous scrape finished
/// (retries included), as marked by [`PacingGate::mark_done`].
pub struct PacingGate {
    min: Duration,
    max: Duration,
    last_done: Option<Instant>,
}

impl PacingGate {
    pub fn new(min: Duration, max: Duration) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        PacingGate {
            min,
            max,
            last_done: None,
        }
    }

    pub fn from_settings(settings: &PacingSettings) -> Self {
        PacingGate::new(
            Duration::from_millis(settings.min_delay_ms),
            Duration::from_millis(settings.max_delay_ms),
        )
    }

    pub fn next_spacing(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        match min == max {
            true => self.min,
            false => Duration::from_millis(rand::thread_rng().gen_range(min..=max)),
        }
    }

    pub async fn wait_turn(&self) {
        if let Some(last) = self.last_done {
            let spacing = self.next_spacing();
            log::debug!("Pacing next request by {:?}", spacing);
            tokio::time::sleep_until(last + spacing).await;
        }
    }

    pub fn mark_done(&mut self) {
        self.last_done = Some(Instant::now());
    }
}
