use std::time::Instant;

use crate::config::DEFAULT_TIME_SCALE;

/// Turns monotonically increasing frame timestamps into simulation timesteps.
///
/// The first tick after construction or [`FrameClock::reset`] has no baseline
/// and yields `0.0`.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ms: Option<f64>,
    time_scale: f64,
    epoch: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

impl FrameClock {
    /// `time_scale` is the number of milliseconds per simulated time unit.
    pub fn new(time_scale: f64) -> Self {
        Self {
            last_ms: None,
            time_scale,
            epoch: Instant::now(),
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_ms
    }

    /// Records `now_ms` and returns the scaled time since the previous tick.
    /// A timestamp older than the previous one yields `0.0`.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) / self.time_scale,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt as f32
    }

    /// [`FrameClock::tick`] driven by a monotonic `Instant`.
    pub fn tick_instant(&mut self, now: Instant) -> f32 {
        let elapsed_ms = now.saturating_duration_since(self.epoch).as_secs_f64() * 1000.0;
        self.tick(elapsed_ms)
    }

    /// Forgets the baseline; the next tick yields `0.0`.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1_000_000.0), 0.0);
        assert_eq!(clock.last_timestamp(), Some(1_000_000.0));
    }

    #[test]
    fn delta_is_scaled_by_time_scale() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        assert!((clock.tick(1018.0) - 0.02).abs() < 1e-6);
    }

    #[test]
    fn backwards_time_and_reset_yield_zero() {
        let mut clock = FrameClock::new(1000.0);
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
        assert!((clock.tick(600.0) - 0.2).abs() < 1e-6);
        clock.reset();
        assert_eq!(clock.tick(900.0), 0.0);
    }
}
