use std::time::{Duration, Instant};

/// Timing and counters gathered during the most recent world step.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfile {
    pub integration_time: Duration,
    pub collision_time: Duration,
    pub total_time: Duration,

    pub body_count: usize,
    /// Number of overlapping pairs whose velocities were swapped.
    pub collision_count: usize,
}

impl StepProfile {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::debug!(
            "step: {} bodies, {} collisions, {:.3} ms (integrate {:.1}%, collide {:.1}%)",
            self.body_count,
            self.collision_count,
            self.total_time.as_secs_f32() * 1000.0,
            (self.integration_time.as_micros() as f32 / total_us) * 100.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

/// Accumulates the lifetime of the guard into `output`.
pub struct ProfileTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ProfileTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ProfileTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
