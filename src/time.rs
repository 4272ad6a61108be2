//! Frame clock for hosts driving [`crate::HaloOrb::update`].
//!
//! The engine itself is pure with respect to time: every component takes an
//! explicit `dt`. [`Clock`] is the host-side helper that produces that `dt`
//! from wall-clock time, with an optional fixed delta for deterministic
//! runs.
//!
//! # Example
//!
//! ```no_run
//! use orbfx::time::Clock;
//!
//! let mut clock = Clock::new();
//! loop {
//!     let (elapsed, dt) = clock.update();
//!     // halo.update(dt);
//!     if elapsed > 10.0 {
//!         break;
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

/// Wall-clock frame timing with optional fixed stepping.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    paused: bool,
    pause_elapsed: Duration,
    fixed_delta: Option<f32>,
    time_scale: f32,
}

impl Clock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            pause_elapsed: Duration::ZERO,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Create a clock that always reports `delta` regardless of wall time.
    ///
    /// The standard way to drive a deterministic run or a test.
    pub fn fixed(delta: f32) -> Self {
        let mut clock = Self::new();
        clock.fixed_delta = Some(delta);
        clock
    }

    /// Advance the clock. Call once per frame.
    ///
    /// Returns `(elapsed, delta)` in seconds.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed_secs, 0.0);
        }

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta) * self.time_scale;
        self.last_frame = now;

        match self.fixed_delta {
            // Fixed stepping accumulates deltas so elapsed time is exact.
            Some(_) => self.elapsed_secs += self.delta_secs,
            None => {
                let raw = now.duration_since(self.start) - self.pause_elapsed;
                self.elapsed_secs = raw.as_secs_f32() * self.time_scale;
            }
        }

        self.frame_count += 1;
        (self.elapsed_secs, self.delta_secs)
    }

    /// Total elapsed seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds since the previous frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames advanced since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause: `update` reports a zero delta until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after a pause without counting the paused span.
    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_frame);
            self.last_frame = now;
            self.paused = false;
        }
    }

    /// Use a fixed delta (`Some`) or real frame timing (`None`).
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Scale reported time: `0.5` = slow motion, `2.0` = double speed.
    /// Negative values clamp to zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_clock_is_zeroed() {
        let clock = Clock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_update_advances() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(5));
        let (elapsed, delta) = clock.update();
        assert!(elapsed > 0.0);
        assert!(delta > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_fixed_delta_is_deterministic() {
        let mut clock = Clock::fixed(0.016);
        for _ in 0..60 {
            let (_, delta) = clock.update();
            assert_eq!(delta, 0.016);
        }
        assert!((clock.elapsed() - 0.96).abs() < 1e-5);
    }

    #[test]
    fn test_pause_reports_zero_delta() {
        let mut clock = Clock::fixed(0.016);
        clock.update();
        clock.pause();
        let (elapsed, delta) = clock.update();
        assert_eq!(delta, 0.0);
        assert!((elapsed - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_time_scale_clamps_negative() {
        let mut clock = Clock::fixed(0.016);
        clock.set_time_scale(-2.0);
        let (_, delta) = clock.update();
        assert_eq!(delta, 0.0);
    }
}
