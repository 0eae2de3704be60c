//! Fixed-Timestep Accumulator
//!
//! Converts irregular wall-clock elapsed times into a whole number of due
//! logic ticks, carrying the fraction forward. However the host scheduler
//! slices time, the tick count tracks `floor(total_elapsed / interval)`
//! and the physics step size never varies.

use std::time::Duration;

/// Fractional tick accumulator.
#[derive(Clone, Copy, Debug)]
pub struct TickClock {
    interval: f64,
    carry: f64,
}

impl TickClock {
    /// Create a clock for a tick rate in Hz.
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval: 1.0 / f64::from(tick_rate),
            carry: 0.0,
        }
    }

    /// Account for elapsed wall-clock time; returns the number of logic
    /// ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        self.carry += elapsed.as_secs_f64() / self.interval;
        let due = self.carry as u64;
        self.carry -= due as f64;
        due
    }

    /// Tick interval in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_exact_multiples() {
        let mut clock = TickClock::new(60);
        assert_eq!(clock.advance(Duration::from_secs(1)), 60);
        assert_eq!(clock.advance(Duration::from_millis(0)), 0);
    }

    #[test]
    fn test_fraction_carries_forward() {
        let mut clock = TickClock::new(60);
        // 2.5 intervals, then another 0.5: the carry completes a tick.
        let interval = Duration::from_secs_f64(clock.interval());
        assert_eq!(clock.advance(interval.mul_f64(2.5)), 2);
        assert_eq!(clock.advance(interval.mul_f64(0.5)), 1);
    }

    #[test]
    fn test_sub_interval_slices_accumulate() {
        let mut clock = TickClock::new(60);
        let slice = Duration::from_secs_f64(clock.interval() / 4.0);

        let mut total = 0u64;
        for _ in 0..400 {
            total += clock.advance(slice);
        }
        // 400 quarter-intervals = 100 ticks.
        assert_eq!(total, 100);
    }

    #[test]
    fn test_random_partitions_match_floor() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut clock = TickClock::new(60);
            let mut total_secs = 0.0f64;
            let mut ticks = 0u64;
            for _ in 0..200 {
                let slice = rng.gen_range(0.0..0.05);
                total_secs += slice;
                ticks += clock.advance(Duration::from_secs_f64(slice));
            }
            let expected = (total_secs / clock.interval()).floor() as u64;
            assert!(
                ticks.abs_diff(expected) <= 1,
                "{ticks} ticks for {total_secs}s, expected ~{expected}",
            );
        }
    }

    proptest! {
        #[test]
        fn prop_partitioning_is_tick_preserving(slices_ms in prop::collection::vec(0u32..100, 1..200)) {
            let mut clock = TickClock::new(60);
            let mut ticks = 0u64;
            let mut total = Duration::ZERO;
            for ms in &slices_ms {
                let slice = Duration::from_millis(u64::from(*ms));
                total += slice;
                ticks += clock.advance(slice);
            }

            let expected = (total.as_secs_f64() / clock.interval()).floor() as u64;
            prop_assert!(ticks.abs_diff(expected) <= 1);
        }
    }
}
