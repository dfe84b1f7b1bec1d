//! Sources of numbers for secret selection, hint distances and guesses.

use rand::Rng;

/// Draws integers from an inclusive range.
pub trait NumberSource {
    /// Pick a value from `[low, high]`. Callers guarantee `low <= high`.
    fn pick(&mut self, low: i32, high: i32) -> i32;

    /// Pick a distance from `[low, high]`. Callers guarantee `low <= high`.
    fn pick_distance(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng + ?Sized> NumberSource for R {
    fn pick(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }

    fn pick_distance(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// Deterministic source that always answers with the middle of the range,
/// turning the guesser into a plain bisection.
#[derive(Debug, Default, Clone, Copy)]
pub struct Midpoint;

impl NumberSource for Midpoint {
    fn pick(&mut self, low: i32, high: i32) -> i32 {
        (low as i64 + (high as i64 - low as i64) / 2) as i32
    }

    fn pick_distance(&mut self, low: u32, high: u32) -> u32 {
        low + (high - low) / 2
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn midpoint_rounds_down() {
        assert_eq!(Midpoint.pick(0, 10), 5);
        assert_eq!(Midpoint.pick(0, 3), 1);
        assert_eq!(Midpoint.pick(-5, -5), -5);
        assert_eq!(Midpoint.pick(i32::MIN, i32::MAX), -1);
    }

    #[test]
    fn rng_picks_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.pick(-3, 3);
            assert!((-3..=3).contains(&v));
            let d = rng.pick_distance(2, 4);
            assert!((2..=4).contains(&d));
        }
    }
}
