use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform fractions in `[0, 1)`.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_fraction(&mut self) -> f64 {
        (**self).next_fraction()
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream: the same seed always yields the same fractions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_fraction(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of fractions, cycling when exhausted.
/// An empty list always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedFractions {
    values: Vec<f64>,
    next: usize,
}

impl FixedFractions {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedFractions {
    fn next_fraction(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_source_stays_in_unit_interval() {
        let mut source = RngSource::thread();
        for _ in 0..1000 {
            let f = source.next_fraction();
            assert!((0.0..1.0).contains(&f), "out of range: {f}");
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_fraction(), b.next_fraction());
        }
    }

    #[test]
    fn test_fixed_fractions_cycle() {
        let mut source = FixedFractions::new([0.25, 0.5]);
        assert_eq!(source.next_fraction(), 0.25);
        assert_eq!(source.next_fraction(), 0.5);
        assert_eq!(source.next_fraction(), 0.25);
    }

    #[test]
    fn test_empty_fixed_fractions_yield_zero() {
        let mut source = FixedFractions::default();
        assert_eq!(source.next_fraction(), 0.0);
    }
}
