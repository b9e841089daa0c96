//! Core traits for streaming accumulators
//!
//! Every accumulator implements the base [`Accumulator`] trait; summary
//! accumulators additionally implement [`SummaryStats`] for the derived
//! descriptive statistics.
//!
//! There is deliberately no error type here: invalid observations are
//! rejected silently and every other operation is total, so nothing in
//! this crate fails outwardly.

use core::fmt::Debug;

/// Core trait for all streaming accumulators
///
/// An accumulator consumes a stream of observations one at a time and
/// answers questions about the stream so far while holding O(1) state.
pub trait Accumulator: Clone + Debug {
    /// The type of observation this accumulator processes
    type Item: ?Sized;

    /// Feed one observation to the accumulator
    ///
    /// Observations the accumulator considers invalid are dropped
    /// silently; `update` never fails.
    fn update(&mut self, item: &Self::Item);

    /// Return the accumulator to its empty state
    fn reset(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of observations accepted since the last reset
    fn count(&self) -> u64;

    /// Check if the accumulator has accepted any observations
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Descriptive-statistics accumulators
///
/// Accessors return `None` while the accumulator is empty; once at least
/// one observation has been accepted they all return `Some`.
pub trait SummaryStats: Accumulator {
    /// Running mean of the accepted observations
    fn mean(&self) -> Option<f64>;

    /// Smallest accepted observation
    fn min(&self) -> Option<f64>;

    /// Largest accepted observation
    fn max(&self) -> Option<f64>;

    /// Spread between the extrema (max - min)
    fn range(&self) -> Option<f64> {
        match (self.max(), self.min()) {
            (Some(max), Some(min)) => Some(max - min),
            _ => None,
        }
    }

    /// Midpoint of the extrema ((max + min) / 2)
    fn midrange(&self) -> Option<f64> {
        match (self.max(), self.min()) {
            (Some(max), Some(min)) => Some((max + min) / 2.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal accumulator that only tracks extrema, to exercise the
    /// provided `SummaryStats` methods.
    #[derive(Clone, Debug, Default)]
    struct Extrema {
        count: u64,
        min: f64,
        max: f64,
    }

    impl Accumulator for Extrema {
        type Item = f64;

        fn update(&mut self, item: &f64) {
            if item.is_nan() {
                return;
            }
            if self.count == 0 {
                self.min = *item;
                self.max = *item;
            } else {
                self.min = self.min.min(*item);
                self.max = self.max.max(*item);
            }
            self.count += 1;
        }

        fn reset(&mut self) {
            *self = Self::default();
        }

        fn size_bytes(&self) -> usize {
            core::mem::size_of::<Self>()
        }

        fn count(&self) -> u64 {
            self.count
        }
    }

    impl SummaryStats for Extrema {
        fn mean(&self) -> Option<f64> {
            // Not tracked by this stub; the midpoint stands in
            self.midrange()
        }

        fn min(&self) -> Option<f64> {
            (self.count > 0).then_some(self.min)
        }

        fn max(&self) -> Option<f64> {
            (self.count > 0).then_some(self.max)
        }
    }

    #[test]
    fn provided_range_and_midrange_derive_from_extrema() {
        let mut acc = Extrema::default();
        for v in [3.0, 9.0, 5.0] {
            acc.update(&v);
        }

        assert_eq!(acc.range(), Some(6.0));
        assert_eq!(acc.midrange(), Some(6.0));
    }

    #[test]
    fn provided_methods_are_none_while_empty() {
        let acc = Extrema::default();

        assert!(acc.is_empty());
        assert_eq!(acc.range(), None);
        assert_eq!(acc.midrange(), None);
    }
}
