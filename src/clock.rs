//! Time sources for stamping observations
//!
//! Accumulators record when observations arrive. They read time through the
//! [`Clock`] trait instead of calling `Utc::now()` directly, so tests can
//! substitute a clock they control.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, TimeDelta, Utc};

/// A source of wall-clock readings
///
/// Implementations must be cheap to query; `now` is called once per
/// accepted observation.
pub trait Clock {
    /// Current wall-clock time
    fn now(&self) -> DateTime<Utc>;
}

/// The ambient system clock
///
/// Zero-sized; every reading comes from [`Utc::now`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
///
/// Handles are shared: cloning a `ManualClock` yields a handle onto the
/// same underlying instant, so a test can keep one handle and give the
/// other to an accumulator, then advance time between updates.
///
/// Not `Send`; this matches the single-threaded contract of the
/// accumulators it exists to test.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, TimeDelta};
/// use seriespod::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::starting_at(DateTime::from_timestamp(1_700_000_000, 0).unwrap());
/// let handle = clock.clone();
///
/// let t0 = handle.now();
/// clock.advance(TimeDelta::seconds(5));
/// assert_eq!(handle.now() - t0, TimeDelta::seconds(5));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move the clock forward (or backward, with a negative delta)
    pub fn advance(&self, step: TimeDelta) {
        self.now.set(self.now.get() + step);
    }

    /// Jump the clock to an absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn manual_clock_is_frozen_until_advanced() {
        let clock = ManualClock::starting_at(epoch());

        assert_eq!(clock.now(), epoch());
        assert_eq!(clock.now(), epoch());

        clock.advance(TimeDelta::milliseconds(250));
        assert_eq!(clock.now(), epoch() + TimeDelta::milliseconds(250));
    }

    #[test]
    fn cloned_handles_share_the_same_instant() {
        let clock = ManualClock::starting_at(epoch());
        let handle = clock.clone();

        clock.advance(TimeDelta::seconds(7));

        assert_eq!(handle.now(), epoch() + TimeDelta::seconds(7));
    }

    #[test]
    fn set_jumps_to_absolute_instant() {
        let clock = ManualClock::starting_at(epoch());
        let later = epoch() + TimeDelta::days(1);

        clock.set(later);

        assert_eq!(clock.now(), later);
    }

    #[test]
    fn system_clock_returns_plausible_time() {
        // Anything after 2020 counts as plausible here
        let reading = SystemClock.now();
        assert!(reading > DateTime::from_timestamp(1_577_836_800, 0).unwrap());
    }
}
