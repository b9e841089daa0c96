//! Labeled running summary of a measurement series
//!
//! Tracks count, running mean, extrema, first/most-recent value, and the
//! wall-clock instants behind them, in a single pass with O(1) memory.

use core::fmt;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::traits::{Accumulator, SummaryStats};

/// Label applied when construction receives a blank or whitespace-only one.
pub const UNLABELED: &str = "<not specified>";

// The sample counter never advances past this; observations arriving at the
// ceiling are dropped.
const COUNT_CEILING: u64 = u64::MAX - 1;

/// Running summary of one labeled measurement series
///
/// Feed observations one at a time with [`add`](SeriesPod::add) and read
/// the summary at any point. Individual observations are not retained;
/// state is a fixed handful of scalars and timestamps regardless of how
/// long the series runs.
///
/// Observations that are NaN are dropped silently, as are observations
/// arriving once the sample counter has saturated. `add` never fails and
/// never allocates.
///
/// # Example
///
/// ```
/// use seriespod::SeriesPod;
///
/// let mut pod = SeriesPod::new("temperature");
///
/// for value in [5.0, 7.0, 3.0] {
///     pod.add(value);
/// }
///
/// assert_eq!(pod.len(), 3);
/// assert_eq!(pod.first(), Some(5.0));
/// assert_eq!(pod.last(), Some(3.0));
/// assert_eq!(pod.mean(), Some(5.0));
/// assert_eq!(pod.max(), Some(7.0));
/// assert_eq!(pod.min(), Some(3.0));
/// assert_eq!(pod.range(), Some(4.0));
///
/// assert_eq!(pod.to_string(), "temperature : 5 ± 2");
/// ```
///
/// # Deterministic time
///
/// Observation timestamps come from an injected [`Clock`]; tests hand in
/// a [`ManualClock`](crate::clock::ManualClock) and advance it explicitly:
///
/// ```
/// use chrono::{DateTime, TimeDelta};
/// use seriespod::SeriesPod;
/// use seriespod::clock::ManualClock;
///
/// let clock = ManualClock::starting_at(DateTime::from_timestamp(0, 0).unwrap());
/// let mut pod = SeriesPod::with_clock("rtt", clock.clone());
///
/// pod.add(12.0);
/// clock.advance(TimeDelta::seconds(3));
/// pod.add(18.0);
///
/// assert_eq!(pod.duration_secs(), Some(3.0));
/// ```
///
/// # Concurrency
///
/// `add` is a multi-field read-modify-write; a `SeriesPod` must not be
/// mutated from multiple threads without external serialization.
#[derive(Clone, Debug)]
pub struct SeriesPod<C: Clock = SystemClock> {
    label: String,
    clock: C,
    state: State,
}

#[derive(Clone, Debug)]
enum State {
    /// No observations accepted since `since`
    Empty { since: DateTime<Utc> },
    Populated(Series),
}

/// Accumulated statistics once at least one observation has been accepted
#[derive(Clone, Debug)]
struct Series {
    count: u64,
    mean: f64,
    first: f64,
    last: f64,
    max: f64,
    min: f64,
    first_at: DateTime<Utc>,
    last_at: DateTime<Utc>,
    max_at: DateTime<Utc>,
    min_at: DateTime<Utc>,
}

impl Series {
    fn start(value: f64, now: DateTime<Utc>) -> Self {
        Self {
            count: 1,
            mean: value,
            first: value,
            last: value,
            max: value,
            min: value,
            first_at: now,
            last_at: now,
            max_at: now,
            min_at: now,
        }
    }

    fn observe(&mut self, value: f64, now: DateTime<Utc>) {
        if self.count >= COUNT_CEILING {
            return;
        }
        self.count += 1;

        self.last = value;
        self.last_at = now;

        // Welford's incremental mean
        self.mean += (value - self.mean) / self.count as f64;

        if value > self.max {
            self.max = value;
            self.max_at = now;
        }
        if value < self.min {
            self.min = value;
            self.min_at = now;
        }
    }
}

impl SeriesPod {
    /// Create a pod reading time from the system clock
    ///
    /// The label is trimmed; a blank or whitespace-only label resolves to
    /// [`UNLABELED`].
    pub fn new(label: &str) -> Self {
        Self::with_clock(label, SystemClock)
    }
}

impl Default for SeriesPod {
    fn default() -> Self {
        Self::new("")
    }
}

impl<C: Clock> SeriesPod<C> {
    /// Create a pod with an explicit time source
    pub fn with_clock(label: &str, clock: C) -> Self {
        let since = clock.now();
        Self {
            label: resolve_label(label),
            clock,
            state: State::Empty { since },
        }
    }

    /// The identifying label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of observations accepted since the last reset
    pub fn len(&self) -> u64 {
        self.series().map_or(0, |s| s.count)
    }

    /// Check if no observations have been accepted since the last reset
    pub fn is_empty(&self) -> bool {
        self.series().is_none()
    }

    /// Feed one observation
    ///
    /// Two kinds of input are dropped silently, leaving every field of the
    /// pod untouched:
    ///
    /// - NaN observations — the only domain-validity filter; infinities
    ///   are accepted.
    /// - Any observation arriving once the sample counter has saturated
    ///   at `u64::MAX - 1`. A documented limitation, not an error.
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let now = self.clock.now();
        if let State::Populated(series) = &mut self.state {
            series.observe(value, now);
        } else {
            self.state = State::Populated(Series::start(value, now));
        }
    }

    /// Discard all accumulated statistics, keeping the label
    ///
    /// Idempotent; the empty state is restamped with the current time, so
    /// [`first_at`](SeriesPod::first_at) reflects the reset instant until
    /// the next observation arrives.
    pub fn reset(&mut self) {
        self.state = State::Empty {
            since: self.clock.now(),
        };
    }

    /// Running mean of the accepted observations
    pub fn mean(&self) -> Option<f64> {
        self.series().map(|s| s.mean)
    }

    /// First observation accepted since the last reset
    pub fn first(&self) -> Option<f64> {
        self.series().map(|s| s.first)
    }

    /// Most recently accepted observation
    pub fn last(&self) -> Option<f64> {
        self.series().map(|s| s.last)
    }

    /// Largest accepted observation
    pub fn max(&self) -> Option<f64> {
        self.series().map(|s| s.max)
    }

    /// Smallest accepted observation
    pub fn min(&self) -> Option<f64> {
        self.series().map(|s| s.min)
    }

    /// Sum of the accepted observations, recovered as mean x count
    pub fn sum(&self) -> Option<f64> {
        self.series().map(|s| s.mean * s.count as f64)
    }

    /// Spread between the extrema (max - min)
    pub fn range(&self) -> Option<f64> {
        self.series().map(|s| s.max - s.min)
    }

    /// Midpoint of the extrema ((max + min) / 2)
    pub fn midrange(&self) -> Option<f64> {
        self.series().map(|s| (s.max + s.min) / 2.0)
    }

    /// Seconds between the first and the most recent observation
    pub fn duration_secs(&self) -> Option<f64> {
        self.series()
            .map(|s| (s.last_at - s.first_at).as_seconds_f64())
    }

    /// Instant of the first observation; the reset instant while empty
    pub fn first_at(&self) -> DateTime<Utc> {
        match &self.state {
            State::Empty { since } => *since,
            State::Populated(s) => s.first_at,
        }
    }

    /// Instant of the most recent observation; the reset instant while empty
    pub fn last_at(&self) -> DateTime<Utc> {
        match &self.state {
            State::Empty { since } => *since,
            State::Populated(s) => s.last_at,
        }
    }

    /// Instant the current maximum was observed
    pub fn max_at(&self) -> Option<DateTime<Utc>> {
        self.series().map(|s| s.max_at)
    }

    /// Instant the current minimum was observed
    pub fn min_at(&self) -> Option<DateTime<Utc>> {
        self.series().map(|s| s.min_at)
    }

    fn series(&self) -> Option<&Series> {
        match &self.state {
            State::Populated(series) => Some(series),
            State::Empty { .. } => None,
        }
    }
}

fn resolve_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        UNLABELED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `"<label> : <mean> ± <range/2>"`, or `"<label> : no data yet"` while
/// the pod is empty.
impl<C: Clock> fmt::Display for SeriesPod<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Populated(s) => {
                write!(f, "{} : {} ± {}", self.label, s.mean, (s.max - s.min) / 2.0)
            }
            State::Empty { .. } => write!(f, "{} : no data yet", self.label),
        }
    }
}

impl<C: Clock + Clone + fmt::Debug> Accumulator for SeriesPod<C> {
    type Item = f64;

    fn update(&mut self, item: &f64) {
        self.add(*item);
    }

    fn reset(&mut self) {
        SeriesPod::reset(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.label.len()
    }

    fn count(&self) -> u64 {
        self.len()
    }
}

impl<C: Clock + Clone + fmt::Debug> SummaryStats for SeriesPod<C> {
    fn mean(&self) -> Option<f64> {
        SeriesPod::mean(self)
    }

    fn min(&self) -> Option<f64> {
        SeriesPod::min(self)
    }

    fn max(&self) -> Option<f64> {
        SeriesPod::max(self)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<C: Clock> serde::Serialize for SeriesPod<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("SeriesPod", 11)?;
        s.serialize_field("label", self.label())?;
        s.serialize_field("count", &self.len())?;
        s.serialize_field("mean", &self.mean())?;
        s.serialize_field("first", &self.first())?;
        s.serialize_field("last", &self.last())?;
        s.serialize_field("min", &self.min())?;
        s.serialize_field("max", &self.max())?;
        s.serialize_field("first_at", &self.first_at())?;
        s.serialize_field("last_at", &self.last_at())?;
        s.serialize_field("min_at", &self.min_at())?;
        s.serialize_field("max_at", &self.max_at())?;
        s.end()
    }
}
