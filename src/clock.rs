/*!
A polling driver that reads a time of day from a clock source at a fixed
interval.

The main type in this module is [`Clock`]. It wraps a [`ClockSource`], which
is anything that can report the current [`TimeOfDay`], and turns it into an
iterator of [`Tick`]s. The driver sleeps for the configured interval between
two ticks, but never before the first one.

The source is a trait so that the driver can be exercised without waiting on
the real system clock. [`SystemClock`] reads the operating system's clock,
while [`SteppingClock`] starts at a fixed time and moves forward by a fixed
step on every read without ever sleeping.

# Example

This drives a clock that starts at `23:59:58` for three ticks:

```
use wallclock::{
    civil::TimeOfDay,
    clock::{Clock, SteppingClock},
    Duration,
};

let source = SteppingClock::new(
    TimeOfDay::new(23, 59, 58)?,
    Duration::from_secs(1)?,
);
let clock = Clock::new(source).limit(3);
let times: Vec<String> =
    clock.ticks().map(|tick| tick.time().to_string()).collect();
assert_eq!(times, ["23:59:58", "23:59:59", "00:00:00"]);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use core::cell::Cell;

use crate::{civil::TimeOfDay, Duration, Error};

/// A source of the current time of day.
///
/// Implementations decide both what "now" is and how waiting between two
/// readings works. The default `sleep` blocks the current thread.
pub trait ClockSource {
    /// Returns the current time of day.
    fn now(&self) -> TimeOfDay;

    /// Waits for the given amount of time to pass.
    fn sleep(&self, duration: std::time::Duration) {
        std::thread::sleep(duration);
    }
}

impl<'a, S: ClockSource + ?Sized> ClockSource for &'a S {
    fn now(&self) -> TimeOfDay {
        (**self).now()
    }

    fn sleep(&self, duration: std::time::Duration) {
        (**self).sleep(duration)
    }
}

/// A clock source backed by the operating system's clock.
///
/// The time of day reported is in UTC. See [`TimeOfDay::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock {
    _priv: (),
}

impl SystemClock {
    /// Create a new system clock source.
    pub const fn new() -> SystemClock {
        SystemClock { _priv: () }
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::now()
    }
}

/// A clock source that starts at a fixed time and advances by a fixed step
/// on every read.
///
/// Sleeping is a no-op for this source. The step stands in for the time that
/// would have passed.
///
/// # Example
///
/// ```
/// use wallclock::{civil::TimeOfDay, clock::{ClockSource, SteppingClock}, Duration};
///
/// let source = SteppingClock::new(TimeOfDay::MAX, Duration::from_secs(30)?);
/// assert_eq!(source.now().to_string(), "23:59:59");
/// assert_eq!(source.now().to_string(), "00:00:29");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct SteppingClock {
    next: Cell<TimeOfDay>,
    step: Duration,
}

impl SteppingClock {
    /// Create a new source whose first reading is `start`. Every reading
    /// after that is `step` later, wrapping around midnight.
    pub fn new(start: TimeOfDay, step: Duration) -> SteppingClock {
        SteppingClock { next: Cell::new(start), step }
    }
}

impl ClockSource for SteppingClock {
    fn now(&self) -> TimeOfDay {
        let now = self.next.get();
        self.next.set(now.wrapping_add(self.step));
        now
    }

    fn sleep(&self, _: std::time::Duration) {}
}

/// A polling clock driver.
///
/// A `Clock` reads its source relative to an origin time (midnight by
/// default): the elapsed time since the origin is computed with
/// [`Duration::between`] and then added back to the origin with wrapping
/// arithmetic. For any source reading this yields the reading itself, since
/// the difference between two times of day never leaves a single day.
///
/// By default, a clock ticks once per second forever. Use [`Clock::interval`]
/// and [`Clock::limit`] to change this.
#[derive(Debug)]
pub struct Clock<S> {
    source: S,
    origin: TimeOfDay,
    interval: std::time::Duration,
    limit: Option<u64>,
    started: Cell<Option<TimeOfDay>>,
}

impl<S: ClockSource> Clock<S> {
    /// Create a new clock driver that reads from the given source.
    pub fn new(source: S) -> Clock<S> {
        Clock {
            source,
            origin: TimeOfDay::midnight(),
            interval: std::time::Duration::from_secs(1),
            limit: None,
            started: Cell::new(None),
        }
    }

    /// Set the amount of time to wait between two ticks.
    ///
    /// The default is one second. A zero interval means the driver never
    /// sleeps.
    ///
    /// # Errors
    ///
    /// This returns an error when the given duration is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::{clock::{Clock, SystemClock}, Duration};
    ///
    /// assert!(Clock::new(SystemClock::new()).interval(Duration::ZERO).is_ok());
    ///
    /// let negative = Duration::from_secs_signed(-1);
    /// let err = Clock::new(SystemClock::new()).interval(negative).unwrap_err();
    /// assert!(err.is_invalid_value());
    /// ```
    pub fn interval(self, interval: Duration) -> Result<Clock<S>, Error> {
        let interval = std::time::Duration::try_from(interval)?;
        Ok(Clock { interval, ..self })
    }

    /// Set the total number of ticks to produce.
    ///
    /// By default, there is no limit and [`Clock::ticks`] never ends.
    pub fn limit(self, limit: u64) -> Clock<S> {
        Clock { limit: Some(limit), ..self }
    }

    /// Set the origin against which every reading is measured.
    ///
    /// This doesn't change what the clock reports, only the intermediate
    /// elapsed time that is logged for each reading.
    pub fn origin(self, origin: TimeOfDay) -> Clock<S> {
        Clock { origin, ..self }
    }

    /// Read the current time from the source.
    ///
    /// This does not record a starting time. See [`Clock::start`].
    pub fn current(&self) -> TimeOfDay {
        let reading = self.source.now();
        let since_origin = Duration::between(self.origin, reading);
        let time = self.origin.wrapping_add(since_origin);
        trace!(
            "read {reading} from source, {since_origin} since origin {}",
            self.origin,
        );
        time
    }

    /// Read the current time from the source and record it as the starting
    /// time of this clock.
    ///
    /// Calling this again resets the starting time.
    pub fn start(&self) -> TimeOfDay {
        let time = self.current();
        self.started.set(Some(time));
        debug!("clock started at {time}");
        time
    }

    /// Returns the starting time of this clock, if it has been started.
    pub fn started(&self) -> Option<TimeOfDay> {
        self.started.get()
    }

    /// Returns the duration from the starting time of this clock to `now`.
    ///
    /// Like [`Duration::between`], this is not wrapped around midnight. If
    /// the clock was started at `23:59:59` and `now` is `00:00:01`, then the
    /// elapsed time is `-23:59:58`. If the clock has not been started, then
    /// this returns zero.
    pub fn elapsed(&self, now: TimeOfDay) -> Duration {
        match self.started.get() {
            None => Duration::ZERO,
            Some(start) => Duration::between(start, now),
        }
    }

    /// Returns an iterator of ticks.
    ///
    /// The first tick starts the clock (see [`Clock::start`]) and is
    /// produced immediately. Every subsequent tick is produced after
    /// sleeping for the configured interval. If a limit is set, then the
    /// iterator stops after that many ticks. Otherwise, it never stops.
    pub fn ticks(&self) -> Ticks<'_, S> {
        Ticks { clock: self, count: 0 }
    }
}

/// A single reading produced by [`Clock::ticks`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tick {
    number: u64,
    time: TimeOfDay,
    elapsed: Duration,
}

impl Tick {
    /// The position of this tick, starting at `0`.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The time of day read for this tick.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The duration since the first tick. This is zero for the first tick
    /// and, since it is not wrapped, negative after passing midnight.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// An iterator over the ticks of a [`Clock`].
///
/// This is created by [`Clock::ticks`].
#[derive(Debug)]
pub struct Ticks<'c, S> {
    clock: &'c Clock<S>,
    count: u64,
}

impl<'c, S: ClockSource> Iterator for Ticks<'c, S> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.clock.limit.map_or(false, |limit| self.count >= limit) {
            return None;
        }
        let time = if self.count == 0 {
            self.clock.start()
        } else {
            trace!("sleeping for {:?}", self.clock.interval);
            self.clock.source.sleep(self.clock.interval);
            self.clock.current()
        };
        let tick = Tick {
            number: self.count,
            time,
            elapsed: self.clock.elapsed(time),
        };
        debug!("tick {} at {time} ({} elapsed)", tick.number, tick.elapsed);
        self.count += 1;
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};

    use super::*;

    /// A source that records every sleep request.
    #[derive(Debug, Default)]
    struct Recording {
        now: Cell<i32>,
        sleeps: core::cell::RefCell<Vec<std::time::Duration>>,
    }

    impl ClockSource for Recording {
        fn now(&self) -> TimeOfDay {
            let second = self.now.get();
            self.now.set(second + 1);
            TimeOfDay::from_second_of_day(second).unwrap()
        }

        fn sleep(&self, duration: std::time::Duration) {
            self.sleeps.borrow_mut().push(duration);
        }
    }

    fn stepping(start: TimeOfDay, secs: i64) -> SteppingClock {
        SteppingClock::new(start, Duration::from_secs(secs).unwrap())
    }

    #[test]
    fn ticks_respect_limit() {
        let clock = Clock::new(stepping(TimeOfDay::MIN, 1)).limit(4);
        let ticks: Vec<Tick> = clock.ticks().collect();
        assert_eq!(ticks.len(), 4);
        let numbers: Vec<u64> = ticks.iter().map(|t| t.number()).collect();
        assert_eq!(numbers, [0, 1, 2, 3]);

        let clock = Clock::new(stepping(TimeOfDay::MIN, 1)).limit(0);
        assert_eq!(clock.ticks().count(), 0);
    }

    #[test]
    fn ticks_without_limit_keep_going() {
        let clock = Clock::new(stepping(TimeOfDay::MIN, 1));
        assert_eq!(clock.ticks().take(1_000).count(), 1_000);
    }

    #[test]
    fn no_sleep_before_first_tick() {
        let source = Recording::default();
        let clock = Clock::new(&source)
            .interval(Duration::from_secs(5).unwrap())
            .unwrap()
            .limit(3);
        let mut ticks = clock.ticks();
        ticks.next().unwrap();
        assert!(source.sleeps.borrow().is_empty());
        ticks.next().unwrap();
        ticks.next().unwrap();
        assert!(ticks.next().is_none());
        assert_eq!(
            *source.sleeps.borrow(),
            [std::time::Duration::from_secs(5); 2],
        );
    }

    #[test]
    fn reports_source_readings() {
        let start = TimeOfDay::constant(12, 0, 0);
        let clock = Clock::new(stepping(start, 3_600))
            .origin(TimeOfDay::constant(18, 30, 0))
            .limit(3);
        let times: Vec<_> = clock.ticks().map(|t| t.time().to_string()).collect();
        assert_eq!(times, ["12:00:00", "13:00:00", "14:00:00"]);
    }

    #[test]
    fn elapsed_is_unwrapped_across_midnight() {
        let clock =
            Clock::new(stepping(TimeOfDay::constant(23, 59, 59), 1)).limit(3);
        let elapsed: Vec<i64> =
            clock.ticks().map(|t| t.elapsed().as_secs()).collect();
        assert_eq!(elapsed, [0, -86_399, -86_398]);
        assert_eq!(clock.started(), Some(TimeOfDay::MAX));
    }

    #[test]
    fn elapsed_before_start_is_zero() {
        let clock = Clock::new(stepping(TimeOfDay::MIN, 1));
        assert_eq!(clock.started(), None);
        assert!(clock.elapsed(TimeOfDay::MAX).is_zero());
        assert_eq!(clock.start(), TimeOfDay::MIN);
        assert_eq!(clock.elapsed(TimeOfDay::MAX).as_secs(), 86_399);
    }

    #[test]
    fn negative_interval_is_rejected() {
        let err = Clock::new(SystemClock::new())
            .interval(Duration::from_secs_signed(-1))
            .unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn system_clock_is_in_range() {
        let clock = Clock::new(SystemClock::new())
            .interval(Duration::ZERO)
            .unwrap()
            .limit(2);
        for tick in clock.ticks() {
            assert!(in_range(tick.time()));
        }
    }

    fn in_range(time: TimeOfDay) -> bool {
        (0..86_400).contains(&time.to_second_of_day())
    }

    #[cfg(feature = "logging")]
    #[test]
    fn ticks_with_logging() {
        let _ = crate::logging::Logger::init();
        let clock = Clock::new(stepping(TimeOfDay::MIN, 1)).limit(2);
        assert_eq!(clock.ticks().count(), 2);
    }
}
