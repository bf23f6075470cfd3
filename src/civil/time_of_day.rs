use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    error::Error,
    fmt::{
        clock::{ClockParser, ClockPrinter},
        StdFmtWrite,
    },
    util::b,
    Duration,
};

/// The number of seconds in a civil day.
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

static PARSER: ClockParser = ClockParser::new();
static PRINTER: ClockPrinter = ClockPrinter::new();

/// A representation of civil "wall clock" time.
///
/// Conceptually, a `TimeOfDay` value corresponds to the hours, minutes and
/// seconds that you might see on a clock. It is always within a single day:
/// the hour is in the range `0..=23` and the minute and second are in the
/// range `0..=59`. Put differently, every `TimeOfDay` corresponds to exactly
/// one second in the range `[0, 86399]`, where `0` corresponds to `00:00:00`
/// ([`TimeOfDay::MIN`]) and `86399` corresponds to `23:59:59`
/// ([`TimeOfDay::MAX`]).
///
/// There is no way to create a `TimeOfDay` with out of range components.
/// Every constructor either validates its inputs or, in the case of
/// [`TimeOfDay::constant`], panics.
///
/// # Default value
///
/// For convenience, this type implements the `Default` trait. Its default
/// value is midnight. i.e., `00:00:00`.
///
/// # Parsing and printing
///
/// The `TimeOfDay` type provides convenient trait implementations of
/// [`core::str::FromStr`] and [`core::fmt::Display`]. Both use the
/// `HH:MM:SS` format, where each component is zero padded to two digits when
/// printed:
///
/// ```
/// use wallclock::civil::TimeOfDay;
///
/// let t: TimeOfDay = "7:30:05".parse()?;
/// assert_eq!(t.to_string(), "07:30:05");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Comparisons
///
/// The `TimeOfDay` type provides both `Eq` and `Ord` trait implementations.
/// Times are ordered by their hour, then their minute and then their second.
/// When a time `t1` occurs before a time `t2` on the same day, then
/// `t1 < t2`:
///
/// ```
/// use wallclock::civil::TimeOfDay;
///
/// let t1 = TimeOfDay::constant(7, 30, 1);
/// let t2 = TimeOfDay::constant(8, 10, 0);
/// assert!(t1 < t2);
/// ```
///
/// # Arithmetic
///
/// Adding or subtracting a [`Duration`] always wraps around midnight. There
/// is no checked variant because the result is always a valid time of day.
/// Wrapping arithmetic is also available via the `Add` and `Sub` trait
/// implementations:
///
/// ```
/// use wallclock::{civil::TimeOfDay, Duration};
///
/// let t = TimeOfDay::constant(20, 10, 1);
/// let span = Duration::new(1, 49, 59)?;
/// assert_eq!(t + span, TimeOfDay::constant(22, 0, 0));
/// assert_eq!(TimeOfDay::constant(0, 0, 0) - span, TimeOfDay::constant(22, 10, 1));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// Subtracting two `TimeOfDay` values does *not* wrap. It is the literal
/// difference between the two times within a single day, and so it may be
/// negative. See [`Duration::between`] for more details.
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TimeOfDay {
    // The field order matters: the derived `Ord` impl compares the hour, then
    // the minute, then the second.
    hour: i8,
    minute: i8,
    second: i8,
}

impl TimeOfDay {
    /// The minimum representable time of day.
    ///
    /// This corresponds to `00:00:00`.
    pub const MIN: TimeOfDay = TimeOfDay::midnight();

    /// The maximum representable time of day.
    ///
    /// This corresponds to `23:59:59`.
    pub const MAX: TimeOfDay = TimeOfDay::constant(23, 59, 59);

    /// Creates a new `TimeOfDay` value from its component hour, minute and
    /// second values.
    ///
    /// # Errors
    ///
    /// This returns an error unless *all* of the following conditions are
    /// true:
    ///
    /// * `0 <= hour <= 23`
    /// * `0 <= minute <= 59`
    /// * `0 <= second <= 59`
    ///
    /// # Example
    ///
    /// This shows an example of a valid time:
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(21, 30, 5).unwrap();
    /// assert_eq!(t.hour(), 21);
    /// assert_eq!(t.minute(), 30);
    /// assert_eq!(t.second(), 5);
    /// ```
    ///
    /// This shows an example of an invalid time:
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(21, 30, 60).unwrap_err().is_invalid_value());
    /// ```
    #[inline]
    pub fn new(hour: i8, minute: i8, second: i8) -> Result<TimeOfDay, Error> {
        let hour = b::Hour::check(hour)?;
        let minute = b::Minute::check(minute)?;
        let second = b::Second::check(second)?;
        Ok(TimeOfDay { hour, minute, second })
    }

    /// Creates a new `TimeOfDay` value from an hour and a minute. The second
    /// is set to `0`.
    ///
    /// # Errors
    ///
    /// This returns an error when the hour is not in `0..=23` or the minute
    /// is not in `0..=59`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::from_hour_minute(9, 15)?;
    /// assert_eq!(t, TimeOfDay::new(9, 15, 0)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hour_minute(hour: i8, minute: i8) -> Result<TimeOfDay, Error> {
        TimeOfDay::new(hour, minute, 0)
    }

    /// Creates a new `TimeOfDay` value at the start of the given hour. The
    /// minute and second are set to `0`.
    ///
    /// # Errors
    ///
    /// This returns an error when the hour is not in `0..=23`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_hour(17)?.to_string(), "17:00:00");
    /// assert!(TimeOfDay::from_hour(24).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hour(hour: i8) -> Result<TimeOfDay, Error> {
        TimeOfDay::new(hour, 0, 0)
    }

    /// Creates a new `TimeOfDay` value in a `const` context.
    ///
    /// # Panics
    ///
    /// This panics if the given values do not correspond to a valid
    /// `TimeOfDay`. All of the following conditions must be true:
    ///
    /// * `0 <= hour <= 23`
    /// * `0 <= minute <= 59`
    /// * `0 <= second <= 59`
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// const BEDTIME: TimeOfDay = TimeOfDay::constant(21, 30, 5);
    /// assert_eq!(BEDTIME.hour(), 21);
    /// assert_eq!(BEDTIME.minute(), 30);
    /// assert_eq!(BEDTIME.second(), 5);
    /// ```
    #[inline]
    pub const fn constant(hour: i8, minute: i8, second: i8) -> TimeOfDay {
        if !b::Hour::contains(hour) {
            panic!("invalid hour");
        }
        if !b::Minute::contains(minute) {
            panic!("invalid minute");
        }
        if !b::Second::contains(second) {
            panic!("invalid second");
        }
        TimeOfDay { hour, minute, second }
    }

    /// Returns the first moment of time in a day.
    ///
    /// Specifically, this has the `hour`, `minute` and `second` fields all
    /// set to `0`.
    #[inline]
    pub const fn midnight() -> TimeOfDay {
        TimeOfDay::constant(0, 0, 0)
    }

    /// Creates a new `TimeOfDay` from the number of seconds elapsed since
    /// midnight.
    ///
    /// This is the inverse of [`TimeOfDay::to_second_of_day`].
    ///
    /// # Errors
    ///
    /// This returns an error if the given value is not in `0..=86399`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::from_second_of_day(45_930)?;
    /// assert_eq!(t, TimeOfDay::new(12, 45, 30)?);
    /// assert!(TimeOfDay::from_second_of_day(86_400).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_second_of_day(second: i32) -> Result<TimeOfDay, Error> {
        let second = b::SecondOfDay::check(second)?;
        Ok(TimeOfDay::from_second_of_day_unchecked(second))
    }

    /// Parses a `TimeOfDay` from its `HH:MM:SS` form.
    ///
    /// This is the same as using the `FromStr` impl, except it also accepts
    /// a `&[u8]`.
    ///
    /// # Errors
    ///
    /// This returns an error that satisfies [`Error::is_invalid_format`] when
    /// the input does not consist of exactly three `:` separated components
    /// of ASCII digits. It returns an error that satisfies
    /// [`Error::is_invalid_value`] when a component is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::parse("10:30:45")?, TimeOfDay::new(10, 30, 45)?);
    /// assert!(TimeOfDay::parse("10:3045").unwrap_err().is_invalid_format());
    /// assert!(TimeOfDay::parse("24:00:00").unwrap_err().is_invalid_value());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<TimeOfDay, Error> {
        PARSER.parse_time_of_day(input)
    }

    /// Returns the current time of day, as reported by the system clock.
    ///
    /// Since this crate does not deal with time zones, this is the time of
    /// day in UTC. That is, the number of seconds since the Unix epoch
    /// reduced modulo one day. Fractional seconds are truncated toward the
    /// past.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// let t = TimeOfDay::now();
    /// assert!(t.hour() < 24);
    /// ```
    #[cfg(feature = "std")]
    #[inline]
    pub fn now() -> TimeOfDay {
        TimeOfDay::from(std::time::SystemTime::now())
    }

    /// Returns the "hour" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=23`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the "minute" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the "second" component of this time.
    ///
    /// The value returned is guaranteed to be in the range `0..=59`.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }

    /// Returns the number of seconds elapsed since midnight.
    ///
    /// The value returned is guaranteed to be in the range `0..=86399`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::MIN.to_second_of_day(), 0);
    /// assert_eq!(TimeOfDay::constant(1, 1, 1).to_second_of_day(), 3_661);
    /// assert_eq!(TimeOfDay::MAX.to_second_of_day(), 86_399);
    /// ```
    #[inline]
    pub fn to_second_of_day(self) -> i32 {
        i32::from(self.hour) * 3_600
            + i32::from(self.minute) * 60
            + i32::from(self.second)
    }

    /// Add the given duration to this time of day, wrapping around midnight.
    ///
    /// This computes `(self.to_second_of_day() + span.as_secs())` modulo
    /// `86400` using a floored modulo, so that the result is always in
    /// `[0, 86400)` even when the duration is negative. This never fails and
    /// never overflows, for any duration.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::{civil::TimeOfDay, Duration};
    ///
    /// let t = TimeOfDay::new(10, 30, 0)?;
    /// let got = t.wrapping_add(Duration::new(2, 15, 30)?);
    /// assert_eq!(got, TimeOfDay::new(12, 45, 30)?);
    ///
    /// let t = TimeOfDay::new(23, 59, 59)?;
    /// let got = t.wrapping_add(Duration::from_secs(2)?);
    /// assert_eq!(got, TimeOfDay::new(0, 0, 1)?);
    ///
    /// let t = TimeOfDay::new(0, 0, 1)?;
    /// let got = t.wrapping_add(Duration::from_secs_signed(-2));
    /// assert_eq!(got, TimeOfDay::new(23, 59, 59)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn wrapping_add(self, span: Duration) -> TimeOfDay {
        // Reducing the duration first keeps the sum well within `i64`.
        let span = span.as_secs().rem_euclid(SECONDS_PER_DAY);
        let sum = i64::from(self.to_second_of_day()) + span;
        TimeOfDay::from_second_of_day_i64(sum.rem_euclid(SECONDS_PER_DAY))
    }

    /// Subtract the given duration from this time of day, wrapping around
    /// midnight.
    ///
    /// This is the inverse of [`TimeOfDay::wrapping_add`]. It never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::{civil::TimeOfDay, Duration};
    ///
    /// let t = TimeOfDay::new(0, 30, 0)?;
    /// let got = t.wrapping_sub(Duration::new(1, 0, 0)?);
    /// assert_eq!(got, TimeOfDay::new(23, 30, 0)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn wrapping_sub(self, span: Duration) -> TimeOfDay {
        let span = span.as_secs().rem_euclid(SECONDS_PER_DAY);
        let diff = i64::from(self.to_second_of_day()) - span;
        TimeOfDay::from_second_of_day_i64(diff.rem_euclid(SECONDS_PER_DAY))
    }

    /// Returns the duration from `other` to this time.
    ///
    /// This is `Duration::between(other, self)`. The result is not wrapped,
    /// so it is negative when `other` is later in the day than `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// let t1 = TimeOfDay::new(12, 0, 0)?;
    /// let t2 = TimeOfDay::new(10, 30, 0)?;
    /// assert_eq!(t1.since(t2).to_string(), "01:30:00");
    /// assert_eq!(t2.since(t1).to_string(), "-01:30:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn since(self, other: TimeOfDay) -> Duration {
        Duration::between(other, self)
    }

    /// Returns the duration from this time to `other`.
    ///
    /// This is `Duration::between(self, other)`. The result is not wrapped,
    /// so it is negative when `other` is earlier in the day than `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::civil::TimeOfDay;
    ///
    /// let t1 = TimeOfDay::new(22, 0, 0)?;
    /// let t2 = TimeOfDay::new(1, 0, 0)?;
    /// assert_eq!(t1.until(t2).as_secs(), -75_600);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn until(self, other: TimeOfDay) -> Duration {
        Duration::between(self, other)
    }
}

/// Internal helpers.
impl TimeOfDay {
    /// Converts a second of the day to a time.
    ///
    /// Callers must ensure the value is in `0..=86399`.
    #[inline]
    fn from_second_of_day_unchecked(second: i32) -> TimeOfDay {
        debug_assert!(b::SecondOfDay::contains(second));
        // Each of these casts is lossless since the input is within a day.
        let hour = (second / 3_600) as i8;
        let minute = ((second / 60) % 60) as i8;
        let second = (second % 60) as i8;
        TimeOfDay { hour, minute, second }
    }

    /// Like `from_second_of_day_unchecked`, but for the result of a floored
    /// modulo on an `i64`.
    #[inline]
    fn from_second_of_day_i64(second: i64) -> TimeOfDay {
        debug_assert!((0..SECONDS_PER_DAY).contains(&second));
        // OK because the value is in `0..86400`, which fits into an `i32`.
        TimeOfDay::from_second_of_day_unchecked(second as i32)
    }
}

impl Default for TimeOfDay {
    fn default() -> TimeOfDay {
        TimeOfDay::midnight()
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        PRINTER
            .print_time_of_day(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for TimeOfDay {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<TimeOfDay, Error> {
        PARSER.parse_time_of_day(string)
    }
}

/// Adds a duration. This uses wrapping arithmetic.
impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn add(self, rhs: Duration) -> TimeOfDay {
        self.wrapping_add(rhs)
    }
}

/// Adds a duration in place. This uses wrapping arithmetic.
impl AddAssign<Duration> for TimeOfDay {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.add(rhs);
    }
}

/// Subtracts a duration. This uses wrapping arithmetic.
impl Sub<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn sub(self, rhs: Duration) -> TimeOfDay {
        self.wrapping_sub(rhs)
    }
}

/// Subtracts a duration in place. This uses wrapping arithmetic.
impl SubAssign<Duration> for TimeOfDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.sub(rhs);
    }
}

/// Computes the duration between two times.
///
/// This will return a negative duration when the time being subtracted is
/// later in the day. The result is never wrapped.
impl Sub for TimeOfDay {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: TimeOfDay) -> Duration {
        self.since(rhs)
    }
}

/// Converts a system time to the UTC time of day.
///
/// Times before the Unix epoch are handled with a floored modulo, so that
/// one second before the epoch is `23:59:59`.
#[cfg(feature = "std")]
impl From<std::time::SystemTime> for TimeOfDay {
    fn from(time: std::time::SystemTime) -> TimeOfDay {
        // This is the same as `SECONDS_PER_DAY`, but as a `u64`.
        const DAY: u64 = 86_400;

        let second = match time.duration_since(std::time::UNIX_EPOCH) {
            Ok(since) => since.as_secs() % DAY,
            Err(err) => {
                // The time is before the epoch. Round the distance up to a
                // whole second so that the result is floored.
                let before = err.duration();
                let mut secs = before.as_secs() % DAY;
                if before.subsec_nanos() > 0 {
                    secs += 1;
                }
                (DAY - secs) % DAY
            }
        };
        // OK because the value is in `0..86400`.
        TimeOfDay::from_second_of_day_unchecked(second as i32)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeOfDay {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimeOfDay {
        let second: u32 = quickcheck::Arbitrary::arbitrary(g);
        let second = second % (SECONDS_PER_DAY as u32);
        TimeOfDay::from_second_of_day_unchecked(second as i32)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = TimeOfDay>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.to_second_of_day())
                .filter(|&second| b::SecondOfDay::contains(second))
                .map(TimeOfDay::from_second_of_day_unchecked),
        )
    }
}
