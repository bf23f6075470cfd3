use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::{
    civil::TimeOfDay,
    error::{duration::Error as E, Error},
    fmt::{
        clock::{ClockParser, ClockPrinter},
        StdFmtWrite,
    },
};

static PARSER: ClockParser = ClockParser::new();
static PRINTER: ClockPrinter = ClockPrinter::new();

/// A signed duration of time represented as a 64-bit integer of seconds.
///
/// A `Duration` is a plain scalar. It has no notion of days or of wrapping
/// around midnight: `Duration::new(25, 0, 0)` is 25 hours, and it stays 25
/// hours. Wrapping only happens when a duration is added to a
/// [`TimeOfDay`].
///
/// Constructing a `Duration` from components only permits non-negative
/// components, so that the result is never negative. A negative duration can
/// only come from subtraction, negation, [`Duration::between`] or
/// [`Duration::from_secs_signed`].
///
/// # Parsing and printing
///
/// Like [`TimeOfDay`], this type uses the `HH:MM:SS` format via the
/// `FromStr` and `Display` trait implementations. When printing, the hours
/// may need more than two digits, and a negative duration gets a leading
/// `-`:
///
/// ```
/// use wallclock::Duration;
///
/// let span: Duration = "1:30:00".parse()?;
/// assert_eq!(span.as_secs(), 5_400);
/// assert_eq!(span.to_string(), "01:30:00");
/// assert_eq!((-span).to_string(), "-01:30:00");
/// assert_eq!(Duration::new(100, 0, 1)?.to_string(), "100:00:01");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// When parsing, a component may carry a `+` or `-` sign, but a negative
/// component is reported as an invalid value. This means that printing a
/// negative duration and parsing it back fails:
///
/// ```
/// use wallclock::Duration;
///
/// let err = "-01:30:00".parse::<Duration>().unwrap_err();
/// assert!(err.is_invalid_value());
/// ```
///
/// # Arithmetic
///
/// The `Add` and `Sub` trait implementations panic on overflow. Use
/// [`Duration::checked_add`] and [`Duration::checked_sub`] to handle overflow
/// as an error instead.
///
/// ```
/// use wallclock::Duration;
///
/// let span1 = Duration::new(1, 30, 0)?;
/// let span2 = Duration::new(0, 45, 30)?;
/// assert_eq!(span1 + span2, Duration::new(2, 15, 30)?);
/// assert!(Duration::MAX.checked_add(Duration::from_secs(1)?).is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    secs: i64,
}

impl Duration {
    /// A duration of zero time.
    pub const ZERO: Duration = Duration { secs: 0 };

    /// The minimum possible duration. That is, `i64::MIN` seconds.
    pub const MIN: Duration = Duration { secs: i64::MIN };

    /// The maximum possible duration. That is, `i64::MAX` seconds.
    pub const MAX: Duration = Duration { secs: i64::MAX };

    /// Creates a new duration from hours, minutes and seconds.
    ///
    /// The total is `hours * 3600 + minutes * 60 + seconds`. None of the
    /// components are bounded individually, so `Duration::new(0, 90, 0)` is
    /// the same as `Duration::new(1, 30, 0)`.
    ///
    /// # Errors
    ///
    /// This returns an error if any component is negative, or if the total
    /// number of seconds does not fit into an `i64`. Both of these satisfy
    /// [`Error::is_invalid_value`].
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// let span = Duration::new(2, 15, 30)?;
    /// assert_eq!(span.as_secs(), 8_130);
    ///
    /// assert!(Duration::new(0, -5, 0).unwrap_err().is_invalid_value());
    /// assert!(Duration::new(i64::MAX, 0, 0).unwrap_err().is_invalid_value());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Result<Duration, Error> {
        let hours = non_negative("hours", hours)?;
        let minutes = non_negative("minutes", minutes)?;
        let seconds = non_negative("seconds", seconds)?;
        let secs = hours
            .checked_mul(3_600)
            .and_then(|secs| secs.checked_add(minutes.checked_mul(60)?))
            .and_then(|secs| secs.checked_add(seconds))
            .ok_or(E::ComponentsOverflowed)?;
        Ok(Duration { secs })
    }

    /// Creates a new duration from hours and minutes. The seconds are set to
    /// `0`.
    ///
    /// # Errors
    ///
    /// This returns an error in the same cases as [`Duration::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// assert_eq!(Duration::from_hours_minutes(1, 30)?.as_secs(), 5_400);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_hours_minutes(
        hours: i64,
        minutes: i64,
    ) -> Result<Duration, Error> {
        Duration::new(hours, minutes, 0)
    }

    /// Creates a new duration from a non-negative number of seconds.
    ///
    /// # Errors
    ///
    /// This returns an error if the given number is negative. To create a
    /// negative duration, use [`Duration::from_secs_signed`].
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// assert_eq!(Duration::from_secs(90)?.to_string(), "00:01:30");
    /// assert!(Duration::from_secs(-90).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn from_secs(secs: i64) -> Result<Duration, Error> {
        let secs = non_negative("seconds", secs)?;
        Ok(Duration { secs })
    }

    /// Creates a new duration from any number of seconds, including negative
    /// numbers.
    ///
    /// This never fails since every `i64` is a valid duration.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// let span = Duration::from_secs_signed(-75_600);
    /// assert_eq!(span.to_string(), "-21:00:00");
    /// ```
    #[inline]
    pub const fn from_secs_signed(secs: i64) -> Duration {
        Duration { secs }
    }

    /// Returns the duration from `start` to `end`.
    ///
    /// This is the literal difference `end - start` in seconds, where both
    /// times are interpreted as belonging to the same day. It is *not*
    /// wrapped around midnight, so when `end` is earlier in the day than
    /// `start`, the result is negative. Callers that want the forward
    /// distance across midnight can add one day to a negative result.
    ///
    /// Since a time of day is always within a single day, the result is
    /// always in the range `-86399..=86399` seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::{civil::TimeOfDay, Duration};
    ///
    /// let start = TimeOfDay::new(22, 0, 0)?;
    /// let end = TimeOfDay::new(1, 0, 0)?;
    /// let span = Duration::between(start, end);
    /// assert_eq!(span.as_secs(), -75_600);
    /// assert_eq!(span.to_string(), "-21:00:00");
    ///
    /// // The forward distance across midnight is 3 hours.
    /// let day = Duration::new(24, 0, 0)?;
    /// assert_eq!((span + day).to_string(), "03:00:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn between(start: TimeOfDay, end: TimeOfDay) -> Duration {
        let start = i64::from(start.to_second_of_day());
        let end = i64::from(end.to_second_of_day());
        Duration { secs: end - start }
    }

    /// Parses a duration from its `HH:MM:SS` form.
    ///
    /// This is the same as using the `FromStr` impl, except it also accepts
    /// a `&[u8]`.
    ///
    /// # Errors
    ///
    /// This returns an error that satisfies [`Error::is_invalid_format`] when
    /// the input does not have three `:` separated components of optionally
    /// signed ASCII digits. It returns an error that satisfies
    /// [`Error::is_invalid_value`] when a component is negative or when the
    /// total overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// assert_eq!(Duration::parse("48:00:00")?.as_secs(), 172_800);
    /// assert!(Duration::parse("48:00").unwrap_err().is_invalid_format());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Duration, Error> {
        PARSER.parse_duration(input)
    }

    /// Returns the total number of seconds in this duration.
    #[inline]
    pub const fn as_secs(self) -> i64 {
        self.secs
    }

    /// Returns the number of whole hours in this duration.
    ///
    /// This is truncated toward zero, so it is negative (or zero) when this
    /// duration is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// let span = Duration::from_secs_signed(-3_661);
    /// assert_eq!(span.hours(), -1);
    /// assert_eq!(span.minutes(), -1);
    /// assert_eq!(span.seconds(), -1);
    /// ```
    #[inline]
    pub const fn hours(self) -> i64 {
        self.secs / 3_600
    }

    /// Returns the minutes component of this duration, in `-59..=59`.
    ///
    /// This is the number of whole minutes left over after removing the
    /// whole hours from this duration. It has the same sign as the duration.
    #[inline]
    pub const fn minutes(self) -> i64 {
        (self.secs / 60) % 60
    }

    /// Returns the seconds component of this duration, in `-59..=59`.
    ///
    /// This is the number of seconds left over after removing the whole
    /// minutes from this duration. It has the same sign as the duration.
    #[inline]
    pub const fn seconds(self) -> i64 {
        self.secs % 60
    }

    /// Returns true when this duration is less than zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.secs < 0
    }

    /// Returns true when this duration is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.secs == 0
    }

    /// Returns the absolute value of this duration.
    ///
    /// # Errors
    ///
    /// This returns an error only for [`Duration::MIN`], whose absolute
    /// value does not fit into an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// let span = Duration::from_secs_signed(-90);
    /// assert_eq!(span.abs()?.as_secs(), 90);
    /// assert!(Duration::MIN.abs().unwrap_err().is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn abs(self) -> Result<Duration, Error> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(self)
        }
    }

    /// Returns this duration with its sign flipped.
    ///
    /// # Errors
    ///
    /// This returns an error only for [`Duration::MIN`].
    #[inline]
    pub fn negate(self) -> Result<Duration, Error> {
        let secs = self.secs.checked_neg().ok_or(E::NegateOverflowed)?;
        Ok(Duration { secs })
    }

    /// Add two durations together.
    ///
    /// # Errors
    ///
    /// This returns an error that satisfies [`Error::is_overflow`] when the
    /// sum does not fit into an `i64` number of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// let span = Duration::new(1, 30, 0)?.checked_add(Duration::new(0, 45, 30)?)?;
    /// assert_eq!(span.to_string(), "02:15:30");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn checked_add(self, rhs: Duration) -> Result<Duration, Error> {
        let secs = self.secs.checked_add(rhs.secs).ok_or(E::AddOverflowed)?;
        Ok(Duration { secs })
    }

    /// Subtract `rhs` from this duration.
    ///
    /// # Errors
    ///
    /// This returns an error that satisfies [`Error::is_overflow`] when the
    /// difference does not fit into an `i64` number of seconds.
    #[inline]
    pub fn checked_sub(self, rhs: Duration) -> Result<Duration, Error> {
        let secs = self.secs.checked_sub(rhs.secs).ok_or(E::SubOverflowed)?;
        Ok(Duration { secs })
    }
}

/// Returns an error when the given duration component is negative.
#[inline]
fn non_negative(what: &'static str, given: i64) -> Result<i64, Error> {
    if given < 0 {
        return Err(Error::from(E::NegativeComponent { what, given }));
    }
    Ok(given)
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        PRINTER
            .print_duration(self, StdFmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    #[inline]
    fn from_str(string: &str) -> Result<Duration, Error> {
        PARSER.parse_duration(string)
    }
}

impl Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        self.negate().expect("negating duration overflowed")
    }
}

/// Adds two durations. This panics on overflow.
impl Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs).expect("adding durations overflowed")
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.add(rhs);
    }
}

/// Subtracts two durations. This panics on overflow.
impl Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs).expect("subtracting durations overflowed")
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.sub(rhs);
    }
}

/// Converts a `std::time::Duration` to a `Duration`.
///
/// Fractional seconds are truncated. This fails when the number of whole
/// seconds does not fit into an `i64`.
impl TryFrom<core::time::Duration> for Duration {
    type Error = Error;

    fn try_from(d: core::time::Duration) -> Result<Duration, Error> {
        let secs = i64::try_from(d.as_secs())
            .map_err(|_| Error::from(E::FromStdOverflowed))?;
        Ok(Duration { secs })
    }
}

/// Converts a `Duration` to a `std::time::Duration`.
///
/// This fails when the duration is negative.
impl TryFrom<Duration> for core::time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<core::time::Duration, Error> {
        let secs = u64::try_from(d.secs)
            .map_err(|_| Error::from(E::NegativeToStd))?;
        Ok(core::time::Duration::from_secs(secs))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        Duration { secs: quickcheck::Arbitrary::arbitrary(g) }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Duration>> {
        alloc::boxed::Box::new(
            quickcheck::Arbitrary::shrink(&self.secs)
                .map(|secs| Duration { secs }),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn new() {
        assert_eq!(Duration::new(0, 0, 0).unwrap(), Duration::ZERO);
        assert_eq!(Duration::new(1, 1, 1).unwrap().as_secs(), 3_661);
        assert_eq!(Duration::new(0, 90, 90).unwrap().as_secs(), 5_490);
        assert_eq!(
            Duration::new(2_562_047_788_015_215, 30, 7).unwrap(),
            Duration::MAX,
        );
        assert_eq!(Duration::from_hours_minutes(1, 30).unwrap().as_secs(), 5_400);
    }

    #[test]
    fn new_negative_components() {
        let err = Duration::new(-1, 0, 0).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(
            err.to_string(),
            "duration component 'hours' with value -1 must not be negative",
        );
        let err = Duration::new(0, -1, 0).unwrap_err();
        assert!(err.is_invalid_value());
        let err = Duration::new(0, 0, -1).unwrap_err();
        assert!(err.is_invalid_value());
        let err = Duration::from_secs(-1).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn new_overflow() {
        let err = Duration::new(2_562_047_788_015_215, 30, 8).unwrap_err();
        assert!(err.is_invalid_value());
        assert!(!err.is_overflow());
        assert!(Duration::new(0, i64::MAX, 0).is_err());
        assert!(Duration::new(i64::MAX / 3_600, 60, 0).is_err());
    }

    #[test]
    fn add_scenario() {
        let span1 = Duration::new(1, 30, 0).unwrap();
        let span2 = Duration::new(0, 45, 30).unwrap();
        assert_eq!(span1 + span2, Duration::new(2, 15, 30).unwrap());

        let mut span = span1;
        span += span2;
        span -= span1;
        assert_eq!(span, span2);
    }

    #[test]
    fn between_scenario() {
        let start = TimeOfDay::constant(22, 0, 0);
        let end = TimeOfDay::constant(1, 0, 0);
        let span = Duration::between(start, end);
        assert_eq!(span.as_secs(), -75_600);
        assert!(span.is_negative());
        assert_eq!(span.to_string(), "-21:00:00");
        assert_eq!(Duration::between(end, start).to_string(), "21:00:00");
        assert!(Duration::between(end, end).is_zero());
    }

    #[test]
    fn overflow() {
        let one = Duration::from_secs(1).unwrap();
        assert!(Duration::MAX.checked_add(one).unwrap_err().is_overflow());
        assert!(Duration::MIN.checked_sub(one).unwrap_err().is_overflow());
        assert!(Duration::MIN.negate().unwrap_err().is_overflow());
        assert_eq!(Duration::MAX.negate().unwrap().as_secs(), -i64::MAX);
    }

    #[test]
    #[should_panic(expected = "adding durations overflowed")]
    fn add_panics_on_overflow() {
        let _ = Duration::MAX + Duration::from_secs_signed(1);
    }

    #[test]
    fn components() {
        let span = Duration::new(26, 3, 4).unwrap();
        assert_eq!(
            (span.hours(), span.minutes(), span.seconds()),
            (26, 3, 4)
        );
        let span = -span;
        assert_eq!(
            (span.hours(), span.minutes(), span.seconds()),
            (-26, -3, -4)
        );
        assert_eq!(span.abs().unwrap().as_secs(), 26 * 3_600 + 3 * 60 + 4);
    }

    #[test]
    fn std_conversions() {
        let std = core::time::Duration::from_millis(90_500);
        let span = Duration::try_from(std).unwrap();
        assert_eq!(span.as_secs(), 90);

        let std = core::time::Duration::from_secs(u64::MAX);
        assert!(Duration::try_from(std).unwrap_err().is_overflow());

        let std = core::time::Duration::try_from(span).unwrap();
        assert_eq!(std.as_secs(), 90);

        let negative = Duration::from_secs_signed(-1);
        let err = core::time::Duration::try_from(negative).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn parse_and_print() {
        let span: Duration = "02:15:30".parse().unwrap();
        assert_eq!(span.as_secs(), 8_130);
        assert_eq!(span.to_string(), "02:15:30");
        assert_eq!(alloc::format!("{span:?}"), "02:15:30");
        assert!("-02:15:30".parse::<Duration>().unwrap_err().is_invalid_value());
        assert!("02:15".parse::<Duration>().unwrap_err().is_invalid_format());
    }

    #[test]
    fn duration_size() {
        assert_eq!(8, core::mem::size_of::<Duration>());
    }

    quickcheck::quickcheck! {
        fn prop_add_commutative(a: Duration, b: Duration) -> quickcheck::TestResult {
            let Ok(sum1) = a.checked_add(b) else {
                return quickcheck::TestResult::discard();
            };
            let sum2 = b.checked_add(a).unwrap();
            quickcheck::TestResult::from_bool(sum1 == sum2)
        }

        fn prop_add_then_sub(a: Duration, b: Duration) -> quickcheck::TestResult {
            let Ok(sum) = a.checked_add(b) else {
                return quickcheck::TestResult::discard();
            };
            quickcheck::TestResult::from_bool(sum.checked_sub(b).unwrap() == a)
        }

        fn prop_non_negative_roundtrip(span: Duration) -> bool {
            let Ok(span) = span.abs() else { return true };
            span.to_string().parse::<Duration>().unwrap() == span
        }

        fn prop_components_recompose(span: Duration) -> bool {
            let Ok(span) = span.abs() else { return true };
            let (h, m, s) = (span.hours(), span.minutes(), span.seconds());
            Duration::new(h, m, s).unwrap() == span
        }

        fn prop_between_matches_second_of_day(
            t1: TimeOfDay,
            t2: TimeOfDay
        ) -> bool {
            let span = Duration::between(t1, t2);
            let expected = t2.to_second_of_day() - t1.to_second_of_day();
            span.as_secs() == i64::from(expected) && span.secs.abs() < 86_400
        }
    }
}
