/*!
A parser and printer for the `HH:MM:SS` clock format.

The format is the same for a [`TimeOfDay`] and a [`Duration`]: three
components separated by `:`. When printing, every component is zero padded to
two digits. The hours of a duration are not bounded above, so they may need
more than two digits. A negative duration is printed with a leading `-`.

When parsing, each component may have any number of ASCII digits (including
leading zeros), but must have at least one. The components of a time of day
must be in range (`0..=23` for hours and `0..=59` otherwise). The components
of a duration may carry a leading `+` or `-` sign, but a negative component
is rejected.

# Example

```
use wallclock::{
    civil::TimeOfDay,
    fmt::clock::{ClockParser, ClockPrinter},
    Duration,
};

static PARSER: ClockParser = ClockParser::new();
static PRINTER: ClockPrinter = ClockPrinter::new();

let t = PARSER.parse_time_of_day("7:5:9")?;
assert_eq!(t, TimeOfDay::new(7, 5, 9)?);
assert_eq!(PRINTER.time_of_day_to_string(&t), "07:05:09");

let span = PARSER.parse_duration(b"100:00:01")?;
assert_eq!(span.as_secs(), 360_001);
assert_eq!(PRINTER.duration_to_string(&span), "100:00:01");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::string::String;

use crate::{
    civil::TimeOfDay,
    error::{fmt::Error as E, ErrorContext},
    fmt::{util::DecimalFormatter, Write, WriteExt},
    util::{b, parse},
    Duration, Error,
};

/// Every component is printed with at least two digits.
const FMT_TWO: DecimalFormatter = DecimalFormatter::new().minimum_digits(2);

/// A parser for the `HH:MM:SS` clock format.
///
/// This parser has no configuration. It is a type so that it can be put into
/// a `static` and so that it mirrors [`ClockPrinter`].
///
/// # Example
///
/// ```
/// use wallclock::fmt::clock::ClockParser;
///
/// let err = ClockParser::new().parse_time_of_day("10:3045").unwrap_err();
/// assert!(err.is_invalid_format());
/// assert_eq!(
///     err.to_string(),
///     "failed to parse time of day: \
///      expected three ':' separated components, but found 2",
/// );
/// ```
#[derive(Debug)]
pub struct ClockParser {
    _priv: (),
}

impl ClockParser {
    /// Create a new clock format parser.
    pub const fn new() -> ClockParser {
        ClockParser { _priv: () }
    }

    /// Parse a time of day from the given input.
    ///
    /// # Errors
    ///
    /// This returns an error when the input does not have exactly three `:`
    /// separated components, when a component is not a non-empty sequence of
    /// ASCII digits or when a component is out of range.
    pub fn parse_time_of_day<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<TimeOfDay, Error> {
        let input = input.as_ref();
        let time = self
            .parse_time_of_day_components(input)
            .context(E::ParseTimeOfDay)?;
        Ok(time)
    }

    /// Parse a duration from the given input.
    ///
    /// # Errors
    ///
    /// This returns an error when the input does not have exactly three `:`
    /// separated components, when a component is not an optionally signed
    /// non-empty sequence of ASCII digits or when a component is negative.
    /// An error is also returned if the total number of seconds does not fit
    /// into a signed 64-bit integer.
    pub fn parse_duration<I: AsRef<[u8]>>(
        &self,
        input: I,
    ) -> Result<Duration, Error> {
        let input = input.as_ref();
        let span = self
            .parse_duration_components(input)
            .context(E::ParseDuration)?;
        Ok(span)
    }

    fn parse_time_of_day_components(
        &self,
        input: &[u8],
    ) -> Result<TimeOfDay, Error> {
        let [hour, minute, second] = split_components(input)?;
        let hour =
            b::Hour::parse(hour).context(E::Component { what: "hour" })?;
        let minute = b::Minute::parse(minute)
            .context(E::Component { what: "minute" })?;
        let second = b::Second::parse(second)
            .context(E::Component { what: "second" })?;
        TimeOfDay::new(hour, minute, second)
    }

    fn parse_duration_components(
        &self,
        input: &[u8],
    ) -> Result<Duration, Error> {
        let [hours, minutes, seconds] = split_components(input)?;
        let hours = parse_signed(hours)
            .context(E::Component { what: "hours" })?;
        let minutes = parse_signed(minutes)
            .context(E::Component { what: "minutes" })?;
        let seconds = parse_signed(seconds)
            .context(E::Component { what: "seconds" })?;
        // Negative components are syntactically fine, but they are rejected
        // here as out of range values.
        Duration::new(hours, minutes, seconds)
    }
}

impl Default for ClockParser {
    fn default() -> ClockParser {
        ClockParser::new()
    }
}

/// A printer for the `HH:MM:SS` clock format.
///
/// # Example
///
/// This shows how a negative duration is printed. The magnitude is split into
/// hours, minutes and seconds and a `-` is written in front of it:
///
/// ```
/// use wallclock::{civil::TimeOfDay, fmt::clock::ClockPrinter, Duration};
///
/// let start = TimeOfDay::new(22, 0, 0)?;
/// let end = TimeOfDay::new(1, 0, 0)?;
/// let span = Duration::between(start, end);
/// assert_eq!(ClockPrinter::new().duration_to_string(&span), "-21:00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ClockPrinter {
    _priv: (),
}

impl ClockPrinter {
    /// Create a new clock format printer.
    pub const fn new() -> ClockPrinter {
        ClockPrinter { _priv: () }
    }

    /// Format a time of day into a string.
    ///
    /// This is a convenience routine for [`ClockPrinter::print_time_of_day`]
    /// with a `String`.
    pub fn time_of_day_to_string(&self, time: &TimeOfDay) -> String {
        let mut buf = String::with_capacity(8);
        // OK because writing to `String` never fails.
        self.print_time_of_day(time, &mut buf).unwrap();
        buf
    }

    /// Format a duration into a string.
    ///
    /// This is a convenience routine for [`ClockPrinter::print_duration`]
    /// with a `String`.
    pub fn duration_to_string(&self, span: &Duration) -> String {
        let mut buf = String::with_capacity(9);
        // OK because writing to `String` never fails.
        self.print_duration(span, &mut buf).unwrap();
        buf
    }

    /// Print a time of day to the writer given.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given [`Write`]
    /// implementation would fail.
    pub fn print_time_of_day<W: Write>(
        &self,
        time: &TimeOfDay,
        mut wtr: W,
    ) -> Result<(), Error> {
        wtr.write_int(&FMT_TWO, time.hour().unsigned_abs())?;
        wtr.write_char(':')?;
        wtr.write_int(&FMT_TWO, time.minute().unsigned_abs())?;
        wtr.write_char(':')?;
        wtr.write_int(&FMT_TWO, time.second().unsigned_abs())?;
        Ok(())
    }

    /// Print a duration to the writer given.
    ///
    /// The magnitude of the duration is decomposed with truncating division.
    /// That is, hours are `|secs| / 3600`, minutes are `|secs| / 60 % 60`
    /// and seconds are `|secs| % 60`. A `-` is written first when the
    /// duration is negative.
    ///
    /// # Errors
    ///
    /// This only returns an error when writing to the given [`Write`]
    /// implementation would fail.
    pub fn print_duration<W: Write>(
        &self,
        span: &Duration,
        mut wtr: W,
    ) -> Result<(), Error> {
        let secs = span.as_secs();
        if secs < 0 {
            wtr.write_char('-')?;
        }
        let magnitude = secs.unsigned_abs();
        wtr.write_int(&FMT_TWO, magnitude / 3600)?;
        wtr.write_char(':')?;
        wtr.write_int(&FMT_TWO, (magnitude / 60) % 60)?;
        wtr.write_char(':')?;
        wtr.write_int(&FMT_TWO, magnitude % 60)?;
        Ok(())
    }
}

impl Default for ClockPrinter {
    fn default() -> ClockPrinter {
        ClockPrinter::new()
    }
}

/// Splits the input into exactly three `:` separated components.
fn split_components(input: &[u8]) -> Result<[&[u8]; 3], Error> {
    let mut it = input.split(|&byte| byte == b':');
    let (Some(first), Some(second), Some(third), None) =
        (it.next(), it.next(), it.next(), it.next())
    else {
        let found = input.split(|&byte| byte == b':').count();
        return Err(Error::from(E::ExpectedThreeComponents { found }));
    };
    Ok([first, second, third])
}

/// Parses an integer with an optional leading sign.
///
/// `-0` is zero.
fn parse_signed(bytes: &[u8]) -> Result<i64, Error> {
    let (negative, digits) = parse::sign(bytes);
    let n = parse::i64(digits)?;
    Ok(if negative { -n } else { n })
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};

    use super::*;

    const PARSER: ClockParser = ClockParser::new();
    const PRINTER: ClockPrinter = ClockPrinter::new();

    #[test]
    fn parse_time_of_day_ok() {
        let t = PARSER.parse_time_of_day("00:00:00").unwrap();
        assert_eq!(t, TimeOfDay::MIN);
        let t = PARSER.parse_time_of_day("23:59:59").unwrap();
        assert_eq!(t, TimeOfDay::MAX);
        let t = PARSER.parse_time_of_day("1:2:3").unwrap();
        assert_eq!(t, TimeOfDay::constant(1, 2, 3));
        let t = PARSER.parse_time_of_day("0010:0030:0045").unwrap();
        assert_eq!(t, TimeOfDay::constant(10, 30, 45));
        let t = PARSER.parse_time_of_day(b"12:00:00").unwrap();
        assert_eq!(t, TimeOfDay::constant(12, 0, 0));
    }

    #[test]
    fn parse_time_of_day_invalid_format() {
        let inputs: &[&str] = &[
            "",
            "10",
            "10:30",
            "10:3045",
            "10:30:45:00",
            "10::45",
            ":30:45",
            "10:30:",
            "10:30:4x",
            " 10:30:45",
            "10:30:45 ",
            "+10:30:45",
            "-1:00:00",
            "10.30.45",
            "99999999999999999999:00:00",
        ];
        for input in inputs {
            let err = PARSER.parse_time_of_day(input).unwrap_err();
            assert!(err.is_invalid_format(), "{input:?}: {err}");
            assert!(!err.is_invalid_value(), "{input:?}: {err}");
        }
    }

    #[test]
    fn parse_time_of_day_invalid_value() {
        let inputs: &[&str] = &[
            "24:00:00",
            "00:60:00",
            "00:00:60",
            "255:00:00",
            "256:00:00",
            "00:00:9223372036854775807",
            "99:99:99",
        ];
        for input in inputs {
            let err = PARSER.parse_time_of_day(input).unwrap_err();
            assert!(err.is_invalid_value(), "{input:?}: {err}");
            assert!(!err.is_invalid_format(), "{input:?}: {err}");
        }
    }

    #[test]
    fn parse_time_of_day_error_messages() {
        let err = PARSER.parse_time_of_day("10:3045").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse time of day: \
             expected three ':' separated components, but found 2",
        );

        let err = PARSER.parse_time_of_day("10:30:4x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse time of day: invalid second component: \
             invalid digit, expected 0-9 but got x",
        );

        let err = PARSER.parse_time_of_day("24:00:00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse time of day: invalid hour component: \
             parameter 'hour' is not in the required range of 0..=23",
        );

        let err = PARSER.parse_time_of_day("10::00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse time of day: invalid minute component: \
             invalid number, no digits found",
        );
    }

    #[test]
    fn parse_duration_ok() {
        let span = PARSER.parse_duration("02:15:30").unwrap();
        assert_eq!(span.as_secs(), 2 * 3600 + 15 * 60 + 30);
        let span = PARSER.parse_duration("0:0:0").unwrap();
        assert_eq!(span, Duration::ZERO);
        // Components are not bounded individually for durations.
        let span = PARSER.parse_duration("25:61:61").unwrap();
        assert_eq!(span.as_secs(), 25 * 3600 + 61 * 60 + 61);
        let span = PARSER.parse_duration("+1:+0:+0").unwrap();
        assert_eq!(span.as_secs(), 3600);
        let span = PARSER.parse_duration("-0:00:00").unwrap();
        assert_eq!(span, Duration::ZERO);
    }

    #[test]
    fn parse_duration_errors() {
        let err = PARSER.parse_duration("-21:00:00").unwrap_err();
        assert!(err.is_invalid_value(), "{err}");
        assert_eq!(
            err.to_string(),
            "failed to parse duration: \
             duration component 'hours' with value -21 must not be negative",
        );

        let err = PARSER.parse_duration("00:-1:00").unwrap_err();
        assert!(err.is_invalid_value(), "{err}");

        let err = PARSER.parse_duration("00:00").unwrap_err();
        assert!(err.is_invalid_format(), "{err}");

        let err = PARSER.parse_duration("00:--1:00").unwrap_err();
        assert!(err.is_invalid_format(), "{err}");

        let err = PARSER.parse_duration("00:-:00").unwrap_err();
        assert!(err.is_invalid_format(), "{err}");

        let err = PARSER
            .parse_duration("9223372036854775807:00:00")
            .unwrap_err();
        assert!(err.is_invalid_value(), "{err}");
    }

    #[test]
    fn print_time_of_day() {
        let got = PRINTER.time_of_day_to_string(&TimeOfDay::constant(7, 5, 9));
        assert_eq!(got, "07:05:09");
        let got = PRINTER.time_of_day_to_string(&TimeOfDay::MAX);
        assert_eq!(got, "23:59:59");
        let got = PRINTER.time_of_day_to_string(&TimeOfDay::MIN);
        assert_eq!(got, "00:00:00");
    }

    #[test]
    fn print_duration() {
        let print = |secs: i64| {
            PRINTER.duration_to_string(&Duration::from_secs_signed(secs))
        };
        assert_eq!(print(0), "00:00:00");
        assert_eq!(print(59), "00:00:59");
        assert_eq!(print(3600 * 2 + 15 * 60 + 30), "02:15:30");
        assert_eq!(print(86_400), "24:00:00");
        assert_eq!(print(360_000), "100:00:00");
        assert_eq!(print(-1), "-00:00:01");
        assert_eq!(print(-75_600), "-21:00:00");
        assert_eq!(print(-3_661), "-01:01:01");
        assert_eq!(print(i64::MAX), "2562047788015215:30:07");
        assert_eq!(print(i64::MIN), "-2562047788015215:30:08");
    }

    #[test]
    fn print_to_bytes() {
        let mut buf = Vec::new();
        PRINTER
            .print_time_of_day(&TimeOfDay::constant(12, 45, 30), &mut buf)
            .unwrap();
        buf.push(b' ');
        PRINTER
            .print_duration(&Duration::from_secs_signed(-30), &mut buf)
            .unwrap();
        assert_eq!(buf, b"12:45:30 -00:00:30");
    }
}
