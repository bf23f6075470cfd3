/*!
Configurable support for printing and parsing the `HH:MM:SS` text form.

Most uses of this crate don't need this module directly. Namely,
[`civil::TimeOfDay`](crate::civil::TimeOfDay) and [`Duration`](crate::Duration)
both implement `core::fmt::Display` and `core::str::FromStr` in terms of the
parser and printer in the [`clock`] sub-module.

This module is useful when one wants to parse from a `&[u8]`, or print into a
buffer without going through `core::fmt` (for example, a `Vec<u8>` or a
`std::io::Write` implementation).

# Example

```
use wallclock::{civil::TimeOfDay, fmt::clock::ClockPrinter};

const PRINTER: ClockPrinter = ClockPrinter::new();

let t = TimeOfDay::new(7, 5, 9)?;
let mut buf = Vec::new();
PRINTER.print_time_of_day(&t, &mut buf)?;
assert_eq!(buf, b"07:05:09");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{string::String, vec::Vec};

use crate::{error::fmt::Error as E, Error};

use self::util::{Decimal, DecimalFormatter};

pub mod clock;
#[cfg(feature = "serde")]
mod serde;
mod util;

/// A trait for printing the `HH:MM:SS` text form.
///
/// This is implemented for `String` and `Vec<u8>` out of the box. For
/// `core::fmt::Write` implementations, use [`StdFmtWrite`]. For
/// `std::io::Write` implementations, use [`StdIoWrite`].
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the write
    /// succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write> Write for &mut W {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `std::io::Write` implementations with [`Write`].
///
/// # Example
///
/// ```
/// use wallclock::{fmt::{clock::ClockPrinter, StdIoWrite}, Duration};
///
/// let mut out = Vec::new();
/// let span = Duration::new(1, 2, 3)?;
/// ClockPrinter::new().print_duration(&span, StdIoWrite(&mut out))?;
/// assert_eq!(out, b"01:02:03");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct StdIoWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdIoWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_all(string.as_bytes()).map_err(Error::io)
    }
}

/// An adapter for using `core::fmt::Write` implementations with [`Write`].
///
/// This is what the `Display` impls of this crate's types use internally.
#[derive(Clone, Debug)]
pub struct StdFmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for StdFmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0
            .write_str(string)
            .map_err(|_| Error::from(E::StdFmtWriteAdapter))
    }
}

/// Internal helpers for writing integers through a [`Write`].
trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<u64>,
    ) -> Result<(), Error> {
        self.write_decimal(&Decimal::new(formatter, n.into()))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> Result<(), Error> {
        self.write_str(decimal.as_str())
    }
}

impl<W: Write> WriteExt for W {}
