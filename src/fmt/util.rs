/// A simple formatter for converting unsigned integers to ASCII byte strings.
///
/// This avoids going through the formatting machinery, which is overkill for
/// writing a handful of zero padded clock components.
///
/// Signs are not handled here. Callers print a sign themselves and then print
/// the magnitude of the number with this formatter.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    minimum_digits: u8,
}

impl DecimalFormatter {
    /// Creates a new decimal formatter using the default configuration.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { minimum_digits: 0 }
    }

    /// Format the given value using this configuration as a decimal ASCII
    /// number.
    #[cfg(test)]
    pub(crate) const fn format(&self, value: u64) -> Decimal {
        Decimal::new(self, value)
    }

    /// The minimum number of digits that this number should be formatted with.
    /// If the number would have fewer digits than this, then it is padded out
    /// with zeros until the minimum is reached.
    ///
    /// The minimum number of digits is capped at the maximum number of digits
    /// for a u64 value (which is 20).
    pub(crate) const fn minimum_digits(
        self,
        mut digits: u8,
    ) -> DecimalFormatter {
        if digits > Decimal::MAX_U64_DIGITS {
            digits = Decimal::MAX_U64_DIGITS;
        }
        DecimalFormatter { minimum_digits: digits }
    }
}

impl Default for DecimalFormatter {
    fn default() -> DecimalFormatter {
        DecimalFormatter::new()
    }
}

/// A formatted decimal number that can be converted to a sequence of bytes.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_U64_DIGITS as usize],
    start: u8,
}

impl Decimal {
    /// Discovered via `u64::MAX.to_string().len()`.
    const MAX_U64_DIGITS: u8 = 20;

    /// Using the given formatter, turn the value given into a decimal
    /// representation using ASCII bytes.
    pub(crate) const fn new(formatter: &DecimalFormatter, value: u64) -> Decimal {
        let mut value = value;
        let mut decimal = Decimal {
            buf: [0; Self::MAX_U64_DIGITS as usize],
            start: Self::MAX_U64_DIGITS,
        };
        loop {
            decimal.start -= 1;

            let digit = (value % 10) as u8;
            value /= 10;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            if value == 0 {
                break;
            }
        }
        while decimal.len() < formatter.minimum_digits {
            decimal.start -= 1;
            decimal.buf[decimal.start as usize] = b'0';
        }
        decimal
    }

    /// Returns the total number of ASCII digits used to represent this
    /// decimal number.
    const fn len(&self) -> u8 {
        Self::MAX_U64_DIGITS - self.start
    }

    /// Returns the ASCII representation of this decimal as a byte slice.
    ///
    /// The slice returned is guaranteed to be valid ASCII.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..]
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: This is safe because all bytes written to `self.buf` are
        // ASCII digits, and thus, any subsequence is guaranteed to be valid
        // UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        let x = DecimalFormatter::new().format(u64::MAX);
        assert_eq!(x.as_str(), "18446744073709551615");

        let x = DecimalFormatter::new().format(0);
        assert_eq!(x.as_str(), "0");

        let x = DecimalFormatter::new().minimum_digits(2).format(0);
        assert_eq!(x.as_str(), "00");

        let x = DecimalFormatter::new().minimum_digits(2).format(7);
        assert_eq!(x.as_str(), "07");

        let x = DecimalFormatter::new().minimum_digits(2).format(123);
        assert_eq!(x.as_str(), "123");

        let x = DecimalFormatter::new().minimum_digits(25).format(1);
        assert_eq!(x.as_str(), "00000000000000000001");
    }
}
