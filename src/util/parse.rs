use crate::{error::util::ParseIntError, Error};

/// Parses an `i64` number from the beginning to the end of the given slice of
/// ASCII digit characters.
///
/// If any byte in the given slice is not `[0-9]`, then this returns an error.
/// Similarly, if the number parsed does not fit into a `i64`, then this
/// returns an error. Notably, this routine does not permit parsing a negative
/// integer. (We use `i64` because everything in this crate uses signed
/// integers, and because a higher level parser will deal with any signs.)
#[inline]
pub(crate) fn i64(bytes: &[u8]) -> Result<i64, Error> {
    if bytes.is_empty() {
        return Err(Error::from(ParseIntError::NoDigitsFound));
    }
    let mut n: i64 = 0;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(Error::from(ParseIntError::InvalidDigit(byte)));
        }
        let digit = i64::from(byte - b'0');
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or(ParseIntError::TooBig)?;
    }
    Ok(n)
}

/// Splits a leading `+` or `-` off of the given bytes.
///
/// The boolean returned is `true` when the sign is negative. When there is
/// no sign, the input is returned unchanged and the sign is positive.
pub(crate) fn sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.split_first() {
        Some((&b'-', rest)) => (true, rest),
        Some((&b'+', rest)) => (false, rest),
        _ => (false, bytes),
    }
}
