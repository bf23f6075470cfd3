/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Provides a convenient `Display` and `Debug` implementation for a `u8`.
///
/// Printable ASCII is emitted as is. Everything else, including non-ASCII
/// bytes that are part of a UTF-8 encoded codepoint, is emitted as a hex
/// escape sequence.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0 == b' ' || self.0.is_ascii_graphic() {
            write!(f, "{}", char::from(self.0))
        } else {
            write!(f, r"\x{:02X}", self.0)
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"")?;
        core::fmt::Display::fmt(self, f)?;
        write!(f, "\"")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use super::*;

    #[test]
    fn bytes() {
        assert_eq!(Byte(b'a').to_string(), "a");
        assert_eq!(Byte(b' ').to_string(), " ");
        assert_eq!(Byte(b'\n').to_string(), r"\x0A");
        assert_eq!(Byte(0xFF).to_string(), r"\xFF");
        assert_eq!(format!("{:?}", Byte(b':')), r#"":""#);
    }
}
