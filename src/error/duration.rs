use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    AddOverflowed,
    ComponentsOverflowed,
    FromStdOverflowed,
    NegateOverflowed,
    NegativeComponent { what: &'static str, given: i64 },
    NegativeToStd,
    SubOverflowed,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            AddOverflowed => {
                f.write_str("adding durations overflowed 64-bit seconds")
            }
            ComponentsOverflowed => f.write_str(
                "duration components add up to more seconds \
                 than fit into a 64-bit integer",
            ),
            FromStdOverflowed => f.write_str(
                "`std::time::Duration` has more seconds \
                 than fit into a signed 64-bit integer",
            ),
            NegateOverflowed => f.write_str(
                "negating the minimum duration overflowed 64-bit seconds",
            ),
            NegativeComponent { what, given } => write!(
                f,
                "duration component '{what}' with value {given} \
                 must not be negative",
            ),
            NegativeToStd => f.write_str(
                "cannot convert a negative duration \
                 to an unsigned `std::time::Duration`",
            ),
            SubOverflowed => {
                f.write_str("subtracting durations overflowed 64-bit seconds")
            }
        }
    }
}
