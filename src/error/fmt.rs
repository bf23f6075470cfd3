use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Component { what: &'static str },
    ExpectedThreeComponents { found: usize },
    ParseDuration,
    ParseTimeOfDay,
    StdFmtWriteAdapter,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            Component { what } => write!(f, "invalid {what} component"),
            ExpectedThreeComponents { found } => write!(
                f,
                "expected three ':' separated components, \
                 but found {found}",
            ),
            ParseDuration => f.write_str("failed to parse duration"),
            ParseTimeOfDay => f.write_str("failed to parse time of day"),
            StdFmtWriteAdapter => {
                f.write_str("an error occurred when formatting an argument")
            }
        }
    }
}
