use alloc::{boxed::Box, sync::Arc};

use crate::util::b::BoundsError;

pub(crate) mod duration;
pub(crate) mod fmt;
pub(crate) mod util;

/// An error that can occur in this crate.
///
/// There are two broad categories of errors that callers usually care about:
///
/// * An input string did not have the `HH:MM:SS` shape, or one of its
/// components was not a number. See [`Error::is_invalid_format`].
/// * A number was outside of its permitted range. For example, an hour of
/// `24` or a negative duration component. See [`Error::is_invalid_value`].
///
/// Checked arithmetic on durations can also fail when the result doesn't fit
/// into a 64-bit number of seconds. See [`Error::is_overflow`].
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the
/// `std` feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type only provides the `is_*`
/// predicates. They are not exhaustive: an error constructed via
/// [`Error::from_args`] returns `false` for all of them.
///
/// # Design
///
/// There is only one error type for all operations in this crate. Internally,
/// an error may be caused by another error, which forms a chain. The `Display`
/// impl prints the whole chain, starting with the highest level context. The
/// predicates always look at the root cause, so attaching context never
/// changes how an error is classified.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and to keep
    /// its size equal to one word.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// assert!(!err.is_invalid_format());
    /// assert!(!err.is_invalid_value());
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from text that does not have
    /// the `HH:MM:SS` shape.
    ///
    /// This includes text with the wrong number of `:` separators, empty
    /// components and components containing anything other than ASCII digits
    /// (with the exception of a leading sign on duration components). A
    /// number too big to fit into a 64-bit integer is also a format error.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::{civil::TimeOfDay, Duration};
    ///
    /// assert!(TimeOfDay::parse("10:3045").unwrap_err().is_invalid_format());
    /// assert!(TimeOfDay::parse("10:30:4x").unwrap_err().is_invalid_format());
    /// assert!(Duration::parse("1:2:3:4").unwrap_err().is_invalid_format());
    /// assert!(Duration::parse("::").unwrap_err().is_invalid_format());
    /// ```
    pub fn is_invalid_format(&self) -> bool {
        use self::{fmt::Error as FmtError, ErrorKind::*};

        matches!(
            *self.root().kind(),
            ParseInt(_) | Fmt(FmtError::ExpectedThreeComponents { .. })
        )
    }

    /// Returns true when this error originated from a number being out of its
    /// permitted range.
    ///
    /// For a time of day, the hour must be in `0..=23` and the minute and
    /// second must be in `0..=59`. For a duration built from components, every
    /// component must be non-negative and the total must fit into a 64-bit
    /// number of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::{civil::TimeOfDay, Duration};
    ///
    /// assert!(TimeOfDay::new(24, 0, 0).unwrap_err().is_invalid_value());
    /// assert!(TimeOfDay::new(10, 60, 0).unwrap_err().is_invalid_value());
    /// assert!(TimeOfDay::parse("10:30:60").unwrap_err().is_invalid_value());
    /// assert!(Duration::new(0, -1, 0).unwrap_err().is_invalid_value());
    /// assert!(Duration::parse("-1:00:00").unwrap_err().is_invalid_value());
    /// ```
    pub fn is_invalid_value(&self) -> bool {
        use self::{duration::Error as DurationError, ErrorKind::*};

        matches!(
            *self.root().kind(),
            Bounds(_)
                | Duration(
                    DurationError::NegativeComponent { .. }
                        | DurationError::ComponentsOverflowed
                        | DurationError::NegativeToStd
                )
        )
    }

    /// Returns true when this error originated from checked duration
    /// arithmetic producing a value that does not fit into a 64-bit number
    /// of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use wallclock::Duration;
    ///
    /// let one = Duration::from_secs(1)?;
    /// assert!(Duration::MAX.checked_add(one).unwrap_err().is_overflow());
    /// assert!(Duration::MIN.checked_sub(one).unwrap_err().is_overflow());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_overflow(&self) -> bool {
        use self::{duration::Error as DurationError, ErrorKind::*};

        matches!(
            *self.root().kind(),
            Duration(
                DurationError::AddOverflowed
                    | DurationError::SubOverflowed
                    | DurationError::NegateOverflowed
                    | DurationError::FromStdOverflowed
            )
        )
    }
}

impl Error {
    /// Creates a new error from a bounds check failure.
    #[inline(never)]
    #[cold]
    pub(crate) fn bounds(err: BoundsError) -> Error {
        Error::from(ErrorKind::Bounds(err))
    }

    /// A convenience constructor for building an I/O error.
    ///
    /// This returns an error that is just a simple wrapper around the
    /// `std::io::Error` type.
    #[cfg(feature = "std")]
    #[inline(never)]
    #[cold]
    pub(crate) fn io(err: std::io::Error) -> Error {
        Error::from(ErrorKind::IO(IOError { err }))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        // OK because a consequent is always created right before it is
        // attached, so the `Arc` has exactly one reference.
        let inner = Arc::get_mut(&mut err.inner)
            .expect("consequent error must not be shared");
        assert!(inner.cause.is_none(), "cause of consequence must be `None`");
        inner.cause = Some(self);
        err
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Bounds(BoundsError),
    Duration(self::duration::Error),
    Fmt(self::fmt::Error),
    #[cfg(feature = "std")]
    IO(IOError),
    ParseInt(self::util::ParseIntError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Bounds(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            #[cfg(feature = "std")]
            IO(ref err) => err.fmt(f),
            ParseInt(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits users of
/// this crate to manifest their own `Error` values from an arbitrary message.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// A `std::io::Error`.
///
/// This is a simple wrapper around `std::io::Error`, used when printing to a
/// `std::io::Write` implementation fails.
#[cfg(feature = "std")]
#[derive(Debug)]
struct IOError {
    err: std::io::Error,
}

#[cfg(feature = "std")]
impl core::fmt::Display for IOError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.err, f)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls. The structured error enums in the
/// submodules of this module implement it, which keeps them out of the
/// public API.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    ///
    /// Note that if an `Error` is given for `kind`, then this panics if it has
    /// a cause. (Because the cause would otherwise be dropped. An error causal
    /// chain is just a linked list, not a tree.)
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    #[inline]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
