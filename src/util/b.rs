/*!
A module for the boundaries of the integer components of a time of day.

Each boundary is a zero sized type implementing [`Bounds`]. Checking a value
against a boundary produces a [`BoundsError`] that names the component and
its permitted range, which is how every range violation in this crate is
reported.
*/

use crate::Error;

macro_rules! define_bounds {
    ($((
        $name:ident,
        $ty:ty,
        $what:expr,
        $min:expr,
        $max:expr $(,)?
    )),* $(,)?) => {
        $(
            pub(crate) struct $name(());

            impl Bounds for $name {
                const WHAT: &'static str = $what;
                const MIN: Self::Primitive = $min;
                const MAX: Self::Primitive = $max;
                type Primitive = $ty;

                #[cold]
                fn error() -> BoundsError {
                    BoundsError::$name(RawBoundsError::new())
                }
            }

            // Not every bound is parsed or checked by name.
            #[allow(dead_code)]
            impl $name {
                #[inline]
                pub(crate) fn check(n: impl Into<i64>) -> Result<$ty, BoundsError> {
                    <$name as Bounds>::check(n)
                }

                #[inline]
                pub(crate) fn parse(bytes: &[u8]) -> Result<$ty, Error> {
                    <$name as Bounds>::parse(bytes)
                }

                /// Returns true when the given value is within these bounds.
                ///
                /// This is usable in a `const` context.
                #[inline]
                pub(crate) const fn contains(n: $ty) -> bool {
                    $min <= n && n <= $max
                }
            }
        )*

        /// An error that indicates a value is out of its intended range.
        #[derive(Clone, Debug)]
        pub(crate) enum BoundsError {
            $($name(RawBoundsError<$name>),)*
        }

        impl core::fmt::Display for BoundsError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match *self {
                    $(BoundsError::$name(ref err) => err.fmt(f),)*
                }
            }
        }
    }
}

define_bounds! {
    (Hour, i8, "hour", 0, 23),
    (Minute, i8, "minute", 0, 59),
    (Second, i8, "second", 0, 59),
    (SecondOfDay, i32, "second-of-day", 0, 86_399),
}

/// An interface for defining boundaries on integer values.
pub(crate) trait Bounds: Sized {
    /// A short human readable description of the values represented by these
    /// bounds.
    const WHAT: &'static str;

    /// The minimum boundary value.
    const MIN: Self::Primitive;

    /// The maximum boundary value.
    const MAX: Self::Primitive;

    /// The primitive integer representation for this boundary type.
    ///
    /// This is generally the smallest primitive integer type that fits the
    /// minimum and maximum allowed values.
    type Primitive: Primitive;

    /// Create an error when a value is outside the bounds for this type.
    fn error() -> BoundsError;

    /// Converts the 64-bit integer provided into the primitive representation
    /// of these bounds.
    ///
    /// # Errors
    ///
    /// This returns an error if the given integer does not fit in the bounds
    /// prescribed by this trait implementation.
    #[inline]
    fn check(n: impl Into<i64>) -> Result<Self::Primitive, BoundsError> {
        let n = n.into();
        if !(Self::MIN.as_i64() <= n && n <= Self::MAX.as_i64()) {
            return Err(Self::error());
        }
        Ok(Self::Primitive::from_i64(n))
    }

    /// Parses a 64-bit integer from the beginning to the end of the given
    /// slice of bytes.
    ///
    /// Note that this can never parse a negative integer since it doesn't
    /// look for a sign. On success, the integer returned is always positive.
    ///
    /// # Errors
    ///
    /// If the given slice is not a valid integer (i.e., overflow or contains
    /// anything other than `[0-9]`) or is not in the bounds for this trait
    /// implementation, then an error is returned.
    ///
    /// Note that the error can either be a parsing error or it can be a
    /// boundary error.
    #[inline]
    fn parse(bytes: &[u8]) -> Result<Self::Primitive, Error> {
        Ok(Self::check(crate::util::parse::i64(bytes)?)?)
    }
}

/// A simple trait for making `int as int` usable in a generic context.
///
/// All of these methods require callers to ensure the cast is correct.
pub(crate) trait Primitive:
    Clone + Copy + core::fmt::Debug + core::fmt::Display
{
    fn as_i64(self) -> i64;
    fn from_i64(n: i64) -> Self;
}

macro_rules! impl_primitive {
    ($($intty:ty),*) => {
        $(
            impl Primitive for $intty {
                fn as_i64(self) -> i64 { self as i64 }
                fn from_i64(n: i64) -> Self { n as $intty }
            }
        )*
    }
}

impl_primitive!(i8, i32);

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Error {
        Error::bounds(err)
    }
}

impl crate::error::IntoError for BoundsError {
    fn into_error(self) -> Error {
        self.into()
    }
}

pub(crate) struct RawBoundsError<B>(core::marker::PhantomData<B>);

impl<B> RawBoundsError<B> {
    const fn new() -> RawBoundsError<B> {
        RawBoundsError(core::marker::PhantomData)
    }
}

impl<B> Clone for RawBoundsError<B> {
    fn clone(&self) -> RawBoundsError<B> {
        RawBoundsError::new()
    }
}

impl<B, P> core::fmt::Debug for RawBoundsError<B>
where
    B: Bounds<Primitive = P>,
    P: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RawBoundsError")
            .field("what", &B::WHAT)
            .field("min", &B::MIN)
            .field("max", &B::MAX)
            .finish()
    }
}

impl<B, P> core::fmt::Display for RawBoundsError<B>
where
    B: Bounds<Primitive = P>,
    P: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "parameter '{what}' is not in the required range of {min}..={max}",
            what = B::WHAT,
            min = B::MIN,
            max = B::MAX,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn size_of_bounds_error() {
        // It's okay if this grows, but a `BoundsError` is just a bunch of
        // variants of ZSTs, so it should stay tiny.
        assert_eq!(1, core::mem::size_of::<BoundsError>());
    }

    #[test]
    fn basic_error_functionality() {
        let err = Hour::check(24).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter 'hour' is not in the required range of 0..=23",
        );
        let err = Minute::check(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parameter 'minute' is not in the required range of 0..=59",
        );
    }

    #[test]
    fn contains() {
        assert!(Hour::contains(0));
        assert!(Hour::contains(23));
        assert!(!Hour::contains(24));
        assert!(!Second::contains(-1));
        assert!(SecondOfDay::contains(86_399));
        assert!(!SecondOfDay::contains(86_400));
    }

    #[test]
    fn parse() {
        assert_eq!(Minute::parse(b"59").unwrap(), 59);
        assert_eq!(Minute::parse(b"007").unwrap(), 7);
        assert!(Minute::parse(b"60").unwrap_err().is_invalid_value());
        assert!(Minute::parse(b"6o").unwrap_err().is_invalid_format());
    }
}
