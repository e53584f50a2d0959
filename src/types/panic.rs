//! Captured defects.
//!
//! A panic inside a chain is a defect and unwinds to whoever polls the chain.
//! The one exception is [`convert`](crate::convert::convert), which captures it
//! as a [`Panic`] and hands it to its `catch` mapper inside a [`Thrown`].

use core::any::Any;
use core::fmt;

/// The payload of a panic captured by [`convert`](crate::convert::convert).
///
/// The original payload is kept intact, so it can be inspected with
/// [`message`](Self::message) or re-raised unchanged with [`resume`](Self::resume).
///
/// # Examples
///
/// ```
/// use chain_rail::types::Panic;
///
/// let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
/// let panic = Panic::new(payload);
/// assert_eq!(panic.message(), Some("boom"));
/// ```
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    /// Wraps a payload obtained from `std::panic::catch_unwind`.
    #[inline]
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a `&str` or a `String`.
    ///
    /// This covers every panic raised by `panic!` with a format string.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the original panic.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic").field("message", &self.message()).finish()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {}", message),
            None => f.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

/// What went wrong inside the protected region of [`convert`](crate::convert::convert).
///
/// `Error` is the error the attempted future returned; `Panic` is a panic raised
/// while building or polling that future.
///
/// # Examples
///
/// ```
/// use chain_rail::types::Thrown;
///
/// let thrown: Thrown<&str> = Thrown::Error("timed out");
/// assert!(!thrown.is_panic());
/// assert_eq!(thrown.into_error(), Some("timed out"));
/// ```
#[derive(Debug)]
pub enum Thrown<X> {
    /// The attempt resolved to `Err(X)`.
    Error(X),
    /// The attempt panicked.
    Panic(Panic),
}

impl<X> Thrown<X> {
    /// Returns `true` if the attempt panicked.
    #[inline]
    pub fn is_panic(&self) -> bool {
        matches!(self, Thrown::Panic(_))
    }

    /// Returns the returned error, discarding a panic.
    #[inline]
    pub fn into_error(self) -> Option<X> {
        match self {
            Thrown::Error(error) => Some(error),
            Thrown::Panic(_) => None,
        }
    }

    /// Maps the returned error, leaving a panic untouched.
    #[inline]
    pub fn map_error<Y, F>(self, f: F) -> Thrown<Y>
    where
        F: FnOnce(X) -> Y,
    {
        match self {
            Thrown::Error(error) => Thrown::Error(f(error)),
            Thrown::Panic(panic) => Thrown::Panic(panic),
        }
    }
}

impl<X: fmt::Display> fmt::Display for Thrown<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrown::Error(error) => error.fmt(f),
            Thrown::Panic(panic) => panic.fmt(f),
        }
    }
}

impl<X> std::error::Error for Thrown<X>
where
    X: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Thrown::Error(error) => Some(error),
            Thrown::Panic(panic) => Some(panic),
        }
    }
}
