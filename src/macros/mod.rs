//! Macros for building records and for internal step tracing.
//!
//! - [`macro@crate::record`] builds a [`Record`](crate::Record) literal.
//!
//! # Examples
//!
//! ```
//! use chain_rail::record;
//!
//! let user = record! { "name" => "alice", "role" => "admin" };
//! assert_eq!(user.get("role"), Some(&"admin"));
//! ```

/// Builds a [`Record`](crate::Record) from `key => value` pairs.
///
/// Keys are anything convertible into `Cow<'static, str>`. A repeated key keeps
/// its first position and the last value.
///
/// # Examples
///
/// ```
/// use chain_rail::{record, Record};
///
/// let empty: Record<u8> = record! {};
/// assert!(empty.is_empty());
///
/// let scores = record! { "a" => 2, "b" => 3, "a" => 4 };
/// assert_eq!(scores.keys().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(scores.get("a"), Some(&4));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Record::new()$(.with($key, $value))+
    };
}

/// Emits a `trace` event when the `tracing` feature is enabled; expands to
/// nothing otherwise.
macro_rules! trace_step {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)+);
    }};
}

pub(crate) use trace_step;
