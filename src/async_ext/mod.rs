//! Future adapters used by chains.
//!
//! - [`CatchUnwind`] turns a panic raised while polling into a captured
//!   [`Panic`](crate::types::Panic); it backs [`convert`](crate::convert::convert).
//! - `OutcomeSpanExt` / `LoggedOutcome` (with the `tracing` feature) emit a
//!   `debug` event when an outcome settles with `Err`.
//!
//! # Feature Flag
//!
//! The tracing adapters require the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! chain-rail = { version = "0.3", features = ["tracing"] }
//! ```

mod catch_unwind;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use catch_unwind::CatchUnwind;
#[cfg(feature = "tracing")]
pub use tracing_ext::{LoggedOutcome, OutcomeSpanExt};
