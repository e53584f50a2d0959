//! Core traits for chain composition.
//!
//! This module defines the seams every chain is built from:
//!
//! - [`Step`]: consumes the previous outcome plus the context and produces the next outcome
//! - [`Callback`]: consumes a success value (or an error) plus the context
//! - [`Merge`]: key-union-with-override merging for accumulated data and contexts
//!
//! Closures implement [`Step`] and [`Callback`] directly, so most chains never
//! name these traits.
//!
//! # Examples
//!
//! ```
//! use chain_rail::traits::Merge;
//! use chain_rail::record;
//!
//! let context = ().merge(record! { "a" => 2 }).merge(record! { "b" => 3 });
//! assert_eq!(context, record! { "a" => 2, "b" => 3 });
//! ```

pub mod merge;
pub mod step;

pub use merge::Merge;
pub use step::{Callback, Step};
