pub mod async_ext;
pub mod chain;
pub mod convert;
pub mod types;
