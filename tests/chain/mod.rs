pub mod delayed;
pub mod usage;
