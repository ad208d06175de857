pub mod formatters;
pub mod scanner;
pub mod tags;
pub mod types;

pub use scanner::{Scanner, scan};
