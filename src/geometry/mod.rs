mod types;

pub use types::{line_length, Point};
