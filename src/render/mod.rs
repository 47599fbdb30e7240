//! Output rendering

pub mod merged;

pub use merged::{marker_line, MergedWriter};
