//! Utility functions

mod log2;

pub use log2::{ceil_log2, floor_log2};
