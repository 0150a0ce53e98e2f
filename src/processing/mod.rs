//! Subtraction and summarization logic.
//!
//! - [`subtractor`] - one source range minus a list of exclusion ranges
//! - [`summarizer`] - range to minimal CIDR block list
//! - [`driver`] - sorted sweep of source blocks against exclusion blocks

mod driver;
mod subtractor;
mod summarizer;

// Re-export public functions
pub use driver::{
    check_disjoint, sort_blocks, subtract, subtract_parallel, subtract_with_trace, SweepEvent,
};
pub use subtractor::subtract_range;
pub use summarizer::{summarize, summarize_range};
