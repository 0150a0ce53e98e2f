//! CIDR subtraction: source blocks minus excluded blocks, re-summarized into
//! the minimal list of canonical CIDR blocks.
//!
//! ```
//! use cidr_subtract::{subtract, Ipv4Block};
//!
//! let sources: Vec<Ipv4Block> = vec!["10.0.0.0/28".parse().unwrap()];
//! let excludes: Vec<Ipv4Block> = vec!["10.0.0.4/30".parse().unwrap()];
//! let kept: Vec<String> = subtract(&sources, &excludes)
//!     .unwrap()
//!     .iter()
//!     .map(|b| b.to_string())
//!     .collect();
//! assert_eq!(kept, vec!["10.0.0.0/30", "10.0.0.8/29"]);
//! ```

pub mod config;
pub mod error;
pub mod job;
pub mod models;
pub mod processing;

pub use error::{BlockSet, CidrError};
pub use models::{
    compare, first_address, last_address, predecessor, successor, AddrRange, Address, Block,
    Ipv4Block, Ipv6Block,
};
pub use processing::{
    subtract, subtract_parallel, subtract_range, subtract_with_trace, summarize, summarize_range,
    SweepEvent,
};
