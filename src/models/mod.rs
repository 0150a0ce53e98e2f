//! Address, block and range value types.
//!
//! - [`Address`] - fixed-width unsigned address arithmetic
//! - [`Block`] - canonical CIDR block
//! - [`AddrRange`] - closed address range

mod address;
mod block;
mod range;

// Re-export public types
pub use address::{
    compare, max_aligned_prefix, predecessor, successor, AddrDisplay, Address,
};
pub use block::{first_address, last_address, Block, Ipv4Block, Ipv6Block};
pub use range::AddrRange;
