//! CIDR block: an aligned base address with a prefix length.

use super::address::Address;
use super::range::AddrRange;
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A canonical CIDR block covering `[first, last]`.
///
/// The base never has host bits set; [`Block::new`] rejects such input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block<A> {
    base: A,
    prefix_len: u8,
}

/// An IPv4 block.
pub type Ipv4Block = Block<u32>;
/// An IPv6 block.
pub type Ipv6Block = Block<u128>;

impl<A: Address> Block<A> {
    /// Create a block, failing with [`CidrError::MisalignedBlock`] when `base`
    /// has bits set inside the host part of `prefix_len`.
    pub fn new(base: A, prefix_len: u8) -> Result<Self, CidrError> {
        let hostmask = A::hostmask(prefix_len)?;
        if base & hostmask != A::ZERO {
            return Err(CidrError::MisalignedBlock {
                block: format!("{}/{}", base.display(), prefix_len),
            });
        }
        Ok(Block { base, prefix_len })
    }

    /// The block covering the whole address space.
    pub fn all() -> Self {
        Block {
            base: A::ZERO,
            prefix_len: 0,
        }
    }

    pub fn base(&self) -> A {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Lowest address in the block.
    pub fn first(&self) -> A {
        self.base
    }

    /// Highest address in the block. OR never carries, so this cannot overflow.
    pub fn last(&self) -> A {
        // prefix_len was validated in `new`
        let hostmask = A::hostmask(self.prefix_len).unwrap_or(A::ZERO);
        self.base | hostmask
    }

    pub fn contains(&self, addr: A) -> bool {
        self.first() <= addr && addr <= self.last()
    }

    pub fn intersects(&self, other: &Block<A>) -> bool {
        self.first() <= other.last() && other.first() <= self.last()
    }

    pub fn to_range(&self) -> AddrRange<A> {
        AddrRange::from(*self)
    }
}

/// Lowest address of `block`.
pub fn first_address<A: Address>(block: &Block<A>) -> A {
    block.first()
}

/// Highest address of `block`.
pub fn last_address<A: Address>(block: &Block<A>) -> A {
    block.last()
}

/// Ascending by first address; when bases coincide the narrower block (longer
/// prefix) sorts first.
impl<A: Address> Ord for Block<A> {
    fn cmp(&self, other: &Block<A>) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| other.prefix_len.cmp(&self.prefix_len))
    }
}

impl<A: Address> PartialOrd for Block<A> {
    fn partial_cmp(&self, other: &Block<A>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Address> fmt::Display for Block<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base.display(), self.prefix_len)
    }
}

impl<A: Address> FromStr for Block<A> {
    type Err = CidrError;

    /// Parse `addr/prefix`. The base must already be aligned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| CidrError::Parse(format!("Invalid address/prefix {s}")))?;
        let base = A::parse_addr(addr)?;
        let prefix_len: u8 = prefix
            .trim()
            .parse()
            .map_err(|_| CidrError::Parse(format!("Invalid prefix length {prefix}")))?;
        Block::new(base, prefix_len)
    }
}

impl<A: Address> Serialize for Block<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, A: Address> Deserialize<'de> for Block<A> {
    fn deserialize<D>(deserializer: D) -> Result<Block<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
