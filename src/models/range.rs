//! Closed address range used while subtracting, before re-summarization.

use super::address::Address;
use super::block::Block;
use crate::error::CidrError;
use std::fmt;

/// Closed interval `[lo, hi]` with `lo <= hi`. Not required to be aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddrRange<A> {
    lo: A,
    hi: A,
}

impl<A: Address> AddrRange<A> {
    /// Create a range, failing with [`CidrError::InvalidRange`] if `lo > hi`.
    pub fn new(lo: A, hi: A) -> Result<Self, CidrError> {
        if lo > hi {
            return Err(CidrError::InvalidRange {
                lo: lo.display().to_string(),
                hi: hi.display().to_string(),
            });
        }
        Ok(AddrRange { lo, hi })
    }

    pub fn lo(&self) -> A {
        self.lo
    }

    pub fn hi(&self) -> A {
        self.hi
    }

    pub fn contains(&self, addr: A) -> bool {
        self.lo <= addr && addr <= self.hi
    }

    pub fn intersects(&self, other: &AddrRange<A>) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl<A: Address> From<Block<A>> for AddrRange<A> {
    fn from(block: Block<A>) -> Self {
        AddrRange {
            lo: block.first(),
            hi: block.last(),
        }
    }
}

impl<A: Address> fmt::Display for AddrRange<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.lo.display(), self.hi.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted() {
        assert!(AddrRange::new(5u32, 5).is_ok());
        let err = AddrRange::new(6u32, 5).unwrap_err();
        assert_eq!(err.to_string(), "invalid range: lo 0.0.0.6 is above hi 0.0.0.5");
    }

    #[test]
    fn test_from_block() {
        let block: Block<u32> = "10.0.16.0/23".parse().unwrap();
        let range = AddrRange::from(block);
        assert_eq!(range.to_string(), "10.0.16.0-10.0.17.255");
        assert!(range.contains(block.last()));
        assert!(range.intersects(&AddrRange::new(0, block.first()).unwrap()));
        assert!(!range.intersects(&AddrRange::new(0, block.first() - 1).unwrap()));
    }
}
