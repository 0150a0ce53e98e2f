//! Range to CIDR summarization.
//!
//! Converts an arbitrary contiguous range into the minimal ascending list of
//! canonical blocks covering it exactly.

use crate::error::CidrError;
use crate::models::{max_aligned_prefix, successor, AddrRange, Address, Block};

/// Summarize `[lo, hi]` into canonical blocks.
///
/// Fails with [`CidrError::InvalidRange`] if `lo > hi`.
pub fn summarize<A: Address>(lo: A, hi: A) -> Result<Vec<Block<A>>, CidrError> {
    summarize_range(AddrRange::new(lo, hi)?)
}

/// Summarize `range` into the unique minimal ascending list of canonical
/// blocks whose union is exactly `range`.
pub fn summarize_range<A: Address>(range: AddrRange<A>) -> Result<Vec<Block<A>>, CidrError> {
    let mut blocks = Vec::new();
    let mut lo = range.lo();

    loop {
        let block = biggest_block_at(lo, range.hi())?;
        blocks.push(block);
        if block.last() >= range.hi() {
            break;
        }
        // block.last < range.hi <= MAX
        lo = successor(block.last())?;
    }

    log::trace!("summarized {range} into {} block(s)", blocks.len());
    Ok(blocks)
}

/// Find the biggest block starting at `lo` that ends at or below `hi`.
///
/// The prefix is constrained by:
/// 1. alignment - `lo` must be a valid base for the prefix
/// 2. the block must not reach past `hi`
fn biggest_block_at<A: Address>(lo: A, hi: A) -> Result<Block<A>, CidrError> {
    debug_assert!(lo <= hi, "lo[{lo:?}] > hi[{hi:?}] should never happen.");

    let mut prefix_len = max_aligned_prefix(lo);
    // at prefix_len == BITS the hostmask is empty and lo | 0 == lo <= hi
    while lo | A::hostmask(prefix_len)? > hi {
        prefix_len += 1;
    }
    Block::new(lo, prefix_len)
}


#[cfg(test)]
mod properties {
    use super::*;
    use quickcheck_macros::quickcheck;

    /// Every block is the widest aligned block that still fits the range.
    fn is_maximal(block: &Block<u32>, lo: u32, hi: u32) -> bool {
        if block.prefix_len() == 0 {
            return true;
        }
        let parent_prefix = block.prefix_len() - 1;
        let parent_mask = u32::netmask(parent_prefix).unwrap();
        let parent_base = block.base() & parent_mask;
        let parent_last = parent_base | u32::hostmask(parent_prefix).unwrap();
        parent_base < lo || parent_last > hi
    }

    #[quickcheck]
    fn summarize_covers_exactly(a: u32, b: u32) -> bool {
        let (lo, hi) = (a.min(b), a.max(b));
        let blocks = summarize(lo, hi).unwrap();
        blocks.first().map(|b| b.first()) == Some(lo)
            && blocks.last().map(|b| b.last()) == Some(hi)
            && blocks
                .windows(2)
                .all(|w| w[0].last().checked_add(1) == Some(w[1].first()))
    }

    #[quickcheck]
    fn summarize_is_minimal(a: u32, b: u32) -> bool {
        let (lo, hi) = (a.min(b), a.max(b));
        summarize(lo, hi)
            .unwrap()
            .iter()
            .all(|block| is_maximal(block, lo, hi))
    }

    #[quickcheck]
    fn summarize_is_idempotent(a: u32, b: u32) -> bool {
        let (lo, hi) = (a.min(b), a.max(b));
        let blocks = summarize(lo, hi).unwrap();
        let first = blocks[0].first();
        let last = blocks[blocks.len() - 1].last();
        summarize(first, last).unwrap() == blocks
    }
}
