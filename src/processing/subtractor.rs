//! Subtraction of exclusion ranges from a single source range.

use crate::error::CidrError;
use crate::models::{predecessor, successor, AddrRange, Address};
use itertools::Itertools;

/// Remove every address covered by `excludes` from `source`.
///
/// `excludes` must be ascending and pairwise disjoint. Exclusions that do not
/// intersect `source` are skipped, so the caller may pass a wider window than
/// strictly needed.
///
/// # Returns
/// The kept sub-ranges of `source` in ascending order. An empty list means
/// `source` was fully excluded.
pub fn subtract_range<A: Address>(
    source: AddrRange<A>,
    excludes: &[AddrRange<A>],
) -> Result<Vec<AddrRange<A>>, CidrError> {
    debug_assert!(
        excludes.iter().tuple_windows().all(|(a, b)| a.hi() < b.lo()),
        "excludes must be ascending and disjoint"
    );

    let mut kept = Vec::new();
    let mut low = source.lo();

    for exclude in excludes {
        if exclude.hi() < low {
            continue;
        }
        if exclude.lo() > source.hi() {
            break;
        }

        if low < exclude.lo() {
            // low < exclude.lo implies exclude.lo >= 1
            kept.push(AddrRange::new(low, predecessor(exclude.lo())?)?);
        }

        if exclude.hi() >= source.hi() {
            return Ok(kept);
        }
        // exclude.hi < source.hi <= MAX
        low = successor(exclude.hi())?;
    }

    kept.push(AddrRange::new(low, source.hi())?);
    Ok(kept)
}
