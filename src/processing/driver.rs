//! Batch subtraction of exclusion blocks from source blocks.
//!
//! Both sets are sorted and checked for self-overlap, then the sources are
//! swept against a monotonically advancing exclusion cursor.

use super::subtractor::subtract_range;
use super::summarizer::summarize_range;
use crate::error::{BlockSet, CidrError};
use crate::models::{AddrRange, Address, Block};
use colored::Colorize;
use itertools::Itertools;
use rayon::prelude::*;

/// One step of the sweep, reported to the trace hook of [`subtract_with_trace`].
#[derive(Debug, Clone, Copy)]
pub enum SweepEvent<'a, A> {
    /// A source block is about to be processed against `window`.
    Source {
        source: &'a Block<A>,
        window: &'a [Block<A>],
    },
    /// A sub-range of `source` survived all exclusions.
    Kept {
        source: &'a Block<A>,
        range: AddrRange<A>,
    },
    /// Nothing of `source` is left.
    FullyExcluded { source: &'a Block<A> },
}

/// Sort blocks ascending by first address, narrower blocks first on equal base.
pub fn sort_blocks<A: Address>(blocks: &mut [Block<A>]) {
    blocks.sort();
}

/// Return an error naming the first pair of intersecting blocks.
///
/// `blocks` must already be sorted with [`sort_blocks`].
pub fn check_disjoint<A: Address>(blocks: &[Block<A>], set: BlockSet) -> Result<(), CidrError> {
    match blocks
        .iter()
        .tuple_windows()
        .find(|(prev, next)| prev.intersects(next))
    {
        Some((prev, next)) => Err(CidrError::OverlappingBlocks {
            set,
            first: prev.to_string(),
            second: next.to_string(),
        }),
        None => Ok(()),
    }
}

/// Subtract `excludes` from `sources`.
///
/// # Returns
/// * `Ok(Vec<Block>)` - ascending, disjoint, minimal canonical blocks covering
///   the source addresses not covered by any exclusion
/// * `Err` - if either set overlaps itself, or an internal guard fails
pub fn subtract<A: Address>(
    sources: &[Block<A>],
    excludes: &[Block<A>],
) -> Result<Vec<Block<A>>, CidrError> {
    subtract_with_trace(sources, excludes, |_| {})
}

/// Same as [`subtract`], calling `trace` at every sweep step.
pub fn subtract_with_trace<A, F>(
    sources: &[Block<A>],
    excludes: &[Block<A>],
    mut trace: F,
) -> Result<Vec<Block<A>>, CidrError>
where
    A: Address,
    F: FnMut(&SweepEvent<'_, A>),
{
    let (sources, excludes) = prepare(sources, excludes)?;
    log::debug!(
        "#Start subtract() sources={} excludes={}",
        sources.len(),
        excludes.len()
    );

    if excludes.is_empty() {
        return Ok(sources);
    }

    let mut remaining = Vec::with_capacity(sources.len());
    let mut cursor = 0;

    for source in &sources {
        // Exclusions ending below this source end below every later source too.
        while cursor < excludes.len() && excludes[cursor].last() < source.first() {
            cursor += 1;
        }
        let window_len = excludes[cursor..].partition_point(|e| e.first() <= source.last());
        let window = &excludes[cursor..cursor + window_len];

        trace(&SweepEvent::Source { source, window });
        let kept = subtract_block(source, window).map_err(log_internal)?;

        if kept.is_empty() {
            log::debug!("Completely excluded {}", source.to_string().red());
            trace(&SweepEvent::FullyExcluded { source });
            continue;
        }
        for range in kept {
            trace(&SweepEvent::Kept { source, range });
            remaining.extend(summarize_range(range).map_err(log_internal)?);
        }
    }

    log::info!(
        "subtract() {} source(s) - {} exclude(s) => {} block(s)",
        sources.len(),
        excludes.len(),
        remaining.len()
    );
    Ok(remaining)
}

/// Same result as [`subtract`], with source blocks processed concurrently.
///
/// Each source finds its exclusion window by binary search over the shared,
/// sorted exclusion list.
pub fn subtract_parallel<A: Address>(
    sources: &[Block<A>],
    excludes: &[Block<A>],
) -> Result<Vec<Block<A>>, CidrError> {
    let (sources, excludes) = prepare(sources, excludes)?;
    if excludes.is_empty() {
        return Ok(sources);
    }

    let per_source: Vec<Vec<Block<A>>> = sources
        .par_iter()
        .map(|source| {
            let start = excludes.partition_point(|e| e.last() < source.first());
            let window_len = excludes[start..].partition_point(|e| e.first() <= source.last());
            let kept = subtract_block(source, &excludes[start..start + window_len])?;
            kept.into_iter()
                .map(summarize_range)
                .flatten_ok()
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<_, _>>()
        .map_err(log_internal)?;

    Ok(per_source.into_iter().flatten().collect())
}

/// Sort and validate both sets.
fn prepare<A: Address>(
    sources: &[Block<A>],
    excludes: &[Block<A>],
) -> Result<(Vec<Block<A>>, Vec<Block<A>>), CidrError> {
    let mut sources = sources.to_vec();
    let mut excludes = excludes.to_vec();
    sort_blocks(&mut sources);
    sort_blocks(&mut excludes);
    check_disjoint(&sources, BlockSet::Sources)?;
    check_disjoint(&excludes, BlockSet::Excludes)?;
    Ok((sources, excludes))
}

/// Subtract a window of exclusion blocks from one source block.
fn subtract_block<A: Address>(
    source: &Block<A>,
    window: &[Block<A>],
) -> Result<Vec<AddrRange<A>>, CidrError> {
    let window: Vec<AddrRange<A>> = window.iter().map(Block::to_range).collect();
    let kept = subtract_range(source.to_range(), &window)?;
    log::trace!(
        "src {} after {} exclusion(s): {}",
        source,
        window.len(),
        kept.iter().map(|r| r.to_string()).join(", ")
    );
    Ok(kept)
}

fn log_internal(e: CidrError) -> CidrError {
    if e.is_internal() {
        log::error!("internal address arithmetic error, aborting: {e}");
    }
    e
}
