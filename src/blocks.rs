//! Block consolidator (C3).
//!
//! Turns the sparse `(i, j)` pairs produced by the recursive matcher
//! into the canonical, maximal, sentinel-terminated block list. See
//! spec §4.3.

use crate::types::MatchingBlock;

/// Sort `pairs` defensively, coalesce consecutive runs into maximal
/// blocks, and append the `(a_len, b_len, 0)` sentinel.
pub fn consolidate(mut pairs: Vec<(usize, usize)>, a_len: usize, b_len: usize) -> Vec<MatchingBlock> {
    pairs.sort_unstable();
    pairs.dedup();

    let mut blocks: Vec<MatchingBlock> = Vec::new();
    for (i, j) in pairs {
        if let Some(last) = blocks.last_mut() {
            if last.i + last.len == i && last.j + last.len == j {
                last.len += 1;
                continue;
            }
        }
        blocks.push(MatchingBlock::new(i, j, 1));
    }
    blocks.push(MatchingBlock::new(a_len, b_len, 0));
    blocks
}
