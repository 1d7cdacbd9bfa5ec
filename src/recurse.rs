//! Recursive matcher (C2).
//!
//! Anchors on unique-LCS pairs (C1) and recurses into the gaps between
//! them. A gap with no unique anchor at all still yields a match if its
//! very first (or, failing that, very last) elements agree — that
//! boundary run is walked out greedily and the remaining, narrower gap
//! is recursed into. See spec §4.2.

use std::hash::Hash;

use crate::error::{check_range, Result, Side};
use crate::unique_lcs::unique_lcs_range;

/// Append match pairs for `a[a_lo..a_hi]` vs `b[b_lo..b_hi]` to `out`.
///
/// `max_depth` bounds recursion (10 in the canonical configuration);
/// once exhausted, the remaining gap is left unmatched rather than
/// explored further. Pairs come out in ascending order of `i` (and of
/// `j`), but the block consolidator (C3) sorts defensively anyway.
pub fn recurse_matches<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    a_lo: usize,
    b_lo: usize,
    a_hi: usize,
    b_hi: usize,
    out: &mut Vec<(usize, usize)>,
    max_depth: usize,
) -> Result<()> {
    check_range(Side::A, a_lo, a_hi, a.len())?;
    check_range(Side::B, b_lo, b_hi, b.len())?;
    recurse_inner(a, b, a_lo, b_lo, a_hi, b_hi, out, max_depth);
    Ok(())
}

fn recurse_inner<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    a_lo: usize,
    b_lo: usize,
    a_hi: usize,
    b_hi: usize,
    out: &mut Vec<(usize, usize)>,
    max_depth: usize,
) {
    if max_depth == 0 || a_lo >= a_hi || b_lo >= b_hi {
        return;
    }

    let old_len = out.len();
    let anchors = unique_lcs_range(a, b, a_lo, a_hi, b_lo, b_hi)
        .expect("sub-range of an already-validated range is always valid");

    // last_i/last_j as the one-past position, so "nothing matched yet"
    // reads as next == a_lo/b_lo without an unsigned underflow.
    let mut last_a: Option<usize> = None;
    let mut last_b: Option<usize> = None;

    for (anchor_i, anchor_j) in anchors {
        let next_a = last_a.map_or(a_lo, |i| i + 1);
        let next_b = last_b.map_or(b_lo, |j| j + 1);
        if next_a != anchor_i || next_b != anchor_j {
            recurse_inner(a, b, next_a, next_b, anchor_i, anchor_j, out, max_depth - 1);
        }
        last_a = Some(anchor_i);
        last_b = Some(anchor_j);
        out.push((anchor_i, anchor_j));
    }

    if out.len() > old_len {
        let next_a = last_a.map_or(a_lo, |i| i + 1);
        let next_b = last_b.map_or(b_lo, |j| j + 1);
        recurse_inner(a, b, next_a, next_b, a_hi, b_hi, out, max_depth - 1);
    } else if a[a_lo] == b[b_lo] {
        // No unique anchor anywhere in this gap, but it opens on a
        // matching pair. Walk the match forward and recurse on what's
        // left past it.
        let mut lo_a = a_lo;
        let mut lo_b = b_lo;
        while lo_a < a_hi && lo_b < b_hi && a[lo_a] == b[lo_b] {
            out.push((lo_a, lo_b));
            lo_a += 1;
            lo_b += 1;
        }
        recurse_inner(a, b, lo_a, lo_b, a_hi, b_hi, out, max_depth - 1);
    } else if a[a_hi - 1] == b[b_hi - 1] {
        // Same, symmetrically, from the tail end.
        let mut hi_a = a_hi - 1;
        let mut hi_b = b_hi - 1;
        while hi_a > a_lo && hi_b > b_lo && a[hi_a - 1] == b[hi_b - 1] {
            hi_a -= 1;
            hi_b -= 1;
        }
        for k in 0..(a_hi - hi_a) {
            out.push((hi_a + k, hi_b + k));
        }
        recurse_inner(a, b, a_lo, b_lo, hi_a, hi_b, out, max_depth - 1);
    }
}
