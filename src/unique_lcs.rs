//! Unique-LCS finder (C1).
//!
//! Finds the longest common subsequence restricted to elements that
//! occur exactly once in both slices under consideration, via patience
//! sorting. See spec §4.1.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::error::{check_range, Result, Side};

/// Longest common subsequence of `a` and `b`, considering only elements
/// unique to each sequence as a whole. Pairs are absolute indices into
/// `a` and `b`, strictly increasing in both coordinates.
pub fn unique_lcs<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    unique_lcs_range(a, b, 0, a.len(), 0, b.len()).expect("full ranges are always valid")
}

/// Same as [`unique_lcs`] but restricted to `a[a_lo..a_hi]` and
/// `b[b_lo..b_hi]`; uniqueness is judged within those sub-ranges only.
pub fn unique_lcs_range<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> Result<Vec<(usize, usize)>> {
    check_range(Side::A, a_lo, a_hi, a.len())?;
    check_range(Side::B, b_lo, b_hi, b.len())?;

    if a_lo >= a_hi || b_lo >= b_hi {
        return Ok(Vec::new());
    }

    // Step 1: positions of elements unique within a[a_lo..a_hi].
    let mut a_pos: FxHashMap<&T, Option<usize>> = FxHashMap::default();
    for (idx, elt) in a[a_lo..a_hi].iter().enumerate() {
        a_pos
            .entry(elt)
            .and_modify(|slot| *slot = None)
            .or_insert(Some(a_lo + idx));
    }

    // Step 2: count occurrences in b[b_lo..b_hi] of elements unique in a,
    // then collect the ones that are also unique in b, in b-order.
    let mut b_count: FxHashMap<&T, usize> = FxHashMap::default();
    for elt in &b[b_lo..b_hi] {
        if a_pos.get(elt).map(Option::is_some).unwrap_or(false) {
            *b_count.entry(elt).or_insert(0) += 1;
        }
    }

    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for (idx, elt) in b[b_lo..b_hi].iter().enumerate() {
        if b_count.get(elt).copied() == Some(1) {
            if let Some(Some(ai)) = a_pos.get(elt) {
                pairs.push((*ai, b_lo + idx));
            }
        }
    }

    Ok(patience_sort_lis(&pairs))
}

/// Extract the longest increasing-in-both-coordinates subsequence from
/// `pairs`, which must already be sorted ascending by `.1` (the `j`
/// coordinate). Returns the subsequence in ascending order.
fn patience_sort_lis(pairs: &[(usize, usize)]) -> Vec<(usize, usize)> {
    if pairs.is_empty() {
        return Vec::new();
    }

    // pile_tops[k] is the index into `pairs` of the smallest-`i` tail of
    // an increasing subsequence of length k+1 found so far.
    let mut pile_tops: Vec<usize> = Vec::new();
    let mut back: Vec<Option<usize>> = vec![None; pairs.len()];

    for (idx, &(i, _)) in pairs.iter().enumerate() {
        let p = pile_tops.partition_point(|&t| pairs[t].0 < i);
        back[idx] = if p > 0 { Some(pile_tops[p - 1]) } else { None };
        if p == pile_tops.len() {
            pile_tops.push(idx);
        } else {
            pile_tops[p] = idx;
        }
    }

    let mut result = Vec::new();
    let mut cur = pile_tops.last().copied();
    while let Some(idx) = cur {
        result.push(pairs[idx]);
        cur = back[idx];
    }
    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs() {
        let empty: Vec<char> = Vec::new();
        assert_eq!(unique_lcs(&empty, &empty), Vec::new());
        assert_eq!(unique_lcs(&['a'], &empty), Vec::new());
        assert_eq!(unique_lcs(&empty, &['a']), Vec::new());
    }

    #[test]
    fn single_char_cases() {
        assert_eq!(unique_lcs(&['a'], &['a']), vec![(0, 0)]);
        assert_eq!(unique_lcs(&['a'], &['b']), Vec::new());
    }

    #[test]
    fn literal_scenarios() {
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(unique_lcs(&a, &b), vec![(0, 0), (1, 1)]);

        let a: Vec<char> = "abcde".chars().collect();
        let b: Vec<char> = "cdeab".chars().collect();
        assert_eq!(unique_lcs(&a, &b), vec![(2, 0), (3, 1), (4, 2)]);

        let a: Vec<char> = "cdeab".chars().collect();
        let b: Vec<char> = "abcde".chars().collect();
        assert_eq!(unique_lcs(&a, &b), vec![(0, 2), (1, 3), (2, 4)]);

        let a: Vec<char> = "abXde".chars().collect();
        let b: Vec<char> = "abYde".chars().collect();
        assert_eq!(
            unique_lcs(&a, &b),
            vec![(0, 0), (1, 1), (3, 3), (4, 4)]
        );

        let a: Vec<char> = "acbac".chars().collect();
        let b: Vec<char> = "abc".chars().collect();
        assert_eq!(unique_lcs(&a, &b), vec![(2, 1)]);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let a = vec!['a', 'b'];
        let b = vec!['a', 'b'];
        assert!(unique_lcs_range(&a, &b, 0, 5, 0, 2).is_err());
        assert!(unique_lcs_range(&a, &b, 0, 2, 0, 5).is_err());
    }
}
