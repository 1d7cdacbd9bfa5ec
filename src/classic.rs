//! Classic longest-match engine, generalized from the teacher's
//! `SequenceMatcher` to generic `T: Eq + Hash + Clone`.
//!
//! Kept alive as the `--difflib` backend in the CLI: the one place the
//! original algorithm this crate was ported from survives the
//! transform to patience diffing. See `SPEC_FULL.md` §9.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::hash::Hash;

use crate::matching::SequenceMatching;
use crate::opcodes::{group_opcodes, GroupedOpcodes};
use crate::types::{MatchingBlock, OpCode, OpTag};

/// CPython's popularity heuristic kicks in once `b` has at least this
/// many elements.
const POPULARITY_THRESHOLD: usize = 200;

pub struct ClassicSequenceMatcher<T> {
    a: Vec<T>,
    b: Vec<T>,
    b2j: FxHashMap<T, Vec<usize>>,
    matching_blocks: Option<Vec<MatchingBlock>>,
    opcodes: Option<Vec<OpCode>>,
}

impl<T: Eq + Hash + Clone> ClassicSequenceMatcher<T> {
    pub fn new(a: Vec<T>, b: Vec<T>) -> Self {
        let mut m = ClassicSequenceMatcher {
            a,
            b: Vec::new(),
            b2j: FxHashMap::default(),
            matching_blocks: None,
            opcodes: None,
        };
        m.set_seq2(b);
        m
    }

    fn chain_b(&mut self) {
        self.b2j.clear();
        let estimated_unique = (self.b.len() / 3).max(16);
        self.b2j.reserve(estimated_unique);

        for (i, elt) in self.b.iter().enumerate() {
            self.b2j.entry(elt.clone()).or_insert_with(Vec::new).push(i);
        }

        let n = self.b.len();
        if n >= POPULARITY_THRESHOLD {
            let ntest = n / 100 + 1;
            self.b2j.retain(|_, indices| indices.len() <= ntest);
        }
    }

    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let mut besti = alo;
        let mut bestj = blo;
        let mut bestsize = 0usize;

        let mut j2len: FxHashMap<usize, usize> = FxHashMap::default();
        let mut newj2len: FxHashMap<usize, usize> = FxHashMap::default();

        for i in alo..ahi {
            newj2len.clear();
            if let Some(indices) = self.b2j.get(&self.a[i]) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = if j > 0 { j2len.get(&(j - 1)).copied().unwrap_or(0) } else { 0 };
                    let newk = k + 1;
                    newj2len.insert(j, newk);
                    if newk > bestsize {
                        besti = i + 1 - newk;
                        bestj = j + 1 - newk;
                        bestsize = newk;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut newj2len);
        }

        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi && bestj + bestsize < bhi && self.a[besti + bestsize] == self.b[bestj + bestsize] {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }

    fn compute_matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut matches: Vec<(usize, usize, usize)> = Vec::new();
        let mut queue: VecDeque<(usize, usize, usize, usize)> = VecDeque::new();
        queue.push_back((0, self.a.len(), 0, self.b.len()));

        while let Some((alo, ahi, blo, bhi)) = queue.pop_front() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k > 0 {
                matches.push((i, j, k));
                if alo < i && blo < j {
                    queue.push_back((alo, i, blo, j));
                }
                if i + k < ahi && j + k < bhi {
                    queue.push_back((i + k, ahi, j + k, bhi));
                }
            }
        }

        matches.sort_unstable();

        let mut collapsed: Vec<MatchingBlock> = Vec::new();
        for (i, j, k) in matches {
            if let Some(last) = collapsed.last_mut() {
                if last.i + last.len == i && last.j + last.len == j {
                    last.len += k;
                    continue;
                }
            }
            collapsed.push(MatchingBlock::new(i, j, k));
        }
        collapsed.push(MatchingBlock::new(self.a.len(), self.b.len(), 0));
        collapsed
    }
}

impl<T: Eq + Hash + Clone> SequenceMatching<T> for ClassicSequenceMatcher<T> {
    fn set_seq1(&mut self, a: Vec<T>) {
        self.a = a;
        self.matching_blocks = None;
        self.opcodes = None;
    }

    fn set_seq2(&mut self, b: Vec<T>) {
        self.b = b;
        self.matching_blocks = None;
        self.opcodes = None;
        self.chain_b();
    }

    fn get_matching_blocks(&mut self) -> &[MatchingBlock] {
        if self.matching_blocks.is_none() {
            self.matching_blocks = Some(self.compute_matching_blocks());
        }
        self.matching_blocks.as_deref().unwrap()
    }

    fn get_opcodes(&mut self) -> &[OpCode] {
        if self.opcodes.is_none() {
            let blocks = self.get_matching_blocks().to_vec();
            self.opcodes = Some(crate::opcodes::build_opcodes(&blocks));
        }
        self.opcodes.as_deref().unwrap()
    }

    fn get_grouped_opcodes(&mut self, n: usize) -> GroupedOpcodes {
        group_opcodes(self.get_opcodes().to_vec(), n)
    }
}
