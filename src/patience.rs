//! Matcher façade (C6): the patience-diff engine proper.
//!
//! See spec §4.6. `PatienceSequenceMatcher` owns its sequences and
//! caches `matching_blocks`/`opcodes` independently, invalidating both
//! wholesale on any `set_seq*` call.

use std::hash::Hash;

use crate::blocks::consolidate;
use crate::matching::SequenceMatching;
use crate::opcodes::{build_opcodes, group_opcodes, GroupedOpcodes};
use crate::recurse::recurse_matches;
use crate::types::{MatchingBlock, OpCode};

/// Recursion depth bound for [`PatienceSequenceMatcher::new`] (spec §5,
/// §9: "a design parameter that trades precision for worst-case cost").
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// The patience-diff matching engine (spec components C1–C3, exposed
/// through the C6 façade).
///
/// The constructor accepts no junk-predicate parameter: the reference
/// engine exposes and ignores one, and carrying a dead parameter across
/// the port added nothing but noise (see `SPEC_FULL.md` Open Questions).
pub struct PatienceSequenceMatcher<T> {
    a: Vec<T>,
    b: Vec<T>,
    max_depth: usize,
    matching_blocks: Option<Vec<MatchingBlock>>,
    opcodes: Option<Vec<OpCode>>,
}

impl<T: Eq + Hash + Clone> PatienceSequenceMatcher<T> {
    pub fn new(a: Vec<T>, b: Vec<T>) -> Self {
        Self::with_max_depth(a, b, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(a: Vec<T>, b: Vec<T>, max_depth: usize) -> Self {
        PatienceSequenceMatcher {
            a,
            b,
            max_depth,
            matching_blocks: None,
            opcodes: None,
        }
    }

    fn compute_matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pairs = Vec::new();
        recurse_matches(
            &self.a,
            &self.b,
            0,
            0,
            self.a.len(),
            self.b.len(),
            &mut pairs,
            self.max_depth,
        )
        .expect("a matcher's own full range is always valid");
        consolidate(pairs, self.a.len(), self.b.len())
    }
}

impl<T: Eq + Hash + Clone> SequenceMatching<T> for PatienceSequenceMatcher<T> {
    fn set_seq1(&mut self, a: Vec<T>) {
        self.a = a;
        self.matching_blocks = None;
        self.opcodes = None;
    }

    fn set_seq2(&mut self, b: Vec<T>) {
        self.b = b;
        self.matching_blocks = None;
        self.opcodes = None;
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
            self.opcodes = Some(build_opcodes(&blocks));
        }
        self.opcodes.as_deref().unwrap()
    }

    fn get_grouped_opcodes(&mut self, n: usize) -> GroupedOpcodes {
        group_opcodes(self.get_opcodes().to_vec(), n)
    }
}
