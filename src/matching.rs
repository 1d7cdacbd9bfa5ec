//! The `SequenceMatching` trait (spec §9 "Polymorphism").
//!
//! [`crate::unified_diff`] is generic over this trait so a caller can
//! substitute an alternate matcher without touching the renderer —
//! exactly as the reference design's `sequencematcher` factory
//! parameter allows.

use crate::opcodes::GroupedOpcodes;
use crate::types::{MatchingBlock, OpCode};

pub trait SequenceMatching<T> {
    /// Replace the first sequence, invalidating any cached results.
    fn set_seq1(&mut self, a: Vec<T>);
    /// Replace the second sequence, invalidating any cached results.
    fn set_seq2(&mut self, b: Vec<T>);
    /// Replace both sequences at once.
    fn set_seqs(&mut self, a: Vec<T>, b: Vec<T>) {
        self.set_seq1(a);
        self.set_seq2(b);
    }
    /// Sentinel-terminated list of maximal matching blocks. Computed on
    /// first call and cached.
    fn get_matching_blocks(&mut self) -> &[MatchingBlock];
    /// Edit-script opcodes. Computed on first call and cached.
    fn get_opcodes(&mut self) -> &[OpCode];
    /// Opcodes grouped into hunks with `n` lines of context. Lazy; not
    /// cached, since it is cheap to re-derive from the cached opcodes.
    fn get_grouped_opcodes(&mut self, n: usize) -> GroupedOpcodes;
}
