//! A patience-diff library: unique-element anchoring, recursive gap
//! matching, and a unified-diff text renderer, with a classic
//! longest-match engine kept alongside as an alternate backend.
//!
//! Start at [`PatienceSequenceMatcher`] for the default engine, or
//! [`unified_diff`] to go straight to rendered text.

pub mod blocks;
pub mod classic;
pub mod error;
pub mod matching;
pub mod opcodes;
pub mod patience;
pub mod recurse;
pub mod types;
pub mod unified_diff;
mod unique_lcs;

pub use classic::ClassicSequenceMatcher;
pub use error::{DiffError, Result};
pub use matching::SequenceMatching;
pub use opcodes::GroupedOpcodes;
pub use patience::{PatienceSequenceMatcher, DEFAULT_MAX_DEPTH};
pub use recurse::recurse_matches;
pub use types::{MatchingBlock, OpCode, OpTag};
pub use unified_diff::{unified_diff, UnifiedDiffOptions};
pub use unique_lcs::unique_lcs;
