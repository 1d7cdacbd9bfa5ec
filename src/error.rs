//! Error types for range-checked entry points.

/// Which sequence a bad range referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "a"),
            Side::B => write!(f, "b"),
        }
    }
}

/// Errors surfaced by the patience matching engine.
///
/// The core never panics on caller-supplied ranges; malformed bounds
/// are reported here instead. Unhashable-element and
/// non-comparable-element failures from the reference design (see
/// spec §7) are compile-time guarantees of the `T: Eq + Hash` bound in
/// this port and have no runtime representation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    #[error("{side} range {lo}..{hi} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        side: Side,
        lo: usize,
        hi: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, DiffError>;

pub(crate) fn check_range(side: Side, lo: usize, hi: usize, len: usize) -> Result<()> {
    if lo > hi || hi > len {
        return Err(DiffError::RangeOutOfBounds { side, lo, hi, len });
    }
    Ok(())
}
