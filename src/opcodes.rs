//! Opcode builder & grouper (C4). See spec §4.4.

use crate::types::{MatchingBlock, OpCode, OpTag};

/// Derive `equal|replace|insert|delete` opcodes from a sentinel-terminated
/// block list.
pub fn build_opcodes(blocks: &[MatchingBlock]) -> Vec<OpCode> {
    let mut opcodes = Vec::with_capacity(blocks.len() * 2);
    let mut i = 0usize;
    let mut j = 0usize;

    for block in blocks {
        let (bi, bj, bn) = (block.i, block.j, block.len);

        if i < bi && j < bj {
            opcodes.push(OpCode {
                tag: OpTag::Replace,
                i1: i,
                i2: bi,
                j1: j,
                j2: bj,
            });
        } else if i < bi {
            opcodes.push(OpCode {
                tag: OpTag::Delete,
                i1: i,
                i2: bi,
                j1: j,
                j2: j,
            });
        } else if j < bj {
            opcodes.push(OpCode {
                tag: OpTag::Insert,
                i1: i,
                i2: i,
                j1: j,
                j2: bj,
            });
        }

        if bn > 0 {
            opcodes.push(OpCode {
                tag: OpTag::Equal,
                i1: bi,
                i2: bi + bn,
                j1: bj,
                j2: bj + bn,
            });
        }

        i = bi + bn;
        j = bj + bn;
    }

    opcodes
}

/// Group opcodes into hunks, each with at most `n` lines of leading and
/// trailing context, splitting wherever an `equal` run exceeds `2n`.
///
/// This mirrors CPython `difflib.SequenceMatcher.get_grouped_opcodes`: a
/// true lazy generator, not a pre-materialized `Vec<Vec<OpCode>>>`.
pub fn group_opcodes(opcodes: Vec<OpCode>, n: usize) -> GroupedOpcodes {
    GroupedOpcodes::new(opcodes, n)
}

pub struct GroupedOpcodes {
    codes: Vec<OpCode>,
    idx: usize,
    n: usize,
    nn: usize,
    group: Vec<OpCode>,
    done: bool,
}

impl GroupedOpcodes {
    fn new(opcodes: Vec<OpCode>, n: usize) -> Self {
        let mut codes = if opcodes.is_empty() {
            vec![OpCode {
                tag: OpTag::Equal,
                i1: 0,
                i2: 1,
                j1: 0,
                j2: 1,
            }]
        } else {
            opcodes
        };

        if codes[0].tag == OpTag::Equal {
            let c = &mut codes[0];
            c.i1 = c.i1.max(c.i2.saturating_sub(n));
            c.j1 = c.j1.max(c.j2.saturating_sub(n));
        }
        let last = codes.len() - 1;
        if codes[last].tag == OpTag::Equal {
            let c = &mut codes[last];
            c.i2 = c.i2.min(c.i1 + n);
            c.j2 = c.j2.min(c.j1 + n);
        }

        GroupedOpcodes {
            codes,
            idx: 0,
            n,
            nn: n.saturating_add(n),
            group: Vec::new(),
            done: false,
        }
    }
}

impl Iterator for GroupedOpcodes {
    type Item = Vec<OpCode>;

    fn next(&mut self) -> Option<Vec<OpCode>> {
        if self.done {
            return None;
        }
        while self.idx < self.codes.len() {
            let code = self.codes[self.idx];
            self.idx += 1;

            if code.tag == OpTag::Equal && code.i2 - code.i1 > self.nn {
                self.group.push(OpCode {
                    tag: OpTag::Equal,
                    i1: code.i1,
                    i2: code.i2.min(code.i1 + self.n),
                    j1: code.j1,
                    j2: code.j2.min(code.j1 + self.n),
                });
                let out = std::mem::take(&mut self.group);

                let new_i1 = code.i1.max(code.i2.saturating_sub(self.n));
                let new_j1 = code.j1.max(code.j2.saturating_sub(self.n));
                self.group.push(OpCode {
                    tag: OpTag::Equal,
                    i1: new_i1,
                    i2: code.i2,
                    j1: new_j1,
                    j2: code.j2,
                });
                return Some(out);
            }
            self.group.push(code);
        }

        self.done = true;
        let is_trivial = self.group.len() == 1 && self.group[0].tag == OpTag::Equal;
        if !self.group.is_empty() && !is_trivial {
            Some(std::mem::take(&mut self.group))
        } else {
            None
        }
    }
}
