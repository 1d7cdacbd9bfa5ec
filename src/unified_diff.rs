//! Unified-diff text renderer (C5). See spec §4.5 and §6.
//!
//! Generic over any [`SequenceMatching`] implementation, so a caller
//! can swap in [`crate::classic::ClassicSequenceMatcher`] without
//! touching this renderer — mirroring the reference design's
//! `sequencematcher` factory parameter.

use std::fmt::Display;
use std::hash::Hash;

use crate::matching::SequenceMatching;
use crate::types::OpTag;

/// Header and formatting knobs for [`unified_diff`]. `line_term`
/// defaults to `"\n"` and is applied only to control lines (header and
/// hunk lines); body lines are emitted verbatim since elements
/// typically already carry their own terminators.
pub struct UnifiedDiffOptions<'a> {
    pub from_name: &'a str,
    pub to_name: &'a str,
    pub from_date: &'a str,
    pub to_date: &'a str,
    pub n: usize,
    pub line_term: &'a str,
}

impl<'a> Default for UnifiedDiffOptions<'a> {
    fn default() -> Self {
        UnifiedDiffOptions {
            from_name: "",
            to_name: "",
            from_date: "",
            to_date: "",
            n: 3,
            line_term: "\n",
        }
    }
}

fn format_range_unified(start: usize, stop: usize) -> String {
    let beginning = start + 1;
    let length = stop.saturating_sub(start);
    if length == 1 {
        format!("{}", beginning)
    } else if length == 0 {
        format!("{},0", start)
    } else {
        format!("{},{}", beginning, length)
    }
}

/// Render a unified diff of `a` against `b` using the matching blocks
/// supplied by `matcher`. Elements must implement `Display` (the
/// renderer writes them verbatim, one per output line).
pub fn unified_diff<T, M>(a: &[T], b: &[T], matcher: &mut M, opts: &UnifiedDiffOptions) -> Vec<String>
where
    T: Eq + Hash + Display,
    M: SequenceMatching<T>,
{
    let mut result = Vec::new();
    let mut started = false;

    for group in matcher.get_grouped_opcodes(opts.n) {
        if !started {
            started = true;
            let fromdate = if opts.from_date.is_empty() {
                String::new()
            } else {
                format!("\t{}", opts.from_date)
            };
            let todate = if opts.to_date.is_empty() {
                String::new()
            } else {
                format!("\t{}", opts.to_date)
            };
            result.push(format!("--- {}{}{}", opts.from_name, fromdate, opts.line_term));
            result.push(format!("+++ {}{}{}", opts.to_name, todate, opts.line_term));
        }

        let first = group.first().expect("grouped opcodes never yield an empty group");
        let last = group.last().unwrap();
        let file1_range = format_range_unified(first.i1, last.i2);
        let file2_range = format_range_unified(first.j1, last.j2);
        result.push(format!(
            "@@ -{} +{} @@{}",
            file1_range, file2_range, opts.line_term
        ));

        for opcode in &group {
            match opcode.tag {
                OpTag::Equal => {
                    for i in opcode.i1..opcode.i2 {
                        result.push(format!(" {}", a[i]));
                    }
                }
                OpTag::Delete | OpTag::Replace => {
                    for i in opcode.i1..opcode.i2 {
                        result.push(format!("-{}", a[i]));
                    }
                    if opcode.tag == OpTag::Replace {
                        for j in opcode.j1..opcode.j2 {
                            result.push(format!("+{}", b[j]));
                        }
                    }
                }
                OpTag::Insert => {
                    for j in opcode.j1..opcode.j2 {
                        result.push(format!("+{}", b[j]));
                    }
                }
            }
        }
    }

    result
}
