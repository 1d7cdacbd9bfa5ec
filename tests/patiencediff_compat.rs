//! Integration tests replaying literal scenarios from the reference
//! test suite, plus invariant checks that exercise the public API as a
//! downstream crate would.

use difflib_rs::classic::ClassicSequenceMatcher;
use difflib_rs::patience::PatienceSequenceMatcher;
use difflib_rs::unified_diff::{unified_diff, UnifiedDiffOptions};
use difflib_rs::{unique_lcs, OpTag, SequenceMatching};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn unique_lcs_discards_non_unique_elements() {
    assert_eq!(
        unique_lcs(&chars("acbac"), &chars("abc")),
        vec![(2, 1)]
    );
    assert_eq!(
        unique_lcs(&chars("abcde"), &chars("cdeab")),
        vec![(2, 0), (3, 1), (4, 2)]
    );
}

#[test]
fn unique_lcs_of_empty_sequence_is_always_empty() {
    let x = chars("anything");
    let empty: Vec<char> = Vec::new();
    assert_eq!(unique_lcs(&empty, &x), Vec::new());
    assert_eq!(unique_lcs(&x, &empty), Vec::new());
}

#[test]
fn patience_blocks_for_copied_region_scenario() {
    let a = chars("abcdefghijklmnop");
    let b = chars("abcdefxydefghijklmnop");
    let mut m = PatienceSequenceMatcher::new(a, b);
    let blocks: Vec<_> = m.get_matching_blocks().iter().map(|x| x.as_tuple()).collect();
    assert_eq!(blocks, vec![(0, 0, 6), (6, 11, 10), (16, 21, 0)]);

    let ops: Vec<_> = m.get_opcodes().iter().map(|o| o.as_tuple()).collect();
    assert_eq!(
        ops,
        vec![
            (OpTag::Equal, 0, 6, 0, 6),
            (OpTag::Insert, 6, 6, 6, 11),
            (OpTag::Equal, 6, 16, 11, 21),
        ]
    );
}

#[test]
fn patience_blocks_reject_non_unique_letters_with_differing_context() {
    let mut m = PatienceSequenceMatcher::new(chars("aBccDe"), chars("abccde"));
    let blocks: Vec<_> = m.get_matching_blocks().iter().map(|x| x.as_tuple()).collect();
    assert_eq!(blocks, vec![(0, 0, 1), (5, 5, 1), (6, 6, 0)]);
}

#[test]
fn patience_blocks_recover_locally_unique_runs() {
    let mut m = PatienceSequenceMatcher::new(chars("aBcDec"), chars("abcdec"));
    let blocks: Vec<_> = m.get_matching_blocks().iter().map(|x| x.as_tuple()).collect();
    assert_eq!(blocks, vec![(0, 0, 1), (2, 2, 1), (4, 4, 2), (6, 6, 0)]);
}

#[test]
fn unified_diff_matches_the_reference_text_exactly() {
    let a: Vec<String> = vec![
        "hello there\n".to_string(),
        "world\n".to_string(),
        "how are you today?\n".to_string(),
    ];
    let b: Vec<String> = vec!["hello there\n".to_string(), "how are you today?\n".to_string()];
    let mut m = PatienceSequenceMatcher::new(a.clone(), b.clone());
    let out = unified_diff(&a, &b, &mut m, &UnifiedDiffOptions::default());
    assert_eq!(
        out,
        vec![
            "--- \n",
            "+++ \n",
            "@@ -1,3 +1,2 @@\n",
            " hello there\n",
            "-world\n",
            " how are you today?\n",
        ]
    );
}

#[test]
fn patience_and_classic_engines_disagree_on_hunk_anchor() {
    let a: Vec<String> = "abcdefghijklmnop".chars().map(|c| c.to_string()).collect();
    let b: Vec<String> = "abcdefxydefghijklmnop".chars().map(|c| c.to_string()).collect();
    let opts = UnifiedDiffOptions {
        n: 3,
        line_term: "",
        ..UnifiedDiffOptions::default()
    };

    let mut patience = PatienceSequenceMatcher::new(a.clone(), b.clone());
    let patience_out = unified_diff(&a, &b, &mut patience, &opts);
    assert_eq!(patience_out[2], "@@ -4,6 +4,11 @@");

    let mut classic = ClassicSequenceMatcher::new(a.clone(), b.clone());
    let classic_out = unified_diff(&a, &b, &mut classic, &opts);
    assert_eq!(classic_out[2], "@@ -1,6 +1,11 @@");
}

#[test]
fn identical_sequences_produce_no_hunks() {
    let a = vec!["same\n".to_string(); 5];
    let b = a.clone();
    let mut m = PatienceSequenceMatcher::new(a.clone(), b.clone());
    assert!(m.get_grouped_opcodes(3).next().is_none());
    assert!(unified_diff(&a, &b, &mut m, &UnifiedDiffOptions::default()).is_empty());
}

#[test]
fn empty_a_is_rendered_as_a_pure_insertion() {
    let a: Vec<String> = Vec::new();
    let b: Vec<String> = vec!["one\n".to_string(), "two\n".to_string()];
    let mut m = PatienceSequenceMatcher::new(a.clone(), b.clone());
    let ops: Vec<_> = m.get_opcodes().iter().map(|o| o.as_tuple()).collect();
    assert_eq!(ops, vec![(OpTag::Insert, 0, 0, 0, 2)]);
}

/// Reconstructing `b` by applying opcodes to `a` must reproduce `b`
/// exactly (spec invariant 5).
fn reconstruct<T: Clone>(a: &[T], b: &[T], ops: &[difflib_rs::OpCode]) -> Vec<T> {
    let mut out = Vec::new();
    for op in ops {
        match op.tag {
            OpTag::Equal => out.extend_from_slice(&a[op.i1..op.i2]),
            OpTag::Delete => {}
            OpTag::Insert | OpTag::Replace => out.extend_from_slice(&b[op.j1..op.j2]),
        }
    }
    out
}

#[test]
fn opcodes_roundtrip_to_b_for_both_engines() {
    let cases: &[(&str, &str)] = &[
        ("", ""),
        ("abc", ""),
        ("", "abc"),
        ("abcde", "abXde"),
        ("abcdefghijklmnop", "abcdefxydefghijklmnop"),
        ("aBcDec", "abcdec"),
        ("aBcdEeXcdFg", "abcdecdfg"),
    ];
    for &(a_str, b_str) in cases {
        let a = chars(a_str);
        let b = chars(b_str);

        let mut patience = PatienceSequenceMatcher::new(a.clone(), b.clone());
        let ops = patience.get_opcodes().to_vec();
        assert_eq!(reconstruct(&a, &b, &ops), b, "patience roundtrip failed for {a_str:?}/{b_str:?}");

        let mut classic = ClassicSequenceMatcher::new(a.clone(), b.clone());
        let ops = classic.get_opcodes().to_vec();
        assert_eq!(reconstruct(&a, &b, &ops), b, "classic roundtrip failed for {a_str:?}/{b_str:?}");
    }
}

#[test]
fn out_of_range_recursion_bounds_report_an_error() {
    let a = chars("ab");
    let b = chars("ab");
    let mut out = Vec::new();
    let err = difflib_rs::recurse_matches(&a, &b, 0, 0, 10, 2, &mut out, 10).unwrap_err();
    assert!(matches!(err, difflib_rs::DiffError::RangeOutOfBounds { .. }));
}
