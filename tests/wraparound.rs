//! Wraparound queries
//!
//! `query(left, right)` with `left > right` covers `[left, n-1]` and
//! `[0, right]`, but the LOW segment is merged first. For a
//! non-commutative combiner this is not the "reversed range" a caller
//! might expect: with letters a..g, `query(5, 1)` is "a-b-f-g", not
//! "f-g-a-b".

use segfold::algebra::Concat;
use segfold::{MergeAdapter, SegmentTree};
use test_case::test_case;
use test_helpers::*;

#[test_case(5, 1 => "a-b-f-g"; "low segment comes first")]
#[test_case(6, 0 => "a-g"; "both ends")]
#[test_case(1, 0 => "a-b-c-d-e-f-g"; "adjacent bounds cover all")]
#[test_case(6, 5 => "a-b-c-d-e-f-g"; "adjacent at the top")]
#[test_case(3, 2 => "a-b-c-d-e-f-g"; "adjacent in the middle")]
fn test_wraparound_order(left: usize, right: usize) -> String {
    letter_tree(7).query(left, right).unwrap()
}

#[test]
fn test_wraparound_law_holds_for_every_pair() {
    let tree = letter_tree(11);
    let adapter = MergeAdapter::new(Concat::new("-"), String::new());
    let n = tree.len();

    for left in 0..n {
        for right in 0..left {
            let expected = adapter.merge(
                &tree.query(0, right).unwrap(),
                &tree.query(left, n - 1).unwrap(),
            );
            assert_eq!(
                tree.query(left, right).unwrap(),
                expected,
                "left={left} right={right}"
            );
        }
    }
}

#[test]
fn test_wraparound_skips_identity_segments() {
    // Blank out the high segment; no dangling separator may appear.
    let mut tree = letter_tree(6);
    tree.update(4, String::new()).unwrap();
    tree.update(5, String::new()).unwrap();

    assert_eq!(tree.query(4, 1).unwrap(), "a-b");
    assert_eq!(tree.query(0, 5).unwrap(), "a-b-c-d");
}

#[test]
fn test_wraparound_after_updates() {
    let mut tree = SegmentTree::summing(&one_to_ten());
    tree.update(9, 100).unwrap();
    tree.update(0, -1).unwrap();

    // 9 + 100 + (-1) + 2
    assert_eq!(tree.query(8, 1), Ok(110));
}
