//! Index validation: failures are reported, never applied

use segfold::algebra::Sum;
use segfold::{Operation, SegmentTree, SegmentTreeError};
use test_case::test_case;
use test_helpers::*;

#[test_case(100, 200 => 200; "forward past the end")]
#[test_case(0, 10 => 10; "forward right bound equals len")]
#[test_case(10, 3 => 10; "wraparound left bound equals len")]
#[test_case(57, 0 => 57; "wraparound far out")]
fn test_query_out_of_range(left: usize, right: usize) -> usize {
    match sum_tree().query(left, right) {
        Err(SegmentTreeError::IndexOutOfRange {
            operation: Operation::Query,
            index,
            len: 10,
        }) => index,
        other => panic!("expected out of range, got {other:?}"),
    }
}

#[test]
fn test_failed_update_leaves_tree_unchanged() {
    let mut tree = sum_tree();
    let storage = tree.storage().to_vec();

    for index in [10, 11, usize::MAX] {
        let err = tree.update(index, 1_000).unwrap_err();
        assert_eq!(err, SegmentTreeError::out_of_range(Operation::Update, index, 10));
    }

    assert_eq!(tree.storage(), &storage[..]);
    assert_eq!(tree.query(0, 9), Ok(55));
}

#[test]
fn test_failed_query_leaves_tree_unchanged() {
    let tree = sum_tree();
    assert!(tree.query(100, 200).is_err());
    assert_eq!(tree.query(0, 9), Ok(55));
}

#[test]
fn test_extreme_bounds() {
    let tree = sum_tree();
    assert!(tree.query(0, usize::MAX).is_err());
    assert!(tree.query(usize::MAX, 0).is_err());
    assert!(tree.query_range(0..=usize::MAX).is_err());
    assert!(tree.get(usize::MAX).is_err());
}

#[test]
fn test_empty_tree_rejects_everything() {
    let mut tree = SegmentTree::new(0, Sum, 0i64);
    assert!(tree.is_empty());
    assert!(tree.query(0, 0).is_err());
    assert!(tree.update(0, 1).is_err());
    assert_eq!(tree.query_all(), 0);
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(SegmentTreeError::out_of_range(
        Operation::Query,
        200,
        10,
    ));
    assert_eq!(err.to_string(), "query received out of range index 200 (len 10)");
}
