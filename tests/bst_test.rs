//! Tests for sorted-slice to height-balanced BST construction.

use algokata::algorithms::bst::from_sorted;
use algokata::algorithms::tree_shape::{is_balanced, max_depth};
use rstest::rstest;

// ============================================================
// In-order round trip
// ============================================================

#[rstest]
#[case(&[])]
#[case(&[7])]
#[case(&[1, 3])]
#[case(&[-10, -3, 0, 5, 9])]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15])]
fn given_sorted_values_when_building_then_inorder_reproduces_input(#[case] values: &[i64]) {
    // Act
    let tree = from_sorted(values);

    // Assert
    assert_eq!(tree.inorder_values(), values);
}

// ============================================================
// Balance
// ============================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])]
#[case(&[-10, -3, 0, 5, 9])]
#[case(&[1, 2])]
fn given_sorted_values_when_building_then_tree_is_height_balanced(#[case] values: &[i64]) {
    assert!(is_balanced(&from_sorted(values)));
}

#[test]
fn given_power_of_two_minus_one_values_when_building_then_tree_is_perfect() {
    let values: Vec<i64> = (1..=15).collect();
    let tree = from_sorted(&values);

    assert_eq!(max_depth(&tree), 4);
}

// ============================================================
// Middle policy
// ============================================================

#[test]
fn given_even_range_when_building_then_lower_middle_becomes_root() {
    let tree = from_sorted(&[1, 3]);
    let root = tree.node(tree.root().unwrap()).unwrap();

    assert_eq!(root.value, 1);
    assert!(root.left.is_none());
}

#[test]
fn given_odd_range_when_building_then_exact_middle_becomes_root() {
    let tree = from_sorted(&[-10, -3, 0, 5, 9]);
    let root = tree.node(tree.root().unwrap()).unwrap();

    assert_eq!(root.value, 0);
}
