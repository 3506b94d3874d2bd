//! Tests for array two-pointer, binary-search, and digit katas.

use algokata::algorithms::digits::{plus_one, single_number, two_sum};
use algokata::algorithms::search::{isqrt, search_insert};
use algokata::algorithms::two_pointer::{
    max_area, max_profit, merge_in_place, remove_duplicates, remove_element,
};
use rstest::rstest;

// ============================================================
// Max profit
// ============================================================

#[test]
fn given_fluctuating_prices_when_computing_profit_then_best_spread_found() {
    assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
}

#[rstest]
#[case(&[7, 6, 4, 3, 1])]
#[case(&[5, 5, 5])]
#[case(&[9])]
#[case(&[])]
fn given_non_increasing_prices_when_computing_profit_then_zero(#[case] prices: &[i64]) {
    assert_eq!(max_profit(prices), 0);
}

// ============================================================
// Container with most water
// ============================================================

#[rstest]
#[case(&[1, 8, 6, 2, 5, 4, 8, 3, 7], 49)]
#[case(&[1, 1], 1)]
#[case(&[4, 3, 2, 1, 4], 16)]
#[case(&[1, 2, 1], 2)]
#[case(&[5], 0)]
#[case(&[], 0)]
fn given_heights_when_computing_area_then_matches(#[case] heights: &[i64], #[case] expected: i64) {
    assert_eq!(max_area(heights), expected);
}

// ============================================================
// In-place compaction
// ============================================================

#[test]
fn given_sorted_duplicates_when_compacting_then_prefix_holds_unique_values() {
    let mut values = [0, 0, 1, 1, 1, 2, 2, 3, 3, 4];

    let count = remove_duplicates(&mut values);

    assert_eq!(count, 5);
    assert_eq!(&values[..count], &[0, 1, 2, 3, 4]);
}

#[test]
fn given_empty_slice_when_compacting_then_zero() {
    let mut values: [i64; 0] = [];
    assert_eq!(remove_duplicates(&mut values), 0);
}

#[test]
fn given_target_value_when_removing_then_prefix_keeps_the_rest_in_order() {
    let mut values = [0, 1, 2, 2, 3, 0, 4, 2];

    let count = remove_element(&mut values, 2);

    assert_eq!(count, 5);
    assert_eq!(&values[..count], &[0, 1, 3, 0, 4]);
}

// ============================================================
// Back-to-front merge
// ============================================================

#[test]
fn given_trailing_capacity_when_merging_then_sorted_union() {
    let mut first = [1, 2, 3, 0, 0, 0];

    merge_in_place(&mut first, 3, &[2, 5, 6]);

    assert_eq!(first, [1, 2, 2, 3, 5, 6]);
}

#[test]
fn given_empty_first_when_merging_then_second_copied() {
    let mut first = [0, 0];

    merge_in_place(&mut first, 0, &[2, 5]);

    assert_eq!(first, [2, 5]);
}

#[test]
fn given_empty_second_when_merging_then_first_untouched() {
    let mut first = [1, 4, 9];

    merge_in_place(&mut first, 3, &[]);

    assert_eq!(first, [1, 4, 9]);
}

// ============================================================
// Binary search family
// ============================================================

#[rstest]
#[case(&[1, 3, 5, 6], 5, 2)]
#[case(&[1, 3, 5, 6], 2, 1)]
#[case(&[1, 3, 5, 6], 7, 4)]
#[case(&[1, 3, 5, 6], 0, 0)]
#[case(&[], 3, 0)]
fn given_sorted_values_when_searching_insert_position_then_first_ge_index(
    #[case] values: &[i64],
    #[case] target: i64,
    #[case] expected: usize,
) {
    assert_eq!(search_insert(values, target), expected);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(4, 2)]
#[case(8, 2)]
#[case(9, 3)]
#[case(16, 4)]
#[case(17, 4)]
#[case(24, 4)]
#[case(25, 5)]
#[case(2_147_395_599, 46_339)]
#[case(1_000_000_000_000_000_000, 1_000_000_000)]
fn given_x_when_isqrt_then_floor_root(#[case] x: u64, #[case] expected: u64) {
    assert_eq!(isqrt(x), expected);
}

#[test]
fn given_perfect_square_boundaries_when_isqrt_then_exact() {
    for root in [0u64, 1, 2, 3, 10, 100, 65_535, 65_536] {
        let square = root * root;
        assert_eq!(isqrt(square), root);
        if square > 0 {
            assert_eq!(isqrt(square - 1), root - 1);
        }
    }
}

// ============================================================
// Digit katas
// ============================================================

#[rstest]
#[case(&[2, 7, 11, 15], 9, Some((0, 1)))]
#[case(&[3, 2, 4], 6, Some((1, 2)))]
#[case(&[3, 3], 6, Some((0, 1)))]
#[case(&[1, 2, 3], 7, None)]
#[case(&[], 0, None)]
fn given_values_when_two_sum_then_complement_indices(
    #[case] values: &[i64],
    #[case] target: i64,
    #[case] expected: Option<(usize, usize)>,
) {
    assert_eq!(two_sum(values, target), expected);
}

#[rstest]
#[case(&[2, 2, 1], 1)]
#[case(&[4, 1, 2, 1, 2], 4)]
#[case(&[1], 1)]
fn given_paired_values_when_xor_folding_then_single_value_remains(
    #[case] values: &[i64],
    #[case] expected: i64,
) {
    assert_eq!(single_number(values), expected);
}

#[rstest]
#[case(&[1, 2, 3], &[1, 2, 4])]
#[case(&[4, 3, 2, 1], &[4, 3, 2, 2])]
#[case(&[9], &[1, 0])]
#[case(&[9, 9, 9], &[1, 0, 0, 0])]
fn given_digit_vector_when_incrementing_then_carry_propagates(
    #[case] digits: &[u8],
    #[case] expected: &[u8],
) {
    assert_eq!(plus_one(digits), expected);
}
