//! Small dynamic-programming tables: Pascal's triangle and stair climbing.

/// First `rows` rows of Pascal's triangle. Row `i` (0-indexed) has `i + 1`
/// entries; each inner entry sums the two entries above it.
pub fn pascal_triangle(rows: usize) -> Vec<Vec<u64>> {
    let mut triangle: Vec<Vec<u64>> = Vec::with_capacity(rows);

    for i in 0..rows {
        let mut row = vec![1u64; i + 1];
        for j in 1..i {
            row[j] = triangle[i - 1][j - 1] + triangle[i - 1][j];
        }
        triangle.push(row);
    }

    triangle
}

/// Row `index` of Pascal's triangle in O(index) space.
///
/// The row is updated in place right to left so the entries still needed by
/// the current pass are never clobbered.
pub fn pascal_row(index: usize) -> Vec<u64> {
    let mut row = vec![1u64; index + 1];

    for i in 1..index {
        for j in (1..=i).rev() {
            row[j] += row[j - 1];
        }
    }

    row
}

/// Ways to climb `n` steps taking 1 or 2 at a time: the Fibonacci recurrence
/// `ways(n) = ways(n-1) + ways(n-2)` with `ways(1) = 1`, `ways(2) = 2`.
pub fn climb_stairs(n: u32) -> u64 {
    if n <= 2 {
        return u64::from(n);
    }

    let mut prev = 1u64;
    let mut current = 2u64;
    for _ in 3..=n {
        let next = prev + current;
        prev = current;
        current = next;
    }

    current
}
