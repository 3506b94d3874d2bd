//! Binary-search family. The boundary conventions here are the whole
//! contract; every bound below is deliberate.

/// First index whose value is >= `target` in a sorted slice, i.e. where
/// `target` would be inserted to keep the order.
///
/// Half-open `lo..hi` search; `lo` at loop termination is the answer.
pub fn search_insert(values: &[i64], target: i64) -> usize {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if values[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Floor of the square root of `x`.
///
/// Searches for the largest `mid` with `mid * mid <= x`; under that
/// convention the `hi` bound at termination is the answer. Squares are
/// widened to u128 so the probe cannot overflow.
pub fn isqrt(x: u64) -> u64 {
    if x < 2 {
        return x;
    }

    let mut lo: u64 = 1;
    let mut hi: u64 = x;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let square = (mid as u128) * (mid as u128);

        if square == x as u128 {
            return mid;
        } else if square < x as u128 {
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    hi
}
