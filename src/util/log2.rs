//! Integer logarithms used for table heights and block sizes.

/// Floor of the base-2 logarithm. `floor_log2(0)` is defined as 0.
#[inline]
pub fn floor_log2(n: usize) -> usize {
    (usize::BITS - 1 - (n | 1).leading_zeros()) as usize
}

/// Ceiling of the base-2 logarithm. Both 0 and 1 map to 0.
#[inline]
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        floor_log2(n - 1) + 1
    }
}
