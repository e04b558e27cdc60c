//! Integer primitives with defined overflow behaviour.
//!
//! Signed overflow is never allowed to happen implicitly: additions report
//! their carry, and multiplications go through a 128 bit intermediate so that
//! nothing is lost before the result is split up again.

/// Add with two's complement wrapping.
#[inline]
pub const fn add_wrapped(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Subtract with two's complement wrapping.
#[inline]
pub const fn sub_wrapped(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Add `a` and `b`, returning `(sum, carry)`.
///
/// The carry is `0` when the sum fits, `+1` on overflow and `-1` on
/// underflow. The exact result is always `carry * 2^63 + sum`, so no
/// information is lost even when the addition does not fit.
///
/// # Example
/// ```
/// # use picotime::time::arith::add_with_carry;
/// assert_eq!(add_with_carry(2, 3), (5, 0));
/// assert_eq!(add_with_carry(i64::MAX, 1), (0, 1));
/// assert_eq!(add_with_carry(i64::MIN, -1), (-1, -1));
/// ```
#[inline]
pub const fn add_with_carry(a: i64, b: i64) -> (i64, i64) {
    let (sum, overflowed) = a.overflowing_add(b);
    if !overflowed {
        return (sum, 0);
    }

    // Flipping the top bit removes the 2^63 the wrap added or took away.
    let adjusted = sum ^ i64::MIN;
    if sum < 0 {
        (adjusted, 1)
    } else {
        (adjusted, -1)
    }
}

/// Add `a` and `b`, returning `None` when the sum does not fit.
#[inline]
pub const fn add_safely(a: i64, b: i64) -> Option<i64> {
    match add_with_carry(a, b) {
        (sum, 0) => Some(sum),
        _ => None,
    }
}

/// Multiply `a` by `b`, returning the full product as `(hi, lo)` halves.
///
/// Note that a negative product that fits in 64 bits has a high half of
/// `-1`, not `0`, due to sign extension.
///
/// # Example
/// ```
/// # use picotime::time::arith::mul128;
/// assert_eq!(mul128(3, 4), (0, 12));
/// assert_eq!(mul128(-3, 4), (-1, -12));
/// assert_eq!(mul128(i64::MAX, 2), (0, -2));
/// ```
#[inline]
pub const fn mul128(a: i64, b: i64) -> (i64, i64) {
    let product = a as i128 * b as i128;
    split128(product)
}

/// Divide the 128 bit value `(hi, lo)` by `divisor`, returning
/// `(quotient, remainder)` truncated towards zero.
///
/// Returns `None` when `divisor` is zero or the quotient does not fit in 64
/// bits.
///
/// # Example
/// ```
/// # use picotime::time::arith::{div128, mul128};
/// let (hi, lo) = mul128(i64::MAX, 1_000);
/// assert_eq!(div128(hi, lo, 1_000), Some((i64::MAX, 0)));
/// assert_eq!(div128(0, 7, 0), None);
/// ```
#[inline]
pub const fn div128(hi: i64, lo: i64, divisor: i64) -> Option<(i64, i64)> {
    if divisor == 0 {
        return None;
    }

    let dividend = join128(hi, lo);
    // Only -2^127 / -1 can overflow here
    let (quotient, remainder) = match (
        dividend.checked_div(divisor as i128),
        dividend.checked_rem(divisor as i128),
    ) {
        (Some(quotient), Some(remainder)) => (quotient, remainder),
        _ => return None,
    };

    if quotient > i64::MAX as i128 || quotient < i64::MIN as i128 {
        return None;
    }

    Some((quotient as i64, remainder as i64))
}

#[inline]
const fn split128(value: i128) -> (i64, i64) {
    ((value >> 64) as i64, value as i64)
}

#[inline]
const fn join128(hi: i64, lo: i64) -> i128 {
    ((hi as i128) << 64) | (lo as u64 as i128)
}
