use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// Number of decimal digits in a non-negative integer, `None` for negative values.
///
/// Zero is written as `"0"` and therefore has one digit. The value is taken by copy, so
/// the caller's element is never touched by the repeated division.
pub fn decimal_digits<T: PrimInt>(value: T) -> Option<u32> {
    if value < T::zero() {
        return None;
    }
    // 8 + 2, no fallible cast involved: `None` is returned for negative values only
    let ten = (T::one() << 3) + (T::one() << 1);

    let mut rest = value;
    let mut digits = 1;
    while rest >= ten {
        rest = rest / ten;
        digits += 1;
    }
    Some(digits)
}

/// Square of the value, `None` on overflow.
#[inline]
pub fn checked_square<T: PrimInt>(value: T) -> Option<T> {
    value.checked_mul(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digits() {
        for (value, expected) in [
            (0i64, Some(1)),
            (1, Some(1)),
            (9, Some(1)),
            (10, Some(2)),
            (12, Some(2)),
            (99, Some(2)),
            (100, Some(3)),
            (345, Some(3)),
            (7896, Some(4)),
            (i64::MAX, Some(19)),
            (-1, None),
            (i64::MIN, None),
        ] {
            assert_eq!(decimal_digits(value), expected, "value: {value}");
        }
    }

    #[test]
    fn test_decimal_digits_small_types() {
        assert_eq!(decimal_digits(9u8), Some(1));
        assert_eq!(decimal_digits(10i8), Some(2));
        assert_eq!(decimal_digits(u8::MAX), Some(3));
        assert_eq!(decimal_digits(i8::MAX), Some(3));
        assert_eq!(decimal_digits(i8::MIN), None);
        assert_eq!(decimal_digits(u128::MAX), Some(39));
    }

    #[test]
    fn test_checked_square() {
        assert_eq!(checked_square(-9i32), Some(81));
        assert_eq!(checked_square(56i32), Some(3136));
        assert_eq!(checked_square(0u8), Some(0));
        assert_eq!(checked_square(15u8), Some(225));
        assert_eq!(checked_square(16u8), None);
        assert_eq!(checked_square(12i8), None);
        assert_eq!(checked_square(i8::MIN), None);
    }
}
