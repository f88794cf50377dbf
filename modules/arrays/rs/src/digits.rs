use eyre::{eyre, Result};

use arrbit_core_rs::num::{decimal_digits, PrimInt};

use crate::{absent, violation};

/// Number of elements whose decimal representation has an even number of digits.
///
/// Elements must be non-negative; `0` counts as a single digit.
pub fn count_even_digit_count<T: PrimInt>(seq: Option<&[T]>) -> Result<Option<usize>> {
    let Some(seq) = seq else {
        return absent("count_even_digit_count");
    };

    let mut count = 0;
    for (ind, &value) in seq.iter().enumerate() {
        let digits = decimal_digits(value).ok_or_else(|| {
            violation(
                "count_even_digit_count",
                eyre!(
                    "Digits are counted for non-negative values only, got {:?} at index {}",
                    value,
                    ind
                ),
            )
        })?;
        if digits % 2 == 0 {
            count += 1;
        }
    }
    Ok(Some(count))
}
