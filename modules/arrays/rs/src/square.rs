use eyre::{eyre, Report, Result};

use arrbit_core_rs::num::{checked_square, PrimInt};

use crate::{absent, violation};

fn overflow<T: PrimInt>(operation: &str, ind: usize, value: T) -> Report {
    violation(
        operation,
        eyre!(
            "{}: square of {:?} at index {} overflows {:?}",
            operation,
            value,
            ind,
            T::max_value()
        ),
    )
}

/// Copy of `seq` where every element at an even index (0, 2, 4, ...) is squared.
/// Odd-indexed elements are kept as is.
pub fn square_even<T: PrimInt>(seq: Option<&[T]>) -> Result<Option<Vec<T>>> {
    let Some(seq) = seq else {
        return absent("square_even");
    };

    let squared = seq
        .iter()
        .enumerate()
        .map(|(ind, &value)| {
            if ind % 2 == 0 {
                checked_square(value).ok_or_else(|| overflow("square_even", ind, value))
            } else {
                Ok(value)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(squared))
}

/// In-place version of [`square_even`]. Nothing is written if any square overflows.
pub fn square_even_inplace<T: PrimInt>(seq: Option<&mut [T]>) -> Result<Option<&mut [T]>> {
    let Some(seq) = seq else {
        return absent("square_even_inplace");
    };

    if let Some((ind, &value)) = seq
        .iter()
        .enumerate()
        .step_by(2)
        .find(|(_, value)| checked_square(**value).is_none())
    {
        return Err(overflow("square_even_inplace", ind, value));
    }

    for value in seq.iter_mut().step_by(2) {
        *value = *value * *value;
    }
    Ok(Some(seq))
}
