use eyre::{eyre, Result};

use arrbit_collections_rs::rle_vec::{Equal, RleVec};
use arrbit_core_rs::num::PrimInt;

use crate::{absent, violation};

/// Length of the longest streak of consecutive 1s in a binary sequence.
///
/// Returns 0 for an empty sequence or a sequence without 1s. Any element other than 0 or 1
/// is an error.
pub fn max_consecutive_ones<T: PrimInt>(seq: Option<&[T]>) -> Result<Option<usize>> {
    let Some(seq) = seq else {
        return absent("max_consecutive_ones");
    };

    let mut longest = 0;
    let mut streak = 0;
    for (ind, value) in seq.iter().enumerate() {
        if value.is_one() {
            streak += 1;
            longest = longest.max(streak);
        } else if value.is_zero() {
            streak = 0;
        } else {
            return Err(violation(
                "max_consecutive_ones",
                eyre!("Sequence must be binary, got {:?} at index {}", value, ind),
            ));
        }
    }
    Ok(Some(longest))
}

/// Length of the longest streak of elements equal to `value`.
pub fn longest_run<T: PartialEq + Clone>(seq: Option<&[T]>, value: &T) -> Result<Option<usize>> {
    let Some(seq) = seq else {
        return absent("longest_run");
    };

    let runs: RleVec<T, usize, Equal> = RleVec::builder(Equal).with_dense_values(seq)?.build();
    Ok(Some(runs.longest_run_where(|x| x == value)?))
}
