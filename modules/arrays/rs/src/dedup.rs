use eyre::{eyre, Result};
use itertools::Itertools;

use arrbit_collections_rs::rle_vec::{Equal, RleVec};
use arrbit_core_rs::num::PrimInt;

use crate::{absent, violation};

fn ensure_sorted<T: PrimInt>(operation: &str, seq: &[T]) -> Result<()> {
    match seq.iter().tuple_windows().position(|(prev, next)| next < prev) {
        None => Ok(()),
        Some(ind) => Err(violation(
            operation,
            eyre!(
                "Sequence must be sorted in non-decreasing order, got {:?} after {:?} at index {}",
                seq[ind + 1],
                seq[ind],
                ind + 1
            ),
        )),
    }
}

/// Distinct values of a sorted sequence together with their multiplicities.
pub fn unique_runs<T: PrimInt>(seq: Option<&[T]>) -> Result<Option<RleVec<T, usize, Equal>>> {
    let Some(seq) = seq else {
        return absent("unique_runs");
    };
    ensure_sorted("unique_runs", seq)?;

    let runs = RleVec::builder(Equal)
        .with_dense_values_inplace(seq.to_vec())?
        .build();
    Ok(Some(runs))
}

/// Unique values of a sorted sequence, in order, as a freshly sized vector.
pub fn remove_duplicates_sorted<T: PrimInt>(seq: Option<&[T]>) -> Result<Option<Vec<T>>> {
    let Some(seq) = seq else {
        return absent("remove_duplicates_sorted");
    };
    ensure_sorted("remove_duplicates_sorted", seq)?;

    let (values, _, _) = RleVec::<T, usize, Equal>::builder(Equal)
        .with_dense_values_inplace(seq.to_vec())?
        .build()
        .dissolve();
    Ok(Some(values))
}

/// Compacts unique values of a sorted slice to its front and returns their count `k`.
///
/// Elements at `k..` keep whatever values were left there by the compaction and should be
/// ignored. The slice is left untouched when it isn't sorted.
pub fn remove_duplicates_sorted_inplace<T: PrimInt>(
    seq: Option<&mut [T]>,
) -> Result<Option<usize>> {
    let Some(seq) = seq else {
        return absent("remove_duplicates_sorted_inplace");
    };
    ensure_sorted("remove_duplicates_sorted_inplace", seq)?;

    if seq.is_empty() {
        return Ok(Some(0));
    }

    let mut written = 1;
    for cursor in 1..seq.len() {
        if seq[cursor] != seq[written - 1] {
            seq[written] = seq[cursor];
            written += 1;
        }
    }
    Ok(Some(written))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_duplicates_sorted() -> Result<()> {
        for (seq, expected) in [
            (vec![], vec![]),
            (vec![5], vec![5]),
            (vec![1, 1, 2], vec![1, 2]),
            (vec![0, 0, 1, 1, 1, 2, 2, 3, 3, 4], vec![0, 1, 2, 3, 4]),
            (vec![-3, -3, -3], vec![-3]),
            (vec![-2, -1, 0, 1], vec![-2, -1, 0, 1]),
        ] {
            assert_eq!(
                remove_duplicates_sorted(Some(seq.as_slice()))?,
                Some(expected.clone())
            );

            let mut inplace = seq.clone();
            let unique = remove_duplicates_sorted_inplace(Some(inplace.as_mut_slice()))?;
            assert_eq!(unique, Some(expected.len()));
            assert_eq!(&inplace[..expected.len()], expected.as_slice());
            assert_eq!(inplace.len(), seq.len());
        }
        Ok(())
    }

    #[test]
    fn test_unique_runs() -> Result<()> {
        let runs = unique_runs(Some([0, 0, 1, 1, 1, 2, 2, 3, 3, 4].as_slice()))?
            .ok_or_else(|| eyre!("expected runs"))?;
        assert_eq!(
            runs.runs().map(|(v, l)| (*v, *l)).collect::<Vec<_>>(),
            vec![(0, 2), (1, 3), (2, 2), (3, 2), (4, 1)]
        );
        assert_eq!(runs.dense_len()?, 10);
        Ok(())
    }

    #[test]
    fn test_unsorted_is_rejected() {
        let mut seq = vec![1, 3, 2, 2];
        let err = remove_duplicates_sorted(Some(seq.as_slice())).unwrap_err();
        assert!(err.to_string().contains("index 2"), "{err}");

        assert!(unique_runs(Some(seq.as_slice())).is_err());
        assert!(remove_duplicates_sorted_inplace(Some(seq.as_mut_slice())).is_err());
        assert_eq!(seq, vec![1, 3, 2, 2]);
    }

    #[test]
    fn test_absent() -> Result<()> {
        assert_eq!(remove_duplicates_sorted::<i64>(None)?, None);
        assert_eq!(remove_duplicates_sorted_inplace::<i64>(None)?, None);
        assert!(unique_runs::<i64>(None)?.is_none());
        Ok(())
    }
}
