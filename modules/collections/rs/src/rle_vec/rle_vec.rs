use derive_getters::Dissolve;
use eyre::{eyre, OptionExt, Result};

use arrbit_core_rs::num::PrimUInt;

use super::identical::Identical;

fn run_length<L: PrimUInt>(length: usize) -> Result<L> {
    L::from(length)
        .ok_or_else(|| eyre!("Run length {} can't fit in {:?}", length, L::max_value()))
}

pub struct RleVecBuilder<V, L: PrimUInt, I: Identical<V>> {
    values: Option<Vec<V>>,
    lengths: Option<Vec<L>>,
    identical: I,
}

impl<V, L: PrimUInt, I: Identical<V>> RleVecBuilder<V, L, I> {
    pub fn new(identical: I) -> Self {
        Self {
            values: None,
            lengths: None,
            identical,
        }
    }

    /// Encode a dense sequence, cloning one representative per run.
    pub fn with_dense_values(mut self, dense: &[V]) -> Result<Self>
    where
        V: Clone,
    {
        let mut values = self.values.take().unwrap_or_default();
        values.clear();
        let mut lengths = self.lengths.take().unwrap_or_default();
        lengths.clear();

        if let Some(first) = dense.first() {
            let mut current = first;
            let mut length = 0usize;

            for value in dense {
                if !self.identical.identical(current, value) {
                    values.push(current.clone());
                    lengths.push(run_length(length)?);

                    current = value;
                    length = 0;
                }
                length += 1;
            }

            values.push(current.clone());
            lengths.push(run_length(length)?);
        }

        self.values = Some(values);
        self.lengths = Some(lengths);
        Ok(self)
    }

    /// Encode a dense sequence reusing its buffer for run values.
    ///
    /// Representatives are compacted to the front of `values` with a single write cursor,
    /// then the buffer is truncated to the number of runs.
    pub fn with_dense_values_inplace(mut self, mut values: Vec<V>) -> Result<Self> {
        let mut lengths = self.lengths.take().unwrap_or_default();
        lengths.clear();

        if values.is_empty() {
            self.values = Some(values);
            self.lengths = Some(lengths);
            return Ok(self);
        }

        let mut written = 0;
        let mut length = 1usize;
        for cursor in 1..values.len() {
            if !self.identical.identical(&values[written], &values[cursor]) {
                lengths.push(run_length(length)?);
                debug_assert_eq!(lengths.len(), written + 1);

                written += 1;
                values.swap(written, cursor);
                length = 0;
            }
            length += 1;
        }
        lengths.push(run_length(length)?);

        values.truncate(written + 1);
        debug_assert_eq!(values.len(), lengths.len());

        self.values = Some(values);
        self.lengths = Some(lengths);
        Ok(self)
    }

    pub fn build(self) -> RleVec<V, L, I> {
        RleVec {
            values: self.values.unwrap_or_default(),
            lengths: self.lengths.unwrap_or_default(),
            identical: self.identical,
        }
    }
}

/// Run-length encoded vector: parallel buffers of run values and run lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Dissolve)]
pub struct RleVec<V, L: PrimUInt, I: Identical<V>> {
    values: Vec<V>,
    lengths: Vec<L>,
    identical: I,
}

impl<V, L: PrimUInt, I: Identical<V>> RleVec<V, L, I> {
    pub fn builder(identical: I) -> RleVecBuilder<V, L, I> {
        RleVecBuilder::new(identical)
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Number of elements in the dense representation.
    pub fn dense_len(&self) -> Result<usize> {
        self.lengths.iter().try_fold(0usize, |total, length| {
            length
                .to_usize()
                .and_then(|length| total.checked_add(length))
                .ok_or_eyre("Dense length doesn't fit in usize")
        })
    }

    pub fn runs(&self) -> impl Iterator<Item = (&V, &L)> {
        self.values.iter().zip(self.lengths.iter())
    }

    /// Longest stretch of adjacent runs whose values all satisfy `predicate`.
    ///
    /// Adjacent matching runs are summed, so the result doesn't depend on whether
    /// neighbouring runs were collapsed. Returns zero when nothing matches.
    pub fn longest_run_where(&self, mut predicate: impl FnMut(&V) -> bool) -> Result<L> {
        let mut longest = L::zero();
        let mut current = L::zero();
        for (value, length) in self.runs() {
            if predicate(value) {
                current = current
                    .checked_add(length)
                    .ok_or_else(|| eyre!("Run length overflow in {:?}", L::max_value()))?;
                longest = longest.max(current);
            } else {
                current = L::zero();
            }
        }
        Ok(longest)
    }
}
