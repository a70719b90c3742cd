//! Cross-checking two strategies against each other.
//!
//! Minima need not be unique, so agreement is judged on the values at the
//! returned indices, not on the indices themselves.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::data::sample_range;
use crate::rmq::RangeMinimum;

/// Why two strategies were found to disagree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The sequence is empty, so no range can be sampled.
    #[error("cannot verify against an empty sequence")]
    EmptyData,

    /// The minima found for a range have different values.
    #[error("strategies disagree on [{i}, {j}]: reference index {expected}, candidate index {found}")]
    Disagreement {
        /// Range start.
        i: usize,
        /// Range end (inclusive).
        j: usize,
        /// Index returned by the reference.
        expected: usize,
        /// Index returned by the candidate.
        found: usize,
    },
}

fn compare<T: Ord>(
    data: &[T],
    reference: &dyn RangeMinimum,
    candidate: &dyn RangeMinimum,
    i: usize,
    j: usize,
) -> Result<(), VerifyError> {
    let expected = reference.query(i, j);
    let found = candidate.query(i, j);
    if data[expected] == data[found] {
        Ok(())
    } else {
        Err(VerifyError::Disagreement {
            i,
            j,
            expected,
            found,
        })
    }
}

/// Compare both (already preprocessed) strategies on `queries` random
/// ranges drawn with `seed`.
pub fn verify_agreement<T: Ord>(
    data: &[T],
    reference: &dyn RangeMinimum,
    candidate: &dyn RangeMinimum,
    queries: usize,
    seed: u64,
) -> Result<(), VerifyError> {
    if data.is_empty() {
        return Err(VerifyError::EmptyData);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..queries {
        let (i, j) = sample_range(&mut rng, data.len());
        compare(data, reference, candidate, i, j)?;
    }
    Ok(())
}

/// Compare both strategies on every range. Quadratic; meant for small
/// inputs.
pub fn verify_all_ranges<T: Ord>(
    data: &[T],
    reference: &dyn RangeMinimum,
    candidate: &dyn RangeMinimum,
) -> Result<(), VerifyError> {
    if data.is_empty() {
        return Err(VerifyError::EmptyData);
    }
    for i in 0..data.len() {
        for j in i..data.len() {
            compare(data, reference, candidate, i, j)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rmq::{NoPreRmq, SparseTableRmq};

    /// Always answers the range start.
    struct First;

    impl RangeMinimum for First {
        fn preprocess(&mut self) {}
        fn query(&self, i: usize, _j: usize) -> usize {
            i
        }
    }

    #[test]
    fn equal_values_at_different_indices_agree() {
        let data = [1, 1];
        let reference = NoPreRmq::new(&data);
        assert_eq!(verify_all_ranges(&data, &reference, &First), Ok(()));
    }

    #[test]
    fn reports_first_disagreement() {
        let data = [2, 1, 3];
        let reference = NoPreRmq::new(&data);
        assert_eq!(
            verify_all_ranges(&data, &reference, &First),
            Err(VerifyError::Disagreement {
                i: 0,
                j: 1,
                expected: 1,
                found: 0
            })
        );
        assert!(verify_agreement(&data, &reference, &First, 200, 9).is_err());
    }

    #[test]
    fn agreeing_strategies_pass() {
        let data = [4, 7, 1, 9, 1, 0, 3];
        let reference = NoPreRmq::new(&data);
        let mut candidate = SparseTableRmq::new(&data);
        candidate.preprocess();
        assert_eq!(verify_agreement(&data, &reference, &candidate, 500, 2), Ok(()));
    }

    #[test]
    fn empty_input_is_rejected() {
        let data: [u8; 0] = [];
        let reference = NoPreRmq::new(&data);
        assert_eq!(
            verify_agreement(&data, &reference, &First, 1, 0),
            Err(VerifyError::EmptyData)
        );
    }
}
