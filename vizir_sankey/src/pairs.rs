// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adjacent stage pairing.

extern crate alloc;

use alloc::vec::Vec;

use crate::SankeyError;

/// Two adjacent stage columns: flows go from `source` to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StagePair<'a> {
    /// The upstream stage column.
    pub source: &'a str,
    /// The downstream stage column.
    pub target: &'a str,
}

/// Pair each stage column with the next one.
///
/// `K` columns produce `K - 1` pairs. Fewer than two columns is an error.
pub fn stage_pairs<'a>(columns: &[&'a str]) -> Result<Vec<StagePair<'a>>, SankeyError> {
    if columns.len() < 2 {
        return Err(SankeyError::TooFewColumns {
            count: columns.len(),
        });
    }
    Ok(columns
        .windows(2)
        .map(|w| StagePair {
            source: w[0],
            target: w[1],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn pairs_are_consecutive() {
        let cols = ["a", "b", "c", "d"];
        let pairs = stage_pairs(&cols).unwrap();
        assert_eq!(pairs.len(), cols.len() - 1);
        for (i, p) in pairs.iter().enumerate() {
            assert_eq!(p.source, cols[i]);
            assert_eq!(p.target, cols[i + 1]);
        }
    }

    #[test]
    fn two_columns_make_one_pair() {
        assert_eq!(
            stage_pairs(&["from", "to"]).unwrap(),
            [StagePair {
                source: "from",
                target: "to"
            }]
        );
    }

    #[test]
    fn fewer_than_two_columns_is_an_error() {
        assert_eq!(
            stage_pairs(&["only"]),
            Err(SankeyError::TooFewColumns { count: 1 })
        );
        assert_eq!(
            stage_pairs(&[]),
            Err(SankeyError::TooFewColumns { count: 0 })
        );
    }
}
