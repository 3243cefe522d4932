// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group-by aggregation.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::column::ColumnData;
use crate::table::{TableFrame, TableFrameError};

impl TableFrame {
    /// Group rows by one or more categorical key columns and sum a numeric column per group.
    ///
    /// Output columns are `keys` (in order) followed by `value`. Output rows are ordered by the
    /// group key, compared column by column, so the result is deterministic regardless of input
    /// row order. `NaN` values are skipped by the sum (infinities are kept); a group whose values
    /// are all `NaN` sums to `0.0`.
    pub fn group_sum(&self, keys: &[&str], value: &str) -> Result<Self, TableFrameError> {
        if keys.is_empty() {
            return Err(TableFrameError::EmptyColumns);
        }
        let key_cols = keys
            .iter()
            .map(|&k| self.categories(k))
            .collect::<Result<Vec<_>, _>>()?;
        let values = self.numbers(value)?;

        let mut groups: HashMap<Vec<&str>, usize> = HashMap::new();
        let mut order: Vec<Vec<&str>> = Vec::new();
        let mut sums: Vec<f64> = Vec::new();

        for (row, &v) in values.iter().enumerate() {
            let key: Vec<&str> = key_cols.iter().map(|c| c[row].as_str()).collect();
            let idx = match groups.get(&key).copied() {
                Some(i) => i,
                None => {
                    let i = sums.len();
                    order.push(key.clone());
                    groups.insert(key, i);
                    sums.push(0.0);
                    i
                }
            };
            if !v.is_nan() {
                sums[idx] += v;
            }
        }

        let mut sorted: Vec<usize> = (0..order.len()).collect();
        sorted.sort_by(|&a, &b| order[a].cmp(&order[b]));

        log::trace!(
            "group_sum: {} rows -> {} groups over {:?}",
            values.len(),
            sorted.len(),
            keys
        );

        let mut key_data: Vec<Vec<String>> = vec![Vec::with_capacity(sorted.len()); keys.len()];
        let mut value_data = Vec::with_capacity(sorted.len());
        for gi in sorted {
            for (col, part) in key_data.iter_mut().zip(&order[gi]) {
                col.push(part.to_string());
            }
            value_data.push(sums[gi]);
        }

        let mut out = Self::new();
        for (&name, col) in keys.iter().zip(key_data) {
            out.push_column(name, ColumnData::Category(col))?;
        }
        out.push_column(value, ColumnData::Number(value_data))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn group_sum_groups_by_key_and_sums() {
        let t = TableFrame::new()
            .with_category("src", ["x", "y", "x", "x"])
            .unwrap()
            .with_category("dst", ["y", "z", "y", "w"])
            .unwrap()
            .with_number("val", [5.0, 1.0, 3.0, 2.0])
            .unwrap();

        let g = t.group_sum(&["src", "dst"], "val").unwrap();
        assert_eq!(g.column_names(), ["src", "dst", "val"]);
        // Rows come out sorted by key: (x,w), (x,y), (y,z).
        assert_eq!(g.categories("src").unwrap(), ["x", "x", "y"]);
        assert_eq!(g.categories("dst").unwrap(), ["w", "y", "z"]);
        assert_eq!(g.numbers("val").unwrap(), [2.0, 8.0, 1.0]);
    }

    #[test]
    fn group_sum_skips_nan_but_keeps_infinities() {
        let t = TableFrame::new()
            .with_category("k", ["a", "a", "b", "c", "c"])
            .unwrap()
            .with_number("v", [1.0, f64::NAN, f64::INFINITY, f64::NAN, f64::NAN])
            .unwrap();
        let g = t.group_sum(&["k"], "v").unwrap();
        assert_eq!(g.numbers("v").unwrap(), [1.0, f64::INFINITY, 0.0]);
    }

    #[test]
    fn group_sum_requires_typed_columns() {
        let t = TableFrame::new()
            .with_category("k", ["a"])
            .unwrap()
            .with_number("v", [1.0])
            .unwrap();
        assert_eq!(
            t.group_sum(&["v"], "v"),
            Err(TableFrameError::NotCategorical("v".to_string()))
        );
        assert_eq!(
            t.group_sum(&["k"], "k"),
            Err(TableFrameError::NotNumeric("k".to_string()))
        );
        assert_eq!(t.group_sum(&[], "v"), Err(TableFrameError::EmptyColumns));
    }

    #[test]
    fn group_sum_of_empty_table_is_empty() {
        let t = TableFrame::new()
            .with_category("k", Vec::<String>::new())
            .unwrap()
            .with_number("v", [])
            .unwrap();
        let g = t.group_sum(&["k"], "v").unwrap();
        assert_eq!(g.row_count(), 0);
        assert_eq!(g.column_names(), ["k", "v"]);
    }
}
