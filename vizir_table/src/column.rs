// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column storage.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// The value type carried by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Categorical labels.
    Category,
    /// Numeric values.
    Number,
}

/// Columnar storage for a single named column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Categorical labels, one per row.
    Category(Vec<String>),
    /// Numeric values, one per row.
    Number(Vec<f64>),
}

impl ColumnData {
    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Self::Category(v) => v.len(),
            Self::Number(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value type of this column.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Category(_) => ColumnKind::Category,
            Self::Number(_) => ColumnKind::Number,
        }
    }

    /// Converts this column into categorical labels.
    ///
    /// Numeric values are rendered with `f64`'s `Display` form, so `2020.0` becomes `"2020"`.
    pub fn into_categories(self) -> Vec<String> {
        match self {
            Self::Category(v) => v,
            Self::Number(v) => v.into_iter().map(|x| format!("{x}")).collect(),
        }
    }

    /// Appends another column of the same kind.
    ///
    /// Returns the rejected column unchanged when the kinds differ.
    pub(crate) fn append(&mut self, other: Self) -> Result<(), Self> {
        match (self, other) {
            (Self::Category(a), Self::Category(b)) => {
                a.extend(b);
                Ok(())
            }
            (Self::Number(a), Self::Number(b)) => {
                a.extend(b);
                Ok(())
            }
            (_, other) => Err(other),
        }
    }
}
