// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned table representation and row/column operators.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::column::{ColumnData, ColumnKind};

/// Errors returned when building or transforming a [`TableFrame`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableFrameError {
    /// The requested column list is empty.
    #[error("no columns requested")]
    EmptyColumns,
    /// A requested column is not present in the frame.
    #[error("column `{0}` not found")]
    MissingColumn(String),
    /// A column name appears more than once.
    #[error("column `{0}` already exists")]
    DuplicateColumn(String),
    /// A column does not have the same number of rows as the frame.
    #[error("column `{column}` has {actual} rows, expected {expected}")]
    LengthMismatch {
        /// The offending column.
        column: String,
        /// The frame's row count.
        expected: usize,
        /// The column's row count.
        actual: usize,
    },
    /// A column was required to be numeric.
    #[error("column `{0}` is not numeric")]
    NotNumeric(String),
    /// A column was required to be categorical.
    #[error("column `{0}` is not categorical")]
    NotCategorical(String),
    /// A rename supplied the wrong number of names.
    #[error("rename expects {expected} names, got {actual}")]
    RenameMismatch {
        /// Number of columns in the frame.
        expected: usize,
        /// Number of names supplied.
        actual: usize,
    },
    /// Two frames with different column names or kinds were concatenated.
    #[error("cannot concatenate tables with different schemas")]
    SchemaMismatch,
}

/// An owned table of named, equal-length columns.
///
/// This is a deliberately small representation:
/// - an ordered list of column names,
/// - one [`ColumnData`] per name (categorical or numeric).
///
/// A frame with no columns has zero rows and acts as the identity for [`TableFrame::concat`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFrame {
    columns: Vec<String>,
    data: Vec<ColumnData>,
}

impl TableFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`TableFrame::push_column`] for a categorical column.
    pub fn with_category<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Self, TableFrameError> {
        let values = values.into_iter().map(Into::into).collect();
        self.push_column(name, ColumnData::Category(values))?;
        Ok(self)
    }

    /// Builder-style [`TableFrame::push_column`] for a numeric column.
    pub fn with_number(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, TableFrameError> {
        self.push_column(name, ColumnData::Number(values.into_iter().collect()))?;
        Ok(self)
    }

    /// Append a column.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        data: ColumnData,
    ) -> Result<(), TableFrameError> {
        let name = name.into();
        if self.column_index(&name).is_some() {
            return Err(TableFrameError::DuplicateColumn(name));
        }
        if let Some(first) = self.data.first()
            && first.len() != data.len()
        {
            return Err(TableFrameError::LengthMismatch {
                column: name,
                expected: first.len(),
                actual: data.len(),
            });
        }
        self.columns.push(name);
        self.data.push(data);
        Ok(())
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.data.first().map_or(0, ColumnData::len)
    }

    /// Returns the column names, in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns a column index for a name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns a column by name, if present.
    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.column_index(name).map(|i| &self.data[i])
    }

    fn require(&self, name: &str) -> Result<&ColumnData, TableFrameError> {
        self.column(name)
            .ok_or_else(|| TableFrameError::MissingColumn(name.to_string()))
    }

    /// Returns the labels of a categorical column.
    pub fn categories(&self, name: &str) -> Result<&[String], TableFrameError> {
        match self.require(name)? {
            ColumnData::Category(v) => Ok(v.as_slice()),
            ColumnData::Number(_) => Err(TableFrameError::NotCategorical(name.to_string())),
        }
    }

    /// Returns the values of a numeric column.
    pub fn numbers(&self, name: &str) -> Result<&[f64], TableFrameError> {
        match self.require(name)? {
            ColumnData::Number(v) => Ok(v.as_slice()),
            ColumnData::Category(_) => Err(TableFrameError::NotNumeric(name.to_string())),
        }
    }

    /// Select a subset of columns, in the requested order.
    ///
    /// A name may be requested more than once; the output then carries repeated names until it
    /// is [renamed](TableFrame::rename).
    pub fn project(&self, names: &[&str]) -> Result<Self, TableFrameError> {
        if names.is_empty() {
            return Err(TableFrameError::EmptyColumns);
        }
        let mut columns = Vec::with_capacity(names.len());
        let mut data = Vec::with_capacity(names.len());
        for &name in names {
            data.push(self.require(name)?.clone());
            columns.push(name.to_string());
        }
        Ok(Self { columns, data })
    }

    /// Replace every column name, positionally.
    pub fn rename(mut self, names: &[&str]) -> Result<Self, TableFrameError> {
        if names.len() != self.columns.len() {
            return Err(TableFrameError::RenameMismatch {
                expected: self.columns.len(),
                actual: names.len(),
            });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(TableFrameError::DuplicateColumn(name.to_string()));
            }
        }
        self.columns = names.iter().map(|n| n.to_string()).collect();
        Ok(self)
    }

    /// Convert the named columns to categorical labels.
    ///
    /// Columns that are already categorical are left as-is.
    pub fn into_categories(mut self, names: &[&str]) -> Result<Self, TableFrameError> {
        for &name in names {
            let Some(i) = self.column_index(name) else {
                return Err(TableFrameError::MissingColumn(name.to_string()));
            };
            if self.data[i].kind() == ColumnKind::Number {
                let col = core::mem::replace(&mut self.data[i], ColumnData::Category(Vec::new()));
                self.data[i] = ColumnData::Category(col.into_categories());
            }
        }
        Ok(self)
    }

    /// Append the rows of `other` below the rows of `self`.
    ///
    /// Both frames must have the same column names and kinds, in the same order. Concatenating
    /// onto a frame without columns adopts `other` as-is.
    pub fn concat(&mut self, other: Self) -> Result<(), TableFrameError> {
        if self.columns.is_empty() {
            *self = other;
            return Ok(());
        }
        let same_schema = self.columns == other.columns
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.kind() == b.kind());
        if !same_schema {
            return Err(TableFrameError::SchemaMismatch);
        }
        for (dst, src) in self.data.iter_mut().zip(other.data) {
            dst.append(src)
                .map_err(|_| TableFrameError::SchemaMismatch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn frame() -> TableFrame {
        TableFrame::new()
            .with_category("a", ["x", "x", "y"])
            .unwrap()
            .with_category("b", ["p", "q", "q"])
            .unwrap()
            .with_number("v", [1.0, 2.0, 3.0])
            .unwrap()
    }

    #[test]
    fn push_column_checks_length_and_duplicates() {
        let mut t = frame();
        assert_eq!(
            t.push_column("c", ColumnData::Number(vec![1.0])),
            Err(TableFrameError::LengthMismatch {
                column: "c".to_string(),
                expected: 3,
                actual: 1,
            })
        );
        assert_eq!(
            t.push_column("a", ColumnData::Number(vec![1.0, 2.0, 3.0])),
            Err(TableFrameError::DuplicateColumn("a".to_string()))
        );
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn project_selects_columns_in_order() {
        let t = frame().project(&["v", "a"]).unwrap();
        assert_eq!(t.column_names(), ["v", "a"]);
        assert_eq!(t.numbers("v").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(t.categories("a").unwrap(), ["x", "x", "y"]);
    }

    #[test]
    fn project_reports_missing_and_empty() {
        assert_eq!(
            frame().project(&["a", "nope"]),
            Err(TableFrameError::MissingColumn("nope".to_string()))
        );
        assert_eq!(frame().project(&[]), Err(TableFrameError::EmptyColumns));
    }

    #[test]
    fn project_then_rename_allows_repeated_names() {
        let t = frame().project(&["a", "a"]).unwrap();
        let t = t.rename(&["source", "target"]).unwrap();
        assert_eq!(t.categories("target").unwrap(), ["x", "x", "y"]);
    }

    #[test]
    fn rename_checks_arity_and_uniqueness() {
        assert_eq!(
            frame().rename(&["a"]),
            Err(TableFrameError::RenameMismatch {
                expected: 3,
                actual: 1
            })
        );
        assert_eq!(
            frame().rename(&["a", "a", "b"]),
            Err(TableFrameError::DuplicateColumn("a".to_string()))
        );
    }

    #[test]
    fn typed_accessors_check_kind() {
        let t = frame();
        assert_eq!(
            t.numbers("a"),
            Err(TableFrameError::NotNumeric("a".to_string()))
        );
        assert_eq!(
            t.categories("v"),
            Err(TableFrameError::NotCategorical("v".to_string()))
        );
    }

    #[test]
    fn into_categories_converts_numbers() {
        let t = frame().into_categories(&["v", "a"]).unwrap();
        assert_eq!(t.categories("v").unwrap(), ["1", "2", "3"]);
        assert_eq!(t.categories("a").unwrap(), ["x", "x", "y"]);
    }

    #[test]
    fn concat_appends_rows() {
        let mut acc = TableFrame::new();
        acc.concat(frame()).unwrap();
        acc.concat(frame()).unwrap();
        assert_eq!(acc.row_count(), 6);
        assert_eq!(acc.categories("b").unwrap(), ["p", "q", "q", "p", "q", "q"]);
    }

    #[test]
    fn concat_rejects_schema_mismatch() {
        let mut acc = frame();
        let other = frame().rename(&["a", "b", "w"]).unwrap();
        assert_eq!(acc.concat(other), Err(TableFrameError::SchemaMismatch));

        let mut acc = frame();
        let other = frame().into_categories(&["v"]).unwrap();
        assert_eq!(acc.concat(other), Err(TableFrameError::SchemaMismatch));
        assert_eq!(acc.row_count(), 3);
    }
}
