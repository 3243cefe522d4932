// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking adjacent stage pairs into one edge table.

extern crate alloc;

use alloc::vec;

use vizir_table::{ColumnData, TableFrame};

use crate::{SankeyError, StagePair};

pub(crate) const SOURCE: &str = "source";
pub(crate) const TARGET: &str = "target";
pub(crate) const WEIGHT: &str = "weight";

/// Project every stage pair to `(source, target[, weight])` and stack the results.
///
/// With a value column, rows sharing a `(source, target)` pair are summed into one edge (rows
/// ordered by pair). Without one, every input row is kept as its own edge of weight 1, so
/// repeated pairs become parallel edges.
pub(crate) fn stack_edges(
    table: &TableFrame,
    pairs: &[StagePair<'_>],
    value: Option<&str>,
) -> Result<TableFrame, SankeyError> {
    if let Some(value) = value {
        // Report the caller's column name rather than the renamed one.
        table.numbers(value)?;
    }

    let mut stacked = TableFrame::new();
    for pair in pairs {
        let part = match value {
            Some(value) => table
                .project(&[pair.source, pair.target, value])?
                .rename(&[SOURCE, TARGET, WEIGHT])?,
            None => table
                .project(&[pair.source, pair.target])?
                .rename(&[SOURCE, TARGET])?,
        };
        stacked.concat(part.into_categories(&[SOURCE, TARGET])?)?;
    }

    let edges = match value {
        Some(_) => stacked.group_sum(&[SOURCE, TARGET], WEIGHT)?,
        None => {
            let n = stacked.row_count();
            stacked.push_column(WEIGHT, ColumnData::Number(vec![1.0; n]))?;
            stacked
        }
    };
    log::debug!(
        "stacked {} stage pairs into {} edges (aggregated: {})",
        pairs.len(),
        edges.row_count(),
        value.is_some()
    );
    Ok(edges)
}
