// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the Sankey pipeline.

use vizir_table::TableFrameError;

/// Errors returned by [`make_sankey`](crate::make_sankey).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SankeyError {
    /// Fewer than two stage columns were given, so no flow can be formed.
    #[error("please input at least 2 columns (got {count})")]
    TooFewColumns {
        /// Number of columns supplied.
        count: usize,
    },
    /// The input table could not be reshaped (missing or mistyped columns).
    #[error(transparent)]
    Table(#[from] TableFrameError),
}
