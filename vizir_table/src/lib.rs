// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned columnar tables for VizIR flow charts.
//!
//! This crate provides:
//! - a small named-column table ([`TableFrame`]) holding categorical and numeric columns, and
//! - the handful of relational operators a Sankey reshaping pipeline needs: projection,
//!   renaming, row-wise concatenation and group-by-sum.
//!
//! The operators are intentionally simple full-recompute functions: they take a frame and
//! return a new one, with no lazy evaluation or shared buffers.

#![no_std]

extern crate alloc;

mod aggregate;
mod column;
mod table;

pub use column::{ColumnData, ColumnKind};
pub use table::{TableFrame, TableFrameError};
