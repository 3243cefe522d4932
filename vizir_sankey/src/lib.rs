// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sankey (flow) diagrams from multi-stage categorical tables.
//!
//! A Sankey diagram is built from an ordered list of *stage* columns. Each adjacent pair of
//! stages contributes `source -> target` edges, one per table row:
//!
//! 1. [`stage_pairs`] turns `[A, B, C]` into `(A, B), (B, C)`.
//! 2. Every pair is projected out of the input [`TableFrame`](vizir_table::TableFrame) and
//!    stacked into one long edge table. With a value column, repeated `(source, target)` pairs
//!    are summed into a single edge; without one, every row stays a separate edge of weight 1.
//! 3. Distinct labels are assigned integer codes, which become node indices.
//! 4. Nodes and links are colored by target via a [`Palette`] and handed to a
//!    [`SankeyRenderer`].
//!
//! [`make_sankey`] runs the whole pipeline and returns a [`SankeyDiagram`]; use
//! [`make_sankey_with`] to feed a different renderer.
//!
//! Label and target enumeration follow first appearance in the stacked edge table, so the same
//! input always produces the same diagram.

#![no_std]

extern crate alloc;

mod codes;
mod diagram;
mod error;
#[cfg(feature = "json")]
mod json;
mod options;
mod pairs;
mod palette;
mod render;
mod sankey;
mod stack;

pub use diagram::{SankeyDiagram, SankeyLink, SankeyNode};
pub use error::SankeyError;
pub use options::{DEFAULT_NODE_THICKNESS, NODE_PAD, SankeyOptions};
pub use pairs::{StagePair, stage_pairs};
pub use palette::{NEUTRAL, Palette, PaletteExhaustion, default_colors};
pub use render::{DiagramRenderer, SankeyRenderer};
pub use sankey::{make_sankey, make_sankey_with};
