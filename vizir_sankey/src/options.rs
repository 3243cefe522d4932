// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-call options for [`make_sankey`](crate::make_sankey).

use crate::Palette;

/// Default node bar thickness.
pub const DEFAULT_NODE_THICKNESS: f64 = 50.0;

/// Vertical padding between nodes in the same column.
pub const NODE_PAD: f64 = 50.0;

/// Options for [`make_sankey`](crate::make_sankey).
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyOptions {
    /// Node bar thickness.
    pub node_thickness: f64,
    /// Link/node palette, keyed by target.
    pub palette: Palette,
}

impl Default for SankeyOptions {
    fn default() -> Self {
        Self {
            node_thickness: DEFAULT_NODE_THICKNESS,
            palette: Palette::default(),
        }
    }
}

impl SankeyOptions {
    /// Sets the node bar thickness.
    pub fn with_node_thickness(mut self, thickness: f64) -> Self {
        self.node_thickness = thickness;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
