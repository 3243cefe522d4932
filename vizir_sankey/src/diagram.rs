// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagram output types.

extern crate alloc;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use peniko::Color;

/// A node (one distinct label) in a Sankey diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyNode {
    /// The node's index, equal to the label's code.
    pub index: usize,
    /// Display text.
    pub label: String,
    /// Fill color.
    pub color: Color,
    /// Padding to the neighboring node in the same column.
    pub pad: f64,
    /// Bar thickness.
    pub thickness: f64,
    /// Border width (always `0.0`: nodes are drawn without a border).
    pub line_width: f64,
}

/// A flow between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyLink {
    /// Source node index.
    pub source: usize,
    /// Target node index.
    pub target: usize,
    /// Flow weight.
    pub value: f64,
    /// Fill color.
    pub color: Color,
    /// Border width (always `0.0`).
    pub line_width: f64,
}

/// A complete Sankey diagram: the node list plus the link list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyDiagram {
    /// Nodes, indexed by label code.
    pub nodes: Vec<SankeyNode>,
    /// Links, one per stacked edge row.
    pub links: Vec<SankeyLink>,
}

impl SankeyDiagram {
    /// Returns the labels in node-index order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// The size of every node: the larger of its total inflow and total outflow.
    ///
    /// Indexed like [`SankeyDiagram::nodes`]. Links pointing outside the node list are ignored.
    pub fn node_values(&self) -> Vec<f64> {
        let n = self.nodes.len();
        let mut inflow = vec![0.0; n];
        let mut outflow = vec![0.0; n];
        for l in &self.links {
            if let Some(out) = outflow.get_mut(l.source) {
                *out += l.value;
            }
            if let Some(inc) = inflow.get_mut(l.target) {
                *inc += l.value;
            }
        }
        inflow
            .iter()
            .zip(&outflow)
            .map(|(i, o): (&f64, &f64)| i.max(*o))
            .collect()
    }
}
