// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer seam.

extern crate alloc;

use alloc::vec::Vec;

use crate::{SankeyDiagram, SankeyLink, SankeyNode};

/// Consumes an assembled node list and link list.
///
/// Implement this for a drawing backend (SVG, a GPU scene, a plotting library) and pass it to
/// [`make_sankey_with`](crate::make_sankey_with).
pub trait SankeyRenderer {
    /// What the renderer produces.
    type Output;

    /// Render the diagram. `nodes[i].index == i` for every node.
    fn render(&mut self, nodes: Vec<SankeyNode>, links: Vec<SankeyLink>) -> Self::Output;
}

/// The default renderer: returns the node and link lists as a [`SankeyDiagram`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DiagramRenderer;

impl SankeyRenderer for DiagramRenderer {
    type Output = SankeyDiagram;

    fn render(&mut self, nodes: Vec<SankeyNode>, links: Vec<SankeyLink>) -> SankeyDiagram {
        SankeyDiagram { nodes, links }
    }
}
