// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotly-compatible JSON export.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use serde_json::{Value, json};

use crate::{DEFAULT_NODE_THICKNESS, NODE_PAD, SankeyDiagram};

fn css_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl SankeyDiagram {
    /// Serialize as a Plotly `sankey` trace.
    ///
    /// Plotly takes a single node padding and thickness, so these are read from the first node
    /// (all nodes produced by [`make_sankey`](crate::make_sankey) share them).
    pub fn to_plotly_json(&self) -> Value {
        let (pad, thickness) = self
            .nodes
            .first()
            .map_or((NODE_PAD, DEFAULT_NODE_THICKNESS), |n| (n.pad, n.thickness));
        let node_colors: Vec<String> = self.nodes.iter().map(|n| css_hex(n.color)).collect();
        let link_colors: Vec<String> = self.links.iter().map(|l| css_hex(l.color)).collect();
        let labels: Vec<&str> = self.labels().collect();
        let sources: Vec<usize> = self.links.iter().map(|l| l.source).collect();
        let targets: Vec<usize> = self.links.iter().map(|l| l.target).collect();
        let values: Vec<f64> = self.links.iter().map(|l| l.value).collect();
        json!({
            "type": "sankey",
            "node": {
                "label": labels,
                "color": node_colors,
                "pad": pad,
                "thickness": thickness,
                "line": { "width": 0 }
            },
            "link": {
                "source": sources,
                "target": targets,
                "value": values,
                "color": link_colors,
                "line": { "width": 0 }
            }
        })
    }
}
