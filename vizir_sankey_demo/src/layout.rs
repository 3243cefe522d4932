// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Column layout for Sankey diagrams.
//!
//! Nodes are placed in columns by their longest-path depth from a source, stacked top to bottom
//! with each node's `pad` between them. Bar height is proportional to the node's flow (the larger
//! of inflow and outflow), using one value-to-pixel scale shared by every column.

use kurbo::{BezPath, Rect};
use vizir_sankey::{SankeyDiagram, SankeyLink};

/// Plot size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Size {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// Computed geometry, indexed like the node and link lists it was built from.
#[derive(Debug)]
pub(crate) struct SankeyLayout {
    pub(crate) depths: Vec<usize>,
    pub(crate) columns: usize,
    pub(crate) nodes: Vec<Rect>,
    pub(crate) links: Vec<BezPath>,
}

/// Longest-path depth of every node.
///
/// Self-loops are ignored. Depths are capped at `node_count - 1`, so cyclic input still
/// terminates (with an arbitrary but bounded placement).
pub(crate) fn node_depths(node_count: usize, links: &[SankeyLink]) -> Vec<usize> {
    let mut depth = vec![0; node_count];
    let cap = node_count.saturating_sub(1);
    for _ in 0..node_count {
        let mut changed = false;
        for l in links.iter().filter(|l| l.source != l.target) {
            let d = (depth[l.source] + 1).min(cap);
            if d > depth[l.target] {
                depth[l.target] = d;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    depth
}

pub(crate) fn layout(diagram: &SankeyDiagram, size: Size) -> SankeyLayout {
    let SankeyDiagram { nodes, links } = diagram;
    let n = nodes.len();
    let depths = node_depths(n, links);
    let value = diagram.node_values();

    let columns = depths.iter().max().map_or(0, |d| d + 1);
    let mut by_column: Vec<Vec<usize>> = vec![Vec::new(); columns];
    for (i, &d) in depths.iter().enumerate() {
        by_column[d].push(i);
    }

    let mut scale = f64::INFINITY;
    for col in &by_column {
        let total: f64 = col.iter().map(|&i| value[i]).sum();
        let pad: f64 = col.iter().skip(1).map(|&i| nodes[i].pad).sum();
        if total > 0.0 {
            scale = scale.min((size.height - pad).max(0.0) / total);
        }
    }
    if !scale.is_finite() {
        scale = 0.0;
    }

    let mut rects = vec![Rect::ZERO; n];
    for (c, col) in by_column.iter().enumerate() {
        let mut y = 0.0;
        for &i in col {
            let w = nodes[i].thickness;
            let x = if columns > 1 {
                c as f64 * (size.width - w) / (columns - 1) as f64
            } else {
                0.0
            };
            let h = value[i] * scale;
            rects[i] = Rect::new(x, y, x + w, y + h);
            y += h + nodes[i].pad;
        }
    }

    // Links leave/enter each node top to bottom in link order.
    let mut out_y: Vec<f64> = rects.iter().map(|r| r.y0).collect();
    let mut in_y = out_y.clone();
    let paths = links
        .iter()
        .map(|l| {
            let h = l.value * scale;
            let y0 = out_y[l.source];
            let y1 = in_y[l.target];
            out_y[l.source] += h;
            in_y[l.target] += h;
            ribbon(rects[l.source].x1, y0, rects[l.target].x0, y1, h)
        })
        .collect();

    SankeyLayout {
        depths,
        columns,
        nodes: rects,
        links: paths,
    }
}

fn ribbon(x0: f64, y0: f64, x1: f64, y1: f64, h: f64) -> BezPath {
    let xm = (x0 + x1) * 0.5;
    let mut p = BezPath::new();
    p.move_to((x0, y0));
    p.curve_to((xm, y0), (xm, y1), (x1, y1));
    p.line_to((x1, y1 + h));
    p.curve_to((xm, y1 + h), (xm, y0 + h), (x0, y0 + h));
    p.close_path();
    p
}
