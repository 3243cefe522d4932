// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `make_sankey` pipeline.

extern crate alloc;

use alloc::vec::Vec;

use vizir_table::TableFrame;

use crate::codes::{CodedEdges, code_labels};
use crate::stack::stack_edges;
use crate::{
    DiagramRenderer, NEUTRAL, NODE_PAD, SankeyDiagram, SankeyError, SankeyLink, SankeyNode,
    SankeyOptions, SankeyRenderer, stage_pairs,
};

/// Build a Sankey diagram from `columns` of `table`.
///
/// `columns` names the stages, left to right, and must contain at least two entries. Flows are
/// weighted by `value_column` when given; otherwise each row weighs 1.
///
/// Note the asymmetry between the two weighting modes: with a value column, rows that share a
/// `(source, target)` pair collapse into a single link carrying the summed value. Without one,
/// nothing is collapsed and each row yields its own link of weight 1.
///
/// ```
/// use vizir_sankey::{SankeyOptions, make_sankey};
/// use vizir_table::TableFrame;
///
/// let table = TableFrame::new()
///     .with_category("from", ["x", "x"])?
///     .with_category("to", ["y", "y"])?
///     .with_number("amount", [5.0, 3.0])?;
///
/// let diagram = make_sankey(&table, &["from", "to"], Some("amount"), &SankeyOptions::default())?;
/// assert_eq!(diagram.nodes.len(), 2);
/// assert_eq!(diagram.links.len(), 1);
/// assert_eq!(diagram.links[0].value, 8.0);
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
pub fn make_sankey(
    table: &TableFrame,
    columns: &[&str],
    value_column: Option<&str>,
    options: &SankeyOptions,
) -> Result<SankeyDiagram, SankeyError> {
    make_sankey_with(&mut DiagramRenderer, table, columns, value_column, options)
}

/// Like [`make_sankey`], but hands the assembled nodes and links to `renderer`.
pub fn make_sankey_with<R: SankeyRenderer>(
    renderer: &mut R,
    table: &TableFrame,
    columns: &[&str],
    value_column: Option<&str>,
    options: &SankeyOptions,
) -> Result<R::Output, SankeyError> {
    let pairs = stage_pairs(columns)?;
    let edges = stack_edges(table, &pairs, value_column)?;
    let coded = code_labels(&edges)?;
    let (nodes, links) = assemble(coded, options);
    log::debug!("assembled {} nodes and {} links", nodes.len(), links.len());
    Ok(renderer.render(nodes, links))
}

fn assemble(coded: CodedEdges, options: &SankeyOptions) -> (Vec<SankeyNode>, Vec<SankeyLink>) {
    let colors = options.palette.assign_targets(&coded.target);
    let color_of = |code: usize| colors.get(&code).copied().unwrap_or(NEUTRAL);

    let nodes = coded
        .labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| SankeyNode {
            index,
            label,
            color: color_of(index),
            pad: NODE_PAD,
            thickness: options.node_thickness,
            line_width: 0.0,
        })
        .collect();

    let links = coded
        .source
        .iter()
        .zip(&coded.target)
        .zip(&coded.weight)
        .map(|((&source, &target), &value)| SankeyLink {
            source,
            target,
            value,
            color: color_of(target),
            line_width: 0.0,
        })
        .collect();

    (nodes, links)
}
