// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label coding: categorical labels to dense node indices.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use vizir_table::TableFrame;

use crate::SankeyError;
use crate::stack::{SOURCE, TARGET, WEIGHT};

/// The stacked edge table with labels replaced by codes.
///
/// `labels[code]` is the label for `code`.
#[derive(Debug)]
pub(crate) struct CodedEdges {
    pub(crate) source: Vec<usize>,
    pub(crate) target: Vec<usize>,
    pub(crate) weight: Vec<f64>,
    pub(crate) labels: Vec<String>,
}

/// Assign codes `0..n` to the union of source and target labels.
///
/// Codes follow first appearance over the whole source column, then the whole target column.
pub(crate) fn code_labels(edges: &TableFrame) -> Result<CodedEdges, SankeyError> {
    let sources = edges.categories(SOURCE)?;
    let targets = edges.categories(TARGET)?;
    let weight = edges.numbers(WEIGHT)?.to_vec();

    let mut codes: HashMap<&str, usize> = HashMap::new();
    let mut labels = Vec::new();
    for label in sources.iter().chain(targets) {
        if let Entry::Vacant(slot) = codes.entry(label.as_str()) {
            slot.insert(labels.len());
            labels.push(label.clone());
        }
    }
    log::debug!("coded {} distinct labels", labels.len());

    // Every label was inserted above.
    let recode = |col: &[String]| col.iter().map(|l| codes[l.as_str()]).collect::<Vec<_>>();
    Ok(CodedEdges {
        source: recode(sources),
        target: recode(targets),
        weight,
        labels,
    })
}
