// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sankey demo for `vizir_sankey`.
//!
//! Builds a small publisher/genre/era sales table, reshapes it into a Sankey diagram and writes
//! it out as SVG (and optionally as a Plotly JSON trace).

mod layout;
mod svg;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};
use vizir_sankey::{Palette, PaletteExhaustion, SankeyOptions, make_sankey};
use vizir_table::{TableFrame, TableFrameError};

use crate::layout::Size;
use crate::svg::SvgSankey;

/// Render a demo Sankey diagram.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output path for the SVG document.
    #[arg(short, long, default_value = "sankey.svg")]
    out: PathBuf,

    /// Weight flows by sales instead of counting rows.
    #[arg(short, long)]
    weighted: bool,

    /// Node bar thickness in pixels.
    #[arg(long, default_value_t = vizir_sankey::DEFAULT_NODE_THICKNESS)]
    node_thickness: f64,

    /// What to do when targets outnumber palette colors.
    #[arg(long, value_enum, default_value_t = Exhaustion::Cycle)]
    palette_exhaustion: Exhaustion,

    /// Also write the diagram as a Plotly `sankey` trace.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Exhaustion {
    Cycle,
    Neutral,
}

impl From<Exhaustion> for PaletteExhaustion {
    fn from(e: Exhaustion) -> Self {
        match e {
            Exhaustion::Cycle => Self::Cycle,
            Exhaustion::Neutral => Self::Neutral,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let table = sales_table()?;
    let columns = ["publisher", "genre", "era"];
    let value = cli.weighted.then_some("sales");
    let options = SankeyOptions::default()
        .with_node_thickness(cli.node_thickness)
        .with_palette(Palette::default().with_exhaustion(cli.palette_exhaustion.into()));

    let diagram = make_sankey(&table, &columns, value, &options)?;
    let renderer = SvgSankey::new(Size {
        width: 900.0,
        height: 600.0,
    });
    std::fs::write(&cli.out, renderer.to_svg(&diagram))?;
    info!("wrote {}", cli.out.display());

    if let Some(path) = &cli.json {
        std::fs::write(path, serde_json::to_string_pretty(&diagram.to_plotly_json())?)?;
        info!(
            "wrote {} ({} nodes, {} links)",
            path.display(),
            diagram.nodes.len(),
            diagram.links.len()
        );
    }
    Ok(())
}

fn sales_table() -> Result<TableFrame, TableFrameError> {
    let rows: [(&str, &str, &str, f64); 10] = [
        ("Nintendo", "Platform", "Pre 2000", 142.0),
        ("Nintendo", "Sports", "Post 2000", 218.0),
        ("Nintendo", "Role-Playing", "Pre 2000", 96.0),
        ("Electronic Arts", "Sports", "Post 2000", 354.0),
        ("Electronic Arts", "Action", "Post 2000", 71.0),
        ("Activision", "Shooter", "Post 2000", 412.0),
        ("Activision", "Action", "Pre 2000", 38.0),
        ("Sony", "Racing", "Pre 2000", 64.0),
        ("Sony", "Platform", "Post 2000", 53.0),
        ("Ubisoft", "Action", "Post 2000", 190.0),
    ];
    TableFrame::new()
        .with_category("publisher", rows.iter().map(|r| r.0))?
        .with_category("genre", rows.iter().map(|r| r.1))?
        .with_category("era", rows.iter().map(|r| r.2))?
        .with_number("sales", rows.iter().map(|r| r.3))
}
