// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG renderer for Sankey diagrams.

use peniko::Color;
use peniko::color::palette::css;
use vizir_sankey::{SankeyDiagram, SankeyLink, SankeyNode, SankeyRenderer};

use crate::layout::{Size, layout};

/// Opacity of link ribbons.
const LINK_ALPHA: f32 = 0.5;

/// Renders a node and link list into a standalone SVG document.
#[derive(Debug)]
pub(crate) struct SvgSankey {
    size: Size,
    font_size: f64,
    margin: f64,
}

impl SvgSankey {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            font_size: 12.0,
            margin: 10.0,
        }
    }

    /// Lay out and serialize an assembled diagram.
    pub(crate) fn to_svg(&self, diagram: &SankeyDiagram) -> String {
        let geometry = layout(diagram, self.size);
        let m = self.margin;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            -m,
            -m,
            self.size.width + 2.0 * m,
            self.size.height + 2.0 * m,
            self.size.width + 2.0 * m,
            self.size.height + 2.0 * m,
        ));
        out.push('\n');

        for (link, path) in diagram.links.iter().zip(&geometry.links) {
            out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
            write_paint_attr(&mut out, "fill", link.color.with_alpha(LINK_ALPHA));
            out.push_str("/>\n");
        }

        let last_column = geometry.columns.saturating_sub(1);
        for (node, rect) in diagram.nodes.iter().zip(&geometry.nodes) {
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
            ));
            write_paint_attr(&mut out, "fill", node.color);
            out.push_str("/>\n");

            // Labels sit outside the bar, facing into the plot.
            let (x, anchor) = if geometry.depths[node.index] == last_column && last_column > 0 {
                (rect.x0 - 6.0, "end")
            } else {
                (rect.x1 + 6.0, "start")
            };
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" text-anchor="{}""#,
                x,
                rect.center().y,
                self.font_size,
                anchor,
            ));
            write_paint_attr(&mut out, "fill", css::BLACK);
            out.push('>');
            out.push_str(&escape_xml(&node.label));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

impl SankeyRenderer for SvgSankey {
    type Output = String;

    fn render(&mut self, nodes: Vec<SankeyNode>, links: Vec<SankeyLink>) -> String {
        self.to_svg(&SankeyDiagram { nodes, links })
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use vizir_sankey::{SankeyOptions, make_sankey_with};
    use vizir_table::TableFrame;

    use super::*;

    #[test]
    fn svg_has_one_shape_per_node_and_link() {
        let table = TableFrame::new()
            .with_category("from", ["R&D", "R&D", "Ops"])
            .unwrap()
            .with_category("to", ["Build", "Test", "Build"])
            .unwrap();
        let mut svg = SvgSankey::new(Size {
            width: 400.0,
            height: 300.0,
        });
        let doc = make_sankey_with(
            &mut svg,
            &table,
            &["from", "to"],
            None,
            &SankeyOptions::default(),
        )
        .unwrap();

        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("</svg>\n"));
        assert_eq!(doc.matches("<path ").count(), 3);
        assert_eq!(doc.matches("<rect ").count(), 4);
        assert!(doc.contains("R&amp;D"));
        assert!(doc.contains(r#"fill-opacity="#));
    }

    #[test]
    fn paint_reports_opacity_only_when_translucent() {
        assert_eq!(svg_paint(css::BLACK), ("#000000".to_string(), None));
        let (_, o) = svg_paint(css::BLACK.with_alpha(0.5));
        assert!(o.is_some());
    }
}
