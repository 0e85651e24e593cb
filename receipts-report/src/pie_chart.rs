//! Pie chart of spending by category, rendered as a standalone SVG document.
//!
//! Slices start at 12 o'clock and run counter-clockwise in category order,
//! each labelled with its share of the total.

use anyhow::{Context, Result};
use log::info;
use receipts_core::CategoryTotals;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 640.0;
const CX: f64 = 330.0;
const CY: f64 = 350.0;
const RADIUS: f64 = 230.0;
const START_DEG: f64 = 90.0;

/// tab10
const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub amount: Decimal,
    /// Share of the plotted total, in `(0, 1]`.
    pub fraction: f64,
}

/// Slices for every category with a positive total. Zero and negative totals
/// are left out.
pub fn pie_slices(totals: &CategoryTotals) -> Vec<PieSlice> {
    let positive: Vec<(&String, Decimal)> = totals
        .iter()
        .filter(|(_, amount)| **amount > Decimal::ZERO)
        .map(|(label, amount)| (label, *amount))
        .collect();
    let sum: Decimal = positive.iter().map(|(_, a)| *a).sum();
    if sum.is_zero() {
        return Vec::new();
    }

    positive
        .into_iter()
        .map(|(label, amount)| PieSlice {
            label: label.clone(),
            amount,
            fraction: (amount / sum).to_f64().unwrap_or(0.0),
        })
        .collect()
}

/// SVG document for `totals`, or `None` when there is nothing to plot.
pub fn render_pie_chart(totals: &CategoryTotals) -> Option<String> {
    let slices = pie_slices(totals);
    if slices.is_empty() {
        return None;
    }

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"50\" font-size=\"24\" text-anchor=\"middle\">Expenses by Category</text>\n",
        WIDTH / 2.0
    ));

    let mut angle = START_DEG;
    for (i, slice) in slices.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let sweep = slice.fraction * 360.0;
        let end = angle + sweep;

        if slices.len() == 1 {
            svg.push_str(&format!(
                "<circle cx=\"{CX}\" cy=\"{CY}\" r=\"{RADIUS}\" fill=\"{color}\"/>\n"
            ));
        } else {
            let (x0, y0) = point(angle, RADIUS);
            let (x1, y1) = point(end, RADIUS);
            let large = if sweep > 180.0 { 1 } else { 0 };
            svg.push_str(&format!(
                "<path d=\"M {CX} {CY} L {x0:.2} {y0:.2} A {RADIUS} {RADIUS} 0 {large} 0 {x1:.2} {y1:.2} Z\" fill=\"{color}\" stroke=\"white\"/>\n"
            ));
        }

        let mid = angle + sweep / 2.0;
        let (px, py) = point(mid, RADIUS * 0.6);
        svg.push_str(&format!(
            "<text x=\"{px:.2}\" y=\"{py:.2}\" font-size=\"14\" text-anchor=\"middle\" dominant-baseline=\"middle\">{:.1}%</text>\n",
            slice.fraction * 100.0
        ));
        let (lx, ly) = point(mid, RADIUS * 1.1);
        let anchor = if lx >= CX { "start" } else { "end" };
        svg.push_str(&format!(
            "<text x=\"{lx:.2}\" y=\"{ly:.2}\" font-size=\"14\" text-anchor=\"{anchor}\" dominant-baseline=\"middle\">{}</text>\n",
            escape(&slice.label)
        ));

        angle = end;
    }

    let legend_x = CX + RADIUS + 90.0;
    for (i, slice) in slices.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let y = 120.0 + i as f64 * 26.0;
        svg.push_str(&format!(
            "<rect x=\"{legend_x}\" y=\"{}\" width=\"16\" height=\"16\" fill=\"{color}\"/>\n",
            y - 12.0
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{y}\" font-size=\"14\">{} ({:.2})</text>\n",
            legend_x + 24.0,
            escape(&slice.label),
            slice.amount
        ));
    }

    svg.push_str("</svg>\n");
    Some(svg)
}

/// Write the chart to `path`. Returns `false`, writing nothing, when no
/// category has a positive total.
pub fn write_pie_chart(path: &Path, totals: &CategoryTotals) -> Result<bool> {
    let Some(svg) = render_pie_chart(totals) else {
        return Ok(false);
    };
    fs::write(path, svg).with_context(|| format!("write {}", path.display()))?;
    info!("wrote pie chart to {}", path.display());
    Ok(true)
}

/// Point on the circle at `deg` degrees counter-clockwise from 3 o'clock.
fn point(deg: f64, r: f64) -> (f64, f64) {
    let rad = deg * PI / 180.0;
    (CX + r * rad.cos(), CY - r * rad.sin())
}

fn escape(s: &str) -> String {
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
