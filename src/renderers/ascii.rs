//! ASCII/Unicode rasterizer.
//!
//! Paints edges first and node boxes on top, so a label is never
//! overwritten by an edge that happens to cross its box. Edges spanning
//! more layers go down first; arrowheads survive later crossings.

use std::cmp::Reverse;

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::{Arms, BoxChars, CharSet};
use crate::layout::types::{LayoutNode, LayoutResult};
use crate::syntax::types::Direction;
use crate::text_width::display_width;

/// Blank rows/columns added past the furthest box.
pub const MARGIN: i64 = 2;

// ─── Node Rendering ──────────────────────────────────────────────────────────

fn paint_node(canvas: &mut Canvas, ln: &LayoutNode) {
    let bc = BoxChars::for_charset(canvas.charset);
    canvas.draw_box(Rect::new(ln.x, ln.y, ln.width, ln.height), bc);

    let label_len = display_width(&ln.label) as i64;
    let inset = ((ln.width - label_len) / 2).max(1);
    canvas.write_str(ln.x + inset, ln.center_y(), &ln.label);
}

// ─── Edge Rendering ──────────────────────────────────────────────────────────

type Point = (i64, i64);

/// Three-segment orthogonal route from the source box's outward side to
/// the cell just before the target box's inward side, bending at the midpoint.
pub fn edge_route(direction: Direction, from: &LayoutNode, to: &LayoutNode) -> [Point; 4] {
    match direction {
        Direction::LR | Direction::RL => {
            let (sx, ex) = if direction == Direction::LR {
                (from.right(), to.x - 1)
            } else {
                (from.x - 1, to.right())
            };
            let (sy, ey) = (from.center_y(), to.center_y());
            let mx = (sx + ex) / 2;
            [(sx, sy), (mx, sy), (mx, ey), (ex, ey)]
        }
        Direction::TB | Direction::BT => {
            let (sy, ey) = if direction == Direction::TB {
                (from.bottom(), to.y - 1)
            } else {
                (from.y - 1, to.bottom())
            };
            let (sx, ex) = (from.center_x(), to.center_x());
            let my = (sy + ey) / 2;
            [(sx, sy), (sx, my), (ex, my), (ex, ey)]
        }
    }
}

/// Expand waypoints into the unit-step cells they pass through.
fn route_cells(waypoints: &[Point]) -> Vec<Point> {
    let mut cells: Vec<Point> = Vec::new();
    let Some(&start) = waypoints.first() else {
        return cells;
    };
    cells.push(start);
    for &(tx, ty) in &waypoints[1..] {
        let (mut x, mut y) = *cells.last().unwrap_or(&start);
        while (x, y) != (tx, ty) {
            if x != tx {
                x += (tx - x).signum();
            } else {
                y += (ty - y).signum();
            }
            cells.push((x, y));
        }
    }
    cells
}

fn paint_edge(canvas: &mut Canvas, direction: Direction, from: &LayoutNode, to: &LayoutNode) {
    let cells = route_cells(&edge_route(direction, from, to));
    let Some((&(ax, ay), body)) = cells.split_last() else {
        return;
    };
    for (i, &(x, y)) in body.iter().enumerate() {
        let mut arms = Arms::default();
        if i > 0 {
            let (px, py) = cells[i - 1];
            arms = arms.merge(Arms::toward(x, y, px, py));
        }
        let (nx, ny) = cells[i + 1];
        arms = arms.merge(Arms::toward(x, y, nx, ny));
        canvas.merge_arms(x, y, arms);
    }
    let arrow = BoxChars::for_charset(canvas.charset).arrow_for(direction);
    canvas.set(ax, ay, arrow);
}

// ─── Canvas Sizing ───────────────────────────────────────────────────────────

fn canvas_dimensions(nodes: &[LayoutNode]) -> (usize, usize) {
    let max_col = nodes.iter().map(LayoutNode::right).max().unwrap_or(0) + MARGIN;
    let max_row = nodes.iter().map(LayoutNode::bottom).max().unwrap_or(0) + MARGIN;
    (max_col.max(0) as usize, max_row.max(0) as usize)
}

// ─── Public Renderer ─────────────────────────────────────────────────────────

/// ASCII/Unicode text renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer {
    pub charset: CharSet,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self {
            charset: CharSet::from_unicode_flag(unicode),
        }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, layout: &LayoutResult) -> Vec<String> {
        if layout.nodes.is_empty() {
            return Vec::new();
        }
        let (width, height) = canvas_dimensions(&layout.nodes);
        let mut canvas = Canvas::new(width, height, self.charset);

        let mut routed: Vec<(&LayoutNode, &LayoutNode)> = Vec::with_capacity(layout.edges.len());
        for (from_id, to_id) in &layout.edges {
            let (Some(from), Some(to)) = (layout.node(from_id), layout.node(to_id)) else {
                tracing::trace!(from = %from_id, to = %to_id, "skipping edge to unplaced node");
                continue;
            };
            routed.push((from, to));
        }
        routed.sort_by_key(|(from, to)| Reverse(from.layer.abs_diff(to.layer)));
        for (from, to) in routed {
            paint_edge(&mut canvas, layout.direction, from, to);
        }

        for ln in &layout.nodes {
            paint_node(&mut canvas, ln);
        }

        canvas.to_lines()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
