//! # Chevrons
//!
//! Three to five stacked chevrons in alternating brand colors.

use super::shape::{Node, PathData, Stroke, Transform};
use super::Style;
use crate::seed::SeededRng;

fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

pub fn draw(rng: &mut SeededRng, cx: f64, cy: f64, style: &Style) -> Node {
    let count = 3 + (rng.next_f64() * 3.0).floor() as usize;
    let gap = rng.range(10.0, 8.0);

    let children = (0..count)
        .map(|i| {
            let top = i as f64 * gap;
            let color = if i % 2 == 1 { &style.secondary } else { &style.primary };
            Node::Path {
                d: PathData::default()
                    .move_to(0.0, top)
                    .line_to(28.0, top + 14.0)
                    .line_to(0.0, top + 28.0),
                stroke: Stroke::solid(color, style.stroke).round(),
            }
        })
        .collect();

    Node::group(
        vec![
            Transform::translate(clamp(cx - 40.0, 40.0, 160.0), clamp(cy - 20.0, 40.0, 120.0)),
            Transform::rotate(style.rotation),
        ],
        children,
    )
}
