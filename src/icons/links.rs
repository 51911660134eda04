//! # Links
//!
//! Two rings side by side joined by a short bar between their inner edges.

use super::shape::{Node, PathData, Stroke, Transform};
use super::Style;
use crate::seed::SeededRng;

pub fn draw(rng: &mut SeededRng, cx: f64, cy: f64, style: &Style) -> Node {
    let r = rng.range(22.0, 10.0);
    let dx = rng.range(30.0, 10.0);

    Node::group(
        vec![Transform::translate(cx, cy), Transform::rotate(style.rotation)],
        vec![
            Node::Circle {
                cx: -dx,
                cy: 0.0,
                r,
                fill: None,
                stroke: Some(Stroke::solid(&style.primary, style.stroke)),
                opacity: None,
            },
            Node::Circle {
                cx: dx,
                cy: 0.0,
                r,
                fill: None,
                stroke: Some(Stroke::solid(&style.secondary, style.stroke)),
                opacity: None,
            },
            Node::Path {
                d: PathData::default()
                    .move_to(-dx + r / 1.5, 0.0)
                    .horizontal_to(dx - r / 1.5),
                stroke: Stroke::solid(&style.secondary, style.stroke),
            },
        ],
    )
}
