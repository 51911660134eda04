//! # Orbits
//!
//! A filled planet, a tilted orbit ellipse and one satellite.

use super::shape::{Node, Stroke, Transform};
use super::Style;
use crate::seed::SeededRng;

/// Satellite radius.
const MOON_R: f64 = 6.0;

pub fn draw(rng: &mut SeededRng, cx: f64, cy: f64, style: &Style) -> Node {
    let r = rng.range(34.0, 10.0);
    let tilt = rng.range(-30.0, 60.0);

    Node::group(
        vec![Transform::translate(cx, cy), Transform::rotate(style.rotation)],
        vec![
            Node::Circle {
                cx: 0.0,
                cy: 0.0,
                r,
                fill: Some(style.primary.clone()),
                stroke: None,
                opacity: Some(0.85),
            },
            Node::Ellipse {
                cx: 0.0,
                cy: 0.0,
                rx: r * 1.7,
                ry: r * 0.6,
                stroke: Stroke::solid(&style.secondary, (style.stroke * 0.6).max(1.0)),
                rotation_deg: tilt,
            },
            Node::Circle {
                cx: r * 1.2,
                cy: -r * 0.2,
                r: MOON_R,
                fill: Some(style.secondary.clone()),
                stroke: None,
                opacity: None,
            },
        ],
    )
}
