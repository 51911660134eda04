//! # Abstract Duotone
//!
//! Two concentric rings (outer solid, inner dashed) crossed by a rounded
//! bar, all rotated about the icon's upper center.
//!
//! ## Draw order
//!
//! ```text
//! r1   = 36 + r*16
//! r2   = r1 + 10 + r*12
//! rot  = floor(r*360) + extra
//! w    = 70 + r*50
//! h    = 12 + r*16
//! skew = -30 + r*60
//! ```

use super::shape::{Node, Stroke, Transform};
use super::Style;
use crate::seed::SeededRng;

/// Pivot for whole-icon rotation.
const PIVOT: (f64, f64) = (128.0, 96.0);

pub fn draw(rng: &mut SeededRng, cx: f64, cy: f64, style: &Style) -> Node {
    let r1 = rng.range(36.0, 16.0);
    let r2 = r1 + rng.range(10.0, 12.0);
    let rot = (rng.next_f64() * 360.0).floor() + style.rotation;
    let w = rng.range(70.0, 50.0);
    let h = rng.range(12.0, 16.0);
    let skew = rng.range(-30.0, 60.0);

    Node::group(
        vec![Transform::rotate_about(rot, PIVOT.0, PIVOT.1)],
        vec![
            Node::Circle {
                cx,
                cy,
                r: r2,
                fill: None,
                stroke: Some(Stroke::solid(&style.secondary, style.stroke)),
                opacity: Some(0.9),
            },
            Node::Circle {
                cx,
                cy,
                r: r1,
                fill: None,
                stroke: Some(
                    Stroke::solid(&style.primary, style.stroke)
                        .dashed((r1 * 2.4).round(), (r1 * 1.6).round()),
                ),
                opacity: None,
            },
            Node::Rect {
                x: cx - w / 2.0,
                y: cy - h / 2.0,
                width: w,
                height: h,
                rx: h / 2.0,
                fill: style.primary.clone(),
                rotation_deg: skew,
                pivot: (cx, cy),
            },
        ],
    )
}

/// Geometry for kinds without their own generator: the two rings only,
/// turned by the caller's extra rotation.
pub fn draw_fallback(rng: &mut SeededRng, cx: f64, cy: f64, style: &Style) -> Node {
    let r1 = rng.range(36.0, 16.0);
    let r2 = r1 + rng.range(10.0, 12.0);

    Node::group(
        vec![Transform::rotate_about(style.rotation, PIVOT.0, PIVOT.1)],
        vec![
            Node::Circle {
                cx,
                cy,
                r: r2,
                fill: None,
                stroke: Some(Stroke::solid(&style.secondary, style.stroke)),
                opacity: None,
            },
            Node::Circle {
                cx,
                cy,
                r: r1,
                fill: None,
                stroke: Some(Stroke::solid(&style.primary, style.stroke)),
                opacity: None,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_radii_in_range() {
        for key in ["a", "b", "nova", "acme|7"] {
            let mut rng = SeededRng::from_key(key);
            let Node::Group { children, .. } = draw(&mut rng, 128.0, 96.0, &Style::default()) else {
                panic!("expected group");
            };
            let Node::Circle { r: outer, .. } = &children[0] else { panic!() };
            let Node::Circle { r: inner, stroke, .. } = &children[1] else { panic!() };
            let (outer, inner) = (*outer, *inner);
            assert!((36.0..52.0).contains(&inner));
            assert!(outer >= inner + 10.0 && outer < inner + 22.0);
            let dash = stroke.as_ref().and_then(|s| s.dash).unwrap();
            assert_eq!(dash, ((inner * 2.4).round(), (inner * 1.6).round()));
        }
    }

    #[test]
    fn test_fallback_draws_two_rings() {
        let mut rng = SeededRng::from_key("x");
        let node = draw_fallback(&mut rng, 100.0, 100.0, &Style::default());
        assert_eq!(node.walk().len(), 3);
    }
}
