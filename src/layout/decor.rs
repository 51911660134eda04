//! Card background and decorative shape resolution.

use serde::Serialize;

use super::Canvas;
use crate::color::{self, Hex};
use crate::suggestion::{DecorShape, NormalizedSuggestion, ShapeKind, TemplateTag};

/// Which edges a background border covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderSide {
    All,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Border {
    pub side: BorderSide,
    pub width: f64,
    pub color: Hex,
}

/// The effective card background.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    Solid {
        color: Hex,
        #[serde(skip_serializing_if = "Option::is_none")]
        border: Option<Border>,
    },
    Gradient {
        angle: f64,
        from: Hex,
        to: Hex,
    },
}

impl Background {
    /// Resolve the background a suggestion renders on.
    ///
    /// An explicit valid background wins. `classic` and `minimal` templates
    /// render on white with a primary-colored border (full 2px / left 4px).
    /// Everything else gets a 135 degree primary to secondary gradient.
    pub fn resolve(s: &NormalizedSuggestion) -> Self {
        let primary = primary_of(s);
        if let Some(bg) = &s.palette.background {
            return Self::Solid {
                color: bg.clone(),
                border: None,
            };
        }
        match s.template {
            Some(TemplateTag::Classic) => Self::Solid {
                color: Hex::light(),
                border: Some(Border {
                    side: BorderSide::All,
                    width: 2.0,
                    color: primary,
                }),
            },
            Some(TemplateTag::Minimal) => Self::Solid {
                color: Hex::light(),
                border: Some(Border {
                    side: BorderSide::Left,
                    width: 4.0,
                    color: primary,
                }),
            },
            _ => Self::Gradient {
                angle: 135.0,
                from: primary,
                to: secondary_of(s),
            },
        }
    }

    /// The solid color, if the background is one.
    pub fn solid(&self) -> Option<&Hex> {
        match self {
            Self::Solid { color, .. } => Some(color),
            Self::Gradient { .. } => None,
        }
    }

    /// Pick the final text color against this background.
    pub fn readable_text(&self, proposed: &Hex) -> Hex {
        let req = match self {
            Self::Solid { color, .. } => color::ReadableTextRequest {
                bg: Some(color.clone()),
                proposed: Some(proposed.clone()),
                ..Default::default()
            },
            Self::Gradient { from, to, .. } => color::ReadableTextRequest {
                bg: None,
                primary: Some(from.clone()),
                secondary: Some(to.clone()),
                proposed: Some(proposed.clone()),
            },
        };
        color::ensure_readable_text_color(&req)
    }
}

pub(crate) fn primary_of(s: &NormalizedSuggestion) -> Hex {
    s.palette
        .primary
        .clone()
        .unwrap_or_else(|| Hex::constant(color::DEFAULT_PRIMARY))
}

pub(crate) fn secondary_of(s: &NormalizedSuggestion) -> Hex {
    s.palette
        .secondary
        .clone()
        .unwrap_or_else(|| Hex::constant(color::DEFAULT_SECONDARY))
}

/// Corner radius applied to a resolved shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Radius {
    /// Fixed pixel radius.
    Px(f64),
    /// Fully round (circle / pill).
    Round,
}

/// A decorative shape in absolute canvas coordinates.
///
/// `(x, y)` is the unrotated box's top-left corner; `angle` rotates about
/// the box center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedShape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub radius: Radius,
    pub color: Hex,
    pub opacity: f64,
}

/// Place a box anchored to the corners a label names.
///
/// Offsets are distances from the named edges, so negative values push the
/// shape past the card edge. An axis with no keyword stays at 0.
fn anchor(label: &str, canvas: Canvas, w: f64, h: f64, off_x: f64, off_y: f64) -> (f64, f64) {
    let l = label.to_lowercase();
    let x = if l.contains("left") {
        off_x
    } else if l.contains("right") {
        canvas.width - w - off_x
    } else {
        0.0
    };
    let y = if l.contains("top") {
        off_y
    } else if l.contains("bottom") {
        canvas.height - h - off_y
    } else {
        0.0
    };
    (x, y)
}

/// Resolve one decorative shape with the canvas-dependent defaults.
pub fn resolve_shape(
    shape: &DecorShape,
    canvas: Canvas,
    primary: &Hex,
    secondary: &Hex,
) -> ResolvedShape {
    let opacity = shape.opacity.unwrap_or(1.0).clamp(0.0, 1.0);
    match shape.kind {
        ShapeKind::Band => ResolvedShape {
            kind: ShapeKind::Band,
            x: shape.offset_x.unwrap_or(0.0),
            y: shape.offset_y.unwrap_or(0.0),
            width: (shape.width_pct.unwrap_or(140.0) * canvas.width / 100.0).round(),
            height: shape.height_px.unwrap_or(70.0),
            angle: shape.angle.unwrap_or(0.0),
            radius: Radius::Px(14.0),
            color: shape.color.clone().unwrap_or_else(|| primary.clone()),
            opacity,
        },
        ShapeKind::Arc => {
            let size = shape.size_px.unwrap_or(canvas.width.min(canvas.height));
            let (x, y) = anchor(
                shape.position.as_deref().unwrap_or("top-right"),
                canvas,
                size,
                size,
                shape.offset_x.unwrap_or(-40.0),
                shape.offset_y.unwrap_or(-40.0),
            );
            ResolvedShape {
                kind: ShapeKind::Arc,
                x,
                y,
                width: size,
                height: size,
                angle: 0.0,
                radius: Radius::Round,
                color: shape.color.clone().unwrap_or_else(|| primary.clone()),
                opacity,
            }
        }
        ShapeKind::Curve => {
            let width = (shape.width_pct.unwrap_or(160.0) * canvas.width / 100.0).round();
            let height = shape
                .height_px
                .unwrap_or_else(|| (canvas.height * 0.45).round());
            let (x, y) = anchor(
                shape.position.as_deref().unwrap_or("bottom-left"),
                canvas,
                width,
                height,
                shape.offset_x.unwrap_or(-40.0),
                shape.offset_y.unwrap_or(-20.0),
            );
            ResolvedShape {
                kind: ShapeKind::Curve,
                x,
                y,
                width,
                height,
                angle: shape.angle.unwrap_or(0.0),
                radius: Radius::Round,
                color: shape.color.clone().unwrap_or_else(|| secondary.clone()),
                opacity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::{normalize, DesignSuggestion};
    use serde_json::json;

    fn norm(v: serde_json::Value) -> NormalizedSuggestion {
        normalize(&DesignSuggestion::from(v))
    }

    fn shape(v: serde_json::Value) -> ResolvedShape {
        let n = norm(json!({ "shapes": [v] }));
        resolve_shape(
            &n.shapes[0],
            Canvas::default(),
            &Hex::constant("#3b82f6"),
            &Hex::constant("#1e40af"),
        )
    }

    #[test]
    fn test_explicit_background_is_solid() {
        let bg = Background::resolve(&norm(json!({"palette": {"background": "#0f172a"}, "template": "classic"})));
        assert_eq!(bg.solid().map(Hex::as_str), Some("#0f172a"));
    }

    #[test]
    fn test_classic_and_minimal_borders() {
        let bg = Background::resolve(&norm(json!({"template": "classic", "palette": {"primary": "#ef4444"}})));
        match bg {
            Background::Solid { color, border: Some(b) } => {
                assert_eq!(color.as_str(), "#ffffff");
                assert_eq!(b.side, BorderSide::All);
                assert_eq!(b.width, 2.0);
                assert_eq!(b.color.as_str(), "#ef4444");
            }
            other => panic!("unexpected background {other:?}"),
        }
        let bg = Background::resolve(&norm(json!({"template": "minimal"})));
        assert!(matches!(
            bg,
            Background::Solid { border: Some(Border { side: BorderSide::Left, .. }), .. }
        ));
    }

    #[test]
    fn test_gradient_default() {
        let bg = Background::resolve(&norm(json!({"template": "modern"})));
        assert_eq!(
            bg,
            Background::Gradient {
                angle: 135.0,
                from: Hex::constant("#3b82f6"),
                to: Hex::constant("#1e40af"),
            }
        );
    }

    #[test]
    fn test_readable_text_on_white() {
        let bg = Background::Solid { color: Hex::light(), border: None };
        assert_eq!(bg.readable_text(&Hex::light()).as_str(), "#111111");
        assert_eq!(bg.readable_text(&Hex::constant("#000")).as_str(), "#000");
    }

    #[test]
    fn test_band_defaults() {
        let s = shape(json!({"type": "band"}));
        assert_eq!((s.x, s.y, s.width, s.height), (0.0, 0.0, 700.0, 70.0));
        assert_eq!(s.radius, Radius::Px(14.0));
        assert_eq!(s.color.as_str(), "#3b82f6");
    }

    #[test]
    fn test_arc_top_right_defaults() {
        let s = shape(json!({"type": "arc"}));
        // 280px circle pushed 40px past the top-right corner
        assert_eq!((s.x, s.y, s.width), (260.0, -40.0, 280.0));
        assert_eq!(s.radius, Radius::Round);
    }

    #[test]
    fn test_curve_bottom_left_defaults() {
        let s = shape(json!({"type": "curve", "opacity": 3.0}));
        assert_eq!((s.width, s.height), (800.0, 126.0));
        assert_eq!((s.x, s.y), (-40.0, 280.0 - 126.0 + 20.0));
        assert_eq!(s.color.as_str(), "#1e40af");
        assert_eq!(s.opacity, 1.0);
    }
}
