//! Declarative vector shape tree.
//!
//! A [`VectorIcon`] holds fully resolved numbers only. Serializers (SVG via
//! [`VectorIcon::to_svg`], JSON via serde) walk the tree without drawing
//! any further randomness.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::color::Hex;

/// Logical icon canvas edge in pixels.
pub const ICON_SIZE: f64 = 256.0;

/// One transform step. Lists of these apply left to right, as in SVG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Transform {
    Translate { x: f64, y: f64 },
    /// Rotation in degrees, about `pivot` or the local origin.
    Rotate {
        deg: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pivot: Option<(f64, f64)>,
    },
    Scale { k: f64 },
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self::Translate { x, y }
    }

    pub fn rotate(deg: f64) -> Self {
        Self::Rotate { deg, pivot: None }
    }

    pub fn rotate_about(deg: f64, cx: f64, cy: f64) -> Self {
        Self::Rotate {
            deg,
            pivot: Some((cx, cy)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
}

/// Stroke paint for outlined shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub color: Hex,
    pub width: f64,
    /// Dash and gap lengths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<(f64, f64)>,
    pub linecap: LineCap,
}

impl Stroke {
    pub fn solid(color: &Hex, width: f64) -> Self {
        Self {
            color: color.clone(),
            width,
            dash: None,
            linecap: LineCap::Butt,
        }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    pub fn round(mut self) -> Self {
        self.linecap = LineCap::Round;
        self
    }
}

/// Path commands (absolute coordinates only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    HorizontalTo(f64),
}

/// Path data, serialized as an SVG `d` string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData(pub Vec<PathCmd>);

impl PathData {
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.0.push(PathCmd::MoveTo(x, y));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.0.push(PathCmd::LineTo(x, y));
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        self.0.push(PathCmd::HorizontalTo(x));
        self
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCmd::MoveTo(x, y) => write!(f, "M{} {}", num(x), num(y))?,
                PathCmd::LineTo(x, y) => write!(f, "L{} {}", num(x), num(y))?,
                PathCmd::HorizontalTo(x) => write!(f, "H{}", num(x))?,
            }
        }
        Ok(())
    }
}

impl Serialize for PathData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A node of the shape tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Group {
        #[serde(skip_serializing_if = "Vec::is_empty")]
        transform: Vec<Transform>,
        children: Vec<Node>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        fill: Option<Hex>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
        #[serde(skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: Hex,
        #[serde(rename = "rotationDeg")]
        rotation_deg: f64,
        pivot: (f64, f64),
    },
    Path {
        d: PathData,
        stroke: Stroke,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        stroke: Stroke,
        #[serde(rename = "rotationDeg")]
        rotation_deg: f64,
    },
    Text {
        x: f64,
        y: f64,
        anchor: TextAnchor,
        fill: Hex,
        #[serde(rename = "fontFamily")]
        font_family: String,
        #[serde(rename = "fontWeight")]
        font_weight: u16,
        #[serde(rename = "fontSize")]
        font_size: f64,
        content: String,
    },
}

impl Node {
    pub fn group(transform: Vec<Transform>, children: Vec<Node>) -> Self {
        Self::Group { transform, children }
    }

    /// This node and all descendants, depth first.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = vec![self];
        if let Node::Group { children, .. } = self {
            for child in children {
                out.extend(child.walk());
            }
        }
        out
    }
}

/// A rendered procedural icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorIcon {
    pub width: f64,
    pub height: f64,
    /// Seed the geometry was drawn from.
    pub seed: u32,
    pub root: Node,
}

impl VectorIcon {
    /// All nodes, depth first.
    pub fn nodes(&self) -> Vec<&Node> {
        self.root.walk()
    }
}

/// Format a coordinate for SVG output.
///
/// Integers print without a fraction; other values use at most three
/// decimals with trailing zeros removed.
pub fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_format() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(-40.0), "-40");
        assert_eq!(num(1.5), "1.5");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn test_path_data_display() {
        let d = PathData::default().move_to(0.0, 12.5).line_to(28.0, 26.5).horizontal_to(3.0);
        assert_eq!(d.to_string(), "M0 12.5 L28 26.5 H3");
        assert_eq!(serde_json::to_value(&d).unwrap(), serde_json::json!("M0 12.5 L28 26.5 H3"));
    }

    #[test]
    fn test_walk_visits_all() {
        let leaf = Node::Text {
            x: 0.0,
            y: 0.0,
            anchor: TextAnchor::Middle,
            fill: Hex::dark(),
            font_family: "Inter".into(),
            font_weight: 700,
            font_size: 18.0,
            content: "A".into(),
        };
        let tree = Node::group(vec![], vec![leaf.clone(), Node::group(vec![], vec![leaf])]);
        assert_eq!(tree.walk().len(), 4);
    }
}
