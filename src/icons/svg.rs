//! SVG serialization of the shape tree.

use std::fmt::Write;

use super::shape::{num, LineCap, Node, Stroke, Transform, VectorIcon};

impl VectorIcon {
    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let (w, h) = (num(self.width), num(self.height));
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet">"#
        );
        write_node(&mut out, &self.root);
        out.push_str("</svg>");
        out
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn transform_attr(steps: &[Transform]) -> String {
    steps
        .iter()
        .map(|t| match *t {
            Transform::Translate { x, y } => format!("translate({} {})", num(x), num(y)),
            Transform::Rotate { deg, pivot: None } => format!("rotate({})", num(deg)),
            Transform::Rotate {
                deg,
                pivot: Some((cx, cy)),
            } => format!("rotate({} {} {})", num(deg), num(cx), num(cy)),
            Transform::Scale { k } => format!("scale({})", num(k)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(
        r#" stroke="{}" stroke-width="{}""#,
        stroke.color,
        num(stroke.width)
    );
    if let Some((dash, gap)) = stroke.dash {
        let _ = write!(s, r#" stroke-dasharray="{}, {}""#, num(dash), num(gap));
    }
    if stroke.linecap == LineCap::Round {
        s.push_str(r#" stroke-linecap="round""#);
    }
    s
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group { transform, children } => {
            if transform.is_empty() {
                out.push_str("<g>");
            } else {
                let _ = write!(out, r#"<g transform="{}">"#, transform_attr(transform));
            }
            for child in children {
                write_node(out, child);
            }
            out.push_str("</g>");
        }
        Node::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                num(*cx),
                num(*cy),
                num(*r)
            );
            match fill {
                Some(color) => {
                    let _ = write!(out, r#" fill="{}""#, color);
                }
                None => out.push_str(r#" fill="none""#),
            }
            if let Some(stroke) = stroke {
                out.push_str(&stroke_attrs(stroke));
            }
            if let Some(opacity) = opacity {
                let _ = write!(out, r#" opacity="{}""#, num(*opacity));
            }
            out.push_str("/>");
        }
        Node::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            rotation_deg,
            pivot,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" transform="rotate({} {} {})"/>"#,
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                num(*rx),
                fill,
                num(*rotation_deg),
                num(pivot.0),
                num(pivot.1)
            );
        }
        Node::Path { d, stroke } => {
            let _ = write!(out, r#"<path d="{}" fill="none"{}/>"#, d, stroke_attrs(stroke));
        }
        Node::Ellipse {
            cx,
            cy,
            rx,
            ry,
            stroke,
            rotation_deg,
        } => {
            let _ = write!(
                out,
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="none"{} transform="rotate({})"/>"#,
                num(*cx),
                num(*cy),
                num(*rx),
                num(*ry),
                stroke_attrs(stroke),
                num(*rotation_deg)
            );
        }
        Node::Text {
            x,
            y,
            anchor,
            fill,
            font_family,
            font_weight,
            font_size,
            content,
        } => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-family="{}" font-weight="{}" font-size="{}">{}</text>"#,
                num(*x),
                num(*y),
                anchor.as_str(),
                fill,
                escape(font_family),
                font_weight,
                num(*font_size),
                escape(content)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::icons::{render, BrandParams};

    #[test]
    fn test_svg_document() {
        let svg = render("abstract-duotone", 0, &BrandParams::default()).to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="256" viewBox="0 0 256 256""#));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"<g transform="translate(128 128) scale(0.88) translate(-128 -128)">"#));
        assert!(svg.contains(r#"<g transform="translate(-12 0)">"#));
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains(">Brand</text>"));
        assert!(svg.contains(">AA</text>"));
    }

    #[test]
    fn test_text_escaped() {
        let brand = BrandParams::new("R&D <Labs>", "rd");
        let svg = render("links", 1, &brand).to_svg();
        assert!(svg.contains(">R&amp;D &lt;Labs&gt;</text>"));
    }

    #[test]
    fn test_chevrons_round_caps() {
        let svg = render("chevrons", 1, &BrandParams::default()).to_svg();
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains("<path d=\"M0 0 L28 14 L0 28\""));
    }
}
