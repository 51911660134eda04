//! # Card Layout Engine
//!
//! Turns a [`DesignSuggestion`] into a [`RenderPlan`]: resolved block
//! positions, font sizes, colors, background and decorative shapes.
//!
//! ## Pipeline
//!
//! 1. Normalize the suggestion ([`crate::suggestion::normalize`]).
//! 2. Map each block's position label onto the 3x3 grid ([`grid`]), plus
//!    its pixel offsets. A house layout replaces this step unless
//!    positions are forced.
//! 3. Resolve keyword font sizes with the hierarchy clamp.
//! 4. Stack blocks without overlap ([`collision`]).
//! 5. Snap to the grid, then clamp into the safe margin.
//! 6. Pick a text color readable on the effective background ([`decor`]).
//! 7. Derive the text alignment from the name block's label.
//!
//! Everything here is pure: same inputs, same plan.

pub mod collision;
pub mod decor;
pub mod drag;
pub mod grid;
pub mod house;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::Hex;
use crate::suggestion::{
    normalize, DesignSuggestion, ElementSpec, HZone, NormalizedSuggestion, Position,
};

pub use collision::resolve_overlaps;
pub use decor::{Background, Border, BorderSide, Radius, ResolvedShape};
pub use drag::{apply_event, DragEvent, DragState};
pub use grid::{position_to_coords, size_to_px, FontSizes};
pub use house::{tidy, HouseLayout};

/// Default safe-margin inset.
pub const DEFAULT_SAFE_MARGIN: f64 = 12.0;

/// Default font family when the suggestion names none.
pub const DEFAULT_FONT: &str = "Inter";

/// Card canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    /// The editor's business card preview size.
    fn default() -> Self {
        Self::new(500.0, 280.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The four text blocks on a card.
///
/// The declaration order is the tie-break order used when stacking blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Company,
    Name,
    Title,
    Contacts,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [Self::Company, Self::Name, Self::Title, Self::Contacts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Name => "name",
            Self::Title => "title",
            Self::Contacts => "contacts",
        }
    }
}

/// Block origin per block.
pub type PositionMap = BTreeMap<BlockKind, Point>;

/// Global text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Read from the resolved position, not the raw label: right for the
    /// right column, center for the center column, left otherwise.
    ///
    /// A label naming no column ("top", "middle") resolves to the center
    /// column, so it aligns center.
    pub fn from_position(position: Position) -> Self {
        match position.h {
            HZone::Right => Self::Right,
            HZone::Center => Self::Center,
            HZone::Left => Self::Left,
        }
    }
}

/// Knobs for [`apply_design`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Use the suggestion's positions even when a house layout is active.
    pub force_positions: bool,
    /// House layout that owns positions unless `force_positions` is set.
    pub house_layout: Option<HouseLayout>,
    /// Reflow into a single aligned column; wins over `house_layout`.
    pub tidy: Option<Alignment>,
    /// Overrides the suggestion's `safeMargin`.
    pub safe_margin: Option<f64>,
    /// Snapping grid; `None` or non-positive disables snapping.
    pub snap_grid: Option<f64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            force_positions: false,
            house_layout: None,
            tidy: None,
            safe_margin: None,
            snap_grid: Some(drag::DEFAULT_GRID),
        }
    }
}

/// One text block ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub kind: BlockKind,
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    pub lines: Vec<String>,
}

/// The fully resolved output of the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub canvas: Canvas,
    pub positions: PositionMap,
    pub sizes: FontSizes,
    pub alignment: Alignment,
    pub text_color: Hex,
    pub primary: Hex,
    pub secondary: Hex,
    pub font_family: String,
    pub background: Background,
    pub shapes: Vec<ResolvedShape>,
    pub blocks: Vec<TextBlock>,
}

/// Raw grid coordinates of each block, offsets included.
pub fn map_positions(s: &NormalizedSuggestion, canvas: Canvas) -> PositionMap {
    let el = &s.elements;
    [
        (BlockKind::Company, &el.company),
        (BlockKind::Name, &el.name),
        (BlockKind::Title, &el.title),
        (BlockKind::Contacts, &el.contacts),
    ]
    .into_iter()
    .map(|(kind, spec)| {
        let p = position_to_coords(spec.position, canvas);
        (
            kind,
            Point {
                x: p.x + spec.offset_x,
                y: p.y + spec.offset_y,
            },
        )
    })
    .collect()
}

/// Snap each coordinate to `grid`, then clamp into `[margin, dim - margin]`.
///
/// The margin is capped at half of each dimension, so an oversized margin
/// centers blocks on that axis instead of pushing them off the canvas.
pub fn clamp_to_safe_area(positions: &PositionMap, canvas: Canvas, margin: f64, grid: Option<f64>) -> PositionMap {
    let snap = |v: f64| match grid {
        Some(g) if g > 0.0 => (v / g).round() * g,
        _ => v,
    };
    let fit = |v: f64, dim: f64| {
        let inset = margin.max(0.0).min(dim / 2.0);
        v.min(dim - inset).max(inset)
    };
    positions
        .iter()
        .map(|(kind, p)| {
            (
                *kind,
                Point {
                    x: fit(snap(p.x), canvas.width),
                    y: fit(snap(p.y), canvas.height),
                },
            )
        })
        .collect()
}

/// Build the render plan for a suggestion.
pub fn apply_design(suggestion: &DesignSuggestion, canvas: Canvas, options: &LayoutOptions) -> RenderPlan {
    let s = normalize(suggestion);
    let el = &s.elements;

    let mut sizes = FontSizes::resolve(el.name.size, el.title.size, el.company.size);

    let (raw, alignment) = match (options.tidy, options.house_layout) {
        _ if options.force_positions => {
            (map_positions(&s, canvas), Alignment::from_position(el.name.position))
        }
        (Some(align), _) => {
            sizes = house::tidy_sizes(sizes);
            (tidy(canvas, align), align)
        }
        (None, Some(layout)) => (layout.positions(canvas), layout.alignment()),
        (None, None) => (map_positions(&s, canvas), Alignment::from_position(el.name.position)),
    };

    let stacked = resolve_overlaps(&raw, &sizes, canvas.height);
    let margin = options
        .safe_margin
        .or(s.safe_margin)
        .filter(|m| *m >= 0.0)
        .unwrap_or(DEFAULT_SAFE_MARGIN);
    let positions = clamp_to_safe_area(&stacked, canvas, margin, options.snap_grid);

    let background = Background::resolve(&s);
    let text_color = background.readable_text(&s.palette.text);
    let primary = decor::primary_of(&s);
    let secondary = decor::secondary_of(&s);

    let shapes = s
        .shapes
        .iter()
        .map(|shape| decor::resolve_shape(shape, canvas, &primary, &secondary))
        .collect();

    let blocks = text_blocks(&s, &positions, &sizes);

    log::debug!(
        "layout: {} blocks, {} shapes, align {:?}, text {}",
        blocks.len(),
        s.shapes.len(),
        alignment,
        text_color
    );

    RenderPlan {
        canvas,
        positions,
        sizes,
        alignment,
        text_color,
        primary,
        secondary,
        font_family: s.typography.family().unwrap_or(DEFAULT_FONT).to_string(),
        background,
        shapes,
        blocks,
    }
}

fn text_blocks(s: &NormalizedSuggestion, positions: &PositionMap, sizes: &FontSizes) -> Vec<TextBlock> {
    let c = &s.content;
    BlockKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let (lines, spec): (Vec<String>, &ElementSpec) = match kind {
                BlockKind::Company => (c.company.iter().cloned().collect(), &s.elements.company),
                BlockKind::Name => (c.name.iter().cloned().collect(), &s.elements.name),
                BlockKind::Title => (c.title.iter().cloned().collect(), &s.elements.title),
                BlockKind::Contacts => (c.contact_lines(), &s.elements.contacts),
            };
            let p = positions.get(&kind)?;
            Some(TextBlock {
                kind,
                x: p.x,
                y: p.y,
                font_size: sizes.of(kind),
                weight: spec.weight.clone(),
                lines,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn plan(v: serde_json::Value) -> RenderPlan {
        apply_design(&DesignSuggestion::from(v), Canvas::default(), &LayoutOptions::default())
    }

    #[test]
    fn test_empty_suggestion() {
        let p = plan(json!({}));
        assert_eq!(p.sizes, FontSizes { name: 28, title: 14, company: 12 });
        assert_eq!(p.alignment, Alignment::Left);
        assert_eq!(p.font_family, "Inter");
        assert_eq!(p.positions.len(), 4);
        // Gradient #3b82f6 -> #1e40af: white has the better worst case
        assert_eq!(p.text_color.as_str(), "#ffffff");
        for pt in p.positions.values() {
            assert!(pt.x >= 12.0 && pt.x <= 488.0);
            assert!(pt.y >= 12.0 && pt.y <= 268.0);
        }
    }

    #[test]
    fn test_default_positions_snapped() {
        let p = plan(json!({}));
        // Name at center left: (18, 130) snaps to (16, 128)
        assert_eq!(p.positions[&BlockKind::Name], Point { x: 16.0, y: 128.0 });
        // Title pushed below name: 130 + 35 + 6 = 171 -> 168
        assert_eq!(p.positions[&BlockKind::Title], Point { x: 16.0, y: 168.0 });
        assert_eq!(p.positions[&BlockKind::Company], Point { x: 16.0, y: 16.0 });
    }

    #[test]
    fn test_alignment_from_name() {
        let p = plan(json!({"layout": {"elements": {"name": {"position": "top right"}}}}));
        assert_eq!(p.alignment, Alignment::Right);
        let p = plan(json!({"layout": {"elements": {"name": {"position": "center"}}}}));
        assert_eq!(p.alignment, Alignment::Center);
        let p = plan(json!({"layout": {"elements": {"name": {"position": "bottom center"}}}}));
        assert_eq!(p.alignment, Alignment::Center);
    }

    #[test]
    fn test_alignment_without_column_is_center() {
        for label in ["top", "middle", "bottom"] {
            let p = plan(json!({"layout": {"elements": {"name": {"position": label}}}}));
            assert_eq!(p.alignment, Alignment::Center, "{label}");
        }
        let p = plan(json!({"layout": {"elements": {"name": {"position": "bottom left"}}}}));
        assert_eq!(p.alignment, Alignment::Left);
    }

    #[test]
    fn test_house_layout_wins_unless_forced() {
        let s = DesignSuggestion::from(json!({"layout": {"elements": {"name": {"position": "top right"}}}}));
        let mut opts = LayoutOptions {
            house_layout: Some(HouseLayout::Centered),
            snap_grid: None,
            ..Default::default()
        };
        let p = apply_design(&s, Canvas::default(), &opts);
        assert_eq!(p.alignment, Alignment::Center);
        assert_eq!(p.positions[&BlockKind::Company], Point { x: 140.0, y: 56.0 });

        opts.force_positions = true;
        let p = apply_design(&s, Canvas::default(), &opts);
        assert_eq!(p.alignment, Alignment::Right);
        assert_eq!(p.positions[&BlockKind::Name].x, 282.0);
    }

    #[test]
    fn test_tidy_reflows_into_column() {
        let s = DesignSuggestion::from(json!({"layout": {"elements": {"name": {"position": "bottom right"}}}}));
        let opts = LayoutOptions {
            tidy: Some(Alignment::Center),
            house_layout: Some(HouseLayout::LeftGrid),
            snap_grid: None,
            ..Default::default()
        };
        let p = apply_design(&s, Canvas::default(), &opts);
        assert_eq!(p.alignment, Alignment::Center);
        assert_eq!(p.positions[&BlockKind::Company], Point { x: 140.0, y: 56.0 });
        assert_eq!(p.positions[&BlockKind::Name], Point { x: 140.0, y: 92.0 });
        // 92 + 35 + 6
        assert_eq!(p.positions[&BlockKind::Title], Point { x: 140.0, y: 133.0 });
        assert!(p.sizes.name >= 22);
    }

    #[test]
    fn test_safe_margin_from_suggestion() {
        let s = DesignSuggestion::from(json!({"safeMargin": 40}));
        let opts = LayoutOptions {
            snap_grid: None,
            ..Default::default()
        };
        let p = apply_design(&s, Canvas::default(), &opts);
        assert!(p.positions.values().all(|pt| pt.x >= 40.0 && pt.y >= 40.0 && pt.y <= 240.0));
    }

    #[test]
    fn test_huge_margin_stays_on_canvas() {
        let opts = LayoutOptions {
            safe_margin: Some(1000.0),
            ..Default::default()
        };
        let p = apply_design(&DesignSuggestion::default(), Canvas::new(100.0, 50.0), &opts);
        for pt in p.positions.values() {
            assert_eq!(*pt, Point { x: 50.0, y: 25.0 });
        }
    }

    #[test]
    fn test_huge_suggested_margin_stays_on_canvas() {
        let p = plan(json!({"safeMargin": 5000}));
        let canvas = Canvas::default();
        for (kind, pt) in &p.positions {
            assert!(pt.x >= 0.0 && pt.x <= canvas.width, "{kind:?} {pt:?}");
            assert!(pt.y >= 0.0 && pt.y <= canvas.height, "{kind:?} {pt:?}");
        }
    }

    #[test]
    fn test_text_color_checked_against_background() {
        let p = plan(json!({"palette": {"background": "#ffffff", "text": "#eeeeee"}}));
        assert_eq!(p.text_color.as_str(), "#111111");
        let p = plan(json!({"palette": {"background": "#0f172a", "text": "#f8fafc"}}));
        assert_eq!(p.text_color.as_str(), "#f8fafc");
    }

    #[test]
    fn test_blocks_carry_content() {
        let p = plan(json!({"content": {
            "name": "Ada", "company": "Nova Labs", "email": "ada@nova.dev", "phone": "555"
        }}));
        let name = p.blocks.iter().find(|b| b.kind == BlockKind::Name).unwrap();
        assert_eq!(name.lines, vec!["Ada".to_string()]);
        assert_eq!(name.font_size, 28);
        let contacts = p.blocks.iter().find(|b| b.kind == BlockKind::Contacts).unwrap();
        assert_eq!(contacts.lines.len(), 2);
        assert_eq!(contacts.font_size, 12);
    }

    #[test]
    fn test_plan_serializes() {
        let v = serde_json::to_value(plan(json!({"shapes": [{"type": "arc"}]}))).unwrap();
        assert_eq!(v["positions"]["contacts"]["x"], json!(16.0));
        assert_eq!(v["background"]["type"], json!("gradient"));
        assert_eq!(v["shapes"][0]["type"], json!("arc"));
        assert_eq!(v["alignment"], json!("left"));
    }
}
