//! # Procedural Icons
//!
//! Seeded logo icon generator. Each template is a `(kind, index)` pair;
//! rendering it for a brand derives one random stream from
//! `kind|index|companyName|initials` and draws the kind's geometry from it,
//! so the same brand always gets the same icon.
//!
//! ## Adding a New Kind
//!
//! 1. Create `src/icons/mykind.rs` with a `draw(rng, cx, cy, style) -> Node`
//! 2. Add a variant to [`IconKind`] and to [`IconKind::ALL`]
//! 3. Dispatch to it in [`render`]
//!
//! The draw order inside a kind is part of its output: inserting a draw
//! anywhere changes every icon of that kind.
//!
//! ## Example
//!
//! ```
//! use cardgen::icons::{self, BrandParams};
//!
//! let brand = BrandParams::new("Nova", "nv");
//! let a = icons::render("chevrons", 0, &brand);
//! let b = icons::render("chevrons", 0, &brand);
//! assert_eq!(a, b);
//! assert!(a.to_svg().starts_with("<svg"));
//! ```

pub mod chevrons;
pub mod duotone;
pub mod links;
pub mod orbits;
pub mod shape;
mod svg;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::color::Hex;
use crate::seed::SeededRng;
pub use shape::{LineCap, Node, PathCmd, PathData, Stroke, TextAnchor, Transform, VectorIcon, ICON_SIZE};

/// Number of templates in the default registry.
pub const DEFAULT_TEMPLATE_COUNT: usize = 100;

/// Procedural icon archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    AbstractDuotone,
    Chevrons,
    Links,
    Orbits,
}

impl IconKind {
    /// Registry order.
    pub const ALL: [IconKind; 4] = [Self::AbstractDuotone, Self::Chevrons, Self::Links, Self::Orbits];

    pub fn parse(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AbstractDuotone => "abstract-duotone",
            Self::Chevrons => "chevrons",
            Self::Links => "links",
            Self::Orbits => "orbits",
        }
    }
}

/// A registry entry. Rendering is [`IconTemplate::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconTemplate {
    pub id: String,
    pub label: String,
    pub kind: IconKind,
    pub index: usize,
}

impl IconTemplate {
    pub fn new(kind: IconKind, index: usize) -> Self {
        Self {
            id: format!("gen-{}-{}", kind.as_str(), index),
            label: format!("{} {}", title_case(kind.as_str()), index + 1),
            kind,
            index,
        }
    }

    pub fn render(&self, brand: &BrandParams) -> VectorIcon {
        render(self.kind.as_str(), self.index, brand)
    }
}

/// Capitalize the first letter of each dash-separated word.
fn title_case(kind: &str) -> String {
    kind.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Build `count` templates, cycling through the kinds in registry order.
pub fn generate_templates(count: usize) -> Vec<IconTemplate> {
    (0..count)
        .map(|i| IconTemplate::new(IconKind::ALL[i % IconKind::ALL.len()], i))
        .collect()
}

/// Look up a template by id (`gen-{kind}-{index}`).
pub fn template_by_id(id: &str) -> Option<IconTemplate> {
    let rest = id.strip_prefix("gen-")?;
    let (kind, index) = rest.rsplit_once('-')?;
    let kind = IconKind::parse(kind)?;
    let index = index.parse().ok()?;
    Some(IconTemplate::new(kind, index))
}

/// Pick a template from the default registry at random.
pub fn random_template() -> IconTemplate {
    let mut rng = rand::rng();
    let index = rng.random_range(0..DEFAULT_TEMPLATE_COUNT);
    IconTemplate::new(IconKind::ALL[index % IconKind::ALL.len()], index)
}

/// Where the brand text sits relative to the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconLayoutTemplate {
    #[default]
    IconBeside,
    IconAbove,
}

/// Text alignment for the brand text. Anything unrecognized centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    End,
    #[default]
    #[serde(other)]
    Center,
}

impl TextAlign {
    pub fn anchor(&self) -> TextAnchor {
        match self {
            Self::Start => TextAnchor::Start,
            Self::End => TextAnchor::End,
            Self::Center => TextAnchor::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct IconLayout {
    pub template: IconLayoutTemplate,
    pub alignment: TextAlign,
    pub spacing: f64,
}

impl Default for IconLayout {
    fn default() -> Self {
        Self {
            template: IconLayoutTemplate::IconBeside,
            alignment: TextAlign::Center,
            spacing: 12.0,
        }
    }
}

/// Brand inputs to an icon render.
///
/// Deserialization never fails: a missing or malformed field (a color that
/// is not `#rgb`/`#rrggbb`, a non-numeric width) keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct BrandParams {
    pub company_name: String,
    pub initials: String,
    pub primary_color: Hex,
    pub secondary_color: Hex,
    pub font: String,
    /// Stroke width; values below 1 draw at 1.
    pub stroke_width: f64,
    /// Extra rotation in degrees applied on top of the kind's own.
    pub rotation: f64,
    pub layout: IconLayout,
}

impl Default for BrandParams {
    fn default() -> Self {
        Self {
            company_name: "Brand".to_string(),
            initials: "AA".to_string(),
            primary_color: Hex::constant("#f97316"),
            secondary_color: Hex::constant("#111827"),
            font: "Inter".to_string(),
            stroke_width: 10.0,
            rotation: 0.0,
            layout: IconLayout::default(),
        }
    }
}

fn text_at(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn color_at(obj: &Map<String, Value>, key: &str) -> Option<Hex> {
    obj.get(key).and_then(Value::as_str).and_then(Hex::parse)
}

fn number_at(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).filter(|n| n.is_finite())
}

impl From<Value> for IconLayout {
    fn from(value: Value) -> Self {
        let defaults = Self::default();
        let Some(obj) = value.as_object() else {
            return defaults;
        };
        Self {
            template: obj
                .get("template")
                .and_then(|v| IconLayoutTemplate::deserialize(v).ok())
                .unwrap_or(defaults.template),
            alignment: obj
                .get("alignment")
                .and_then(|v| TextAlign::deserialize(v).ok())
                .unwrap_or(defaults.alignment),
            spacing: number_at(obj, "spacing").unwrap_or(defaults.spacing),
        }
    }
}

impl From<Value> for BrandParams {
    fn from(value: Value) -> Self {
        let defaults = Self::default();
        let Some(obj) = value.as_object() else {
            return defaults;
        };
        Self {
            company_name: text_at(obj, "companyName").unwrap_or(defaults.company_name),
            initials: text_at(obj, "initials").unwrap_or(defaults.initials),
            primary_color: color_at(obj, "primaryColor").unwrap_or(defaults.primary_color),
            secondary_color: color_at(obj, "secondaryColor").unwrap_or(defaults.secondary_color),
            font: text_at(obj, "font").unwrap_or(defaults.font),
            stroke_width: number_at(obj, "strokeWidth").unwrap_or(defaults.stroke_width),
            rotation: number_at(obj, "rotation").unwrap_or(defaults.rotation),
            layout: obj.get("layout").cloned().map(IconLayout::from).unwrap_or(defaults.layout),
        }
    }
}

impl BrandParams {
    pub fn new(company_name: &str, initials: &str) -> Self {
        Self {
            company_name: company_name.to_string(),
            initials: initials.to_string(),
            ..Default::default()
        }
    }

    /// The seed key for a template.
    pub fn seed_key(&self, kind: &str, index: usize) -> String {
        format!("{}|{}|{}|{}", kind, index, self.company_name, self.initials)
    }
}

/// Paint settings shared by every kind's draw function.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub primary: Hex,
    pub secondary: Hex,
    pub stroke: f64,
    pub rotation: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style::from(&BrandParams::default())
    }
}

impl From<&BrandParams> for Style {
    fn from(brand: &BrandParams) -> Self {
        let stroke = if brand.stroke_width.is_finite() {
            brand.stroke_width.max(1.0)
        } else {
            10.0
        };
        let rotation = if brand.rotation.is_finite() { brand.rotation } else { 0.0 };
        Self {
            primary: brand.primary_color.clone(),
            secondary: brand.secondary_color.clone(),
            stroke,
            rotation,
        }
    }
}

/// Render a template for a brand.
///
/// `kind` is taken as text so unknown kinds still seed from their own name;
/// they draw the two-ring fallback geometry.
pub fn render(kind: &str, index: usize, brand: &BrandParams) -> VectorIcon {
    let seed_key = brand.seed_key(kind, index);
    let mut rng = SeededRng::from_key(&seed_key);
    let seed = rng.state();
    let style = Style::from(brand);

    let cx = rng.range(80.0, 96.0);
    let cy = rng.range(88.0, 48.0);

    let icon = match IconKind::parse(kind) {
        Some(IconKind::AbstractDuotone) => duotone::draw(&mut rng, cx, cy, &style),
        Some(IconKind::Chevrons) => chevrons::draw(&mut rng, cx, cy, &style),
        Some(IconKind::Links) => links::draw(&mut rng, cx, cy, &style),
        Some(IconKind::Orbits) => orbits::draw(&mut rng, cx, cy, &style),
        None => duotone::draw_fallback(&mut rng, cx, cy, &style),
    };

    let layout = brand.layout;
    let icon_layer = match layout.template {
        IconLayoutTemplate::IconBeside => Node::group(
            vec![Transform::translate(-layout.spacing.max(0.0), 0.0)],
            vec![icon],
        ),
        IconLayoutTemplate::IconAbove => Node::group(vec![], vec![icon]),
    };

    let half = ICON_SIZE / 2.0;
    let root = Node::group(
        vec![
            Transform::translate(half, half),
            Transform::Scale { k: 0.88 },
            Transform::translate(-half, -half),
        ],
        vec![icon_layer, brand_text(brand, &style)],
    );

    VectorIcon {
        width: ICON_SIZE,
        height: ICON_SIZE,
        seed,
        root,
    }
}

/// Company name and initials, placed by the layout.
fn brand_text(brand: &BrandParams, style: &Style) -> Node {
    let layout = brand.layout;
    let anchor = layout.alignment.anchor();
    let (x, title_y) = match layout.template {
        IconLayoutTemplate::IconAbove => (128.0, 180.0 + layout.spacing),
        IconLayoutTemplate::IconBeside => {
            let x = match anchor {
                TextAnchor::Start => 170.0 + layout.spacing,
                TextAnchor::End => 230.0 - layout.spacing,
                TextAnchor::Middle => 200.0,
            };
            (x, 92.0)
        }
    };

    Node::group(
        vec![],
        vec![
            Node::Text {
                x,
                y: title_y,
                anchor,
                fill: style.secondary.clone(),
                font_family: brand.font.clone(),
                font_weight: 700,
                font_size: 18.0,
                content: brand.company_name.clone(),
            },
            Node::Text {
                x,
                y: title_y + 18.0,
                anchor,
                fill: style.primary.clone(),
                font_family: brand.font.clone(),
                font_weight: 500,
                font_size: 12.0,
                content: brand.initials.to_uppercase(),
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chevron_strokes(icon: &VectorIcon) -> Vec<String> {
        icon.nodes()
            .into_iter()
            .filter_map(|n| match n {
                Node::Path { stroke, .. } => Some(stroke.color.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_template_ids_and_labels() {
        let t = generate_templates(8);
        assert_eq!(t[0].id, "gen-abstract-duotone-0");
        assert_eq!(t[0].label, "Abstract-Duotone 1");
        assert_eq!(t[1].id, "gen-chevrons-1");
        assert_eq!(t[5].kind, IconKind::Chevrons);
        assert_eq!(t[7].label, "Orbits 8");
        assert_eq!(generate_templates(DEFAULT_TEMPLATE_COUNT).len(), 100);
    }

    #[test]
    fn test_template_by_id() {
        let t = template_by_id("gen-abstract-duotone-12").unwrap();
        assert_eq!(t.kind, IconKind::AbstractDuotone);
        assert_eq!(t.index, 12);
        assert_eq!(template_by_id("gen-spirals-1"), None);
        assert_eq!(template_by_id("abstract-duotone-1"), None);
        assert_eq!(template_by_id("gen-links-x"), None);
    }

    #[test]
    fn test_random_template_in_registry() {
        let t = random_template();
        assert!(t.index < DEFAULT_TEMPLATE_COUNT);
        assert_eq!(template_by_id(&t.id), Some(t));
    }

    #[test]
    fn test_chevrons_alternate_colors() {
        let brand = BrandParams::new("Nova", "NV");
        let icon = render("chevrons", 0, &brand);
        let strokes = chevron_strokes(&icon);
        assert!((3..=5).contains(&strokes.len()));
        for (i, c) in strokes.iter().enumerate() {
            let expected = if i % 2 == 1 { "#111827" } else { "#f97316" };
            assert_eq!(c, expected);
        }
    }

    #[test]
    fn test_unknown_kind_uses_fallback() {
        let icon = render("spirals", 3, &BrandParams::default());
        let circles = icon
            .nodes()
            .into_iter()
            .filter(|n| matches!(n, Node::Circle { .. }))
            .count();
        assert_eq!(circles, 2);
    }

    #[test]
    fn test_text_layer() {
        let mut brand = BrandParams::new("Acme", "ac");
        brand.layout = IconLayout {
            template: IconLayoutTemplate::IconAbove,
            alignment: TextAlign::Start,
            spacing: 20.0,
        };
        let icon = render("links", 2, &brand);
        let texts: Vec<_> = icon
            .nodes()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text { x, y, content, anchor, .. } => Some((*x, *y, content.clone(), *anchor)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                (128.0, 200.0, "Acme".to_string(), TextAnchor::Start),
                (128.0, 218.0, "AC".to_string(), TextAnchor::Start),
            ]
        );
    }

    #[test]
    fn test_beside_text_x() {
        let mut brand = BrandParams::default();
        brand.layout.alignment = TextAlign::End;
        let icon = render("orbits", 0, &brand);
        let xs: Vec<f64> = icon
            .nodes()
            .into_iter()
            .filter_map(|n| match n {
                Node::Text { x, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![218.0, 218.0]);
    }

    #[test]
    fn test_stroke_floor() {
        let mut brand = BrandParams::default();
        brand.stroke_width = 0.2;
        assert_eq!(Style::from(&brand).stroke, 1.0);
    }

    #[test]
    fn test_brand_params_defaults_from_json() {
        let brand: BrandParams =
            serde_json::from_str(r#"{"companyName": "Nova", "layout": {"alignment": "middle"}}"#).unwrap();
        assert_eq!(brand.initials, "AA");
        assert_eq!(brand.layout.alignment, TextAlign::Center);
        assert_eq!(brand.layout.spacing, 12.0);
    }

    #[test]
    fn test_brand_params_malformed_fields_keep_defaults() {
        let brand: BrandParams = serde_json::from_value(serde_json::json!({
            "companyName": "Nova",
            "primaryColor": "red",
            "secondaryColor": "#12345",
            "strokeWidth": "thick",
            "rotation": null,
            "layout": {"template": "icon-left", "spacing": "wide", "alignment": 3}
        }))
        .unwrap();
        let defaults = BrandParams::default();
        assert_eq!(brand.company_name, "Nova");
        assert_eq!(brand.primary_color, defaults.primary_color);
        assert_eq!(brand.secondary_color, defaults.secondary_color);
        assert_eq!(brand.stroke_width, defaults.stroke_width);
        assert_eq!(brand.rotation, 0.0);
        assert_eq!(brand.layout, IconLayout::default());
    }

    #[test]
    fn test_brand_params_accept_valid_colors() {
        let brand: BrandParams = serde_json::from_value(serde_json::json!({
            "primaryColor": "#0F0",
            "secondaryColor": "#123456",
            "strokeWidth": 4
        }))
        .unwrap();
        assert_eq!(brand.primary_color.as_str(), "#0F0");
        assert_eq!(brand.secondary_color.as_str(), "#123456");
        assert_eq!(brand.stroke_width, 4.0);
    }
}
