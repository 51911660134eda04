//! Suggestion normalization: the single trust boundary.
//!
//! [`normalize`] turns an arbitrary [`DesignSuggestion`] into a fully typed
//! [`NormalizedSuggestion`]. It never fails and never mutates its input.
//!
//! ## Rules
//!
//! 1. `company`, `name`, `title`, `contacts` always exist.
//! 2. Missing positions default to top left / center left / center left /
//!    bottom left.
//! 3. A contacts position mentioning `top` becomes `bottom left`.
//! 4. Sizes outside the keyword vocabulary fall back to medium / large /
//!    medium (contacts: small).
//! 5. A missing or malformed `palette.text` is derived from the background
//!    (else primary, else `#3b82f6`) with a 0.5 luminance cut.

use serde::Serialize;

use super::labels::{Position, SizeKeyword, TemplateTag, VZone};
use super::schema::{
    Content, DesignSuggestion, RawElement, RawElements, RawLayout, RawPalette, RawShape,
    RawTypography,
};
use crate::color::{self, Hex};

/// A suggestion after normalization. Every downstream stage works on this.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSuggestion {
    pub name: Option<String>,
    pub template: Option<TemplateTag>,
    pub palette: Palette,
    pub typography: Typography,
    pub layout_style: Option<String>,
    pub elements: Elements,
    pub content: Content,
    pub shapes: Vec<DecorShape>,
    pub safe_margin: Option<f64>,
}

/// Validated palette. `text` is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub primary: Option<Hex>,
    pub secondary: Option<Hex>,
    pub accent: Option<Hex>,
    pub background: Option<Hex>,
    pub text: Hex,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Typography {
    pub heading: Option<String>,
    pub body: Option<String>,
}

impl Typography {
    /// Font family to render with: heading, else body.
    pub fn family(&self) -> Option<&str> {
        self.heading.as_deref().or(self.body.as_deref())
    }
}

/// Resolved placement hints for one text block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSpec {
    pub position: Position,
    pub size: SizeKeyword,
    pub weight: Option<String>,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ElementSpec {
    fn from_raw(raw: Option<&RawElement>, default_pos: Position, default_size: SizeKeyword) -> Self {
        let raw = raw.cloned().unwrap_or_default();
        let position = raw
            .position
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(Position::parse)
            .unwrap_or(default_pos);
        let size = raw
            .size
            .as_deref()
            .and_then(SizeKeyword::parse)
            .unwrap_or(default_size);
        Self {
            position,
            size,
            weight: raw.weight,
            offset_x: raw.offset_x.unwrap_or(0.0),
            offset_y: raw.offset_y.unwrap_or(0.0),
        }
    }

    fn to_raw(&self) -> RawElement {
        RawElement {
            position: Some(self.position.label().to_string()),
            size: Some(self.size.as_str().to_string()),
            weight: self.weight.clone(),
            offset_x: Some(self.offset_x),
            offset_y: Some(self.offset_y),
        }
    }
}

/// The four placed text blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Elements {
    pub company: ElementSpec,
    pub name: ElementSpec,
    pub title: ElementSpec,
    pub contacts: ElementSpec,
}

/// Decorative shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Band,
    Arc,
    Curve,
}

impl ShapeKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_lowercase().as_str() {
            "band" => Some(Self::Band),
            "arc" => Some(Self::Arc),
            "curve" => Some(Self::Curve),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Band => "band",
            Self::Arc => "arc",
            Self::Curve => "curve",
        }
    }
}

/// A decorative shape with validated color; geometry defaults are applied
/// at layout time because they depend on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorShape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub color: Option<Hex>,
    pub opacity: Option<f64>,
    pub angle: Option<f64>,
    pub position: Option<String>,
    pub width_pct: Option<f64>,
    pub height_px: Option<f64>,
    pub size_px: Option<f64>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

impl DecorShape {
    fn from_raw(raw: &RawShape) -> Option<Self> {
        let kind = ShapeKind::parse(raw.kind.as_deref()?)?;
        Some(Self {
            kind,
            color: raw.color.as_deref().and_then(Hex::parse),
            opacity: raw.opacity,
            angle: raw.angle,
            position: raw.position.clone(),
            width_pct: raw.width_pct,
            height_px: raw.height_px,
            size_px: raw.size_px,
            offset_x: raw.offset_x,
            offset_y: raw.offset_y,
        })
    }

    fn to_raw(&self) -> RawShape {
        RawShape {
            kind: Some(self.kind.as_str().to_string()),
            color: self.color.as_ref().map(|c| c.to_string()),
            opacity: self.opacity,
            angle: self.angle,
            position: self.position.clone(),
            width_pct: self.width_pct,
            height_px: self.height_px,
            size_px: self.size_px,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
        }
    }
}

fn valid_hex(value: &Option<String>) -> Option<Hex> {
    value.as_deref().and_then(Hex::parse)
}

/// Normalize an untrusted suggestion.
pub fn normalize(suggestion: &DesignSuggestion) -> NormalizedSuggestion {
    let el = &suggestion.layout.elements;

    let company = ElementSpec::from_raw(el.company.as_ref(), Position::TOP_LEFT, SizeKeyword::Medium);
    let name = ElementSpec::from_raw(el.name.as_ref(), Position::CENTER_LEFT, SizeKeyword::Large);
    let title = ElementSpec::from_raw(el.title.as_ref(), Position::CENTER_LEFT, SizeKeyword::Medium);
    let mut contacts =
        ElementSpec::from_raw(el.contacts.as_ref(), Position::BOTTOM_LEFT, SizeKeyword::Small);

    // Contact details never compete with the masthead area
    if contacts.position.v == VZone::Top {
        contacts.position = Position::BOTTOM_LEFT;
    }

    let p = &suggestion.palette;
    let primary = valid_hex(&p.primary);
    let background = valid_hex(&p.background);
    let text = valid_hex(&p.text).unwrap_or_else(|| {
        let candidate = background
            .clone()
            .or_else(|| primary.clone())
            .unwrap_or_else(|| Hex::constant(color::DEFAULT_PRIMARY));
        color::pick_contrasting_text_color(&candidate)
    });

    let mut typography = Typography {
        heading: suggestion.typography.heading.clone(),
        body: suggestion.typography.body.clone(),
    };
    if typography.family().is_none() {
        typography.heading = suggestion.font.clone();
    }

    NormalizedSuggestion {
        name: suggestion.name.clone(),
        template: suggestion.template.as_deref().and_then(TemplateTag::parse),
        palette: Palette {
            primary,
            secondary: valid_hex(&p.secondary),
            accent: valid_hex(&p.accent),
            background,
            text,
        },
        typography,
        layout_style: suggestion.layout.style.clone(),
        elements: Elements {
            company,
            name,
            title,
            contacts,
        },
        content: suggestion.content.clone(),
        shapes: suggestion.shapes.iter().filter_map(DecorShape::from_raw).collect(),
        safe_margin: suggestion.safe_margin.filter(|m| *m >= 0.0),
    }
}

impl NormalizedSuggestion {
    /// Convert back to the wire shape (all fields filled in).
    pub fn to_suggestion(&self) -> DesignSuggestion {
        let hex = |h: &Option<Hex>| h.as_ref().map(|c| c.to_string());
        DesignSuggestion {
            name: self.name.clone(),
            template: self.template.map(|t| t.as_str().to_string()),
            palette: RawPalette {
                primary: hex(&self.palette.primary),
                secondary: hex(&self.palette.secondary),
                accent: hex(&self.palette.accent),
                background: hex(&self.palette.background),
                text: Some(self.palette.text.to_string()),
            },
            typography: RawTypography {
                heading: self.typography.heading.clone(),
                body: self.typography.body.clone(),
            },
            font: None,
            layout: RawLayout {
                style: self.layout_style.clone(),
                elements: RawElements {
                    company: Some(self.elements.company.to_raw()),
                    name: Some(self.elements.name.to_raw()),
                    title: Some(self.elements.title.to_raw()),
                    contacts: Some(self.elements.contacts.to_raw()),
                },
            },
            content: self.content.clone(),
            shapes: self.shapes.iter().map(DecorShape::to_raw).collect(),
            safe_margin: self.safe_margin,
        }
    }
}
