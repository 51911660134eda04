//! # Template Catalog
//!
//! Built-in design data: the generated card template library, the
//! per-industry starter palettes and the logo suggestion sets.
//!
//! Everything here is deterministic; entry `i` of [`card_templates`] is the
//! same on every call.

use serde::{Deserialize, Serialize};

use crate::suggestion::{
    Content, DesignSuggestion, RawElement, RawElements, RawLayout, RawPalette, RawShape,
    RawTypography,
};

/// Size of the default card template library.
pub const DEFAULT_CARD_TEMPLATES: usize = 520;

// ============================================================================
// INDUSTRIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Creative,
    Healthcare,
    Business,
    Finance,
}

impl Industry {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "technology" => Some(Self::Technology),
            "creative" => Some(Self::Creative),
            "healthcare" => Some(Self::Healthcare),
            "business" => Some(Self::Business),
            "finance" => Some(Self::Finance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Creative => "creative",
            Self::Healthcare => "healthcare",
            Self::Business => "business",
            Self::Finance => "finance",
        }
    }

    /// Guess an industry from a job title.
    pub fn infer(job_title: &str) -> Self {
        let t = job_title.to_lowercase();
        let any = |words: &[&str]| words.iter().any(|w| t.contains(w));
        if any(&["tech", "developer", "engineer"]) {
            Self::Technology
        } else if any(&["design", "creative", "art"]) {
            Self::Creative
        } else if any(&["doctor", "medical", "health"]) {
            Self::Healthcare
        } else {
            Self::Business
        }
    }
}

/// A named two-color starter palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: [&'static str; 2],
}

const fn tpl(id: &'static str, name: &'static str, a: &'static str, b: &'static str) -> IndustryTemplate {
    IndustryTemplate {
        id,
        name,
        colors: [a, b],
    }
}

static TECHNOLOGY_TEMPLATES: &[IndustryTemplate] = &[
    tpl("tech-modern", "Tech Modern", "#3b82f6", "#1e40af"),
    tpl("tech-gradient", "Tech Gradient", "#8b5cf6", "#3b82f6"),
    tpl("tech-minimal", "Tech Minimal", "#10b981", "#059669"),
];

static CREATIVE_TEMPLATES: &[IndustryTemplate] = &[
    tpl("creative-bold", "Creative Bold", "#ef4444", "#dc2626"),
    tpl("creative-artistic", "Creative Artistic", "#f59e0b", "#d97706"),
    tpl("creative-vibrant", "Creative Vibrant", "#8b5cf6", "#7c3aed"),
];

static HEALTHCARE_TEMPLATES: &[IndustryTemplate] = &[
    tpl("health-calm", "Healthcare Calm", "#06b6d4", "#0891b2"),
    tpl("health-trust", "Healthcare Trust", "#10b981", "#059669"),
    tpl("health-professional", "Healthcare Professional", "#3b82f6", "#1e40af"),
];

static BUSINESS_TEMPLATES: &[IndustryTemplate] = &[
    tpl("business-classic", "Business Classic", "#1f2937", "#374151"),
    tpl("business-modern", "Business Modern", "#3b82f6", "#1e40af"),
    tpl("business-elegant", "Business Elegant", "#6b7280", "#4b5563"),
];

/// Starter palettes for an industry name. Unknown names get business.
pub fn industry_templates(industry: &str) -> &'static [IndustryTemplate] {
    match Industry::parse(industry) {
        Some(Industry::Technology) => TECHNOLOGY_TEMPLATES,
        Some(Industry::Creative) => CREATIVE_TEMPLATES,
        Some(Industry::Healthcare) => HEALTHCARE_TEMPLATES,
        _ => BUSINESS_TEMPLATES,
    }
}

/// Icon, color and style ideas for a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoSuggestions {
    pub icons: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub styles: &'static [&'static str],
}

static TECHNOLOGY_LOGOS: LogoSuggestions = LogoSuggestions {
    icons: &["💻", "🚀", "⚡", "🔧", "⚙️", "💡"],
    colors: &["#3b82f6", "#8b5cf6", "#06b6d4", "#10b981"],
    styles: &["modern", "tech", "minimalist"],
};

static HEALTHCARE_LOGOS: LogoSuggestions = LogoSuggestions {
    icons: &["🏥", "💊", "🩺", "❤️", "🌿", "💉"],
    colors: &["#06b6d4", "#10b981", "#3b82f6", "#84cc16"],
    styles: &["corporate", "minimalist", "modern"],
};

static CREATIVE_LOGOS: LogoSuggestions = LogoSuggestions {
    icons: &["🎨", "✨", "🎭", "🖌️", "🌈", "💫"],
    colors: &["#ef4444", "#f59e0b", "#8b5cf6", "#ec4899"],
    styles: &["creative", "artistic", "modern"],
};

static FINANCE_LOGOS: LogoSuggestions = LogoSuggestions {
    icons: &["💼", "📊", "💰", "🏦", "📈", "💎"],
    colors: &["#1f2937", "#3b82f6", "#059669", "#d97706"],
    styles: &["corporate", "minimalist", "modern"],
};

/// Logo ideas for an industry name. Unknown names get technology.
pub fn logo_suggestions(industry: &str) -> &'static LogoSuggestions {
    match Industry::parse(industry) {
        Some(Industry::Healthcare) => &HEALTHCARE_LOGOS,
        Some(Industry::Creative) => &CREATIVE_LOGOS,
        Some(Industry::Finance) => &FINANCE_LOGOS,
        _ => &TECHNOLOGY_LOGOS,
    }
}

// ============================================================================
// CARD TEMPLATE LIBRARY
// ============================================================================

const PALETTES: [(&str, &str); 10] = [
    ("#3b82f6", "#1e40af"),
    ("#ef4444", "#b91c1c"),
    ("#10b981", "#065f46"),
    ("#f59e0b", "#b45309"),
    ("#8b5cf6", "#6d28d9"),
    ("#06b6d4", "#0e7490"),
    ("#84cc16", "#4d7c0f"),
    ("#f97316", "#c2410c"),
    ("#ec4899", "#9d174d"),
    ("#22c55e", "#15803d"),
];

/// `None` means the primary to secondary gradient.
const BACKGROUNDS: [Option<&str>; 5] = [None, Some("#0f172a"), Some("#111827"), Some("#ffffff"), Some("#0a0a0a")];

const FONTS: [&str; 20] = [
    "Inter", "Poppins", "Montserrat", "Raleway", "Lato", "Nunito", "Rubik", "Source Sans 3",
    "Work Sans", "Manrope", "DM Sans", "Outfit", "Urbanist", "Kanit", "Open Sans", "Roboto",
    "Barlow", "Hind", "Mulish", "Titillium Web",
];

const TEMPLATES: [&str; 6] = ["modern", "classic", "minimal", "creative", "corporate", "tech"];

const TITLES: [&str; 5] = ["Software Engineer", "Product Designer", "Marketing Lead", "Founder", "Data Scientist"];

const COMPANIES: [&str; 5] = ["Nova Labs", "PixelCraft", "BluePeak", "Lumina Corp", "Apex Studio"];

/// Block placement preset: label and `(dx, dy)` offset for company, name,
/// title and contacts, in that order.
type Preset = [(&'static str, (f64, f64)); 4];

const PRESETS: [Preset; 15] = [
    [("top left", (0.0, 0.0)), ("center left", (0.0, -6.0)), ("center left", (0.0, 16.0)), ("bottom left", (0.0, 0.0))],
    [("top right", (-8.0, 0.0)), ("center right", (0.0, -8.0)), ("center right", (0.0, 12.0)), ("bottom right", (0.0, 0.0))],
    [("top center", (0.0, 0.0)), ("center", (0.0, -10.0)), ("center", (0.0, 12.0)), ("bottom center", (0.0, 0.0))],
    [("top left", (0.0, 0.0)), ("center right", (-8.0, 0.0)), ("center right", (-8.0, 16.0)), ("bottom right", (0.0, 0.0))],
    [("top right", (0.0, 0.0)), ("center left", (8.0, 0.0)), ("center left", (8.0, 16.0)), ("bottom left", (0.0, 0.0))],
    [("bottom left", (0.0, -6.0)), ("top right", (-8.0, 0.0)), ("center right", (-8.0, 12.0)), ("bottom right", (0.0, 0.0))],
    [("center left", (0.0, 0.0)), ("top left", (0.0, 8.0)), ("center left", (0.0, 22.0)), ("bottom left", (0.0, 0.0))],
    [("center right", (0.0, 0.0)), ("top right", (0.0, 8.0)), ("center right", (0.0, 22.0)), ("bottom right", (0.0, 0.0))],
    [("bottom center", (0.0, 0.0)), ("top center", (0.0, 6.0)), ("center", (0.0, 20.0)), ("bottom center", (0.0, 0.0))],
    [("center right", (0.0, -4.0)), ("top left", (0.0, 0.0)), ("center left", (0.0, 18.0)), ("bottom left", (0.0, 0.0))],
    [("center left", (0.0, -4.0)), ("top right", (0.0, 0.0)), ("center right", (0.0, 18.0)), ("bottom right", (0.0, 0.0))],
    [("top left", (0.0, 0.0)), ("center", (0.0, -6.0)), ("center", (0.0, 16.0)), ("bottom right", (0.0, 0.0))],
    [("top left", (0.0, 0.0)), ("center left", (0.0, -8.0)), ("center left", (0.0, 10.0)), ("center right", (12.0, 0.0))],
    [("top right", (-6.0, 0.0)), ("bottom left", (0.0, -10.0)), ("bottom left", (0.0, 10.0)), ("bottom right", (0.0, 0.0))],
    [("center left", (-6.0, -30.0)), ("top center", (0.0, 0.0)), ("center", (0.0, 18.0)), ("bottom right", (0.0, 0.0))],
];

/// One entry of the card template library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardTemplate {
    pub id: String,
    #[serde(flatten)]
    pub suggestion: DesignSuggestion,
}

fn element(preset: (&str, (f64, f64)), size: &str) -> RawElement {
    let (position, (dx, dy)) = preset;
    RawElement {
        offset_x: Some(dx),
        offset_y: Some(dy),
        ..RawElement::at(position, size)
    }
}

fn layout(i: usize) -> RawLayout {
    let p = PRESETS[i % PRESETS.len()];
    let name_size = if i % 4 == 0 { "x-large" } else { "large" };
    let title_size = if i % 3 == 0 { "medium" } else { "small" };
    let company_size = if i % 5 == 0 { "large" } else { "medium" };
    RawLayout {
        style: None,
        elements: RawElements {
            company: Some(element(p[0], company_size)),
            name: Some(element(p[1], name_size)),
            title: Some(element(p[2], title_size)),
            contacts: Some(element(p[3], "small")),
        },
    }
}

struct ShapeSpec {
    kind: &'static str,
    primary: bool,
    opacity: f64,
    angle: Option<f64>,
    position: Option<&'static str>,
    width_pct: Option<f64>,
    height_px: Option<f64>,
    size_px: Option<f64>,
    offset: (f64, f64),
}

const fn band(primary: bool, opacity: f64, angle: f64, width_pct: f64, height_px: f64, offset: (f64, f64)) -> ShapeSpec {
    ShapeSpec {
        kind: "band",
        primary,
        opacity,
        angle: Some(angle),
        position: None,
        width_pct: Some(width_pct),
        height_px: Some(height_px),
        size_px: None,
        offset,
    }
}

const fn arc(primary: bool, opacity: f64, size_px: f64, offset: (f64, f64)) -> ShapeSpec {
    ShapeSpec {
        kind: "arc",
        primary,
        opacity,
        angle: None,
        position: Some("top-right"),
        width_pct: None,
        height_px: None,
        size_px: Some(size_px),
        offset,
    }
}

const fn curve(primary: bool, opacity: f64, width_pct: f64, height_px: f64, angle: f64, offset: (f64, f64)) -> ShapeSpec {
    ShapeSpec {
        kind: "curve",
        primary,
        opacity,
        angle: Some(angle),
        position: Some("bottom-left"),
        width_pct: Some(width_pct),
        height_px: Some(height_px),
        size_px: None,
        offset,
    }
}

/// Decorative layer variants, cycled by template index.
const SHAPE_VARIANTS: [[ShapeSpec; 2]; 4] = [
    // Diagonal bands from the left
    [
        band(true, 0.95, 20.0, 140.0, 70.0, (-40.0, 30.0)),
        band(false, 0.85, 20.0, 140.0, 40.0, (-30.0, 110.0)),
    ],
    // Top-right arcs
    [arc(true, 0.9, 220.0, (40.0, -80.0)), arc(false, 0.7, 160.0, (-10.0, -40.0))],
    // Bottom-left waves
    [
        curve(true, 0.9, 160.0, 140.0, -8.0, (-50.0, -10.0)),
        curve(false, 0.7, 150.0, 110.0, -6.0, (-40.0, 20.0)),
    ],
    // Dual diagonal from the right
    [
        band(false, 0.9, -18.0, 150.0, 80.0, (30.0, 20.0)),
        band(true, 0.85, -18.0, 150.0, 40.0, (20.0, 110.0)),
    ],
];

fn shapes(i: usize, primary: &str, secondary: &str) -> Vec<RawShape> {
    SHAPE_VARIANTS[i % SHAPE_VARIANTS.len()]
        .iter()
        .map(|s| RawShape {
            kind: Some(s.kind.to_string()),
            color: Some(if s.primary { primary } else { secondary }.to_string()),
            opacity: Some(s.opacity),
            angle: s.angle,
            position: s.position.map(str::to_string),
            width_pct: s.width_pct,
            height_px: s.height_px,
            size_px: s.size_px,
            offset_x: Some(s.offset.0),
            offset_y: Some(s.offset.1),
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Template `i` of the library.
///
/// The text color is left unset so normalization derives it from the
/// background.
pub fn card_template(i: usize) -> CardTemplate {
    let (primary, secondary) = PALETTES[i % PALETTES.len()];
    let background = BACKGROUNDS[(i + 2) % BACKGROUNDS.len()];
    let font = FONTS[(i * 2) % FONTS.len()];
    let template = TEMPLATES[i % TEMPLATES.len()];

    CardTemplate {
        id: format!("tpl_{}", i),
        suggestion: DesignSuggestion {
            name: Some(format!("{} {}", capitalize(template), i + 1)),
            template: Some(template.to_string()),
            palette: RawPalette {
                primary: Some(primary.to_string()),
                secondary: Some(secondary.to_string()),
                background: background.map(str::to_string),
                ..Default::default()
            },
            typography: RawTypography {
                heading: Some(font.to_string()),
                body: Some(font.to_string()),
            },
            font: None,
            layout: layout(i),
            content: Content {
                name: Some(format!("Alex Taylor {}", i + 1)),
                title: Some(TITLES[i % TITLES.len()].to_string()),
                company: Some(COMPANIES[i % COMPANIES.len()].to_string()),
                ..Default::default()
            },
            shapes: shapes(i, primary, secondary),
            safe_margin: None,
        },
    }
}

/// The first `count` templates of the library.
pub fn card_templates(count: usize) -> Vec<CardTemplate> {
    (0..count).map(card_template).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::{normalize, Position, SizeKeyword};

    #[test]
    fn test_industry_inference() {
        assert_eq!(Industry::infer("Senior Software Engineer"), Industry::Technology);
        assert_eq!(Industry::infer("Art Director"), Industry::Creative);
        assert_eq!(Industry::infer("Medical Officer"), Industry::Healthcare);
        assert_eq!(Industry::infer("Accountant"), Industry::Business);
        // "tech" is checked before "art"
        assert_eq!(Industry::infer("Technical Artist"), Industry::Technology);
    }

    #[test]
    fn test_industry_template_defaults() {
        assert_eq!(industry_templates("technology")[0].id, "tech-modern");
        assert_eq!(industry_templates("unknown")[0].id, "business-classic");
        assert_eq!(industry_templates("finance")[0].id, "business-classic");
        assert_eq!(logo_suggestions("finance").colors[0], "#1f2937");
        assert_eq!(logo_suggestions("business").styles, &["modern", "tech", "minimalist"]);
    }

    #[test]
    fn test_library_shape() {
        let all = card_templates(DEFAULT_CARD_TEMPLATES);
        assert_eq!(all.len(), 520);
        assert_eq!(all[0].id, "tpl_0");
        assert_eq!(all[0].suggestion.name.as_deref(), Some("Modern 1"));
        assert_eq!(all[7].suggestion.name.as_deref(), Some("Classic 8"));
        // Shift of 2: template 0 renders on #111827, template 3 on the gradient
        assert_eq!(all[0].suggestion.palette.background.as_deref(), Some("#111827"));
        assert_eq!(all[3].suggestion.palette.background, None);
        assert_eq!(all[1].suggestion.typography.heading.as_deref(), Some("Montserrat"));
    }

    #[test]
    fn test_library_entry_normalizes() {
        let n = normalize(&card_template(0).suggestion);
        assert_eq!(n.elements.name.size, SizeKeyword::XLarge);
        assert_eq!(n.elements.title.size, SizeKeyword::Medium);
        assert_eq!(n.elements.company.size, SizeKeyword::Large);
        assert_eq!(n.elements.name.offset_y, -6.0);
        assert_eq!(n.elements.contacts.position, Position::BOTTOM_LEFT);
        assert_eq!(n.shapes.len(), 2);
        // Light text on a dark background
        assert_eq!(n.palette.text.as_str(), "#ffffff");
    }

    #[test]
    fn test_template_serializes_flat() {
        let v = serde_json::to_value(card_template(1)).unwrap();
        assert_eq!(v["id"], "tpl_1");
        assert_eq!(v["template"], "classic");
        assert_eq!(v["shapes"][0]["type"], "arc");
        assert_eq!(v["shapes"][0]["sizePx"], 220.0);
    }
}
