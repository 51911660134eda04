//! Untrusted design suggestion schema.
//!
//! Suggestions arrive from AI providers and template catalogs as loosely
//! shaped JSON. Deserialization never fails on shape: every field is
//! optional, and a field holding the wrong JSON type is treated as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw design suggestion, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct DesignSuggestion {
    /// Display name of the concept (e.g. "Jane Concept 1").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Template tag ("modern", "classic", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "RawPalette::is_empty")]
    pub palette: RawPalette,
    #[serde(skip_serializing_if = "RawTypography::is_empty")]
    pub typography: RawTypography,
    /// Legacy single font field, used when typography is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    pub layout: RawLayout,
    #[serde(skip_serializing_if = "Content::is_empty")]
    pub content: Content,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<RawShape>,
    /// Inset (px) that final positions are clamped into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_margin: Option<f64>,
}

/// Palette as received; every entry may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawPalette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RawPalette {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Font family names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawTypography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl RawTypography {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `layout` object: a style hint plus the per-element placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub elements: RawElements,
}

/// The four text blocks the layout engine places. Other element names
/// (logo, qr, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawElements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<RawElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<RawElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<RawElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<RawElement>,
}

/// Placement hints for one text block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

impl RawElement {
    /// Element with only a position and size.
    pub fn at(position: &str, size: &str) -> Self {
        Self {
            position: Some(position.to_string()),
            size: Some(size.to_string()),
            ..Default::default()
        }
    }
}

/// Literal display strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Content {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Non-empty contact lines in display order.
    pub fn contact_lines(&self) -> Vec<String> {
        [&self.phone, &self.email, &self.website, &self.address]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Decorative shape descriptor as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShape {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

// ============================================================================
// LENIENT EXTRACTION
// ============================================================================

fn string_at(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number_at(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).filter(|n| n.is_finite())
}

fn object_at<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

impl From<&Map<String, Value>> for RawPalette {
    fn from(obj: &Map<String, Value>) -> Self {
        Self {
            primary: string_at(obj, "primary"),
            secondary: string_at(obj, "secondary"),
            accent: string_at(obj, "accent"),
            background: string_at(obj, "background"),
            text: string_at(obj, "text"),
        }
    }
}

impl From<&Map<String, Value>> for RawElement {
    fn from(obj: &Map<String, Value>) -> Self {
        Self {
            position: string_at(obj, "position"),
            size: string_at(obj, "size"),
            weight: string_at(obj, "weight"),
            offset_x: number_at(obj, "offsetX"),
            offset_y: number_at(obj, "offsetY"),
        }
    }
}

impl From<&Map<String, Value>> for RawShape {
    fn from(obj: &Map<String, Value>) -> Self {
        Self {
            kind: string_at(obj, "type"),
            color: string_at(obj, "color"),
            opacity: number_at(obj, "opacity"),
            angle: number_at(obj, "angle"),
            position: string_at(obj, "position"),
            width_pct: number_at(obj, "widthPct"),
            height_px: number_at(obj, "heightPx"),
            size_px: number_at(obj, "sizePx"),
            offset_x: number_at(obj, "offsetX"),
            offset_y: number_at(obj, "offsetY"),
        }
    }
}

impl From<&Map<String, Value>> for Content {
    fn from(obj: &Map<String, Value>) -> Self {
        Self {
            name: string_at(obj, "name"),
            title: string_at(obj, "title"),
            company: string_at(obj, "company"),
            phone: string_at(obj, "phone"),
            email: string_at(obj, "email"),
            website: string_at(obj, "website"),
            address: string_at(obj, "address"),
        }
    }
}

impl From<Value> for DesignSuggestion {
    fn from(value: Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };

        let palette = object_at(root, "palette").map(RawPalette::from).unwrap_or_default();

        let typography = object_at(root, "typography")
            .map(|t| RawTypography {
                heading: string_at(t, "heading"),
                body: string_at(t, "body"),
            })
            .unwrap_or_default();

        let layout = object_at(root, "layout")
            .map(|l| {
                let elements = object_at(l, "elements")
                    .map(|e| {
                        let element = |key: &str| object_at(e, key).map(RawElement::from);
                        RawElements {
                            company: element("company"),
                            name: element("name"),
                            title: element("title"),
                            contacts: element("contacts"),
                        }
                    })
                    .unwrap_or_default();
                RawLayout {
                    style: string_at(l, "style"),
                    elements,
                }
            })
            .unwrap_or_default();

        let shapes = root
            .get("shapes")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(RawShape::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: string_at(root, "name"),
            template: string_at(root, "template"),
            palette,
            typography,
            font: string_at(root, "font"),
            layout,
            content: object_at(root, "content").map(Content::from).unwrap_or_default(),
            shapes,
            safe_margin: number_at(root, "safeMargin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_empty() {
        let s: DesignSuggestion = serde_json::from_str("null").unwrap();
        assert_eq!(s, DesignSuggestion::default());
    }

    #[test]
    fn test_non_object_is_empty() {
        for v in [json!(42), json!("hello"), json!([1, 2, 3]), json!(true)] {
            assert_eq!(DesignSuggestion::from(v), DesignSuggestion::default());
        }
    }

    #[test]
    fn test_mistyped_fields_are_absent() {
        let s = DesignSuggestion::from(json!({
            "template": 7,
            "palette": {"primary": 123, "text": ["#fff"], "background": "#000"},
            "layout": {"elements": {"name": "big", "contacts": {"position": 5, "size": "small"}}},
            "shapes": [1, {"type": "band", "opacity": "high"}],
            "safeMargin": "wide"
        }));
        assert_eq!(s.template, None);
        assert_eq!(s.palette.primary, None);
        assert_eq!(s.palette.text, None);
        assert_eq!(s.palette.background.as_deref(), Some("#000"));
        assert_eq!(s.layout.elements.name, None);
        let contacts = s.layout.elements.contacts.unwrap();
        assert_eq!(contacts.position, None);
        assert_eq!(contacts.size.as_deref(), Some("small"));
        assert_eq!(s.shapes.len(), 1);
        assert_eq!(s.shapes[0].kind.as_deref(), Some("band"));
        assert_eq!(s.shapes[0].opacity, None);
        assert_eq!(s.safe_margin, None);
    }

    #[test]
    fn test_unknown_elements_ignored() {
        let s = DesignSuggestion::from(json!({
            "layout": {"elements": {"logo": {"position": "top left"}, "qr": {"enabled": false}}}
        }));
        assert_eq!(s.layout.elements, RawElements::default());
    }

    #[test]
    fn test_serialize_camel_case() {
        let s = DesignSuggestion::from(json!({
            "layout": {"elements": {"name": {"position": "top left", "offsetX": 8}}},
            "shapes": [{"type": "arc", "sizePx": 200}]
        }));
        let out = serde_json::to_value(&s).unwrap();
        assert_eq!(out["layout"]["elements"]["name"]["offsetX"], json!(8.0));
        assert_eq!(out["shapes"][0]["type"], json!("arc"));
        assert_eq!(out["shapes"][0]["sizePx"], json!(200.0));
    }

    #[test]
    fn test_contact_lines_skip_blank() {
        let content = Content {
            phone: Some("555-0100".into()),
            email: Some("  ".into()),
            website: Some("nova.dev".into()),
            ..Default::default()
        };
        assert_eq!(content.contact_lines(), vec!["555-0100", "nova.dev"]);
    }
}
