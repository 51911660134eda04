//! # Design Suggestions
//!
//! The data a card design starts from, whether it came from an AI provider
//! or the built-in template catalog.
//!
//! ## Example
//!
//! ```
//! use cardgen::suggestion::{normalize, DesignSuggestion};
//!
//! let json = r##"{
//!     "template": "modern",
//!     "palette": {"primary": "#3b82f6", "text": "not-a-color"},
//!     "layout": {"elements": {"contacts": {"position": "top right"}}}
//! }"##;
//!
//! let raw: DesignSuggestion = serde_json::from_str(json).unwrap();
//! let normalized = normalize(&raw);
//! assert_eq!(normalized.elements.contacts.position.label(), "bottom left");
//! assert_eq!(normalized.palette.text.as_str(), "#ffffff");
//! ```

pub mod labels;
mod normalize;
mod schema;

pub use labels::{HZone, Position, SizeKeyword, TemplateTag, VZone};
pub use normalize::{
    normalize, DecorShape, ElementSpec, Elements, NormalizedSuggestion, Palette, ShapeKind,
    Typography,
};
pub use schema::{
    Content, DesignSuggestion, RawElement, RawElements, RawLayout, RawPalette, RawShape,
    RawTypography,
};
