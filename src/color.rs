//! # Color and Contrast
//!
//! Hex color parsing, WCAG relative luminance, contrast ratios, and the
//! readable-text-color resolver used by normalization and card layout.
//!
//! ## Formula
//!
//! ```text
//! c   = channel / 255
//! lin = c / 12.92                     if c <= 0.03928
//!     = ((c + 0.055) / 1.055) ^ 2.4   otherwise
//! L   = 0.2126 R + 0.7152 G + 0.0722 B
//! ratio = (max(L1, L2) + 0.05) / (min(L1, L2) + 0.05)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG "AA normal text" threshold.
pub const AA_NORMAL: f64 = 4.5;

/// Dark fallback text color.
pub const DARK_TEXT: &str = "#111111";

/// Light fallback text color.
pub const LIGHT_TEXT: &str = "#ffffff";

/// Default primary brand color when none is supplied.
pub const DEFAULT_PRIMARY: &str = "#3b82f6";

/// Default secondary brand color when none is supplied.
pub const DEFAULT_SECONDARY: &str = "#1e40af";

/// A validated `#RGB` or `#RRGGBB` color.
///
/// The original spelling (case, short form) is preserved for display so
/// accepted colors round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex {
    text: String,
    rgb: [u8; 3],
}

impl Hex {
    /// Parse a hex color. Surrounding whitespace is ignored; anything other
    /// than `#` followed by exactly 3 or 6 hex digits is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        let digits = text.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, c) in out.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16)? as u8;
                    *slot = v * 16 + v;
                }
                out
            }
            6 => {
                let n = u32::from_str_radix(digits, 16).ok()?;
                [(n >> 16) as u8, (n >> 8) as u8, n as u8]
            }
            _ => return None,
        };
        Some(Self {
            text: text.to_string(),
            rgb,
        })
    }

    /// Parse a compile-time constant known to be valid.
    pub(crate) fn constant(input: &'static str) -> Self {
        match Self::parse(input) {
            Some(hex) => hex,
            None => unreachable!("invalid color constant {input}"),
        }
    }

    /// The `#111111` fallback.
    pub fn dark() -> Self {
        Self::constant(DARK_TEXT)
    }

    /// The `#ffffff` fallback.
    pub fn light() -> Self {
        Self::constant(LIGHT_TEXT)
    }

    /// Red, green, blue channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// The color as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Relative luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.rgb.map(|c| linearize(f64::from(c) / 255.0));
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Hex {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hex::parse(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<Hex> for String {
    fn from(hex: Hex) -> Self {
        hex.text
    }
}

/// sRGB channel linearization.
#[inline]
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a hex string, `None` when the string is not a color.
pub fn luminance(hex: &str) -> Option<f64> {
    Hex::parse(hex).map(|h| h.luminance())
}

/// WCAG contrast ratio between two colors. Symmetric, in `[1, 21]`.
pub fn contrast_ratio(a: &Hex, b: &Hex) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Pick dark or light text for a background using a 0.5 luminance cut.
///
/// Used when a suggestion carries no usable text color at all.
pub fn pick_contrasting_text_color(bg: &Hex) -> Hex {
    if bg.luminance() > 0.5 {
        Hex::dark()
    } else {
        Hex::light()
    }
}

/// Inputs to [`ensure_readable_text_color`].
#[derive(Debug, Clone, Default)]
pub struct ReadableTextRequest {
    /// Solid background, if there is one.
    pub bg: Option<Hex>,
    /// Gradient start (used when there is no solid background).
    pub primary: Option<Hex>,
    /// Gradient end (used when there is no solid background).
    pub secondary: Option<Hex>,
    /// Text color the design asked for.
    pub proposed: Option<Hex>,
}

/// Return a text color that reads against the background.
///
/// With a solid background the proposed color is kept when it reaches 4.5:1,
/// otherwise the better of `#111111` / `#ffffff` is returned. Without one,
/// the worst case over both gradient endpoints is what must reach 4.5:1, and
/// the fallback maximizes that worst case.
pub fn ensure_readable_text_color(req: &ReadableTextRequest) -> Hex {
    let dark = Hex::dark();
    let light = Hex::light();

    if let Some(bg) = &req.bg {
        if let Some(proposed) = &req.proposed {
            if contrast_ratio(proposed, bg) >= AA_NORMAL {
                return proposed.clone();
            }
        }
        return if contrast_ratio(&dark, bg) >= contrast_ratio(&light, bg) {
            dark
        } else {
            light
        };
    }

    let a = req
        .primary
        .clone()
        .unwrap_or_else(|| Hex::constant(DEFAULT_PRIMARY));
    let b = req
        .secondary
        .clone()
        .unwrap_or_else(|| Hex::constant(DEFAULT_SECONDARY));
    let worst = |c: &Hex| contrast_ratio(c, &a).min(contrast_ratio(c, &b));

    if let Some(proposed) = &req.proposed {
        if worst(proposed) >= AA_NORMAL {
            return proposed.clone();
        }
    }
    if worst(&dark) >= worst(&light) {
        dark
    } else {
        light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Hex {
        Hex::parse(s).unwrap()
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(hex("#fff").rgb(), [255, 255, 255]);
        assert_eq!(hex("#3b82f6").rgb(), [0x3b, 0x82, 0xf6]);
        assert_eq!(hex("  #ABC ").as_str(), "#ABC");
        assert_eq!(hex("#ABC").rgb(), [0xaa, 0xbb, 0xcc]);
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["", "#", "fff", "#ff", "#ffff", "#fffffff", "#ggg", "red", "#12345g", "rgb(0,0,0)"] {
            assert!(Hex::parse(bad).is_none(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_luminance_extremes() {
        assert!((luminance("#ffffff").unwrap() - 1.0).abs() < 0.001);
        assert!(luminance("#000000").unwrap().abs() < 0.001);
        assert!(luminance("nope").is_none());
    }

    #[test]
    fn test_contrast_black_white() {
        let r = contrast_ratio(&hex("#ffffff"), &hex("#000000"));
        assert!((r - 21.0).abs() < 0.05);
    }

    #[test]
    fn test_contrast_symmetric() {
        let a = hex("#3b82f6");
        let b = hex("#f59e0b");
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        assert_eq!(contrast_ratio(&a, &a), 1.0);
    }

    #[test]
    fn test_pick_contrasting() {
        assert_eq!(pick_contrasting_text_color(&hex("#ffffff")).as_str(), DARK_TEXT);
        assert_eq!(pick_contrasting_text_color(&hex("#0f172a")).as_str(), LIGHT_TEXT);
        // #3b82f6 sits below 0.5 luminance
        assert_eq!(pick_contrasting_text_color(&hex("#3b82f6")).as_str(), LIGHT_TEXT);
    }

    #[test]
    fn test_solid_keeps_good_proposal() {
        let out = ensure_readable_text_color(&ReadableTextRequest {
            bg: Some(hex("#ffffff")),
            proposed: Some(hex("#1F2937")),
            ..Default::default()
        });
        assert_eq!(out.as_str(), "#1F2937");
    }

    #[test]
    fn test_solid_rejects_weak_proposal() {
        let out = ensure_readable_text_color(&ReadableTextRequest {
            bg: Some(hex("#ffffff")),
            proposed: Some(hex("#eeeeee")),
            ..Default::default()
        });
        assert_eq!(out.as_str(), DARK_TEXT);
    }

    #[test]
    fn test_gradient_uses_worst_endpoint() {
        // White passes against the dark end but not against light yellow
        let out = ensure_readable_text_color(&ReadableTextRequest {
            bg: None,
            primary: Some(hex("#fde047")),
            secondary: Some(hex("#1e3a8a")),
            proposed: Some(hex("#ffffff")),
        });
        assert_ne!(out.as_str(), "#ffffff");
        assert!(out.as_str() == DARK_TEXT || out.as_str() == LIGHT_TEXT);
    }

    #[test]
    fn test_gradient_defaults() {
        let out = ensure_readable_text_color(&ReadableTextRequest::default());
        // Default blue gradient is dark enough for white text
        assert_eq!(out.as_str(), LIGHT_TEXT);
    }

    #[test]
    fn test_serde_roundtrip_preserves_spelling() {
        let h: Hex = serde_json::from_str("\"#AbC\"").unwrap();
        assert_eq!(serde_json::to_string(&h).unwrap(), "\"#AbC\"");
        assert!(serde_json::from_str::<Hex>("\"blue\"").is_err());
    }
}
