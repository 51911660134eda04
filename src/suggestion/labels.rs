//! Position, size and template vocabularies.
//!
//! Free-text labels are matched case-insensitively by substring, which is
//! what AI-produced labels ("Top-Left", "bottom  right", "x-large") need.
//! Substring matching is loose: "topless" parses as a top
//! placement. Each parser documents its fallback.

use serde::{Serialize, Serializer};
use std::fmt;

/// Vertical zone of the 3x3 card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VZone {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Horizontal zone of the 3x3 card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HZone {
    Left,
    #[default]
    Center,
    Right,
}

/// One of the nine canvas zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub v: VZone,
    pub h: HZone,
}

impl Position {
    pub const TOP_LEFT: Position = Position::new(VZone::Top, HZone::Left);
    pub const CENTER_LEFT: Position = Position::new(VZone::Center, HZone::Left);
    pub const BOTTOM_LEFT: Position = Position::new(VZone::Bottom, HZone::Left);

    pub const fn new(v: VZone, h: HZone) -> Self {
        Self { v, h }
    }

    /// Parse a free-text label.
    ///
    /// `top` wins over `bottom`, `left` wins over `right`; a missing axis
    /// keyword (or an unrecognized label) falls back to the center zone.
    pub fn parse(label: &str) -> Self {
        let l = label.to_lowercase();
        let v = if l.contains("top") {
            VZone::Top
        } else if l.contains("bottom") {
            VZone::Bottom
        } else {
            VZone::Center
        };
        let h = if l.contains("left") {
            HZone::Left
        } else if l.contains("right") {
            HZone::Right
        } else {
            HZone::Center
        };
        Self { v, h }
    }

    /// Canonical label from the nine-value vocabulary.
    pub fn label(&self) -> &'static str {
        match (self.v, self.h) {
            (VZone::Top, HZone::Left) => "top left",
            (VZone::Top, HZone::Center) => "top center",
            (VZone::Top, HZone::Right) => "top right",
            (VZone::Center, HZone::Left) => "center left",
            (VZone::Center, HZone::Center) => "center",
            (VZone::Center, HZone::Right) => "center right",
            (VZone::Bottom, HZone::Left) => "bottom left",
            (VZone::Bottom, HZone::Center) => "bottom center",
            (VZone::Bottom, HZone::Right) => "bottom right",
        }
    }

    /// All nine positions, row by row.
    pub fn all() -> [Position; 9] {
        let mut out = [Position::default(); 9];
        let rows = [VZone::Top, VZone::Center, VZone::Bottom];
        let cols = [HZone::Left, HZone::Center, HZone::Right];
        for (i, v) in rows.into_iter().enumerate() {
            for (j, h) in cols.into_iter().enumerate() {
                out[i * 3 + j] = Position::new(v, h);
            }
        }
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Font size keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKeyword {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizeKeyword {
    /// Parse a size label. Returns `None` unless the label contains one of
    /// `small`, `medium`, `large`, `xlarge` (`x-large` counts as xlarge).
    pub fn parse(label: &str) -> Option<Self> {
        let l = label.to_lowercase();
        if l.contains("xlarge") || l.contains("x-large") {
            Some(Self::XLarge)
        } else if l.contains("large") {
            Some(Self::Large)
        } else if l.contains("medium") {
            Some(Self::Medium)
        } else if l.contains("small") {
            Some(Self::Small)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}

/// Known card template tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateTag {
    Modern,
    Classic,
    Creative,
    Minimal,
    Corporate,
    Tech,
}

impl TemplateTag {
    pub const ALL: [TemplateTag; 6] = [
        Self::Modern,
        Self::Classic,
        Self::Creative,
        Self::Minimal,
        Self::Corporate,
        Self::Tech,
    ];

    /// Exact (trimmed, case-insensitive) match; unknown tags are `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        let t = tag.trim().to_lowercase();
        Self::ALL.into_iter().find(|k| k.as_str() == t)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Creative => "creative",
            Self::Minimal => "minimal",
            Self::Corporate => "corporate",
            Self::Tech => "tech",
        }
    }
}
