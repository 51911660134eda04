//! Position-label to pixel mapping and keyword font sizes.
//!
//! ## Grid
//!
//! ```text
//!            left          center           right
//! top     (P, P)        (W/2-100, P)     (W-200-P, P)
//! center  (P, H/2-10)   (W/2-100, H/2-10) (W-200-P, H/2-10)
//! bottom  (P, H-56-P)   (W/2-100, H-56-P) (W-200-P, H-56-P)
//! ```
//!
//! `P` is an 18px inset; 200px approximates a text box width and 56px the
//! height of the multi-line contacts block.

use serde::Serialize;

use super::{BlockKind, Canvas, Point};
use crate::suggestion::{HZone, Position, SizeKeyword, VZone};

/// Inset from the canvas edges.
pub const PADDING: f64 = 18.0;

/// Assumed text box width used to anchor center and right zones.
pub const TEXT_BOX_WIDTH: f64 = 200.0;

/// Fixed contacts font size (multi-line body text).
pub const CONTACTS_FONT_PX: u32 = 12;

/// Map a grid zone to the origin of a text block.
pub fn position_to_coords(position: Position, canvas: Canvas) -> Point {
    let x = match position.h {
        HZone::Left => PADDING,
        HZone::Center => canvas.width / 2.0 - TEXT_BOX_WIDTH / 2.0,
        HZone::Right => canvas.width - TEXT_BOX_WIDTH - PADDING,
    };
    let y = match position.v {
        VZone::Top => PADDING,
        VZone::Center => canvas.height / 2.0 - 10.0,
        VZone::Bottom => canvas.height - super::collision::CONTACTS_HEIGHT - PADDING,
    };
    Point { x, y }
}

/// Keyword to pixel lookup per block kind.
///
/// Title and company have no xlarge entry and reuse their large size.
pub fn size_to_px(kind: BlockKind, size: SizeKeyword) -> u32 {
    match (kind, size) {
        (BlockKind::Name, SizeKeyword::Small) => 18,
        (BlockKind::Name, SizeKeyword::Medium) => 22,
        (BlockKind::Name, SizeKeyword::Large) => 28,
        (BlockKind::Name, SizeKeyword::XLarge) => 32,
        (BlockKind::Title, SizeKeyword::Small) => 12,
        (BlockKind::Title, SizeKeyword::Medium) => 14,
        (BlockKind::Title, SizeKeyword::Large | SizeKeyword::XLarge) => 16,
        (BlockKind::Company, SizeKeyword::Small) => 11,
        (BlockKind::Company, SizeKeyword::Medium) => 12,
        (BlockKind::Company, SizeKeyword::Large | SizeKeyword::XLarge) => 14,
        (BlockKind::Contacts, _) => CONTACTS_FONT_PX,
    }
}

/// Resolved font sizes for the three headline blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSizes {
    pub name: u32,
    pub title: u32,
    pub company: u32,
}

impl Default for FontSizes {
    /// The editor's starting sizes.
    fn default() -> Self {
        Self {
            name: 22,
            title: 14,
            company: 12,
        }
    }
}

impl FontSizes {
    /// Look up keyword sizes and enforce `name > title > company`.
    ///
    /// Title is capped at `name - 2` and company at `title - 1`, then floors
    /// of 18 / 12 / 11 apply.
    pub fn resolve(name: SizeKeyword, title: SizeKeyword, company: SizeKeyword) -> Self {
        let mut name_px = size_to_px(BlockKind::Name, name);
        let mut title_px = size_to_px(BlockKind::Title, title);
        let mut company_px = size_to_px(BlockKind::Company, company);

        title_px = title_px.min(name_px.saturating_sub(2));
        company_px = company_px.min(title_px.saturating_sub(1));

        name_px = name_px.max(18);
        title_px = title_px.max(12);
        company_px = company_px.max(11);

        Self {
            name: name_px,
            title: title_px,
            company: company_px,
        }
    }

    /// Font size for any block.
    pub fn of(&self, kind: BlockKind) -> u32 {
        match kind {
            BlockKind::Name => self.name,
            BlockKind::Title => self.title,
            BlockKind::Company => self.company,
            BlockKind::Contacts => CONTACTS_FONT_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: [SizeKeyword; 4] = [
        SizeKeyword::Small,
        SizeKeyword::Medium,
        SizeKeyword::Large,
        SizeKeyword::XLarge,
    ];

    #[test]
    fn test_grid_corners() {
        let canvas = Canvas::new(500.0, 280.0);
        assert_eq!(position_to_coords(Position::TOP_LEFT, canvas), Point { x: 18.0, y: 18.0 });
        assert_eq!(
            position_to_coords(Position::new(VZone::Bottom, HZone::Right), canvas),
            Point { x: 282.0, y: 206.0 }
        );
        assert_eq!(
            position_to_coords(Position::default(), canvas),
            Point { x: 150.0, y: 130.0 }
        );
    }

    #[test]
    fn test_size_table() {
        assert_eq!(size_to_px(BlockKind::Name, SizeKeyword::XLarge), 32);
        assert_eq!(size_to_px(BlockKind::Title, SizeKeyword::XLarge), 16);
        assert_eq!(size_to_px(BlockKind::Company, SizeKeyword::Small), 11);
        assert_eq!(size_to_px(BlockKind::Contacts, SizeKeyword::XLarge), 12);
    }

    #[test]
    fn test_hierarchy_all_keyword_combinations() {
        for n in KEYWORDS {
            for t in KEYWORDS {
                for c in KEYWORDS {
                    let s = FontSizes::resolve(n, t, c);
                    assert!(s.name >= s.title + 2, "{n:?} {t:?} {c:?} -> {s:?}");
                    assert!(s.title >= s.company + 1, "{n:?} {t:?} {c:?} -> {s:?}");
                    assert!(s.name >= 18 && s.title >= 12 && s.company >= 11);
                }
            }
        }
    }

    #[test]
    fn test_hierarchy_clamps_large_title() {
        let s = FontSizes::resolve(SizeKeyword::Small, SizeKeyword::Large, SizeKeyword::Large);
        assert_eq!(s, FontSizes { name: 18, title: 16, company: 14 });
        let s = FontSizes::resolve(SizeKeyword::Small, SizeKeyword::Small, SizeKeyword::Large);
        assert_eq!(s, FontSizes { name: 18, title: 12, company: 11 });
    }
}
