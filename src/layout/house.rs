//! Built-in house layouts and the tidy reflow.
//!
//! House layouts are positions only: they ignore the suggestion's labels
//! and put the four blocks on a fixed 24px-inset grid.

use serde::{Deserialize, Serialize};

use super::{Alignment, BlockKind, Canvas, FontSizes, Point, PositionMap};

/// Inset used by house layouts.
pub const HOUSE_PADDING: f64 = 24.0;

/// Opinionated layouts offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HouseLayout {
    /// Company top-left, name and title below, contacts bottom-left.
    LeftGrid,
    /// Identity centered, contacts bottom-center.
    Centered,
    /// Company top-left, name and title center-left.
    SplitBanner,
}

impl HouseLayout {
    pub const ALL: [HouseLayout; 3] = [Self::LeftGrid, Self::Centered, Self::SplitBanner];

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "left-grid" => Some(Self::LeftGrid),
            "centered" => Some(Self::Centered),
            "split-banner" => Some(Self::SplitBanner),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftGrid => "left-grid",
            Self::Centered => "centered",
            Self::SplitBanner => "split-banner",
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self {
            Self::Centered => Alignment::Center,
            Self::LeftGrid | Self::SplitBanner => Alignment::Left,
        }
    }

    pub fn positions(&self, canvas: Canvas) -> PositionMap {
        let p = HOUSE_PADDING;
        let h = canvas.height;
        match self {
            Self::LeftGrid => column(p, [48.0, 80.0, 110.0, h - 90.0]),
            Self::Centered => {
                let cx = p.max((canvas.width / 2.0).round() - 110.0);
                column(cx, [56.0, 92.0, 122.0, h - 90.0])
            }
            Self::SplitBanner => {
                let center_left = p.max((canvas.width / 2.0).round() - 140.0);
                let mut out = column(p, [48.0, 0.0, 0.0, h - 90.0]);
                out.insert(BlockKind::Name, Point { x: center_left, y: 96.0 });
                out.insert(BlockKind::Title, Point { x: center_left, y: 126.0 });
                out
            }
        }
    }
}

/// Four blocks on one x, with y given in company, name, title, contacts order.
fn column(x: f64, ys: [f64; 4]) -> PositionMap {
    BlockKind::ALL
        .into_iter()
        .zip(ys)
        .map(|(kind, y)| (kind, Point { x, y }))
        .collect()
}

/// Reflow every block into one clean column for the given alignment.
pub fn tidy(canvas: Canvas, align: Alignment) -> PositionMap {
    let p = HOUSE_PADDING;
    let h = canvas.height;
    match align {
        Alignment::Left => column(p, [48.0, 80.0, 110.0, h - 90.0]),
        Alignment::Center => {
            let x = p.max((canvas.width / 2.0).round() - 110.0);
            column(x, [56.0, 92.0, 122.0, h - 90.0])
        }
        Alignment::Right => {
            let x = p.max(canvas.width - 220.0);
            column(x, [48.0, 80.0, 110.0, h - 90.0])
        }
    }
}

/// Sizes after a tidy: name at least 22, then the usual hierarchy.
pub fn tidy_sizes(sizes: FontSizes) -> FontSizes {
    let name = sizes.name.max(22);
    let title = sizes.title.max(12).min(name - 2);
    let company = sizes.company.max(11).min(title - 1);
    FontSizes { name, title, company }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_left_grid() {
        let pos = HouseLayout::LeftGrid.positions(Canvas::default());
        assert_eq!(pos[&BlockKind::Company], Point { x: 24.0, y: 48.0 });
        assert_eq!(pos[&BlockKind::Name], Point { x: 24.0, y: 80.0 });
        assert_eq!(pos[&BlockKind::Title], Point { x: 24.0, y: 110.0 });
        assert_eq!(pos[&BlockKind::Contacts], Point { x: 24.0, y: 190.0 });
    }

    #[test]
    fn test_centered_and_split() {
        let pos = HouseLayout::Centered.positions(Canvas::default());
        assert_eq!(pos[&BlockKind::Name], Point { x: 140.0, y: 92.0 });
        let pos = HouseLayout::SplitBanner.positions(Canvas::default());
        assert_eq!(pos[&BlockKind::Name], Point { x: 110.0, y: 96.0 });
        assert_eq!(pos[&BlockKind::Company], Point { x: 24.0, y: 48.0 });
    }

    #[test]
    fn test_narrow_canvas_keeps_padding() {
        let pos = HouseLayout::Centered.positions(Canvas::new(120.0, 200.0));
        assert!(pos.values().all(|p| p.x == 24.0));
    }

    #[test]
    fn test_tidy_right() {
        let pos = tidy(Canvas::default(), Alignment::Right);
        assert!(pos.values().all(|p| p.x == 280.0));
        assert_eq!(pos[&BlockKind::Contacts].y, 190.0);
    }

    #[test]
    fn test_tidy_sizes_keep_hierarchy() {
        let s = tidy_sizes(FontSizes { name: 18, title: 16, company: 14 });
        assert_eq!(s, FontSizes { name: 22, title: 16, company: 14 });
        let s = tidy_sizes(FontSizes { name: 18, title: 12, company: 12 });
        assert_eq!(s, FontSizes { name: 22, title: 12, company: 11 });
    }

    #[test]
    fn test_names_roundtrip() {
        for layout in HouseLayout::ALL {
            assert_eq!(HouseLayout::by_name(layout.name()), Some(layout));
        }
    }
}
