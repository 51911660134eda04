//! Vertical collision resolution between text blocks.
//!
//! Blocks are stacked in y order with a minimum gap. Heights are estimates
//! derived from font size, since no text is measured here.

use super::{BlockKind, FontSizes, PositionMap};

/// Minimum vertical gap between consecutive blocks.
pub const SPACING: f64 = 6.0;

/// Estimated height of the multi-line contacts block.
pub const CONTACTS_HEIGHT: f64 = 56.0;

/// Distance from the bottom edge below which no block may start.
pub const BOTTOM_LIMIT: f64 = 10.0;

/// Estimated rendered height of a block.
pub fn block_height(kind: BlockKind, sizes: &FontSizes) -> f64 {
    let px = |v: u32| f64::from(v);
    match kind {
        BlockKind::Name => (px(sizes.name) * 1.25).round(),
        BlockKind::Title => (px(sizes.title) * 1.2).round(),
        BlockKind::Company => (px(sizes.company) * 1.15).round(),
        BlockKind::Contacts => CONTACTS_HEIGHT,
    }
}

/// Push overlapping blocks down so every block starts at least
/// [`SPACING`] below the end of the one above it, then clamp each `y` to
/// `canvas_height - 10`.
///
/// Blocks with equal `y` keep their [`BlockKind`] order (company, name,
/// title, contacts). `x` is never touched. Re-applying to the output is a
/// no-op.
pub fn resolve_overlaps(positions: &PositionMap, sizes: &FontSizes, canvas_height: f64) -> PositionMap {
    let mut items: Vec<(BlockKind, f64, f64)> = positions
        .iter()
        .map(|(kind, p)| (*kind, p.y, block_height(*kind, sizes)))
        .collect();
    // Stable: ties stay in key order
    items.sort_by(|a, b| a.1.total_cmp(&b.1));

    for i in 1..items.len() {
        let (_, prev_y, prev_h) = items[i - 1];
        let overlap = prev_y + prev_h + SPACING - items[i].1;
        if overlap > 0.0 {
            items[i].1 += overlap;
        }
    }

    let max_y = canvas_height - BOTTOM_LIMIT;
    let mut out = positions.clone();
    for (kind, y, _) in items {
        if let Some(p) = out.get_mut(&kind) {
            p.y = y.min(max_y);
        }
    }
    out
}
