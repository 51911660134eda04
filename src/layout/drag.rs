//! Drag interaction as a pure reducer.
//!
//! The UI feeds pointer events in order; [`apply_event`] returns the next
//! state. Nothing here knows about DOM events or rendering.

use serde::{Deserialize, Serialize};

use super::{BlockKind, Canvas, Point, PositionMap};

/// Default snapping grid in pixels.
pub const DEFAULT_GRID: f64 = 8.0;

/// Margin kept free at the right and bottom edges while dragging.
pub const DRAG_EDGE: f64 = 20.0;

/// Starting positions of a fresh card.
pub fn default_positions() -> PositionMap {
    [
        (BlockKind::Name, Point { x: 20.0, y: 30.0 }),
        (BlockKind::Title, Point { x: 20.0, y: 70.0 }),
        (BlockKind::Company, Point { x: 20.0, y: 100.0 }),
        (BlockKind::Contacts, Point { x: 20.0, y: 140.0 }),
    ]
    .into_iter()
    .collect()
}

/// A drag in progress: which block, where the pointer went down, and where
/// the block was at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveDrag {
    pub block: BlockKind,
    pub pointer: Point,
    pub origin: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    pub positions: PositionMap,
    pub canvas: Canvas,
    pub locked: bool,
    pub snap: bool,
    pub grid: f64,
    pub active: Option<ActiveDrag>,
}

impl DragState {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            positions: default_positions(),
            canvas,
            locked: false,
            snap: true,
            grid: DEFAULT_GRID,
            active: None,
        }
    }

    pub fn with_positions(mut self, positions: PositionMap) -> Self {
        self.positions.extend(positions);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DragEvent {
    /// Pointer pressed on a block at pointer coordinates `(x, y)`.
    Start { block: BlockKind, x: f64, y: f64 },
    /// Pointer moved to `(x, y)`.
    Move { x: f64, y: f64 },
    End,
    /// Restore default positions and drop any active drag.
    Reset,
    SetLocked { locked: bool },
    SetSnap { snap: bool },
}

fn snap_to(v: f64, grid: f64) -> f64 {
    if grid > 0.0 {
        (v / grid).round() * grid
    } else {
        v
    }
}

/// Advance the drag state by one event.
///
/// While locked, `Start` and `Move` are ignored. A move positions the block
/// at its origin plus the pointer delta, snapped when enabled, then clamped
/// to `[0, width - 20] x [0, height - 20]`.
pub fn apply_event(mut state: DragState, event: DragEvent) -> DragState {
    match event {
        DragEvent::Start { block, x, y } => {
            if state.locked {
                return state;
            }
            let origin = state.positions.get(&block).copied().unwrap_or_default();
            state.active = Some(ActiveDrag {
                block,
                pointer: Point { x, y },
                origin,
            });
        }
        DragEvent::Move { x, y } => {
            if state.locked {
                return state;
            }
            let Some(drag) = state.active else {
                return state;
            };
            let mut next_x = drag.origin.x + (x - drag.pointer.x);
            let mut next_y = drag.origin.y + (y - drag.pointer.y);
            if state.snap {
                next_x = snap_to(next_x, state.grid);
                next_y = snap_to(next_y, state.grid);
            }
            let max_x = (state.canvas.width - DRAG_EDGE).max(0.0);
            let max_y = (state.canvas.height - DRAG_EDGE).max(0.0);
            state.positions.insert(
                drag.block,
                Point {
                    x: next_x.min(max_x).max(0.0),
                    y: next_y.min(max_y).max(0.0),
                },
            );
        }
        DragEvent::End => state.active = None,
        DragEvent::Reset => {
            state.positions = default_positions();
            state.active = None;
        }
        DragEvent::SetLocked { locked } => {
            state.locked = locked;
            if locked {
                state.active = None;
            }
        }
        DragEvent::SetSnap { snap } => state.snap = snap,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: DragState, events: &[DragEvent]) -> DragState {
        events.iter().fold(state, |s, e| apply_event(s, *e))
    }

    #[test]
    fn test_drag_moves_by_delta_with_snap() {
        let s = run(
            DragState::new(Canvas::default()),
            &[
                DragEvent::Start { block: BlockKind::Name, x: 100.0, y: 100.0 },
                DragEvent::Move { x: 133.0, y: 111.0 },
            ],
        );
        // (20+33, 30+11) snapped to 8
        assert_eq!(s.positions[&BlockKind::Name], Point { x: 56.0, y: 40.0 });
        assert!(s.active.is_some());
    }

    #[test]
    fn test_drag_without_snap() {
        let mut s = DragState::new(Canvas::default());
        s.snap = false;
        let s = run(
            s,
            &[
                DragEvent::Start { block: BlockKind::Title, x: 0.0, y: 0.0 },
                DragEvent::Move { x: 3.0, y: 5.0 },
                DragEvent::End,
            ],
        );
        assert_eq!(s.positions[&BlockKind::Title], Point { x: 23.0, y: 75.0 });
        assert_eq!(s.active, None);
    }

    #[test]
    fn test_clamped_to_card() {
        let s = run(
            DragState::new(Canvas::default()),
            &[
                DragEvent::Start { block: BlockKind::Contacts, x: 0.0, y: 0.0 },
                DragEvent::Move { x: 9000.0, y: -9000.0 },
            ],
        );
        assert_eq!(s.positions[&BlockKind::Contacts], Point { x: 480.0, y: 0.0 });
    }

    #[test]
    fn test_locked_ignores_drags() {
        let s = run(
            DragState::new(Canvas::default()),
            &[
                DragEvent::SetLocked { locked: true },
                DragEvent::Start { block: BlockKind::Name, x: 0.0, y: 0.0 },
                DragEvent::Move { x: 50.0, y: 50.0 },
            ],
        );
        assert_eq!(s.positions, default_positions());
        assert_eq!(s.active, None);
    }

    #[test]
    fn test_move_without_start_is_noop() {
        let s = DragState::new(Canvas::default());
        assert_eq!(apply_event(s.clone(), DragEvent::Move { x: 10.0, y: 10.0 }), s);
    }

    #[test]
    fn test_reset() {
        let s = run(
            DragState::new(Canvas::default()),
            &[
                DragEvent::Start { block: BlockKind::Company, x: 0.0, y: 0.0 },
                DragEvent::Move { x: 64.0, y: 64.0 },
                DragEvent::Reset,
            ],
        );
        assert_eq!(s.positions, default_positions());
        assert_eq!(s.active, None);
    }
}
