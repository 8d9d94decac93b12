//! Pointer gesture interpretation
//!
//! Turns raw pointer down/move/up reports into semantic gesture events:
//! a press always produces a click, and only movement past the drag
//! threshold turns the press into a drag.
//!
//! ```text
//! Idle ──down──▶ Pending ──move > threshold──▶ Dragging
//!   ▲               │                              │
//!   └──────up───────┴──────────────up──────────────┘
//! ```

use crate::grid::CellId;

/// Default minimum pointer travel (per axis, in screen pixels) before a press becomes a drag
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

/// A pointer report: the cell under the pointer plus absolute screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub cell: CellId,
    pub x: f64,
    pub y: f64,
}

impl PointerInput {
    pub fn new(cell: CellId, x: f64, y: f64) -> Self {
        Self { cell, x, y }
    }
}

/// Semantic events emitted by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Button pressed on a cell
    Click(CellId),
    /// Press turned into a drag, carrying the anchor cell
    DragStart(CellId),
    /// Pointer entered a new cell while dragging
    DragUpdate(CellId),
    /// Button released after a drag, carrying the anchor cell
    DragEnd(CellId),
    /// A drag left open by a lost release was discarded
    DragCancel,
}

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No button held
    #[default]
    Idle,
    /// Button held, pointer has not moved past the threshold
    Pending,
    /// Pointer moved past the threshold while held
    Dragging,
}

/// Pointer gesture state machine
#[derive(Debug, Clone)]
pub struct GestureTracker {
    threshold: f64,
    phase: GesturePhase,
    /// Screen position of the press that opened the current session
    press_position: Option<(f64, f64)>,
    /// Cell pressed on; set for the whole session
    anchor: Option<CellId>,
    /// Last cell reported during the drag
    drag_current: Option<CellId>,
    /// Anchor of the most recently completed drag
    drag_committed: Option<CellId>,
    /// Last clicked cell, cleared when the same cell is pressed again
    clicked: Option<CellId>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl GestureTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            phase: GesturePhase::Idle,
            press_position: None,
            anchor: None,
            drag_current: None,
            drag_committed: None,
            clicked: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    pub fn press_position(&self) -> Option<(f64, f64)> {
        self.press_position
    }

    pub fn anchor(&self) -> Option<CellId> {
        self.anchor
    }

    pub fn drag_current(&self) -> Option<CellId> {
        self.drag_current
    }

    pub fn drag_committed(&self) -> Option<CellId> {
        self.drag_committed
    }

    pub fn clicked(&self) -> Option<CellId> {
        self.clicked
    }

    /// Handle a button press
    pub fn pointer_down(&mut self, input: PointerInput) -> Vec<GestureEvent> {
        let mut events = Vec::with_capacity(2);

        match self.phase {
            GesturePhase::Dragging => {
                tracing::debug!(target: "gesture", anchor = ?self.anchor, "closing stale drag");
                events.push(GestureEvent::DragCancel);
            }
            GesturePhase::Pending => {
                tracing::trace!(target: "gesture", "discarding stale press");
            }
            GesturePhase::Idle => {}
        }
        self.end_session();

        self.phase = GesturePhase::Pending;
        self.press_position = Some((input.x, input.y));
        self.anchor = Some(input.cell);
        self.clicked = if self.clicked == Some(input.cell) {
            None
        } else {
            Some(input.cell)
        };

        tracing::trace!(target: "gesture", cell = %input.cell, x = input.x, y = input.y, "press");
        events.push(GestureEvent::Click(input.cell));
        events
    }

    /// Handle pointer movement (reported whether or not a button is held)
    pub fn pointer_move(&mut self, input: PointerInput) -> Vec<GestureEvent> {
        match self.phase {
            GesturePhase::Idle => Vec::new(),
            GesturePhase::Pending => {
                let (Some((px, py)), Some(anchor)) = (self.press_position, self.anchor) else {
                    return Vec::new();
                };
                let dx = (input.x - px).abs();
                let dy = (input.y - py).abs();
                if dx <= self.threshold && dy <= self.threshold {
                    return Vec::new();
                }

                tracing::debug!(target: "gesture", %anchor, dx, dy, "drag threshold exceeded");
                self.phase = GesturePhase::Dragging;
                self.drag_current = Some(input.cell);
                vec![
                    GestureEvent::DragStart(anchor),
                    GestureEvent::DragUpdate(input.cell),
                ]
            }
            GesturePhase::Dragging => self.hover(input.cell).into_iter().collect(),
        }
    }

    /// Handle a button release
    pub fn pointer_up(&mut self, cell: CellId) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        match self.phase {
            GesturePhase::Idle => {
                tracing::trace!(target: "gesture", %cell, "release without press ignored");
                return events;
            }
            GesturePhase::Pending => {}
            GesturePhase::Dragging => {
                events.extend(self.hover(cell));
                if let Some(anchor) = self.anchor {
                    tracing::debug!(target: "gesture", %anchor, end = %cell, "drag finished");
                    self.drag_committed = Some(anchor);
                    events.push(GestureEvent::DragEnd(anchor));
                }
            }
        }

        self.end_session();
        events
    }

    /// Drop any in-progress gesture and the click memory
    pub fn reset(&mut self) {
        self.end_session();
        self.drag_committed = None;
        self.clicked = None;
    }

    fn hover(&mut self, cell: CellId) -> Option<GestureEvent> {
        if self.drag_current == Some(cell) {
            return None;
        }
        self.drag_current = Some(cell);
        Some(GestureEvent::DragUpdate(cell))
    }

    fn end_session(&mut self) {
        self.phase = GesturePhase::Idle;
        self.press_position = None;
        self.anchor = None;
        self.drag_current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize, x: f64, y: f64) -> PointerInput {
        PointerInput::new(CellId::new(row, col), x, y)
    }

    #[test]
    fn test_press_emits_click_and_opens_session() {
        let mut tracker = GestureTracker::default();
        let events = tracker.pointer_down(at(1, 1, 100.0, 100.0));

        assert_eq!(events, vec![GestureEvent::Click(CellId::new(1, 1))]);
        assert_eq!(tracker.phase(), GesturePhase::Pending);
        assert_eq!(tracker.anchor(), Some(CellId::new(1, 1)));
        assert_eq!(tracker.press_position(), Some((100.0, 100.0)));
    }

    #[test]
    fn test_small_movement_stays_pending() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(at(1, 1, 100.0, 100.0));

        assert!(tracker.pointer_move(at(1, 1, 103.0, 100.0)).is_empty());
        assert!(tracker.pointer_move(at(1, 2, 105.0, 95.0)).is_empty());
        assert_eq!(tracker.phase(), GesturePhase::Pending);

        let events = tracker.pointer_up(CellId::new(1, 1));
        assert!(events.is_empty());
        assert_eq!(tracker.phase(), GesturePhase::Idle);
        assert_eq!(tracker.anchor(), None);
        assert_eq!(tracker.press_position(), None);
    }

    #[test]
    fn test_threshold_on_either_axis_starts_drag() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(at(0, 0, 10.0, 10.0));
        let events = tracker.pointer_move(at(1, 0, 10.0, 15.5));

        assert_eq!(
            events,
            vec![
                GestureEvent::DragStart(CellId::new(0, 0)),
                GestureEvent::DragUpdate(CellId::new(1, 0)),
            ]
        );
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_drag_update_only_on_cell_change() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(at(0, 0, 0.0, 0.0));
        tracker.pointer_move(at(0, 1, 50.0, 0.0));

        assert!(tracker.pointer_move(at(0, 1, 60.0, 0.0)).is_empty());
        assert_eq!(
            tracker.pointer_move(at(1, 1, 60.0, 30.0)),
            vec![GestureEvent::DragUpdate(CellId::new(1, 1))]
        );
    }

    #[test]
    fn test_release_after_drag_emits_end() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(at(2, 1, 0.0, 0.0));
        tracker.pointer_move(at(1, 2, 50.0, 50.0));

        let events = tracker.pointer_up(CellId::new(1, 2));
        assert_eq!(events, vec![GestureEvent::DragEnd(CellId::new(2, 1))]);
        assert_eq!(tracker.drag_committed(), Some(CellId::new(2, 1)));
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_release_on_new_cell_reports_it_first() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(at(0, 0, 0.0, 0.0));
        tracker.pointer_move(at(0, 1, 50.0, 0.0));

        let events = tracker.pointer_up(CellId::new(3, 3));
        assert_eq!(
            events,
            vec![
                GestureEvent::DragUpdate(CellId::new(3, 3)),
                GestureEvent::DragEnd(CellId::new(0, 0)),
            ]
        );
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut tracker = GestureTracker::default();
        assert!(tracker.pointer_up(CellId::new(0, 0)).is_empty());
        assert!(tracker.pointer_move(at(0, 0, 99.0, 99.0)).is_empty());
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_stale_drag_is_cancelled_on_next_press() {
        let mut tracker = GestureTracker::default();
        tracker.pointer_down(at(0, 0, 0.0, 0.0));
        tracker.pointer_move(at(2, 2, 80.0, 80.0));
        // Release lost (e.g. pointer left the table)

        let events = tracker.pointer_down(at(4, 4, 200.0, 200.0));
        assert_eq!(
            events,
            vec![
                GestureEvent::DragCancel,
                GestureEvent::Click(CellId::new(4, 4))
            ]
        );
        assert_eq!(tracker.anchor(), Some(CellId::new(4, 4)));
        assert_eq!(tracker.drag_current(), None);
        assert_eq!(tracker.phase(), GesturePhase::Pending);
    }

    #[test]
    fn test_clicked_cell_toggles() {
        let mut tracker = GestureTracker::default();
        let cell = CellId::new(1, 1);

        tracker.pointer_down(PointerInput::new(cell, 0.0, 0.0));
        tracker.pointer_up(cell);
        assert_eq!(tracker.clicked(), Some(cell));

        tracker.pointer_down(PointerInput::new(cell, 0.0, 0.0));
        tracker.pointer_up(cell);
        assert_eq!(tracker.clicked(), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = GestureTracker::new(20.0);
        tracker.pointer_down(at(0, 0, 0.0, 0.0));
        assert!(tracker.pointer_move(at(0, 1, 15.0, 0.0)).is_empty());
        assert!(!tracker.pointer_move(at(0, 1, 21.0, 0.0)).is_empty());
    }
}
