//! Pointer interaction state machine for the timeline.
//!
//! A bar can be moved, one of its edges resized, or its row dragged to a new
//! position. Moves and resizes follow the raw pointer while active and snap to
//! whole grid columns only when the pointer is released.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use super::grid::Granularity;

/// Net pointer travel below which a bar press counts as a click.
pub const JITTER_THRESHOLD_PX: f32 = 5.0;

/// Which end of a bar a resize handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// A task's resolved dates at the moment the pointer went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSnapshot {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// What the host should do in response to a timeline gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineAction {
    OpenEditor(Uuid),
    Reschedule {
        task_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    },
    Reorder {
        dragged: Uuid,
        target: Uuid,
    },
    AddTask,
}

/// Global pointer tracking held for the duration of a bar move or resize.
///
/// Dropping the guard releases the capture, so every way out of an active
/// state (commit, discarded resize, cancel, controller dropped) gives it back.
#[derive(Debug)]
pub struct PointerCapture {
    live: Rc<Cell<usize>>,
}

impl PointerCapture {
    fn acquire(live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        debug!(active = live.get(), "pointer capture acquired");
        Self {
            live: Rc::clone(live),
        }
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.live.set(self.live.get().saturating_sub(1));
        debug!(active = self.live.get(), "pointer capture released");
    }
}

#[derive(Debug)]
pub enum DragState {
    Idle,
    DraggingBar {
        task_id: Uuid,
        origin_x: f32,
        current_x: f32,
        snapshot: DragSnapshot,
        capture: PointerCapture,
    },
    Resizing {
        task_id: Uuid,
        edge: Edge,
        origin_x: f32,
        current_x: f32,
        snapshot: DragSnapshot,
        capture: PointerCapture,
    },
    DraggingRow {
        task_id: Uuid,
    },
}

/// Pixel adjustment applied to a bar while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiveOffset {
    pub left: f32,
    pub width: f32,
}

/// Owns the timeline's drag state and turns finished gestures into actions.
#[derive(Debug)]
pub struct DragController {
    state: DragState,
    granularity: Granularity,
    unit_width: f32,
    captures: Rc<Cell<usize>>,
}

impl DragController {
    pub fn new(granularity: Granularity, unit_width: f32) -> Self {
        Self {
            state: DragState::Idle,
            granularity,
            unit_width,
            captures: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Update the grid scale used to snap deltas on release.
    pub fn set_scale(&mut self, granularity: Granularity, unit_width: f32) {
        self.granularity = granularity;
        self.unit_width = unit_width;
    }

    /// Number of pointer captures currently held (0 or 1).
    pub fn active_captures(&self) -> usize {
        self.captures.get()
    }

    /// True while a bar move or resize is in progress.
    pub fn is_pointer_drag(&self) -> bool {
        matches!(
            self.state,
            DragState::DraggingBar { .. } | DragState::Resizing { .. }
        )
    }

    /// Task whose bar is being moved or resized.
    pub fn active_task(&self) -> Option<Uuid> {
        match &self.state {
            DragState::DraggingBar { task_id, .. } | DragState::Resizing { task_id, .. } => {
                Some(*task_id)
            }
            _ => None,
        }
    }

    /// Task whose row is being dragged.
    pub fn dragged_row(&self) -> Option<Uuid> {
        match &self.state {
            DragState::DraggingRow { task_id } => Some(*task_id),
            _ => None,
        }
    }

    /// Pointer down on a bar body. Ignored unless idle.
    pub fn press_bar(&mut self, task_id: Uuid, snapshot: DragSnapshot, x: f32) -> bool {
        if !matches!(self.state, DragState::Idle) {
            return false;
        }
        debug!(%task_id, x, "bar drag started");
        self.state = DragState::DraggingBar {
            task_id,
            origin_x: x,
            current_x: x,
            snapshot,
            capture: PointerCapture::acquire(&self.captures),
        };
        true
    }

    /// Pointer down on a resize handle. Ignored unless idle.
    pub fn press_edge(&mut self, task_id: Uuid, edge: Edge, snapshot: DragSnapshot, x: f32) -> bool {
        if !matches!(self.state, DragState::Idle) {
            return false;
        }
        debug!(%task_id, ?edge, x, "resize started");
        self.state = DragState::Resizing {
            task_id,
            edge,
            origin_x: x,
            current_x: x,
            snapshot,
            capture: PointerCapture::acquire(&self.captures),
        };
        true
    }

    /// Last pointer x seen during a move or resize.
    pub fn pointer_x(&self) -> Option<f32> {
        match &self.state {
            DragState::DraggingBar { current_x, .. } | DragState::Resizing { current_x, .. } => {
                Some(*current_x)
            }
            _ => None,
        }
    }

    pub fn pointer_moved(&mut self, x: f32) {
        match &mut self.state {
            DragState::DraggingBar { current_x, .. } | DragState::Resizing { current_x, .. } => {
                *current_x = x;
            }
            _ => {}
        }
    }

    /// Unsnapped offset to draw `task_id`'s bar with, if it is being dragged.
    pub fn live_offset(&self, task_id: Uuid) -> Option<LiveOffset> {
        match &self.state {
            DragState::DraggingBar {
                task_id: id,
                origin_x,
                current_x,
                ..
            } if *id == task_id => Some(LiveOffset {
                left: current_x - origin_x,
                width: 0.0,
            }),
            DragState::Resizing {
                task_id: id,
                edge,
                origin_x,
                current_x,
                ..
            } if *id == task_id => {
                let delta = current_x - origin_x;
                Some(match edge {
                    Edge::Start => LiveOffset {
                        left: delta,
                        width: -delta,
                    },
                    Edge::End => LiveOffset {
                        left: 0.0,
                        width: delta,
                    },
                })
            }
            _ => None,
        }
    }

    /// Pointer up. Snaps the travel to whole columns and returns the resulting
    /// action, if any. The controller is idle afterwards.
    pub fn release(&mut self, x: f32) -> Option<TimelineAction> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::DraggingBar {
                task_id,
                origin_x,
                snapshot,
                ..
            } => {
                let delta = x - origin_x;
                if delta.abs() < JITTER_THRESHOLD_PX {
                    debug!(%task_id, "bar clicked");
                    return Some(TimelineAction::OpenEditor(task_id));
                }
                let days = self.snapped_days(delta);
                if days == 0 {
                    return None;
                }
                let shift = Duration::days(days);
                debug!(%task_id, days, "bar moved");
                Some(TimelineAction::Reschedule {
                    task_id,
                    start: snapshot.start + shift,
                    end: snapshot.end + shift,
                })
            }
            DragState::Resizing {
                task_id,
                edge,
                origin_x,
                snapshot,
                ..
            } => {
                let days = self.snapped_days(x - origin_x);
                if days == 0 {
                    return None;
                }
                let shift = Duration::days(days);
                let (start, end) = match edge {
                    Edge::Start => (snapshot.start + shift, snapshot.end),
                    Edge::End => (snapshot.start, snapshot.end + shift),
                };
                if start > end {
                    debug!(%task_id, ?edge, days, "resize would invert range, discarded");
                    return None;
                }
                debug!(%task_id, ?edge, days, "bar resized");
                Some(TimelineAction::Reschedule { task_id, start, end })
            }
            other @ DragState::DraggingRow { .. } => {
                self.state = other;
                None
            }
            DragState::Idle => None,
        }
    }

    /// Abort a move or resize without changing anything.
    pub fn cancel(&mut self) {
        if !matches!(self.state, DragState::Idle) {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Native drag start on a row. Refused while a bar is being moved or resized.
    pub fn begin_row_drag(&mut self, task_id: Uuid) -> bool {
        if self.is_pointer_drag() {
            return false;
        }
        debug!(%task_id, "row drag started");
        self.state = DragState::DraggingRow { task_id };
        true
    }

    /// Drop the dragged row onto `target`'s row.
    pub fn drop_row(&mut self, target: Uuid) -> Option<TimelineAction> {
        let DragState::DraggingRow { task_id } = &self.state else {
            return None;
        };
        let task_id = *task_id;
        self.state = DragState::Idle;
        if task_id == target {
            return None;
        }
        debug!(dragged = %task_id, %target, "row dropped");
        Some(TimelineAction::Reorder {
            dragged: task_id,
            target,
        })
    }

    /// Row drag ended somewhere that isn't a row.
    pub fn end_row_drag(&mut self) {
        if matches!(self.state, DragState::DraggingRow { .. }) {
            self.state = DragState::Idle;
        }
    }

    fn snapped_days(&self, delta_x: f32) -> i64 {
        if self.unit_width <= 0.0 {
            return 0;
        }
        let units = (delta_x / self.unit_width).round() as i64;
        units * self.granularity.days_per_unit()
    }
}
