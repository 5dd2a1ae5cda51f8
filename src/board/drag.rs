use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::task::{Task, TaskPatch};

/// Drag-and-drop state: at most one task is held at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Holding(Task),
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Start holding `task`. Picking up while already holding replaces the
    /// held task; drags are never queued.
    pub fn pick_up(&mut self, task: Task) {
        self.state = DragState::Holding(task);
    }

    /// Abort the drag without any mutation.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn held(&self) -> Option<&Task> {
        match &self.state {
            DragState::Holding(task) => Some(task),
            DragState::Idle => None,
        }
    }

    pub fn is_holding(&self) -> bool {
        self.held().is_some()
    }

    /// Resolve a drop onto `(date, slot)`. Returns the move to issue, or
    /// `None` when nothing is held or the target is the task's own cell
    /// (dropping a note where it already sits must not hit the store).
    /// A slot of `None` reassigns the date only, as calendar cells do.
    /// The controller returns to idle either way.
    pub fn drop_on(&mut self, date: NaiveDate, slot: Option<&str>) -> Option<(Uuid, TaskPatch)> {
        let state = std::mem::take(&mut self.state);
        let DragState::Holding(task) = state else {
            return None;
        };

        let same_cell = task.date == date && slot.is_none_or(|s| task.time_slot == s);
        if same_cell {
            log::debug!("drop on own cell ignored for task {}", task.id);
            return None;
        }
        Some((task.id, TaskPatch::move_to(date, slot)))
    }
}
