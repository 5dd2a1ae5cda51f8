//! The task board view model: owns the date window, the task snapshot for
//! that window, and the drag state; mediates every store call and reports
//! outcomes as transient notices. One board instance backs one screen
//! (daily timeline, range timeline, or month calendar).

pub mod drag;
pub mod layout;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use tokio::sync::{Mutex, broadcast};
use uuid::Uuid;

use crate::config::BoardConfig;
use crate::core::task::{NewTask, Task, TaskPatch};
use crate::core::window::{DateWindow, Direction, WindowError, WindowKind};
use crate::store::TaskStore;
use drag::DragController;
use layout::{CalendarCell, DayColumn, SlotRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-visible message; the presentation layer shows these as
/// toasts. No structured error crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    SnapshotChanged,
    LoadingChanged(bool),
    Notice(Notice),
}

#[derive(Debug)]
struct BoardState {
    window: DateWindow,
    tasks: Vec<Task>,
    loading: bool,
    drag: DragController,
}

pub struct TaskBoard<S> {
    store: S,
    config: BoardConfig,
    state: Mutex<BoardState>,
    /// Ticket of the most recently issued load; stale resolutions are
    /// discarded by comparing against it before touching the snapshot.
    load_seq: AtomicU64,
    events: broadcast::Sender<BoardEvent>,
}

impl<S: TaskStore> TaskBoard<S> {
    pub fn new(store: S, config: BoardConfig, window: DateWindow) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            store,
            config,
            state: Mutex::new(BoardState {
                window,
                tasks: Vec::new(),
                loading: false,
                drag: DragController::default(),
            }),
            load_seq: AtomicU64::new(0),
            events,
        }
    }

    /// Board for the daily timeline screen.
    pub fn daily(store: S, config: BoardConfig, date: NaiveDate) -> Self {
        Self::new(store, config, DateWindow::day(date))
    }

    /// Board for a multi-day range timeline (7/14/30-day screens).
    pub fn ranged(
        store: S,
        config: BoardConfig,
        start: NaiveDate,
        len_days: u32,
    ) -> Result<Self, WindowError> {
        Ok(Self::new(
            store,
            config,
            DateWindow::range_of(start, len_days)?,
        ))
    }

    /// Board for the month calendar screen.
    pub fn monthly(store: S, config: BoardConfig, date: NaiveDate) -> Self {
        Self::new(store, config, DateWindow::month_of(date))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    pub async fn window(&self) -> DateWindow {
        self.state.lock().await.window
    }

    pub async fn snapshot(&self) -> Vec<Task> {
        self.state.lock().await.tasks.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    pub async fn held_task(&self) -> Option<Task> {
        self.state.lock().await.drag.held().cloned()
    }

    /// Fetch tasks for the current window. Day windows use the by-date
    /// query; range and month windows use the range query with a
    /// client-side bounds filter on top.
    pub async fn load(&self) {
        let window = self.state.lock().await.window;
        self.load_window(window).await;
    }

    async fn load_window(&self, window: DateWindow) {
        let ticket = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().await.loading = true;
        self.emit(BoardEvent::LoadingChanged(true));

        let fetched = match window.kind() {
            WindowKind::Day => self.store.get_by_date(window.start()).await,
            WindowKind::Range | WindowKind::Month => self
                .store
                .get_by_date_range(window.start(), window.end())
                .await
                .map(|tasks| {
                    tasks
                        .into_iter()
                        .filter(|t| window.contains(t.date))
                        .collect()
                }),
        };

        let mut state = self.state.lock().await;
        if self.load_seq.load(Ordering::SeqCst) != ticket || state.window != window {
            // A newer load owns the snapshot now; drop this result silently.
            log::debug!(
                "discarding stale load {} for {}..{}",
                ticket,
                window.start(),
                window.end()
            );
            return;
        }
        state.loading = false;
        match fetched {
            Ok(tasks) => {
                log::debug!(
                    "loaded {} tasks for {}..{}",
                    tasks.len(),
                    window.start(),
                    window.end()
                );
                state.tasks = tasks;
                drop(state);
                self.emit(BoardEvent::LoadingChanged(false));
                self.emit(BoardEvent::SnapshotChanged);
            }
            Err(e) => {
                drop(state);
                log::error!("failed to load tasks: {}", e);
                self.emit(BoardEvent::LoadingChanged(false));
                self.notify(NoticeLevel::Error, "Failed to load tasks");
            }
        }
    }

    /// Shift the window and reload it.
    pub async fn navigate(&self, direction: Direction) {
        let window = {
            let mut state = self.state.lock().await;
            state.window = state.window.navigate(direction);
            state.window
        };
        self.load_window(window).await;
    }

    /// Re-anchor the window on today and reload.
    pub async fn jump_to_today(&self) {
        let today = chrono::Local::now().date_naive();
        let window = {
            let mut state = self.state.lock().await;
            state.window = state.window.jump_to_today(today);
            state.window
        };
        self.load_window(window).await;
    }

    /// Create a task. The title is trimmed and must be non-empty, the slot
    /// must belong to the configured list, and a missing date is stamped
    /// from the window start. The store-confirmed task is appended to the
    /// snapshot.
    pub async fn create_task(&self, input: NewTask) {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            self.notify(NoticeLevel::Error, "Task title cannot be empty");
            return;
        }
        if !self.config.has_slot(&input.time_slot) {
            self.notify(NoticeLevel::Error, "Invalid time slot");
            return;
        }
        let date = match input.date {
            Some(date) => date,
            None => self.state.lock().await.window.start(),
        };
        let input = NewTask {
            title,
            date: Some(date),
            ..input
        };

        match self.store.create(input).await {
            Ok(task) => {
                self.state.lock().await.tasks.push(task);
                self.emit(BoardEvent::SnapshotChanged);
                self.notify(NoticeLevel::Success, "Task created successfully!");
            }
            Err(e) => {
                log::error!("failed to create task: {}", e);
                self.notify(NoticeLevel::Error, "Failed to create task");
            }
        }
    }

    /// Apply a partial update through the store. On success the snapshot
    /// entry is replaced with the store-returned task, never the raw patch.
    pub async fn update_task(&self, id: Uuid, patch: TaskPatch) {
        if let Some(slot) = &patch.time_slot {
            if !self.config.has_slot(slot) {
                self.notify(NoticeLevel::Error, "Invalid time slot");
                return;
            }
        }

        match self.store.update(id, patch).await {
            Ok(updated) => {
                {
                    let mut state = self.state.lock().await;
                    if let Some(entry) = state.tasks.iter_mut().find(|t| t.id == id) {
                        *entry = updated;
                    }
                }
                self.emit(BoardEvent::SnapshotChanged);
                self.notify(NoticeLevel::Success, "Task updated successfully!");
            }
            Err(e) => {
                log::error!("failed to update task {}: {}", id, e);
                self.notify(NoticeLevel::Error, "Failed to update task");
            }
        }
    }

    pub async fn delete_task(&self, id: Uuid) {
        match self.store.delete(id).await {
            Ok(()) => {
                self.state.lock().await.tasks.retain(|t| t.id != id);
                self.emit(BoardEvent::SnapshotChanged);
                self.notify(NoticeLevel::Success, "Task deleted successfully!");
            }
            Err(e) => {
                log::error!("failed to delete task {}: {}", id, e);
                self.notify(NoticeLevel::Error, "Failed to delete task");
            }
        }
    }

    /// Start dragging the snapshot task with `id`.
    pub async fn pick_up(&self, id: Uuid) {
        let mut state = self.state.lock().await;
        let task = state.tasks.iter().find(|t| t.id == id).cloned();
        match task {
            Some(task) => state.drag.pick_up(task),
            None => log::warn!("pick_up for unknown task {}", id),
        }
    }

    pub async fn cancel_drag(&self) {
        self.state.lock().await.drag.cancel();
    }

    /// Drop the held task onto `(date, slot)`. Issues at most one store
    /// update; dropping a task onto its own cell issues none.
    pub async fn drop_held(&self, date: NaiveDate, slot: Option<&str>) {
        if let Some(s) = slot {
            if !self.config.has_slot(s) {
                self.state.lock().await.drag.cancel();
                self.notify(NoticeLevel::Error, "Invalid time slot");
                return;
            }
        }
        let resolved = self.state.lock().await.drag.drop_on(date, slot);
        if let Some((id, patch)) = resolved {
            self.update_task(id, patch).await;
        }
    }

    /// Per-slot rows for the window's first day (the daily screen).
    pub async fn timeline(&self) -> Vec<SlotRow> {
        let state = self.state.lock().await;
        layout::timeline(&state.tasks, state.window.start(), &self.config.time_slots)
    }

    /// Per-day columns over the whole window (the range screen).
    pub async fn range_grid(&self) -> Vec<DayColumn> {
        let state = self.state.lock().await;
        layout::range_grid(&state.tasks, &state.window, &self.config.time_slots)
    }

    /// Whole-week month grid (the calendar screen).
    pub async fn calendar_page(&self) -> Vec<CalendarCell> {
        let today = chrono::Local::now().date_naive();
        let state = self.state.lock().await;
        layout::calendar_page(&state.tasks, &state.window, self.config.week_start, today)
    }

    fn emit(&self, event: BoardEvent) {
        // Nobody listening is fine; notices are fire-and-forget.
        let _ = self.events.send(event);
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        self.emit(BoardEvent::Notice(Notice {
            level,
            message: message.to_string(),
        }));
    }
}
