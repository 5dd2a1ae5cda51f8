pub mod memory;

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::core::task::{NewTask, Task, TaskPatch};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The mutation target vanished, e.g. deleted from another screen.
    #[error("task not found")]
    NotFound,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Storage boundary consumed by the board. The in-memory implementation
/// lives in [`memory`]; a remote backend would implement the same contract.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    async fn get_all(&self) -> Result<Vec<Task>, StoreError>;

    async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError>;

    /// Tasks with `start <= date <= end`, bounds inclusive.
    async fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, StoreError>;

    /// Create a task; the store stamps `id` and `created_at`. Fails with
    /// [`StoreError::InvalidInput`] when the title is blank or the date is
    /// missing.
    async fn create(&self, input: NewTask) -> Result<Task, StoreError>;

    /// Merge `patch` over the stored task and return the merged value.
    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Task, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
