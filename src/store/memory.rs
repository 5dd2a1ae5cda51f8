//! In-memory task store with artificial latency, standing in for a remote
//! API. Queries are sequential scans over an owned vec; the dataset is one
//! person's board, never large.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::task::{NewTask, Task, TaskPatch};

use super::{StoreError, TaskStore};

/// Per-operation artificial delay, mimicking a remote round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub get_all: Duration,
    pub get_by_date: Duration,
    pub get_by_range: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    /// Delays sized like a slow remote backend.
    pub fn realistic() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_date: Duration::from_millis(250),
            get_by_range: Duration::from_millis(300),
            create: Duration::from_millis(300),
            update: Duration::from_millis(250),
            delete: Duration::from_millis(200),
        }
    }

    pub fn none() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_date: Duration::ZERO,
            get_by_range: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::realistic()
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("seed file is not valid task JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
    latency: Latency,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::seeded(Vec::new(), Latency::realistic())
    }

    pub fn seeded(tasks: Vec<Task>, latency: Latency) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            latency,
        }
    }

    /// Load a seed fixture (a JSON array of tasks) from disk.
    pub fn load_seed(path: &Path) -> Result<Vec<Task>, SeedError> {
        let text = std::fs::read_to_string(path)?;
        let tasks: Vec<Task> = serde_json::from_str(&text)?;
        log::info!("loaded {} seed tasks from {}", tasks.len(), path.display());
        Ok(tasks)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Task>, StoreError> {
        tokio::time::sleep(self.latency.get_all).await;
        Ok(self.tasks.lock().await.clone())
    }

    async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError> {
        tokio::time::sleep(self.latency.get_by_date).await;
        let tasks = self.tasks.lock().await;
        Ok(tasks.iter().filter(|t| t.date == date).cloned().collect())
    }

    async fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, StoreError> {
        tokio::time::sleep(self.latency.get_by_range).await;
        let tasks = self.tasks.lock().await;
        Ok(tasks
            .iter()
            .filter(|t| start <= t.date && t.date <= end)
            .cloned()
            .collect())
    }

    async fn create(&self, input: NewTask) -> Result<Task, StoreError> {
        tokio::time::sleep(self.latency.create).await;

        let title = input.title.trim();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("title must not be empty".into()));
        }
        let Some(date) = input.date else {
            return Err(StoreError::InvalidInput("date is required".into()));
        };

        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            date,
            time_slot: input.time_slot,
            color: input.color,
            completed: false,
            created_at: chrono::Local::now().naive_local(),
        };
        log::debug!("created task {} on {}", task.id, task.date);
        self.tasks.lock().await.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Task, StoreError> {
        tokio::time::sleep(self.latency.update).await;
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        patch.apply_to(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        tokio::time::sleep(self.latency.delete).await;
        let mut tasks = self.tasks.lock().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        tasks.remove(index);
        log::debug!("deleted task {}", id);
        Ok(())
    }
}
