use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::task::NoteColor;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("sticky-days")
}

fn default_time_slots() -> Vec<String> {
    [
        "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM",
        "4:00 PM", "5:00 PM", "6:00 PM",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BoardConfig {
    /// Ordered slot labels; a task's `time_slot` must be one of these.
    pub time_slots: Vec<String>,
    /// First column of the calendar grid.
    pub week_start: Weekday,
    pub default_color: NoteColor,
    pub data_directory: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            time_slots: default_time_slots(),
            week_start: Weekday::Sun,
            default_color: NoteColor::Yellow,
            data_directory: default_data_dir(),
        }
    }
}

impl BoardConfig {
    pub fn seed_path(&self) -> PathBuf {
        self.data_directory.join("tasks.json")
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|s| s == slot)
    }

    /// Position of a slot within the daily order.
    pub fn slot_index(&self, slot: &str) -> Option<usize> {
        self.time_slots.iter().position(|s| s == slot)
    }

    pub fn first_slot(&self) -> Option<&str> {
        self.time_slots.first().map(String::as_str)
    }
}
