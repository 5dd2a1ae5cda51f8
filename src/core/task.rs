use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Pink,
    Green,
    Blue,
    Orange,
    Purple,
    Teal,
    Lime,
}

impl NoteColor {
    pub const ALL: [Self; 8] = [
        Self::Yellow,
        Self::Pink,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Purple,
        Self::Teal,
        Self::Lime,
    ];

    pub fn as_name(&self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Lime => "lime",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "yellow" => Some(Self::Yellow),
            "pink" => Some(Self::Pink),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "orange" => Some(Self::Orange),
            "purple" => Some(Self::Purple),
            "teal" => Some(Self::Teal),
            "lime" => Some(Self::Lime),
            _ => None,
        }
    }
}

/// One sticky note: a titled to-do pinned to a date and a time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub color: NoteColor,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn occupies(&self, date: NaiveDate, slot: &str) -> bool {
        self.date == date && self.time_slot == slot
    }
}

/// Input for creating a task. The store assigns `id` and `created_at`;
/// `completed` always starts false. A missing `date` is stamped from the
/// board's current window before the store sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub time_slot: String,
    #[serde(default)]
    pub color: NoteColor,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, time_slot: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time_slot: time_slot.into(),
            color: NoteColor::default(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn colored(mut self, color: NoteColor) -> Self {
        self.color = color;
        self
    }
}

/// Partial update merged over a stored task; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that moves a task to another cell. The slot is optional:
    /// calendar drops reassign the date only.
    pub fn move_to(date: NaiveDate, slot: Option<&str>) -> Self {
        Self {
            date: Some(date),
            time_slot: slot.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn completed(done: bool) -> Self {
        Self {
            completed: Some(done),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.time_slot.is_none()
            && self.color.is_none()
            && self.completed.is_none()
    }

    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(date) = self.date {
            task.date = date;
        }
        if let Some(slot) = &self.time_slot {
            task.time_slot = slot.clone();
        }
        if let Some(color) = self.color {
            task.color = color;
        }
        if let Some(done) = self.completed {
            task.completed = done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(title: &str) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time_slot: "9:00 AM".to_string(),
            color: NoteColor::Yellow,
            completed: false,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    #[test]
    fn color_names_round_trip() {
        for color in NoteColor::ALL {
            assert_eq!(NoteColor::from_name(color.as_name()), Some(color));
        }
        assert_eq!(NoteColor::from_name("mauve"), None);
    }

    #[test]
    fn patch_keeps_unpatched_fields() {
        let mut task = make_task("Write report");
        let before = task.clone();

        let patch = TaskPatch {
            time_slot: Some("10:00 AM".to_string()),
            ..TaskPatch::default()
        };
        patch.apply_to(&mut task);

        assert_eq!(task.time_slot, "10:00 AM");
        assert_eq!(task.title, before.title);
        assert_eq!(task.date, before.date);
        assert_eq!(task.color, before.color);
        assert_eq!(task.created_at, before.created_at);
    }

    #[test]
    fn move_patch_without_slot_is_date_only() {
        let target = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let patch = TaskPatch::move_to(target, None);
        assert_eq!(patch.date, Some(target));
        assert_eq!(patch.time_slot, None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn task_dates_serialize_as_iso() {
        let task = make_task("Dentist");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"2024-06-01\""));
        assert!(json.contains("\"yellow\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = TaskPatch::completed(true);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"completed\":true}");
    }
}
