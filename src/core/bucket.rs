//! Pure bucketing over a task slice. Buckets are recomputed per call: the
//! input is always one window's worth of tasks, so no incremental index is
//! kept.

use chrono::NaiveDate;

use super::task::Task;

/// Tasks scheduled on `date`, preserving the original relative order.
/// Tasks are never re-sorted by slot here; insertion order is the tiebreak.
pub fn by_date(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.date == date).collect()
}

/// Tasks occupying the exact `(date, slot)` cell, in original order.
pub fn by_date_and_slot<'a>(tasks: &'a [Task], date: NaiveDate, slot: &str) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.occupies(date, slot)).collect()
}

/// Total per-day count, for summary badges.
pub fn count_by_date(tasks: &[Task], date: NaiveDate) -> usize {
    tasks.iter().filter(|t| t.date == date).count()
}

/// A day's tasks trimmed for a compact calendar cell: the first
/// `max_visible` plus an overflow count ("+N more").
#[derive(Debug)]
pub struct DaySummary<'a> {
    pub visible: Vec<&'a Task>,
    pub overflow: usize,
    pub total: usize,
}

pub fn day_summary(tasks: &[Task], date: NaiveDate, max_visible: usize) -> DaySummary<'_> {
    let mut day_tasks = by_date(tasks, date);
    let total = day_tasks.len();
    day_tasks.truncate(max_visible);
    DaySummary {
        visible: day_tasks,
        overflow: total.saturating_sub(max_visible),
        total,
    }
}
