//! Renderable shapes derived from a task snapshot: per-slot timeline rows,
//! per-day range columns, and padded calendar pages. The presentation layer
//! walks these without re-deriving any scheduling logic.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::core::bucket;
use crate::core::task::{NoteColor, Task};
use crate::core::window::DateWindow;

/// Calendar cells show this many notes before collapsing into "+N more".
pub const CALENDAR_VISIBLE_TASKS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SlotRow {
    pub slot: String,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub rows: Vec<SlotRow>,
}

/// One cell of the month page grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub in_month: bool,
    pub is_today: bool,
    /// Colors of the first few notes, rendered as indicator pips.
    pub visible_colors: Vec<NoteColor>,
    pub overflow: usize,
    pub total: usize,
}

/// Rows for the daily screen: one per configured slot, in slot order.
pub fn timeline(tasks: &[Task], date: NaiveDate, slots: &[String]) -> Vec<SlotRow> {
    slots
        .iter()
        .map(|slot| SlotRow {
            slot: slot.clone(),
            tasks: bucket::by_date_and_slot(tasks, date, slot)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect()
}

/// Day columns for the range screen, one per window day.
pub fn range_grid(tasks: &[Task], window: &DateWindow, slots: &[String]) -> Vec<DayColumn> {
    window
        .days()
        .map(|date| DayColumn {
            date,
            rows: timeline(tasks, date, slots),
        })
        .collect()
}

/// Whole-week calendar page for a month window. Out-of-month padding cells
/// are present (grids are always full 7-column rows) but flagged so the
/// renderer can dim them.
pub fn calendar_page(
    tasks: &[Task],
    window: &DateWindow,
    week_start: Weekday,
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let month = window.start().month();
    let year = window.start().year();
    window
        .grid_days(week_start)
        .into_iter()
        .map(|date| {
            let summary = bucket::day_summary(tasks, date, CALENDAR_VISIBLE_TASKS);
            CalendarCell {
                date,
                day_of_month: date.day(),
                in_month: date.month() == month && date.year() == year,
                is_today: date == today,
                visible_colors: summary.visible.iter().map(|t| t.color).collect(),
                overflow: summary.overflow,
                total: summary.total,
            }
        })
        .collect()
}
