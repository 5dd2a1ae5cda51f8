use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on range windows so grid iteration stays bounded.
pub const MAX_RANGE_DAYS: i64 = 365;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("invalid range: end {end} precedes start {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("invalid range: {days} days exceeds the {MAX_RANGE_DAYS}-day cap")]
    TooLong { days: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowKind {
    Day,
    Range,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Prev,
    Next,
}

/// The date span a board currently displays: a single day, a contiguous
/// range, or a calendar month. Bounds are inclusive and `start <= end`
/// always holds for a constructed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
    kind: WindowKind,
}

impl DateWindow {
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
            kind: WindowKind::Day,
        }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if end < start {
            return Err(WindowError::EndBeforeStart { start, end });
        }
        let days = (end - start).num_days() + 1;
        if days > MAX_RANGE_DAYS {
            return Err(WindowError::TooLong { days });
        }
        Ok(Self {
            start,
            end,
            kind: WindowKind::Range,
        })
    }

    /// Range of `len_days` days beginning at `start`.
    pub fn range_of(start: NaiveDate, len_days: u32) -> Result<Self, WindowError> {
        if len_days == 0 {
            return Err(WindowError::EndBeforeStart {
                start,
                end: start.pred_opt().unwrap_or(start),
            });
        }
        Self::range(start, start + Duration::days(len_days as i64 - 1))
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let end = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(first);
        Self {
            start: first,
            end,
            kind: WindowKind::Month,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Shift the window one step backward or forward. Day windows move by
    /// one day, ranges by their own length (so consecutive windows tile
    /// without gaps or overlap), months by one calendar month.
    pub fn navigate(&self, direction: Direction) -> Self {
        match self.kind {
            WindowKind::Day => {
                let date = match direction {
                    Direction::Prev => self.start.pred_opt(),
                    Direction::Next => self.start.succ_opt(),
                };
                Self::day(date.unwrap_or(self.start))
            }
            WindowKind::Range => {
                let shift = match direction {
                    Direction::Prev => -self.len_days(),
                    Direction::Next => self.len_days(),
                };
                Self {
                    start: self.start + Duration::days(shift),
                    end: self.end + Duration::days(shift),
                    kind: WindowKind::Range,
                }
            }
            WindowKind::Month => {
                let first = match direction {
                    Direction::Prev => self.start.checked_sub_months(Months::new(1)),
                    Direction::Next => self.start.checked_add_months(Months::new(1)),
                };
                Self::month_of(first.unwrap_or(self.start))
            }
        }
    }

    /// Re-anchor the window to contain `today`, keeping kind and length.
    pub fn jump_to_today(&self, today: NaiveDate) -> Self {
        match self.kind {
            WindowKind::Day => Self::day(today),
            WindowKind::Range => Self {
                start: today,
                end: today + Duration::days(self.len_days() - 1),
                kind: WindowKind::Range,
            },
            WindowKind::Month => Self::month_of(today),
        }
    }

    /// Every date in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len_days() as usize)
    }

    /// The window padded out to whole weeks starting on `week_start`. For a
    /// month window this is the calendar page: full rows of seven cells
    /// covering the weeks before the 1st and after the last day.
    pub fn grid_days(&self, week_start: Weekday) -> Vec<NaiveDate> {
        let lead = days_past_week_start(self.start, week_start);
        let trail = 6 - days_past_week_start(self.end, week_start);
        let grid_start = self.start - Duration::days(lead);
        let total = (self.end - grid_start).num_days() + 1 + trail;
        grid_start.iter_days().take(total as usize).collect()
    }
}

fn days_past_week_start(date: NaiveDate, week_start: Weekday) -> i64 {
    let offset =
        (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    offset as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn range_rejects_reversed_bounds() {
        assert_eq!(
            DateWindow::range(d(2024, 6, 10), d(2024, 6, 1)),
            Err(WindowError::EndBeforeStart {
                start: d(2024, 6, 10),
                end: d(2024, 6, 1),
            })
        );
    }

    #[test]
    fn range_rejects_spans_over_the_cap() {
        let result = DateWindow::range(d(2024, 1, 1), d(2025, 6, 1));
        assert!(matches!(result, Err(WindowError::TooLong { .. })));
        // Exactly at the cap is fine (2024 is a leap year: 366 days total).
        assert!(DateWindow::range(d(2024, 1, 1), d(2024, 12, 30)).is_ok());
    }

    #[test]
    fn week_range_tiles_forward() {
        let window = DateWindow::range_of(d(2024, 6, 1), 7).unwrap();
        let next = window.navigate(Direction::Next);
        assert_eq!(next.start(), d(2024, 6, 8));
        assert_eq!(next.end(), d(2024, 6, 14));
    }

    #[test]
    fn next_then_prev_restores_every_kind() {
        let windows = [
            DateWindow::day(d(2024, 6, 15)),
            DateWindow::range_of(d(2024, 6, 1), 14).unwrap(),
            DateWindow::range_of(d(2024, 2, 27), 30).unwrap(),
            DateWindow::month_of(d(2024, 6, 15)),
            DateWindow::month_of(d(2024, 1, 31)),
        ];
        for window in windows {
            let back = window.navigate(Direction::Next).navigate(Direction::Prev);
            assert_eq!(back, window);
        }
    }

    #[test]
    fn month_window_spans_first_to_last() {
        let window = DateWindow::month_of(d(2024, 2, 14));
        assert_eq!(window.start(), d(2024, 2, 1));
        assert_eq!(window.end(), d(2024, 2, 29));
        assert_eq!(window.kind(), WindowKind::Month);

        let next = window.navigate(Direction::Next);
        assert_eq!(next.start(), d(2024, 3, 1));
        assert_eq!(next.end(), d(2024, 3, 31));
    }

    #[test]
    fn jump_to_today_preserves_length() {
        let today = d(2024, 6, 20);
        let range = DateWindow::range_of(d(2024, 1, 1), 14).unwrap();
        let jumped = range.jump_to_today(today);
        assert_eq!(jumped.start(), today);
        assert_eq!(jumped.len_days(), 14);
        assert!(jumped.contains(today));

        let month = DateWindow::month_of(d(2023, 12, 1)).jump_to_today(today);
        assert_eq!(month.start(), d(2024, 6, 1));
        assert_eq!(month.end(), d(2024, 6, 30));
    }

    #[test]
    fn days_walks_the_window_in_order() {
        let window = DateWindow::range_of(d(2024, 6, 29), 3).unwrap();
        let days: Vec<NaiveDate> = window.days().collect();
        assert_eq!(days, vec![d(2024, 6, 29), d(2024, 6, 30), d(2024, 7, 1)]);
    }

    #[test]
    fn month_grid_is_whole_weeks() {
        // June 2024: the 1st is a Saturday, the 30th a Sunday.
        let window = DateWindow::month_of(d(2024, 6, 1));
        let grid = window.grid_days(Weekday::Sun);
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(grid.first(), Some(&d(2024, 5, 26)));
        assert_eq!(grid.last(), Some(&d(2024, 7, 6)));
        assert!(window.days().all(|day| grid.contains(&day)));

        // Monday-start padding shifts the same month differently.
        let monday_grid = window.grid_days(Weekday::Mon);
        assert_eq!(monday_grid.len() % 7, 0);
        assert_eq!(monday_grid.first(), Some(&d(2024, 5, 27)));
        assert_eq!(monday_grid.last(), Some(&d(2024, 6, 30)));
    }
}
