use chrono::NaiveDate;

use sticky_days::board::{BoardEvent, NoticeLevel, TaskBoard};
use sticky_days::config::BoardConfig;
use sticky_days::core::task::{NewTask, NoteColor, TaskPatch};
use sticky_days::core::window::Direction;
use sticky_days::store::TaskStore;
use sticky_days::store::memory::{Latency, MemoryStore};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn daily_board_end_to_end() {
    let day = d(2024, 6, 3);
    let board = TaskBoard::daily(
        MemoryStore::seeded(Vec::new(), Latency::none()),
        BoardConfig::default(),
        day,
    );
    let mut events = board.subscribe();

    board.load().await;
    assert!(board.snapshot().await.is_empty());

    // Create two notes; the window stamps their date.
    board
        .create_task(NewTask::new("Standup", "9:00 AM").colored(NoteColor::Green))
        .await;
    board
        .create_task(NewTask::new("  Review PRs  ", "11:00 AM"))
        .await;

    let snapshot = board.snapshot().await;
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.iter().all(|t| t.date == day));
    assert_eq!(snapshot[1].title, "Review PRs");

    // Drag the standup note into the afternoon.
    let standup = snapshot[0].id;
    board.pick_up(standup).await;
    board.drop_held(day, Some("2:00 PM")).await;

    let rows = board.timeline().await;
    let two_pm = rows.iter().find(|r| r.slot == "2:00 PM").unwrap();
    assert_eq!(two_pm.tasks.len(), 1);
    assert_eq!(two_pm.tasks[0].title, "Standup");
    let nine_am = rows.iter().find(|r| r.slot == "9:00 AM").unwrap();
    assert!(nine_am.tasks.is_empty());

    // The move is persisted, not just local.
    let stored = board.store().get_by_date(day).await.unwrap();
    let moved = stored.iter().find(|t| t.id == standup).unwrap();
    assert_eq!(moved.time_slot, "2:00 PM");

    // Complete and then delete the review note.
    let review = snapshot[1].id;
    board.update_task(review, TaskPatch::completed(true)).await;
    assert!(board.snapshot().await[1].completed);
    board.delete_task(review).await;
    assert_eq!(board.snapshot().await.len(), 1);
    assert!(board.store().get_by_date(day).await.unwrap().len() == 1);

    // Every successful mutation produced a success notice.
    let mut successes = 0;
    while let Ok(event) = events.try_recv() {
        if let BoardEvent::Notice(notice) = event {
            assert_eq!(notice.level, NoticeLevel::Success);
            successes += 1;
        }
    }
    assert_eq!(successes, 5);
}

#[tokio::test]
async fn week_board_tiles_and_rebuckets() {
    let start = d(2024, 6, 1);
    let store = MemoryStore::seeded(Vec::new(), Latency::none());
    for day in [1, 4, 10] {
        store
            .create(
                NewTask::new(format!("June {day}"), "9:00 AM").on(d(2024, 6, day)),
            )
            .await
            .unwrap();
    }

    let board = TaskBoard::ranged(store, BoardConfig::default(), start, 7).unwrap();
    board.load().await;

    let grid = board.range_grid().await;
    assert_eq!(grid.len(), 7);
    let busy_days: Vec<NaiveDate> = grid
        .iter()
        .filter(|col| col.rows.iter().any(|r| !r.tasks.is_empty()))
        .map(|col| col.date)
        .collect();
    assert_eq!(busy_days, vec![d(2024, 6, 1), d(2024, 6, 4)]);

    // The next week window starts where this one ends.
    board.navigate(Direction::Next).await;
    let window = board.window().await;
    assert_eq!(window.start(), d(2024, 6, 8));
    assert_eq!(window.end(), d(2024, 6, 14));
    let snapshot = board.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].title, "June 10");
}
