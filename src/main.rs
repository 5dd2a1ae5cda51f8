use chrono::Duration;

use sticky_days::board::TaskBoard;
use sticky_days::config::BoardConfig;
use sticky_days::core::task::{NewTask, NoteColor, Task};
use sticky_days::core::window::Direction;
use sticky_days::store::memory::{Latency, MemoryStore};

/// Walk the board through a seeded day: load, create, drag, then show the
/// month page. Output goes to stdout; logs to the journal
/// (`journalctl --user -t sticky-days -f`).
#[tokio::main]
async fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("sticky-days".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let config = BoardConfig::default();
    let today = chrono::Local::now().date_naive();

    let seed_path = config.seed_path();
    let seed = if seed_path.exists() {
        match MemoryStore::load_seed(&seed_path) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::error!("ignoring seed file: {}", e);
                sample_day(&config, today)
            }
        }
    } else {
        sample_day(&config, today)
    };

    let store = MemoryStore::seeded(seed, Latency::realistic());
    let board = TaskBoard::daily(store, config, today);

    board.load().await;
    println!("=== {} ===", today.format("%A, %B %e"));
    print_timeline(&board).await;

    println!("\nAdding a note...");
    board
        .create_task(NewTask::new("Write weekly report", "10:00 AM").colored(NoteColor::Blue))
        .await;

    if let Some(first) = board.snapshot().await.first().map(|t| t.id) {
        println!("Dragging the first note to 4:00 PM...");
        board.pick_up(first).await;
        board.drop_held(today, Some("4:00 PM")).await;
    }
    print_timeline(&board).await;

    println!("\nTomorrow:");
    board.navigate(Direction::Next).await;
    print_timeline(&board).await;

    let month_board = TaskBoard::monthly(
        MemoryStore::seeded(sample_day(&BoardConfig::default(), today), Latency::realistic()),
        BoardConfig::default(),
        today,
    );
    month_board.load().await;
    println!("\n=== {} ===", today.format("%B %Y"));
    for row in month_board.calendar_page().await.chunks(7) {
        for cell in row {
            let mark = if cell.is_today {
                '*'
            } else if !cell.in_month {
                '.'
            } else if cell.total > 0 {
                '+'
            } else {
                ' '
            };
            print!("{:>3}{}", cell.day_of_month, mark);
        }
        println!();
    }
}

async fn print_timeline<S: sticky_days::store::TaskStore>(board: &TaskBoard<S>) {
    for row in board.timeline().await {
        let notes: Vec<String> = row
            .tasks
            .iter()
            .map(|t: &Task| format!("[{}] {}", t.color.as_name(), t.title))
            .collect();
        if notes.is_empty() {
            println!("  {:>8}  -", row.slot);
        } else {
            println!("  {:>8}  {}", row.slot, notes.join(", "));
        }
    }
}

fn sample_day(config: &BoardConfig, today: chrono::NaiveDate) -> Vec<Task> {
    let slot = |i: usize| config.time_slots[i].clone();
    let mut tasks = Vec::new();
    let mut add = |title: &str, date, slot: String, color| {
        tasks.push(Task {
            id: uuid::Uuid::new_v4(),
            title: title.to_string(),
            date,
            time_slot: slot,
            color,
            completed: false,
            created_at: chrono::Local::now().naive_local(),
        });
    };

    add("Morning standup", today, slot(0), NoteColor::Green);
    add("Review pull requests", today, slot(2), NoteColor::Teal);
    add("Lunch with Sam", today, slot(3), NoteColor::Pink);
    add("Dentist", today + Duration::days(1), slot(5), NoteColor::Orange);
    add("Plan the week", today + Duration::days(3), slot(0), NoteColor::Purple);
    tasks
}
