use crate::categorize::categorize;
use crate::dates::date_key;
use crate::models::{Bucket, Task, TaskId};
use crate::store::Board;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Main,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub bucket: Bucket,
    pub title: &'static str,
    pub tasks: Vec<TaskRow>,
    pub show_empty_message: bool,
}

/// Everything the page shows, derived from the board for one `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub phase: Phase,
    pub today: String,
    pub tomorrow: String,
    pub welcome: Option<String>,
    pub columns: Vec<Column>,
    pub all_completed: bool,
    pub show_completion_banner: bool,
    pub action_disabled: bool,
}

impl BoardView {
    pub fn project(today: NaiveDate, board: &Board) -> Self {
        let buckets = categorize(today, board.tasks());
        let columns = [Bucket::Past, Bucket::Present, Bucket::Future]
            .into_iter()
            .map(|bucket| {
                let tasks: Vec<TaskRow> = buckets.get(bucket).iter().map(|task| row(task)).collect();
                Column {
                    bucket,
                    title: bucket.title(),
                    show_empty_message: tasks.is_empty(),
                    tasks,
                }
            })
            .collect();

        let all_completed = board.all_completed();
        let phase = if board.is_set_up() { Phase::Main } else { Phase::Setup };

        Self {
            phase,
            today: date_key(today),
            tomorrow: date_key(today + Duration::days(1)),
            welcome: board.user().map(|user| format!("Welcome, {}!", user.name)),
            columns,
            all_completed,
            show_completion_banner: all_completed,
            action_disabled: all_completed,
        }
    }

    pub fn column(&self, bucket: Bucket) -> Option<&Column> {
        self.columns.iter().find(|column| column.bucket == bucket)
    }
}

fn row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        text: task.text.clone(),
        completed: task.completed,
        due_date: date_key(task.due_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetupForm;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn seeded() -> Board {
        let mut board = Board::new();
        let form = SetupForm {
            name: "Ana".to_string(),
            task1: "A".to_string(),
            task2: "B".to_string(),
            task3: "C".to_string(),
        };
        board.complete_setup(&form, today()).expect("setup");
        board
    }

    fn texts(view: &BoardView, bucket: Bucket) -> Vec<String> {
        view.column(bucket)
            .expect("column")
            .tasks
            .iter()
            .map(|task| task.text.clone())
            .collect()
    }

    #[test]
    fn setup_phase_has_no_welcome() {
        let view = BoardView::project(today(), &Board::new());
        assert_eq!(view.phase, Phase::Setup);
        assert_eq!(view.welcome, None);
        assert!(!view.show_completion_banner);
        assert!(!view.action_disabled);
        assert!(view.columns.iter().all(|column| column.show_empty_message));
    }

    #[test]
    fn seeded_board_shows_tasks_in_present_only() {
        let view = BoardView::project(today(), &seeded());
        assert_eq!(view.phase, Phase::Main);
        assert_eq!(view.welcome.as_deref(), Some("Welcome, Ana!"));
        assert_eq!(texts(&view, Bucket::Present), ["A", "B", "C"]);
        assert!(view.column(Bucket::Past).unwrap().show_empty_message);
        assert!(!view.column(Bucket::Present).unwrap().show_empty_message);
        assert!(view.column(Bucket::Future).unwrap().show_empty_message);
        assert_eq!(view.today, "2026-01-05");
        assert_eq!(view.tomorrow, "2026-01-06");
    }

    #[test]
    fn redated_task_moves_on_next_projection() {
        let mut board = seeded();
        let id = board.tasks()[1].id;
        board.change_due_date(id, today() + Duration::days(3));

        let view = BoardView::project(today(), &board);
        assert_eq!(texts(&view, Bucket::Present), ["A", "C"]);
        assert_eq!(texts(&view, Bucket::Future), ["B"]);
        assert_eq!(view.column(Bucket::Future).unwrap().tasks[0].due_date, "2026-01-08");
    }

    #[test]
    fn banner_and_action_follow_completion() {
        let mut board = seeded();
        let ids: Vec<_> = board.tasks().iter().map(|task| task.id).collect();
        for id in &ids {
            board.toggle_completion(*id);
        }
        let view = BoardView::project(today(), &board);
        assert!(view.show_completion_banner);
        assert!(view.action_disabled);

        board.toggle_completion(ids[2]);
        let view = BoardView::project(today(), &board);
        assert!(!view.show_completion_banner);
        assert!(!view.action_disabled);
    }
}
