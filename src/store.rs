use crate::errors::ValidationError;
use crate::models::{SetupForm, Task, TaskId, User};
use chrono::NaiveDate;

/// In-memory state of the page: the user once set up, and the task list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    user: Option<User>,
    tasks: Vec<Task>,
    next_id: u64,
    pending_reveal: bool,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_set_up(&self) -> bool {
        self.user.is_some()
    }

    /// Runs the one-time setup. Fields are trimmed; the first empty one is reported
    /// and the board is left as it was.
    pub fn complete_setup(
        &mut self,
        form: &SetupForm,
        today: NaiveDate,
    ) -> Result<&User, ValidationError> {
        if self.user.is_some() {
            return Err(ValidationError::SetupAlreadyComplete);
        }

        let name = required("name", &form.name)?;
        let seeds = [
            required("task1", &form.task1)?,
            required("task2", &form.task2)?,
            required("task3", &form.task3)?,
        ];

        self.tasks.clear();
        for text in seeds {
            self.add_task(text, today);
        }
        self.pending_reveal = true;

        Ok(&*self.user.insert(User {
            name: name.to_string(),
        }))
    }

    pub fn add_task(&mut self, text: impl Into<String>, due_date: NaiveDate) -> &Task {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let index = self.tasks.len();
        self.tasks.push(Task {
            id,
            text: text.into(),
            completed: false,
            due_date,
        });
        &self.tasks[index]
    }

    pub fn toggle_completion(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task)
    }

    pub fn change_due_date(&mut self, id: TaskId, due_date: NaiveDate) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.due_date = due_date;
        Some(task)
    }

    pub fn all_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.completed)
    }

    /// True exactly once after setup: the render that animates setup away.
    pub fn take_pending_reveal(&mut self) -> bool {
        std::mem::take(&mut self.pending_reveal)
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingRequiredField { field });
    }
    Ok(value)
}
