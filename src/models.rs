use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

/// Which column an appended task lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Past,
    Present,
    Future,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Past => "past",
            Bucket::Present => "present",
            Bucket::Future => "future",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Bucket::Past => "Past",
            Bucket::Present => "Today",
            Bucket::Future => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub task1: String,
    #[serde(default)]
    pub task2: String,
    #[serde(default)]
    pub task3: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DueDateForm {
    #[serde(default)]
    pub due_date: String,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub text: String,
    pub bucket: Bucket,
}

#[derive(Debug, Deserialize)]
pub struct DueDateRequest {
    pub due_date: NaiveDate,
}
