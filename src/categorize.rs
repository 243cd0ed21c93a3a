use crate::models::{Bucket, Task};
use chrono::NaiveDate;

/// Tasks split around `today`. Borrowed from the board; rebuilt on every render.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub past: Vec<&'a Task>,
    pub present: Vec<&'a Task>,
    pub future: Vec<&'a Task>,
}

impl<'a> Buckets<'a> {
    pub fn get(&self, bucket: Bucket) -> &[&'a Task] {
        match bucket {
            Bucket::Past => &self.past,
            Bucket::Present => &self.present,
            Bucket::Future => &self.future,
        }
    }
}

pub fn bucket_for(today: NaiveDate, due_date: NaiveDate) -> Bucket {
    if due_date < today {
        Bucket::Past
    } else if due_date == today {
        Bucket::Present
    } else {
        Bucket::Future
    }
}

/// Past is most recent first, future soonest first, present keeps insertion order.
/// Sorts are stable so equal dates keep insertion order too.
pub fn categorize(today: NaiveDate, tasks: &[Task]) -> Buckets<'_> {
    let mut buckets = Buckets::default();
    for task in tasks {
        match bucket_for(today, task.due_date) {
            Bucket::Past => buckets.past.push(task),
            Bucket::Present => buckets.present.push(task),
            Bucket::Future => buckets.future.push(task),
        }
    }

    buckets.past.sort_by(|a, b| b.due_date.cmp(&a.due_date));
    buckets.future.sort_by_key(|task| task.due_date);
    buckets
}
