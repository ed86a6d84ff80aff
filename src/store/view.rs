#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

use std::fmt::Display;

use crate::models::{Status, Task};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(want) => *want == status,
        }
    }

    pub fn next(&self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Only(Status::ToDo),
            StatusFilter::Only(Status::Done) => StatusFilter::All,
            StatusFilter::Only(status) => StatusFilter::Only(status.next()),
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "All"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Tasks whose title or description contains `query` (ignoring case) and
/// whose status passes `filter`, in store order.
pub fn visible<'a>(tasks: &'a [Task], query: &str, filter: StatusFilter) -> Vec<&'a Task> {
    let query = query.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            query.is_empty()
                || task.title().to_lowercase().contains(&query)
                || task.description().to_lowercase().contains(&query)
        })
        .filter(|task| filter.matches(task.status()))
        .collect()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusTally {
    pub to_do: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusTally {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::ToDo => self.to_do,
            Status::InProgress => self.in_progress,
            Status::Done => self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.to_do + self.in_progress + self.done
    }
}

pub fn tally(tasks: &[Task]) -> StatusTally {
    tasks
        .iter()
        .fold(StatusTally::default(), |mut acc, task| {
            match task.status() {
                Status::ToDo => acc.to_do += 1,
                Status::InProgress => acc.in_progress += 1,
                Status::Done => acc.done += 1,
            }
            acc
        })
}
