#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

pub mod view;

pub use view::{StatusFilter, StatusTally, tally, visible};

use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::models::{Intent, NewTask, Status, Task, TaskEvent, TaskField, TaskId};

/// Never handed out; once the counter reaches it the store stops creating.
const EXHAUSTED: TaskId = TaskId::MAX;

/// In-memory, insertion-ordered owner of every task in the session.
///
/// Every mutation runs to completion before returning and publishes a
/// [`TaskEvent`] to all live subscribers. Operations addressing an unknown id
/// are no-ops and report `false`. `TaskId::MAX` is never a valid id.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    subscribers: Vec<mpsc::UnboundedSender<TaskEvent>>,
}

impl TaskStore {
    pub fn new() -> TaskStore {
        TaskStore {
            tasks: vec![],
            next_id: 1,
            subscribers: vec![],
        }
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<TaskEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Replaces the whole content. Later duplicates of an id are dropped.
    pub fn load(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::with_capacity(tasks.len());
        self.tasks = tasks
            .into_iter()
            .filter(|task| {
                if task.id() == EXHAUSTED {
                    log::warn!("Dropping task with out of range id {} from load", task.id());
                    return false;
                }
                if seen.insert(task.id()) {
                    return true;
                }
                log::warn!("Dropping duplicated task id {} from load", task.id());
                false
            })
            .collect();

        // Ids handed out earlier in the session stay retired.
        let max_id = self.tasks.iter().map(Task::id).max().unwrap_or(0);
        let after_max = max_id.checked_add(1).unwrap_or(EXHAUSTED);
        self.next_id = self.next_id.max(after_max);

        log::debug!("Loaded {} tasks, next id {}", self.tasks.len(), self.next_id);
        self.emit(TaskEvent::Loaded {
            count: self.tasks.len(),
        });
    }

    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Option<Task> {
        if self.next_id == EXHAUSTED {
            log::error!("Cannot create task, no ids left");
            return None;
        }

        let task = Task::new(self.next_id, title, description, status);
        self.next_id += 1;
        self.tasks.push(task.clone());

        log::debug!("Created task {}", task.id());
        self.emit(TaskEvent::Created(task.clone()));
        Some(task)
    }

    pub fn patch_field(&mut self, id: TaskId, field: TaskField, value: impl Into<String>) -> bool {
        let value = value.into();
        match field {
            TaskField::Status => match value.parse::<Status>() {
                Ok(status) => self.patch_status(id, status),
                Err(err) => {
                    log::warn!("Ignoring status patch for task {}: {}", id, err);
                    false
                }
            },
            TaskField::Title | TaskField::Description => self.patch_text(id, field, value),
        }
    }

    pub fn patch_status(&mut self, id: TaskId, status: Status) -> bool {
        let Some(task) = self.find_mut(id) else {
            log::debug!("Status change ignored, task {} not found", id);
            return false;
        };

        task.set_status(status);
        self.emit(TaskEvent::StatusChanged { id, status });
        true
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            log::debug!("Delete ignored, task {} not found", id);
            return false;
        };

        self.tasks.remove(index);
        self.emit(TaskEvent::Deleted(id));
        true
    }

    /// Applies a user intent. Selection is owned by the edit surface, so
    /// [`Intent::SelectForStatusChange`] never mutates the store.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::CreateTask(NewTask {
                title,
                description,
                status,
            }) => {
                self.create(title, description, status).is_some()
            }
            Intent::PatchField { id, field, value } => self.patch_field(id, field, value),
            Intent::PatchStatus { id, status } => self.patch_status(id, status),
            Intent::DeleteTask(id) => self.remove(id),
            Intent::SelectForStatusChange(_) => false,
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn patch_text(&mut self, id: TaskId, field: TaskField, value: String) -> bool {
        let Some(task) = self.find_mut(id) else {
            log::debug!("Patch {} ignored, task {} not found", field, id);
            return false;
        };

        if field == TaskField::Title {
            task.set_title(value);
        } else {
            task.set_description(value);
        }

        self.emit(TaskEvent::Edited { id, field });
        true
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    fn emit(&mut self, event: TaskEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
