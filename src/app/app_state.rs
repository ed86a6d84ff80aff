#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use tokio::sync::mpsc;

use crate::models::{Intent, NoticeMessage, Task, TaskEvent, TaskId};
use crate::store::{StatusFilter, StatusTally, TaskStore, tally, visible};
use crate::{info_notice, success_notice};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Tasks,
}

pub(crate) struct AppState {
    store: TaskStore,
    task_events: mpsc::UnboundedReceiver<TaskEvent>,
    selected: Option<TaskId>,

    pub route: Route,
    pub query: String,
    pub status_filter: StatusFilter,
    pub loading: bool,
}

impl AppState {
    pub fn new(route: Route) -> AppState {
        let mut store = TaskStore::new();
        let task_events = store.subscribe();
        AppState {
            store,
            task_events,
            selected: None,
            route,
            query: String::new(),
            status_filter: StatusFilter::default(),
            loading: false,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn visible(&self) -> Vec<&Task> {
        visible(self.store.all(), &self.query, self.status_filter)
    }

    pub fn tally(&self) -> StatusTally {
        tally(self.store.all())
    }

    pub fn load_seed(&mut self, tasks: Vec<Task>) {
        self.loading = false;
        self.selected = None;
        self.store.load(tasks);
    }

    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::SelectForStatusChange(id) => {
                if self.store.get(id).is_none() {
                    return false;
                }
                self.selected = Some(id);
                true
            }
            Intent::PatchStatus { id, .. } => {
                if self.selected == Some(id) {
                    self.selected = None;
                }
                self.store.apply(intent)
            }
            intent => self.store.apply(intent),
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.store.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = self.status_filter.next();
    }

    /// Drains the store events published since the last call.
    pub fn notices(&mut self) -> Vec<NoticeMessage> {
        let mut notices = vec![];
        while let Ok(event) = self.task_events.try_recv() {
            log::debug!("Task event: {:?}", event);
            notices.push(notice_for(&event));
        }
        notices
    }
}

fn notice_for(event: &TaskEvent) -> NoticeMessage {
    match event {
        TaskEvent::Loaded { count } => {
            info_notice!("Tasks Loaded", format!("Loaded {} tasks.", count))
        }
        TaskEvent::Created(_) => {
            success_notice!("Task Added", "The task was successfully added!")
        }
        TaskEvent::Deleted(_) => {
            success_notice!("Task Deleted", "The task was successfully deleted!")
        }
        TaskEvent::Edited { .. } => {
            info_notice!("Task Edited", "Changes to the task were saved!")
        }
        TaskEvent::StatusChanged { status, .. } => info_notice!(
            "Status Updated",
            format!("Task status has been updated to \"{}\".", status)
        ),
    }
}
