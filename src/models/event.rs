use tui_textarea::Input;

use super::{NoticeMessage, Status, Task, TaskField, TaskId};

#[derive(Debug)]
pub enum Event {
    Notice(NoticeMessage),

    SeedLoaded(Vec<Task>),
    SeedFailed(String),

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardTab,
    KeyboardCtrlC,
    KeyboardCtrlR,
    KeyboardPaste(String),

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
    UiScrollPageUp,
    UiScrollPageDown,
}

/// Domain events published by the task store after each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Loaded { count: usize },
    Created(Task),
    Edited { id: TaskId, field: TaskField },
    StatusChanged { id: TaskId, status: Status },
    Deleted(TaskId),
}
