use super::{NewTask, Status, TaskField, TaskId};

/// Asynchronous work handed to the action service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchSeed,
}

/// User intents emitted by the edit surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CreateTask(NewTask),
    PatchField {
        id: TaskId,
        field: TaskField,
        value: String,
    },
    PatchStatus {
        id: TaskId,
        status: Status,
    },
    DeleteTask(TaskId),
    SelectForStatusChange(TaskId),
}
