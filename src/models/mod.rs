pub mod action;
pub mod event;
pub mod notice;
pub mod task;

pub use action::*;
pub use event::{Event, TaskEvent};
pub use notice::*;
pub use task::*;
