pub mod header;
pub mod home;
pub mod input_box;
pub mod notice;
pub mod status_dialog;
pub mod task_form;
pub mod task_table;
pub mod utils;

pub use header::Header;
pub use home::HomeScreen;
pub use input_box::InputBox;
pub use notice::Notice;
pub use status_dialog::StatusDialog;
pub use task_form::TaskForm;
pub use task_table::TaskTable;

use crate::models::Intent;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::Block,
};

/// Result of feeding an event to a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    Submit(Intent),
    Cancel,
}

pub trait Dim {
    fn dim_bg(&mut self);
}

impl Dim for ratatui::Frame<'_> {
    fn dim_bg(&mut self) {
        self.render_widget(
            Block::default().style(
                Style::default()
                    .bg(Color::Rgb(0, 0, 0))
                    .add_modifier(Modifier::DIM),
            ),
            self.area(),
        );
    }
}
