pub mod app;
pub mod app_state;
pub mod services;
pub mod ui;

use std::io;

pub use app::{App, InitProps};
pub use app_state::Route;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture},
    terminal::{LeaveAlternateScreen, disable_raw_mode, is_raw_mode_enabled},
};

/// Gives the terminal back to the shell so a panic report stays readable.
pub fn destruct_terminal_for_panic() {
    if !is_raw_mode_enabled().unwrap_or(false) {
        return;
    }

    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}
