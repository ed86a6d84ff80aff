#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use std::io;
use std::time::Duration;

use crate::app::app_state::{AppState, Route};
use crate::app::ui::{
    Dim, Header, HomeScreen, InputBox, Notice, Outcome, StatusDialog, TaskForm, TaskTable,
    input_box, utils,
};
use crate::models::{Action, Event, Intent};
use crate::{info_notice, warn_notice};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Layout},
    prelude::{Backend, CrosstermBackend},
    style::Color,
    widgets::{Paragraph, Wrap},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_textarea::Key;

use super::services::EventService;

const MIN_WIDTH: u16 = 60;

pub struct InitProps {
    pub route: Route,
    pub seed_enabled: bool,
    pub notice_duration: Duration,
}

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,

    events: &'a mut EventService,

    app_state: AppState,
    table: TaskTable<'a>,
    form: TaskForm<'a>,
    status_dialog: StatusDialog,
    search: InputBox<'a>,
    search_backup: String,

    notice: Notice,
    seed_enabled: bool,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        cancel_token: CancellationToken,

        init_props: InitProps,
    ) -> App<'a> {
        App {
            action_tx,
            events,
            app_state: AppState::new(init_props.route),
            table: TaskTable::new(),
            form: TaskForm::default(),
            status_dialog: StatusDialog::default(),
            search: InputBox::default()
                .with_title(" Search ")
                .with_placeholder("Filter by title or description")
                .with_border_color(Color::LightYellow),
            search_backup: String::new(),
            notice: Notice::new(init_props.notice_duration),
            seed_enabled: init_props.seed_enabled,
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;

        if self.seed_enabled {
            self.fetch_seed();
        }
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.render(terminal)?;
            let event = self.events.next().await;
            let stop = self.handle_event(event);
            self.flush_notices();
            if stop {
                return Ok(());
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> bool {
        // Handle critical events first
        if let Some(stop) = self.handle_global_event(&event) {
            return stop;
        }

        match self.app_state.route {
            Route::Home => self.handle_home_event(&event),
            Route::Tasks => self.handle_tasks_event(&event),
        }
    }

    fn handle_global_event(&mut self, event: &Event) -> Option<bool> {
        match event {
            Event::Quit => Some(true),

            Event::UiTick => Some(false),

            Event::Notice(msg) => {
                self.notice.add_message(msg.clone());
                Some(false)
            }

            Event::SeedLoaded(tasks) => {
                self.status_dialog.close();
                self.app_state.load_seed(tasks.clone());
                Some(false)
            }

            Event::SeedFailed(err) => {
                self.app_state.loading = false;
                self.notice.add_message(warn_notice!(
                    format!("Could not load tasks: {}. Press Ctrl+R to retry.", err),
                    Duration::from_secs(5)
                ));
                Some(false)
            }

            Event::KeyboardCtrlR => {
                if self.seed_enabled {
                    self.fetch_seed();
                } else {
                    self.notice.add_message(info_notice!(
                        "Offline",
                        "Fetching demo tasks is disabled."
                    ));
                }
                Some(false)
            }

            // Fallthrough to the route handlers
            _ => None,
        }
    }

    fn handle_home_event(&mut self, event: &Event) -> bool {
        match event {
            Event::KeyboardEnter => self.app_state.route = Route::Tasks,
            Event::KeyboardCtrlC => return true,
            Event::KeyboardCharInput(input) if input.key == Key::Char('q') => return true,
            _ => {}
        }
        false
    }

    fn handle_tasks_event(&mut self, event: &Event) -> bool {
        if self.form.showing() {
            let outcome = self.form.handle_key_event(event);
            self.handle_outcome(outcome);
            return false;
        }

        if self.status_dialog.showing() {
            let outcome = self.status_dialog.handle_key_event(event);
            self.handle_outcome(outcome);
            return false;
        }

        if self.search.showing() {
            self.handle_search_event(event);
            return false;
        }

        if !self.table.editing() {
            match event {
                Event::KeyboardEsc => {
                    self.app_state.route = Route::Home;
                    return false;
                }
                Event::KeyboardCtrlC => return true,
                Event::KeyboardCharInput(input) => match input.key {
                    Key::Char('q') => return true,
                    Key::Char('a') => {
                        self.form.open();
                        return false;
                    }
                    Key::Char('/') => {
                        self.search_backup = self.app_state.query.clone();
                        self.search.open(self.app_state.query.clone());
                        return false;
                    }
                    Key::Char('f') => {
                        self.app_state.cycle_status_filter();
                        return false;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let rows = self.app_state.visible();
        let intent = self.table.handle_key_event(event, &rows);
        if let Some(intent) = intent {
            self.handle_intent(intent);
        }
        false
    }

    fn handle_search_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardEsc | Event::KeyboardCtrlC => {
                self.search.close();
                self.app_state.query = std::mem::take(&mut self.search_backup);
            }
            Event::KeyboardEnter => {
                self.app_state.query = self.search.close().unwrap_or_default();
            }
            _ => {
                self.search.handle_key_event(event);
                self.app_state.query = self.search.text();
            }
        }
    }

    fn handle_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Submit(intent) => self.handle_intent(intent),
            Outcome::Cancel => self.app_state.clear_selection(),
            Outcome::None => {}
        }
    }

    fn handle_intent(&mut self, intent: Intent) {
        log::debug!("Dispatching intent: {:?}", intent);
        let select = matches!(intent, Intent::SelectForStatusChange(_));

        if !self.app_state.dispatch(intent) {
            log::debug!("Intent had no effect");
            return;
        }

        if select {
            if let Some(task) = self.app_state.selected_task() {
                self.status_dialog.open(task);
            }
        }
    }

    fn fetch_seed(&mut self) {
        self.app_state.loading = true;
        if let Err(err) = self.action_tx.send(Action::FetchSeed) {
            log::error!("Failed to request seed tasks: {}", err);
            self.app_state.loading = false;
        }
    }

    fn flush_notices(&mut self) {
        for msg in self.app_state.notices() {
            self.notice.add_message(msg);
        }
    }

    fn empty_text(&self) -> &'static str {
        if self.app_state.loading {
            "Loading tasks..."
        } else if self.app_state.store().is_empty() {
            "No tasks yet. Press 'a' to add one."
        } else {
            "No tasks match the current search or filter."
        }
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let empty_text = self.empty_text();
        terminal.draw(|f| {
            let area = f.area();
            let current_width = area.width;
            if !is_line_width_sufficient(current_width) {
                f.render_widget(
                    Paragraph::new(format!(
                        "I'm too small, make me bigger! I need at least {} cells (current: {})",
                        MIN_WIDTH, current_width
                    ))
                    .wrap(Wrap { trim: true })
                    .alignment(Alignment::Left),
                    area,
                );
                return;
            }

            if self.app_state.route == Route::Home {
                HomeScreen::render(f, area);
                self.notice.render(f, utils::notice_area(area, 30));
                return;
            }

            let [header_area, table_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

            Header {
                tally: self.app_state.tally(),
                filter: self.app_state.status_filter,
                query: &self.app_state.query,
                loading: self.app_state.loading,
            }
            .render(f, header_area);

            let rows = self.app_state.visible();
            self.table.render(f, table_area, &rows, empty_text);
            self.search.render(f, input_box::build_area(table_area));

            if self.form.showing() || self.status_dialog.showing() {
                f.dim_bg();
            }
            self.form.render(f, area);
            self.status_dialog.render(f, area);

            self.notice.render(f, utils::notice_area(area, 30));
        })?;
        Ok(())
    }
}

fn is_line_width_sufficient(line_width: u16) -> bool {
    line_width >= MIN_WIDTH
}
