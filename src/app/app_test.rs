use std::pin::Pin;

use crossterm::event::Event as CrosstermEvent;
use tui_textarea::Input;

use crate::app::services::CrosstermStream;
use crate::models::{Status, Task};

use super::*;

struct IdleStream;

impl CrosstermStream for IdleStream {
    fn next(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = Option<std::result::Result<CrosstermEvent, io::Error>>> + Send + '_>>
    {
        Box::pin(futures::future::pending())
    }
}

fn events() -> EventService {
    EventService::new(Box::new(IdleStream))
}

fn props(route: Route, seed_enabled: bool) -> InitProps {
    InitProps {
        route,
        seed_enabled,
        notice_duration: Duration::from_secs(60),
    }
}

fn key(c: char) -> Event {
    Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ..Default::default()
    })
}

fn send(app: &mut App, event: Event) -> bool {
    let stop = app.handle_event(event);
    app.flush_notices();
    stop
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        send(app, key(c));
    }
}

fn seed() -> Vec<Task> {
    vec![
        Task::new(1, "delectus aut autem", "Not Completed", Status::ToDo),
        Task::new(2, "quis ut nam facilis", "Completed", Status::Done),
    ]
}

#[test]
fn test_navigation() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Home, false),
    );

    assert!(!send(&mut app, Event::KeyboardEnter));
    assert_eq!(app.app_state.route, Route::Tasks);

    assert!(!send(&mut app, Event::KeyboardEsc));
    assert_eq!(app.app_state.route, Route::Home);

    assert!(send(&mut app, key('q')));
    assert!(send(&mut app, Event::Quit));
}

#[test]
fn test_create_task() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, false),
    );

    send(&mut app, key('a'));
    assert!(app.form.showing());

    // 'q' is text inside the form
    type_text(&mut app, "Buy milk q");
    send(&mut app, Event::KeyboardEnter);

    assert!(!app.form.showing());
    let tasks = app.app_state.store().all();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title(), "Buy milk q");
    assert_eq!(tasks[0].status(), Status::ToDo);
    assert_eq!(app.notice.len(), 1);
}

#[test]
fn test_change_status() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, true),
    );

    send(&mut app, Event::SeedLoaded(seed()));
    assert_eq!(app.notice.len(), 1);

    send(&mut app, key('s'));
    assert!(app.status_dialog.showing());

    send(&mut app, key('2'));
    send(&mut app, Event::KeyboardEnter);

    assert!(!app.status_dialog.showing());
    assert_eq!(
        app.app_state.store().get(1).map(Task::status),
        Some(Status::InProgress)
    );
    assert_eq!(app.notice.len(), 2);
}

#[test]
fn test_cancel_status_dialog() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, true),
    );
    send(&mut app, Event::SeedLoaded(seed()));

    send(&mut app, key('s'));
    send(&mut app, key('q'));

    assert!(!app.status_dialog.showing());
    assert!(app.app_state.selected_task().is_none());
    assert_eq!(app.app_state.route, Route::Tasks);
}

#[test]
fn test_delete_from_action_cell() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, true),
    );
    send(&mut app, Event::SeedLoaded(seed()));

    send(&mut app, Event::UiScrollDown);
    for _ in 0..3 {
        send(&mut app, key('l'));
    }
    send(&mut app, Event::KeyboardEnter);

    let ids = app
        .app_state
        .store()
        .all()
        .iter()
        .map(Task::id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_search() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, true),
    );
    send(&mut app, Event::SeedLoaded(seed()));

    send(&mut app, key('/'));
    type_text(&mut app, "quis");
    assert_eq!(app.app_state.query, "quis");
    assert_eq!(app.app_state.visible().len(), 1);

    send(&mut app, Event::KeyboardEnter);
    assert!(!app.search.showing());
    assert_eq!(app.app_state.query, "quis");

    send(&mut app, key('/'));
    type_text(&mut app, "zzz");
    assert!(app.app_state.visible().is_empty());
    send(&mut app, Event::KeyboardEsc);
    assert_eq!(app.app_state.query, "quis");
    assert_eq!(app.app_state.route, Route::Tasks);
}

#[test]
fn test_status_filter() {
    let (action_tx, _action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, true),
    );
    send(&mut app, Event::SeedLoaded(seed()));

    send(&mut app, key('f'));
    assert_eq!(app.app_state.visible().len(), 1);
    send(&mut app, key('f'));
    assert!(app.app_state.visible().is_empty());
    send(&mut app, key('f'));
    send(&mut app, key('f'));
    assert_eq!(app.app_state.visible().len(), 2);
}

#[test]
fn test_refetch_seed() {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, true),
    );

    send(&mut app, Event::KeyboardCtrlR);
    assert_eq!(action_rx.try_recv().ok(), Some(Action::FetchSeed));
    assert!(app.app_state.loading);

    send(&mut app, Event::SeedFailed("HTTP 503".to_string()));
    assert!(!app.app_state.loading);
    assert_eq!(app.notice.len(), 1);
}

#[test]
fn test_refetch_seed_offline() {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut events = events();
    let mut app = App::new(
        action_tx,
        &mut events,
        CancellationToken::new(),
        props(Route::Tasks, false),
    );

    send(&mut app, Event::KeyboardCtrlR);
    assert!(action_rx.try_recv().is_err());
    assert!(!app.app_state.loading);
    assert_eq!(app.notice.len(), 1);
}
