use ratatui::{Terminal, backend::TestBackend};
use tui_textarea::Input;

use crate::models::Status;

use super::*;

fn key(c: char) -> Event {
    Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ..Default::default()
    })
}

fn tasks() -> Vec<Task> {
    vec![
        Task::new(1, "delectus aut autem", "Not Completed", Status::ToDo),
        Task::new(2, "quis ut nam", "Not Completed", Status::InProgress),
        Task::new(3, "fugiat veniam", "Completed", Status::Done),
    ]
}

#[test]
fn test_row_navigation_is_clamped() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();

    table.handle_key_event(&key('k'), &rows);
    assert_eq!(table.selected(), Some(0));

    table.handle_key_event(&key('j'), &rows);
    table.handle_key_event(&Event::UiScrollDown, &rows);
    table.handle_key_event(&key('j'), &rows);
    assert_eq!(table.selected(), Some(2));

    table.handle_key_event(&Event::UiScrollPageUp, &rows);
    assert_eq!(table.selected(), Some(0));
}

#[test]
fn test_column_navigation() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();
    assert_eq!(table.column(), Column::Title);

    table.handle_key_event(&key('h'), &rows);
    table.handle_key_event(&key('h'), &rows);
    assert_eq!(table.column(), Column::Id);

    for _ in 0..10 {
        table.handle_key_event(&key('l'), &rows);
    }
    assert_eq!(table.column(), Column::Action);
}

#[test]
fn test_edit_title_in_place() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();

    table.handle_key_event(&key('j'), &rows);
    assert_eq!(table.handle_key_event(&Event::KeyboardEnter, &rows), None);
    assert!(table.editing());

    // Keys go to the input while editing
    table.handle_key_event(&key('!'), &rows);
    assert_eq!(table.selected(), Some(1));

    let intent = table.handle_key_event(&Event::KeyboardEnter, &rows);
    assert_eq!(
        intent,
        Some(Intent::PatchField {
            id: 2,
            field: TaskField::Title,
            value: "quis ut nam!".to_string(),
        })
    );
    assert!(!table.editing());
}

#[test]
fn test_cancel_edit() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();

    table.handle_key_event(&key('l'), &rows);
    table.handle_key_event(&Event::KeyboardEnter, &rows);
    assert!(table.editing());

    table.handle_key_event(&key('x'), &rows);
    assert_eq!(table.handle_key_event(&Event::KeyboardEsc, &rows), None);
    assert!(!table.editing());
}

#[test]
fn test_status_and_action_cells() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();
    table.handle_key_event(&key('G'), &rows);

    table.handle_key_event(&key('l'), &rows);
    table.handle_key_event(&key('l'), &rows);
    assert_eq!(
        table.handle_key_event(&Event::KeyboardEnter, &rows),
        Some(Intent::SelectForStatusChange(3))
    );

    table.handle_key_event(&Event::KeyboardTab, &rows);
    assert_eq!(
        table.handle_key_event(&Event::KeyboardEnter, &rows),
        Some(Intent::DeleteTask(3))
    );
}

#[test]
fn test_shortcuts() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();

    assert_eq!(
        table.handle_key_event(&key('s'), &rows),
        Some(Intent::SelectForStatusChange(1))
    );
    assert_eq!(
        table.handle_key_event(&key('d'), &rows),
        Some(Intent::DeleteTask(1))
    );
}

#[test]
fn test_no_intent_on_empty_rows() {
    let mut table = TaskTable::new();
    table.sync(0);
    assert_eq!(table.selected(), None);
    assert_eq!(table.handle_key_event(&Event::KeyboardEnter, &[]), None);
    assert_eq!(table.handle_key_event(&key('d'), &[]), None);
    assert!(!table.editing());
}

#[test]
fn test_sync_clamps_selection() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();
    table.handle_key_event(&key('G'), &rows);
    assert_eq!(table.selected(), Some(2));

    table.sync(1);
    assert_eq!(table.selected(), Some(0));
}

#[test]
fn test_render() {
    let tasks = tasks();
    let rows = tasks.iter().collect::<Vec<_>>();
    let mut table = TaskTable::new();

    let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            table.render(f, area, &rows, "No tasks")
        })
        .unwrap();
    let screen = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>();

    assert!(screen.contains("Tasks (3)"));
    assert!(screen.contains("Task ID"));
    assert!(screen.contains("delectus aut autem"));
    assert!(screen.contains("In Progress"));
    assert!(!screen.contains("No tasks"));
}

#[test]
fn test_render_empty() {
    let mut table = TaskTable::new();
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            table.render(f, area, &[], "No tasks")
        })
        .unwrap();
    let screen = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>();

    assert!(screen.contains("Tasks (0)"));
    assert!(screen.contains("No tasks"));
}
