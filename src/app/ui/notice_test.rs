use ratatui::{Terminal, backend::TestBackend};

use crate::{info_notice, warn_notice};

use super::*;

fn render(notice: &mut Notice, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            notice.render(f, area)
        })
        .expect("failed to draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

#[test]
fn test_render_newest_first() {
    let mut notice = Notice::new(Duration::from_secs(60));
    notice.add_message(info_notice!("Task Edited", "Changes to the task were saved!"));
    notice.add_message(warn_notice!("Could not load tasks"));

    let screen = render(&mut notice, 40, 12);
    let warning = screen.find("Could not load tasks").expect("missing warning");
    let edited = screen.find("Task Edited").expect("missing title");
    assert!(warning < edited);
    assert!(screen.contains("Changes to the task were saved!"));
}

#[test]
fn test_expired_notices_are_dropped() {
    let mut notice = Notice::new(Duration::from_secs(60));
    notice.add_message(warn_notice!("gone", Duration::from_millis(0)));
    notice.add_message(info_notice!("Task Added", "kept"));

    render(&mut notice, 40, 12);
    assert_eq!(notice.len(), 1);
}

#[test]
fn test_render_in_tiny_area() {
    let mut notice = Notice::default();
    notice.add_message(info_notice!("Task Added", "The task was successfully added!"));

    let screen = render(&mut notice, 6, 2);
    assert!(!screen.contains("Task"));
    assert!(!notice.is_empty());
}
