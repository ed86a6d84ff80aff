#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use crate::{config::constants::FRAME_DURATION, models::Event};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind, MouseEventKind};
use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::{Input, Key};

use super::CrosstermStream;

pub struct EventService {
    crossterm_events: Box<dyn CrosstermStream>,
    event_rx: mpsc::UnboundedReceiver<Event>,
    event_tx: mpsc::UnboundedSender<Event>,
}

impl EventService {
    pub fn new(crossterm_events: Box<dyn CrosstermStream>) -> EventService {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
        EventService {
            crossterm_events,
            event_rx,
            event_tx,
        }
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => Some(Event::KeyboardPaste(text)),
            CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(Event::UiScrollUp),
                MouseEventKind::ScrollDown => Some(Event::UiScrollDown),
                _ => None,
            },
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }

                let input: Input = key_event.into();

                // Map ctrl events
                if input.ctrl {
                    return match input.key {
                        Key::Char('u') => Some(Event::UiScrollPageUp),
                        Key::Char('d') => Some(Event::UiScrollPageDown),
                        Key::Char('q') => Some(Event::Quit),
                        Key::Char('c') => Some(Event::KeyboardCtrlC),
                        Key::Char('r') => Some(Event::KeyboardCtrlR),
                        _ => None,
                    };
                }

                match input.key {
                    Key::Esc => Some(Event::KeyboardEsc),
                    Key::Enter => Some(Event::KeyboardEnter),
                    Key::Tab => Some(Event::KeyboardTab),
                    Key::Up => Some(Event::UiScrollUp),
                    Key::Down => Some(Event::UiScrollDown),
                    Key::PageUp => Some(Event::UiScrollPageUp),
                    Key::PageDown => Some(Event::UiScrollPageDown),
                    _ => Some(Event::KeyboardCharInput(input)),
                }
            }
            _ => None,
        }
    }

    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub async fn next(&mut self) -> Event {
        loop {
            let e = tokio::select! {
                event = self.event_rx.recv() => event,
                event = self.crossterm_events.next().fuse() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => {
                        log::warn!("Failed to read terminal event: {}", err);
                        None
                    }
                    None => None,
                },
                _ = time::sleep(FRAME_DURATION) => Some(Event::UiTick)
            };

            if let Some(event) = e {
                return event;
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        Self::new(Box::new(EventStream::new()))
    }
}
