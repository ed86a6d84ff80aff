use crate::models::Event;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Padding},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input shown on demand. Enter and Esc are left to the
/// owner, which decides whether to commit or discard.
pub struct InputBox<'a> {
    showing: bool,
    input: TextArea<'a>,

    title: String,
    placeholder: String,
    border_color: Color,
}

impl<'a> InputBox<'a> {
    pub fn with_title(mut self, title: &str) -> InputBox<'a> {
        self.set_title(title);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> InputBox<'a> {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_border_color(mut self, color: Color) -> InputBox<'a> {
        self.border_color = color;
        self
    }

    pub fn set_title(&mut self, title: &str) {
        if !title.is_empty() {
            self.title = title.to_string();
        }
    }

    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn open(&mut self, text: impl Into<String>) {
        self.input = self.build_input(text.into());
        self.showing = true;
    }

    /// Hides the box and hands back what was typed.
    pub fn close(&mut self) -> Option<String> {
        if self.showing {
            self.showing = false;
            return Some(self.text());
        }
        None
    }

    pub fn text(&self) -> String {
        self.input.lines().join(" ")
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        f.render_widget(Clear, area);
        f.render_widget(&self.input, area);
    }

    pub fn handle_key_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                self.input.input(input.clone());
            }
            Event::KeyboardPaste(text) => {
                self.input.insert_str(text.replace(['\r', '\n'], " "));
            }
            _ => {}
        }
    }

    fn build_input(&self, text: String) -> TextArea<'a> {
        let mut text_area = TextArea::new(vec![text]);
        let block = Block::default()
            .title(Line::from(self.title.clone()).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color))
            .padding(Padding::symmetric(1, 0));
        text_area.set_block(block);
        text_area.set_placeholder_text(&self.placeholder);
        text_area.set_cursor_line_style(Style::default());
        text_area.move_cursor(CursorMove::End);
        text_area
    }
}

impl Default for InputBox<'_> {
    fn default() -> Self {
        Self {
            showing: false,
            input: TextArea::default(),
            title: " Input ".to_string(),
            placeholder: "Type here...".to_string(),
            border_color: Color::LightMagenta,
        }
    }
}

/// A three-row strip at the bottom of `area`, inset by one column.
pub fn build_area(area: Rect) -> Rect {
    let height = 3.min(area.height);
    let width = area.width.saturating_sub(2);
    Rect::new(area.x + 1, area.y + area.height - height, width, height)
}
