use ratatui::style::Color;

#[macro_export]
macro_rules! info_notice {
    ($title:expr, $msg:expr) => {
        $crate::models::NoticeMessage::info($msg).with_title($title)
    };
    ($title:expr, $msg:expr, $duration:expr) => {
        $crate::models::NoticeMessage::info($msg)
            .with_title($title)
            .with_duration($duration)
    };
}

#[macro_export]
macro_rules! success_notice {
    ($title:expr, $msg:expr) => {
        $crate::models::NoticeMessage::success($msg).with_title($title)
    };
}

#[macro_export]
macro_rules! warn_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::warning($msg)
    };
    ($msg:expr, $duration:expr) => {
        $crate::models::NoticeMessage::warning($msg).with_duration($duration)
    };
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMessage {
    title: Option<String>,
    message: String,
    kind: NoticeKind,
    duration: Option<std::time::Duration>,
}

impl NoticeMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(NoticeKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(NoticeKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(NoticeKind::Warning)
    }

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            kind: NoticeKind::Info,
            duration: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_kind(mut self, kind: NoticeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_duration(mut self, duration: std::time::Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn duration(&self) -> Option<std::time::Duration> {
        self.duration
    }
}

impl NoticeKind {
    pub fn border_color(&self) -> Color {
        match self {
            NoticeKind::Info => Color::Rgb(30, 136, 229),
            NoticeKind::Success => Color::Rgb(67, 160, 71),
            NoticeKind::Warning => Color::Rgb(251, 140, 0),
        }
    }

    pub fn text_color(&self) -> Color {
        match self {
            NoticeKind::Info => Color::Rgb(144, 202, 249),
            NoticeKind::Success => Color::Rgb(165, 214, 167),
            NoticeKind::Warning => Color::Rgb(255, 213, 79),
        }
    }
}
