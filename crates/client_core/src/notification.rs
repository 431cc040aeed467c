//! Notification kinds and their fixed presentation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Delete,
    Update,
    Error,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Success,
    Error,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStyle {
    pub title: &'static str,
    pub icon: NotificationIcon,
    pub style_class: &'static str,
}

const PRESENTATION: [(NotificationKind, NotificationStyle); 5] = [
    (
        NotificationKind::Success,
        NotificationStyle {
            title: "Success",
            icon: NotificationIcon::Success,
            style_class: "compact toast-success",
        },
    ),
    (
        NotificationKind::Delete,
        NotificationStyle {
            title: "Delete",
            icon: NotificationIcon::Success,
            style_class: "compact toast-delete",
        },
    ),
    (
        NotificationKind::Update,
        NotificationStyle {
            title: "Update",
            icon: NotificationIcon::Success,
            style_class: "compact toast-update",
        },
    ),
    (
        NotificationKind::Error,
        NotificationStyle {
            title: "Error",
            icon: NotificationIcon::Error,
            style_class: "compact toast-error",
        },
    ),
    (
        NotificationKind::Message,
        NotificationStyle {
            title: "Message",
            icon: NotificationIcon::None,
            style_class: "compact",
        },
    ),
];

impl NotificationKind {
    /// Maps a free-form kind name; anything unrecognised is a plain message.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "delete" => Self::Delete,
            "update" => Self::Update,
            "error" => Self::Error,
            _ => Self::Message,
        }
    }

    pub fn style(self) -> NotificationStyle {
        PRESENTATION
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, style)| *style)
            .unwrap_or(PRESENTATION[PRESENTATION.len() - 1].1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.style().title
    }

    pub fn icon(&self) -> NotificationIcon {
        self.kind.style().icon
    }
}
