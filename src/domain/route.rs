use std::fmt;

use super::transaction::TransactionId;

/// Navigation targets the waiting screen can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    /// The "order accepted" view for a transaction.
    Accepted(TransactionId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Accepted(id) => format!("/transactions/{id}/accepted"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A one-shot notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn shipped() -> Self {
        Self::new(NoticeKind::Info, "Order shipped", "Your order is on its way.")
    }

    pub fn delivered() -> Self {
        Self::new(NoticeKind::Success, "Order delivered", "Your order has been delivered.")
    }

    pub fn cancelled() -> Self {
        Self::new(NoticeKind::Error, "Order cancelled", "This order has been cancelled.")
    }

    pub fn load_failed(reason: impl fmt::Display) -> Self {
        Self::new(
            NoticeKind::Error,
            "Unable to load transaction",
            format!("The transaction could not be loaded: {reason}"),
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
