use super::status::TransactionStatus;

/// Color family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Yellow,
    Blue,
    Green,
    Indigo,
    Purple,
    Emerald,
    Red,
    Gray,
}

impl BadgeColor {
    /// Utility classes used by the web front ends for this color.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Yellow => "bg-yellow-100 text-yellow-800",
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Indigo => "bg-indigo-100 text-indigo-800",
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Emerald => "bg-emerald-100 text-emerald-800",
            Self::Red => "bg-red-100 text-red-800",
            Self::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

/// A (color, label) pair shown next to a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub color: BadgeColor,
    pub label: String,
}

impl StatusBadge {
    fn new(color: BadgeColor, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

impl TransactionStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            Self::Pending => StatusBadge::new(BadgeColor::Yellow, "Pending"),
            Self::Paid => StatusBadge::new(BadgeColor::Blue, "Paid"),
            Self::Confirmed => StatusBadge::new(BadgeColor::Green, "Confirmed"),
            Self::Processing => StatusBadge::new(BadgeColor::Indigo, "Processing"),
            Self::Shipped => StatusBadge::new(BadgeColor::Purple, "Shipped"),
            Self::Delivered => StatusBadge::new(BadgeColor::Emerald, "Delivered"),
            Self::Cancelled => StatusBadge::new(BadgeColor::Red, "Cancelled"),
            Self::Unknown(raw) => StatusBadge::new(BadgeColor::Gray, capitalize(raw)),
        }
    }
}

/// Maps any raw status string to its badge. Never fails: unknown input gets a
/// gray badge labelled with the capitalized raw string.
pub fn status_badge(raw: &str) -> StatusBadge {
    TransactionStatus::parse(raw).badge()
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
