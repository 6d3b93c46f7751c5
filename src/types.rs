use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::TicketDeskError;

/// Business priority of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

enum_display_fromstr!(
    Priority,
    TicketDeskError::InvalidPriority,
    {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
);

impl Priority {
    /// Comparison weight; higher sorts first.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Human readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Semantic tone used by the display layer.
    pub fn color(&self) -> Tone {
        match self {
            Priority::High => Tone::Error,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Success,
        }
    }
}

/// Semantic color, mapped to concrete terminal colors when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Warning,
    Success,
}

/// A support ticket. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub description: String,
    pub updated_at: Timestamp,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        priority: Priority,
        updated_at: Timestamp,
    ) -> Self {
        Ticket {
            id: id.into(),
            title: title.into(),
            priority,
            description: String::new(),
            updated_at,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
