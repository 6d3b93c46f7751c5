//! Title filtering.

use crate::types::Ticket;

/// Trait for ticket predicates
pub trait TicketFilter {
    fn matches(&self, ticket: &Ticket) -> bool;
}

/// Case-insensitive substring match on the ticket title.
///
/// The needle is trimmed and lowercased once at construction. An empty
/// needle matches every ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// True when the trimmed query is empty.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl TicketFilter for TitleFilter {
    fn matches(&self, ticket: &Ticket) -> bool {
        self.is_empty() || ticket.title.to_lowercase().contains(&self.needle)
    }
}

/// Keep tickets whose title contains `query`, preserving input order.
///
/// A query that is empty after trimming returns the input unchanged.
pub fn filter_by_title(tickets: &[Ticket], query: &str) -> Vec<Ticket> {
    let filter = TitleFilter::new(query);
    if filter.is_empty() {
        return tickets.to_vec();
    }

    tickets
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}
