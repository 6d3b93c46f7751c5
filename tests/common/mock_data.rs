//! Mock data builders for creating test tickets and sources.
//!
//! Builds tickets in memory so store tests never touch the disk.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jiff::Timestamp;
use ticketdesk::ticket::parse_date;
use ticketdesk::{Priority, Result, Ticket, TicketDeskError, TicketSource};

/// Builder for creating test tickets
pub struct TicketBuilder {
    ticket: Ticket,
}

impl TicketBuilder {
    /// Create a new ticket builder with the given ID
    pub fn new(id: &str) -> Self {
        Self {
            ticket: Ticket::new(
                id,
                format!("Test ticket {id}"),
                Priority::Medium,
                parse_date("2025-01-01").expect("test date should be valid"),
            ),
        }
    }

    /// Set the ticket title
    pub fn title(mut self, title: &str) -> Self {
        self.ticket.title = title.to_string();
        self
    }

    /// Set the ticket priority
    pub fn priority(mut self, priority: Priority) -> Self {
        self.ticket.priority = priority;
        self
    }

    /// Set the last update, as `YYYY-MM-DD`
    pub fn updated(mut self, date: &str) -> Self {
        self.ticket.updated_at = parse_date(date).expect("test date should be valid");
        self
    }

    /// Set the last update to an exact instant
    pub fn updated_at(mut self, ts: Timestamp) -> Self {
        self.ticket.updated_at = ts;
        self
    }

    /// Set the description
    pub fn description(mut self, description: &str) -> Self {
        self.ticket.description = description.to_string();
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        self.ticket
    }
}

/// Create a ticket with a title, priority and update date
pub fn mock_ticket(id: &str, title: &str, priority: Priority, updated: &str) -> Ticket {
    TicketBuilder::new(id)
        .title(title)
        .priority(priority)
        .updated(updated)
        .build()
}

/// The A/B/C scenario: two high priority tickets and one recent low one
pub fn abc_tickets() -> Vec<Ticket> {
    vec![
        mock_ticket("C", "Cache is stale", Priority::Low, "2025-02-20"),
        mock_ticket("B", "Billing export broken", Priority::High, "2025-01-01"),
        mock_ticket("A", "Login fails", Priority::High, "2025-02-15"),
    ]
}

/// Source that always fails and counts how often it was asked
#[derive(Default)]
pub struct FailingSource {
    pub calls: AtomicUsize,
}

impl FailingSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TicketSource for FailingSource {
    async fn load_all(&self) -> Result<Vec<Ticket>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TicketDeskError::SourceFailure("backend unavailable".to_string()))
    }
}
