//! In-memory ticket source with demo seed data.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::source::TicketSource;
use crate::ticket::{TicketRecord, records_to_tickets};
use crate::types::{Priority, Ticket};

/// Serves a fixed set of tickets, optionally after a simulated delay.
#[derive(Debug, Clone)]
pub struct InMemoryTicketSource {
    tickets: Vec<Ticket>,
    latency: Duration,
}

impl InMemoryTicketSource {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets,
            latency: Duration::ZERO,
        }
    }

    /// Source preloaded with the demo tickets.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(records_to_tickets(seed_records())?))
    }

    /// Delay every load by `latency`, simulating a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl TicketSource for InMemoryTicketSource {
    async fn load_all(&self) -> Result<Vec<Ticket>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.tickets.clone())
    }
}

/// Demo tickets used by the seeded source.
pub fn seed_records() -> Vec<TicketRecord> {
    let seed = [
        (
            "1",
            "Safari: checkout button not responding",
            Priority::High,
            "2025-01-19",
            "The checkout button does not respond to clicks in Safari (macOS and iOS). \
             Users have to reload the page several times before they can complete a purchase.",
        ),
        (
            "2",
            "Add dark mode",
            Priority::Medium,
            "2025-02-10",
            "Implement a dark theme across the application. Include a toggle in user \
             settings and remember the preference.",
        ),
        (
            "3",
            "Tooltip overlaps the header",
            Priority::Low,
            "2025-02-01",
            "Info tooltips in the products section render above the sticky header, \
             causing a minor visual glitch.",
        ),
        (
            "4",
            "Mobile navigation breaks on rotate",
            Priority::High,
            "2025-02-15",
            "When the device rotates from portrait to landscape the navigation menu does \
             not adjust and some links become unreachable.",
        ),
        (
            "5",
            "Breadcrumbs on product detail",
            Priority::Medium,
            "2025-02-12",
            "Add breadcrumbs to the product detail page to make navigation easier.",
        ),
        (
            "6",
            "Optimize carousel images",
            Priority::Low,
            "2025-01-25",
            "The main carousel images are heavy and hurt performance on slow connections. \
             Lazy load them and serve modern formats (WebP).",
        ),
    ];

    seed.into_iter()
        .map(|(id, title, priority, updated_at, description)| TicketRecord {
            id: id.to_string(),
            title: title.to_string(),
            priority,
            updated_at: updated_at.to_string(),
            description: description.to_string(),
        })
        .collect()
}
