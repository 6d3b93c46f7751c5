//! Ticket ordering.
//!
//! Tickets are ordered by priority weight (highest first), then by
//! `updated_at` (most recent first). Remaining ties keep their input order.

use std::cmp::Ordering;

use crate::types::Ticket;

/// Compare two tickets by business rules.
pub fn compare_tickets(a: &Ticket, b: &Ticket) -> Ordering {
    b.priority
        .weight()
        .cmp(&a.priority.weight())
        .then_with(|| b.updated_at.cmp(&a.updated_at))
}

/// Return a new, ordered copy of `tickets`. The input is left untouched.
pub fn sort_tickets(tickets: &[Ticket]) -> Vec<Ticket> {
    let mut sorted = tickets.to_vec();
    // `sort_by` is stable, so exact ties keep their relative order.
    sorted.sort_by(compare_tickets);
    sorted
}
