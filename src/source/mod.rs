//! Ticket sources.
//!
//! A [`TicketSource`] hands the store an unordered collection of tickets.
//! Sources are injected into [`crate::store::TicketStore`] at construction;
//! there is no global instance.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Ticket;

mod file;
mod memory;

pub use file::FileTicketSource;
pub use memory::{InMemoryTicketSource, seed_records};

/// Supplies the full ticket collection.
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Load every ticket. Order is not significant.
    async fn load_all(&self) -> Result<Vec<Ticket>>;
}

#[async_trait]
impl<S: TicketSource + ?Sized> TicketSource for Arc<S> {
    async fn load_all(&self) -> Result<Vec<Ticket>> {
        (**self).load_all().await
    }
}

#[async_trait]
impl<S: TicketSource + ?Sized> TicketSource for Box<S> {
    async fn load_all(&self) -> Result<Vec<Ticket>> {
        (**self).load_all().await
    }
}
