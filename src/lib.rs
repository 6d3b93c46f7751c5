#[macro_use]
mod macros;

pub mod accordion;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod paths;
pub mod query;
pub mod source;
pub mod store;
pub mod ticket;
pub mod types;

#[cfg(test)]
mod test_guards;

pub use accordion::{AccordionMode, AccordionState, OpenIds, PanelSelection, Reconciled};
pub use config::{Config, SourceConfig};
pub use error::{Result, TicketDeskError};
pub use query::{compare_tickets, filter_by_title, sort_tickets};
pub use source::{FileTicketSource, InMemoryTicketSource, TicketSource};
pub use store::{LoadingFlag, TicketStore};
pub use ticket::{TicketRecord, format_date_for_display, parse_date};
pub use types::{Priority, Ticket, Tone};
