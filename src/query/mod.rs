//! Ordering and filtering of ticket collections.
//!
//! Both stages are pure: they copy their input and never reorder or mutate
//! the caller's slice.

pub mod filter;
pub mod sort;

pub use filter::{TicketFilter, TitleFilter, filter_by_title};
pub use sort::{compare_tickets, sort_tickets};
