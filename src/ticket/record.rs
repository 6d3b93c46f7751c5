//! Serialized ticket shape and date handling.
//!
//! Sources hand out [`TicketRecord`]s exactly as they appear on disk or in
//! seed data. Converting to a [`Ticket`] normalizes `updated_at` to a
//! [`Timestamp`] so ordering can compare instants directly.

use std::collections::HashSet;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TicketDeskError};
use crate::types::{Priority, Ticket};

/// Ticket as it is stored or transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    /// RFC 3339 timestamp, `YYYY-MM-DD` or `DD/MM/YYYY`.
    #[serde(alias = "updatedAt")]
    pub updated_at: String,
    #[serde(default)]
    pub description: String,
}

impl TicketRecord {
    pub fn into_ticket(self) -> Result<Ticket> {
        let updated_at = parse_date(&self.updated_at)?;
        Ok(Ticket {
            id: self.id,
            title: self.title,
            priority: self.priority,
            description: self.description,
            updated_at,
        })
    }
}

/// Convert a batch of records, rejecting duplicate ids.
pub fn records_to_tickets(records: Vec<TicketRecord>) -> Result<Vec<Ticket>> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id.clone()) {
                return Err(TicketDeskError::DuplicateId(record.id));
            }
            record.into_ticket()
        })
        .collect()
}

/// Parse a date string into an instant.
///
/// Accepts a full RFC 3339 timestamp, an ISO calendar date, or a
/// `DD/MM/YYYY` date. Calendar dates resolve to midnight UTC.
pub fn parse_date(input: &str) -> Result<Timestamp> {
    let trimmed = input.trim();

    if let Ok(ts) = trimmed.parse::<Timestamp>() {
        return Ok(ts);
    }

    if let Ok(date) = trimmed.parse::<Date>() {
        return midnight_utc(date);
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    if let [day, month, year] = parts.as_slice() {
        let day: i8 = day
            .parse()
            .map_err(|_| TicketDeskError::InvalidDate(input.to_string()))?;
        let month: i8 = month
            .parse()
            .map_err(|_| TicketDeskError::InvalidDate(input.to_string()))?;
        let year: i16 = year
            .parse()
            .map_err(|_| TicketDeskError::InvalidDate(input.to_string()))?;
        let date = Date::new(year, month, day)
            .map_err(|_| TicketDeskError::InvalidDate(input.to_string()))?;
        return midnight_utc(date);
    }

    Err(TicketDeskError::InvalidDate(input.to_string()))
}

/// The instant a civil date begins in UTC.
pub fn midnight_utc(date: Date) -> Result<Timestamp> {
    date.to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|e| TicketDeskError::InvalidDate(format!("{date}: {e}")))
}

/// Format an instant as `DD/MM/YYYY` (UTC) for display.
pub fn format_date_for_display(ts: Timestamp) -> String {
    ts.strftime("%d/%m/%Y").to_string()
}
