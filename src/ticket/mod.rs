mod record;

pub use record::{
    TicketRecord, format_date_for_display, midnight_utc, parse_date, records_to_tickets,
};
