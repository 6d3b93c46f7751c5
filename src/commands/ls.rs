use std::path::PathBuf;

use super::{CommandOutput, OutputOptions};
use crate::accordion::AccordionMode;
use crate::config::Config;
use crate::display::{AccordionView, render_accordion};
use crate::error::Result;
use crate::source::TicketSource;
use crate::store::TicketStore;

/// Options for `ticketdesk ls`
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    /// Title query; overrides the configured query
    pub query: Option<String>,
    /// Accordion mode; overrides the configured mode
    pub mode: Option<AccordionMode>,
    /// Ticket ids to toggle, in order
    pub toggle: Vec<String>,
    /// Panel positions to open, replacing whatever is open
    pub open_indices: Vec<usize>,
    /// Close every visible panel afterwards
    pub close_all: bool,
    /// Ticket file; overrides the configured source
    pub source: Option<PathBuf>,
}

/// List tickets as an accordion
pub async fn cmd_ls(options: LsOptions, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(path) = options.source.clone() {
        config.source.path = Some(path);
    }
    let source = config.source.build()?;

    let store = build_store(source, &config, &options).await?;
    let view = AccordionView::from_store(&store);

    let text = render_accordion(&view, !output.json);
    CommandOutput::new(serde_json::to_value(&view)?)
        .with_text(text)
        .print(output)
}

/// Load tickets, then apply mode, query and panel actions in that order.
pub async fn build_store<S: TicketSource>(
    source: S,
    config: &Config,
    options: &LsOptions,
) -> Result<TicketStore<S>> {
    let mode = options.mode.unwrap_or(config.mode);
    let mut store = TicketStore::with_mode(source, mode);
    store.load().await?;

    let query = options.query.as_deref().unwrap_or(&config.query);
    store.set_query(query);

    for id in &options.toggle {
        store.toggle_open(id);
    }
    if !options.open_indices.is_empty() {
        store.set_open_indices(options.open_indices.clone());
    }
    if options.close_all {
        store.close_all_visible();
    }

    Ok(store)
}
