//! Ticket store: the state engine behind the accordion.
//!
//! The store owns the loaded tickets, the current query and the accordion
//! state. `sorted`, `filtered` and the visible-open views are recomputed from
//! that state on every read. Every mutation that can change the filtered list
//! runs the accordion reconciliation before returning.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::accordion::{AccordionMode, AccordionState, OpenIds, PanelSelection, Reconciled};
use crate::error::Result;
use crate::query::{filter_by_title, sort_tickets};
use crate::source::TicketSource;
use crate::types::Ticket;

/// Shared, read-only view of whether a load is in flight.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn engage(&self) -> LoadingGuard {
        self.0.store(true, Ordering::Release);
        LoadingGuard(self.clone())
    }
}

/// Clears the loading flag when dropped, whether the load finished,
/// failed, or its future was dropped mid-flight.
struct LoadingGuard(LoadingFlag);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}

/// State engine for a filterable ticket accordion.
pub struct TicketStore<S> {
    source: S,
    all: Vec<Ticket>,
    query: String,
    accordion: AccordionState,
    loading: LoadingFlag,
}

impl<S: TicketSource> TicketStore<S> {
    /// Create an empty store in single mode.
    pub fn new(source: S) -> Self {
        Self::with_mode(source, AccordionMode::default())
    }

    pub fn with_mode(source: S, mode: AccordionMode) -> Self {
        Self {
            source,
            all: Vec::new(),
            query: String::new(),
            accordion: AccordionState::new(mode),
            loading: LoadingFlag::default(),
        }
    }

    /// Replace all tickets with a fresh load from the source.
    ///
    /// On failure the previous tickets are kept and the error is returned.
    /// The loading flag is cleared in every case.
    pub async fn load(&mut self) -> Result<()> {
        let _guard = self.loading.engage();

        let tickets = match self.source.load_all().await {
            Ok(tickets) => tickets,
            Err(e) => {
                warn!("failed to load tickets: {e}");
                return Err(e);
            }
        };

        info!(count = tickets.len(), "loaded tickets");
        self.all = tickets;
        self.reconcile();
        Ok(())
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> TicketStore<S> {
    /// Every loaded ticket, in source order.
    pub fn all(&self) -> &[Ticket] {
        &self.all
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> AccordionMode {
        self.accordion.mode
    }

    /// Remembered open ids, including ones hidden by the current filter.
    pub fn open_ids(&self) -> &OpenIds {
        &self.accordion.open_ids
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Handle for observing the loading flag from elsewhere.
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// All tickets ordered by priority, then recency.
    pub fn sorted(&self) -> Vec<Ticket> {
        sort_tickets(&self.all)
    }

    /// Sorted tickets matching the current query.
    pub fn filtered(&self) -> Vec<Ticket> {
        filter_by_title(&self.sorted(), &self.query)
    }

    /// Ids of the panels to render expanded.
    pub fn visible_open_ids(&self) -> Vec<String> {
        self.accordion.visible_open_ids(&self.filtered())
    }

    /// The single expanded panel, for single-open presentations.
    pub fn visible_open_id(&self) -> Option<String> {
        self.visible_open_ids().into_iter().next()
    }

    /// Positions within [`Self::filtered`] of the expanded panels.
    pub fn open_panel_indices(&self) -> Vec<usize> {
        self.accordion.open_panel_indices(&self.filtered())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reconcile();
    }

    pub fn set_mode(&mut self, mode: AccordionMode) {
        self.accordion.mode = mode;
        self.reconcile();
    }

    /// Open or close the panel for `id`. Ids not currently visible are ignored.
    pub fn toggle_open(&mut self, id: &str) {
        let filtered = self.filtered();
        if !self.accordion.toggle(id, &filtered) {
            debug!(id, "ignoring toggle for ticket that is not visible");
        }
    }

    /// Replace the open panels with the tickets at the given positions.
    pub fn set_open_indices(&mut self, selection: impl Into<PanelSelection>) {
        let selection = selection.into();
        let filtered = self.filtered();
        self.accordion.set_open_indices(&selection, &filtered);
    }

    /// Close every visible panel (multiple mode only).
    pub fn close_all_visible(&mut self) {
        let filtered = self.filtered();
        let closed = self.accordion.close_all_visible(&filtered);
        debug!(closed, mode = %self.accordion.mode, "closed visible panels");
    }

    fn reconcile(&mut self) {
        let filtered = self.filtered();
        let outcome = self.accordion.reconcile(&filtered);
        if outcome != Reconciled::Untouched {
            debug!(?outcome, visible = filtered.len(), "reconciled open panels");
        }
    }
}
