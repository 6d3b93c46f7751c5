//! Accordion panel visibility.
//!
//! Two representations of "open" coexist:
//!
//! - the remembered [`OpenIds`] set, which may keep ids of tickets that the
//!   current filter hides, so clearing the filter restores them;
//! - the visible view computed by [`AccordionState::visible_open_ids`], which
//!   only ever contains ids present in the filtered list and honours the
//!   cardinality of the current [`AccordionMode`].
//!
//! Every method takes the current filtered list explicitly; nothing here
//! caches derived state.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::TicketDeskError;
use crate::types::Ticket;

/// Insertion-ordered set of ticket ids believed to be expanded.
pub type OpenIds = IndexSet<String>;

/// How many panels may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccordionMode {
    /// Exactly one panel open whenever any ticket is visible.
    #[default]
    Single,
    /// Any number of panels open independently.
    Multiple,
}

enum_display_fromstr!(
    AccordionMode,
    TicketDeskError::InvalidMode,
    {
        Single => "single",
        Multiple => "multiple",
    }
);

/// Panel positions within the filtered list, as reported by index-based UIs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelSelection {
    #[default]
    None,
    One(usize),
    Many(Vec<usize>),
}

impl PanelSelection {
    pub fn indices(&self) -> &[usize] {
        match self {
            PanelSelection::None => &[],
            PanelSelection::One(index) => std::slice::from_ref(index),
            PanelSelection::Many(indices) => indices,
        }
    }
}

impl From<usize> for PanelSelection {
    fn from(index: usize) -> Self {
        PanelSelection::One(index)
    }
}

impl From<Option<usize>> for PanelSelection {
    fn from(index: Option<usize>) -> Self {
        index.map_or(PanelSelection::None, PanelSelection::One)
    }
}

impl From<Vec<usize>> for PanelSelection {
    fn from(indices: Vec<usize>) -> Self {
        PanelSelection::Many(indices)
    }
}

impl From<&[usize]> for PanelSelection {
    fn from(indices: &[usize]) -> Self {
        PanelSelection::Many(indices.to_vec())
    }
}

/// Outcome of [`AccordionState::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Multiple mode tolerates hidden ids; nothing to repair.
    Untouched,
    /// A remembered id is still visible and stays open.
    Kept,
    /// Nothing is visible, so nothing can be open.
    Cleared,
    /// No remembered id was visible; the first visible ticket was opened.
    OpenedFirst,
}

/// Remembered open panels plus the mode that governs them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub mode: AccordionMode,
    pub open_ids: OpenIds,
}

impl AccordionState {
    pub fn new(mode: AccordionMode) -> Self {
        Self {
            mode,
            open_ids: OpenIds::new(),
        }
    }

    /// Ids to render as expanded for the given filtered list.
    ///
    /// In multiple mode this is every remembered id that is visible, in
    /// filtered order. In single mode it is the first remembered id (by
    /// insertion) that is visible, falling back to the first visible ticket;
    /// it is empty only when `filtered` is.
    pub fn visible_open_ids(&self, filtered: &[Ticket]) -> Vec<String> {
        match self.mode {
            AccordionMode::Multiple => filtered
                .iter()
                .filter(|t| self.open_ids.contains(&t.id))
                .map(|t| t.id.clone())
                .collect(),
            AccordionMode::Single => {
                let Some(first) = filtered.first() else {
                    return Vec::new();
                };
                let visible = visible_ids(filtered);
                let id = self
                    .open_ids
                    .iter()
                    .find(|id| visible.contains(id.as_str()))
                    .unwrap_or(&first.id);
                vec![id.clone()]
            }
        }
    }

    /// Positions within `filtered` of the visible open ids.
    ///
    /// Ids that cannot be located are dropped.
    pub fn open_panel_indices(&self, filtered: &[Ticket]) -> Vec<usize> {
        self.visible_open_ids(filtered)
            .iter()
            .filter_map(|id| filtered.iter().position(|t| &t.id == id))
            .collect()
    }

    /// Restore the visibility invariant after `filtered` or the mode changed.
    pub fn reconcile(&mut self, filtered: &[Ticket]) -> Reconciled {
        if self.mode == AccordionMode::Multiple {
            return Reconciled::Untouched;
        }

        let Some(first) = filtered.first() else {
            self.open_ids.clear();
            return Reconciled::Cleared;
        };

        let visible = visible_ids(filtered);
        if self.open_ids.iter().any(|id| visible.contains(id.as_str())) {
            return Reconciled::Kept;
        }

        self.open_ids.clear();
        self.open_ids.insert(first.id.clone());
        Reconciled::OpenedFirst
    }

    /// Toggle the panel for `id`. Returns `false` when `id` is not visible,
    /// in which case nothing changes.
    pub fn toggle(&mut self, id: &str, filtered: &[Ticket]) -> bool {
        if !filtered.iter().any(|t| t.id == id) {
            return false;
        }

        match self.mode {
            AccordionMode::Single => {
                self.open_ids.clear();
                self.open_ids.insert(id.to_string());
            }
            AccordionMode::Multiple => {
                if !self.open_ids.shift_remove(id) {
                    self.open_ids.insert(id.to_string());
                }
            }
        }
        true
    }

    /// Replace the remembered set with the tickets at `selection`'s positions.
    ///
    /// Out-of-range positions are ignored. Single mode never ends with
    /// nothing open while tickets are visible.
    pub fn set_open_indices(&mut self, selection: &PanelSelection, filtered: &[Ticket]) {
        self.open_ids = selection
            .indices()
            .iter()
            .filter_map(|&index| filtered.get(index))
            .map(|t| t.id.clone())
            .collect();

        if self.mode == AccordionMode::Single && self.open_ids.is_empty() {
            self.reconcile(filtered);
        }
    }

    /// Close every visible panel, keeping hidden ones remembered.
    ///
    /// No-op in single mode. Returns how many ids were removed.
    pub fn close_all_visible(&mut self, filtered: &[Ticket]) -> usize {
        if self.mode != AccordionMode::Multiple {
            return 0;
        }

        let visible = visible_ids(filtered);
        let before = self.open_ids.len();
        self.open_ids.retain(|id| !visible.contains(id.as_str()));
        before - self.open_ids.len()
    }
}

fn visible_ids(filtered: &[Ticket]) -> HashSet<&str> {
    filtered.iter().map(|t| t.id.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Timestamp;

    use super::*;
    use crate::types::Priority;

    fn tickets(ids: &[&str]) -> Vec<Ticket> {
        ids.iter()
            .map(|id| {
                Ticket::new(
                    *id,
                    format!("Ticket {id}"),
                    Priority::Medium,
                    Timestamp::UNIX_EPOCH,
                )
            })
            .collect()
    }

    fn state(mode: AccordionMode, open: &[&str]) -> AccordionState {
        AccordionState {
            mode,
            open_ids: open.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_mode_from_str_and_default() {
        assert_eq!(AccordionMode::default(), AccordionMode::Single);
        assert_eq!(AccordionMode::from_str("Multiple").unwrap(), AccordionMode::Multiple);
        assert!(matches!(
            AccordionMode::from_str("many"),
            Err(TicketDeskError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_panel_selection_conversions() {
        assert_eq!(PanelSelection::from(2usize).indices(), &[2]);
        assert_eq!(PanelSelection::from(None::<usize>).indices(), &[] as &[usize]);
        assert_eq!(PanelSelection::from(vec![0usize, 3]).indices(), &[0, 3]);
        assert_eq!(PanelSelection::from(&[1usize][..]).indices(), &[1]);
    }

    // ========================================================================
    // visible_open_ids
    // ========================================================================

    #[test]
    fn test_multiple_visible_is_intersection_in_filtered_order() {
        let filtered = tickets(&["a", "b", "c"]);
        let s = state(AccordionMode::Multiple, &["c", "hidden", "a"]);
        assert_eq!(s.visible_open_ids(&filtered), vec!["a", "c"]);
    }

    #[test]
    fn test_multiple_visible_may_be_empty() {
        let filtered = tickets(&["a", "b"]);
        let s = state(AccordionMode::Multiple, &[]);
        assert!(s.visible_open_ids(&filtered).is_empty());
    }

    #[test]
    fn test_single_visible_empty_when_filtered_empty() {
        let s = state(AccordionMode::Single, &["a"]);
        assert!(s.visible_open_ids(&[]).is_empty());
    }

    #[test]
    fn test_single_visible_picks_first_by_insertion_order() {
        let filtered = tickets(&["a", "b", "c"]);
        let s = state(AccordionMode::Single, &["hidden", "c", "b"]);
        assert_eq!(s.visible_open_ids(&filtered), vec!["c"]);
    }

    #[test]
    fn test_single_visible_falls_back_to_first_ticket() {
        let filtered = tickets(&["a", "b"]);
        let s = state(AccordionMode::Single, &["hidden"]);
        assert_eq!(s.visible_open_ids(&filtered), vec!["a"]);
    }

    #[test]
    fn test_open_panel_indices() {
        let filtered = tickets(&["a", "b", "c"]);
        let s = state(AccordionMode::Multiple, &["c", "a"]);
        assert_eq!(s.open_panel_indices(&filtered), vec![0, 2]);

        let s = state(AccordionMode::Single, &["b"]);
        assert_eq!(s.open_panel_indices(&filtered), vec![1]);
        assert!(s.open_panel_indices(&[]).is_empty());
    }

    // ========================================================================
    // reconcile
    // ========================================================================

    #[test]
    fn test_reconcile_multiple_leaves_stale_ids() {
        let mut s = state(AccordionMode::Multiple, &["hidden"]);
        assert_eq!(s.reconcile(&tickets(&["a"])), Reconciled::Untouched);
        assert!(s.open_ids.contains("hidden"));
    }

    #[test]
    fn test_reconcile_single_clears_when_nothing_visible() {
        let mut s = state(AccordionMode::Single, &["a"]);
        assert_eq!(s.reconcile(&[]), Reconciled::Cleared);
        assert!(s.open_ids.is_empty());
    }

    #[test]
    fn test_reconcile_single_keeps_visible_open_id_untouched() {
        let mut s = state(AccordionMode::Single, &["hidden", "b"]);
        assert_eq!(s.reconcile(&tickets(&["a", "b"])), Reconciled::Kept);
        assert_eq!(s.open_ids.len(), 2);
    }

    #[test]
    fn test_reconcile_single_opens_first_when_none_visible() {
        let mut s = state(AccordionMode::Single, &["hidden"]);
        assert_eq!(s.reconcile(&tickets(&["a", "b"])), Reconciled::OpenedFirst);
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    // ========================================================================
    // toggle
    // ========================================================================

    #[test]
    fn test_toggle_invisible_id_is_ignored() {
        let mut s = state(AccordionMode::Multiple, &["a"]);
        assert!(!s.toggle("zzz", &tickets(&["a", "b"])));
        assert_eq!(s, state(AccordionMode::Multiple, &["a"]));
    }

    #[test]
    fn test_toggle_single_replaces() {
        let filtered = tickets(&["a", "b"]);
        let mut s = state(AccordionMode::Single, &["a"]);
        assert!(s.toggle("b", &filtered));
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["b"]);

        // Toggling the open panel keeps it open in single mode
        assert!(s.toggle("b", &filtered));
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_toggle_multiple_flips_membership() {
        let filtered = tickets(&["a", "b"]);
        let mut s = state(AccordionMode::Multiple, &[]);
        s.toggle("a", &filtered);
        s.toggle("b", &filtered);
        assert_eq!(s.open_ids.len(), 2);
        s.toggle("a", &filtered);
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["b"]);
    }

    // ========================================================================
    // set_open_indices
    // ========================================================================

    #[test]
    fn test_set_open_indices_replaces_wholesale() {
        let filtered = tickets(&["a", "b", "c"]);
        let mut s = state(AccordionMode::Multiple, &["hidden", "a"]);
        s.set_open_indices(&PanelSelection::Many(vec![2, 1, 9]), &filtered);
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn test_set_open_indices_none_closes_everything_in_multiple() {
        let filtered = tickets(&["a", "b"]);
        let mut s = state(AccordionMode::Multiple, &["hidden", "a"]);
        s.set_open_indices(&PanelSelection::None, &filtered);
        assert!(s.open_ids.is_empty());
    }

    #[test]
    fn test_set_open_indices_none_in_single_reopens_first() {
        let filtered = tickets(&["a", "b"]);
        let mut s = state(AccordionMode::Single, &["b"]);
        s.set_open_indices(&PanelSelection::None, &filtered);
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_set_open_indices_out_of_range_in_single_reopens_first() {
        let filtered = tickets(&["a", "b"]);
        let mut s = state(AccordionMode::Single, &[]);
        s.set_open_indices(&PanelSelection::One(7), &filtered);
        assert_eq!(s.visible_open_ids(&filtered), vec!["a"]);
        assert_eq!(s.open_ids.len(), 1);
    }

    #[test]
    fn test_set_open_indices_single_index() {
        let filtered = tickets(&["a", "b"]);
        let mut s = state(AccordionMode::Single, &["a"]);
        s.set_open_indices(&PanelSelection::One(1), &filtered);
        assert_eq!(s.open_panel_indices(&filtered), vec![1]);
    }

    // ========================================================================
    // close_all_visible
    // ========================================================================

    #[test]
    fn test_close_all_visible_is_noop_in_single() {
        let mut s = state(AccordionMode::Single, &["a"]);
        assert_eq!(s.close_all_visible(&tickets(&["a"])), 0);
        assert!(s.open_ids.contains("a"));
    }

    #[test]
    fn test_close_all_visible_keeps_hidden_ids() {
        let mut s = state(AccordionMode::Multiple, &["a", "hidden", "b"]);
        assert_eq!(s.close_all_visible(&tickets(&["a", "b", "c"])), 2);
        assert_eq!(s.open_ids.iter().collect::<Vec<_>>(), vec!["hidden"]);
    }
}
