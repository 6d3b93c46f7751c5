//! Terminal and JSON presentation of the ticket accordion.

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::accordion::AccordionMode;
use crate::store::TicketStore;
use crate::ticket::format_date_for_display;
use crate::types::{Priority, Tone};

/// Column width of the priority badge in accordion headers.
const BADGE_WIDTH: usize = 10;

/// Snapshot of everything a presentation needs to draw the accordion.
#[derive(Debug, Clone, Serialize)]
pub struct AccordionView {
    pub mode: AccordionMode,
    pub query: String,
    pub total: usize,
    pub open_indices: Vec<usize>,
    pub panels: Vec<PanelView>,
}

/// One row of the accordion.
#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub updated: String,
    pub open: bool,
    pub description: String,
}

impl AccordionView {
    pub fn from_store<S>(store: &TicketStore<S>) -> Self {
        let filtered = store.filtered();
        let open = store.visible_open_ids();
        let open_indices = store.open_panel_indices();

        let panels = filtered
            .into_iter()
            .map(|t| PanelView {
                open: open.contains(&t.id),
                updated: format_date_for_display(t.updated_at),
                id: t.id,
                title: t.title,
                priority: t.priority,
                description: t.description,
            })
            .collect();

        Self {
            mode: store.mode(),
            query: store.query().to_string(),
            total: store.all().len(),
            open_indices,
            panels,
        }
    }
}

/// Priority label, colored by its tone when `color` is set and stdout
/// supports it.
pub fn format_priority_badge(priority: Priority, color: bool) -> String {
    paint_priority(&format!("[{}]", priority.label()), priority, color)
}

fn paint_priority(text: &str, priority: Priority, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match priority.color() {
        Tone::Error => text.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        Tone::Warning => text
            .if_supports_color(Stream::Stdout, |t| t.yellow())
            .to_string(),
        Tone::Success => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
    }
}

/// Render the accordion as plain text lines.
///
/// Each visible ticket gets a header line; open panels are followed by their
/// description, indented. Colors are applied after padding so escape codes
/// never count toward column widths.
pub fn render_accordion(view: &AccordionView, color: bool) -> String {
    if view.panels.is_empty() {
        return if view.total == 0 {
            "No tickets".to_string()
        } else {
            format!("No tickets match '{}'", view.query.trim())
        };
    }

    let mut lines = Vec::new();
    for panel in &view.panels {
        let marker = if panel.open { "▾" } else { "▸" };
        let badge = format!("{:<BADGE_WIDTH$}", format!("[{}]", panel.priority.label()));
        let badge = paint_priority(&badge, panel.priority, color);

        let (title, updated) = if color {
            let title = if panel.open {
                panel
                    .title
                    .if_supports_color(Stream::Stdout, |t| t.bold())
                    .to_string()
            } else {
                panel.title.clone()
            };
            let updated = panel
                .updated
                .if_supports_color(Stream::Stdout, |t| t.dimmed())
                .to_string();
            (title, updated)
        } else {
            (panel.title.clone(), panel.updated.clone())
        };

        lines.push(format!("{marker} {badge} {title}  {updated}"));

        if panel.open {
            if panel.description.is_empty() {
                lines.push("    (no description)".to_string());
            } else {
                lines.extend(panel.description.lines().map(|l| format!("    {l}")));
            }
        }
    }

    lines.join("\n")
}
