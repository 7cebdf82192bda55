use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::host::Host;
use crate::log::RecordStore;
use crate::view::{Selection, ViewFilters, ViewState};
use super::Outcome;

/// Parameters of a click on the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickParams {
    /// Sequence position of the clicked record; None when the click hit no row
    pub index: Option<usize>,
    /// Toggle the clicked record instead of only adding it
    pub extend: bool,
    /// Select everything between the active record and the clicked one
    pub extend_range: bool,
    /// Host's deselect-on-nothing flag. Empty clicks deselect regardless.
    pub deselect_all: bool,
}

impl PickParams {
    pub fn at(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn extend(mut self) -> Self {
        self.extend = true;
        self
    }

    pub fn range(mut self) -> Self {
        self.extend_range = true;
        self
    }

    pub fn keep_on_empty(mut self) -> Self {
        self.deselect_all = false;
        self
    }
}

impl Default for PickParams {
    fn default() -> Self {
        Self {
            index: None,
            extend: false,
            extend_range: false,
            deselect_all: true,
        }
    }
}

/// Bulk selection action over all visible records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    Select,
    Deselect,
    Invert,
    /// Deselect when anything visible is selected, otherwise select
    Toggle,
}

impl FromStr for SelectAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" | "all" => Ok(SelectAction::Select),
            "deselect" | "none" => Ok(SelectAction::Deselect),
            "invert" => Ok(SelectAction::Invert),
            "toggle" => Ok(SelectAction::Toggle),
            _ => Err(format!("Unknown select action: {}", s)),
        }
    }
}

/// How a box selection combines with the existing selection.
///
/// Only `Set` clears the visible selection first. Inside the box `Sub`
/// deselects and every other mode selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectOp {
    /// Replace the selection with the box
    #[default]
    Set,
    Add,
    Sub,
    Xor,
    And,
}

impl FromStr for SelectOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(SelectOp::Set),
            "add" => Ok(SelectOp::Add),
            "sub" => Ok(SelectOp::Sub),
            "xor" => Ok(SelectOp::Xor),
            "and" => Ok(SelectOp::And),
            _ => Err(format!("Unknown select mode: {}", s)),
        }
    }
}

impl fmt::Display for SelectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectOp::Set => "set",
            SelectOp::Add => "add",
            SelectOp::Sub => "sub",
            SelectOp::Xor => "xor",
            SelectOp::And => "and",
        };
        f.write_str(name)
    }
}

/// Vertical bounds of a box drag, in host screen rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxParams {
    pub top: i32,
    pub bottom: i32,
    pub mode: SelectOp,
}

/// Apply a bulk action to every visible record.
///
/// The end state is computed from the current visible set first and then
/// written in one pass, so the result does not depend on traversal order.
pub fn apply_select_all(
    filters: &ViewFilters,
    selection: &mut Selection,
    store: &RecordStore,
    action: SelectAction,
) {
    let any_selected = action == SelectAction::Toggle
        && filters
            .visible(store)
            .rev()
            .any(|(_, record)| selection.is_record_selected(record));

    let updates: Vec<_> = filters
        .visible(store)
        .map(|(_, record)| {
            let now = selection.is_record_selected(record);
            let wanted = match action {
                SelectAction::Select => true,
                SelectAction::Deselect => false,
                SelectAction::Invert => !now,
                SelectAction::Toggle => !any_selected,
            };
            (record.id, wanted)
        })
        .collect();

    for (id, wanted) in updates {
        selection.set_selected(id, wanted);
    }
}

/// Change the selection of all visible records
pub fn select_all(
    view: &mut ViewState,
    store: &RecordStore,
    host: &mut dyn Host,
    action: SelectAction,
) -> Outcome {
    apply_select_all(&view.filters, &mut view.selection, store, action);
    debug!(?action, selected = view.selection.selected_count(), "select all");
    host.request_redraw();
    Outcome::Finished
}

/// Select a record by sequence position
pub fn select_pick(
    view: &mut ViewState,
    store: &RecordStore,
    host: &mut dyn Host,
    params: PickParams,
) -> Outcome {
    let ViewState { filters, selection } = view;

    // Click in empty area
    let Some(index) = params.index else {
        debug!(deselect_all = params.deselect_all, "pick on empty area");
        apply_select_all(filters, selection, store, SelectAction::Deselect);
        selection.set_active(None);
        host.request_redraw();
        return Outcome::Finished;
    };

    let Some(record) = store.get(index).filter(|r| filters.is_visible(r)) else {
        debug!(index, "pick did not resolve to a visible record");
        return Outcome::Cancelled;
    };
    let picked = record.id;

    let Some(active_index) = selection.active_index(store) else {
        selection.select(picked);
        selection.set_active(Some(picked));
        host.request_redraw();
        return Outcome::Finished;
    };
    let active = store.get(active_index).map(|r| r.id);
    let active_selected = active.is_some_and(|id| selection.is_selected(id));

    if params.extend_range {
        if active_selected {
            let (start, end) = if index < active_index {
                (index, active_index)
            } else {
                (active_index, index)
            };
            for (position, record) in filters.visible(store) {
                if (start..=end).contains(&position) {
                    selection.select(record.id);
                }
            }
            debug!(start, end, "extended selection range");
        } else {
            apply_select_all(filters, selection, store, SelectAction::Deselect);
            selection.select(picked);
            selection.set_active(Some(picked));
        }
    } else if params.extend && selection.is_selected(picked) && active == Some(picked) {
        selection.deselect(picked);
    } else {
        selection.select(picked);
        selection.set_active(Some(picked));
    }

    host.request_redraw();
    Outcome::Finished
}

/// Select the record drawn at a screen row
pub fn select_pick_at_row(
    view: &mut ViewState,
    store: &RecordStore,
    host: &mut dyn Host,
    y: i32,
    params: PickParams,
) -> Outcome {
    let index = host.pick_record_at_row(y);
    select_pick(view, store, host, PickParams { index, ..params })
}

/// Select the visible records spanned by a box drag
pub fn box_select(
    view: &mut ViewState,
    store: &RecordStore,
    host: &mut dyn Host,
    params: BoxParams,
) -> Outcome {
    let ViewState { filters, selection } = view;

    if params.mode == SelectOp::Set {
        apply_select_all(filters, selection, store, SelectAction::Deselect);
    }

    let is_shown = |index: &usize| store.get(*index).is_some_and(|r| filters.is_visible(r));
    let top = host.pick_record_at_row(params.top).filter(is_shown);
    let bottom = host.pick_record_at_row(params.bottom).filter(is_shown);

    if top.is_none() && bottom.is_none() {
        // Box over empty area
        apply_select_all(filters, selection, store, SelectAction::Deselect);
        host.request_redraw();
        return Outcome::Finished;
    }

    let (Some(top), Some(bottom)) = (
        top.or_else(|| filters.first_visible(store)),
        bottom.or_else(|| filters.last_visible(store)),
    ) else {
        return Outcome::Cancelled;
    };
    let range = top.min(bottom)..=top.max(bottom);

    let select = params.mode != SelectOp::Sub;
    let inside: Vec<_> = filters
        .visible(store)
        .filter(|(position, _)| range.contains(position))
        .map(|(_, record)| record.id)
        .collect();

    for id in inside {
        selection.set_selected(id, select);
    }
    debug!(mode = %params.mode, start = range.start(), end = range.end(), "box select");

    host.request_redraw();
    Outcome::Finished
}
