use tracing::debug;

use crate::host::Host;
use crate::log::{RecordFormat, RecordStore, Severity};
use crate::operations::clipboard::{copy_selection, CopyMethod};
use crate::operations::delete::delete_selection;
use crate::operations::filter::{add_filters_from_selection, FilterMethod};
use crate::operations::select::{
    box_select, select_all, select_pick, select_pick_at_row, BoxParams, PickParams, SelectAction,
    SelectOp,
};
use crate::operations::Outcome;
use crate::view::{FilterCategory, ViewState};

/// Command parsed from user input, carrying typed operation parameters
#[derive(Debug, PartialEq)]
pub enum Command {
    Pick(PickParams),
    PickRow { y: i32, params: PickParams },
    SelectAll(SelectAction),
    BoxSelect(BoxParams),
    Filter(FilterMethod),
    Copy(CopyMethod),
    Delete,
    Search(String),
    Severity(Severity, bool),
    Level(Option<u32>),
    Category(FilterCategory, bool),
    Unknown(String),
}

/// Parse a command from user input
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Command::Unknown("Empty command".to_string());
    }

    match parts[0] {
        "pick" => {
            if parts.len() < 2 {
                return Command::Unknown("Usage: pick <index|none> [extend] [range] [keep]".to_string());
            }
            let index = if parts[1] == "none" {
                None
            } else {
                match parts[1].parse::<usize>() {
                    Ok(index) => Some(index),
                    Err(_) => return Command::Unknown(format!("Invalid record index: {}", parts[1])),
                }
            };
            match parse_pick_flags(&parts[2..]) {
                Ok(params) => Command::Pick(PickParams { index, ..params }),
                Err(msg) => Command::Unknown(msg),
            }
        }
        "pick-row" => {
            if parts.len() < 2 {
                return Command::Unknown("Usage: pick-row <y> [extend] [range] [keep]".to_string());
            }
            let Ok(y) = parts[1].parse::<i32>() else {
                return Command::Unknown(format!("Invalid row: {}", parts[1]));
            };
            match parse_pick_flags(&parts[2..]) {
                Ok(params) => Command::PickRow { y, params },
                Err(msg) => Command::Unknown(msg),
            }
        }
        "select" => {
            let action = parts.get(1).copied().unwrap_or("toggle");
            match action.parse::<SelectAction>() {
                Ok(action) => Command::SelectAll(action),
                Err(msg) => Command::Unknown(msg),
            }
        }
        "box" => {
            if parts.len() < 3 {
                return Command::Unknown("Usage: box <top> <bottom> [set|add|sub|xor|and]".to_string());
            }
            let (Ok(top), Ok(bottom)) = (parts[1].parse::<i32>(), parts[2].parse::<i32>()) else {
                return Command::Unknown("Box bounds must be row numbers".to_string());
            };
            let mode = match parts.get(3).map(|m| m.parse::<SelectOp>()) {
                None => SelectOp::Set,
                Some(Ok(mode)) => mode,
                Some(Err(msg)) => return Command::Unknown(msg),
            };
            Command::BoxSelect(BoxParams { top, bottom, mode })
        }
        "filter" => {
            if parts.len() < 2 {
                return Command::Unknown("Usage: filter <function|file|line|type>".to_string());
            }
            match parts[1].parse::<FilterMethod>() {
                Ok(method) => Command::Filter(method),
                Err(msg) => Command::Unknown(msg),
            }
        }
        "copy" => match parts.get(1).map(|m| m.parse::<CopyMethod>()) {
            None => Command::Copy(CopyMethod::Visible),
            Some(Ok(method)) => Command::Copy(method),
            Some(Err(msg)) => Command::Unknown(msg),
        },
        "delete" => Command::Delete,
        // Search text keeps its inner spacing; an empty search clears it
        "search" => Command::Search(input["search".len()..].trim().to_string()),
        "severity" => {
            if parts.len() < 3 {
                return Command::Unknown("Usage: severity <name> <on|off>".to_string());
            }
            match (parts[1].parse::<Severity>(), parse_switch(parts[2])) {
                (Ok(severity), Ok(shown)) => Command::Severity(severity, shown),
                (Err(msg), _) | (_, Err(msg)) => Command::Unknown(msg),
            }
        }
        "level" => {
            if parts.len() < 2 {
                return Command::Unknown("Usage: level <n|off>".to_string());
            }
            if parts[1] == "off" {
                return Command::Level(None);
            }
            match parts[1].parse::<u32>() {
                Ok(level) => Command::Level(Some(level)),
                Err(_) => Command::Unknown("Level must be a number or 'off'".to_string()),
            }
        }
        "category" => {
            if parts.len() < 3 {
                return Command::Unknown("Usage: category <type|function|file> <on|off>".to_string());
            }
            match (parts[1].parse::<FilterCategory>(), parse_switch(parts[2])) {
                (Ok(category), Ok(enabled)) => Command::Category(category, enabled),
                (Err(msg), _) | (_, Err(msg)) => Command::Unknown(msg),
            }
        }
        _ => Command::Unknown(format!("Unknown command: {}", parts[0])),
    }
}

fn parse_pick_flags(flags: &[&str]) -> Result<PickParams, String> {
    let mut params = PickParams::default();
    for flag in flags {
        match *flag {
            "extend" => params.extend = true,
            "range" => params.extend_range = true,
            "keep" => params.deselect_all = false,
            other => return Err(format!("Unknown pick flag: {}", other)),
        }
    }
    Ok(params)
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value {
        "on" | "true" | "show" => Ok(true),
        "off" | "false" | "hide" => Ok(false),
        _ => Err(format!("Expected on or off, got: {}", value)),
    }
}

/// Runs parsed commands against one viewer's state
pub struct CommandExecutor<'a> {
    view: &'a mut ViewState,
    store: &'a mut RecordStore,
    host: &'a mut dyn Host,
    format: RecordFormat,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(
        view: &'a mut ViewState,
        store: &'a mut RecordStore,
        host: &'a mut dyn Host,
        format: RecordFormat,
    ) -> Self {
        Self { view, store, host, format }
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(?command, "executing command");
        match command {
            Command::Pick(params) => select_pick(self.view, self.store, self.host, params),
            Command::PickRow { y, params } => {
                select_pick_at_row(self.view, self.store, self.host, y, params)
            }
            Command::SelectAll(action) => select_all(self.view, self.store, self.host, action),
            Command::BoxSelect(params) => box_select(self.view, self.store, self.host, params),
            Command::Filter(method) => {
                add_filters_from_selection(self.view, self.store, self.host, method)
            }
            Command::Copy(method) => {
                copy_selection(self.view, self.store, self.host, method, self.format)
            }
            Command::Delete => delete_selection(self.view, self.store, self.host),
            Command::Search(pattern) => {
                self.view.filters.search.set_pattern(pattern);
                self.host.request_redraw();
                Outcome::Finished
            }
            Command::Severity(severity, shown) => {
                self.view.filters.severity_mask.set_severity(severity, shown);
                self.host.request_redraw();
                Outcome::Finished
            }
            Command::Level(level) => {
                self.view.filters.level_filter = level;
                self.host.request_redraw();
                Outcome::Finished
            }
            Command::Category(category, enabled) => {
                self.view.filters.categories.set_enabled(category, enabled);
                self.host.request_redraw();
                Outcome::Finished
            }
            Command::Unknown(msg) => {
                self.host.report_info(&format!("Error: {}", msg));
                Outcome::Cancelled
            }
        }
    }
}
