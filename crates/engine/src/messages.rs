//! Plain-text notices sent through the notifier port.
//!
//! Chat styling and localization live outside the engine; these helpers
//! only decide what a notice says.

use relictools_core::{format_duration, ToolError, ToolId, ToolKind};

use crate::config::ToolsConfig;

/// Staged expiry warning, e.g. "1h" / "10m" / "1m".
pub fn timer_warning(tool_name: &str, window: &str) -> String {
    format!("Your {tool_name} will self-destruct in {window}!")
}

pub fn tool_destroyed(tool_name: &str) -> String {
    format!("Your {tool_name} has self-destructed.")
}

pub fn tool_received(tool_name: &str) -> String {
    format!("You received a {tool_name}.")
}

pub fn cooldown_wait(remaining_secs: u64) -> String {
    format!(
        "You must wait {} before using that again.",
        format_duration(remaining_secs.max(1))
    )
}

pub fn drained(count: usize) -> String {
    format!("Drained {count} water blocks.")
}

pub fn no_water() -> String {
    "There is no water to drain here.".to_string()
}

pub fn tree_felled(blocks: usize) -> String {
    format!("Felled a tree of {blocks} blocks.")
}

pub fn excavated(blocks: usize) -> String {
    format!("Excavated {blocks} blocks.")
}

pub fn excluded_block() -> String {
    "That block cannot be excavated.".to_string()
}

pub fn sold(amount: f64) -> String {
    format!("Sold chest contents for ${amount:.2}.")
}

pub fn chest_empty() -> String {
    "That chest has nothing worth selling.".to_string()
}

pub fn sale_refused() -> String {
    "The sale could not be completed.".to_string()
}

pub fn torch_placed() -> String {
    "Torch placed.".to_string()
}

pub fn torch_invalid_spot() -> String {
    "A torch cannot be placed there.".to_string()
}

pub fn rocket_boost() -> String {
    "Whoosh!".to_string()
}

pub fn not_flying() -> String {
    "The rocket only works while gliding.".to_string()
}

/// Render a recoverable error for the triggering actor.
pub fn error_notice(err: &ToolError) -> String {
    err.to_string()
}

/// Resolve a kind's description template: substitute `{time}` with the
/// formatted remaining lifetime, `{uuid}` with the identity, and
/// `{amount}` with the bucket drain amount.
pub fn render_description(
    config: &ToolsConfig,
    kind: ToolKind,
    id: ToolId,
    remaining_secs: u64,
) -> Vec<String> {
    let entry = config.entry(kind);
    let time = format_duration(remaining_secs);
    let id_text = id.to_string();
    let amount = config.bucket.drain_amount.to_string();

    entry
        .lore
        .iter()
        .map(|line| {
            let mut line = line.replace("{time}", &time);
            line = line.replace("{uuid}", &id_text);
            if kind == ToolKind::Bucket {
                line = line.replace("{amount}", &amount);
            }
            line
        })
        .collect()
}
