//! Prompt/response items stored in `data.json`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub prompt: String,
    pub response: String,
}

/// Id for the next created item: one past the largest id present, or 1 for an empty list.
/// Equals `last.id + 1` for files this tool wrote; stays unique for out-of-order ones.
pub fn next_id(items: &[Item]) -> u64 {
    items.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
}

/// Position of the item with `id`, if present.
pub fn position(items: &[Item], id: u64) -> Option<usize> {
    items.iter().position(|i| i.id == id)
}
