//! Item commands over an in-memory list. Callers load before and save after.
//!
//! Every function leaves `items` untouched when it returns an error.

use crate::core::error::AppError;
use crate::core::item::{self, Item};
use crate::core::llm::Completion;
use crate::core::message::Message;

/// Ask for a reply to `prompt` and append it as a new item.
pub async fn create<C: Completion>(
    items: &mut Vec<Item>,
    prompt: &str,
    client: &C,
) -> Result<Item, AppError> {
    let response = client.complete(&[Message::user(prompt)]).await?;
    let created = Item {
        id: item::next_id(items),
        prompt: prompt.to_string(),
        response,
    };
    items.push(created.clone());
    log::info!("created item {}", created.id);
    Ok(created)
}

/// Re-ask with a new prompt and replace the item's prompt and response in place.
///
/// Fails with `NotFound` before any request is made when `id` is absent.
pub async fn update<C: Completion>(
    items: &mut [Item],
    id: u64,
    prompt: &str,
    client: &C,
) -> Result<Item, AppError> {
    let idx = item::position(items, id).ok_or(AppError::NotFound(id))?;
    let response = client.complete(&[Message::user(prompt)]).await?;
    let target = &mut items[idx];
    target.prompt = prompt.to_string();
    target.response = response;
    log::info!("updated item {}", id);
    Ok(target.clone())
}

/// Remove the item with `id`, keeping the order of the rest.
pub fn delete(items: &mut Vec<Item>, id: u64) -> Result<Item, AppError> {
    let idx = item::position(items, id).ok_or(AppError::NotFound(id))?;
    let removed = items.remove(idx);
    log::info!("deleted item {}", id);
    Ok(removed)
}

/// One `list` output line.
pub fn format_line(item: &Item) -> String {
    format!("{}: {} -> {}", item.id, item.prompt, item.response)
}
