pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod item;
pub mod items;
pub mod llm;
pub mod message;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
