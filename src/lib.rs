//! # gpt-cli
//!
//! Two small command-line tools that send text to an OpenAI-compatible chat
//! completions endpoint and keep the replies in a local JSON file:
//!
//! - `gpt-items`: independent prompt/response items in `data.json`
//! - `gpt-chat`: one running conversation in `history.json`
//!
//! Both share the record store ([`core::store`]), the completion client
//! ([`core::llm`]) and the command layer ([`run`]).

pub mod cli;
pub mod core;
pub mod run;
