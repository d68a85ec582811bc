//! Client for the Dify workflow/chat service.
//!
//! Three integrations live here: the word-list extraction workflow (the
//! interesting one, see [`wordlist`]), URL-based passage generation, and
//! conversational chat.

mod client;
pub mod chat;
pub mod extract;
pub mod textgen;
pub mod wordlist;

pub use chat::ChatReply;
pub use client::DifyClient;
pub use wordlist::WordListError;
