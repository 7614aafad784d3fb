pub mod chat_session;
pub mod client;
pub mod content_generator;
pub mod dto;
