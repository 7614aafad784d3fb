pub mod ask;
pub mod chat;
