// Handlers module

pub mod catalog;
pub mod chat;
pub mod history;
pub mod reply;
pub mod sessions;

pub use catalog::{health_handler, models_handler};
pub use chat::chat_handler;
pub use history::{clear_handler, history_handler};
pub use reply::{handle_rejection, ApiReply};
pub use sessions::sessions_handler;
