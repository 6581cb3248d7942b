pub mod query;
pub mod read;
pub mod write;

pub use query::{list_sessions, ping};
pub use read::get_session_turns;
pub use write::{append_turn, delete_session_turns};
