pub mod turn;

pub use turn::{ChatRole, ChatTurn, NewChatTurn, SessionSummary};
