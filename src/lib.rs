// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;

// Chat orchestration
pub mod chat;

// Chat history store
pub mod chat_db;

// Provider adapter
pub mod llm;
