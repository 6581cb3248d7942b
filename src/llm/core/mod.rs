//! Core abstractions for the provider adapter

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod provider;
