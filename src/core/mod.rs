//! Configuration, shared models and the per-process service context

pub mod config;
pub mod context;
pub mod events;
pub mod models;

pub use context::RelayContext;
