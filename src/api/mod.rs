//! Lambda entrypoint: trigger classification and response shaping

pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{handle_event, handler};
