//! Text-to-speech conversion: the synthesize, store and notify sequence plus
//! the two entry paths that feed it.

pub mod submission;
pub mod synthesize;
pub mod upload;

pub use submission::{SubmissionOutcome, submit_text};
pub use synthesize::synthesize_text;
pub use upload::{BatchSummary, process_batch, process_text_file};
