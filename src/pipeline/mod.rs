// Suggestion pipeline: end-to-end orchestration and link application.

pub mod apply;
pub mod suggest;

pub use apply::link_phrase;
pub use suggest::{run, MAX_SUGGESTIONS};
