// Interlink: internal link suggestions for content libraries.
//
// This is the library root. The matching core (tokenize, scoring, phrase)
// is pure and synchronous; pool, store, and output are the seams to the
// world around it.

pub mod config;
pub mod output;
pub mod phrase;
pub mod pipeline;
pub mod pool;
pub mod scoring;
pub mod status;
pub mod store;
pub mod tokenize;
