//! Output sinks for generated events.
//!
//! `JsonlSink` is the durable newline-delimited JSON target; `ConsoleSink`
//! renders the human-readable view on standard output.

pub mod console;
pub mod jsonl;

pub use console::ConsoleSink;
pub use jsonl::JsonlSink;
