//! Core types and utilities for the logsynth event generator.
//!
//! This crate defines the shared event schema, configuration types, the
//! sink fan-out, and the timed emission loop used by the binary.

pub mod config;
pub mod emitter;
pub mod event;
pub mod fanout;
pub mod shutdown;
pub mod traits;
