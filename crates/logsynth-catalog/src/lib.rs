//! Category catalog and event factory.
//!
//! Provides the fixed eight-category registry, the per-category message
//! templates, and the `EventGenerator` source that assembles events.

pub mod catalog;
pub mod generator;
pub mod templates;

pub use catalog::{Category, CategoryTemplate, CATALOG};
pub use generator::EventGenerator;
