//! Blog Generator — template-driven blog post assembly.
//!
//! Picks a tone template, resolves canned prose for a topic (or synthesizes
//! generic prose when the topic is unknown), assembles an HTML fragment in a
//! fixed section order, and wraps it in a standalone document for export.

pub mod core;
pub mod logging;
pub mod schema;
