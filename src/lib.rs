//! Predicate filters for Kubernetes events
//!
//! This crate provides boolean predicates over `Event` records: an allow-list
//! filter on the event type and a field-selector filter on the reason and
//! involved-object fields, plus a chain combinator for composing verdicts.
//!
//! Filters are built once from configuration and are immutable afterwards, so
//! they can be queried concurrently without synchronization. Invalid selector
//! configuration surfaces as a [`FilterError`] at construction time; a
//! non-matching event is simply a `false` verdict, never an error.

mod error;
mod field_selector;
mod filter;
mod type_filter;

pub use error::FilterError;
pub use field_selector::{EventFieldSelectorFilter, SUPPORTED_FIELDS, SelectorField};
pub use filter::{ChainMode, EventFilter, FilterChain};
pub use type_filter::EventTypeFilter;

// Re-export the event type used in our public API
pub use k8s_openapi::api::core::v1::Event;
