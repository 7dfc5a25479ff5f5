//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod status;

pub use aggregate_root::AggregateRoot;
pub use status::StatusCode;
