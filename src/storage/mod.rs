//! Storage layer for the history importer.
//!
//! A thin abstraction over SQLite, organized into:
//! - `schema`: database connection and table creation
//! - `queries`: natural-key upserts and the read helpers tests use
//!
//! Every upsert is keyed on an external identifier and returns the durable
//! row id, so downstream writes can reference it and re-runs converge.

pub mod queries;
pub mod schema;

pub use schema::HistoryDb;
