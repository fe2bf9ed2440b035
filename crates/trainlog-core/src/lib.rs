//! trainlog-core — Roster model, date handling, and training queries.
//!
//! This crate defines the training-record data model, the JSON roster loader,
//! latest-completion resolution, and the three reporting queries that the
//! rest of trainlog builds on.

pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod latest;
pub mod loader;
pub mod model;
pub mod query;
