//! File ingestion: KNMI daily station files and the SPAMS parameter table.
//!
//! Everything here is a thin wrapper around the in-memory types the model
//! core consumes; no model semantics live in this module.

pub mod knmi;
pub mod parameters;
