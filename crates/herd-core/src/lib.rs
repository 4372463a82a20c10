//! # herd-core
//!
//! Core types shared across all Herd crates.
//!
//! - Entity structs for the livestock record tables (farms, lands, animals,
//!   and the per-animal / per-land log streams)
//! - Status and classification enums
//! - Analytics response records returned by the evaluators
//! - The read-only [`store::AnalyticsStore`] port the evaluators consume
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod store;
