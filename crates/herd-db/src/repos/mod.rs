//! Repository modules for every Herd record table.
//!
//! Each module adds methods to `HerdDb` via `impl HerdDb` blocks: inserts
//! used to populate the store, and the read queries behind the
//! `AnalyticsStore` port.

pub mod animal;
pub mod carcass;
pub mod emission;
pub mod farm;
pub mod finance;
pub mod health;
pub mod land;
pub mod movement;
pub mod resource;
pub mod weight;
