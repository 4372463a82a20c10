//! Entity structs for the livestock record tables.
//!
//! Each entity maps to a table in the libSQL database (see
//! `herd-db/migrations/001_initial.sql`). Only the analytics evaluators'
//! read paths are modelled as typed fields; descriptive columns are carried
//! as optional text where the store keeps them.

mod animal;
mod carcass;
mod emission;
mod farm;
mod finance;
mod health;
mod land;
mod movement;
mod resource;
mod weight;

pub use animal::Animal;
pub use carcass::CarcassWeighing;
pub use emission::EmissionLog;
pub use farm::Farm;
pub use finance::FinanceLog;
pub use health::HealthRecord;
pub use land::Land;
pub use movement::Movement;
pub use resource::ResourceLog;
pub use weight::WeightLog;
