//! Step definitions for claim and release scenarios.

mod given;
mod then;
mod when;
pub mod world;
