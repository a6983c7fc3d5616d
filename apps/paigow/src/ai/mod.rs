//! Automated tile setting.
//!
//! This module provides:
//! - `TileSetter` trait for anything that arranges three dealt sets
//! - `HouseWay`: the house-way strategy computer players use
//! - `RandomSetter`: any valid arrangement at random (seedable for tests)
//! - A static registry to construct setters by name

pub mod config;
mod house_way;
mod random;
pub mod registry;
mod trait_def;

pub use config::SetterConfig;
pub use house_way::HouseWay;
pub use random::RandomSetter;
pub use registry::{by_name, create_setter, registered_setters, SetterFactory};
pub use trait_def::{validate_arrangement, SetterError, TileSetter};
