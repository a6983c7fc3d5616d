//! How to register a tile setter
//!
//! 1) Implement `TileSetter` for your type in its module.
//! 2) Add a `SetterFactory` entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Same seed, same arrangements (where randomness is involved).

use serde_json::Value as JsonValue;

use super::config::SetterConfig;
use super::{HouseWay, RandomSetter, TileSetter};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Factory definition for constructing tile setters.
pub struct SetterFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &SetterConfig) -> Box<dyn TileSetter>,
}

static SETTER_FACTORIES: &[SetterFactory] = &[
    SetterFactory {
        name: HouseWay::NAME,
        version: HouseWay::VERSION,
        make: make_house_way,
    },
    SetterFactory {
        name: RandomSetter::NAME,
        version: RandomSetter::VERSION,
        make: make_random_setter,
    },
];

/// Returns the statically registered setter factories.
pub fn registered_setters() -> &'static [SetterFactory] {
    SETTER_FACTORIES
}

/// Finds a registered factory by name.
pub fn by_name(name: &str) -> Option<&'static SetterFactory> {
    registered_setters().iter().find(|f| f.name == name)
}

/// Construct a registered setter from its name and optional JSON config.
pub fn create_setter(
    name: &str,
    config: Option<&JsonValue>,
) -> Result<Box<dyn TileSetter>, AppError> {
    let factory = by_name(name).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Setter, format!("No tile setter named {name}"))
    })?;
    Ok((factory.make)(&SetterConfig::from_json(config)))
}

fn make_house_way(_config: &SetterConfig) -> Box<dyn TileSetter> {
    Box::new(HouseWay::new())
}

fn make_random_setter(config: &SetterConfig) -> Box<dyn TileSetter> {
    Box::new(RandomSetter::new(config.seed()))
}
