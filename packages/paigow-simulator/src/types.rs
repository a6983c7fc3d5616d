//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON line per game plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

/// Registered tile setters a seat can use.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SetterType {
    HouseWay,
    Random,
}

impl SetterType {
    /// Name under which the setter is registered.
    pub fn name(&self) -> &'static str {
        match self {
            SetterType::HouseWay => "HouseWay",
            SetterType::Random => "RandomSetter",
        }
    }
}
