use super::trait_def::{SetterError, TileSetter};
use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::sets::Set;
use crate::domain::strategy::auto_set;
use crate::domain::strategy_trace::TracingTrace;

/// Sets tiles the house way. Deterministic; a seed has no effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct HouseWay;

impl HouseWay {
    pub const NAME: &'static str = "HouseWay";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }
}

impl TileSetter for HouseWay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn arrange(&self, dealt: &[Set; SETS_PER_PLAYER]) -> Result<[Set; SETS_PER_PLAYER], SetterError> {
        Ok(auto_set(dealt, &TracingTrace))
    }
}
