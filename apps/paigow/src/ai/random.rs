//! Random tile setter: shuffles tiles within each set and the order of the
//! sets. Always produces a valid arrangement.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{SetterError, TileSetter};
use crate::domain::rules::SETS_PER_PLAYER;
use crate::domain::sets::{make_set, Set};

pub struct RandomSetter {
    /// `arrange` takes `&self`, so the RNG sits behind a mutex.
    rng: Mutex<StdRng>,
}

impl RandomSetter {
    pub const NAME: &'static str = "RandomSetter";
    pub const VERSION: &'static str = "1.0.0";

    /// `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl TileSetter for RandomSetter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn arrange(&self, dealt: &[Set; SETS_PER_PLAYER]) -> Result<[Set; SETS_PER_PLAYER], SetterError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| SetterError::Internal(format!("RNG lock poisoned: {e}")))?;

        let mut sets = dealt.map(|set| {
            let mut tiles = set.tiles;
            tiles.shuffle(&mut *rng);
            make_set(tiles)
        });
        sets.shuffle(&mut *rng);
        Ok(sets)
    }
}
