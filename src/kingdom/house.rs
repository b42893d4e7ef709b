//! NobleHouse - a lineage competing for the throne

use serde::Serialize;

use crate::core::types::{HouseId, NobleId};

#[derive(Debug, Clone, Serialize)]
pub struct NobleHouse {
    pub id: HouseId,
    pub name: String,
    /// Founding population; also bounds the breeding elite
    pub max_size: u32,
    pub living_nobles: Vec<NobleId>,
    pub dead_nobles: Vec<NobleId>,
    /// Mean power of living members (0 once extinct)
    pub power: f64,
    /// Always a member of `living_nobles` when present
    pub leader: Option<NobleId>,
    /// Reserved, never assigned
    pub regent: Option<NobleId>,
}

impl NobleHouse {
    pub fn new(id: HouseId, name: String, max_size: u32, power: f64) -> Self {
        Self {
            id,
            name,
            max_size,
            living_nobles: Vec::new(),
            dead_nobles: Vec::new(),
            power,
            leader: None,
            regent: None,
        }
    }

    pub fn is_extinct(&self) -> bool {
        self.living_nobles.is_empty()
    }

    pub fn is_living_member(&self, noble: NobleId) -> bool {
        self.living_nobles.contains(&noble)
    }

    /// How many of the best nobles may bear children in a year
    pub fn elite_count(&self) -> usize {
        let cap = (self.max_size as usize).div_ceil(3);
        cap.min(self.living_nobles.len())
    }

    /// Move a noble from the living roll to the dead roll
    ///
    /// Returns false if the noble was not living in this house.
    pub fn bury(&mut self, noble: NobleId) -> bool {
        let Some(pos) = self.living_nobles.iter().position(|&n| n == noble) else {
            return false;
        };
        self.living_nobles.remove(pos);
        self.dead_nobles.push(noble);
        true
    }
}
