//! Kingdom - the main realm state container

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{HouseId, NobleId, RivalId, Year};
use crate::kingdom::events::WarStats;
use crate::kingdom::house::NobleHouse;
use crate::kingdom::noble::Noble;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Monument {
    pub name: String,
    pub year_built: Year,
    pub duration: u32,
    /// Reserved, always empty
    pub resolution: String,
}

/// A neighbouring realm the kingdom may fight
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtherKingdom {
    pub id: RivalId,
    pub name: String,
}

/// Active war; removed from the kingdom once peace is made
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct War {
    pub opponent: RivalId,
    pub year_declared: Year,
    pub duration: u32,
    pub casualties: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl War {
    pub fn new(opponent: RivalId, year_declared: Year) -> Self {
        Self {
            opponent,
            year_declared,
            duration: 0,
            casualties: 0,
            victories: 0,
            defeats: 0,
        }
    }

    pub fn stats(&self) -> WarStats {
        WarStats {
            casualties: self.casualties,
            victories: self.victories,
            defeats: self.defeats,
        }
    }
}

/// Running counts of what happened during a run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomTally {
    pub births: u32,
    pub deaths: u32,
    pub wars_declared: u32,
    pub treaties_signed: u32,
    pub battles_won: u32,
    pub battles_lost: u32,
}

/// The realm for one simulation run
pub struct Kingdom {
    /// Every noble ever born, living or dead
    pub nobles: Vec<Noble>,
    pub houses: Vec<NobleHouse>,
    /// Every ruler in order of coronation
    pub ruler_list: Vec<NobleId>,
    pub monument_list: Vec<Monument>,
    /// Reserved, monuments are never destroyed
    pub destroyed_monument_list: Vec<Monument>,
    pub war_list: Vec<War>,
    pub other_kingdoms: Vec<OtherKingdom>,
    pub other_kingdoms_at_peace: Vec<RivalId>,
    pub year: Year,
    pub ruling_house: Option<HouseId>,
    pub ruler: Option<NobleId>,
    pub tally: KingdomTally,
    /// Random number generator (deterministic)
    pub rng: ChaCha8Rng,
}

impl Kingdom {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            nobles: Vec::new(),
            houses: Vec::new(),
            ruler_list: Vec::new(),
            monument_list: Vec::new(),
            destroyed_monument_list: Vec::new(),
            war_list: Vec::new(),
            other_kingdoms: Vec::new(),
            other_kingdoms_at_peace: Vec::new(),
            year: 0,
            ruling_house: None,
            ruler: None,
            tally: KingdomTally::default(),
            rng,
        }
    }

    /// Id the next noble pushed into the arena will receive
    pub fn next_noble_id(&self) -> NobleId {
        NobleId(self.nobles.len() as u32)
    }

    pub fn noble(&self, id: NobleId) -> Option<&Noble> {
        self.nobles.get(id.index())
    }

    pub fn noble_mut(&mut self, id: NobleId) -> Option<&mut Noble> {
        self.nobles.get_mut(id.index())
    }

    pub fn house(&self, id: HouseId) -> Option<&NobleHouse> {
        self.houses.get(id.index())
    }

    pub fn house_mut(&mut self, id: HouseId) -> Option<&mut NobleHouse> {
        self.houses.get_mut(id.index())
    }

    pub fn rival(&self, id: RivalId) -> Option<&OtherKingdom> {
        self.other_kingdoms.get(id.index())
    }

    pub fn rival_name(&self, id: RivalId) -> &str {
        self.rival(id).map(|r| r.name.as_str()).unwrap_or("an unknown realm")
    }

    pub fn ruler(&self) -> Option<&Noble> {
        self.ruler.and_then(|id| self.noble(id))
    }

    pub fn ruling_house(&self) -> Option<&NobleHouse> {
        self.ruling_house.and_then(|id| self.house(id))
    }

    pub fn is_at_war_with(&self, rival: RivalId) -> bool {
        self.war_list.iter().any(|w| w.opponent == rival)
    }

    pub fn living_nobles(&self, house: HouseId) -> impl Iterator<Item = &Noble> {
        self.house(house)
            .map(|h| h.living_nobles.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(|&id| self.noble(id))
    }

    pub fn living_population(&self) -> usize {
        self.houses.iter().map(|h| h.living_nobles.len()).sum()
    }

    /// Combined martial strength of every living noble
    pub fn military_power(&self) -> f64 {
        self.houses
            .iter()
            .flat_map(|h| h.living_nobles.iter())
            .filter_map(|&id| self.noble(id))
            .map(|n| n.attributes.martial_strength())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_empty_kingdom() {
        let kingdom = Kingdom::new(ChaCha8Rng::seed_from_u64(42));
        assert_eq!(kingdom.year, 0);
        assert!(kingdom.ruler().is_none());
        assert!(kingdom.ruling_house().is_none());
        assert_eq!(kingdom.next_noble_id(), NobleId(0));
        assert_eq!(kingdom.military_power(), 0.0);
        assert_eq!(kingdom.rival_name(RivalId(5)), "an unknown realm");
    }

    #[test]
    fn test_war_stats_snapshot() {
        let mut war = War::new(RivalId(0), 12);
        war.victories = 2;
        war.defeats = 1;
        war.casualties = 40;
        let stats = war.stats();
        assert_eq!(stats.casualties, 40);
        assert_eq!(stats.victories, 2);
        assert_eq!(stats.defeats, 1);
    }
}
