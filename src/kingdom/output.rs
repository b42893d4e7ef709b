//! Read-only snapshots and run output for presentation layers

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{NobleId, Year};
use crate::kingdom::catalog::RaceKind;
use crate::kingdom::events::{EventKind, GenerationEvent};
use crate::kingdom::noble::{Attributes, Noble, Sex, Title};
use crate::kingdom::world::{Kingdom, KingdomTally, Monument, War};

/// Serializable view of a noble
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NobleView {
    pub id: NobleId,
    pub name: String,
    pub title: Title,
    pub sobriquet: String,
    pub house: String,
    pub alive: bool,
    pub notable: bool,
    pub sex: Sex,
    pub race: RaceKind,
    pub age: u32,
    pub age_at_ascension: u32,
    pub prestige: f64,
    pub power: f64,
    pub attributes: Attributes,
    pub special_features: Vec<String>,
    pub parent: Option<NobleId>,
    pub children: Vec<NobleId>,
}

impl NobleView {
    fn new(noble: &Noble, kingdom: &Kingdom) -> Self {
        Self {
            id: noble.id,
            name: noble.name.to_string(),
            title: noble.title,
            sobriquet: noble.sobriquet.clone(),
            house: kingdom.house(noble.house).map(|h| h.name.clone()).unwrap_or_default(),
            alive: noble.alive,
            notable: noble.notable,
            sex: noble.sex,
            race: noble.race,
            age: noble.age,
            age_at_ascension: noble.age_at_ascension,
            prestige: noble.prestige,
            power: noble.power,
            attributes: noble.attributes,
            special_features: noble.special_features.iter().map(|f| f.name.to_string()).collect(),
            parent: noble.parent,
            children: noble.children.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseSnapshot {
    pub name: String,
    pub power: f64,
    pub leader: Option<NobleId>,
    pub regent: Option<NobleId>,
    pub living: Vec<NobleView>,
    pub dead_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarSnapshot {
    pub opponent: String,
    pub year_declared: Year,
    pub duration: u32,
    pub casualties: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl WarSnapshot {
    fn new(war: &War, kingdom: &Kingdom) -> Self {
        Self {
            opponent: kingdom.rival_name(war.opponent).to_string(),
            year_declared: war.year_declared,
            duration: war.duration,
            casualties: war.casualties,
            victories: war.victories,
            defeats: war.defeats,
        }
    }
}

/// Immutable copy of the realm, detached from the running simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KingdomSnapshot {
    pub year: Year,
    pub ruler: Option<NobleView>,
    pub ruling_house: Option<String>,
    pub rulers: Vec<NobleView>,
    pub houses: Vec<HouseSnapshot>,
    pub wars: Vec<WarSnapshot>,
    pub monuments: Vec<Monument>,
    pub destroyed_monuments: Vec<Monument>,
    pub rivals_at_peace: Vec<String>,
}

impl KingdomSnapshot {
    pub fn new(kingdom: &Kingdom) -> Self {
        let view = |id: NobleId| kingdom.noble(id).map(|n| NobleView::new(n, kingdom));

        Self {
            year: kingdom.year,
            ruler: kingdom.ruler.and_then(view),
            ruling_house: kingdom.ruling_house().map(|h| h.name.clone()),
            rulers: kingdom.ruler_list.iter().filter_map(|&id| view(id)).collect(),
            houses: kingdom
                .houses
                .iter()
                .map(|house| HouseSnapshot {
                    name: house.name.clone(),
                    power: house.power,
                    leader: house.leader,
                    regent: house.regent,
                    living: house.living_nobles.iter().filter_map(|&id| view(id)).collect(),
                    dead_count: house.dead_nobles.len(),
                })
                .collect(),
            wars: kingdom.war_list.iter().map(|w| WarSnapshot::new(w, kingdom)).collect(),
            monuments: kingdom.monument_list.clone(),
            destroyed_monuments: kingdom.destroyed_monument_list.clone(),
            rivals_at_peace: kingdom
                .other_kingdoms_at_peace
                .iter()
                .map(|&id| kingdom.rival_name(id).to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationStats {
    pub years_simulated: u32,
    pub seed: u64,
    pub simulation_time_ms: u64,
    pub total_events: u32,
    pub rulers: u32,
    pub monuments: u32,
    pub living_nobles: u32,
    pub tally: KingdomTally,
}

/// Complete simulation output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub final_kingdom: KingdomSnapshot,
    pub events: Vec<GenerationEvent>,
    pub statistics: SimulationStats,
}

impl SimulationOutput {
    pub fn new(kingdom: &Kingdom, events: &[GenerationEvent], seed: u64, elapsed: Duration) -> Self {
        Self {
            final_kingdom: KingdomSnapshot::new(kingdom),
            events: events.to_vec(),
            statistics: SimulationStats {
                years_simulated: kingdom.year,
                seed,
                simulation_time_ms: elapsed.as_millis() as u64,
                total_events: events.len() as u32,
                rulers: kingdom.ruler_list.len() as u32,
                monuments: kingdom.monument_list.len() as u32,
                living_nobles: kingdom.living_population() as u32,
                tally: kingdom.tally,
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let stats = &self.statistics;
        let reviews = self.events.iter().filter(|e| e.kind == EventKind::Review).count();
        format!(
            "Simulated {} years in {}ms (seed {})\n\
             {} events, {} reviews, {} rulers, {} monuments\n\
             {} wars declared, {} treaties, {} battles won, {} lost\n\
             {} births, {} deaths, {} nobles still living",
            stats.years_simulated,
            stats.simulation_time_ms,
            stats.seed,
            stats.total_events,
            reviews,
            stats.rulers,
            stats.monuments,
            stats.tally.wars_declared,
            stats.tally.treaties_signed,
            stats.tally.battles_won,
            stats.tally.battles_lost,
            stats.tally.births,
            stats.tally.deaths,
            stats.living_nobles,
        )
    }
}
