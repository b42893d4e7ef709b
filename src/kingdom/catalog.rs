//! Static catalogs: races, special features, names, sobriquets, monuments
//!
//! These tables never change after compilation and are shared by reference.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::kingdom::noble::Sex;

/// Lifespan profile of a race
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Race {
    pub name: &'static str,
    pub min_lifespan: u32,
    pub max_lifespan: u32,
    pub maturity_age: u32,
}

impl Race {
    /// Years between maturity and the end of the natural lifespan
    pub fn adult_span(&self) -> f64 {
        f64::from(self.max_lifespan) - f64::from(self.maturity_age)
    }

    /// Physical attributes grow until this age, then decline
    pub fn physical_peak(&self) -> f64 {
        f64::from(self.maturity_age) + self.adult_span() * 0.2
    }

    /// Mental attributes grow until this age
    pub fn mental_peak(&self) -> f64 {
        f64::from(self.maturity_age) + self.adult_span() * 0.6
    }
}

/// The four playable races
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceKind {
    Elf,
    Dwarf,
    Human,
    Orc,
}

impl RaceKind {
    pub const ALL: [RaceKind; 4] = [RaceKind::Elf, RaceKind::Dwarf, RaceKind::Human, RaceKind::Orc];

    pub fn profile(self) -> &'static Race {
        match self {
            RaceKind::Elf => &RACES[0],
            RaceKind::Dwarf => &RACES[1],
            RaceKind::Human => &RACES[2],
            RaceKind::Orc => &RACES[3],
        }
    }

    /// Given names for this race and sex
    pub fn names(self, sex: Sex) -> &'static [&'static str] {
        match (self, sex) {
            (RaceKind::Human, Sex::Male) => &[
                "Aldrich", "Baldwin", "Conrad", "Dominic", "Edmund", "Frederick", "Geoffrey",
                "Harold", "Magnus", "Roland",
            ],
            (RaceKind::Human, Sex::Female) => &[
                "Adelaide", "Beatrice", "Catherine", "Eleanor", "Guinevere", "Isabella",
                "Margaret", "Rosalind", "Victoria",
            ],
            (RaceKind::Elf, Sex::Male) => &[
                "Aegnor", "Celeborn", "Ecthelion", "Finrod", "Glorfindel", "Legolas",
                "Thranduil", "Elrond", "Feanor", "Fingolfin",
            ],
            (RaceKind::Elf, Sex::Female) => &[
                "Arwen", "Galadriel", "Celebrian", "Luthien", "Idril", "Aredhel", "Finduilas",
                "Nimrodel", "Varda",
            ],
            (RaceKind::Dwarf, Sex::Male) => &[
                "Thorin", "Balin", "Dwalin", "Gloin", "Gimli", "Durin", "Thrain", "Dain",
                "Bombur", "Bifur",
            ],
            (RaceKind::Dwarf, Sex::Female) => &[
                "Dis", "Kili", "Fili", "Thorina", "Daina", "Naina", "Groin", "Mora", "Hilda",
            ],
            (RaceKind::Orc, Sex::Male) => &[
                "Grok", "Thrak", "Muzgash", "Bolg", "Azog", "Grishnak", "Ugluk", "Lurtz",
                "Shagrat", "Gothmog",
            ],
            (RaceKind::Orc, Sex::Female) => &[
                "Grisha", "Mogka", "Azka", "Urgha", "Sharog", "Durka", "Yagak", "Gorka", "Urka",
            ],
        }
    }
}

pub static RACES: [Race; 4] = [
    Race { name: "Elf", min_lifespan: 900, max_lifespan: 1200, maturity_age: 100 },
    Race { name: "Dwarf", min_lifespan: 250, max_lifespan: 300, maturity_age: 50 },
    Race { name: "Human", min_lifespan: 60, max_lifespan: 90, maturity_age: 18 },
    Race { name: "Orc", min_lifespan: 35, max_lifespan: 45, maturity_age: 12 },
];

/// A heritable trait conferring a fixed power bonus
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SpecialFeature {
    pub name: &'static str,
    pub description: &'static str,
    pub power_bonus: i32,
}

pub static SPECIAL_FEATURES: [SpecialFeature; 10] = [
    SpecialFeature { name: "Natural Leader", description: "Born to lead others", power_bonus: 3 },
    SpecialFeature { name: "Strategic Mind", description: "Exceptional at planning", power_bonus: 2 },
    SpecialFeature { name: "Charismatic", description: "Natural charm and influence", power_bonus: 2 },
    SpecialFeature { name: "Warrior Blood", description: "Natural combat prowess", power_bonus: 2 },
    SpecialFeature { name: "Diplomatic", description: "Skilled negotiator", power_bonus: 2 },
    SpecialFeature { name: "Magical Affinity", description: "Natural connection to magic", power_bonus: 3 },
    SpecialFeature { name: "Noble Blood", description: "Pure noble lineage", power_bonus: 1 },
    SpecialFeature { name: "Tactical Genius", description: "Master of warfare", power_bonus: 3 },
    SpecialFeature { name: "Scholar", description: "Deep knowledge and wisdom", power_bonus: 2 },
    SpecialFeature { name: "Popular", description: "Beloved by the people", power_bonus: 2 },
];

pub static SOBRIQUETS: [&str; 24] = [
    "Bold", "Pious", "Terrible", "Wise", "Clever", "Builder", "Sage", "Warlord", "Valiant",
    "Merciless", "Cruel", "Good", "Bad", "Bald", "Logician", "Farmer", "Mirthful", "Restless",
    "Pillager", "Butcher", "Dragon", "Poet", "Reformer", "Philosopher",
];

pub static MONUMENT_TYPES: [&str; 17] = [
    "Castle", "Citadel", "Tower", "Shrine", "Fortress", "Monument", "Wall", "Statue", "Arch",
    "Temple", "Lighthouse", "Colossus", "Gardens", "Library", "Palace", "College", "Observatory",
];
