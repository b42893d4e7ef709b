//! Noble - an individual member of a house

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::types::{HouseId, NobleId};
use crate::kingdom::catalog::{RaceKind, SpecialFeature};

pub const MIN_ATTRIBUTE: f64 = 3.0;
pub const MAX_ATTRIBUTE: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Rank of a noble; changes on ascension
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    Lord,
    Lady,
    King,
    Queen,
    Duke,
    Duchess,
}

impl Title {
    pub fn untitled(sex: Sex) -> Self {
        match sex {
            Sex::Male => Title::Lord,
            Sex::Female => Title::Lady,
        }
    }

    pub fn monarch(sex: Sex) -> Self {
        match sex {
            Sex::Male => Title::King,
            Sex::Female => Title::Queen,
        }
    }

    pub fn royal_child(sex: Sex) -> Self {
        match sex {
            Sex::Male => Title::Duke,
            Sex::Female => Title::Duchess,
        }
    }
}

/// The six ability scores (conceptually 3-18)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: f64,
    pub dexterity: f64,
    pub constitution: f64,
    pub intelligence: f64,
    pub wisdom: f64,
    pub charisma: f64,
}

impl Attributes {
    pub fn uniform(value: f64) -> Self {
        Self {
            strength: value,
            dexterity: value,
            constitution: value,
            intelligence: value,
            wisdom: value,
            charisma: value,
        }
    }

    pub fn values(&self) -> [f64; 6] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ]
    }

    /// Contribution of this noble to the realm's armies
    pub fn martial_strength(&self) -> f64 {
        (self.strength + self.dexterity) / 2.0
    }
}

/// A noble. Relationships are ids into the kingdom's arenas.
#[derive(Debug, Clone, Serialize)]
pub struct Noble {
    pub id: NobleId,
    pub name: &'static str,
    pub title: Title,
    /// Only rulers carry one, e.g. "the Bold"
    pub sobriquet: String,
    pub house: HouseId,
    pub alive: bool,
    /// Set once the noble has worn the crown
    pub notable: bool,
    pub sex: Sex,
    pub parent: Option<NobleId>,
    pub children: Vec<NobleId>,
    pub age: u32,
    pub age_at_ascension: u32,
    pub prestige: f64,
    pub had_child_this_year: bool,
    pub race: RaceKind,
    pub attributes: Attributes,
    pub special_features: Vec<&'static SpecialFeature>,
    pub power: f64,
}

impl Noble {
    /// Ranking score used for leadership and breeding order
    pub fn standing(&self) -> f64 {
        self.power + self.prestige
    }

    pub fn has_feature(&self, name: &str) -> bool {
        self.special_features.iter().any(|f| f.name == name)
    }

    pub fn feature_bonus(&self) -> i32 {
        self.special_features.iter().map(|f| f.power_bonus).sum()
    }

    /// "Lord Aldrich", "Queen Arwen"
    pub fn styled_name(&self) -> String {
        format!("{} {}", self.title, self.name)
    }

    pub fn snapshot(&self) -> NobleSnapshot {
        NobleSnapshot {
            name: self.name.to_string(),
            title: self.title,
            race: self.race,
            age: self.age,
            attributes: self.attributes,
            special_features: self
                .special_features
                .iter()
                .map(|f| f.name.to_string())
                .collect(),
        }
    }
}

/// Frozen copy of a noble attached to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NobleSnapshot {
    pub name: String,
    pub title: Title,
    pub race: RaceKind,
    pub age: u32,
    pub attributes: Attributes,
    pub special_features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kingdom::catalog::SPECIAL_FEATURES;

    fn test_noble() -> Noble {
        Noble {
            id: NobleId(0),
            name: "Aldrich",
            title: Title::Lord,
            sobriquet: String::new(),
            house: HouseId(0),
            alive: true,
            notable: false,
            sex: Sex::Male,
            parent: None,
            children: Vec::new(),
            age: 30,
            age_at_ascension: 0,
            prestige: 2.5,
            had_child_this_year: false,
            race: RaceKind::Human,
            attributes: Attributes::uniform(10.0),
            special_features: vec![&SPECIAL_FEATURES[0], &SPECIAL_FEATURES[6]],
            power: 4.0,
        }
    }

    #[test]
    fn test_titles_by_sex() {
        assert_eq!(Title::untitled(Sex::Female), Title::Lady);
        assert_eq!(Title::monarch(Sex::Male), Title::King);
        assert_eq!(Title::royal_child(Sex::Female), Title::Duchess);
        assert_eq!(Title::Queen.to_string(), "Queen");
    }

    #[test]
    fn test_feature_helpers() {
        let noble = test_noble();
        assert!(noble.has_feature("Natural Leader"));
        assert!(!noble.has_feature("Scholar"));
        assert_eq!(noble.feature_bonus(), 4);
        assert!((noble.standing() - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_copies_state() {
        let noble = test_noble();
        let snap = noble.snapshot();
        assert_eq!(snap.name, "Aldrich");
        assert_eq!(snap.title, Title::Lord);
        assert_eq!(snap.special_features, vec!["Natural Leader", "Noble Blood"]);
        assert_eq!(noble.styled_name(), "Lord Aldrich");
    }
}
