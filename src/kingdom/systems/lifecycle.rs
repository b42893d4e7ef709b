//! Noble lifecycle: birth, aging, evolution, reproduction and death

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::core::config::KingdomConfig;
use crate::core::random::{chance, fraction_of, random_item, roll_attribute, variation};
use crate::core::types::{HouseId, NobleId};
use crate::kingdom::catalog::{RaceKind, SpecialFeature, SPECIAL_FEATURES};
use crate::kingdom::events::{EventDetails, EventKind, EventLog};
use crate::kingdom::noble::{Attributes, Noble, Sex, Title, MAX_ATTRIBUTE, MIN_ATTRIBUTE};
use crate::kingdom::systems::succession::{find_most_powerful_noble, find_new_ruler};
use crate::kingdom::world::Kingdom;

const FEATURE_INHERIT_CHANCE: f64 = 0.7;
const NEW_FEATURE_CHANCE: f64 = 0.05;
const EVOLUTION_REPORT_CHANCE: f64 = 0.1;
const CHILD_PRESTIGE_FACTOR: f64 = 0.75;
const MALE_CHILD_CHANCE: f64 = 0.25;
const FEMALE_PEAK_CHILD_CHANCE: f64 = 0.3;
const BASE_DEATH_CHANCE: f64 = 0.04;

/// Create a noble in `house`, descended from `parent` if given
///
/// Founders get a random race, rolled attributes and a random age; children
/// inherit race, attributes (with drift) and some of the parent's features.
pub fn create_noble(kingdom: &mut Kingdom, parent: Option<NobleId>, house: HouseId) -> NobleId {
    let id = kingdom.next_noble_id();
    let house_power = kingdom.house(house).map(|h| h.power).unwrap_or(0.0);
    let parent_noble = parent.and_then(|p| kingdom.nobles.get(p.index()));
    let rng = &mut kingdom.rng;

    let sex = if rng.gen::<f64>() < 0.5 { Sex::Female } else { Sex::Male };
    let race = match parent_noble {
        Some(p) => p.race,
        None => *random_item(&RaceKind::ALL, rng).unwrap_or(&RaceKind::Human),
    };
    let attributes = generate_attributes(parent_noble.map(|p| &p.attributes), rng);
    let special_features =
        generate_special_features(parent_noble.map(|p| p.special_features.as_slice()), rng);
    let name = random_item(race.names(sex), rng).copied().unwrap_or("Nameless");

    let profile = race.profile();
    let (age, prestige) = match parent_noble {
        Some(p) => (0, p.prestige * CHILD_PRESTIGE_FACTOR),
        None => {
            let age = fraction_of(f64::from(profile.max_lifespan) / 3.0, rng).floor() as u32;
            let prestige = house_power / 2.0 + fraction_of(house_power / 2.0, rng);
            (age, prestige)
        }
    };

    let mut noble = Noble {
        id,
        name,
        title: Title::untitled(sex),
        sobriquet: String::new(),
        house,
        alive: true,
        notable: false,
        sex,
        parent: parent_noble.map(|p| p.id),
        children: Vec::new(),
        age,
        age_at_ascension: 0,
        prestige,
        had_child_this_year: false,
        race,
        attributes,
        special_features,
        power: 0.0,
    };
    noble.power = calculate_power(&noble);
    kingdom.nobles.push(noble);

    if let Some(parent) = parent.and_then(|p| kingdom.noble_mut(p)) {
        parent.children.push(id);
    }
    if let Some(house) = kingdom.house_mut(house) {
        house.living_nobles.push(id);
    }

    id
}

/// Roll founder attributes, or inherit with +/-2 drift clamped to 3-18
pub fn generate_attributes<R: Rng + ?Sized>(parent: Option<&Attributes>, rng: &mut R) -> Attributes {
    let Some(parent) = parent else {
        return Attributes {
            strength: roll_attribute(rng),
            dexterity: roll_attribute(rng),
            constitution: roll_attribute(rng),
            intelligence: roll_attribute(rng),
            wisdom: roll_attribute(rng),
            charisma: roll_attribute(rng),
        };
    };

    let mut inherit = |value: f64| (value + variation(2.0, rng)).clamp(MIN_ATTRIBUTE, MAX_ATTRIBUTE);
    Attributes {
        strength: inherit(parent.strength),
        dexterity: inherit(parent.dexterity),
        constitution: inherit(parent.constitution),
        intelligence: inherit(parent.intelligence),
        wisdom: inherit(parent.wisdom),
        charisma: inherit(parent.charisma),
    }
}

/// Inherit each parental feature at 70%, then draw 1-3 fresh ones
pub fn generate_special_features<R: Rng + ?Sized>(
    parent: Option<&[&'static SpecialFeature]>,
    rng: &mut R,
) -> Vec<&'static SpecialFeature> {
    let mut features: Vec<&'static SpecialFeature> = Vec::new();
    let mut available: Vec<&'static SpecialFeature> = SPECIAL_FEATURES.iter().collect();

    for &feature in parent.unwrap_or(&[]) {
        if chance(FEATURE_INHERIT_CHANCE, rng) {
            features.push(feature);
            available.retain(|f| f.name != feature.name);
        }
    }

    let extra = rng.gen_range(1..=3);
    for _ in 0..extra {
        if available.is_empty() {
            break;
        }
        let index = rng.gen_range(0..available.len());
        features.push(available.remove(index));
    }

    features
}

/// Yearly attribute drift; returns true when the change is worth chronicling
pub fn evolve_attributes<R: Rng + ?Sized>(noble: &mut Noble, rng: &mut R) -> bool {
    let race = noble.race.profile();
    let age = f64::from(noble.age);
    let age_ratio = age / f64::from(race.max_lifespan);
    let attrs = &mut noble.attributes;

    if age > race.physical_peak() {
        attrs.strength = (attrs.strength - fraction_of(0.5, rng)).max(MIN_ATTRIBUTE);
        attrs.dexterity = (attrs.dexterity - fraction_of(0.5, rng)).max(MIN_ATTRIBUTE);
        attrs.constitution = (attrs.constitution - fraction_of(0.3, rng)).max(MIN_ATTRIBUTE);
    } else if age > f64::from(race.maturity_age) {
        attrs.strength += fraction_of(0.3, rng);
        attrs.dexterity += fraction_of(0.3, rng);
        attrs.constitution += fraction_of(0.2, rng);
    }

    // Wisdom keeps what it gained; there is no mental decline
    if age <= race.mental_peak() {
        attrs.intelligence += fraction_of(0.2, rng);
        attrs.wisdom += fraction_of(0.3, rng);
    }

    if age_ratio < 0.7 {
        attrs.charisma += fraction_of(0.2, rng);
    }

    chance(EVOLUTION_REPORT_CHANCE, rng)
}

/// 5% yearly chance to pick up a feature the noble does not have yet
pub fn maybe_gain_new_feature<R: Rng + ?Sized>(
    noble: &mut Noble,
    rng: &mut R,
) -> Option<&'static SpecialFeature> {
    if !chance(NEW_FEATURE_CHANCE, rng) {
        return None;
    }

    let available: Vec<&'static SpecialFeature> = SPECIAL_FEATURES
        .iter()
        .filter(|f| !noble.has_feature(f.name))
        .collect();
    let feature = *random_item(&available, rng)?;
    noble.special_features.push(feature);
    Some(feature)
}

/// Power from attributes and features, scaled by age up to twice maturity
pub fn calculate_power(noble: &Noble) -> f64 {
    let a = &noble.attributes;
    let attr_bonus = (a.strength * 0.5
        + a.dexterity * 0.3
        + a.constitution * 0.3
        + a.intelligence * 0.4
        + a.wisdom * 0.4
        + a.charisma * 0.6)
        / 20.0;
    let feature_bonus = f64::from(noble.feature_bonus());
    let age_bonus = (f64::from(noble.age) / f64::from(noble.race.profile().maturity_age)).min(2.0);

    (attr_bonus + feature_bonus) * age_bonus
}

/// Probability that this noble has a child this year
pub fn child_chance(noble: &Noble) -> f64 {
    let race = noble.race.profile();
    if noble.age < race.maturity_age {
        return 0.0;
    }

    match noble.sex {
        Sex::Male => MALE_CHILD_CHANCE,
        Sex::Female => {
            let fertility_peak = race.physical_peak();
            let age_factor = 1.0 - (f64::from(noble.age) - fertility_peak).abs() / race.adult_span();
            (FEMALE_PEAK_CHILD_CHANCE * age_factor).max(0.0)
        }
    }
}

/// Probability that this noble dies this year, never below zero
pub fn death_chance(noble: &Noble) -> f64 {
    let age_ratio = f64::from(noble.age) / f64::from(noble.race.profile().max_lifespan);
    let age_term = age_ratio * age_ratio * 0.5;
    let constitution_bonus = (noble.attributes.constitution - 10.0) * 0.01;
    (BASE_DEATH_CHANCE + age_term - constitution_bonus).max(0.0)
}

/// Kill a noble: archive them, replace the house leader and the ruler if needed
pub fn noble_dies(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig, id: NobleId) {
    let Some(noble) = kingdom.noble_mut(id) else {
        return;
    };
    if !noble.alive {
        return;
    }
    noble.alive = false;
    let house_id = noble.house;
    kingdom.tally.deaths += 1;

    let was_leader = match kingdom.house_mut(house_id) {
        Some(house) => {
            house.bury(id);
            house.leader == Some(id)
        }
        None => false,
    };

    if was_leader {
        let successor = find_most_powerful_noble(kingdom, house_id);
        let year = kingdom.year;
        if let Some(house) = kingdom.house_mut(house_id) {
            house.leader = successor;
            if successor.is_none() {
                tracing::debug!("House {} has died out in year {}", house.name, year);
            }
        }
    }

    if kingdom.ruler == Some(id) {
        find_new_ruler(kingdom, log, config);
    }

    let Some(noble) = kingdom.noble(id) else {
        return;
    };
    if noble.notable && config.inline_deaths {
        log.push(
            kingdom.year,
            EventKind::Death,
            format!("{} has died at age {}.", noble.styled_name(), noble.age),
            Some(EventDetails::noble(noble.snapshot())),
        );
    }
}

/// Advance every living member of a house by one year, then let its elite breed
pub fn advance_noble_house(
    kingdom: &mut Kingdom,
    log: &mut EventLog,
    config: &KingdomConfig,
    house_id: HouseId,
) {
    let roster = match kingdom.house(house_id) {
        Some(house) => house.living_nobles.clone(),
        None => return,
    };
    let year = kingdom.year;

    for id in roster {
        let dies = {
            let Kingdom { nobles, rng, .. } = &mut *kingdom;
            let Some(noble) = nobles.get_mut(id.index()) else {
                continue;
            };
            if !noble.alive {
                continue;
            }

            noble.age += 1;
            noble.had_child_this_year = false;
            noble.prestige += fraction_of(0.3, rng);

            if evolve_attributes(noble, rng) {
                log.push(
                    year,
                    EventKind::Evolution,
                    format!("{}'s attributes have evolved with age.", noble.styled_name()),
                    Some(EventDetails::noble(noble.snapshot())),
                );
            }

            if let Some(feature) = maybe_gain_new_feature(noble, rng) {
                log.push(
                    year,
                    EventKind::Evolution,
                    format!("{} has gained a new feature: {}", noble.styled_name(), feature.name),
                    Some(EventDetails::noble(noble.snapshot())),
                );
            }

            noble.power = calculate_power(noble);
            chance(death_chance(noble), rng)
        };

        if dies {
            noble_dies(kingdom, log, config, id);
        }
    }

    breed_elite(kingdom, house_id);
    update_house_power(kingdom, house_id);
}

/// The best nobles of the house (by power + prestige) may each bear one child
fn breed_elite(kingdom: &mut Kingdom, house_id: HouseId) {
    let Some(house) = kingdom.house(house_id) else {
        return;
    };
    let elite_count = house.elite_count();
    let mut ranked = house.living_nobles.clone();
    // Stable sort: equal standing keeps roster order
    ranked.sort_by_key(|id| {
        Reverse(OrderedFloat(
            kingdom.noble(*id).map(|n| n.standing()).unwrap_or(f64::MIN),
        ))
    });
    ranked.truncate(elite_count);

    for parent in ranked {
        let Some(noble) = kingdom.noble(parent) else {
            continue;
        };
        let probability = child_chance(noble);
        if chance(probability, &mut kingdom.rng) {
            create_noble(kingdom, Some(parent), house_id);
            kingdom.tally.births += 1;
            if let Some(noble) = kingdom.noble_mut(parent) {
                noble.had_child_this_year = true;
            }
        }
    }
}

/// House power is the mean power of its living members, 0 when extinct
pub fn update_house_power(kingdom: &mut Kingdom, house_id: HouseId) {
    let (total, count) = kingdom
        .living_nobles(house_id)
        .fold((0.0, 0usize), |(total, count), n| (total + n.power, count + 1));
    let power = if count == 0 { 0.0 } else { total / count as f64 };
    if let Some(house) = kingdom.house_mut(house_id) {
        house.power = power;
    }
}
