//! Periodic review of the realm

use crate::core::config::KingdomConfig;
use crate::kingdom::catalog::RaceKind;
use crate::kingdom::events::{EventKind, EventLog};
use crate::kingdom::world::Kingdom;

/// Log a review when the year falls on the review period
pub fn maybe_review(kingdom: &Kingdom, log: &mut EventLog, config: &KingdomConfig) {
    if config.noble_review_period == 0 || kingdom.year % config.noble_review_period != 0 {
        return;
    }
    log.push(kingdom.year, EventKind::Review, generate_kingdom_review(kingdom), None);
}

/// Text summary of the ruler and every house
pub fn generate_kingdom_review(kingdom: &Kingdom) -> String {
    let mut review = format!("Kingdom Review - Year {}\n", kingdom.year);

    match kingdom.ruler() {
        Some(ruler) => {
            let a = &ruler.attributes;
            let features: Vec<&str> = ruler.special_features.iter().map(|f| f.name).collect();
            review.push_str(&format!(
                "Ruler: {} {}\n\
                 Race: {} (Age: {})\n\
                 Power: {:.1}\n\
                 Attributes: STR {:.1}, DEX {:.1}, CON {:.1}, INT {:.1}, WIS {:.1}, CHA {:.1}\n\
                 Special Features: {}\n",
                ruler.styled_name(),
                ruler.sobriquet,
                ruler.race,
                ruler.age,
                ruler.power,
                a.strength,
                a.dexterity,
                a.constitution,
                a.intelligence,
                a.wisdom,
                a.charisma,
                features.join(", "),
            ));
        }
        None => review.push_str("Ruler: none, the throne stands empty\n"),
    }

    review.push_str("\nNoble Houses:\n");
    for house in &kingdom.houses {
        let mut races: Vec<(RaceKind, usize)> = Vec::new();
        let mut total_power = 0.0;
        for noble in kingdom.living_nobles(house.id) {
            total_power += noble.power;
            match races.iter_mut().find(|(race, _)| *race == noble.race) {
                Some((_, count)) => *count += 1,
                None => races.push((noble.race, 1)),
            }
        }
        let living = house.living_nobles.len();
        let avg_power = if living == 0 { 0.0 } else { total_power / living as f64 };
        let races: Vec<String> = races
            .iter()
            .map(|(race, count)| format!("{}: {}", race, count))
            .collect();

        review.push_str(&format!(
            "- House {}:\n  Living Nobles: {}, Avg Power: {:.1}\n  Races: {}\n",
            house.name,
            living,
            avg_power,
            races.join(", "),
        ));
    }

    review
}
