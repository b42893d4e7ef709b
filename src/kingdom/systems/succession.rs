//! Leadership and throne succession
//!
//! Handles house leadership, ruler death, usurpation and coronation.

use crate::core::config::KingdomConfig;
use crate::core::random::random_item;
use crate::core::types::{HouseId, NobleId};
use crate::kingdom::catalog::SOBRIQUETS;
use crate::kingdom::events::{EventDetails, EventKind, EventLog};
use crate::kingdom::noble::Title;
use crate::kingdom::world::Kingdom;

/// Living member with the highest power + prestige, first seen on ties
///
/// `None` once the house has no living members.
pub fn find_most_powerful_noble(kingdom: &Kingdom, house: HouseId) -> Option<NobleId> {
    let mut best: Option<(NobleId, f64)> = None;
    for noble in kingdom.living_nobles(house) {
        let standing = noble.standing();
        match best {
            Some((_, best_standing)) if standing <= best_standing => {}
            _ => best = Some((noble.id, standing)),
        }
    }
    best.map(|(id, _)| id)
}

/// House with the strongest claim: house power plus its leader's power and prestige
///
/// Houses without a leader have no claim. First seen wins ties.
pub fn find_greatest_house(kingdom: &Kingdom) -> Option<HouseId> {
    let mut best: Option<(HouseId, f64)> = None;
    for house in &kingdom.houses {
        let Some(leader) = house.leader.and_then(|id| kingdom.noble(id)) else {
            continue;
        };
        let claim = house.power + leader.power + leader.prestige;
        match best {
            Some((_, best_claim)) if claim <= best_claim => {}
            _ => best = Some((house.id, claim)),
        }
    }
    best.map(|(id, _)| id)
}

/// Fill the throne after the founding or after the ruler's death
pub fn find_new_ruler(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig) {
    let Some(greatest) = find_greatest_house(kingdom) else {
        tracing::debug!("No house can claim the throne in year {}", kingdom.year);
        kingdom.ruler = None;
        kingdom.ruling_house = None;
        return;
    };
    let greatest_leader = kingdom.house(greatest).and_then(|h| h.leader);

    let incumbent = match kingdom.ruling_house {
        Some(house) => house,
        None => {
            if let Some(leader) = greatest_leader {
                anoint_ruler(kingdom, log, config, leader);
            }
            return;
        }
    };

    if config.allow_usurping && greatest != incumbent {
        if let Some(leader) = greatest_leader {
            log_usurpation(kingdom, log, greatest, incumbent, leader);
            anoint_ruler(kingdom, log, config, leader);
        }
        return;
    }

    // The crown stays in the ruling house while it has anyone left to wear it
    let heir = kingdom
        .house(incumbent)
        .and_then(|h| h.leader)
        .or(greatest_leader);
    if let Some(heir) = heir {
        anoint_ruler(kingdom, log, config, heir);
    }
}

fn log_usurpation(
    kingdom: &Kingdom,
    log: &mut EventLog,
    usurper: HouseId,
    deposed: HouseId,
    leader: NobleId,
) {
    let usurper_name = kingdom.house(usurper).map(|h| h.name.as_str()).unwrap_or_default();
    let deposed_name = kingdom.house(deposed).map(|h| h.name.as_str()).unwrap_or_default();
    tracing::debug!(
        "Year {}: House {} usurps House {}",
        kingdom.year,
        usurper_name,
        deposed_name
    );
    log.push(
        kingdom.year,
        EventKind::Ascension,
        format!("House {} has usurped House {}!", usurper_name, deposed_name),
        kingdom.noble(leader).map(|n| EventDetails::noble(n.snapshot())),
    );
}

/// Crown a noble
pub fn anoint_ruler(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig, id: NobleId) {
    let sobriquet = random_item(&SOBRIQUETS, &mut kingdom.rng).copied().unwrap_or("Uncrowned");
    let year = kingdom.year;

    let Some(noble) = kingdom.noble_mut(id) else {
        return;
    };
    noble.notable = true;
    noble.prestige += 3.0;
    noble.age_at_ascension = noble.age;
    noble.title = Title::monarch(noble.sex);
    noble.sobriquet = format!("the {}", sobriquet);
    let house = noble.house;
    let children = noble.children.clone();

    for child in children {
        if let Some(child) = kingdom.noble_mut(child) {
            child.title = Title::royal_child(child.sex);
        }
    }

    kingdom.ruler = Some(id);
    kingdom.ruling_house = Some(house);
    kingdom.ruler_list.push(id);

    let Some(noble) = kingdom.noble(id) else {
        return;
    };
    let house_name = kingdom.house(house).map(|h| h.name.as_str()).unwrap_or_default();
    tracing::debug!(
        "Year {}: {} {} of House {} ascends",
        year,
        noble.styled_name(),
        noble.sobriquet,
        house_name
    );

    if config.inline_ascensions {
        log.push(
            year,
            EventKind::Ascension,
            format!(
                "All hail {} {} of House {}!",
                noble.styled_name(),
                noble.sobriquet,
                house_name
            ),
            Some(EventDetails::noble(noble.snapshot())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kingdom::house::NobleHouse;
    use crate::kingdom::systems::lifecycle::{create_noble, noble_dies};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Two houses with two founders each; house 0 leader is noble 0, house 1 leader noble 2
    fn two_house_kingdom() -> Kingdom {
        let mut kingdom = Kingdom::new(ChaCha8Rng::seed_from_u64(42));
        for (i, name) in ["Alphus", "Betan"].iter().enumerate() {
            let id = HouseId(i as u32);
            kingdom.houses.push(NobleHouse::new(id, name.to_string(), 10, 1.0));
            create_noble(&mut kingdom, None, id);
            create_noble(&mut kingdom, None, id);
        }
        for noble in &mut kingdom.nobles {
            noble.power = 1.0;
            noble.prestige = 1.0;
        }
        kingdom.houses[0].leader = Some(NobleId(0));
        kingdom.houses[1].leader = Some(NobleId(2));
        kingdom
    }

    #[test]
    fn test_most_powerful_first_on_ties() {
        let mut kingdom = two_house_kingdom();
        assert_eq!(find_most_powerful_noble(&kingdom, HouseId(0)), Some(NobleId(0)));

        kingdom.nobles[1].prestige = 5.0;
        assert_eq!(find_most_powerful_noble(&kingdom, HouseId(0)), Some(NobleId(1)));
    }

    #[test]
    fn test_most_powerful_empty_house() {
        let mut kingdom = two_house_kingdom();
        kingdom.houses[0].living_nobles.clear();
        assert_eq!(find_most_powerful_noble(&kingdom, HouseId(0)), None);
    }

    #[test]
    fn test_first_ruler_anointed() {
        let mut kingdom = two_house_kingdom();
        let mut log = EventLog::new();
        kingdom.nobles[2].prestige = 10.0;

        find_new_ruler(&mut kingdom, &mut log, &KingdomConfig::default());

        assert_eq!(kingdom.ruler, Some(NobleId(2)));
        assert_eq!(kingdom.ruling_house, Some(HouseId(1)));
        assert_eq!(kingdom.ruler_list, vec![NobleId(2)]);
        let ruler = kingdom.ruler().unwrap();
        assert!(ruler.notable);
        assert!((ruler.prestige - 13.0).abs() < 1e-9);
        assert!(matches!(ruler.title, Title::King | Title::Queen));
        assert!(ruler.sobriquet.starts_with("the "));
        assert_eq!(log.len(), 1);
        assert!(log.as_slice()[0].message.starts_with("All hail"));
        assert!(log.as_slice()[0].message.ends_with("of House Betan!"));
    }

    #[test]
    fn test_children_become_dukes() {
        let mut kingdom = two_house_kingdom();
        let mut log = EventLog::new();
        let child = create_noble(&mut kingdom, Some(NobleId(0)), HouseId(0));

        anoint_ruler(&mut kingdom, &mut log, &KingdomConfig::default(), NobleId(0));

        let title = kingdom.noble(child).unwrap().title;
        assert!(matches!(title, Title::Duke | Title::Duchess));
    }

    #[test]
    fn test_usurpation_on_ruler_death() {
        let mut kingdom = two_house_kingdom();
        let mut log = EventLog::new();
        let config = KingdomConfig::default();
        anoint_ruler(&mut kingdom, &mut log, &config, NobleId(0));
        kingdom.houses[1].power = 50.0;

        noble_dies(&mut kingdom, &mut log, &config, NobleId(0));

        assert_eq!(kingdom.ruling_house, Some(HouseId(1)));
        assert_eq!(kingdom.ruler, Some(NobleId(2)));
        assert!(log
            .iter()
            .any(|e| e.message == "House Betan has usurped House Alphus!"));
        // Death of a former ruler is chronicled
        assert_eq!(log.count_of_kind(EventKind::Death), 1);
    }

    #[test]
    fn test_no_usurpation_when_disabled() {
        let mut kingdom = two_house_kingdom();
        let mut log = EventLog::new();
        let config = KingdomConfig { allow_usurping: false, ..KingdomConfig::default() };
        anoint_ruler(&mut kingdom, &mut log, &config, NobleId(0));
        kingdom.houses[1].power = 50.0;

        noble_dies(&mut kingdom, &mut log, &config, NobleId(0));

        // The ruling house keeps the throne with its next leader
        assert_eq!(kingdom.ruling_house, Some(HouseId(0)));
        assert_eq!(kingdom.ruler, Some(NobleId(1)));
        assert!(!log.iter().any(|e| e.message.contains("usurped")));
    }

    #[test]
    fn test_extinct_ruling_house_passes_throne() {
        let mut kingdom = two_house_kingdom();
        let mut log = EventLog::new();
        let config = KingdomConfig { allow_usurping: false, ..KingdomConfig::default() };
        anoint_ruler(&mut kingdom, &mut log, &config, NobleId(0));

        noble_dies(&mut kingdom, &mut log, &config, NobleId(1));
        noble_dies(&mut kingdom, &mut log, &config, NobleId(0));

        assert_eq!(kingdom.ruling_house, Some(HouseId(1)));
        assert_eq!(kingdom.ruler, Some(NobleId(2)));
    }

    #[test]
    fn test_all_houses_extinct_leaves_empty_throne() {
        let mut kingdom = two_house_kingdom();
        let mut log = EventLog::new();
        let config = KingdomConfig::default();
        find_new_ruler(&mut kingdom, &mut log, &config);

        for id in 0..4 {
            noble_dies(&mut kingdom, &mut log, &config, NobleId(id));
        }

        assert!(kingdom.ruler.is_none());
        assert!(kingdom.ruling_house.is_none());
        assert!(kingdom.houses.iter().all(|h| h.leader.is_none()));
    }
}
