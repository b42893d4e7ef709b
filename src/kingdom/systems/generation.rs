//! Founding of a fresh kingdom

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::KingdomConfig;
use crate::core::error::Result;
use crate::core::types::{HouseId, RivalId};
use crate::kingdom::events::EventLog;
use crate::kingdom::house::NobleHouse;
use crate::kingdom::systems::lifecycle::create_noble;
use crate::kingdom::systems::succession::{find_most_powerful_noble, find_new_ruler};
use crate::kingdom::world::{Kingdom, OtherKingdom};

/// Build the realm at year 0: rivals at peace, founded houses, a first ruler
pub fn initialize_kingdom(config: &KingdomConfig, rng: ChaCha8Rng, log: &mut EventLog) -> Result<Kingdom> {
    config.validate()?;
    let mut kingdom = Kingdom::new(rng);

    for (i, name) in config.other_kingdoms.iter().enumerate() {
        let id = RivalId(i as u32);
        kingdom.other_kingdoms.push(OtherKingdom { id, name: name.clone() });
        kingdom.other_kingdoms_at_peace.push(id);
    }

    for (i, name) in config.noble_house_names.iter().enumerate() {
        let id = HouseId(i as u32);
        let power = f64::from(kingdom.rng.gen_range(0..10u32));
        kingdom.houses.push(NobleHouse::new(id, name.clone(), config.house_size, power));
        initialize_nobles(&mut kingdom, id);
    }

    find_new_ruler(&mut kingdom, log, config);

    tracing::debug!(
        "Founded kingdom with {} houses, {} nobles and {} rivals",
        kingdom.houses.len(),
        kingdom.nobles.len(),
        kingdom.other_kingdoms.len()
    );

    Ok(kingdom)
}

/// Seed a house with its founding generation and pick its leader
fn initialize_nobles(kingdom: &mut Kingdom, house: HouseId) {
    let size = kingdom.house(house).map(|h| h.max_size).unwrap_or(0);
    for _ in 0..size {
        create_noble(kingdom, None, house);
    }
    let leader = find_most_powerful_noble(kingdom, house);
    if let Some(house) = kingdom.house_mut(house) {
        house.leader = leader;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kingdom::events::EventKind;
    use rand::SeedableRng;

    fn small_config() -> KingdomConfig {
        KingdomConfig {
            house_size: 12,
            ..KingdomConfig::default()
        }
    }

    #[test]
    fn test_initial_kingdom() {
        let mut log = EventLog::new();
        let kingdom =
            initialize_kingdom(&small_config(), ChaCha8Rng::seed_from_u64(42), &mut log).unwrap();

        assert_eq!(kingdom.year, 0);
        assert_eq!(kingdom.houses.len(), 6);
        assert_eq!(kingdom.nobles.len(), 72);
        assert_eq!(kingdom.other_kingdoms_at_peace.len(), 4);
        assert!(kingdom.war_list.is_empty());

        for house in &kingdom.houses {
            assert_eq!(house.living_nobles.len(), 12);
            assert!((0.0..10.0).contains(&house.power));
            assert_eq!(house.power.fract(), 0.0);
            let leader = house.leader.unwrap();
            assert!(house.living_nobles.contains(&leader));
            assert!(house.regent.is_none());
        }

        assert_eq!(kingdom.ruler_list.len(), 1);
        assert_eq!(kingdom.ruler, Some(kingdom.ruler_list[0]));
        assert_eq!(log.len(), 1);
        assert_eq!(log.as_slice()[0].kind, EventKind::Ascension);
        assert_eq!(log.as_slice()[0].year, 0);
    }

    #[test]
    fn test_initial_ruler_leads_ruling_house() {
        let mut log = EventLog::new();
        let kingdom =
            initialize_kingdom(&small_config(), ChaCha8Rng::seed_from_u64(5), &mut log).unwrap();
        let house = kingdom.ruling_house().unwrap();
        assert_eq!(house.leader, kingdom.ruler);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut log = EventLog::new();
        let config = KingdomConfig {
            noble_house_names: Vec::new(),
            ..KingdomConfig::default()
        };
        assert!(initialize_kingdom(&config, ChaCha8Rng::seed_from_u64(1), &mut log).is_err());
        assert!(log.is_empty());
    }
}
