//! War declaration, battles and peace

use rand::Rng;

use crate::core::config::KingdomConfig;
use crate::core::random::{chance, fraction_of};
use crate::kingdom::events::{EventDetails, EventKind, EventLog};
use crate::kingdom::world::{Kingdom, War};

pub const WAR_DECLARATION_CHANCE: f64 = 0.02;
pub const BATTLE_CHANCE: f64 = 0.3;
pub const PEACE_CHANCE: f64 = 0.1;
/// Military power needed for an even chance of winning a battle is twice this
pub const BATTLE_DIFFICULTY: f64 = 100.0;

/// Possibly declare war on a random realm we are at peace with
pub fn maybe_declare_war(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig) {
    if !chance(WAR_DECLARATION_CHANCE, &mut kingdom.rng) || kingdom.other_kingdoms_at_peace.is_empty() {
        return;
    }

    let index = kingdom.rng.gen_range(0..kingdom.other_kingdoms_at_peace.len());
    let opponent = kingdom.other_kingdoms_at_peace.remove(index);
    kingdom.war_list.push(War::new(opponent, kingdom.year));
    kingdom.tally.wars_declared += 1;

    let name = kingdom.rival_name(opponent);
    tracing::debug!("Year {}: war declared on {}", kingdom.year, name);
    if config.inline_wars {
        log.push(
            kingdom.year,
            EventKind::War,
            format!("War has broken out with {}!", name),
            None,
        );
    }
}

/// A year of fighting in every active war
///
/// Each war has a 30% chance of a battle. Victory is likelier the larger the
/// realm's combined martial strength; defeats cost up to 99 casualties.
pub fn resolve_active_wars(kingdom: &mut Kingdom, log: &mut EventLog) {
    let year = kingdom.year;
    let military_power = kingdom.military_power();
    let Kingdom { war_list, rng, other_kingdoms, tally, .. } = kingdom;

    for war in war_list.iter_mut() {
        war.duration += 1;

        if !chance(BATTLE_CHANCE, rng) {
            continue;
        }

        let opponent = other_kingdoms
            .get(war.opponent.index())
            .map(|r| r.name.as_str())
            .unwrap_or_default();
        let won = fraction_of(military_power, rng) > BATTLE_DIFFICULTY;
        let message = if won {
            war.victories += 1;
            tally.battles_won += 1;
            format!("Our forces achieved victory against {}!", opponent)
        } else {
            war.defeats += 1;
            tally.battles_lost += 1;
            war.casualties += fraction_of(100.0, rng).floor() as u32;
            format!("Our forces suffered a defeat against {}.", opponent)
        };

        log.push(year, EventKind::Combat, message, Some(EventDetails::war(war.stats())));
    }
}

/// Possibly end one random war; its opponent returns to the peaceful realms
pub fn maybe_make_peace(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig) {
    if !chance(PEACE_CHANCE, &mut kingdom.rng) || kingdom.war_list.is_empty() {
        return;
    }

    let index = kingdom.rng.gen_range(0..kingdom.war_list.len());
    let war = kingdom.war_list.remove(index);
    kingdom.other_kingdoms_at_peace.push(war.opponent);
    kingdom.tally.treaties_signed += 1;

    let name = kingdom.rival_name(war.opponent);
    tracing::debug!(
        "Year {}: peace with {} after {} years",
        kingdom.year,
        name,
        war.duration
    );
    if config.inline_wars {
        log.push(
            kingdom.year,
            EventKind::War,
            format!(
                "Peace has been achieved with {} after {} years of war.",
                name, war.duration
            ),
            Some(EventDetails::war(war.stats())),
        );
    }
}
