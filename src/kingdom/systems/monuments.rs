//! Monument construction

use crate::core::config::KingdomConfig;
use crate::core::random::{chance, random_item};
use crate::kingdom::catalog::MONUMENT_TYPES;
use crate::kingdom::events::{EventKind, EventLog};
use crate::kingdom::world::{Kingdom, Monument};

pub const MONUMENT_CHANCE: f64 = 0.02;

/// Possibly raise a monument named after the current ruler
pub fn maybe_build_monument(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig) {
    if !chance(MONUMENT_CHANCE, &mut kingdom.rng) {
        return;
    }

    let kind = random_item(&MONUMENT_TYPES, &mut kingdom.rng).copied().unwrap_or("Monument");
    let dedicatee = kingdom.ruler().map(|r| r.name).unwrap_or("the Realm");
    let monument = Monument {
        name: format!("{} of {}", kind, dedicatee),
        year_built: kingdom.year,
        duration: 0,
        resolution: String::new(),
    };

    tracing::debug!("Year {}: {} built", kingdom.year, monument.name);
    if config.inline_monuments {
        log.push(
            kingdom.year,
            EventKind::Monument,
            format!("The {} has been constructed!", monument.name),
            None,
        );
    }
    kingdom.monument_list.push(monument);
}
