//! The yearly tick

use crate::core::config::KingdomConfig;
use crate::kingdom::events::EventLog;
use crate::kingdom::systems::lifecycle::advance_noble_house;
use crate::kingdom::systems::monuments::maybe_build_monument;
use crate::kingdom::systems::review::maybe_review;
use crate::kingdom::systems::warfare::{maybe_declare_war, maybe_make_peace, resolve_active_wars};
use crate::kingdom::world::Kingdom;

/// Advance the kingdom by one year
pub fn advance_year(kingdom: &mut Kingdom, log: &mut EventLog, config: &KingdomConfig) {
    // 1. The calendar turns
    kingdom.year += 1;

    // 2. Every house ages, breeds and buries its dead
    for index in 0..kingdom.houses.len() {
        let house_id = kingdom.houses[index].id;
        advance_noble_house(kingdom, log, config, house_id);
    }

    // 3. Monuments
    maybe_build_monument(kingdom, log, config);

    // 4. New wars
    maybe_declare_war(kingdom, log, config);

    // 5. Battles in ongoing wars
    resolve_active_wars(kingdom, log);

    // 6. Peace
    maybe_make_peace(kingdom, log, config);

    // 7. Periodic review
    maybe_review(kingdom, log, config);

    tracing::trace!(
        "Year {} complete: {} living nobles, {} wars",
        kingdom.year,
        kingdom.living_population(),
        kingdom.war_list.len()
    );
}
