//! Simulation systems

mod generation;
pub mod lifecycle;
mod monuments;
mod review;
pub mod succession;
pub mod warfare;
mod year;

pub use generation::initialize_kingdom;
pub use lifecycle::{
    advance_noble_house, calculate_power, child_chance, create_noble, death_chance,
    evolve_attributes, generate_attributes, generate_special_features, maybe_gain_new_feature,
    noble_dies, update_house_power,
};
pub use monuments::maybe_build_monument;
pub use review::{generate_kingdom_review, maybe_review};
pub use succession::{anoint_ruler, find_greatest_house, find_most_powerful_noble, find_new_ruler};
pub use warfare::{maybe_declare_war, maybe_make_peace, resolve_active_wars};
pub use year::advance_year;
