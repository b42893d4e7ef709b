//! Kingdom History Simulation
//!
//! Generates the history of a fantasy realm year by year: noble houses are
//! born, age, breed and die, the crown passes between houses, wars come and
//! go and monuments rise. Everything is driven by one seeded RNG per run.

pub mod catalog;
pub mod events;
pub mod house;
pub mod noble;
pub mod output;
pub mod simulation;
pub mod systems;
pub mod world;

pub use catalog::{RaceKind, SpecialFeature};
pub use events::{EventDetails, EventKind, EventLog, GenerationEvent, WarStats};
pub use house::NobleHouse;
pub use noble::{Attributes, Noble, NobleSnapshot, Sex, Title};
pub use output::{KingdomSnapshot, SimulationOutput, SimulationStats};
pub use simulation::{Simulation, YearObserver, YearReport, YearUpdate};
pub use world::{Kingdom, KingdomTally, Monument, OtherKingdom, War};
