//! Kingdom Chronicle - procedural history of a fantasy kingdom

pub mod core;
pub mod kingdom;
