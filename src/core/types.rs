//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation year counter
pub type Year = u32;

/// Unique identifier for nobles (index into the kingdom's noble arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NobleId(pub u32);

impl NobleId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for noble houses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HouseId(pub u32);

impl HouseId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unique identifier for rival kingdoms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RivalId(pub u32);

impl RivalId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noble_id_equality() {
        let a = NobleId(1);
        let b = NobleId(1);
        let c = NobleId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ids_index_into_arenas() {
        assert_eq!(NobleId::new(7).index(), 7);
        assert_eq!(HouseId::new(0).index(), 0);
        assert_eq!(RivalId::new(3).index(), 3);
    }

    #[test]
    fn test_house_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<HouseId, &str> = HashMap::new();
        map.insert(HouseId(1), "Alphus");
        assert_eq!(map.get(&HouseId(1)), Some(&"Alphus"));
    }
}
