use serde::{Deserialize, Serialize};

/// Flower species available as seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Lily,
    Tulip,
    Orchid,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Lily, Species::Tulip, Species::Orchid];

    pub fn name(self) -> &'static str {
        match self {
            Species::Lily => "Lily",
            Species::Tulip => "Tulip",
            Species::Orchid => "Orchid",
        }
    }

    /// Water needed for each transition: Seed->Sprout, Sprout->Medium,
    /// Medium->Bud, Bud->Flower.
    ///
    /// Returned by value so every plant owns its own copy.
    pub fn water_thresholds(self) -> [u32; 4] {
        match self {
            Species::Lily => [2, 3, 4, 5],
            Species::Tulip => [2, 3, 4, 5],
            Species::Orchid => [2, 3, 4, 5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_have_four_positive_entries() {
        for species in Species::ALL {
            let t = species.water_thresholds();
            assert_eq!(t.len(), 4);
            assert!(t.iter().all(|&w| w > 0), "{} has a zero threshold", species.name());
        }
    }

    #[test]
    fn test_names_are_distinct() {
        assert_ne!(Species::Lily.name(), Species::Tulip.name());
        assert_ne!(Species::Tulip.name(), Species::Orchid.name());
    }
}
