//! Species and diet bindings.
//!
//! Behavioral differences between species are expressed as data: every
//! species maps to a [`Diet`] and a set of [`SpeciesTraits`]. The simulation
//! code uses a single `Animal` type and resolves species-specific values from
//! here, so there is no per-species code branching outside this module.

use crate::config::Config;
use crate::error::ZooError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behavioral variant of an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Carnivore,
    Herbivore,
}

impl Diet {
    /// Age in days at which members of this diet die, if any
    pub fn max_age_days(self, config: &Config) -> Option<u32> {
        match self {
            Diet::Carnivore => config.carnivore.max_age_days,
            Diet::Herbivore => config.herbivore.max_age_days,
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diet::Carnivore => write!(f, "Carnivore"),
            Diet::Herbivore => write!(f, "Herbivore"),
        }
    }
}

/// Concrete animal kinds the zoo can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Elephant,
    Lion,
    Monkey,
    Dolphin,
}

/// Per-species overrides of the diet defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTraits {
    /// Feeding gain; `None` uses `animal.feed_gain`
    pub feed_gain: Option<f64>,
    /// Whether carnivores of this species hunt every day
    pub hunts: bool,
    /// Immune to death by age
    pub ageless: bool,
}

impl SpeciesTraits {
    const STANDARD: SpeciesTraits = SpeciesTraits {
        feed_gain: None,
        hunts: true,
        ageless: false,
    };
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Elephant,
        Species::Lion,
        Species::Monkey,
        Species::Dolphin,
    ];

    pub fn diet(self) -> Diet {
        match self {
            Species::Elephant | Species::Monkey => Diet::Herbivore,
            Species::Lion | Species::Dolphin => Diet::Carnivore,
        }
    }

    pub fn sound(self) -> &'static str {
        match self {
            Species::Elephant => "Trumpet sound",
            Species::Lion => "Roar",
            Species::Monkey => "Chatter sound",
            Species::Dolphin => "Clicking sound",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Elephant => "Elephant",
            Species::Lion => "Lion",
            Species::Monkey => "Monkey",
            Species::Dolphin => "Dolphin",
        }
    }

    pub fn traits(self) -> SpeciesTraits {
        match self {
            // Dolphins feed richer, never hunt and do not die of old age
            Species::Dolphin => SpeciesTraits {
                feed_gain: Some(1.5),
                hunts: false,
                ageless: true,
            },
            _ => SpeciesTraits::STANDARD,
        }
    }

    /// Weight gained per feeding
    pub fn feed_gain(self, config: &Config) -> f64 {
        self.traits().feed_gain.unwrap_or(config.animal.feed_gain)
    }

    /// Whether the species hunts during a day-step
    pub fn hunts(self) -> bool {
        self.diet() == Diet::Carnivore && self.traits().hunts
    }

    /// Resolved lifespan in days; `None` means the species never dies of age
    pub fn lifespan(self, config: &Config) -> Option<u32> {
        if self.traits().ageless {
            None
        } else {
            self.diet().max_age_days(config)
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = ZooError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.label().eq_ignore_ascii_case(tag.trim()))
            .ok_or_else(|| ZooError::UnknownSpecies(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diets() {
        assert_eq!(Species::Elephant.diet(), Diet::Herbivore);
        assert_eq!(Species::Monkey.diet(), Diet::Herbivore);
        assert_eq!(Species::Lion.diet(), Diet::Carnivore);
        assert_eq!(Species::Dolphin.diet(), Diet::Carnivore);
    }

    #[test]
    fn test_sounds() {
        assert_eq!(Species::Elephant.sound(), "Trumpet sound");
        assert_eq!(Species::Lion.sound(), "Roar");
        assert_eq!(Species::Monkey.sound(), "Chatter sound");
        assert_eq!(Species::Dolphin.sound(), "Clicking sound");
    }

    #[test]
    fn test_lifespans() {
        let config = Config::default();
        assert_eq!(Species::Lion.lifespan(&config), Some(1095));
        assert_eq!(Species::Elephant.lifespan(&config), Some(730));
        assert_eq!(Species::Monkey.lifespan(&config), Some(730));
        assert_eq!(Species::Dolphin.lifespan(&config), None);
    }

    #[test]
    fn test_feed_gain_override() {
        let config = Config::default();
        assert_eq!(Species::Lion.feed_gain(&config), 0.5);
        assert_eq!(Species::Dolphin.feed_gain(&config), 1.5);
    }

    #[test]
    fn test_dolphin_does_not_hunt() {
        assert!(Species::Lion.hunts());
        assert!(!Species::Dolphin.hunts());
        assert!(!Species::Elephant.hunts());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("Lion".parse::<Species>().unwrap(), Species::Lion);
        assert_eq!("dolphin".parse::<Species>().unwrap(), Species::Dolphin);
        assert!(matches!(
            "Giraffe".parse::<Species>(),
            Err(ZooError::UnknownSpecies(tag)) if tag == "Giraffe"
        ));
    }
}
