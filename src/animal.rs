//! Animal structure and behavior.

use crate::config::Config;
use crate::species::{Diet, Species};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique animal identifier, assigned by the zoo in insertion order
pub type AnimalId = u64;

/// Cause of death tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    OldAge,
    Predation,
}

/// An animal living in the zoo
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Animal {
    // Identity
    id: AnimalId,
    name: String,
    species: Species,

    // Physical state
    age: u32,
    weight: f64,
    alive: bool,
    young: bool,

    // Herbivores only
    distance_moved: f64,

    // Statistics
    kills: u32,
    cause_of_death: Option<DeathCause>,
}

impl Animal {
    /// Create a new living animal
    pub fn new(
        id: AnimalId,
        species: Species,
        name: impl Into<String>,
        age: u32,
        weight: f64,
        config: &Config,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species,
            age,
            weight,
            alive: true,
            young: age < config.animal.young_until_days,
            distance_moved: 0.0,
            kills: 0,
            cause_of_death: None,
        }
    }

    pub fn id(&self) -> AnimalId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn diet(&self) -> Diet {
        self.species.diet()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_young(&self) -> bool {
        self.young
    }

    /// Total distance covered; stays zero for carnivores
    pub fn distance_moved(&self) -> f64 {
        self.distance_moved
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn cause_of_death(&self) -> Option<DeathCause> {
        self.cause_of_death
    }

    pub fn sound(&self) -> &'static str {
        self.species.sound()
    }

    /// Check if animal is alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the animal dead. Idempotent; the first cause is kept.
    pub fn kill(&mut self, cause: DeathCause) {
        self.alive = false;
        if self.cause_of_death.is_none() {
            self.cause_of_death = Some(cause);
        }
    }

    /// Grow older by `days` and apply death by age
    pub fn advance_age(&mut self, days: u32, config: &Config) {
        self.age = self.age.saturating_add(days);
        self.young = self.age < config.animal.young_until_days;
        self.die_by_age(config);
    }

    /// Kill the animal once it reaches its species lifespan
    pub fn die_by_age(&mut self, config: &Config) {
        if let Some(lifespan) = self.species.lifespan(config) {
            if self.age >= lifespan {
                self.kill(DeathCause::OldAge);
            }
        }
    }

    /// Feed the animal with its species gain
    pub fn feed(&mut self, config: &Config) {
        self.weight += self.species.feed_gain(config);
    }

    /// Move for a day. Herbivores also roam a random stride, which is
    /// returned; carnivores only pay the movement cost.
    pub fn move_about<R: Rng>(&mut self, rng: &mut R, config: &Config) -> f64 {
        self.weight -= config.animal.move_cost;

        match self.diet() {
            Diet::Herbivore => {
                let herbivore = &config.herbivore;
                let stride = if herbivore.stride_max > herbivore.stride_min {
                    rng.gen_range(herbivore.stride_min..=herbivore.stride_max)
                } else {
                    herbivore.stride_min
                };
                self.distance_moved += stride;
                stride
            }
            Diet::Carnivore => 0.0,
        }
    }

    /// Daily hunt. Returns false for species that do not hunt.
    pub fn hunt(&mut self, config: &Config) -> bool {
        if !self.species.hunts() {
            return false;
        }
        self.weight += config.carnivore.hunt_gain;
        true
    }

    /// Take in the weight of a consumed prey
    pub(crate) fn digest(&mut self, gained: f64) {
        self.weight += gained;
        self.kills += 1;
    }

    /// One day of life: age, then the diet-specific routine
    pub fn live_day<R: Rng>(&mut self, rng: &mut R, config: &Config) {
        self.age = self.age.saturating_add(1);
        self.young = self.age < config.animal.young_until_days;

        match self.diet() {
            Diet::Herbivore => {
                self.move_about(rng, config);
            }
            Diet::Carnivore => {
                self.hunt(config);
            }
        }

        self.die_by_age(config);
    }

    /// Report line for display
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Age: {}, Weight: {}, Status: {}",
            self.species,
            self.name,
            self.age,
            self.weight,
            if self.young { "Young" } else { "Older" }
        )?;
        if !self.alive {
            write!(f, ", Status: Dead")?;
        }
        Ok(())
    }
}
