//! Predation rules - eligibility checks and weight transfer.

use crate::animal::{Animal, AnimalId, DeathCause};
use crate::config::PredationConfig;
use crate::error::PredationError;
use crate::species::Diet;
use serde::{Deserialize, Serialize};

/// Outcome of a successful predation event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Predation {
    pub predator: AnimalId,
    pub prey: AnimalId,
    /// Weight transferred from prey to predator
    pub weight_gained: f64,
}

/// Weight a predator gains from a prey of the given weight
pub fn calculate_weight_gain(prey_weight: f64, config: &PredationConfig) -> f64 {
    prey_weight * config.prey_weight_fraction
}

/// Check whether `predator` may eat `prey`
pub fn check(predator: &Animal, prey: &Animal) -> Result<(), PredationError> {
    if predator.id() == prey.id() {
        return Err(PredationError::SelfPredation);
    }
    if predator.diet() != Diet::Carnivore {
        return Err(PredationError::NotCarnivore);
    }
    if !predator.is_alive() {
        return Err(PredationError::PredatorDead);
    }
    if !prey.is_alive() {
        return Err(PredationError::PreyDead);
    }
    Ok(())
}

/// Predator eats prey: takes over a share of its weight and kills it.
/// Neither animal is touched when the event is rejected.
pub fn eat(
    predator: &mut Animal,
    prey: &mut Animal,
    config: &PredationConfig,
) -> Result<Predation, PredationError> {
    check(predator, prey)?;

    let weight_gained = calculate_weight_gain(prey.weight(), config);
    predator.digest(weight_gained);
    prey.kill(DeathCause::Predation);

    Ok(Predation {
        predator: predator.id(),
        prey: prey.id(),
        weight_gained,
    })
}
