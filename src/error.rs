//! Zoo error types.

use crate::animal::AnimalId;
use thiserror::Error;

/// Why a predation event was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PredationError {
    #[error("predator is not a carnivore")]
    NotCarnivore,
    #[error("an animal cannot eat itself")]
    SelfPredation,
    #[error("predator is dead")]
    PredatorDead,
    #[error("prey is already dead")]
    PreyDead,
}

/// Errors returned by zoo operations. None of them leave the zoo modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZooError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Not enough animals to eat: need {required}, found {found}")]
    InsufficientPopulation { required: usize, found: usize },

    #[error("Invalid predation: {0}")]
    InvalidPredation(#[from] PredationError),

    #[error("No animal with id {0}")]
    UnknownAnimal(AnimalId),
}
