//! The zoo - owns every animal and drives the day-by-day simulation.

use crate::animal::{Animal, AnimalId};
use crate::config::Config;
use crate::error::{PredationError, ZooError};
use crate::predation::{self, Predation};
use crate::species::Species;
use crate::stats::{Census, CensusHistory};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A collection of animals advanced in time together
pub struct Zoo {
    // Population, in insertion order
    animals: Vec<Animal>,

    // State
    day: u64,

    // Configuration
    config: Config,

    // Statistics
    history: CensusHistory,

    // ID generation
    next_animal_id: AnimalId,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Zoo {
    /// Create an empty zoo with a random seed
    pub fn new(config: Config) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create an empty zoo with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        let history = CensusHistory::new(config.logging.stats_interval);
        Self {
            animals: Vec::new(),
            day: 0,
            config,
            history,
            next_animal_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Add an animal by species tag
    pub fn add_animal(
        &mut self,
        tag: &str,
        name: &str,
        age: u32,
        weight: f64,
    ) -> Result<AnimalId, ZooError> {
        let species: Species = tag.parse()?;
        Ok(self.add(species, name, age, weight))
    }

    /// Add an animal of a known species
    pub fn add(&mut self, species: Species, name: &str, age: u32, weight: f64) -> AnimalId {
        let id = self.next_animal_id;
        self.next_animal_id += 1;

        let animal = Animal::new(id, species, name, age, weight, &self.config);
        log::debug!("Added {}", animal);
        self.animals.push(animal);
        id
    }

    /// Report line for every member, in insertion order
    pub fn show(&self) -> Vec<String> {
        self.animals.iter().map(Animal::describe).collect()
    }

    /// Name and sound of every member
    pub fn sounds(&self) -> Vec<(&str, &'static str)> {
        self.animals.iter().map(|a| (a.name(), a.sound())).collect()
    }

    /// Feed every living member
    pub fn feed_all(&mut self) {
        for animal in &mut self.animals {
            if animal.is_alive() {
                animal.feed(&self.config);
            }
        }
    }

    /// One randomly chosen member tries to eat another
    pub fn eat_once(&mut self) -> Result<Predation, ZooError> {
        // Two distinct members are needed whatever the config says
        let required = self.config.predation.min_population.max(2);
        let found = self.animals.len();
        if found < required {
            return Err(ZooError::InsufficientPopulation { required, found });
        }

        let predator = self.rng.gen_range(0..found);
        let mut prey = self.rng.gen_range(0..found - 1);
        if prey >= predator {
            prey += 1;
        }

        self.eat_at(predator, prey)
    }

    /// A specific member eats another
    pub fn feed_on(&mut self, predator: AnimalId, prey: AnimalId) -> Result<Predation, ZooError> {
        let predator_idx = self.index_of(predator)?;
        let prey_idx = self.index_of(prey)?;
        if predator_idx == prey_idx {
            return Err(PredationError::SelfPredation.into());
        }
        self.eat_at(predator_idx, prey_idx)
    }

    fn eat_at(&mut self, predator_idx: usize, prey_idx: usize) -> Result<Predation, ZooError> {
        let rules = &self.config.predation;
        let (predator, prey) = pair_mut(&mut self.animals, predator_idx, prey_idx);

        match predation::eat(predator, prey, rules) {
            Ok(event) => {
                log::debug!(
                    "Day {}: {} ate {} (+{})",
                    self.day,
                    predator.name(),
                    prey.name(),
                    event.weight_gained
                );
                Ok(event)
            }
            Err(reason) => {
                log::debug!(
                    "Day {}: {} could not eat {}: {}",
                    self.day,
                    predator.name(),
                    prey.name(),
                    reason
                );
                Err(reason.into())
            }
        }
    }

    /// Advance the simulation by `days` days
    pub fn advance_days(&mut self, days: u64) {
        for _ in 0..days {
            self.step();
        }
    }

    /// Advance with callback after each day
    pub fn advance_days_with_callback<F>(&mut self, days: u64, mut callback: F)
    where
        F: FnMut(&Zoo, u64),
    {
        for i in 0..days {
            self.step();
            callback(self, i);
        }
    }

    /// One day-step: every living member ages a day and performs its
    /// diet routine. Dead members are left untouched.
    pub fn step(&mut self) {
        self.day += 1;

        for animal in &mut self.animals {
            if !animal.is_alive() {
                continue;
            }

            animal.live_day(&mut self.rng, &self.config);

            if !animal.is_alive() {
                log::debug!("Day {}: {} died of old age", self.day, animal.name());
            }
        }

        self.history.record_if_due(self.day, &self.animals);
    }

    /// Remove dead members, returning how many were removed
    pub fn clean_up(&mut self) -> usize {
        let before = self.animals.len();
        self.animals.retain(Animal::is_alive);
        let removed = before - self.animals.len();

        if removed > 0 {
            log::info!("Removed {} dead animal(s), {} remain", removed, self.animals.len());
        }
        removed
    }

    fn index_of(&self, id: AnimalId) -> Result<usize, ZooError> {
        self.animals
            .iter()
            .position(|a| a.id() == id)
            .ok_or(ZooError::UnknownAnimal(id))
    }

    pub fn get(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id() == id)
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Living members
    pub fn living(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(|a| a.is_alive())
    }

    /// Current living population
    pub fn population(&self) -> usize {
        self.living().count()
    }

    /// Members held, dead or alive
    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Check if no member is alive
    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    /// Summed weight of living members
    pub fn total_weight(&self) -> f64 {
        self.living().map(Animal::weight).sum()
    }

    pub fn census(&self) -> Census {
        Census::take(self.day, &self.animals)
    }

    pub fn history(&self) -> &CensusHistory {
        &self.history
    }

    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Zoo {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Two distinct mutable elements of a slice
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "pair_mut requires distinct indices");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::DeathCause;

    fn demo_zoo(seed: u64) -> Zoo {
        let mut zoo = Zoo::new_with_seed(Config::default(), seed);
        zoo.add_animal("Elephant", "Dumbo", 50, 300.0).unwrap();
        zoo.add_animal("Lion", "Simba", 30, 150.0).unwrap();
        zoo.add_animal("Monkey", "Bubbles", 20, 50.0).unwrap();
        zoo.add_animal("Dolphin", "Flipper", 10, 200.0).unwrap();
        zoo
    }

    #[test]
    fn test_add_preserves_order() {
        let zoo = demo_zoo(1);
        let names: Vec<_> = zoo.animals().iter().map(Animal::name).collect();

        assert_eq!(names, vec!["Dumbo", "Simba", "Bubbles", "Flipper"]);
        assert_eq!(zoo.len(), 4);
        assert_eq!(zoo.population(), 4);
    }

    #[test]
    fn test_unknown_species_leaves_zoo_unchanged() {
        let mut zoo = demo_zoo(1);

        let result = zoo.add_animal("Giraffe", "Melman", 5, 800.0);

        assert_eq!(result, Err(ZooError::UnknownSpecies("Giraffe".to_string())));
        assert_eq!(zoo.len(), 4);
    }

    #[test]
    fn test_feed_all() {
        let mut zoo = demo_zoo(1);
        zoo.feed_all();

        let weights: Vec<_> = zoo.animals().iter().map(Animal::weight).collect();
        assert_eq!(weights, vec![300.5, 150.5, 50.5, 201.5]);
    }

    #[test]
    fn test_feed_all_skips_dead() {
        let mut zoo = demo_zoo(1);
        zoo.feed_on(1, 2).unwrap();
        let monkey_weight = zoo.get(2).unwrap().weight();

        zoo.feed_all();

        assert_eq!(zoo.get(2).unwrap().weight(), monkey_weight);
    }

    #[test]
    fn test_eat_once_requires_two() {
        let mut zoo = Zoo::new_with_seed(Config::default(), 3);
        zoo.add(Species::Lion, "Simba", 30, 150.0);

        let result = zoo.eat_once();

        assert_eq!(
            result,
            Err(ZooError::InsufficientPopulation {
                required: 2,
                found: 1
            })
        );
        assert!(zoo.animals()[0].is_alive());
        assert_eq!(zoo.animals()[0].weight(), 150.0);
    }

    #[test]
    fn test_eat_once_ignores_low_min_population() {
        let mut config = Config::default();
        config.predation.min_population = 1;
        let mut zoo = Zoo::new_with_seed(config, 3);
        zoo.add(Species::Lion, "Simba", 30, 150.0);

        assert_eq!(
            zoo.eat_once(),
            Err(ZooError::InsufficientPopulation {
                required: 2,
                found: 1
            })
        );

        let mut config = Config::default();
        config.predation.min_population = 0;
        let mut empty = Zoo::new_with_seed(config, 3);
        assert_eq!(
            empty.eat_once(),
            Err(ZooError::InsufficientPopulation {
                required: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_eat_once_outcomes() {
        // Whatever pair is drawn, either a carnivore ate or the zoo is unchanged
        for seed in 0..50 {
            let mut zoo = demo_zoo(seed);
            let before: Vec<_> = zoo.animals().iter().map(Animal::weight).collect();

            match zoo.eat_once() {
                Ok(event) => {
                    assert_ne!(event.predator, event.prey);
                    let predator = zoo.get(event.predator).unwrap();
                    let prey = zoo.get(event.prey).unwrap();
                    assert_eq!(predator.species().diet(), crate::species::Diet::Carnivore);
                    assert!(!prey.is_alive());
                    assert_eq!(
                        predator.weight(),
                        before[event.predator as usize] + before[event.prey as usize] / 2.0
                    );
                    assert_eq!(zoo.population(), 3);
                }
                Err(err) => {
                    assert_eq!(
                        err,
                        ZooError::InvalidPredation(PredationError::NotCarnivore)
                    );
                    let after: Vec<_> = zoo.animals().iter().map(Animal::weight).collect();
                    assert_eq!(before, after);
                    assert_eq!(zoo.population(), 4);
                }
            }
        }
    }

    #[test]
    fn test_eat_once_is_seeded() {
        let mut a = demo_zoo(42);
        let mut b = demo_zoo(42);

        assert_eq!(a.eat_once(), b.eat_once());
    }

    #[test]
    fn test_feed_on_errors() {
        let mut zoo = demo_zoo(1);

        assert_eq!(zoo.feed_on(1, 99), Err(ZooError::UnknownAnimal(99)));
        assert_eq!(
            zoo.feed_on(1, 1),
            Err(ZooError::InvalidPredation(PredationError::SelfPredation))
        );
        assert_eq!(
            zoo.feed_on(0, 2),
            Err(ZooError::InvalidPredation(PredationError::NotCarnivore))
        );

        zoo.feed_on(3, 2).unwrap();
        assert_eq!(
            zoo.feed_on(1, 2),
            Err(ZooError::InvalidPredation(PredationError::PreyDead))
        );
    }

    #[test]
    fn test_advance_days_ages_living() {
        let mut zoo = demo_zoo(1);
        zoo.advance_days(10);

        let ages: Vec<_> = zoo.animals().iter().map(Animal::age).collect();
        assert_eq!(ages, vec![60, 40, 30, 20]);
        assert_eq!(zoo.day(), 10);

        let lion = zoo.get(1).unwrap();
        assert_eq!(lion.weight(), 160.0);
        let dolphin = zoo.get(3).unwrap();
        assert_eq!(dolphin.weight(), 200.0);
        let elephant = zoo.get(0).unwrap();
        assert_eq!(elephant.weight(), 297.5);
        assert!(elephant.distance_moved() >= 10.0 && elephant.distance_moved() <= 50.0);
    }

    #[test]
    fn test_dead_are_inert() {
        let mut zoo = demo_zoo(1);
        zoo.feed_on(1, 2).unwrap();

        zoo.advance_days(5);

        let monkey = zoo.get(2).unwrap();
        assert_eq!(monkey.age(), 20);
        assert_eq!(monkey.weight(), 50.0);
        assert_eq!(monkey.distance_moved(), 0.0);
    }

    #[test]
    fn test_lifespans_over_three_years() {
        let mut zoo = Zoo::new_with_seed(Config::default(), 9);
        let lion = zoo.add(Species::Lion, "Simba", 30, 150.0);
        let dolphin = zoo.add(Species::Dolphin, "Flipper", 30, 200.0);
        let monkey = zoo.add(Species::Monkey, "Bubbles", 30, 50.0);

        zoo.advance_days(1095);

        let lion = zoo.get(lion).unwrap();
        assert!(!lion.is_alive());
        assert_eq!(lion.age(), 1095);
        assert_eq!(lion.cause_of_death(), Some(DeathCause::OldAge));
        assert!(zoo.get(dolphin).unwrap().is_alive());
        assert_eq!(zoo.get(dolphin).unwrap().age(), 1125);
        assert_eq!(zoo.get(monkey).unwrap().age(), 730);
    }

    #[test]
    fn test_clean_up_preserves_order() {
        let mut zoo = demo_zoo(1);
        zoo.feed_on(1, 0).unwrap();
        zoo.feed_on(3, 2).unwrap();

        assert_eq!(zoo.clean_up(), 2);
        let names: Vec<_> = zoo.animals().iter().map(Animal::name).collect();
        assert_eq!(names, vec!["Simba", "Flipper"]);

        assert_eq!(zoo.clean_up(), 0);
        assert_eq!(zoo.len(), 2);
    }

    #[test]
    fn test_show_and_sounds() {
        let zoo = demo_zoo(1);
        let lines = zoo.show();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Lion: Simba, Age: 30, Weight: 150, Status: Young");
        assert_eq!(
            zoo.sounds(),
            vec![
                ("Dumbo", "Trumpet sound"),
                ("Simba", "Roar"),
                ("Bubbles", "Chatter sound"),
                ("Flipper", "Clicking sound"),
            ]
        );
    }

    #[test]
    fn test_census_history() {
        let mut zoo = demo_zoo(1);
        zoo.advance_days(90);

        let series = zoo.history().population_series();
        assert_eq!(series, vec![(30, 4), (60, 4), (90, 4)]);
        assert_eq!(zoo.census().day, 90);
    }

    #[test]
    fn test_pair_mut() {
        let mut items = [1, 2, 3];
        let (a, b) = pair_mut(&mut items, 2, 0);
        std::mem::swap(a, b);
        assert_eq!(items, [3, 2, 1]);
    }
}
