//! Census tracking for the zoo.

use crate::animal::Animal;
use crate::species::Diet;
use serde::{Deserialize, Serialize};

/// Population snapshot at a given day
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Census {
    /// Simulation day
    pub day: u64,
    /// Members currently held, dead or alive
    pub members: usize,
    /// Living members
    pub alive: usize,
    /// Dead members awaiting clean-up
    pub dead: usize,
    /// Living carnivores
    pub carnivores: usize,
    /// Living herbivores
    pub herbivores: usize,
    /// Summed weight of living members
    pub total_weight: f64,
    /// Mean age of living members
    pub age_mean: f64,
    /// Distance covered by living herbivores
    pub total_distance: f64,
    /// Kills by living members
    pub kills: u32,
}

impl Census {
    /// Take a census of the given animals
    pub fn take(day: u64, animals: &[Animal]) -> Self {
        let mut census = Census {
            day,
            members: animals.len(),
            ..Default::default()
        };

        for animal in animals.iter().filter(|a| a.is_alive()) {
            census.alive += 1;
            match animal.diet() {
                Diet::Carnivore => census.carnivores += 1,
                Diet::Herbivore => census.herbivores += 1,
            }
            census.total_weight += animal.weight();
            census.age_mean += animal.age() as f64;
            census.total_distance += animal.distance_moved();
            census.kills += animal.kills();
        }

        census.dead = census.members - census.alive;
        if census.alive > 0 {
            census.age_mean /= census.alive as f64;
        }

        census
    }

    /// Format census as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "Day:{:5} | Alive:{:3} (C:{} H:{}) | Dead:{:3} | Weight:{:.1} | Age:{:.0} | Dist:{:.1}",
            self.day,
            self.alive,
            self.carnivores,
            self.herbivores,
            self.dead,
            self.total_weight,
            self.age_mean,
            self.total_distance
        )
    }
}

/// Historical census tracker
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CensusHistory {
    /// All recorded snapshots
    pub snapshots: Vec<Census>,
    /// Recording interval in days
    pub interval: u64,
}

impl CensusHistory {
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Record a snapshot
    pub fn record(&mut self, census: Census) {
        self.snapshots.push(census);
    }

    /// Record a snapshot if `day` falls on the interval
    pub fn record_if_due(&mut self, day: u64, animals: &[Animal]) -> bool {
        if self.interval == 0 || day % self.interval != 0 {
            return false;
        }
        self.record(Census::take(day, animals));
        true
    }

    pub fn latest(&self) -> Option<&Census> {
        self.snapshots.last()
    }

    /// Living population over time
    pub fn population_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|c| (c.day, c.alive)).collect()
    }

    /// Total weight over time
    pub fn weight_series(&self) -> Vec<(u64, f64)> {
        self.snapshots
            .iter()
            .map(|c| (c.day, c.total_weight))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
