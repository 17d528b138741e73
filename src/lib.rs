//! # ZOO
//!
//! Day-stepped simulation of a small zoo: carnivores hunt and prey on each
//! other, herbivores roam, everybody eats, ages and eventually dies.
//!
//! ## Quick Start
//!
//! ```rust
//! use zoo::{Config, Zoo};
//!
//! let mut zoo = Zoo::new_with_seed(Config::default(), 42);
//! zoo.add_animal("Lion", "Simba", 30, 150.0).unwrap();
//! zoo.add_animal("Dolphin", "Flipper", 10, 200.0).unwrap();
//!
//! zoo.feed_all();
//! zoo.advance_days(365);
//!
//! for line in zoo.show() {
//!     println!("{}", line);
//! }
//! zoo.clean_up();
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use zoo::Config;
//!
//! let mut config = Config::default();
//! config.carnivore.max_age_days = None;
//! config.herbivore.stride_max = 3.0;
//! assert!(config.validate().is_ok());
//! ```

pub mod animal;
pub mod config;
pub mod error;
pub mod predation;
pub mod species;
pub mod stats;
pub mod zoo;

// Re-export main types
pub use animal::{Animal, AnimalId, DeathCause};
pub use config::Config;
pub use error::{PredationError, ZooError};
pub use species::{Diet, Species};
pub use zoo::Zoo;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
