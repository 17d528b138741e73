//! ZOO - CLI Entry Point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zoo::{Config, Species, Zoo};

#[derive(Parser)]
#[command(name = "zoo")]
#[command(version)]
#[command(about = "Day-stepped zoo simulation with carnivores, herbivores and predation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demonstration
    Demo {
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate a zoo for a number of days
    Simulate {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "zoo.yaml")]
        config: PathBuf,

        /// Number of days to simulate (overrides the config)
        #[arg(short, long)]
        days: Option<u64>,

        /// Random seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Animal as Species:name:age:weight; repeatable
        #[arg(short, long = "animal", value_parser = parse_entry)]
        animals: Vec<RosterEntry>,

        /// Print the census history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "zoo.yaml")]
        output: PathBuf,
    },
}

/// One `--animal` argument
#[derive(Debug, Clone)]
struct RosterEntry {
    species: Species,
    name: String,
    age: u32,
    weight: f64,
}

fn parse_entry(raw: &str) -> Result<RosterEntry, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [species, name, age, weight] = parts.as_slice() else {
        return Err(format!("expected Species:name:age:weight, got '{}'", raw));
    };

    Ok(RosterEntry {
        species: species.parse::<Species>().map_err(|e| e.to_string())?,
        name: name.to_string(),
        age: age.parse().map_err(|_| format!("invalid age '{}'", age))?,
        weight: weight
            .parse()
            .map_err(|_| format!("invalid weight '{}'", weight))?,
    })
}

fn demo_roster() -> Vec<RosterEntry> {
    [
        (Species::Elephant, "Dumbo", 50, 300.0),
        (Species::Lion, "Simba", 30, 150.0),
        (Species::Monkey, "Bubbles", 20, 50.0),
        (Species::Dolphin, "Flipper", 10, 200.0),
    ]
    .into_iter()
    .map(|(species, name, age, weight)| RosterEntry {
        species,
        name: name.to_string(),
        age,
        weight,
    })
    .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed } => run_demo(seed),

        Commands::Simulate {
            config,
            days,
            seed,
            animals,
            json,
        } => run_simulation(config, days, seed, animals, json),

        Commands::Init { output } => generate_config(output),
    }
}

/// Initialize logging; `RUST_LOG` wins over the configured level
fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();
}

fn build_zoo(config: Config, seed: Option<u64>, roster: &[RosterEntry]) -> Zoo {
    let mut zoo = match seed {
        Some(s) => Zoo::new_with_seed(config, s),
        None => Zoo::new(config),
    };
    for entry in roster {
        zoo.add(entry.species, &entry.name, entry.age, entry.weight);
    }
    log::info!("Zoo ready: {} animals, seed {}", zoo.len(), zoo.seed());
    zoo
}

fn print_zoo(title: &str, zoo: &Zoo) {
    println!("--- {} ---", title);
    for line in zoo.show() {
        println!("{}", line);
    }
    println!();
}

fn run_demo(seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    init_logging(&config);

    let mut zoo = build_zoo(config, seed, &demo_roster());

    print_zoo("Initial", &zoo);

    for (name, sound) in zoo.sounds() {
        println!("{}: {}", name, sound);
    }
    println!();

    zoo.feed_all();
    match zoo.eat_once() {
        Ok(event) => log::info!("Animal {} ate animal {}", event.predator, event.prey),
        Err(e) => log::warn!("{}", e),
    }
    print_zoo("After feeding and eating", &zoo);

    zoo.advance_days(365);
    print_zoo("After one year", &zoo);

    zoo.clean_up();
    print_zoo("After clean-up", &zoo);

    Ok(())
}

fn run_simulation(
    config_path: PathBuf,
    days: Option<u64>,
    seed: Option<u64>,
    roster: Vec<RosterEntry>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let (config, loaded) = if config_path.exists() {
        (Config::from_file(&config_path)?, true)
    } else {
        (Config::default(), false)
    };
    init_logging(&config);
    if loaded {
        log::info!("Loaded config from {:?}", config_path);
    } else {
        log::info!("Using default configuration");
    }

    let days = days.unwrap_or(config.simulation.days);
    let seed = seed.or(config.simulation.seed);
    let roster = if roster.is_empty() { demo_roster() } else { roster };

    let mut zoo = build_zoo(config, seed, &roster);
    print_zoo("Initial", &zoo);

    zoo.advance_days_with_callback(days, |zoo, _| {
        if zoo.day() % zoo.config().logging.stats_interval == 0 {
            log::info!("{}", zoo.census().summary());
        }
    });

    print_zoo(&format!("After {} days", days), &zoo);
    println!("{}", zoo.census().summary());

    if json {
        println!("{}", zoo.history().to_json()?);
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    init_logging(&config);
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
