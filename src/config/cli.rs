use super::OutputFormat;
use crate::domain::ports::ScenarioProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "revisao-poo")]
#[command(about = "Wires a client, its city and its pokemon together")]
pub struct CliConfig {
    #[arg(long, default_value = "Lucas")]
    pub name: String,

    #[arg(long, default_value = "30", allow_negative_numbers = true)]
    pub age: i32,

    #[arg(long, default_value = "70", allow_negative_numbers = true)]
    pub weight: f64,

    #[arg(long, default_value = "Joinville")]
    pub city: String,

    /// Leave the client without a city
    #[arg(long, conflicts_with = "city")]
    pub no_city: bool,

    /// Comma-separated; an empty value means no pokemon
    #[arg(long, value_delimiter = ',', default_value = "Charmander,Frokie")]
    pub pokemon: Vec<String>,

    /// Load the scenario from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// One of: blank, debug, json
    #[arg(long, default_value = "blank")]
    pub output: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.parse()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        self.output_format()?;
        Ok(())
    }
}

impl ScenarioProvider for CliConfig {
    fn client_name(&self) -> &str {
        &self.name
    }

    fn client_age(&self) -> i32 {
        self.age
    }

    fn client_weight(&self) -> f64 {
        self.weight
    }

    fn city_name(&self) -> Option<&str> {
        if self.no_city {
            None
        } else {
            Some(&self.city)
        }
    }

    fn pokemon_names(&self) -> Vec<&str> {
        // `--pokemon ""` parses as a single empty entry.
        if let [only] = self.pokemon.as_slice() {
            if only.is_empty() {
                return Vec::new();
            }
        }
        self.pokemon.iter().map(String::as_str).collect()
    }
}
