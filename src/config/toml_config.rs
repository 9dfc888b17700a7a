use crate::domain::ports::ScenarioProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

/// Scenario file layout:
///
/// ```toml
/// [client]
/// name = "Lucas"
/// age = 30
/// weight = 70.0
///
/// [city]
/// name = "Joinville"
///
/// [[pokemon]]
/// name = "Charmander"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: Option<ClientSection>,
    pub city: Option<CitySection>,
    #[serde(default)]
    pub pokemon: Vec<PokemonSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSection {
    pub name: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DemoError::TomlError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    fn client_section(&self) -> &ClientSection {
        static EMPTY: ClientSection = ClientSection {
            name: String::new(),
            age: 0,
            weight: 0.0,
        };
        self.client.as_ref().unwrap_or(&EMPTY)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_required_field("client", &self.client)?;
        Ok(())
    }
}

impl ScenarioProvider for TomlConfig {
    fn client_name(&self) -> &str {
        &self.client_section().name
    }

    fn client_age(&self) -> i32 {
        self.client_section().age
    }

    fn client_weight(&self) -> f64 {
        self.client_section().weight
    }

    fn city_name(&self) -> Option<&str> {
        self.city.as_ref().map(|city| city.name.as_str())
    }

    fn pokemon_names(&self) -> Vec<&str> {
        self.pokemon.iter().map(|p| p.name.as_str()).collect()
    }
}
