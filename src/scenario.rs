//! YAML scenario loading and colony construction.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::colony::{Colony, Nation, ProductionBonus};
use crate::resource::Resource;

fn default_turns() -> u64 {
    5
}

fn default_population() -> u64 {
    100
}

fn default_food_production() -> i64 {
    10
}

fn default_food_consumption() -> u64 {
    5
}

fn default_energy_production() -> i64 {
    15
}

fn default_energy_consumption() -> u64 {
    8
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_turns")]
    pub turns: u64,
    pub colony: ColonyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColonyConfig {
    pub name: String,
    #[serde(default = "default_population")]
    pub population: u64,
    #[serde(default)]
    pub nation: Option<Nation>,
    pub resources: Vec<ResourceConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceConfig {
    Food {
        #[serde(default)]
        quantity: u64,
        #[serde(default = "default_food_production")]
        production_rate: i64,
        #[serde(default = "default_food_consumption")]
        consumption_rate: u64,
    },
    Energy {
        #[serde(default)]
        quantity: u64,
        #[serde(default = "default_energy_production")]
        production_rate: i64,
        #[serde(default = "default_energy_consumption")]
        consumption_rate: u64,
    },
    Basic {
        name: String,
        #[serde(default)]
        quantity: u64,
        #[serde(default)]
        production_rate: i64,
        #[serde(default)]
        consumption_rate: u64,
    },
}

impl ResourceConfig {
    pub fn name(&self) -> &str {
        match self {
            ResourceConfig::Food { .. } => "Food",
            ResourceConfig::Energy { .. } => "Energy",
            ResourceConfig::Basic { name, .. } => name,
        }
    }

    fn build(&self) -> Resource {
        match *self {
            ResourceConfig::Food {
                quantity,
                production_rate,
                consumption_rate,
            } => Resource::food(quantity, production_rate, consumption_rate),
            ResourceConfig::Energy {
                quantity,
                production_rate,
                consumption_rate,
            } => Resource::energy(quantity, production_rate, consumption_rate),
            ResourceConfig::Basic {
                ref name,
                quantity,
                production_rate,
                consumption_rate,
            } => Resource::new(name.clone(), quantity, production_rate, consumption_rate),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario")]
    Parse(#[from] serde_yaml::Error),
    #[error("scenario validation error: {0}")]
    Validation(String),
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path).map_err(|source| ScenarioError::Io {
            path: path.clone(),
            source,
        })?;
        Scenario::from_yaml(&data)
    }
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.colony.resources.is_empty() {
            return Err(ScenarioError::Validation(
                "colony must define at least one resource".to_string(),
            ));
        }
        let mut seen: Vec<&str> = Vec::new();
        for resource in &self.colony.resources {
            let name = resource.name();
            if seen.contains(&name) {
                return Err(ScenarioError::Validation(format!(
                    "resource '{name}' defined more than once"
                )));
            }
            seen.push(name);
        }
        Ok(())
    }

    /// Construct the colony, applying nation bonuses as resources are added.
    /// The returned bonuses record which rates were boosted, for display.
    pub fn build_colony(&self) -> (Colony, Vec<ProductionBonus>) {
        let config = &self.colony;
        let mut colony = match config.nation {
            Some(nation) => Colony::with_nation(config.name.clone(), config.population, nation),
            None => Colony::new(config.name.clone(), config.population),
        };
        let mut bonuses = Vec::new();
        for resource in &config.resources {
            if let Some(bonus) = colony.add_resource(resource.build()) {
                bonuses.push(bonus);
            }
        }
        (colony, bonuses)
    }

    pub fn turns(&self, override_turns: Option<u64>) -> u64 {
        override_turns.unwrap_or(self.turns)
    }
}
