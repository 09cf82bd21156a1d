use serde::Deserialize;
use thiserror::Error;

use crate::domain::demand::DemandParameters;
use crate::domain::policy::CostParameters;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A what-if scenario: demand-generation parameters plus the cost inputs
/// the replenishment policy is derived from.
#[derive(Deserialize, Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub demand: DemandParameters,
    pub policy: CostParameters,
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<Scenario, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(deserialize_scenario_from_yaml_str(&contents)?)
}

pub fn deserialize_scenario_from_yaml_str(yaml: &str) -> Result<Scenario, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
