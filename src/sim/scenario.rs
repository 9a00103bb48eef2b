use serde::{Deserialize, Serialize};

use super::commands::CommandSequence;
use super::error::SimError;
use super::params::SimParams;

/// Scenario file loaded from JSON: the full set of recognized options
/// {T, θ, β, η, r, commands} plus an optional seed and metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    pub maintenance_period: f64,
    pub maintenance_duration: f64,
    pub shape: f64,
    pub scale: f64,
    pub replications: u32,
    pub commands: Vec<f64>,
    /// Master seed for deterministic replay; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ScenarioSpec {
    /// Validate the raw fields into core types. Domain violations surface
    /// as `SimError` before any simulation work starts.
    pub fn validate(&self) -> Result<(SimParams, CommandSequence, u32), SimError> {
        let params = SimParams::new(
            self.maintenance_period,
            self.maintenance_duration,
            self.shape,
            self.scale,
        )?;
        let commands = CommandSequence::new(self.commands.clone())?;
        if self.replications == 0 {
            return Err(SimError::InvalidParameter {
                name: "replications",
                value: 0.0,
                constraint: "must be >= 1",
            });
        }
        Ok((params, commands, self.replications))
    }
}

impl Default for ScenarioSpec {
    /// Baseline machine scenario (hour time units).
    fn default() -> ScenarioSpec {
        ScenarioSpec {
            meta: None,
            maintenance_period: 1000.0,
            maintenance_duration: 2.0,
            shape: 1.8,
            scale: 900.0,
            replications: 1000,
            commands: vec![
                240.0, 120.0, 80.0, 200.0, 320.0, 260.0, 150.0, 180.0, 400.0, 300.0,
            ],
            seed: None,
        }
    }
}
