//! Run configuration for `intkey-run`.
//!
//! Everything has a default; a JSON file may override any subset of fields, and `INTKEY_ITERATIONS` overrides the
//! iteration count last.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::{Fixture, KeyMode, KeySpace, Strategy, DEFAULT_SEED, DEFAULT_STREAM_LEN};

pub const ITERATIONS_ENV_VAR: &str = "INTKEY_ITERATIONS";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub key_space: KeySpace,
    pub key_mode: KeyMode,
    pub stream_len: usize,
    /// Iterations per run.
    pub iterations: u64,
    /// Independent runs per strategy.
    pub repeats: u32,
    pub seed: u64,
    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            key_space: KeySpace::default(),
            key_mode: KeyMode::default(),
            stream_len: DEFAULT_STREAM_LEN,
            iterations: 10_000_000,
            repeats: 3,
            seed: DEFAULT_SEED,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    pub fn from_json(text: &str) -> Result<RunConfig, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from `path` if given, apply the environment override, and validate.
    pub fn load(path: Option<&Path>) -> Result<RunConfig, ConfigError> {
        let mut config = match path {
            Some(p) => {
                log::info!("Loading config from {}", p.display());
                Self::from_json(&std::fs::read_to_string(p)?)?
            }
            None => Default::default(),
        };

        config.apply_iterations_override(std::env::var(ITERATIONS_ENV_VAR).ok().as_deref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_iterations_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let value = match value {
            Some(v) => v,
            None => return Ok(()),
        };

        self.iterations = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::BadEnvOverride {
                var: ITERATIONS_ENV_VAR,
                value: value.to_string(),
            })?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeats == 0 {
            return Err(ConfigError::ZeroRepeats);
        }

        if self.stream_len == 0 {
            return Err(ConfigError::ZeroStreamLen);
        }

        Ok(())
    }

    /// Validate, then build the fixture this configuration describes.
    pub fn build_fixture(&self) -> crate::Result<Fixture> {
        self.validate()?;
        Ok(Fixture::build(self.key_space, self.stream_len, self.seed)?)
    }
}
