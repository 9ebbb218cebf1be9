use crate::error::{DrillError, ErrorCode};
use crate::exercises::gearbox::DEFAULT_TOP_GEAR;
use crate::exercises::square_root::{Bounds, SquareRootSolver};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use stillwater::Validation;

pub mod loader;

pub use loader::ConfigLoader;

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "drills.toml";

/// Get the platform config file path, if a home directory can be determined
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "drills", "drills")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(DrillError::config_with_code(
                ErrorCode::CONFIG_INVALID_ENV,
                format!("unknown output format '{}' (expected text or json)", other),
                None,
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillsConfig {
    pub log_level: Option<String>,
    pub output: OutputFormat,
    pub square_root: SquareRootConfig,
    pub fizzbuzz: FizzBuzzConfig,
    pub gearbox: GearboxConfig,
    pub pick: PickConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareRootConfig {
    pub lower: i64,
    pub upper: i64,
    pub window_start: i64,
    pub window_end: i64,
}

impl Default for SquareRootConfig {
    fn default() -> Self {
        Self {
            lower: Bounds::INPUT.lower,
            upper: Bounds::INPUT.upper,
            window_start: Bounds::SEARCH_WINDOW.lower,
            window_end: Bounds::SEARCH_WINDOW.upper,
        }
    }
}

impl SquareRootConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.lower, self.upper)
    }

    pub fn window(&self) -> Bounds {
        Bounds::new(self.window_start, self.window_end)
    }

    pub fn solver(&self) -> SquareRootSolver {
        SquareRootSolver::new(self.bounds(), self.window())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FizzBuzzConfig {
    pub start: i64,
    pub end: i64,
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self { start: 1, end: 100 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearboxConfig {
    pub top_gear: u8,
}

impl Default for GearboxConfig {
    fn default() -> Self {
        Self {
            top_gear: DEFAULT_TOP_GEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    pub fallback_min: i64,
    pub fallback_max: i64,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            fallback_min: 1,
            fallback_max: 100,
        }
    }
}

impl PickConfig {
    pub fn fallback_range(&self) -> RangeInclusive<i64> {
        self.fallback_min..=self.fallback_max
    }
}

impl DrillsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `DRILLS_*` overrides from the process environment
    pub fn merge_env_vars(&mut self) -> Result<(), DrillError> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides using a custom variable lookup
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<(), DrillError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("DRILLS_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        if let Some(output) = lookup("DRILLS_OUTPUT") {
            self.output = output.parse()?;
        }

        Ok(())
    }

    /// Reject settings the exercises cannot run with
    pub fn validate(&self) -> Result<(), DrillError> {
        match self.validate_internal().into_result() {
            Ok(_) => Ok(()),
            Err(problems) => Err(DrillError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                problems.join("; "),
                None,
            )),
        }
    }

    fn validate_internal(&self) -> Validation<(), Vec<String>> {
        let mut problems = Vec::new();

        let sqrt = &self.square_root;
        if sqrt.bounds().is_empty() {
            problems.push(format!(
                "square_root.lower ({}) is greater than square_root.upper ({})",
                sqrt.lower, sqrt.upper
            ));
        }
        if sqrt.window().is_empty() {
            problems.push(format!(
                "square_root.window_start ({}) is greater than square_root.window_end ({})",
                sqrt.window_start, sqrt.window_end
            ));
        }
        if self.fizzbuzz.start > self.fizzbuzz.end {
            problems.push(format!(
                "fizzbuzz.start ({}) is greater than fizzbuzz.end ({})",
                self.fizzbuzz.start, self.fizzbuzz.end
            ));
        }
        if self.gearbox.top_gear == 0 {
            problems.push("gearbox.top_gear must be at least 1".to_string());
        }
        if self.pick.fallback_range().is_empty() {
            problems.push(format!(
                "pick.fallback_min ({}) is greater than pick.fallback_max ({})",
                self.pick.fallback_min, self.pick.fallback_max
            ));
        }

        if problems.is_empty() {
            Validation::success(())
        } else {
            Validation::failure(problems)
        }
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, DrillError> {
        toml::to_string_pretty(self).map_err(|e| {
            DrillError::config_with_code(ErrorCode::CONFIG_SERIALIZE_FAILED, e.to_string(), None)
                .with_source(e)
        })
    }
}
