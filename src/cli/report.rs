//! Command results and their rendering
//!
//! Every command produces a report. Text mode prints its lines; JSON mode
//! prints the serialized report.

use crate::config::OutputFormat;
use crate::error::ErrorExt;
use crate::exercises::{FizzBuzz, Pick, RootError, Shift, TemperatureReading};
use serde::Serialize;

pub trait Report: Serialize {
    /// Lines printed in text mode
    fn lines(&self) -> Vec<String>;
}

/// Render a report in the requested format
pub fn render<R: Report>(report: &R, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.lines().join("\n")),
        OutputFormat::Json => {
            Ok(serde_json::to_string_pretty(report).to_drill("failed to render JSON output")?)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LuckyReport {
    pub input: Vec<i64>,
    pub lucky: Vec<String>,
}

impl Report for LuckyReport {
    fn lines(&self) -> Vec<String> {
        self.lucky.clone()
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SquareRootOutcome {
    Root { root: i64 },
    Failed { error: RootError },
}

#[derive(Debug, Serialize)]
pub struct SquareRootReport {
    pub input: i64,
    #[serde(flatten)]
    pub outcome: SquareRootOutcome,
}

impl SquareRootReport {
    pub fn new(input: i64, outcome: Result<i64, RootError>) -> Self {
        let outcome = match outcome {
            Ok(root) => SquareRootOutcome::Root { root },
            Err(error) => SquareRootOutcome::Failed { error },
        };
        Self { input, outcome }
    }
}

impl Report for SquareRootReport {
    fn lines(&self) -> Vec<String> {
        match &self.outcome {
            SquareRootOutcome::Root { root } => {
                vec![format!("Square root of {} is {}.", self.input, root)]
            }
            SquareRootOutcome::Failed { error } => vec![error.to_string()],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FizzBuzzReport {
    pub start: i64,
    pub end: i64,
    pub values: Vec<FizzBuzz>,
}

impl Report for FizzBuzzReport {
    fn lines(&self) -> Vec<String> {
        self.values.iter().map(|v| v.to_string()).collect()
    }
}

impl Report for TemperatureReading {
    fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_string).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct GearStep {
    pub shift: Shift,
    pub gear: u8,
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GearboxReport {
    pub model: String,
    pub seats: u32,
    pub top_gear: u8,
    pub start_gear: u8,
    pub final_gear: u8,
    pub steps: Vec<GearStep>,
}

impl Report for GearboxReport {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} with {} seats, starting in gear {}",
            self.model, self.seats, self.start_gear
        )];
        lines.extend(self.steps.iter().map(|step| step.message.clone()));
        lines
    }
}

impl Report for Pick {
    fn lines(&self) -> Vec<String> {
        vec![self.value().to_string()]
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigReport {
    #[serde(skip)]
    pub rendered: String,
    pub config: crate::config::DrillsConfig,
}

impl Report for ConfigReport {
    fn lines(&self) -> Vec<String> {
        vec![self.rendered.trim_end().to_string()]
    }
}
