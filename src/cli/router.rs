//! Command routing and execution
//!
//! This module handles routing CLI commands to their exercises and rendering
//! the result.

use crate::cli::args::{Commands, ShiftArg};
use crate::cli::help::generate_help;
use crate::cli::report::{
    render, ConfigReport, FizzBuzzReport, GearStep, GearboxReport, LuckyReport, SquareRootReport,
};
use crate::cli::validation::{validate_fizzbuzz_range, validate_gearbox};
use crate::config::{DrillsConfig, OutputFormat};
use crate::error::{DrillError, ErrorCode};
use crate::exercises::gearbox::gear_message;
use crate::exercises::{
    fizzbuzz, lucky_numbers, pick_or_random, Car, TemperatureReading, LUCKY_NUMBERS_INPUT,
};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Execute a CLI command and return the text to print
pub fn execute_command(
    command: Option<Commands>,
    config: &DrillsConfig,
    format: OutputFormat,
) -> Result<String> {
    let Some(command) = command else {
        return Ok(generate_help());
    };

    match command {
        Commands::Lucky { numbers } => {
            let input = if numbers.is_empty() {
                debug!("No numbers given, using the checkpoint sample input");
                LUCKY_NUMBERS_INPUT.to_vec()
            } else {
                numbers
            };
            let lucky = lucky_numbers(&input);
            info!("{} of {} numbers are lucky", lucky.len(), input.len());
            render(&LuckyReport { input, lucky }, format)
        }
        Commands::Sqrt { number } => {
            let solver = config.square_root.solver();
            let outcome = solver.solve(number);
            if let Err(e) = &outcome {
                debug!(
                    kind = e.name(),
                    bounds = ?solver.bounds(),
                    window = ?solver.window(),
                    "No square root for {}",
                    e.input()
                );
            }
            render(&SquareRootReport::new(number, outcome), format)
        }
        Commands::FizzBuzz { start, end } => {
            let start = start.unwrap_or(config.fizzbuzz.start);
            let end = end.unwrap_or(config.fizzbuzz.end);
            let range = validate_fizzbuzz_range(start, end)?;
            debug!("FizzBuzz over {:?}", range);
            let values = fizzbuzz(range);
            render(&FizzBuzzReport { start, end, values }, format)
        }
        Commands::Temperature { celsius } => {
            render(&TemperatureReading::from_celsius(celsius), format)
        }
        Commands::Gearbox {
            model,
            seats,
            gear,
            shifts,
        } => run_gearbox(model, seats, gear, shifts, config, format),
        Commands::Pick { numbers, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let numbers = (!numbers.is_empty()).then_some(numbers);
            let pick = pick_or_random(numbers.as_deref(), config.pick.fallback_range(), &mut rng)
                .ok_or_else(|| {
                    DrillError::validation_with_code(
                        ErrorCode::VALIDATION_RANGE,
                        "nothing to pick and the fallback range is empty",
                        Some("pick".to_string()),
                    )
                })?;
            debug!(?pick, "Picked a number");
            render(&pick, format)
        }
        Commands::Config => {
            let report = ConfigReport {
                rendered: config.to_toml()?,
                config: config.clone(),
            };
            render(&report, format)
        }
    }
}

fn run_gearbox(
    model: String,
    seats: u32,
    gear: u8,
    shifts: Vec<ShiftArg>,
    config: &DrillsConfig,
    format: OutputFormat,
) -> Result<String> {
    let top_gear = config.gearbox.top_gear;
    validate_gearbox(seats, gear, top_gear)?;

    let mut car = Car::new(model, seats, gear, top_gear)?;
    let steps = shifts
        .into_iter()
        .map(|arg| {
            let shift = arg.into();
            match car.shift(shift) {
                Ok(gear) => GearStep {
                    shift,
                    gear,
                    ok: true,
                    message: gear_message(gear),
                },
                Err(e) => {
                    warn!("Shift {:?} refused: {}", shift, e);
                    GearStep {
                        shift,
                        gear: car.current_gear(),
                        ok: false,
                        message: e.to_string(),
                    }
                }
            }
        })
        .collect();

    let report = GearboxReport {
        model: car.model().to_string(),
        seats: car.seats(),
        top_gear: car.top_gear(),
        start_gear: gear,
        final_gear: car.current_gear(),
        steps,
    };
    render(&report, format)
}
