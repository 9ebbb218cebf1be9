//! A car with a bounded gearbox

use serde::Serialize;
use thiserror::Error;

/// Highest gear of the checkpoint's car
pub const DEFAULT_TOP_GEAR: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GearError {
    #[error("You're already in the top gear!")]
    AlreadyTopGear { gear: u8 },

    #[error("You're already in the lowest gear!")]
    AlreadyLowestGear,

    #[error("gear {gear} is outside 1..={top_gear}")]
    InvalidGear { gear: u8, top_gear: u8 },

    #[error("a car needs at least one seat")]
    NoSeats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    model: String,
    seats: u32,
    current_gear: u8,
    top_gear: u8,
}

impl Car {
    pub fn new(
        model: impl Into<String>,
        seats: u32,
        gear: u8,
        top_gear: u8,
    ) -> Result<Self, GearError> {
        if seats == 0 {
            return Err(GearError::NoSeats);
        }
        if gear == 0 || gear > top_gear {
            return Err(GearError::InvalidGear { gear, top_gear });
        }

        Ok(Self {
            model: model.into(),
            seats,
            current_gear: gear,
            top_gear,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn current_gear(&self) -> u8 {
        self.current_gear
    }

    pub fn top_gear(&self) -> u8 {
        self.top_gear
    }

    pub fn shift_up(&mut self) -> Result<u8, GearError> {
        if self.current_gear >= self.top_gear {
            return Err(GearError::AlreadyTopGear {
                gear: self.current_gear,
            });
        }
        self.current_gear += 1;
        Ok(self.current_gear)
    }

    pub fn shift_down(&mut self) -> Result<u8, GearError> {
        if self.current_gear <= 1 {
            return Err(GearError::AlreadyLowestGear);
        }
        self.current_gear -= 1;
        Ok(self.current_gear)
    }

    pub fn shift(&mut self, shift: Shift) -> Result<u8, GearError> {
        match shift {
            Shift::Up => self.shift_up(),
            Shift::Down => self.shift_down(),
        }
    }
}

/// Text shown after a successful shift
pub fn gear_message(gear: u8) -> String {
    format!("You are now in gear {}", gear)
}
