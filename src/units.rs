/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Physical units for the muscle model
//!
//! Type-safe wrappers for the handful of quantities that cross the
//! boundary between the model and its drivers, so a slider percentage
//! never gets mistaken for a ratio or a length.

use std::ops::{Deref, Div, Mul};

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Millimeters(pub f64);

/// Volume in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct CubicMillimeters(pub f64);

/// Percentage value (0-100)
/// Provides type-safe conversion to factors (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(pub f64);

impl Deref for Millimeters {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for CubicMillimeters {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for Percent {
    type Target = f64;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Percent {
    /// Convert percentage to a factor (0.0-1.0)
    /// Example: 50% → 0.5, 100% → 1.0
    pub fn as_factor(self) -> f64 {
        self.0 / 100.0
    }

    /// Create from a factor (0.0-1.0)
    /// Example: 0.5 → 50%, 1.0 → 100%
    pub fn from_factor(factor: f64) -> Self {
        Self(factor * 100.0)
    }
}

// Arithmetic operations for dimensional analysis

impl Mul<f64> for Millimeters {
    type Output = Millimeters;

    fn mul(self, scalar: f64) -> Millimeters {
        Millimeters(self.0 * scalar)
    }
}

impl Div<f64> for Millimeters {
    type Output = Millimeters;

    fn div(self, scalar: f64) -> Millimeters {
        Millimeters(self.0 / scalar)
    }
}

// Volume over length leaves an area
impl Div<Millimeters> for CubicMillimeters {
    type Output = f64;

    fn div(self, length: Millimeters) -> f64 {
        self.0 / length.0
    }
}

impl std::fmt::Display for Millimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mm", self.0)
    }
}

impl std::fmt::Display for CubicMillimeters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} mm³", self.0)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}
