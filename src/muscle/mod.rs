/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::f64::consts::PI;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::config::MuscleConfig;
use crate::muscle::error::MuscleError;
use crate::units::{CubicMillimeters, Millimeters, Percent};

pub mod arc;
pub mod error;
pub mod segment;

/// Color of a fully relaxed muscle, blue
pub const RELAXED_COLOR: [f32; 3] = [0.5, 0.1, 1.0];
/// Color of a fully contracted muscle, red
pub const CONTRACTED_COLOR: [f32; 3] = [1.0, 0.1, 0.0];

/// Contraction state of one fiber-type pneumatic muscle.
///
/// The rest geometry is fixed at construction. The only thing that moves
/// is the contraction ratio, and everything else (current length, radius,
/// color) is derived from it on demand, so nothing can drift out of step.
#[derive(Debug, Clone, PartialEq)]
pub struct Muscle {
    original_length: Millimeters,
    diameter: Millimeters,
    segment_count: usize,
    contraction_ratio: f64,
    initial_volume: CubicMillimeters,
    max_contraction: f64,
    radial_expansion: f64,
}

/// Placement of one segment when the muscle is laid out as a straight stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedSegment {
    pub axial_offset: Millimeters,
    pub radius: Millimeters,
    pub height: Millimeters,
}

impl Muscle {
    pub fn new(config: &MuscleConfig) -> Result<Self, MuscleError> {
        let MuscleConfig {
            length,
            diameter,
            segment_count,
            max_contraction,
            radial_expansion,
            ..
        } = *config;
        if !(length.is_finite() && length > 0.0) {
            return Err(MuscleError::invalid_geometry(format!("length {length}")));
        }
        if !(diameter.is_finite() && diameter > 0.0) {
            return Err(MuscleError::invalid_geometry(format!("diameter {diameter}")));
        }
        if segment_count == 0 {
            return Err(MuscleError::invalid_geometry("no segments"));
        }
        if !(max_contraction > 0.0 && max_contraction < 1.0) {
            return Err(MuscleError::invalid_geometry(format!(
                "max contraction {max_contraction}"
            )));
        }
        if !(radial_expansion >= 1.0) {
            return Err(MuscleError::invalid_geometry(format!(
                "radial expansion {radial_expansion}"
            )));
        }
        config.arc_shape()?;
        Ok(Self {
            original_length: Millimeters(length),
            diameter: Millimeters(diameter),
            segment_count,
            contraction_ratio: 0.0,
            initial_volume: CubicMillimeters(PI * diameter * diameter * length),
            max_contraction,
            radial_expansion,
        })
    }

    /// Any value is accepted, it is clamped into [0, 1]
    pub fn set_contraction(&mut self, ratio: f64) {
        self.contraction_ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
    }

    pub fn set_contraction_percent(&mut self, percent: Percent) {
        self.set_contraction(percent.as_factor());
    }

    pub fn contraction_ratio(&self) -> f64 {
        self.contraction_ratio
    }

    pub fn contraction_percent(&self) -> Percent {
        Percent::from_factor(self.contraction_ratio)
    }

    pub fn original_length(&self) -> Millimeters {
        self.original_length
    }

    pub fn current_length(&self) -> Millimeters {
        self.original_length * (1.0 - self.contraction_ratio * self.max_contraction)
    }

    pub fn diameter(&self) -> Millimeters {
        self.diameter
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn initial_volume(&self) -> CubicMillimeters {
        self.initial_volume
    }

    pub fn max_contraction(&self) -> f64 {
        self.max_contraction
    }

    pub fn radial_expansion(&self) -> f64 {
        self.radial_expansion
    }

    /// Radius that keeps the rest volume when the muscle spans the given length.
    /// Shorter spans give fatter segments.
    pub fn segment_radius(&self, current_total_length: Millimeters) -> Result<Millimeters, MuscleError> {
        let length = *current_total_length;
        if !(length.is_finite() && length > 0.0) {
            return Err(MuscleError::DegenerateLength(length));
        }
        Ok(Millimeters((self.initial_volume / (current_total_length * PI)).sqrt()))
    }

    /// Straight-stack layout: segments piled along the muscle axis, with a
    /// radius that swells linearly towards `radial_expansion` as it contracts.
    pub fn stacked_segment(&self, index: usize) -> Result<StackedSegment, MuscleError> {
        if index >= self.segment_count {
            return Err(MuscleError::SegmentOutOfRange {
                index,
                count: self.segment_count,
            });
        }
        let height = self.current_length() / self.segment_count as f64;
        let radius_factor = 1.0 + (self.radial_expansion - 1.0) * self.contraction_ratio;
        Ok(StackedSegment {
            axial_offset: height * index as f64,
            radius: self.diameter / 2.0 * radius_factor,
            height,
        })
    }

    /// Linear ramp from the relaxed to the contracted color
    pub fn color(&self) -> [f32; 3] {
        let ratio = self.contraction_ratio as f32;
        [0.5 + 0.5 * ratio, 0.1, 1.0 - ratio]
    }
}

impl Display for Muscle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Contraction: {}\nLength: {} (rest {})\nSegments: {}",
            self.contraction_percent(),
            self.current_length(),
            self.original_length,
            self.segment_count
        )
    }
}
