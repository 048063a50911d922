/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Circular arc between two anchors, bowed outward when the muscle is
//! relaxed and pulled straight as it contracts.

use glam::{DQuat, DVec3};

use crate::muscle::error::MuscleError;

/// Anchors closer than this cannot define a chord
pub const DEGENERATE_DISTANCE: f64 = 1e-9;

const PRIMARY_UP: DVec3 = DVec3::Z;
const SECONDARY_UP: DVec3 = DVec3::Y;
/// Beyond this alignment with the primary up axis, the secondary one is used
const PARALLEL_LIMIT: f64 = 0.99;

/// How far the arc bows, and when it gives up bowing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    /// Sagitta at zero contraction, as a fraction of the chord
    pub arch_height_fraction: f64,
    /// Sagitta below which the points are laid on the straight chord
    pub flatten_tolerance: f64,
}

impl Default for ArcShape {
    fn default() -> Self {
        Self {
            arch_height_fraction: 0.2,
            flatten_tolerance: 0.1,
        }
    }
}

impl ArcShape {
    /// A sagitta of half the chord or more is no longer the minor arc, and
    /// a non-positive tolerance lets a zero sagitta reach the circle math.
    pub fn validate(&self) -> Result<(), MuscleError> {
        let ArcShape {
            arch_height_fraction,
            flatten_tolerance,
        } = *self;
        if !(0.0..0.5).contains(&arch_height_fraction) {
            return Err(MuscleError::invalid_geometry(format!(
                "arch height fraction {arch_height_fraction}"
            )));
        }
        if !(flatten_tolerance.is_finite() && flatten_tolerance > 0.0) {
            return Err(MuscleError::invalid_geometry(format!(
                "flatten tolerance {flatten_tolerance}"
            )));
        }
        Ok(())
    }
}

/// Bulge height of the arc over a chord of the given length
pub fn sagitta(distance: f64, contraction_ratio: f64, shape: &ArcShape) -> f64 {
    let max_height = distance * shape.arch_height_fraction;
    max_height * (1.0 - contraction_ratio.clamp(0.0, 1.0))
}

/// Radius of the circle through both chord ends with the given sagitta
pub fn circumradius(distance: f64, height: f64) -> f64 {
    let half = distance / 2.0;
    (half * half + height * height) / (2.0 * height)
}

/// Unit vector perpendicular to the chord, pointing where the arc bulges
pub fn bulge_direction(chord_direction: DVec3) -> DVec3 {
    let up = if chord_direction.dot(PRIMARY_UP).abs() > PARALLEL_LIMIT {
        SECONDARY_UP
    } else {
        PRIMARY_UP
    };
    chord_direction.cross(up).cross(chord_direction).normalize()
}

/// Points along the arc from `p1` to `p2`, both included.
///
/// The result always holds exactly `num_points` points. When the sagitta is
/// below the flatten tolerance the points are spread evenly along the chord.
pub fn compute_arc_points(
    p1: DVec3,
    p2: DVec3,
    num_points: usize,
    contraction_ratio: f64,
    shape: &ArcShape,
) -> Result<Vec<DVec3>, MuscleError> {
    if num_points < 2 {
        return Err(MuscleError::TooFewPoints(num_points));
    }
    shape.validate()?;
    let chord = p2 - p1;
    let distance = chord.length();
    if !(distance > DEGENERATE_DISTANCE) {
        return Err(MuscleError::CoincidentAnchors(distance));
    }
    let height = sagitta(distance, contraction_ratio, shape);
    if height < shape.flatten_tolerance {
        return Ok(straight_points(p1, p2, num_points));
    }

    let radius = circumradius(distance, height);
    let bulge = bulge_direction(chord / distance);
    let midpoint = p1.lerp(p2, 0.5);
    let center = midpoint - bulge * (radius - height);

    let start = p1 - center;
    let end = p2 - center;
    let total_angle = start.angle_between(end);
    let axis = start.cross(end);
    if axis.length_squared() < f64::EPSILON {
        // start and end are (anti)parallel, no plane to rotate in
        return Ok(straight_points(p1, p2, num_points));
    }
    let axis = axis.normalize();

    let last = (num_points - 1) as f64;
    Ok((0..num_points)
        .map(|i| {
            let angle = total_angle * i as f64 / last;
            center + DQuat::from_axis_angle(axis, angle) * start
        })
        .collect())
}

fn straight_points(p1: DVec3, p2: DVec3, num_points: usize) -> Vec<DVec3> {
    let last = (num_points - 1) as f64;
    (0..num_points)
        .map(|i| p1.lerp(p2, i as f64 / last))
        .collect()
}
