/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt::{Display, Formatter, Result as FmtResult};

use glam::{DQuat, DVec3};

use crate::muscle::arc::{compute_arc_points, ArcShape};
use crate::muscle::error::MuscleError;
use crate::muscle::Muscle;
use crate::units::Millimeters;

/// Axis of the unit cylinder a renderer draws before placement
pub const CYLINDER_AXIS: DVec3 = DVec3::Z;

/// Everything a renderer needs to draw one segment as a cylinder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPlacement {
    pub index: usize,
    pub start: DVec3,
    pub end: DVec3,
    /// Base of the cylinder, equal to `start`
    pub position: DVec3,
    /// Rotates `CYLINDER_AXIS` onto the segment direction
    pub orientation: DQuat,
    pub radius: Millimeters,
    pub height: Millimeters,
    pub color: [f32; 3],
}

impl SegmentPlacement {
    pub fn direction(&self) -> DVec3 {
        (self.end - self.start).normalize_or_zero()
    }
}

impl Display for SegmentPlacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let [r, g, b] = self.color;
        write!(
            f,
            "S{} ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2}) radius {} height {} rgb({r:.2}, {g:.2}, {b:.2})",
            self.index,
            self.start.x,
            self.start.y,
            self.start.z,
            self.end.x,
            self.end.y,
            self.end.z,
            self.radius,
            self.height,
        )
    }
}

/// Lay the muscle's segments along the arc between two anchors.
///
/// The radius comes from the straight anchor-to-anchor distance rather
/// than the arc length, so a bowed muscle is drawn slightly fatter than
/// its true volume would allow.
pub fn assemble_segments(
    muscle: &Muscle,
    p1: DVec3,
    p2: DVec3,
    shape: &ArcShape,
) -> Result<Vec<SegmentPlacement>, MuscleError> {
    let segment_count = muscle.segment_count();
    let points = compute_arc_points(p1, p2, segment_count + 1, muscle.contraction_ratio(), shape)?;
    let radius = muscle.segment_radius(Millimeters(p1.distance(p2)))?;
    let color = muscle.color();
    Ok(points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (start, end) = (pair[0], pair[1]);
            let span = end - start;
            let orientation = match span.try_normalize() {
                Some(direction) => DQuat::from_rotation_arc(CYLINDER_AXIS, direction),
                None => DQuat::IDENTITY,
            };
            SegmentPlacement {
                index,
                start,
                end,
                position: start,
                orientation,
                radius,
                height: Millimeters(span.length()),
                color,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MuscleConfig;

    fn muscle_with(segment_count: usize, ratio: f64) -> Muscle {
        let mut muscle = Muscle::new(&MuscleConfig {
            segment_count,
            ..Default::default()
        })
        .unwrap();
        muscle.set_contraction(ratio);
        muscle
    }

    #[test]
    fn test_one_placement_per_segment() {
        let p2 = DVec3::new(50.0, 0.0, 0.0);
        for segment_count in [1, 2, 5, 13] {
            for ratio in [0.0, 0.5, 1.0] {
                let muscle = muscle_with(segment_count, ratio);
                let placements =
                    assemble_segments(&muscle, DVec3::ZERO, p2, &ArcShape::default()).unwrap();
                assert_eq!(placements.len(), segment_count);
                for (index, placement) in placements.iter().enumerate() {
                    assert_eq!(placement.index, index);
                }
            }
        }
    }

    #[test]
    fn test_segments_chain_end_to_start() {
        let muscle = muscle_with(6, 0.25);
        let placements = assemble_segments(
            &muscle,
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(40.0, 10.0, 0.0),
            &ArcShape::default(),
        )
        .unwrap();
        for pair in placements.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for placement in &placements {
            assert_eq!(placement.position, placement.start);
        }
    }

    #[test]
    fn test_orientation_aligns_cylinder_axis() {
        let muscle = muscle_with(5, 0.1);
        let placements = assemble_segments(
            &muscle,
            DVec3::ZERO,
            DVec3::new(60.0, -20.0, 15.0),
            &ArcShape::default(),
        )
        .unwrap();
        for placement in placements {
            let axis = placement.orientation * CYLINDER_AXIS;
            assert!(axis.distance(placement.direction()) < 1e-9);
            assert!((*placement.height - placement.start.distance(placement.end)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_radius_uses_anchor_distance() {
        let muscle = muscle_with(5, 0.0);
        let placements = assemble_segments(
            &muscle,
            DVec3::ZERO,
            DVec3::new(50.0, 0.0, 0.0),
            &ArcShape::default(),
        )
        .unwrap();
        for placement in placements {
            assert!((*placement.radius - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_color_follows_contraction() {
        let muscle = muscle_with(3, 0.5);
        let placements = assemble_segments(
            &muscle,
            DVec3::ZERO,
            DVec3::new(0.0, 30.0, 0.0),
            &ArcShape::default(),
        )
        .unwrap();
        assert!(placements.iter().all(|p| p.color == [0.75, 0.1, 0.5]));
    }

    #[test]
    fn test_coincident_anchors_fail() {
        let muscle = muscle_with(3, 0.0);
        let p = DVec3::new(5.0, 5.0, 5.0);
        assert!(matches!(
            assemble_segments(&muscle, p, p, &ArcShape::default()),
            Err(MuscleError::CoincidentAnchors(_))
        ));
    }
}
