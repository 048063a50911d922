/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fmt::{Display, Formatter, Result as FmtResult};

use log::{debug, warn};

use crate::anchor::{AnchorId, AnchorProvider};
use crate::muscle::arc::ArcShape;
use crate::muscle::error::MuscleError;
use crate::muscle::segment::assemble_segments;
use crate::muscle::Muscle;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    MissingAnchor(AnchorId),
    CoincidentAnchors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    Placed(usize),
    Skipped(SkipReason),
}

impl Display for UpdateOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UpdateOutcome::Placed(count) => write!(f, "placed {count} segments"),
            UpdateOutcome::Skipped(SkipReason::MissingAnchor(id)) => {
                write!(f, "skipped, anchor {id:?} missing")
            }
            UpdateOutcome::Skipped(SkipReason::CoincidentAnchors) => {
                write!(f, "skipped, anchors coincide")
            }
        }
    }
}

/// One muscle hooked up between two anchors and drawn by a renderer.
///
/// The rig owns the handles of the segments it has drawn, indexed by
/// segment position, and is the only way they get placed or removed.
pub struct MuscleRig<R: Renderer> {
    muscle: Muscle,
    start_anchor: AnchorId,
    end_anchor: AnchorId,
    shape: ArcShape,
    renderer: R,
    segments: Vec<R::Handle>,
}

impl<R: Renderer> MuscleRig<R> {
    pub fn new(
        muscle: Muscle,
        start_anchor: AnchorId,
        end_anchor: AnchorId,
        shape: ArcShape,
        renderer: R,
    ) -> Self {
        Self {
            muscle,
            start_anchor,
            end_anchor,
            shape,
            renderer,
            segments: Vec::new(),
        }
    }

    pub fn muscle(&self) -> &Muscle {
        &self.muscle
    }

    pub fn muscle_mut(&mut self) -> &mut Muscle {
        &mut self.muscle
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn anchors(&self) -> (AnchorId, AnchorId) {
        (self.start_anchor, self.end_anchor)
    }

    pub fn segment_handles(&self) -> &[R::Handle] {
        &self.segments
    }

    pub fn set_contraction(&mut self, ratio: f64) {
        self.muscle.set_contraction(ratio);
    }

    /// Read both anchors and redraw every segment.
    ///
    /// A missing anchor or coincident anchors leave the drawing as it was
    /// and come back as `Skipped`, to be retried on the next update.
    pub fn update(&mut self, anchors: &impl AnchorProvider) -> Result<UpdateOutcome, MuscleError> {
        let Some(start) = anchors.anchor_position(self.start_anchor) else {
            warn!("Start anchor {:?} not found, muscle not updated", self.start_anchor);
            return Ok(UpdateOutcome::Skipped(SkipReason::MissingAnchor(self.start_anchor)));
        };
        let Some(end) = anchors.anchor_position(self.end_anchor) else {
            warn!("End anchor {:?} not found, muscle not updated", self.end_anchor);
            return Ok(UpdateOutcome::Skipped(SkipReason::MissingAnchor(self.end_anchor)));
        };
        let placements = match assemble_segments(&self.muscle, start, end, &self.shape) {
            Ok(placements) => placements,
            Err(MuscleError::CoincidentAnchors(distance)) => {
                warn!("Anchors {distance:e} apart, muscle not updated");
                return Ok(UpdateOutcome::Skipped(SkipReason::CoincidentAnchors));
            }
            Err(error) => return Err(error),
        };
        if self.segments.is_empty() {
            self.segments = (0..placements.len())
                .map(|index| self.renderer.create_segment(index))
                .collect();
        }
        for (handle, placement) in self.segments.iter().zip(&placements) {
            self.renderer.place_segment(handle, placement);
        }
        debug!(
            "Placed {} segments at {} ({})",
            placements.len(),
            self.muscle.contraction_percent(),
            self.muscle.current_length()
        );
        Ok(UpdateOutcome::Placed(placements.len()))
    }

    /// Remove every drawn segment
    pub fn clear(&mut self) {
        for handle in self.segments.drain(..) {
            self.renderer.remove_segment(handle);
        }
    }

    pub fn into_parts(mut self) -> (Muscle, R) {
        self.clear();
        (self.muscle, self.renderer)
    }
}
