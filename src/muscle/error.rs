/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use thiserror::Error;

use crate::anchor::AnchorId;

/// Error types that can occur in the muscle model
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MuscleError {
    /// Rest geometry that cannot describe a physical muscle
    #[error("invalid muscle geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// An arc needs at least its two end points
    #[error("too few arc points: need at least 2, got {0}")]
    TooFewPoints(usize),

    /// The two anchors sit on top of each other, so the arc is undefined
    #[error("anchors coincide (distance {0:e})")]
    CoincidentAnchors(f64),

    /// A total length that would divide by zero in the volume relation
    #[error("degenerate muscle length {0}")]
    DegenerateLength(f64),

    /// Asked for a segment beyond the segment count
    #[error("segment {index} out of range (muscle has {count})")]
    SegmentOutOfRange { index: usize, count: usize },

    /// The anchor provider does not know this anchor
    #[error("anchor {0:?} not found")]
    AnchorNotFound(AnchorId),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),
}

impl MuscleError {
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        MuscleError::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
