/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Fiber-type pneumatic muscle laid out as a chain of cylinders.
//!
//! A [`Muscle`] maps a contraction ratio to length and radius while keeping
//! its volume, [`muscle::arc`] bows the chain between two anchors, and a
//! [`MuscleRig`] hands the resulting segment placements to a [`Renderer`].

pub mod anchor;
pub mod animator;
pub mod config;
pub mod muscle;
pub mod render;
pub mod rig;
pub mod units;

pub use anchor::{AnchorId, AnchorProvider, AnchorSet};
pub use animator::Animator;
pub use config::MuscleConfig;
pub use muscle::arc::{compute_arc_points, ArcShape};
pub use muscle::error::MuscleError;
pub use muscle::segment::{assemble_segments, SegmentPlacement};
pub use muscle::Muscle;
pub use render::{RecordingRenderer, Renderer};
pub use rig::{MuscleRig, SkipReason, UpdateOutcome};
