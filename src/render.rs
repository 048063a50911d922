/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use slotmap::{new_key_type, SlotMap};

use crate::muscle::segment::SegmentPlacement;

/// Receives segment placements and owns whatever is actually drawn
pub trait Renderer {
    type Handle;

    fn create_segment(&mut self, index: usize) -> Self::Handle;

    fn place_segment(&mut self, handle: &Self::Handle, placement: &SegmentPlacement);

    fn remove_segment(&mut self, handle: Self::Handle);
}

new_key_type! {
    pub struct SegmentKey;
}

#[derive(Debug, Clone)]
pub struct RecordedSegment {
    pub index: usize,
    pub placement: Option<SegmentPlacement>,
    pub placed_count: usize,
}

/// Keeps the latest placement of every live segment in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    segments: SlotMap<SegmentKey, RecordedSegment>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, key: SegmentKey) -> Option<&RecordedSegment> {
        self.segments.get(key)
    }

    /// Latest placements, ordered by segment index
    pub fn placements(&self) -> Vec<SegmentPlacement> {
        let mut placements: Vec<_> = self
            .segments
            .values()
            .filter_map(|segment| segment.placement)
            .collect();
        placements.sort_by_key(|placement| placement.index);
        placements
    }
}

impl Renderer for RecordingRenderer {
    type Handle = SegmentKey;

    fn create_segment(&mut self, index: usize) -> SegmentKey {
        self.segments.insert(RecordedSegment {
            index,
            placement: None,
            placed_count: 0,
        })
    }

    fn place_segment(&mut self, handle: &SegmentKey, placement: &SegmentPlacement) {
        if let Some(segment) = self.segments.get_mut(*handle) {
            segment.placement = Some(*placement);
            segment.placed_count += 1;
        }
    }

    fn remove_segment(&mut self, handle: SegmentKey) {
        self.segments.remove(handle);
    }
}
