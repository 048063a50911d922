/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use glam::DVec3;
use slotmap::{new_key_type, SlotMap};

use crate::muscle::error::MuscleError;

new_key_type! {
    /// Lookup key for an anchor, the muscle never holds the position itself
    pub struct AnchorId;
}

/// Anything that can say where an anchor currently is
pub trait AnchorProvider {
    fn anchor_position(&self, id: AnchorId) -> Option<DVec3>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub name: String,
    pub position: DVec3,
}

/// Anchors kept in memory, for scripted scenes and tests
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    anchors: SlotMap<AnchorId, Anchor>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, position: DVec3) -> AnchorId {
        self.anchors.insert(Anchor {
            name: name.into(),
            position,
        })
    }

    pub fn move_to(&mut self, id: AnchorId, position: DVec3) -> Result<(), MuscleError> {
        let anchor = self
            .anchors
            .get_mut(id)
            .ok_or(MuscleError::AnchorNotFound(id))?;
        anchor.position = position;
        Ok(())
    }

    pub fn remove(&mut self, id: AnchorId) -> Option<Anchor> {
        self.anchors.remove(id)
    }

    pub fn name(&self, id: AnchorId) -> Option<&str> {
        self.anchors.get(id).map(|anchor| anchor.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

impl AnchorProvider for AnchorSet {
    fn anchor_position(&self, id: AnchorId) -> Option<DVec3> {
        self.anchors.get(id).map(|anchor| anchor.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_move() {
        let mut anchors = AnchorSet::new();
        let base = anchors.insert("base", DVec3::ZERO);
        let tip = anchors.insert("tip", DVec3::X);
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors.name(tip), Some("tip"));
        anchors.move_to(tip, DVec3::new(9.0, 0.0, 0.0)).unwrap();
        assert_eq!(anchors.anchor_position(tip), Some(DVec3::new(9.0, 0.0, 0.0)));
        assert_eq!(anchors.anchor_position(base), Some(DVec3::ZERO));
    }

    #[test]
    fn test_removed_anchor_is_not_found() {
        let mut anchors = AnchorSet::new();
        let gone = anchors.insert("gone", DVec3::Y);
        anchors.remove(gone);
        assert!(anchors.is_empty());
        assert_eq!(anchors.anchor_position(gone), None);
        assert_eq!(
            anchors.move_to(gone, DVec3::ZERO),
            Err(MuscleError::AnchorNotFound(gone))
        );
    }
}
