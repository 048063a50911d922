/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::muscle::arc::ArcShape;
use crate::muscle::error::MuscleError;

/// Rest geometry and tuning of one muscle, plus the animation pace.
/// Every field has a default, so a config file only names what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuscleConfig {
    /// Rest length in millimeters
    pub length: f64,
    /// Rest diameter in millimeters
    pub diameter: f64,
    pub segment_count: usize,
    /// Fraction of the rest length lost at full contraction
    pub max_contraction: f64,
    /// Radius factor reached at full contraction (straight-stack layout)
    pub radial_expansion: f64,
    /// Sagitta of the fully extended arc, as a fraction of anchor distance
    pub arch_height_fraction: f64,
    /// Sagitta below which the arc is drawn as a straight line
    pub flatten_tolerance: f64,
    /// Contraction change per animation tick
    pub animation_step: f64,
    pub tick_millis: u64,
}

impl Default for MuscleConfig {
    fn default() -> Self {
        Self {
            length: 50.0,
            diameter: 5.0,
            segment_count: 5,
            max_contraction: 0.5,
            radial_expansion: 1.3,
            arch_height_fraction: 0.2,
            flatten_tolerance: 0.1,
            animation_step: 0.02,
            tick_millis: 50,
        }
    }
}

impl MuscleConfig {
    pub fn from_json(source: &str) -> Result<Self, MuscleError> {
        serde_json::from_str(source).map_err(|e| MuscleError::Config(e.to_string()))
    }

    /// Effective configuration, for echoing back what a run actually used
    pub fn to_json(&self) -> Result<String, MuscleError> {
        serde_json::to_string_pretty(self).map_err(|e| MuscleError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MuscleError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| MuscleError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&source)
    }

    pub fn arc_shape(&self) -> Result<ArcShape, MuscleError> {
        let shape = ArcShape {
            arch_height_fraction: self.arch_height_fraction,
            flatten_tolerance: self.flatten_tolerance,
        };
        shape.validate()?;
        Ok(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_muscle() {
        let config = MuscleConfig::default();
        assert_eq!(config.length, 50.0);
        assert_eq!(config.diameter, 5.0);
        assert_eq!(config.segment_count, 5);
        assert_eq!(config.max_contraction, 0.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MuscleConfig::from_json(r#"{ "segment_count": 12, "radial_expansion": 1.5 }"#)
            .unwrap();
        assert_eq!(config.segment_count, 12);
        assert_eq!(config.radial_expansion, 1.5);
        assert_eq!(config.length, 50.0);
        assert_eq!(config.arch_height_fraction, 0.2);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let result = MuscleConfig::from_json("{ segment_count: }");
        assert!(matches!(result, Err(MuscleError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "length": 120.0, "tick_millis": 20 }}"#).unwrap();
        let config = MuscleConfig::load(file.path()).unwrap();
        assert_eq!(config.length, 120.0);
        assert_eq!(config.tick_millis, 20);
    }

    #[test]
    fn test_echoed_config_reads_back() {
        let config = MuscleConfig {
            segment_count: 9,
            arch_height_fraction: 0.3,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"segment_count\": 9"));
        assert_eq!(MuscleConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_arc_shape_checked() {
        let config = MuscleConfig::from_json(r#"{ "arch_height_fraction": 0.8 }"#).unwrap();
        assert!(matches!(config.arc_shape(), Err(MuscleError::InvalidGeometry { .. })));
        let config = MuscleConfig::from_json(r#"{ "flatten_tolerance": 0.0 }"#).unwrap();
        assert!(matches!(config.arc_shape(), Err(MuscleError::InvalidGeometry { .. })));
        let shape = MuscleConfig::default().arc_shape().unwrap();
        assert_eq!(shape, ArcShape::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = MuscleConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(MuscleError::Config(_))));
    }
}
