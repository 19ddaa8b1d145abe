//! Layout configuration and output models.

use crate::error::NotegraphError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Tuning parameters for the force simulation.
///
/// Defaults reproduce the widget's physical constants: short strong
/// hierarchy springs, long loose relation springs, stronger repulsion for
/// main nodes, a hard ~70-unit collision separation, and a vertical pull
/// that grows with hierarchy level for a top-to-bottom read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rest distance for hierarchy links (default: 120)
    pub hierarchy_distance: f64,
    /// Spring strength for hierarchy links (default: 0.8)
    pub hierarchy_strength: f64,
    /// Rest distance for relation links (default: 250)
    pub relation_distance: f64,
    /// Spring strength for relation links (default: 0.2)
    pub relation_strength: f64,

    /// Charge (repulsion) for main nodes (default: -2000)
    pub charge_main: f64,
    /// Charge (repulsion) for all other nodes (default: -1000)
    pub charge_other: f64,

    /// Strength of the pull toward the canvas center (default: 0.05)
    pub center_strength: f64,
    /// Strength of the horizontal centering force (default: 0.05)
    pub x_strength: f64,
    /// Per-level multiplier for the vertical pull (default: 0.1)
    pub y_strength_per_level: f64,
    /// Vertical position of level 0 (default: 100)
    pub top_margin: f64,
    /// Vertical spacing between hierarchy levels (default: 120)
    pub level_spacing: f64,

    /// Hard minimum separation between node centers (default: 70)
    pub collision_radius: f64,
    /// Positional correction passes per tick (default: 3)
    pub collision_iterations: usize,

    /// Distance floor applied before inverse-distance forces (default: 1)
    pub min_distance: f64,

    /// Per-tick alpha decay rate (default: ≈0.0228, settles in ~300 ticks)
    pub alpha_decay: f64,
    /// Alpha threshold below which the simulation is settled (default: 0.001)
    pub alpha_min: f64,
    /// Alpha restored by `reheat` during interaction (default: 0.3)
    pub reheat_alpha: f64,
    /// Velocity retained per tick after forces apply (default: 0.6)
    pub velocity_decay: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hierarchy_distance: 120.0,
            hierarchy_strength: 0.8,
            relation_distance: 250.0,
            relation_strength: 0.2,
            charge_main: -2000.0,
            charge_other: -1000.0,
            center_strength: 0.05,
            x_strength: 0.05,
            y_strength_per_level: 0.1,
            top_margin: 100.0,
            level_spacing: 120.0,
            collision_radius: 70.0,
            collision_iterations: 3,
            min_distance: 1.0,
            alpha_decay: 1.0 - 0.001f64.powf(1.0 / 300.0),
            alpha_min: 0.001,
            reheat_alpha: 0.3,
            velocity_decay: 0.6,
        }
    }
}

impl LayoutConfig {
    /// Check that all parameters are in range.
    pub fn validate(&self) -> Result<(), NotegraphError> {
        if self.min_distance <= 0.0 {
            return Err(NotegraphError::InvalidConfig(
                "min_distance must be positive".into(),
            ));
        }
        if self.collision_radius < 0.0 {
            return Err(NotegraphError::InvalidConfig(
                "collision_radius must be non-negative".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.alpha_decay) {
            return Err(NotegraphError::InvalidConfig(
                "alpha_decay must be in [0, 1)".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.velocity_decay) {
            return Err(NotegraphError::InvalidConfig(
                "velocity_decay must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Output
// ============================================================================

/// One node's position in a layout snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Node id from the materialized graph
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_config_defaults() {
        let config = LayoutConfig::default();
        assert!((config.hierarchy_distance - 120.0).abs() < f64::EPSILON);
        assert!((config.hierarchy_strength - 0.8).abs() < f64::EPSILON);
        assert!((config.relation_distance - 250.0).abs() < f64::EPSILON);
        assert!((config.relation_strength - 0.2).abs() < f64::EPSILON);
        assert!((config.charge_main - -2000.0).abs() < f64::EPSILON);
        assert!((config.charge_other - -1000.0).abs() < f64::EPSILON);
        assert!((config.collision_radius - 70.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_layout_config_rejects_zero_min_distance() {
        let config = LayoutConfig {
            min_distance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_layout_config_partial_yaml_uses_defaults() {
        let config: LayoutConfig = serde_yaml::from_str("collision_radius: 40").unwrap();
        assert!((config.collision_radius - 40.0).abs() < f64::EPSILON);
        assert!((config.hierarchy_distance - 120.0).abs() < f64::EPSILON);
    }
}
