//! Verification constants with documented defaults
//!
//! All magic numbers used by the checks are collected here with explanations
//! of their purpose and how they interact with each other.

use crate::geom::Rect;

/// Fixed numeric constants for one verification run
///
/// Defaults match the standard problem setting: a unit-square workspace,
/// 0.05-length booms and millimetre-scale primitive steps.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Maximum error tolerance applied to every comparison
    ///
    /// Every "must hold" rule is slackened by this amount to absorb
    /// floating-point and discretization noise. Workspace bounds are grown
    /// by it, obstacles shrunk by it, so points resting exactly on a
    /// boundary are tolerated.
    pub max_error: f64,

    /// Maximum displacement of any single vessel in one primitive step
    ///
    /// A step between consecutive configurations is valid when no vessel
    /// moves further than `max_step + max_error`.
    pub max_step: f64,

    /// Minimum allowed boom length
    ///
    /// Booms are rigid; min and max are equal in the standard setting and
    /// the range exists only to absorb tolerance slack.
    pub min_boom_length: f64,

    /// Maximum allowed boom length
    pub max_boom_length: f64,

    /// Workspace bounds rectangle
    ///
    /// Tested against its tolerance-grown version, so boundary points are
    /// inside ("lenient bounds").
    pub bounds: Rect,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_error: 1e-5,
            max_step: 0.001,
            min_boom_length: 0.05,
            max_boom_length: 0.05,
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
        }
    }
}

impl VerifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tolerance, keeping the other defaults
    pub fn with_max_error(max_error: f64) -> Self {
        Self {
            max_error,
            ..Self::default()
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.max_error <= 0.0 {
            return Err("max_error must be positive".into());
        }
        if self.max_step <= 0.0 {
            return Err("max_step must be positive".into());
        }
        if self.min_boom_length > self.max_boom_length {
            return Err(format!(
                "min_boom_length ({}) should be <= max_boom_length ({})",
                self.min_boom_length, self.max_boom_length
            ));
        }
        if self.bounds.w <= 0.0 || self.bounds.h <= 0.0 {
            return Err("bounds must have positive extent".into());
        }
        Ok(())
    }

    /// Minimum polygon area required for the given number of vessels
    ///
    /// The chain must always enclose at least the area of a circle of
    /// radius 0.007 per boom.
    pub fn minimum_area(&self, asv_count: usize) -> f64 {
        let radius = 0.007 * (asv_count.saturating_sub(1) as f64);
        std::f64::consts::PI * radius * radius
    }
}
