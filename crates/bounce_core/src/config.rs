use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Physical parameters of the effective Friedmann model.
/// Fixed for one run; every numerical stage borrows the same record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosmologyParams {
    /// Friedmann coupling C
    pub coupling: f64,
    /// Matter density today
    pub rho_matter: f64,
    /// Radiation density today
    pub rho_radiation: f64,
    /// Constant (possibly negative) dark-energy-like density
    pub rho_lambda: f64,
    /// Critical density where the correction factor (1 − ρ/ρ_c) vanishes
    pub rho_critical: f64,
    /// Cosmological constant Λ
    pub cosmological_constant: f64,
    /// Spatial curvature k
    pub curvature: f64,
}

impl Default for CosmologyParams {
    fn default() -> Self {
        Self {
            coupling: COUPLING,
            rho_matter: RHO_MATTER_0,
            rho_radiation: RHO_RADIATION_0,
            rho_lambda: RHO_LAMBDA,
            rho_critical: RHO_CRITICAL,
            cosmological_constant: COSMOLOGICAL_CONSTANT,
            curvature: CURVATURE,
        }
    }
}

impl CosmologyParams {
    /// Same model with a different density cap
    pub fn with_critical_density(self, rho_critical: f64) -> Self {
        Self {
            rho_critical,
            ..self
        }
    }
}

/// Sampling and output settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Scan domain lower bound (must be > 0)
    pub a_min_scan: f64,
    /// Scan domain upper bound
    pub a_max_scan: f64,
    pub scan_points: usize,
    pub half_period_samples: usize,
    pub series_steps: usize,
    /// Where plots and the summary land
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            a_min_scan: A_MIN_SCAN,
            a_max_scan: A_MAX_SCAN,
            scan_points: SCAN_POINTS,
            half_period_samples: HALF_PERIOD_SAMPLES,
            series_steps: SERIES_STEPS,
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl RunConfig {
    pub fn with_output_dir(self, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..self
        }
    }
}
