use serde::{Deserialize, Serialize};

use crate::config::CosmologyParams;

/// Log-spaced scale-factor samples paired one-to-one with H²(a).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanGrid {
    /// Strictly increasing scale factors
    pub scale_factors: Vec<f64>,
    /// H² evaluated at the matching index
    pub h2: Vec<f64>,
}

impl ScanGrid {
    pub fn len(&self) -> usize {
        self.scale_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scale_factors.is_empty()
    }

    /// (a, H²(a)) pairs in scan order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.scale_factors.iter().copied().zip(self.h2.iter().copied())
    }
}

/// Output of the turning-point scan: the raw grid plus the refined,
/// sorted and deduplicated zero crossings of H².
#[derive(Debug, Clone, PartialEq)]
pub struct TurningPointScan {
    pub grid: ScanGrid,
    /// Ascending; neighbours differ by more than the dedup tolerance in ln a
    pub turning_points: Vec<f64>,
    /// Sign-change brackets found before deduplication
    pub brackets: usize,
}

impl TurningPointScan {
    /// Bounce and turnaround (smallest and largest turning point).
    /// `None` when fewer than two turning points exist.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self.turning_points.as_slice() {
            [first, .., last] => Some((*first, *last)),
            _ => None,
        }
    }
}

/// One full bounce → turnaround → bounce cycle of a(τ).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclicSeries {
    /// Cyclic time, nondecreasing from 0 to `full_period`
    pub tau: Vec<f64>,
    /// Scale factor at the matching τ: rises a_lo → a_hi then mirrors back
    pub scale_factor: Vec<f64>,
    pub half_period: f64,
    pub full_period: f64,
}

impl CyclicSeries {
    pub fn len(&self) -> usize {
        self.tau.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tau.is_empty()
    }

    /// Index of the last rising-branch sample (a = a_hi, τ = T/2)
    pub fn turnaround_index(&self) -> usize {
        (self.tau.len() / 2).saturating_sub(1)
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.tau.iter().copied().zip(self.scale_factor.iter().copied())
    }
}

/// Everything a successful run produces
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub params: CosmologyParams,
    /// Bounce scale factor
    pub a_lo: f64,
    /// Turnaround scale factor
    pub a_hi: f64,
    pub half_period: f64,
    pub full_period: f64,
    pub scan: TurningPointScan,
    pub series: CyclicSeries,
}

impl CycleReport {
    pub fn summary(&self) -> TurningPointSummary {
        TurningPointSummary {
            a_min: self.a_lo,
            a_max: self.a_hi,
            t_half: self.half_period,
            t_full: self.full_period,
        }
    }
}

/// The four numbers written to the text summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurningPointSummary {
    /// Bounce
    pub a_min: f64,
    /// Turnaround
    pub a_max: f64,
    pub t_half: f64,
    pub t_full: f64,
}
