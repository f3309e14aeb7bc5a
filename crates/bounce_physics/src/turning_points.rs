use bounce_core::constants::{BISECTION_ITERATIONS, DEDUP_LOG_TOLERANCE};
use bounce_core::{CosmologyParams, RunConfig, ScanGrid, TurningPointScan};
use tracing::{debug, info};

use crate::cosmology::expansion_rate_squared;
use crate::sampling::logspace;

/// Interval state for bisection: endpoints and H² at each endpoint.
/// Invariant: f_lo and f_hi have opposite signs, or one of them is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lo: f64,
    pub hi: f64,
    pub f_lo: f64,
    pub f_hi: f64,
}

impl Bracket {
    pub fn new(params: &CosmologyParams, lo: f64, hi: f64) -> Self {
        Self {
            lo,
            hi,
            f_lo: expansion_rate_squared(params, lo),
            f_hi: expansion_rate_squared(params, hi),
        }
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Halve the bracket once. Returns `false` once an endpoint sits exactly
    /// on zero, after collapsing the bracket onto it.
    fn bisect(&mut self, params: &CosmologyParams) -> bool {
        let mid = self.midpoint();
        let f_mid = expansion_rate_squared(params, mid);
        if self.f_lo == 0.0 {
            self.hi = self.lo;
            return false;
        }
        if self.f_hi == 0.0 {
            self.lo = self.hi;
            return false;
        }
        if self.f_lo * f_mid <= 0.0 {
            self.hi = mid;
            self.f_hi = f_mid;
        } else {
            self.lo = mid;
            self.f_lo = f_mid;
        }
        true
    }

    /// Fixed-count bisection; the root estimate is the final midpoint.
    pub fn refine(mut self, params: &CosmologyParams, iterations: usize) -> f64 {
        for _ in 0..iterations {
            if !self.bisect(params) {
                break;
            }
        }
        self.midpoint()
    }
}

fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Evaluate H² on `n` log-spaced scale factors in [lo, hi].
pub fn scan(params: &CosmologyParams, lo: f64, hi: f64, n: usize) -> ScanGrid {
    let scale_factors = logspace(lo, hi, n);
    let h2 = scale_factors
        .iter()
        .map(|&a| expansion_rate_squared(params, a))
        .collect();
    ScanGrid { scale_factors, h2 }
}

/// One bracket per adjacent grid pair whose H² signs differ.
/// A tangent zero that does not flip sign yields no bracket.
pub fn sign_change_brackets(params: &CosmologyParams, grid: &ScanGrid) -> Vec<Bracket> {
    grid.scale_factors
        .windows(2)
        .zip(grid.h2.windows(2))
        .filter(|(_, h)| sign(h[0]) != sign(h[1]))
        .map(|(a, _)| Bracket::new(params, a[0], a[1]))
        .collect()
}

/// Sort ascending and drop any root within `tolerance` (in ln a) of the
/// last retained one.
pub fn dedup_log(mut roots: Vec<f64>, tolerance: f64) -> Vec<f64> {
    roots.sort_by(f64::total_cmp);
    let mut kept: Vec<f64> = Vec::with_capacity(roots.len());
    for r in roots {
        match kept.last() {
            Some(&prev) if (r.ln() - prev.ln()).abs() <= tolerance => {
                debug!("Merged turning point {r:.9e} into {prev:.9e}");
            }
            _ => kept.push(r),
        }
    }
    kept
}

/// Locate every zero crossing of H² over the configured scan domain.
pub fn find_turning_points(params: &CosmologyParams, config: &RunConfig) -> TurningPointScan {
    let grid = scan(params, config.a_min_scan, config.a_max_scan, config.scan_points);
    let brackets = sign_change_brackets(params, &grid);

    let roots: Vec<f64> = brackets
        .iter()
        .map(|b| {
            let root = b.refine(params, BISECTION_ITERATIONS);
            debug!(
                "Bracket [{:.6e}, {:.6e}] -> a = {:.9e} (H² = {:.3e})",
                b.lo,
                b.hi,
                root,
                expansion_rate_squared(params, root)
            );
            root
        })
        .collect();

    let turning_points = dedup_log(roots, DEDUP_LOG_TOLERANCE);
    info!(
        "Scanned {} points on [{:e}, {:e}]: {} sign changes, {} turning points",
        grid.len(),
        config.a_min_scan,
        config.a_max_scan,
        brackets.len(),
        turning_points.len()
    );

    TurningPointScan {
        grid,
        turning_points,
        brackets: brackets.len(),
    }
}
