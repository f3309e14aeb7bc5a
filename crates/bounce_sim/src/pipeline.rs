use bounce_core::{BounceResult, CosmologyParams, CycleReport, RunConfig, TurningPointScan};
use bounce_physics::{cyclic_time_series, find_turning_points, half_period};
use tracing::{info, warn};

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Bounce and turnaround found; the full cycle was integrated
    Cycle(Box<CycleReport>),
    /// Fewer than two turning points: no bounded cyclic solution
    Degenerate(TurningPointScan),
}

impl Outcome {
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            Outcome::Cycle(report) => Some(&**report),
            Outcome::Degenerate(_) => None,
        }
    }
}

/// Scan for turning points, integrate the half-period between the outermost
/// pair and build the full-cycle a(τ). Pure computation, no I/O.
pub fn run(params: &CosmologyParams, config: &RunConfig) -> BounceResult<Outcome> {
    let scan = find_turning_points(params, config);
    let Some((a_lo, a_hi)) = scan.bounds() else {
        warn!(
            "Only {} turning point(s) found; no bounded cycle for these parameters",
            scan.turning_points.len()
        );
        return Ok(Outcome::Degenerate(scan));
    };
    info!("Bounce at a = {a_lo:.6e}, turnaround at a = {a_hi:.6e}");

    let t_half = half_period(params, a_lo, a_hi, config.half_period_samples)?;
    let series = cyclic_time_series(params, a_lo, a_hi, t_half, config.series_steps)?;
    info!("Full period T = {:.6e} over {} samples", series.full_period, series.len());

    Ok(Outcome::Cycle(Box::new(CycleReport {
        params: *params,
        a_lo,
        a_hi,
        half_period: t_half,
        full_period: series.full_period,
        scan,
        series,
    })))
}
