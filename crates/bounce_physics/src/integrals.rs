//! Cyclic-time quadratures between the bounce and the turnaround.
//!
//! Both integrals have the integrand dτ/da = 1/(a·√H²), which blows up
//! like an inverse square root at the turning points. The singularity is
//! integrable; samples exactly at (or numerically past) a turning point are
//! masked to zero, so accuracy near the endpoints is governed by the sample
//! density of the geometric grid.

use bounce_core::{BounceError, BounceResult, CosmologyParams, CyclicSeries};
use tracing::{debug, info, warn};

use crate::cosmology::time_per_scale_factor;
use crate::sampling::{cumulative_trapezoid, geomspace, trapezoid};

fn check_interval(a_lo: f64, a_hi: f64, samples: usize) -> BounceResult<()> {
    if !(a_lo > 0.0 && a_lo.is_finite() && a_hi.is_finite()) {
        return Err(BounceError::InvalidInput(format!(
            "scale factors must be positive and finite (a_lo = {a_lo}, a_hi = {a_hi})"
        )));
    }
    if a_lo >= a_hi {
        return Err(BounceError::InvalidInput(format!(
            "a_lo = {a_lo} must be below a_hi = {a_hi}"
        )));
    }
    if samples < 2 {
        return Err(BounceError::InvalidInput(format!(
            "need at least 2 samples, got {samples}"
        )));
    }
    Ok(())
}

/// dτ/da sampled on a geometric grid from `a_lo` to `a_hi`.
fn sample_branch(params: &CosmologyParams, a_lo: f64, a_hi: f64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let a = geomspace(a_lo, a_hi, n);
    let dtau_da: Vec<f64> = a.iter().map(|&x| time_per_scale_factor(params, x)).collect();
    (a, dtau_da)
}

/// Half-period T/2 = ∫ da / (a·√H²) from bounce to turnaround,
/// trapezoidal on `samples` geometric points. Not adaptive.
pub fn half_period(
    params: &CosmologyParams,
    a_lo: f64,
    a_hi: f64,
    samples: usize,
) -> BounceResult<f64> {
    check_interval(a_lo, a_hi, samples)?;
    let (a, dtau_da) = sample_branch(params, a_lo, a_hi, samples);
    let masked = dtau_da.iter().filter(|&&v| v == 0.0).count();
    let t_half = trapezoid(&dtau_da, &a);
    debug!("Half-period quadrature: {samples} samples, {masked} masked");
    info!("T_half = {t_half:.6e} between a = {a_lo:.6e} and a = {a_hi:.6e}");
    Ok(t_half)
}

/// Full-cycle a(τ): cumulative quadrature on the rising branch, rescaled so
/// τ(a_hi) equals `half_period`, then mirrored into the falling branch.
///
/// The result has `2 * steps` samples. The turnaround sample is duplicated
/// at indices `steps - 1` and `steps`.
pub fn cyclic_time_series(
    params: &CosmologyParams,
    a_lo: f64,
    a_hi: f64,
    half_period: f64,
    steps: usize,
) -> BounceResult<CyclicSeries> {
    check_interval(a_lo, a_hi, steps)?;
    let (a_up, dtau_da) = sample_branch(params, a_lo, a_hi, steps);
    let mut tau_up = cumulative_trapezoid(&dtau_da, &a_up);

    let unscaled = tau_up.last().copied().unwrap_or(0.0);
    let scale = if unscaled != 0.0 {
        half_period / unscaled
    } else {
        warn!("Unscaled cyclic time vanished; keeping scale 1");
        1.0
    };
    for t in tau_up.iter_mut() {
        *t *= scale;
    }
    if unscaled != 0.0 {
        // Pin the turnaround so rounding cannot make the mirrored branch dip
        if let Some(last) = tau_up.last_mut() {
            *last = half_period;
        }
    }
    debug!("Rescaled rising branch by {scale:.9} (unscaled total {unscaled:.6e})");

    // Falling branch retraces the rising one backwards: the elapsed time
    // from turnaround back to a is the same as from a up to turnaround.
    let full_period = 2.0 * half_period;
    let tau = tau_up
        .iter()
        .copied()
        .chain(tau_up.iter().rev().map(|&t| half_period + (half_period - t)))
        .collect();
    let scale_factor = a_up.iter().copied().chain(a_up.iter().rev().copied()).collect();

    Ok(CyclicSeries {
        tau,
        scale_factor,
        half_period,
        full_period,
    })
}
