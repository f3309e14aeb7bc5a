/// `n` points spaced uniformly in log₁₀ between `lo` and `hi` (both > 0).
/// Endpoints are pinned to the exact inputs.
pub fn logspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let (l0, l1) = (lo.log10(), hi.log10());
    spaced(lo, hi, n, |t| 10f64.powf(l0 + (l1 - l0) * t))
}

/// Geometric progression from `lo` to `hi` (both > 0), constant ratio
/// between neighbours, exact endpoints.
pub fn geomspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let ratio = hi / lo;
    spaced(lo, hi, n, |t| lo * ratio.powf(t))
}

fn spaced(lo: f64, hi: f64, n: usize, at: impl Fn(f64) -> f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| match i {
                    0 => lo,
                    i if i == n - 1 => hi,
                    i => at(i as f64 / last),
                })
                .collect()
        }
    }
}

/// Trapezoidal rule over arbitrary (non-uniform) abscissae.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len());
    y.windows(2)
        .zip(x.windows(2))
        .map(|(yw, xw)| 0.5 * (yw[0] + yw[1]) * (xw[1] - xw[0]))
        .sum()
}

/// Running trapezoidal integral, same length as the input, starting at 0.
pub fn cumulative_trapezoid(y: &[f64], x: &[f64]) -> Vec<f64> {
    debug_assert_eq!(y.len(), x.len());
    let mut out = Vec::with_capacity(y.len());
    if y.is_empty() {
        return out;
    }
    let mut acc = 0.0;
    out.push(acc);
    for (yw, xw) in y.windows(2).zip(x.windows(2)) {
        acc += 0.5 * (yw[0] + yw[1]) * (xw[1] - xw[0]);
        out.push(acc);
    }
    out
}
