use bounce_core::CosmologyParams;

/// Effective energy density ρ(a) = ρ_m·a⁻³ + ρ_r·a⁻⁴ + ρ_Λ.
/// Assumes a > 0; the scan domain guarantees it.
pub fn density(params: &CosmologyParams, a: f64) -> f64 {
    params.rho_matter * a.powi(-3) + params.rho_radiation * a.powi(-4) + params.rho_lambda
}

/// Modified Friedmann law with the quadratic density correction:
/// H² = C·ρ·(1 − ρ/ρ_c) + Λ/3 − k/a².
/// Negative values mark the forbidden region and are returned as-is.
pub fn expansion_rate_squared(params: &CosmologyParams, a: f64) -> f64 {
    let rho = density(params, a);
    params.coupling * rho * (1.0 - rho / params.rho_critical)
        + params.cosmological_constant / 3.0
        - params.curvature / (a * a)
}

/// dτ/da = 1 / (a·√H²), masked: H² < 0 or a non-finite result
/// (division by zero exactly at a turning point) contributes 0.
pub fn time_per_scale_factor(params: &CosmologyParams, a: f64) -> f64 {
    let h2 = expansion_rate_squared(params, a);
    if h2 < 0.0 || h2.is_nan() {
        return 0.0;
    }
    let value = 1.0 / (a * h2.sqrt());
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_density_components() {
        let params = CosmologyParams::default();
        // At a = 1: ρ_m + ρ_r + ρ_Λ
        assert_relative_eq!(density(&params, 1.0), 1.0 + 0.1 - 0.02, epsilon = 1e-15);
        // Radiation dominates at small a
        let a = 1e-3_f64;
        let radiation = 0.1 * a.powi(-4);
        assert!((density(&params, a) - radiation) / radiation < 0.02);
    }

    #[test]
    fn test_density_decreasing() {
        let params = CosmologyParams::default();
        let d1 = density(&params, 0.1);
        let d2 = density(&params, 1.0);
        let d3 = density(&params, 10.0);
        assert!(d1 > d2);
        assert!(d2 > d3);
        // Far future: only the constant term survives
        assert!((density(&params, 1e4) - params.rho_lambda).abs() < 1e-9);
    }

    #[test]
    fn test_h2_vanishes_at_critical_density() {
        let params = CosmologyParams::default();
        // Pick a with ρ(a) = ρ_c by rescaling ρ_m so a = 1 hits the cap exactly
        let capped = CosmologyParams {
            rho_matter: params.rho_critical - params.rho_radiation - params.rho_lambda,
            ..params
        };
        assert_relative_eq!(density(&capped, 1.0), capped.rho_critical, epsilon = 1e-12);
        assert!(expansion_rate_squared(&capped, 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_h2_sign_regions() {
        let params = CosmologyParams::default();
        // Above ρ_c (tiny a) and below ρ = 0 (large a): forbidden
        assert!(expansion_rate_squared(&params, 1e-3) < 0.0);
        assert!(expansion_rate_squared(&params, 100.0) < 0.0);
        // In between: expanding/contracting region
        assert!(expansion_rate_squared(&params, 1.0) > 0.0);
    }

    #[test]
    fn test_lambda_and_curvature_terms() {
        let base = CosmologyParams::default();
        let a = 2.0;
        let with_lambda = CosmologyParams {
            cosmological_constant: 3.0,
            ..base
        };
        assert_relative_eq!(
            expansion_rate_squared(&with_lambda, a) - expansion_rate_squared(&base, a),
            1.0,
            epsilon = 1e-12
        );
        let with_curvature = CosmologyParams {
            curvature: 4.0,
            ..base
        };
        assert_relative_eq!(
            expansion_rate_squared(&base, a) - expansion_rate_squared(&with_curvature, a),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_time_per_scale_factor_masking() {
        let params = CosmologyParams::default();
        // Forbidden region contributes nothing
        assert_eq!(time_per_scale_factor(&params, 100.0), 0.0);
        // Allowed region matches the closed form
        let a = 1.0;
        let expected = 1.0 / (a * expansion_rate_squared(&params, a).sqrt());
        assert_relative_eq!(time_per_scale_factor(&params, a), expected);
        // Exactly zero H² would divide by zero: masked to 0
        let flat = CosmologyParams {
            coupling: 0.0,
            ..params
        };
        assert_eq!(time_per_scale_factor(&flat, 1.0), 0.0);
    }
}
