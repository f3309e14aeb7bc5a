// Fixed run constants (toy units throughout).
// Scale factor a is dimensionless; densities are in units where the
// matter density today is 1.0 and the Friedmann coupling C is 1.0.

/// Friedmann coupling C in H² = C·ρ·(1 − ρ/ρ_c) + …
pub const COUPLING: f64 = 1.0;

/// Matter density today (scales as a⁻³)
pub const RHO_MATTER_0: f64 = 1.0;

/// Radiation density today (scales as a⁻⁴)
pub const RHO_RADIATION_0: f64 = 0.1;

/// Constant dark-energy-like term; negative values close the cycle
pub const RHO_LAMBDA: f64 = -0.02;

/// Critical density cap of the quadratic correction
pub const RHO_CRITICAL: f64 = 100.0;

/// Cosmological constant Λ (enters as Λ/3)
pub const COSMOLOGICAL_CONSTANT: f64 = 0.0;

/// Spatial curvature k (enters as −k/a²)
pub const CURVATURE: f64 = 0.0;

/// Lower bound of the turning-point scan
pub const A_MIN_SCAN: f64 = 1e-3;

/// Upper bound of the turning-point scan
pub const A_MAX_SCAN: f64 = 1e4;

/// Log-spaced samples in the turning-point scan
pub const SCAN_POINTS: usize = 20_000;

/// Geometric samples for the half-period quadrature
pub const HALF_PERIOD_SAMPLES: usize = 40_000;

/// Geometric samples on the rising branch of a(τ)
pub const SERIES_STEPS: usize = 6_000;

/// Bisection iterations per bracket
pub const BISECTION_ITERATIONS: usize = 60;

/// Minimum |ln r₁ − ln r₀| for two roots to count as distinct
pub const DEDUP_LOG_TOLERANCE: f64 = 1e-3;

/// Directory all outputs are written to
pub const OUTPUT_DIR: &str = "figures";

pub const H2_PLOT_FILE: &str = "plot_H2_from_params.png";
pub const A_TAU_PLOT_FILE: &str = "plot_a_tau_from_integral.png";
pub const SUMMARY_FILE: &str = "turning_points.txt";

/// Significant digits used in the text summary
pub const SUMMARY_SIG_DIGITS: usize = 6;
