use std::path::{Path, PathBuf};

use bounce_core::constants::{A_TAU_PLOT_FILE, H2_PLOT_FILE, SUMMARY_FILE, SUMMARY_SIG_DIGITS};
use bounce_core::{BounceResult, CycleReport};
use bounce_storage::{ensure_output_dir, save_summary};
use tracing::info;

use crate::plots::{render_a_tau, render_h2};

/// Write the text summary and both figures into `dir`, creating it if
/// needed. Returns the written paths: H² plot, a(τ) plot, summary.
pub fn write_report(report: &CycleReport, dir: &Path) -> BounceResult<Vec<PathBuf>> {
    ensure_output_dir(dir)?;

    let summary_path = dir.join(SUMMARY_FILE);
    save_summary(&report.summary(), SUMMARY_SIG_DIGITS, &summary_path)?;

    let h2_path = dir.join(H2_PLOT_FILE);
    render_h2(&report.scan.grid, &report.scan.turning_points, &h2_path)?;

    let a_tau_path = dir.join(A_TAU_PLOT_FILE);
    render_a_tau(&report.series, report.a_lo, report.a_hi, &a_tau_path)?;

    let written = vec![h2_path, a_tau_path, summary_path];
    info!("Wrote {} files to {}", written.len(), dir.display());
    Ok(written)
}
