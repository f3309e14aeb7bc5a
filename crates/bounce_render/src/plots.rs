use std::error::Error;
use std::path::Path;

use bounce_core::{BounceError, BounceResult, CyclicSeries, ScanGrid};
use plotters::prelude::*;
use tracing::debug;

/// 7×5 in at 200 dpi
pub const FIGURE_SIZE: (u32, u32) = (1400, 1000);

const CAPTION_FONT: (&str, u32) = ("sans-serif", 32);
const LABEL_FONT: (&str, u32) = ("sans-serif", 22);

/// Padded (min, max) of the finite values, always containing `include`.
fn padded_range(values: impl Iterator<Item = f64>, include: f64) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((include, include), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad, hi + pad)
}

/// H²(a) over the scan grid on a log-a axis, turning points marked on H² = 0.
pub fn render_h2(grid: &ScanGrid, turning_points: &[f64], path: &Path) -> BounceResult<()> {
    draw_h2(grid, turning_points, path).map_err(|e| BounceError::Plot(e.to_string()))?;
    debug!("Rendered H² plot to {}", path.display());
    Ok(())
}

fn draw_h2(grid: &ScanGrid, turning_points: &[f64], path: &Path) -> Result<(), Box<dyn Error>> {
    let (Some(&a_min), Some(&a_max)) = (grid.scale_factors.first(), grid.scale_factors.last())
    else {
        return Err("empty scan grid".into());
    };
    let (y_min, y_max) = padded_range(grid.h2.iter().copied(), 0.0);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Effective Friedmann with LQC correction", CAPTION_FONT)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d((a_min..a_max).log_scale(), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Scale factor a (log)")
        .y_desc("H(a)^2 (toy units)")
        .x_label_formatter(&|v| format!("{v:.0e}"))
        .y_label_formatter(&|v| format!("{v:.2e}"))
        .label_style(LABEL_FONT)
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            grid.points().filter(|(_, h2)| h2.is_finite()),
            BLUE.stroke_width(2),
        ))?
        .label("H^2(a)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    if !turning_points.is_empty() {
        chart
            .draw_series(
                turning_points
                    .iter()
                    .map(|&a| Circle::new((a, 0.0), 7, RED.filled())),
            )?
            .label("Turning points")
            .legend(|(x, y)| Circle::new((x + 10, y), 6, RED.filled()));
    }

    chart
        .configure_series_labels()
        .label_font(LABEL_FONT)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// a(τ) over one full cycle with dashed guides at τ = 0, T/2, T and
/// markers on the bounce and the turnaround.
pub fn render_a_tau(series: &CyclicSeries, a_lo: f64, a_hi: f64, path: &Path) -> BounceResult<()> {
    draw_a_tau(series, a_lo, a_hi, path).map_err(|e| BounceError::Plot(e.to_string()))?;
    debug!("Rendered a(τ) plot to {}", path.display());
    Ok(())
}

fn draw_a_tau(
    series: &CyclicSeries,
    a_lo: f64,
    a_hi: f64,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let period = series.full_period;
    let (t_min, t_max) = padded_range([0.0, period].into_iter(), 0.0);
    let (_, a_top) = padded_range(series.scale_factor.iter().copied(), a_hi);
    let a_bottom = 0.0;

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Scale factor from integral (no sinusoid)", CAPTION_FONT)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(t_min..t_max, a_bottom..a_top)?;

    chart
        .configure_mesh()
        .x_desc("Cyclic time τ")
        .y_desc("Scale factor a(τ)")
        .label_style(LABEL_FONT)
        .draw()?;

    chart
        .draw_series(LineSeries::new(series.points(), BLUE.stroke_width(2)))?
        .label("a(τ)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    let guide = |tau: f64| {
        DashedLineSeries::new(
            vec![(tau, a_bottom), (tau, a_top)],
            10,
            6,
            BLACK.stroke_width(1),
        )
    };
    chart.draw_series(guide(0.0))?;
    chart
        .draw_series(guide(0.5 * period))?
        .label("Turnaround")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(1)));
    chart.draw_series(guide(period))?;

    chart
        .draw_series(
            [(0.0, a_lo), (0.5 * period, a_hi)]
                .into_iter()
                .map(|p| Circle::new(p, 7, RED.filled())),
        )?
        .label("Bounce & Turnaround")
        .legend(|(x, y)| Circle::new((x + 10, y), 6, RED.filled()));

    chart
        .configure_series_labels()
        .label_font(LABEL_FONT)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
