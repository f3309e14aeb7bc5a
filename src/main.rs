use bounce_core::{BounceResult, CosmologyParams, RunConfig};
use bounce_render::write_report;
use bounce_sim::pipeline::{self, Outcome};
use tracing_subscriber::EnvFilter;

fn main() -> BounceResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let params = CosmologyParams::default();
    let config = RunConfig::default();

    match pipeline::run(&params, &config)? {
        Outcome::Degenerate(_) => {
            println!(
                "Did not find two turning points. Try adjusting rho_L (more negative) or k_curv (>0)."
            );
        }
        Outcome::Cycle(report) => {
            for path in write_report(&report, &config.output_dir)? {
                println!("Saved: {}", path.display());
            }
        }
    }
    Ok(())
}
