pub mod cosmology;
pub mod integrals;
pub mod sampling;
pub mod turning_points;

pub use cosmology::{density, expansion_rate_squared, time_per_scale_factor};
pub use integrals::{cyclic_time_series, half_period};
pub use turning_points::find_turning_points;
