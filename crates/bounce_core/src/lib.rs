pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{CosmologyParams, RunConfig};
pub use constants::*;
pub use error::{BounceError, BounceResult};
pub use types::*;
