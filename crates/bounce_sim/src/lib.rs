pub mod pipeline;

pub use pipeline::{Outcome, run};
