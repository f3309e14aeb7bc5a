pub mod plots;
pub mod report;

pub use report::write_report;
