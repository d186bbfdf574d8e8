mod analyzer;
mod types;

pub use analyzer::analyze;
pub use types::{PropertyRecord, StringProperties};
