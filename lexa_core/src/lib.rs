#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod analysis;
pub mod catalog;
pub mod filter;
pub mod query;
mod util;

pub use analysis::{PropertyRecord, StringProperties, analyze};
pub use catalog::{CatalogStore, InMemoryCatalog};
pub use filter::{AppliedFilters, FilterSpec, FilterValue, matches};
pub use query::{QueryTranslator, translate};
pub use util::content_hash;
