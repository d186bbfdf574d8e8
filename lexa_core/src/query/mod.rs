//! Free-text query translation.
//!
//! Maps loosely phrased queries such as "single word palindromes longer than
//! 3" onto a [`crate::FilterSpec`] using a fixed set of phrase rules.

pub mod translator;

pub use translator::{QueryTranslator, translate};
