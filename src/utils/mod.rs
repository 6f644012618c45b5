//! Common utilities and helpers

pub mod path;
pub mod size;

pub use size::abbreviate;
