//! Core module for the advisor's domain logic

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod validation;

/// Returns the current version of the `ElectiveAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
