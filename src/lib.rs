//! Shared library for `ElectiveAdvisor`
//! Contains the recommendation parser and the supporting catalog, advisor,
//! validation and reporting layers used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::*;
