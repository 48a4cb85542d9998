//! Data models for `ElectiveAdvisor`

pub mod elective;
pub mod recommendation;

pub use elective::Elective;
pub use recommendation::{CourseRecommendation, Rating};
