//! Core library for the Career Mentor advisory product.
//!
//! The centerpiece is the skills-survey pipeline in [`advisor::assessment`]:
//! form mutations, completion tracking, profile materialization, and the
//! validated load path back onto the dashboard. Around it sit the identity
//! gateway seam, the navigation table the flows hand destinations through,
//! and the trend datasets backing the analytics page.

pub mod advisor;
pub mod config;
pub mod error;
pub mod identity;
pub mod navigation;
pub mod telemetry;
