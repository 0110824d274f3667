//! Configuration and persistence-facing projections.

pub mod config;
pub mod polyline;

pub use config::{AppConfig, ConfigError, Units, UserProfile};
pub use polyline::encode_polyline;
