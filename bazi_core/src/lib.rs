#![forbid(unsafe_code)]

//! Core domain model and computation for the Four Pillars (BaZi) chart system.
//!
//! This crate provides:
//! - Sexagenary cycle types and tables (stems, branches, the sixty pairs)
//! - Pillar derivation for the year, month, day and hour positions
//! - Decade-cycle (Da Yun) direction and stepping
//! - The chart facade consumed by front ends

pub mod types;
pub mod error;
pub mod cycle;
pub mod tables;
pub mod solar_terms;
pub mod config;
pub mod logging;
pub mod pillars;
pub mod dayun;
pub mod service;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use dayun::{FixedStartAge, StartAgeProvider};
pub use solar_terms::{FixedBoundary, SolarTermBoundary};
pub use service::BaziService;
