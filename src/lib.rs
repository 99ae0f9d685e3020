//! Grid Guardian: a demo grid monitoring dashboard.
//!
//! Each refresh simulates power flow, smart-meter and transformer readings,
//! looks up the weather for one city, and runs fixed threshold checks over
//! the result.

pub mod advisor;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod evaluator;
pub mod simulation;
pub mod telemetry;
pub mod weather;
