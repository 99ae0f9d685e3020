//! # Metrics Simulation
//!
//! Produces the synthetic readings shown on the dashboard. Every refresh draws
//! a fresh, independent set of values from the injected random source, so the
//! simulator can be swapped for live sensor ingestion without touching the
//! evaluator.
//!
//! ## Usage
//!
//! ```rust
//! use grid_guardian::simulation::{MetricsSimulator, SimulationProfile};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let simulator = MetricsSimulator::new(SimulationProfile::default());
//! let mut rng = StdRng::seed_from_u64(42);
//! let metrics = simulator.sample(&mut rng);
//!
//! assert_eq!(metrics.meters.len(), 10);
//! ```

pub mod metrics;

pub use metrics::{GridMetrics, MetricsSimulator, SimulationProfile, THEFT_HOUSE};
