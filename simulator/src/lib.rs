//! Scenario generation and dataset workflow for the FMCW radar core.
//!
//! Scenes are drawn for four classification regimes and pushed through
//! `fmcwcore` to produce labelled range-Doppler samples.

pub mod generator;
pub mod workflow;

pub use generator::{get_random_scenario, random_scenario, ScenarioKind};
pub use workflow::{Runner, WorkflowConfig, WorkflowResult};
