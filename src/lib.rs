// lib.rs - Library exports for integration tests

pub mod config;
pub mod error;
pub mod models;
pub mod math;
pub mod engine;

pub use config::PlannerConfig;
pub use engine::planner::{DepositPlanner, SqrtRatioAtTick};
pub use error::{PlannerError, Result};
pub use math::tick_spacing::{RangeRounding, TickRange};
pub use models::{Balances, DepositPlan, PoolSnapshot, PriceReport, ValueReport};
