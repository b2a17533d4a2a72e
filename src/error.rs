// error.rs - failure taxonomy for the deposit math
//
// Every variant is a caller-side precondition failure. Nothing here is
// transient, so nothing is retried: the orchestration layer decides whether to
// pick new ticks or abort.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("negative decimal exponent (decimals0 = {decimals0}, decimals1 = {decimals1})")]
    NegativeDecimalExponent { decimals0: u8, decimals1: u8 },

    #[error("tick spacing must be positive, got {0}")]
    InvalidTickSpacing(i32),

    #[error("slippage must be within [0, 1000000] ppm, got {0}")]
    InvalidSlippage(u32),

    #[error("split is not reachable from the starting balances")]
    InconsistentSplit,
}

pub type Result<T> = std::result::Result<T, PlannerError>;
