use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::price::{retained_value_ppm, value_in_token0};
use crate::math::split::{Split, SwapInstruction};

/// Pool state as read from slot0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub tick: i32,
    pub sqrt_price_x96: BigUint,
}

/// Raw (undenominated) holdings of token0 and token1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Balances {
    pub amount0: BigUint,
    pub amount1: BigUint,
}

impl Balances {
    pub fn new(amount0: impl Into<BigUint>, amount1: impl Into<BigUint>) -> Self {
        Self { amount0: amount0.into(), amount1: amount1.into() }
    }
}

/// Everything the swap-then-mint executor needs, plus the split it aims for.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositPlan {
    pub amount0: BigUint,
    pub amount1: BigUint,
    pub zero_for_one: bool,
    pub swap_amount: BigUint,
    pub sqrt_price_limit_x96: BigUint,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub target: Split,
    pub sqrt_price_x96: BigUint,
    pub sqrt_price_lower_x96: BigUint,
    pub sqrt_price_upper_x96: BigUint,
}

impl DepositPlan {
    pub fn swap(&self) -> SwapInstruction {
        SwapInstruction { zero_for_one: self.zero_for_one, amount: self.swap_amount.clone() }
    }

    /// Value of the starting balances against the target split, both at the
    /// pool price the plan was made at.
    pub fn value_report(&self) -> Result<ValueReport> {
        let value_before = value_in_token0(&self.amount0, &self.amount1, &self.sqrt_price_x96)?;
        let value_after =
            value_in_token0(&self.target.amount0, &self.target.amount1, &self.sqrt_price_x96)?;
        let retained_ppm = retained_value_ppm(&value_before, &value_after)?;
        Ok(ValueReport { value_before, value_after, retained_ppm })
    }
}

/// Before/after portfolio value in raw token0 units.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueReport {
    pub value_before: BigUint,
    pub value_after: BigUint,
    pub retained_ppm: BigUint,
}

/// Decimals-normalized prices (1e18 mantissa, token1 per token0) at the range
/// bounds and at the current pool price.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceReport {
    pub lower: BigUint,
    pub current: BigUint,
    pub upper: BigUint,
}
