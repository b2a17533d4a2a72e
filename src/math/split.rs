// Optimal deposit split
// ---------------------
// Given the range bounds (p_a, p_b), the pool price P (all Q64.96 sqrt prices)
// and a starting balance (x0, y0), find the (x*, y*) that a position over
// [p_a, p_b] absorbs completely at price P while keeping the portfolio value
// at P unchanged. Then derive the one swap taking (x0, y0) to (x*, y*).
//
//   s  = P^2 * 1e18 / 2^192                 token0 price in token1, 1e18-scaled
//   A  = P * p_b * 1e18 / (p_b - P)         token0 side of the curve near p_b
//   B  = 1e18 * 2^192 / (P - p_a)           token1 side of the curve near p_a
//   N  = s * x0 + y0 * 1e18                 portfolio value at P
//   D  = A * 1e18 + s * B
//   x* = N * B / D,  y* = N * A / D         (floor)
//
// Everything is unsigned BigUint with floor division, bit-compatible with the
// on-chain reference. Because s*x* + 1e18*y* <= N, the side that the swap
// draws from never goes negative.

use num_bigint::BigUint;
use num_traits::{CheckedSub, Zero};

use crate::error::{PlannerError, Result};
use crate::math::constants::{mantissa, q192};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ------------------------------- Data types ----------------------------------

/// Target token amounts that sit exactly on the range's liquidity curve.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    pub amount0: BigUint,
    pub amount1: BigUint,
}

/// The single swap taking a starting balance to a `Split`.
/// `zero_for_one` sells token0 for token1; a zero `amount` means already balanced.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapInstruction {
    pub zero_for_one: bool,
    pub amount: BigUint,
}

impl SwapInstruction {
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Per-range coefficients of the split formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitCoefficients {
    pub scaled_price: BigUint,
    pub a: BigUint,
    pub b: BigUint,
}

// ------------------------------- Core math -----------------------------------

/// Coefficients for `p_a < P < p_b`.
///
/// `p_a == P` or `P == p_b` is `DivisionByZero`; any other ordering violation,
/// or a zero bound, is `InvalidRange`.
pub fn split_coefficients(p_a: &BigUint, p: &BigUint, p_b: &BigUint) -> Result<SplitCoefficients> {
    if p == p_a {
        return Err(PlannerError::DivisionByZero("current sqrt price equals the lower bound"));
    }
    if p == p_b {
        return Err(PlannerError::DivisionByZero("current sqrt price equals the upper bound"));
    }
    if p_a.is_zero() {
        return Err(PlannerError::InvalidRange("lower sqrt price must be positive".into()));
    }

    let below_upper = p_b.checked_sub(p).ok_or_else(|| {
        PlannerError::InvalidRange(format!(
            "current sqrt price {} is above the upper bound {}",
            p, p_b
        ))
    })?;
    let above_lower = p.checked_sub(p_a).ok_or_else(|| {
        PlannerError::InvalidRange(format!(
            "current sqrt price {} is below the lower bound {}",
            p, p_a
        ))
    })?;

    let m = mantissa();
    let scaled_price = p * p * &m / q192();
    let a = p * p_b * &m / below_upper;
    let b = &m * q192() / above_lower;

    Ok(SplitCoefficients { scaled_price, a, b })
}

/// The deposit split for a starting balance `(x0, y0)` over `[p_a, p_b]` at `p`.
pub fn optimal_split(
    x0: &BigUint,
    y0: &BigUint,
    p_a: &BigUint,
    p: &BigUint,
    p_b: &BigUint,
) -> Result<Split> {
    let SplitCoefficients { scaled_price, a, b } = split_coefficients(p_a, p, p_b)?;
    let m = mantissa();

    let value = &scaled_price * x0 + y0 * &m;
    let denom = &a * &m + &scaled_price * &b;
    if denom.is_zero() {
        return Err(PlannerError::DivisionByZero("split denominator is zero"));
    }

    Ok(Split {
        amount0: &value * &b / &denom,
        amount1: &value * &a / &denom,
    })
}

/// Direction and size of the swap from `(x0, y0)` to `split`.
///
/// Sells the token0 surplus when `x0 > x*`, otherwise the token1 surplus. A
/// split that needs more of both tokens than is held is `InconsistentSplit`.
pub fn swap_instruction(x0: &BigUint, y0: &BigUint, split: &Split) -> Result<SwapInstruction> {
    let zero_for_one = x0 > &split.amount0;
    let amount = if zero_for_one {
        x0 - &split.amount0
    } else {
        y0.checked_sub(&split.amount1).ok_or(PlannerError::InconsistentSplit)?
    };
    Ok(SwapInstruction { zero_for_one, amount })
}
