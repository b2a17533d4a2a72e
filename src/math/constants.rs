// Fixed-point constants shared by the deposit math.
//
// BigUint has no const constructor, so the wide values are built on demand.

use num_bigint::BigUint;
use num_traits::One;

pub const MIN_TICK: i32 = -887_272;
pub const MAX_TICK: i32 = 887_272;

/// Denominator for slippage expressed in parts per million.
pub const PPM_DENOMINATOR: u32 = 1_000_000;

/// Implicit decimal places of every "real" price and of the split mantissa.
pub const MANTISSA_DECIMALS: u32 = 18;

#[inline]
pub fn q96() -> BigUint {
    BigUint::one() << 96
}

#[inline]
pub fn q192() -> BigUint {
    BigUint::one() << 192
}

/// 10^18
#[inline]
pub fn mantissa() -> BigUint {
    pow10(MANTISSA_DECIMALS)
}

#[inline]
pub fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// Largest value of an on-chain `uint160` (the sqrtPriceLimitX96 slot).
#[inline]
pub fn max_uint160() -> BigUint {
    (BigUint::one() << 160) - BigUint::one()
}

/// Largest value of an on-chain `uint256` (token amount slots).
#[inline]
pub fn max_uint256() -> BigUint {
    (BigUint::one() << 256) - BigUint::one()
}
