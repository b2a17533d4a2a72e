// Price conversion and valuation
// ------------------------------
// Turns a Q64.96 sqrt price into a decimals-normalized price carrying an
// implicit 18-decimal mantissa (true price = result / 1e18).
//
// Advisory only: these values are for reporting and before/after comparisons.
// The deposit split never consumes them.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{PlannerError, Result};
use crate::math::constants::{mantissa, pow10, q192, MANTISSA_DECIMALS, PPM_DENOMINATOR};

/// `zero_for_one`: token1 per token0, `sqrtP^2 * 10^(d0 + 18 - d1) / 2^192`.
/// Otherwise token0 per token1, `2^192 * 10^(d1 + 18 - d0) / sqrtP^2`.
///
/// Both divisions floor. An exponent below zero is rejected rather than guessed.
pub fn real_price(
    sqrt_price_x96: &BigUint,
    decimals0: u8,
    decimals1: u8,
    zero_for_one: bool,
) -> Result<BigUint> {
    let (num_dec, den_dec) = if zero_for_one {
        (decimals0, decimals1)
    } else {
        (decimals1, decimals0)
    };
    let exponent = (u32::from(num_dec) + MANTISSA_DECIMALS)
        .checked_sub(u32::from(den_dec))
        .ok_or(PlannerError::NegativeDecimalExponent { decimals0, decimals1 })?;
    let scalar = pow10(exponent);
    let price_x192 = sqrt_price_x96 * sqrt_price_x96;

    if zero_for_one {
        Ok(price_x192 * scalar / q192())
    } else {
        if price_x192.is_zero() {
            return Err(PlannerError::DivisionByZero("sqrt price is zero"));
        }
        Ok(q192() * scalar / price_x192)
    }
}

/// Portfolio value in raw token0 units at `sqrt_price_x96`:
/// `amount0 + amount1 * price0per1 / 1e18`, undenominated (decimals 0/0).
pub fn value_in_token0(
    amount0: &BigUint,
    amount1: &BigUint,
    sqrt_price_x96: &BigUint,
) -> Result<BigUint> {
    let price = real_price(sqrt_price_x96, 0, 0, false)?;
    Ok(amount0 + amount1 * price / mantissa())
}

/// `after / before` in parts per million, floored.
pub fn retained_value_ppm(before: &BigUint, after: &BigUint) -> Result<BigUint> {
    if before.is_zero() {
        return Err(PlannerError::DivisionByZero("portfolio value before deposit is zero"));
    }
    Ok(after * BigUint::from(PPM_DENOMINATOR) / before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::q96;
    use std::str::FromStr;

    fn big(s: &str) -> BigUint {
        BigUint::from_str(s).unwrap()
    }

    #[test]
    fn unit_price_with_equal_decimals() {
        let one = big("1000000000000000000");
        assert_eq!(real_price(&q96(), 18, 18, true).unwrap(), one);
        assert_eq!(real_price(&q96(), 18, 18, false).unwrap(), one);
    }

    #[test]
    fn unit_sqrt_price_with_mixed_decimals() {
        assert_eq!(real_price(&q96(), 6, 18, true).unwrap(), BigUint::from(1_000_000u32));
        assert_eq!(
            real_price(&q96(), 18, 6, true).unwrap(),
            big("1000000000000000000000000000000")
        );
        assert_eq!(real_price(&q96(), 18, 6, false).unwrap(), BigUint::from(1_000_000u32));
    }

    #[test]
    fn price_at_tick_1000() {
        // sqrtRatioAtTick(1000); 1.0001^1000 = 1.10516...
        let sp = big("83290069058676223003182343270");
        assert_eq!(real_price(&sp, 18, 18, true).unwrap(), big("1105165392603232697"));
        assert_eq!(real_price(&sp, 18, 18, false).unwrap(), big("904841941932768878"));
    }

    #[test]
    fn usdc_weth_pool_both_directions() {
        let sp = big("1771577727172025373304338738730114");
        // ~0.0005 WETH per USDC and ~2000 USDC per WETH
        assert_eq!(real_price(&sp, 6, 18, true).unwrap(), big("499989927790880"));
        assert_eq!(real_price(&sp, 6, 18, false).unwrap(), big("2000040289648088261463"));
    }

    #[test]
    fn rejects_negative_exponent() {
        // 0 + 18 - 19 < 0
        assert_eq!(
            real_price(&q96(), 0, 19, true),
            Err(PlannerError::NegativeDecimalExponent { decimals0: 0, decimals1: 19 })
        );
        assert_eq!(
            real_price(&q96(), 19, 0, false),
            Err(PlannerError::NegativeDecimalExponent { decimals0: 19, decimals1: 0 })
        );
        // exponent exactly zero is fine
        assert!(real_price(&q96(), 0, 18, true).is_ok());
    }

    #[test]
    fn zero_sqrt_price() {
        assert_eq!(real_price(&BigUint::zero(), 18, 18, true).unwrap(), BigUint::zero());
        let err = real_price(&BigUint::zero(), 18, 18, false).unwrap_err();
        assert!(matches!(err, PlannerError::DivisionByZero(_)));
    }

    #[test]
    fn valuation_in_token0() {
        let sp = big("1771577727172025373304338738730114");
        let v = value_in_token0(&BigUint::from(2_000_000_000u64), &big("5000000000000000000"), &sp)
            .unwrap();
        assert_eq!(v, BigUint::from(12_000_201_445u64));
    }

    #[test]
    fn retained_ppm() {
        let r = retained_value_ppm(&BigUint::from(200u32), &BigUint::from(199u32)).unwrap();
        assert_eq!(r, BigUint::from(995_000u32));
        assert!(matches!(
            retained_value_ppm(&BigUint::zero(), &BigUint::from(1u32)),
            Err(PlannerError::DivisionByZero(_))
        ));
    }
}
