// Shared fixtures for integration tests.
//
// `get_sqrt_ratio_at_tick` is the canonical TickMath.getSqrtRatioAtTick
// (Q64.96, rounded up from Q128.128). In production this value comes from the
// pool's library; the tests need the same numbers offline.
#![allow(dead_code)]

use num_bigint::BigUint;
use num_traits::One;
use std::str::FromStr;

use univ3_deposit_planner::math::constants::{MAX_TICK, MIN_TICK};
use univ3_deposit_planner::{PlannerError, Result};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn big(s: &str) -> BigUint {
    BigUint::from_str(s).expect("decimal literal")
}

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).expect("hex constant")
}

pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<BigUint> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(PlannerError::InvalidRange(format!("tick {} out of range", tick)));
    }
    let abs_tick = tick.unsigned_abs();

    // ratio is Q128.128
    let mut ratio = if abs_tick & 0x1 != 0 {
        hex("fffcb933bd6fad37aa2d162d1a594001")
    } else {
        BigUint::one() << 128
    };

    const STEPS: [(u32, &str); 19] = [
        (0x2, "fff97272373d413259a46990580e213a"),
        (0x4, "fff2e50f5f656932ef12357cf3c7fdcc"),
        (0x8, "ffe5caca7e10e4e61c3624eaa0941cd0"),
        (0x10, "ffcb9843d60f6159c9db58835c926644"),
        (0x20, "ff973b41fa98c081472e6896dfb254c0"),
        (0x40, "ff2ea16466c96a3843ec78b326b52861"),
        (0x80, "fe5dee046a99a2a811c461f1969c3053"),
        (0x100, "fcbe86c7900a88aedcffc83b479aa3a4"),
        (0x200, "f987a7253ac413176f2b074cf7815e54"),
        (0x400, "f3392b0822b70005940c7a398e4b70f3"),
        (0x800, "e7159475a2c29b7443b29c7fa6e889d9"),
        (0x1000, "d097f3bdfd2022b8845ad8f792aa5825"),
        (0x2000, "a9f746462d870fdf8a65dc1f90e061e5"),
        (0x4000, "70d869a156d2a1b890bb3df62baf32f7"),
        (0x8000, "31be135f97d08fd981231505542fcfa6"),
        (0x10000, "09aa508b5b7a84e1c677de54f3e99bc9"),
        (0x20000, "05d6af8dedb81196699c329225ee604"),
        (0x40000, "2216e584f5fa1ea926041bedfe98"),
        (0x80000, "48a170391f7dc42444e8fa2"),
    ];
    for (mask, constant) in STEPS {
        if abs_tick & mask != 0 {
            ratio = (&ratio * hex(constant)) >> 128;
        }
    }

    if tick > 0 {
        let max = (BigUint::one() << 256) - BigUint::one();
        ratio = max / ratio;
    }
    // round-up shift by 32 (Q128.128 -> Q64.96)
    Ok((ratio + ((BigUint::one() << 32) - BigUint::one())) >> 32)
}
