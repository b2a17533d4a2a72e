// planner.rs
//
// Swap-then-mint planning for a single concentrated-liquidity position.
// - Pick a spacing-aligned range around the current tick
// - Read the range's sqrt prices from the pool's TickMath
// - Solve the zero-residue split and the swap that reaches it
// - Bound that swap with a price limit
// Stateless: every call builds its result from the snapshot and balances passed in.

use num_bigint::BigUint;

use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::math::constants::{max_uint160, max_uint256};
use crate::math::price::real_price;
use crate::math::slippage::{threshold_price, SlippagePpm};
use crate::math::split::{optimal_split, swap_instruction};
use crate::math::tick_spacing::{TickRange, TickSpacing};
use crate::models::{Balances, DepositPlan, PoolSnapshot, PriceReport};

/// Tick -> Q64.96 sqrt price, as computed by the pool's own library.
pub trait SqrtRatioAtTick {
    fn sqrt_ratio_at_tick(&self, tick: i32) -> Result<BigUint>;
}

impl<F> SqrtRatioAtTick for F
where
    F: Fn(i32) -> Result<BigUint>,
{
    fn sqrt_ratio_at_tick(&self, tick: i32) -> Result<BigUint> {
        self(tick)
    }
}

#[derive(Debug, Clone)]
pub struct DepositPlanner {
    config: PlannerConfig,
    spacing: TickSpacing,
    slippage: SlippagePpm,
}

impl DepositPlanner {
    pub fn new(config: PlannerConfig) -> Result<Self> {
        let spacing = TickSpacing::new(config.tick_spacing)?;
        let slippage = SlippagePpm::new(config.slippage_ppm)?;
        Ok(Self { config, spacing, slippage })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Range from the configured price band around `tick`.
    pub fn select_range(&self, tick: i32) -> Result<TickRange> {
        TickRange::around_with(
            tick,
            self.config.lower_price_ratio,
            self.config.upper_price_ratio,
            self.spacing,
            self.config.range_rounding,
        )
    }

    /// Plan a deposit into the configured band around the pool's current tick.
    pub fn plan_deposit(
        &self,
        pool: &PoolSnapshot,
        balances: &Balances,
        oracle: &dyn SqrtRatioAtTick,
    ) -> Result<DepositPlan> {
        let range = self.select_range(pool.tick)?;
        self.plan_deposit_in_range(pool, balances, range, oracle)
    }

    /// Plan a deposit into an explicit range. The range must be aligned to the
    /// pool's spacing and must straddle the current price.
    pub fn plan_deposit_in_range(
        &self,
        pool: &PoolSnapshot,
        balances: &Balances,
        range: TickRange,
        oracle: &dyn SqrtRatioAtTick,
    ) -> Result<DepositPlan> {
        if !range.is_aligned(self.spacing) {
            return Err(PlannerError::InvalidRange(format!(
                "ticks [{}, {}] are not multiples of spacing {}",
                range.tick_lower, range.tick_upper, self.spacing.get()
            )));
        }

        let p_a = oracle.sqrt_ratio_at_tick(range.tick_lower)?;
        let p_b = oracle.sqrt_ratio_at_tick(range.tick_upper)?;
        let p = &pool.sqrt_price_x96;

        log::debug!(
            "Ticks: lower={} current={} upper={}",
            range.tick_lower,
            pool.tick,
            range.tick_upper
        );
        log::debug!("Sqrt prices: lower={} current={} upper={}", p_a, p, p_b);

        let target = optimal_split(&balances.amount0, &balances.amount1, &p_a, p, &p_b)?;
        let swap = swap_instruction(&balances.amount0, &balances.amount1, &target)?;
        let limit = threshold_price(p, swap.zero_for_one, self.slippage);

        log::debug!("Initial amounts: x={} y={}", balances.amount0, balances.amount1);
        log::debug!("Optimal amounts: x={} y={}", target.amount0, target.amount1);
        log::debug!(
            "Swap: zero_for_one={} amount={} limit={}",
            swap.zero_for_one,
            swap.amount,
            limit
        );
        if swap.is_noop() {
            log::info!("Balances already match the range split, swap is a no-op");
        }

        ensure_fits("amount0", &balances.amount0, &max_uint256())?;
        ensure_fits("amount1", &balances.amount1, &max_uint256())?;
        ensure_fits("sqrt_price_limit_x96", &limit, &max_uint160())?;

        log::info!(
            "Deposit plan [{}, {}]: swap {} {} with limit {}",
            range.tick_lower,
            range.tick_upper,
            swap.amount,
            if swap.zero_for_one { "token0->token1" } else { "token1->token0" },
            limit
        );

        Ok(DepositPlan {
            amount0: balances.amount0.clone(),
            amount1: balances.amount1.clone(),
            zero_for_one: swap.zero_for_one,
            swap_amount: swap.amount,
            sqrt_price_limit_x96: limit,
            tick_lower: range.tick_lower,
            tick_upper: range.tick_upper,
            target,
            sqrt_price_x96: p.clone(),
            sqrt_price_lower_x96: p_a,
            sqrt_price_upper_x96: p_b,
        })
    }

    /// Price limit for unwinding a position: a token1 -> token0 swap at the
    /// configured slippage.
    pub fn exit_price_limit(&self, pool: &PoolSnapshot) -> Result<BigUint> {
        let limit = threshold_price(&pool.sqrt_price_x96, false, self.slippage);
        ensure_fits("sqrt_price_limit_x96", &limit, &max_uint160())?;
        Ok(limit)
    }

    /// Token1-per-token0 prices at the plan's bounds, with the configured decimals.
    pub fn price_report(&self, plan: &DepositPlan) -> Result<PriceReport> {
        let (d0, d1) = (self.config.decimals0, self.config.decimals1);
        Ok(PriceReport {
            lower: real_price(&plan.sqrt_price_lower_x96, d0, d1, true)?,
            current: real_price(&plan.sqrt_price_x96, d0, d1, true)?,
            upper: real_price(&plan.sqrt_price_upper_x96, d0, d1, true)?,
        })
    }
}

fn ensure_fits(field: &str, value: &BigUint, max: &BigUint) -> Result<()> {
    if value > max {
        return Err(PlannerError::ArithmeticOverflow(format!(
            "{} = {} exceeds {} bits",
            field,
            value,
            max.bits()
        )));
    }
    Ok(())
}
