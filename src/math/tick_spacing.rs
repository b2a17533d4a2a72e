// Tick alignment and range selection
// ----------------------------------
// A pool only accepts position bounds that are multiples of its tick spacing.
// Rounding is done with integer floor/ceil division: truncation and floor
// disagree for negative ticks, and float division is not exact.
//
// The only floating point in the crate is the ratio -> tick offset used to
// pick *where* the range goes. It never touches deposit amounts.

use std::str::FromStr;

use num_integer::Integer;

use crate::error::{PlannerError, Result};
use crate::math::constants::{MAX_TICK, MIN_TICK};

const TICK_BASE: f64 = 1.0001;

/// Positive tick spacing of a pool (1, 10, 60, 200, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSpacing(i32);

impl TickSpacing {
    pub fn new(spacing: i32) -> Result<Self> {
        if spacing <= 0 {
            return Err(PlannerError::InvalidTickSpacing(spacing));
        }
        Ok(Self(spacing))
    }

    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

/// Rounds `tick` to a multiple of `spacing`: down (toward negative infinity)
/// unless `round_up`, in which case up (toward positive infinity).
///
/// The result is widened to `i64`: rounding `i32::MIN` down or `i32::MAX` up
/// can leave the `i32` domain, but never the `i64` one.
pub fn spaced_tick(tick: i32, spacing: TickSpacing, round_up: bool) -> i64 {
    let tick = i64::from(tick);
    let spacing = i64::from(spacing.get());
    let steps = if round_up {
        Integer::div_ceil(&tick, &spacing)
    } else {
        Integer::div_floor(&tick, &spacing)
    };
    steps * spacing
}

/// How a price band is turned into spacing-aligned ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RangeRounding {
    /// Offsets rounded to the nearest tick; lower bound floored, upper bound
    /// ceiled. The range never shrinks below the requested band.
    #[default]
    Outward,
    /// Offsets floored; both bounds ceiled. Both bounds move toward higher
    /// prices.
    Upward,
}

impl FromStr for RangeRounding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "outward" => Ok(Self::Outward),
            "upward" => Ok(Self::Upward),
            other => Err(format!("unknown range rounding: {}", other)),
        }
    }
}

fn ticks_for_ratio(ratio: f64) -> Result<f64> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(PlannerError::InvalidRange(format!(
            "price ratio {} must be finite and positive",
            ratio
        )));
    }
    let ticks = ratio.ln() / TICK_BASE.ln();
    if ticks < f64::from(MIN_TICK) * 2.0 || ticks > f64::from(MAX_TICK) * 2.0 {
        return Err(PlannerError::InvalidRange(format!(
            "price ratio {} is beyond the tick domain",
            ratio
        )));
    }
    Ok(ticks)
}

/// Number of ticks between a price and `ratio` times that price:
/// `round(ln(ratio) / ln(1.0001))`. `0.7` gives `-3567`, `1.3` gives `2624`.
pub fn tick_offset_for_ratio(ratio: f64) -> Result<i32> {
    Ok(ticks_for_ratio(ratio)?.round() as i32)
}

// ------------------------------- TickRange -----------------------------------

/// Spacing-aligned position bounds, `tick_lower < tick_upper`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl TickRange {
    pub fn new(tick_lower: i32, tick_upper: i32) -> Result<Self> {
        if tick_lower >= tick_upper {
            return Err(PlannerError::InvalidRange(format!(
                "tick_lower {} must be below tick_upper {}",
                tick_lower, tick_upper
            )));
        }
        if tick_lower < MIN_TICK || tick_upper > MAX_TICK {
            return Err(PlannerError::InvalidRange(format!(
                "ticks [{}, {}] fall outside [{}, {}]",
                tick_lower, tick_upper, MIN_TICK, MAX_TICK
            )));
        }
        Ok(Self { tick_lower, tick_upper })
    }

    /// Range spanning `lower_ratio..upper_ratio` around `tick`, rounded
    /// outward (see [`RangeRounding::Outward`]).
    pub fn around(
        tick: i32,
        lower_ratio: f64,
        upper_ratio: f64,
        spacing: TickSpacing,
    ) -> Result<Self> {
        Self::around_with(tick, lower_ratio, upper_ratio, spacing, RangeRounding::Outward)
    }

    pub fn around_with(
        tick: i32,
        lower_ratio: f64,
        upper_ratio: f64,
        spacing: TickSpacing,
        rounding: RangeRounding,
    ) -> Result<Self> {
        // (lower offset, upper offset, round lower up)
        let (down, up, lower_up) = match rounding {
            RangeRounding::Outward => (
                tick_offset_for_ratio(lower_ratio)?,
                tick_offset_for_ratio(upper_ratio)?,
                false,
            ),
            RangeRounding::Upward => (
                ticks_for_ratio(lower_ratio)?.floor() as i32,
                ticks_for_ratio(upper_ratio)?.floor() as i32,
                true,
            ),
        };

        let lower = spaced_tick(offset_tick(tick, down)?, spacing, lower_up);
        let upper = spaced_tick(offset_tick(tick, up)?, spacing, true);
        Self::new(narrow(lower)?, narrow(upper)?)
    }

    #[inline]
    pub fn is_aligned(&self, spacing: TickSpacing) -> bool {
        self.tick_lower % spacing.get() == 0 && self.tick_upper % spacing.get() == 0
    }

    /// Current tick strictly inside the bounds.
    #[inline]
    pub fn contains(&self, tick: i32) -> bool {
        self.tick_lower < tick && tick < self.tick_upper
    }
}

fn offset_tick(tick: i32, offset: i32) -> Result<i32> {
    tick.checked_add(offset).ok_or_else(|| {
        PlannerError::InvalidRange(format!("tick {} offset by {} leaves i32", tick, offset))
    })
}

fn narrow(tick: i64) -> Result<i32> {
    i32::try_from(tick)
        .map_err(|_| PlannerError::InvalidRange(format!("tick {} does not fit in i32", tick)))
}
