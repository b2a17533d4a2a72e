use std::env;
use std::path::Path;

use crate::math::tick_spacing::RangeRounding;

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub tick_spacing: i32,

    // Token decimals, for reported prices only
    pub decimals0: u8,
    pub decimals1: u8,

    // Range band as multiples of the current price
    pub lower_price_ratio: f64,
    pub upper_price_ratio: f64,
    pub range_rounding: RangeRounding,

    // Swap tolerance
    pub slippage_ppm: u32,
}

impl PlannerConfig {
    /// Defaults: 18/18 decimals, a -30%/+30% band rounded outward and 5% slippage.
    pub fn new(tick_spacing: i32) -> Self {
        Self {
            tick_spacing,
            decimals0: 18,
            decimals1: 18,
            lower_price_ratio: 0.7,
            upper_price_ratio: 1.3,
            range_rounding: RangeRounding::Outward,
            slippage_ppm: 50_000,
        }
    }

    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Pool-specific file first, then the generic one
        dotenv::from_filename("planner.env").ok();
        dotenv::from_filename("config/planner.env").ok();
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like `from_env`, with `path` loaded ahead of the default files. A
    /// missing `path` is an error.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        Self::from_env()
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tick_spacing: i32 = lookup("TICK_SPACING")
            .ok_or("TICK_SPACING must be set")?
            .parse()
            .map_err(|_| "TICK_SPACING must be an integer")?;
        let defaults = Self::new(tick_spacing);

        Ok(PlannerConfig {
            tick_spacing,
            decimals0: parse_or(&lookup, "TOKEN0_DECIMALS", defaults.decimals0)?,
            decimals1: parse_or(&lookup, "TOKEN1_DECIMALS", defaults.decimals1)?,
            lower_price_ratio: parse_or(&lookup, "RANGE_LOWER_RATIO", defaults.lower_price_ratio)?,
            upper_price_ratio: parse_or(&lookup, "RANGE_UPPER_RATIO", defaults.upper_price_ratio)?,
            range_rounding: parse_or(&lookup, "RANGE_ROUNDING", defaults.range_rounding)?,
            slippage_ppm: parse_or(&lookup, "SLIPPAGE_PPM", defaults.slippage_ppm)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{} has an invalid value: {}", key, raw).into()),
        None => Ok(default),
    }
}
