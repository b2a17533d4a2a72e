use std::fs;
use std::path::PathBuf;

use univ3_deposit_planner::math::tick_spacing::RangeRounding;
use univ3_deposit_planner::{DepositPlanner, PlannerConfig};

fn env_file(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}.env", name, std::process::id()));
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_planner_settings_from_env_file() {
    let path = env_file(
        "dai-weth-planner",
        "TICK_SPACING=60\n\
         TOKEN0_DECIMALS=18\n\
         TOKEN1_DECIMALS=18\n\
         RANGE_ROUNDING=upward\n\
         SLIPPAGE_PPM=20000\n",
    );

    let config = PlannerConfig::from_env_file(&path).unwrap();
    fs::remove_file(&path).ok();
    println!("Loaded config: {:?}", config);

    assert_eq!(config.tick_spacing, 60);
    assert_eq!((config.decimals0, config.decimals1), (18, 18));
    assert_eq!(config.range_rounding, RangeRounding::Upward);
    assert_eq!(config.slippage_ppm, 20_000);
    assert_eq!((config.lower_price_ratio, config.upper_price_ratio), (0.7, 1.3));

    let planner = DepositPlanner::new(config).unwrap();
    let range = planner.select_range(-76_012).unwrap();
    assert_eq!((range.tick_lower, range.tick_upper), (-79_560, -73_380));
}

#[test]
fn missing_env_file_is_an_error() {
    let path = std::env::temp_dir().join("no-such-planner-settings.env");
    let err = PlannerConfig::from_env_file(&path).unwrap_err();
    assert!(err.to_string().contains("no-such-planner-settings.env"), "{}", err);
}
