pub mod constants;
pub mod price;
pub mod slippage;
pub mod split;
pub mod tick_spacing;
