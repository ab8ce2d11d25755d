#![no_std]

mod builtin_rates;

pub use builtin_rates::BUILTIN_RATES_PER_SECOND;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Share balances and USD values are WAD based
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// One percentage point expressed in RAY (100% = RAY)
pub const ONE_PERCENT: u128 = RAY / 100;

/// Step of the interest rate library, 0.1 percentage points
pub const LIBRARY_PRECISION: u128 = ONE_PERCENT / 10;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Upper bound for the base percentage and both slopes of a pool (100%)
pub const MAX_SLOPE_PERCENTAGE: u128 = RAY;

/// Maximum utilization ratio that can be configured for a pool (100%)
pub const MAX_UTILIZATION_RATIO: u128 = RAY;

/// Reserve factor and liquidation discount may not exceed 50%
pub const MAX_RESERVE_FACTOR: u128 = RAY / 2;
pub const MAX_LIQUIDATION_DISCOUNT: u128 = RAY / 2;

/// Liquidation boundary is a debt-to-borrow-limit ratio: 100% to 150%
pub const MIN_LIQUIDATION_BOUNDARY: u128 = RAY;
pub const MAX_LIQUIDATION_BOUNDARY: u128 = RAY + RAY / 2;

/// Largest decimal count a pool asset may declare
pub const MAX_ASSET_DECIMALS: usize = 18;
