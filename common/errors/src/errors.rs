#![no_std]

// Rate library
pub static ERROR_UNSUPPORTED_PERCENTAGE: &[u8] = b"Unsupported percentage.";

pub static ERROR_INTEREST_RATE_NOT_SUPPORTED: &[u8] = b"Interest rate not supported.";

pub static ERROR_INVALID_RATES_START: &[u8] =
    b"New rates must start right after the current maximum percentage.";

pub static ERROR_EMPTY_RATES_RANGE: &[u8] = b"Rates range is empty.";

pub static ERROR_RATES_NOT_MONOTONIC: &[u8] = b"Rates must not decrease.";

// Pool configuration
pub static ERROR_POOL_NOT_FOUND: &[u8] = b"No pool found for this asset.";

pub static ERROR_POOL_ALREADY_EXISTS: &[u8] = b"Pool already exists for this asset.";

pub static ERROR_INVALID_BREAKING_POINT: &[u8] = b"Invalid utilization breaking point.";

pub static ERROR_INVALID_SLOPE: &[u8] = b"Slope out of bounds.";

pub static ERROR_INVALID_MAX_UTILIZATION: &[u8] = b"Invalid max utilization ratio.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] = b"Invalid reserve factor.";

pub static ERROR_INVALID_LIQUIDATION_DISCOUNT: &[u8] = b"Invalid liquidation discount.";

pub static ERROR_INVALID_LOAN_TO_VALUE: &[u8] = b"Invalid loan to value.";

pub static ERROR_INVALID_DISTRIBUTION_PARTS: &[u8] =
    b"Minimum distribution parts exceed one hundred percent.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid asset decimals.";

pub static ERROR_INVALID_LIQUIDATION_BOUNDARY: &[u8] = b"Invalid liquidation boundary.";

pub static ERROR_INVALID_REWARD_TOKEN: &[u8] = b"Invalid reward token.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Fallback price must be greater than zero.";

// Payments and amounts
pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than 0.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Payment asset does not match the pool asset.";

pub static ERROR_ZERO_SHARES: &[u8] = b"Amount converts to zero shares.";

pub static ERROR_ZERO_ASSETS: &[u8] = b"Shares convert to zero assets.";

// Capacity
pub static ERROR_UTILIZATION_RATIO_EXCEEDED: &[u8] = b"Utilization ratio is bigger than max.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Not enough liquidity in the pool.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares.";

pub static ERROR_REPAY_AMOUNT_EXCEEDS_DEBT: &[u8] = b"Repay amount exceeds debt.";

pub static ERROR_NO_DEBT_TO_REPAY: &[u8] = b"No debt to repay.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Not enough reserves.";

pub static ERROR_INSUFFICIENT_REWARD_RESERVE: &[u8] = b"Not enough rewards in reserve.";

pub static ERROR_NOTHING_TO_CLAIM: &[u8] = b"Nothing to claim.";

// State
pub static ERROR_BORROWING_FROZEN: &[u8] = b"Borrowing is frozen for this pool.";

pub static ERROR_ASSET_NOT_COLLATERAL: &[u8] = b"Asset is not allowed as collateral.";

pub static ERROR_SELF_LIQUIDATION: &[u8] = b"Liquidator cannot be the borrower.";

pub static ERROR_NOT_ENOUGH_DEBT_FOR_LIQUIDATION: &[u8] = b"Not enough debt for liquidation.";

pub static ERROR_GREATER_THAN_MAX_QUANTITY: &[u8] = b"Liquidation amount greater than max quantity.";

pub static ERROR_NO_VALID_PRICE: &[u8] = b"No valid price for asset.";

pub static ERROR_SAME_ACCOUNT: &[u8] = b"Cannot transfer shares to the same account.";

pub static ERROR_SAME_LIQUIDATION_ASSET: &[u8] = b"Debt and collateral asset must differ.";
