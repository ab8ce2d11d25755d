multiversx_sc::imports!();

use common_constants::{
    MAX_ASSET_DECIMALS, MAX_LIQUIDATION_BOUNDARY, MAX_LIQUIDATION_DISCOUNT, MAX_RESERVE_FACTOR,
    MAX_SLOPE_PERCENTAGE, MAX_UTILIZATION_RATIO, MIN_LIQUIDATION_BOUNDARY,
};
use common_errors::*;
use common_structs::PoolParams;

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Ensures a pool exists for `asset`.
    ///
    /// # Errors
    /// - `ERROR_POOL_NOT_FOUND`: If no pool was created for the asset.
    fn require_pool_exists(&self, asset: &EgldOrEsdtTokenIdentifier) {
        require!(self.pools().contains(asset), ERROR_POOL_NOT_FOUND);
    }

    /// Ensures an amount is greater than zero.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If the amount is zero.
    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    /// Checks an Asset Parameter Store entry before it is stored.
    ///
    /// **Bounds**:
    /// - `asset_decimals <= MAX_ASSET_DECIMALS`.
    /// - `0 < breaking_point < RAY`; base and slopes at most `MAX_SLOPE_PERCENTAGE`.
    /// - `0 < max_utilization_ratio <= MAX_UTILIZATION_RATIO`.
    /// - reserve factor and liquidation discount within their maxima, `loan_to_value <= RAY`.
    /// - `min_supply_part + min_borrow_part <= RAY`.
    fn validate_pool_params(&self, params: &PoolParams<Self::Api>) {
        require!(
            params.asset_decimals <= MAX_ASSET_DECIMALS,
            ERROR_INVALID_DECIMALS
        );

        let curve = &params.interest_rate_params;
        require!(
            curve.utilization_breaking_point > self.ray_zero()
                && curve.utilization_breaking_point < self.ray(),
            ERROR_INVALID_BREAKING_POINT
        );

        let max_slope = self.to_decimal_ray(BigUint::from(MAX_SLOPE_PERCENTAGE));
        require!(
            curve.base_percentage <= max_slope
                && curve.first_slope <= max_slope
                && curve.second_slope <= max_slope,
            ERROR_INVALID_SLOPE
        );

        require!(
            params.max_utilization_ratio > self.ray_zero()
                && params.max_utilization_ratio
                    <= self.to_decimal_ray(BigUint::from(MAX_UTILIZATION_RATIO)),
            ERROR_INVALID_MAX_UTILIZATION
        );
        require!(
            params.reserve_factor <= self.to_decimal_ray(BigUint::from(MAX_RESERVE_FACTOR)),
            ERROR_INVALID_RESERVE_FACTOR
        );
        require!(
            params.liquidation_discount
                <= self.to_decimal_ray(BigUint::from(MAX_LIQUIDATION_DISCOUNT)),
            ERROR_INVALID_LIQUIDATION_DISCOUNT
        );
        require!(
            params.loan_to_value <= self.ray(),
            ERROR_INVALID_LOAN_TO_VALUE
        );

        let distribution = params.min_supply_distribution_part.clone()
            + params.min_borrow_distribution_part.clone();
        require!(distribution <= self.ray(), ERROR_INVALID_DISTRIBUTION_PARTS);
    }

    /// # Errors
    /// - `ERROR_INVALID_LIQUIDATION_BOUNDARY`: Outside `[MIN_LIQUIDATION_BOUNDARY, MAX_LIQUIDATION_BOUNDARY]`.
    fn validate_liquidation_boundary(&self, boundary: &ManagedDecimal<Self::Api, NumDecimals>) {
        require!(
            boundary >= &self.to_decimal_ray(BigUint::from(MIN_LIQUIDATION_BOUNDARY))
                && boundary <= &self.to_decimal_ray(BigUint::from(MAX_LIQUIDATION_BOUNDARY)),
            ERROR_INVALID_LIQUIDATION_BOUNDARY
        );
    }
}
