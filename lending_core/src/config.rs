multiversx_sc::imports!();

use common_errors::*;
use common_structs::{
    CompoundRate, InterestRateParams, PoolLedger, PoolParams, PriceFeed, RewardPoolInfo,
};

use crate::{accrual, cache::PoolCache, rate_library, rewards, storage, utils, validation};

/// Owner configuration of the lending core, the Asset Parameter Store included.
///
/// # Security Considerations
/// Every endpoint is restricted to the contract owner. Parameter changes accrue the pool
/// first, so interest and rewards up to the change are computed with the old values.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + rate_library::RateLibraryModule
    + accrual::AccrualModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + rewards::RewardsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Creates the pool of `asset`.
    ///
    /// All percentages are raw RAY values (100% = 10^27).
    ///
    /// **Process**:
    /// 1. Validates the parameters.
    /// 2. Stores an empty ledger, a compound rate of one and reward sums of zero.
    /// 3. Emits `pool_created`.
    ///
    /// # Errors
    /// - `ERROR_INVALID_ASSET`: The identifier is not a valid token.
    /// - `ERROR_POOL_ALREADY_EXISTS`: The asset already has a pool.
    /// - Parameter errors from `validate_pool_params`.
    #[only_owner]
    #[endpoint(addPool)]
    fn add_pool(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        base_percentage: BigUint,
        first_slope: BigUint,
        second_slope: BigUint,
        utilization_breaking_point: BigUint,
        max_utilization_ratio: BigUint,
        reserve_factor: BigUint,
        liquidation_discount: BigUint,
        loan_to_value: BigUint,
        min_supply_distribution_part: BigUint,
        min_borrow_distribution_part: BigUint,
        is_collateral: bool,
    ) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        require!(!self.pools().contains(&asset), ERROR_POOL_ALREADY_EXISTS);

        let params = PoolParams {
            asset_decimals,
            interest_rate_params: InterestRateParams {
                base_percentage: self.to_decimal_ray(base_percentage),
                first_slope: self.to_decimal_ray(first_slope),
                second_slope: self.to_decimal_ray(second_slope),
                utilization_breaking_point: self.to_decimal_ray(utilization_breaking_point),
            },
            max_utilization_ratio: self.to_decimal_ray(max_utilization_ratio),
            reserve_factor: self.to_decimal_ray(reserve_factor),
            liquidation_discount: self.to_decimal_ray(liquidation_discount),
            loan_to_value: self.to_decimal_ray(loan_to_value),
            min_supply_distribution_part: self.to_decimal_ray(min_supply_distribution_part),
            min_borrow_distribution_part: self.to_decimal_ray(min_borrow_distribution_part),
            is_collateral,
            is_borrowing_frozen: false,
        };
        self.validate_pool_params(&params);

        let timestamp = self.blockchain().get_block_timestamp();
        let block_nonce = self.blockchain().get_block_nonce();

        self.pool_params(&asset).set(&params);
        self.pool_ledger(&asset).set(PoolLedger::new(asset_decimals));
        self.compound_rate(&asset)
            .set(CompoundRate::starting_at(timestamp));
        self.reward_pool_info(&asset)
            .set(RewardPoolInfo::new(block_nonce));
        self.pools().insert(asset.clone());

        self.pool_created_event(&asset, &params);
    }

    /// Replaces the curve, caps and distribution parts of a pool.
    ///
    /// Decimals and the collateral and frozen flags keep their values; they have their own
    /// endpoints.
    #[only_owner]
    #[endpoint(updatePoolParams)]
    fn update_pool_params(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        base_percentage: BigUint,
        first_slope: BigUint,
        second_slope: BigUint,
        utilization_breaking_point: BigUint,
        max_utilization_ratio: BigUint,
        reserve_factor: BigUint,
        liquidation_discount: BigUint,
        loan_to_value: BigUint,
        min_supply_distribution_part: BigUint,
        min_borrow_distribution_part: BigUint,
    ) {
        self.require_pool_exists(&asset);
        self.sync_pool(&asset);

        let mut params = self.pool_params(&asset).get();
        params.interest_rate_params = InterestRateParams {
            base_percentage: self.to_decimal_ray(base_percentage),
            first_slope: self.to_decimal_ray(first_slope),
            second_slope: self.to_decimal_ray(second_slope),
            utilization_breaking_point: self.to_decimal_ray(utilization_breaking_point),
        };
        params.max_utilization_ratio = self.to_decimal_ray(max_utilization_ratio);
        params.reserve_factor = self.to_decimal_ray(reserve_factor);
        params.liquidation_discount = self.to_decimal_ray(liquidation_discount);
        params.loan_to_value = self.to_decimal_ray(loan_to_value);
        params.min_supply_distribution_part = self.to_decimal_ray(min_supply_distribution_part);
        params.min_borrow_distribution_part = self.to_decimal_ray(min_borrow_distribution_part);
        self.validate_pool_params(&params);

        self.pool_params(&asset).set(&params);
        self.pool_params_updated_event(&asset, &params);
    }

    #[only_owner]
    #[endpoint(setBorrowingFrozen)]
    fn set_borrowing_frozen(&self, asset: EgldOrEsdtTokenIdentifier, is_frozen: bool) {
        self.require_pool_exists(&asset);

        let mut params = self.pool_params(&asset).get();
        params.is_borrowing_frozen = is_frozen;
        self.pool_params(&asset).set(&params);

        self.pool_params_updated_event(&asset, &params);
    }

    /// Enables or disables a pool as collateral. Disabling it lowers the borrow limit of
    /// every supplier at once.
    #[only_owner]
    #[endpoint(setCollateralEnabled)]
    fn set_collateral_enabled(&self, asset: EgldOrEsdtTokenIdentifier, is_collateral: bool) {
        self.require_pool_exists(&asset);

        let mut params = self.pool_params(&asset).get();
        params.is_collateral = is_collateral;
        self.pool_params(&asset).set(&params);

        self.pool_params_updated_event(&asset, &params);
    }

    /// # Arguments
    /// - `boundary`: Debt to borrow limit ratio, raw RAY, within 100%..150%.
    #[only_owner]
    #[endpoint(setLiquidationBoundary)]
    fn set_liquidation_boundary(&self, boundary: BigUint) {
        let boundary = self.to_decimal_ray(boundary);
        self.validate_liquidation_boundary(&boundary);
        self.liquidation_boundary().set(boundary);
    }

    #[only_owner]
    #[endpoint(setOracleAddress)]
    fn set_oracle_address(&self, oracle_address: ManagedAddress) {
        self.oracle_address().set(oracle_address);
    }

    /// Price used for `asset` whenever the oracle quotes zero.
    #[only_owner]
    #[endpoint(setFallbackPrice)]
    fn set_fallback_price(&self, asset: EgldOrEsdtTokenIdentifier, value: BigUint, decimals: u8) {
        self.require_pool_exists(&asset);

        let feed = PriceFeed { value, decimals };
        require!(feed.is_valid(), ERROR_INVALID_PRICE);
        self.fallback_price(&asset).set(feed);
    }

    /// Sends `amount` of a pool's reserves to the owner.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_RESERVES`: Above the accrued reserves.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: Above the cash the pool holds.
    #[only_owner]
    #[endpoint(withdrawReserves)]
    fn withdraw_reserves(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_pool_exists(&asset);
        self.require_amount_greater_than_zero(&amount);

        let mut cache = PoolCache::new(self, &asset);
        self.accrue_interest(&mut cache);
        let amount = cache.get_decimal_value(&amount);

        require!(
            amount <= cache.ledger.total_reserves,
            ERROR_INSUFFICIENT_RESERVES
        );
        require!(
            amount <= cache.ledger.aggregated_liquidity,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        cache.ledger.total_reserves -= &amount;
        cache.ledger.aggregated_liquidity -= &amount;
        drop(cache);

        let owner = self.blockchain().get_caller();
        self.send_asset(&asset, &amount, &owner);
    }

    /// Accrues interest and advances the reward sums of a pool at its current parameters.
    fn sync_pool(&self, asset: &EgldOrEsdtTokenIdentifier) {
        let mut cache = PoolCache::new(self, asset);
        self.accrue_interest(&mut cache);
        self.update_reward_sums(&cache);
    }
}
