multiversx_sc::imports!();

use common_constants::{RAY_PRECISION, WAD_PRECISION};
use common_errors::ERROR_INSUFFICIENT_COLLATERAL;

use crate::{accrual, cache::PoolCache, oracle, rate_library, storage, utils, validation};

/// Account level valuation: balances projected to the current block and priced in USD.
///
/// Every figure is computed on read only caches, so callers that changed a pool in the
/// same call must drop their persistent cache first.
#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + rate_library::RateLibraryModule
    + accrual::AccrualModule
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
{
    /// Asset units the shares of `user` are worth.
    fn get_supply_amount(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = PoolCache::new_readonly(self, asset);
        self.accrue_interest(&mut cache);

        cache.shares_to_amount(&self.get_user_shares(asset, user))
    }

    /// Debt of `user` including interest, in asset units.
    fn get_debt_amount(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut cache = PoolCache::new_readonly(self, asset);
        self.accrue_interest(&mut cache);

        let position = self.get_borrow_position(asset, user, cache.params.asset_decimals);
        cache.current_debt(&position)
    }

    fn get_supply_value_usd(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let amount = self.get_supply_amount(asset, user);
        self.get_usd_value(&amount, &self.get_usd_price(asset))
    }

    fn get_debt_value_usd(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let amount = self.get_debt_amount(asset, user);
        self.get_usd_value(&amount, &self.get_usd_price(asset))
    }

    /// **Formula**: `Σ collateral_value_usd * loan_to_value / RAY` over the collateral enabled
    /// pools `user` supplied to, in WAD.
    fn get_borrow_limit_usd(&self, user: &ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut limit = self.wad_zero();
        for asset in self.user_supplied_assets(user).iter() {
            let params = self.pool_params(&asset).get();
            if !params.can_be_collateral() {
                continue;
            }

            let value = self.get_supply_value_usd(&asset, user);
            limit += &self.mul_floor(&value, &params.loan_to_value, WAD_PRECISION);
        }

        limit
    }

    fn get_total_supply_value_usd(
        &self,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = self.wad_zero();
        for asset in self.user_supplied_assets(user).iter() {
            total += &self.get_supply_value_usd(&asset, user);
        }

        total
    }

    fn get_total_debt_value_usd(
        &self,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = self.wad_zero();
        for asset in self.user_borrowed_assets(user).iter() {
            total += &self.get_debt_value_usd(&asset, user);
        }

        total
    }

    /// An account is liquidatable once `total_debt * RAY / borrow_limit` exceeds the
    /// liquidation boundary, or when it holds debt without any borrow limit.
    fn is_liquidatable(&self, user: &ManagedAddress) -> bool {
        let total_debt = self.get_total_debt_value_usd(user);
        if total_debt == self.wad_zero() {
            return false;
        }

        let borrow_limit = self.get_borrow_limit_usd(user);
        if borrow_limit == self.wad_zero() {
            return true;
        }

        let debt_ratio = self.div_floor(&total_debt, &borrow_limit, RAY_PRECISION);
        debt_ratio > self.liquidation_boundary().get()
    }

    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: The debt of `user` is above their borrow limit.
    fn require_within_borrow_limit(&self, user: &ManagedAddress) {
        if self.user_borrowed_assets(user).is_empty() {
            return;
        }

        let total_debt = self.get_total_debt_value_usd(user);
        let borrow_limit = self.get_borrow_limit_usd(user);
        require!(total_debt <= borrow_limit, ERROR_INSUFFICIENT_COLLATERAL);
    }
}
