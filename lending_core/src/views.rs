multiversx_sc::imports!();

use crate::{
    accrual, cache::PoolCache, oracle, positions, rate_library, rewards, storage, utils,
    validation,
};

/// Read only projections of pools and accounts to the current block.
///
/// Nothing here writes storage: pools are loaded with `PoolCache::new_readonly` and
/// accrued in memory.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + rate_library::RateLibraryModule
    + accrual::AccrualModule
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + rewards::RewardsModule
    + positions::account::PositionAccountModule
    + positions::repay::PositionRepayModule
    + positions::transfer::PositionTransferModule
    + positions::liquidation::PositionLiquidationModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Asset units per share (RAY).
    #[view(getExchangeRate)]
    fn get_exchange_rate(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.projected_pool(&asset).exchange_rate()
    }

    /// Utilization ratio (RAY) after accruing to the current block.
    #[view(getUtilizationRatio)]
    fn get_utilization_ratio(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.projected_pool(&asset).utilization()
    }

    #[view(getAnnualBorrowRate)]
    fn get_annual_borrow_rate(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let cache = self.projected_pool(&asset);
        self.current_annual_rate(&cache)
    }

    #[view(getRatePerSecond)]
    fn get_rate_per_second_view(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let cache = self.projected_pool(&asset);
        self.current_rate_per_second(&cache)
    }

    /// Compound rate the pool would hold if accrued now.
    #[view(getCurrentCompoundRate)]
    fn get_current_compound_rate(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.projected_pool(&asset).compound_rate.rate.clone()
    }

    /// Total protocol reserves of a pool, accrued interest share included.
    #[view(getTotalReserves)]
    fn get_total_reserves(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.projected_pool(&asset).ledger.total_reserves.clone()
    }

    #[view(getUserSupplyBalance)]
    fn get_user_supply_balance(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_pool_exists(&asset);
        self.get_supply_amount(&asset, &user)
    }

    /// Debt of `user` in a pool including interest up to now.
    #[view(getUserDebt)]
    fn get_user_debt(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_pool_exists(&asset);
        self.get_debt_amount(&asset, &user)
    }

    /// USD value (WAD) of everything `user` supplied.
    #[view(getTotalSupplyValue)]
    fn get_total_supply_value(&self, user: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_total_supply_value_usd(&user)
    }

    /// USD value (WAD) of everything `user` owes.
    #[view(getTotalDebtValue)]
    fn get_total_debt_value(&self, user: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_total_debt_value_usd(&user)
    }

    /// USD value (WAD) `user` may owe against their collateral.
    #[view(getBorrowLimit)]
    fn get_borrow_limit(&self, user: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_borrow_limit_usd(&user)
    }

    #[view(isLiquidatable)]
    fn is_liquidatable_view(&self, user: ManagedAddress) -> bool {
        self.is_liquidatable(&user)
    }

    /// Largest repayment (debt asset units) a liquidation of `borrower` accepts for the pair.
    #[view(getMaxLiquidationQuantity)]
    fn get_max_liquidation_quantity(
        &self,
        borrower: ManagedAddress,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        debt_asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_pool_exists(&collateral_asset);
        self.require_pool_exists(&debt_asset);

        let collateral_price = self.get_usd_price(&collateral_asset);
        let debt_price = self.get_usd_price(&debt_asset);
        self.calc_max_liquidation_quantity(
            &borrower,
            &collateral_asset,
            &debt_asset,
            &collateral_price,
            &debt_price,
        )
    }

    fn projected_pool(&self, asset: &EgldOrEsdtTokenIdentifier) -> PoolCache<Self> {
        self.require_pool_exists(asset);

        let mut cache = PoolCache::new_readonly(self, asset);
        self.accrue_interest(&mut cache);
        cache
    }
}
