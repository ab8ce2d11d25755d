multiversx_sc::imports!();

use common_constants::{RAY_PRECISION, WAD_PRECISION};
use common_errors::{
    ERROR_ASSET_NOT_COLLATERAL, ERROR_GREATER_THAN_MAX_QUANTITY,
    ERROR_NOT_ENOUGH_DEBT_FOR_LIQUIDATION, ERROR_SAME_LIQUIDATION_ASSET,
    ERROR_SELF_LIQUIDATION, ERROR_ZERO_SHARES,
};

use super::{account, repay, transfer};
use crate::{accrual, cache::PoolCache, oracle, rate_library, rewards, storage, utils, validation};

/// Liquidation of unhealthy accounts.
///
/// **Scope**: A liquidator repays part of a borrower's debt in one pool and receives the
/// borrower's shares of a collateral pool, worth the repaid value plus the pool's
/// liquidation discount.
///
/// **Goal**: Bring accounts whose debt outgrew `liquidation_boundary * borrow_limit`
/// back under control without touching healthy ones.
#[multiversx_sc::module]
pub trait PositionLiquidationModule:
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
    + account::PositionAccountModule
    + repay::PositionRepayModule
    + transfer::PositionTransferModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Liquidates `borrower` by repaying `payment` of `debt_asset` and seizing shares of
    /// `collateral_asset`.
    ///
    /// **Process**:
    /// 1. Rejects self liquidation, identical pools and non collateral pools.
    /// 2. Requires the account to be above the liquidation boundary.
    /// 3. Caps the repayment at `max_liquidation_quantity`.
    /// 4. Accrues the debt pool, settles the borrower and applies the repayment paid by the liquidator.
    /// 5. Accrues the collateral pool and moves `repaid_value * RAY / (RAY - discount)` worth of
    ///    shares, capped at the borrower's balance, to the liquidator.
    ///
    /// # Returns
    /// - `(repaid, seized_shares)`: Debt asset units repaid and collateral shares (WAD) seized.
    ///
    /// # Errors
    /// - `ERROR_SELF_LIQUIDATION`, `ERROR_SAME_LIQUIDATION_ASSET`, `ERROR_ASSET_NOT_COLLATERAL`.
    /// - `ERROR_NOT_ENOUGH_DEBT_FOR_LIQUIDATION`: The account is healthy enough.
    /// - `ERROR_GREATER_THAN_MAX_QUANTITY`: The repayment is above the maximum quantity.
    fn process_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
        debt_asset: &EgldOrEsdtTokenIdentifier,
        payment: &BigUint,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(liquidator != borrower, ERROR_SELF_LIQUIDATION);
        require!(
            collateral_asset != debt_asset,
            ERROR_SAME_LIQUIDATION_ASSET
        );

        let collateral_params = self.pool_params(collateral_asset).get();
        require!(
            collateral_params.can_be_collateral(),
            ERROR_ASSET_NOT_COLLATERAL
        );
        require!(
            self.is_liquidatable(borrower),
            ERROR_NOT_ENOUGH_DEBT_FOR_LIQUIDATION
        );

        let collateral_price = self.get_usd_price(collateral_asset);
        let debt_price = self.get_usd_price(debt_asset);
        let max_quantity = self.calc_max_liquidation_quantity(
            borrower,
            collateral_asset,
            debt_asset,
            &collateral_price,
            &debt_price,
        );

        let mut debt_cache = PoolCache::new(self, debt_asset);
        let repay_amount = debt_cache.get_decimal_value(payment);
        require!(
            repay_amount <= max_quantity,
            ERROR_GREATER_THAN_MAX_QUANTITY
        );

        self.accrue_interest(&mut debt_cache);
        let debt_pool_info = self.update_reward_sums(&debt_cache);
        self.settle_user_rewards(debt_asset, borrower, &debt_pool_info);
        let (repaid, _) =
            self.apply_repayment(&mut debt_cache, borrower, liquidator, &repay_amount, false);

        let mut collateral_cache = PoolCache::new(self, collateral_asset);
        self.accrue_interest(&mut collateral_cache);

        let repaid_value = self.get_usd_value(&repaid, &debt_price);
        let discount_factor =
            self.saturating_sub(&self.ray(), &collateral_params.liquidation_discount);
        let seized_value = self
            .div_floor(&repaid_value, &discount_factor, RAY_PRECISION)
            .rescale(WAD_PRECISION);
        let seized_amount = self.get_asset_amount(
            &seized_value,
            &collateral_price,
            collateral_params.asset_decimals,
        );

        let seized_shares = self.get_min(
            collateral_cache.amount_to_shares(&seized_amount),
            self.get_user_shares(collateral_asset, borrower),
        );
        require!(seized_shares > self.wad_zero(), ERROR_ZERO_SHARES);

        self.move_shares(&collateral_cache, borrower, liquidator, &seized_shares);

        self.liquidation_event(
            liquidator,
            borrower,
            debt_asset,
            &repaid,
            collateral_asset,
            &seized_shares,
        );

        (repaid, seized_shares)
    }

    /// Largest repayment of `debt_asset` a liquidator may make against `collateral_asset`.
    ///
    /// **Formula**: `min(collateral_value * (RAY - discount) / RAY, debt_value)` converted to
    /// debt asset units and capped at the debt itself.
    fn calc_max_liquidation_quantity(
        &self,
        borrower: &ManagedAddress,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
        debt_asset: &EgldOrEsdtTokenIdentifier,
        collateral_price: &ManagedDecimal<Self::Api, NumDecimals>,
        debt_price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let collateral_params = self.pool_params(collateral_asset).get();
        let debt_decimals = self.pool_params(debt_asset).get().asset_decimals;

        let collateral_amount = self.get_supply_amount(collateral_asset, borrower);
        let collateral_value = self.get_usd_value(&collateral_amount, collateral_price);
        let discount_factor =
            self.saturating_sub(&self.ray(), &collateral_params.liquidation_discount);
        let collateral_cap = self.mul_floor(&collateral_value, &discount_factor, WAD_PRECISION);

        let debt_amount = self.get_debt_amount(debt_asset, borrower);
        let debt_value = self.get_usd_value(&debt_amount, debt_price);

        let max_value = self.get_min(collateral_cap, debt_value);
        let quantity = self.get_asset_amount(&max_value, debt_price, debt_decimals);

        self.get_min(quantity, debt_amount)
    }
}
