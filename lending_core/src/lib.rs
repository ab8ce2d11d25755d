#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accrual;
pub mod cache;
pub mod config;
pub mod oracle;
pub mod positions;
pub mod rate_library;
pub mod rewards;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::PoolCache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait LendingCore:
    positions::account::PositionAccountModule
    + positions::deposit::PositionDepositModule
    + positions::withdraw::PositionWithdrawModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::transfer::PositionTransferModule
    + positions::liquidation::PositionLiquidationModule
    + accrual::AccrualModule
    + rate_library::RateLibraryModule
    + rewards::RewardsModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the lending core.
    ///
    /// # Arguments
    /// - `oracle_address`: Contract answering `latestPrice(asset)`.
    /// - `reward_token`: Token streamed to suppliers and borrowers.
    /// - `liquidation_boundary`: Debt to borrow limit ratio (raw RAY) above which accounts
    ///   can be liquidated, within 100%..150%.
    ///
    /// The builtin 0%..=100% rate table is seeded on first deployment.
    #[init]
    fn init(
        &self,
        oracle_address: ManagedAddress,
        reward_token: EgldOrEsdtTokenIdentifier,
        liquidation_boundary: BigUint,
    ) {
        require!(reward_token.is_valid(), ERROR_INVALID_REWARD_TOKEN);
        let liquidation_boundary = self.to_decimal_ray(liquidation_boundary);
        self.validate_liquidation_boundary(&liquidation_boundary);

        self.oracle_address().set(oracle_address);
        self.reward_token().set(reward_token);
        self.liquidation_boundary().set(liquidation_boundary);
        self.seed_builtin_rates();
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies liquidity to the pool of the paid asset and mints pool shares.
    ///
    /// # Payment
    /// - A single fungible payment of a pool asset.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Minted shares (WAD).
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        let (asset, _) = self.call_value().egld_or_single_fungible_esdt();
        self.require_pool_exists(&asset);

        let caller = self.blockchain().get_caller();
        let mut cache = PoolCache::new(self, &asset);
        let amount = self.get_payment_amount(&cache);

        self.process_deposit(&mut cache, &caller, &amount)
    }

    /// Withdraws liquidity by burning pool shares.
    ///
    /// # Arguments
    /// - `asset`: Pool to withdraw from.
    /// - `amount`: Asset units requested; ignored when `withdraw_all` is set.
    /// - `withdraw_all`: Burn every share of the caller.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: The withdrawal would leave the caller's debt above
    ///   their borrow limit.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        withdraw_all: bool,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        self.require_pool_exists(&asset);
        if !withdraw_all {
            self.require_amount_greater_than_zero(&amount);
        }

        let caller = self.blockchain().get_caller();
        let mut cache = PoolCache::new(self, &asset);
        let amount = cache.get_decimal_value(&amount);
        let is_collateral = cache.params.can_be_collateral();

        let payout = self.process_withdraw(&mut cache, &caller, &amount, withdraw_all);
        drop(cache);

        if is_collateral {
            self.require_within_borrow_limit(&caller);
        }
        self.send_asset(&asset, &payout, &caller);

        payout
    }

    /// Borrows from a pool against the caller's collateral.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: The new debt would exceed the caller's borrow limit.
    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        self.require_not_paused();
        self.require_pool_exists(&asset);
        self.require_amount_greater_than_zero(&amount);

        let caller = self.blockchain().get_caller();
        let mut cache = PoolCache::new(self, &asset);
        let amount = cache.get_decimal_value(&amount);

        self.process_borrow(&mut cache, &caller, &amount);
        drop(cache);

        self.require_within_borrow_limit(&caller);
        self.send_asset(&asset, &amount, &caller);
    }

    /// Repays the caller's debt in the paid asset.
    ///
    /// # Arguments
    /// - `asset`: Pool the debt is owed to; must match the payment.
    /// - `repay_all`: Repay exactly the current debt and refund any excess.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Amount applied to the debt.
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        repay_all: bool,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        self.require_pool_exists(&asset);

        let caller = self.blockchain().get_caller();
        let mut cache = PoolCache::new(self, &asset);
        let payment = self.get_payment_amount(&cache);

        let (repaid, refund) = self.process_repay(&mut cache, &caller, &payment, repay_all);
        drop(cache);

        self.send_asset(&asset, &refund, &caller);

        repaid
    }

    /// Transfers pool shares, raw WAD units, from the caller to `to`.
    #[endpoint(transferShares)]
    fn transfer_shares(&self, asset: EgldOrEsdtTokenIdentifier, to: ManagedAddress, amount: BigUint) {
        self.require_not_paused();
        self.require_pool_exists(&asset);
        self.require_amount_greater_than_zero(&amount);

        let caller = self.blockchain().get_caller();
        let mut cache = PoolCache::new(self, &asset);
        let is_collateral = cache.params.can_be_collateral();
        let shares = self.to_decimal_wad(amount);

        self.process_transfer_shares(&mut cache, &caller, &to, &shares);
        drop(cache);

        if is_collateral {
            self.require_within_borrow_limit(&caller);
        }
    }

    /// Liquidates `borrower`, paying part of their debt in the paid asset.
    ///
    /// # Payment
    /// - The debt asset; the amount is the requested repayment.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Collateral shares (WAD) received.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        borrower: ManagedAddress,
        collateral_asset: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_not_paused();
        let (debt_asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.require_pool_exists(&debt_asset);
        self.require_pool_exists(&collateral_asset);
        self.require_amount_greater_than_zero(&amount);

        let liquidator = self.blockchain().get_caller();
        let (_, seized_shares) = self.process_liquidation(
            &liquidator,
            &borrower,
            &collateral_asset,
            &debt_asset,
            &amount,
        );

        seized_shares
    }
}
