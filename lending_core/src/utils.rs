multiversx_sc::imports!();

use common_errors::ERROR_INVALID_ASSET;
use common_structs::BorrowPosition;

use crate::{cache::PoolCache, storage, validation};

/// Helpers shared by the position modules: payments in and out, and the per user
/// share and debt records.
#[multiversx_sc::module]
pub trait LendingUtilsModule:
    storage::Storage
    + validation::ValidationModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Transfers `amount` of `asset` to `to`; a zero amount sends nothing.
    #[inline]
    fn send_asset(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        let payment = EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.into_raw_units().clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();

        payment
    }

    /// Reads the single fungible payment of the call and checks it against the pool.
    ///
    /// # Errors
    /// - `ERROR_INVALID_ASSET`: The payment is not the cached pool's asset.
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: The payment is empty.
    fn get_payment_amount(&self, cache: &PoolCache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(cache.is_same_asset(&asset), ERROR_INVALID_ASSET);
        self.require_amount_greater_than_zero(&amount);

        cache.get_decimal_value(&amount)
    }

    /// Shares of `user` in the pool of `asset`, WAD.
    fn get_user_shares(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(self.user_shares(asset, user).get())
    }

    /// Stores the share balance of `user` and keeps the supplied asset set in line with it.
    fn set_user_shares(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        if shares.into_raw_units() == &BigUint::zero() {
            self.user_shares(asset, user).clear();
            self.user_supplied_assets(user).swap_remove(asset);
            return;
        }

        self.user_shares(asset, user).set(shares.into_raw_units());
        self.user_supplied_assets(user).insert(asset.clone());
    }

    /// Debt position of `user`, an empty position when none is stored.
    fn get_borrow_position(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        asset_decimals: usize,
    ) -> BorrowPosition<Self::Api> {
        let mapper = self.borrow_positions(asset, user);
        if mapper.is_empty() {
            return BorrowPosition::new(
                self.ray_zero(),
                self.to_decimal(BigUint::zero(), asset_decimals),
            );
        }

        mapper.get()
    }

    /// Stores a debt position; a fully repaid position is removed.
    fn store_borrow_position(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        position: &BorrowPosition<Self::Api>,
    ) {
        if position.is_empty() {
            self.borrow_positions(asset, user).clear();
            self.user_borrowed_assets(user).swap_remove(asset);
            return;
        }

        self.borrow_positions(asset, user).set(position);
        self.user_borrowed_assets(user).insert(asset.clone());
    }

    /// Raw normalized debt of `user`, used as the borrow side reward balance.
    fn get_normalized_debt(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> BigUint {
        let mapper = self.borrow_positions(asset, user);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        mapper.get().normalized_amount.into_raw_units().clone()
    }
}
