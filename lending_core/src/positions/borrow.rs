multiversx_sc::imports!();

use common_errors::{
    ERROR_BORROWING_FROZEN, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_UTILIZATION_RATIO_EXCEEDED,
};

use crate::{accrual, cache::PoolCache, rate_library, rewards, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionBorrowModule:
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
    /// Opens or increases a debt position.
    ///
    /// **Process**:
    /// 1. Accrues interest at the utilization before the borrow.
    /// 2. Checks free cash and `(borrowed + amount) / (available + borrowed) <= max_utilization_ratio`.
    /// 3. Advances the reward sums and settles the borrower at their old debt.
    /// 4. Adds `amount * RAY / rate` to the position and to the pool's normalized total.
    ///
    /// The caller runs the borrow limit check once the cache is committed.
    ///
    /// # Errors
    /// - `ERROR_BORROWING_FROZEN`: Borrowing is disabled for the pool.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: The pool lacks free cash.
    /// - `ERROR_UTILIZATION_RATIO_EXCEEDED`: The pool would exceed its maximum utilization.
    fn process_borrow(
        &self,
        cache: &mut PoolCache<Self>,
        borrower: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(cache.params.can_borrow(), ERROR_BORROWING_FROZEN);

        self.accrue_interest(cache);

        require!(cache.has_liquidity(amount), ERROR_INSUFFICIENT_LIQUIDITY);
        let borrowed_after = cache.ledger.aggregated_borrowed_amount.clone() + amount.clone();
        let available_after = cache.available_liquidity() - amount.clone();
        let utilization_after = self.get_utilization(&borrowed_after, &available_after);
        require!(
            utilization_after <= cache.params.max_utilization_ratio,
            ERROR_UTILIZATION_RATIO_EXCEEDED
        );

        let pool_info = self.update_reward_sums(cache);
        self.settle_user_rewards(&cache.asset, borrower, &pool_info);

        let mut position =
            self.get_borrow_position(&cache.asset, borrower, cache.params.asset_decimals);
        let principal_after = position.borrow_amount.clone() + amount.clone();
        let normalized_after = self.get_normalized_amount(
            &position.normalized_amount,
            &principal_after,
            amount,
            &cache.compound_rate.rate,
            true,
        );
        let normalized_delta = self.saturating_sub(&normalized_after, &position.normalized_amount);

        position.normalized_amount = normalized_after;
        position.borrow_amount = principal_after;
        self.store_borrow_position(&cache.asset, borrower, &position);

        cache.ledger.aggregated_normalized_borrowed_amount += &normalized_delta;
        cache.ledger.aggregated_liquidity -= amount;
        cache.refresh_borrowed();

        self.borrowed_event(&cache.asset, borrower, amount);
    }
}
