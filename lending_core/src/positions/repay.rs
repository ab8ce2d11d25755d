multiversx_sc::imports!();

use common_errors::{ERROR_NO_DEBT_TO_REPAY, ERROR_REPAY_AMOUNT_EXCEEDS_DEBT};

use crate::{accrual, cache::PoolCache, rate_library, rewards, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionRepayModule:
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
    /// Applies a repayment to the debt of `borrower`.
    ///
    /// The cache must be accrued and the borrower settled. Interest is paid off first,
    /// the remainder reduces the principal; once the debt is covered the position is removed.
    ///
    /// # Arguments
    /// - `borrower`: Owner of the debt.
    /// - `payer`: Account the funds come from, the liquidator during a liquidation.
    /// - `payment`: Amount received, asset units.
    /// - `repay_all`: Repay exactly the current debt and refund the rest.
    ///
    /// # Returns
    /// - `(repaid, refund)`: Amount applied to the debt and amount owed back to the payer.
    ///
    /// # Errors
    /// - `ERROR_NO_DEBT_TO_REPAY`: The borrower has no position in the pool.
    /// - `ERROR_REPAY_AMOUNT_EXCEEDS_DEBT`: Without `repay_all`, the payment is above the debt.
    fn apply_repayment(
        &self,
        cache: &mut PoolCache<Self>,
        borrower: &ManagedAddress,
        payer: &ManagedAddress,
        payment: &ManagedDecimal<Self::Api, NumDecimals>,
        repay_all: bool,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let mut position =
            self.get_borrow_position(&cache.asset, borrower, cache.params.asset_decimals);
        require!(!position.is_empty(), ERROR_NO_DEBT_TO_REPAY);

        let debt = cache.current_debt(&position);
        let repaid = if repay_all {
            self.get_min(payment.clone(), debt.clone())
        } else {
            require!(payment <= &debt, ERROR_REPAY_AMOUNT_EXCEEDS_DEBT);
            payment.clone()
        };
        let refund = payment.clone() - repaid.clone();

        let principal_after = if repaid == debt {
            cache.zero.clone()
        } else {
            let interest = self.saturating_sub(&debt, &position.borrow_amount);
            let principal_paid = self.saturating_sub(&repaid, &interest);
            self.saturating_sub(&position.borrow_amount, &principal_paid)
        };

        let normalized_after = self.get_normalized_amount(
            &position.normalized_amount,
            &principal_after,
            &repaid,
            &cache.compound_rate.rate,
            false,
        );
        let normalized_delta = self.saturating_sub(&position.normalized_amount, &normalized_after);

        position.normalized_amount = normalized_after;
        position.borrow_amount = principal_after;
        self.store_borrow_position(&cache.asset, borrower, &position);

        cache.ledger.aggregated_normalized_borrowed_amount = self.saturating_sub(
            &cache.ledger.aggregated_normalized_borrowed_amount,
            &normalized_delta,
        );
        cache.ledger.aggregated_liquidity += &repaid;
        cache.refresh_borrowed();

        self.borrow_repaid_event(&cache.asset, borrower, payer, &repaid);

        (repaid, refund)
    }

    /// Repayment by the borrower: accrues, settles rewards and applies the payment.
    fn process_repay(
        &self,
        cache: &mut PoolCache<Self>,
        borrower: &ManagedAddress,
        payment: &ManagedDecimal<Self::Api, NumDecimals>,
        repay_all: bool,
    ) -> (
        ManagedDecimal<Self::Api, NumDecimals>,
        ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.accrue_interest(cache);
        let pool_info = self.update_reward_sums(cache);
        self.settle_user_rewards(&cache.asset, borrower, &pool_info);

        self.apply_repayment(cache, borrower, borrower, payment, repay_all)
    }
}
