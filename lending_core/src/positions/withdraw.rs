multiversx_sc::imports!();

use common_errors::{
    ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INSUFFICIENT_SHARES, ERROR_UTILIZATION_RATIO_EXCEEDED,
    ERROR_ZERO_ASSETS, ERROR_ZERO_SHARES,
};

use crate::{accrual, cache::PoolCache, rate_library, rewards, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
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
    /// Burns shares and releases the matching cash from the pool.
    ///
    /// **Process**:
    /// 1. Accrues interest, advances the reward sums and settles the user.
    /// 2. Resolves the shares to burn: all of them for `withdraw_all`, otherwise
    ///    `amount * RAY / exchange_rate`. The payout is what those shares are worth,
    ///    never more than the requested amount.
    /// 3. Checks shares, liquidity and the post withdrawal utilization.
    /// 4. Burns the shares and removes the payout from the pool's cash.
    ///
    /// The caller transfers the payout and runs the borrow limit check.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Payout in asset units.
    ///
    /// # Errors
    /// - `ERROR_ZERO_SHARES` / `ERROR_ZERO_ASSETS`: Nothing left after scaling.
    /// - `ERROR_INSUFFICIENT_SHARES`: The user holds fewer shares.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: The pool lacks free cash.
    /// - `ERROR_UTILIZATION_RATIO_EXCEEDED`: The pool would exceed its maximum utilization.
    fn process_withdraw(
        &self,
        cache: &mut PoolCache<Self>,
        user: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        withdraw_all: bool,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.accrue_interest(cache);
        let pool_info = self.update_reward_sums(cache);
        self.settle_user_rewards(&cache.asset, user, &pool_info);

        let user_shares = self.get_user_shares(&cache.asset, user);
        let shares = if withdraw_all {
            user_shares.clone()
        } else {
            cache.amount_to_shares(amount)
        };
        require!(shares > self.wad_zero(), ERROR_ZERO_SHARES);

        let payout = cache.shares_to_amount(&shares);
        require!(payout > cache.zero, ERROR_ZERO_ASSETS);
        require!(shares <= user_shares, ERROR_INSUFFICIENT_SHARES);
        require!(cache.has_liquidity(&payout), ERROR_INSUFFICIENT_LIQUIDITY);

        let available_after = cache.available_liquidity() - payout.clone();
        let utilization_after =
            self.get_utilization(&cache.ledger.aggregated_borrowed_amount, &available_after);
        require!(
            utilization_after <= cache.params.max_utilization_ratio,
            ERROR_UTILIZATION_RATIO_EXCEEDED
        );

        let remaining_shares = user_shares - shares.clone();
        self.set_user_shares(&cache.asset, user, &remaining_shares);

        cache.ledger.total_share_supply -= &shares;
        cache.ledger.aggregated_liquidity -= &payout;

        self.liquidity_withdrawn_event(&cache.asset, user, &payout, &shares);

        payout
    }
}
