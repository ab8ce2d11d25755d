multiversx_sc::imports!();

use common_errors::{ERROR_INSUFFICIENT_SHARES, ERROR_SAME_ACCOUNT};

use crate::{accrual, cache::PoolCache, rate_library, rewards, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionTransferModule:
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
    /// Moves pool shares from `from` to `to`.
    ///
    /// The cache must be accrued. The pool's share supply does not change; both parties are
    /// settled on the supply side before their balances move.
    ///
    /// # Errors
    /// - `ERROR_SAME_ACCOUNT`: Sender and receiver are the same account.
    /// - `ERROR_INSUFFICIENT_SHARES`: The sender holds fewer shares.
    fn move_shares(
        &self,
        cache: &PoolCache<Self>,
        from: &ManagedAddress,
        to: &ManagedAddress,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        require!(from != to, ERROR_SAME_ACCOUNT);

        let pool_info = self.update_reward_sums(cache);
        self.settle_user_rewards(&cache.asset, from, &pool_info);
        self.settle_user_rewards(&cache.asset, to, &pool_info);

        let from_shares = self.get_user_shares(&cache.asset, from);
        require!(shares <= &from_shares, ERROR_INSUFFICIENT_SHARES);

        let to_shares = self.get_user_shares(&cache.asset, to) + shares.clone();
        self.set_user_shares(&cache.asset, from, &(from_shares - shares.clone()));
        self.set_user_shares(&cache.asset, to, &to_shares);

        self.shares_transferred_event(&cache.asset, from, to, shares);
    }

    /// Share transfer between users: accrues the pool and moves the shares.
    fn process_transfer_shares(
        &self,
        cache: &mut PoolCache<Self>,
        from: &ManagedAddress,
        to: &ManagedAddress,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        self.accrue_interest(cache);
        self.move_shares(cache, from, to, shares);
    }
}
