multiversx_sc::imports!();

use common_errors::ERROR_ZERO_SHARES;

use crate::{accrual, cache::PoolCache, rate_library, rewards, storage, utils, validation};

#[multiversx_sc::module]
pub trait PositionDepositModule:
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
    /// Mints pool shares for a deposit.
    ///
    /// **Process**:
    /// 1. Accrues interest and advances the reward sums.
    /// 2. Settles the depositor's rewards at their old share balance.
    /// 3. Mints `amount * RAY / exchange_rate` shares, rescaled to WAD.
    /// 4. Adds the amount to the pool's cash.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Minted shares (WAD).
    ///
    /// # Errors
    /// - `ERROR_ZERO_SHARES`: The amount is too small to mint a share unit.
    fn process_deposit(
        &self,
        cache: &mut PoolCache<Self>,
        depositor: &ManagedAddress,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.accrue_interest(cache);
        let pool_info = self.update_reward_sums(cache);
        self.settle_user_rewards(&cache.asset, depositor, &pool_info);

        let shares = cache.amount_to_shares(amount);
        require!(shares > self.wad_zero(), ERROR_ZERO_SHARES);

        let user_shares = self.get_user_shares(&cache.asset, depositor) + shares.clone();
        self.set_user_shares(&cache.asset, depositor, &user_shares);

        cache.ledger.total_share_supply += &shares;
        cache.ledger.aggregated_liquidity += amount;

        self.liquidity_added_event(&cache.asset, depositor, amount, &shares);

        shares
    }
}
