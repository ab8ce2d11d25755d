multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_REWARD_RESERVE,
    ERROR_INVALID_REWARD_TOKEN, ERROR_NOTHING_TO_CLAIM,
};
use common_structs::{RewardPoolInfo, UserRewardInfo};

use crate::{accrual, cache::PoolCache, rate_library, storage, utils, validation};

/// The RewardsModule streams the reward token to suppliers and borrowers by block.
///
/// **Scope**: Each pool keeps one cumulative sum per side. A sum grows by the side's
/// reward per block divided by the side's total balance; a user earns their balance
/// times the growth since they were last settled.
///
/// **Goal**: Constant cost per operation regardless of the number of users.
///
/// **Balances**:
/// - Supply side: pool shares (raw WAD).
/// - Borrow side: normalized debt (raw RAY).
#[multiversx_sc::module]
pub trait RewardsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + rate_library::RateLibraryModule
    + accrual::AccrualModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Changes the reward per block of a pool.
    ///
    /// The sums are advanced at the old rate first, so blocks already elapsed are paid
    /// at the rate that was in force.
    ///
    /// # Arguments
    /// - `asset`: Pool to configure.
    /// - `reward_per_block`: Reward token units distributed per block, both sides together.
    #[only_owner]
    #[endpoint(setRewardPerBlock)]
    fn set_reward_per_block(&self, asset: EgldOrEsdtTokenIdentifier, reward_per_block: BigUint) {
        self.require_pool_exists(&asset);

        let mut cache = PoolCache::new(self, &asset);
        self.accrue_interest(&mut cache);

        let mut pool_info = self.update_reward_sums(&cache);
        let old_reward_per_block = pool_info.reward_per_block.clone();
        pool_info.reward_per_block = reward_per_block;
        self.reward_pool_info(&asset).set(&pool_info);

        self.reward_per_block_updated_event(
            &asset,
            &old_reward_per_block,
            &pool_info.reward_per_block,
        );
    }

    /// Adds the paid reward tokens to the reward reserve.
    #[payable]
    #[endpoint(fundRewards)]
    fn fund_rewards(&self) {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            token == self.reward_token().get(),
            ERROR_INVALID_REWARD_TOKEN
        );
        require!(
            amount > BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        self.reward_reserve().update(|reserve| *reserve += amount);
    }

    /// Settles the caller in every pool they earned in and pays out the total.
    ///
    /// # Errors
    /// - `ERROR_NOTHING_TO_CLAIM`: No reward accrued.
    /// - `ERROR_INSUFFICIENT_REWARD_RESERVE`: The reserve cannot cover the claim.
    #[endpoint(claimRewards)]
    fn claim_rewards(&self) -> BigUint {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();

        let mut total_reward = BigUint::zero();
        for asset in self.pools().iter() {
            if self.user_reward_info(&asset, &caller).is_empty() {
                continue;
            }

            let mut cache = PoolCache::new(self, &asset);
            self.accrue_interest(&mut cache);
            let pool_info = self.update_reward_sums(&cache);

            let mut user_info = self.settle_user_rewards(&asset, &caller, &pool_info);
            total_reward += &user_info.aggregated_reward;
            user_info.aggregated_reward = BigUint::zero();
            self.user_reward_info(&asset, &caller).set(&user_info);
        }

        require!(total_reward > BigUint::zero(), ERROR_NOTHING_TO_CLAIM);

        let reserve = self.reward_reserve().get();
        require!(reserve >= total_reward, ERROR_INSUFFICIENT_REWARD_RESERVE);
        self.reward_reserve().set(reserve - &total_reward);

        let reward_token = self.reward_token().get();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&reward_token, 0, &total_reward)
            .transfer_if_not_empty();

        self.reward_claimed_event(&reward_token, &caller, &total_reward);

        total_reward
    }

    /// Unclaimed reward of `user` in one pool, including blocks not yet settled.
    #[view(getUserReward)]
    fn get_user_reward(&self, user: ManagedAddress, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.require_pool_exists(&asset);
        self.project_user_reward(&asset, &user)
    }

    /// Unclaimed reward of `user` over every pool.
    #[view(getTotalUserReward)]
    fn get_total_user_reward(&self, user: ManagedAddress) -> BigUint {
        let mut total = BigUint::zero();
        for asset in self.pools().iter() {
            total += self.project_user_reward(&asset, &user);
        }

        total
    }

    /// Advances the reward sums of the cached pool to its block; persistent caches store them.
    ///
    /// Must run after interest accrual and before any balance of the pool changes.
    fn update_reward_sums(&self, cache: &PoolCache<Self>) -> RewardPoolInfo<Self::Api> {
        let mut pool_info = self.reward_pool_info(&cache.asset).get();
        self.advance_cumulative_sums(&mut pool_info, cache);

        if !cache.is_readonly() {
            self.reward_pool_info(&cache.asset).set(&pool_info);
        }

        pool_info
    }

    /// **Formula**: for each side with a non zero size,
    /// `cs += side_reward * RAY / total_size * (block_nonce - last_update_block)`.
    fn advance_cumulative_sums(
        &self,
        pool_info: &mut RewardPoolInfo<Self::Api>,
        cache: &PoolCache<Self>,
    ) {
        let blocks = cache.block_nonce.saturating_sub(pool_info.last_update_block);
        if blocks == 0 {
            return;
        }

        if pool_info.reward_per_block > BigUint::zero() {
            let (supply_reward, borrow_reward) = self.calc_reward_split(
                &pool_info.reward_per_block,
                &cache.utilization(),
                &cache.params.min_supply_distribution_part,
                &cache.params.min_borrow_distribution_part,
            );

            let supply_increase = self.calc_cumulative_sum_increase(
                &supply_reward,
                cache.ledger.total_share_supply.into_raw_units(),
                blocks,
            );
            let borrow_increase = self.calc_cumulative_sum_increase(
                &borrow_reward,
                cache
                    .ledger
                    .aggregated_normalized_borrowed_amount
                    .into_raw_units(),
                blocks,
            );

            pool_info.supply_cumulative_sum += &supply_increase;
            pool_info.borrow_cumulative_sum += &borrow_increase;
        }

        pool_info.last_update_block = cache.block_nonce;
    }

    /// Books the reward `user` earned since their last settlement, on both sides, and
    /// moves their checkpoints to the pool's current sums.
    ///
    /// Balances are read from storage, so this must run before the user's balance changes.
    fn settle_user_rewards(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        pool_info: &RewardPoolInfo<Self::Api>,
    ) -> UserRewardInfo<Self::Api> {
        let mapper = self.user_reward_info(asset, user);
        let mut user_info = if mapper.is_empty() {
            UserRewardInfo::starting_at(pool_info)
        } else {
            mapper.get()
        };

        self.accrue_user_reward(&mut user_info, asset, user, pool_info);
        mapper.set(&user_info);

        user_info
    }

    fn accrue_user_reward(
        &self,
        user_info: &mut UserRewardInfo<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        pool_info: &RewardPoolInfo<Self::Api>,
    ) {
        let shares = self.user_shares(asset, user).get();
        let normalized_debt = self.get_normalized_debt(asset, user);

        let supply_reward = self.calc_accrued_reward(
            &shares,
            &pool_info.supply_cumulative_sum,
            &user_info.last_supply_cumulative_sum,
        );
        let borrow_reward = self.calc_accrued_reward(
            &normalized_debt,
            &pool_info.borrow_cumulative_sum,
            &user_info.last_borrow_cumulative_sum,
        );

        user_info.aggregated_reward += supply_reward + borrow_reward;
        user_info.last_supply_cumulative_sum = pool_info.supply_cumulative_sum.clone();
        user_info.last_borrow_cumulative_sum = pool_info.borrow_cumulative_sum.clone();
    }

    /// Read only counterpart of settlement, against projected sums.
    fn project_user_reward(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> BigUint {
        let mapper = self.user_reward_info(asset, user);
        if mapper.is_empty() {
            return BigUint::zero();
        }

        let mut cache = PoolCache::new_readonly(self, asset);
        self.accrue_interest(&mut cache);
        let pool_info = self.update_reward_sums(&cache);

        let mut user_info = mapper.get();
        self.accrue_user_reward(&mut user_info, asset, user, &pool_info);

        user_info.aggregated_reward
    }
}
