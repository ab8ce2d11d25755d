multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{
    BorrowPosition, CompoundRate, PoolLedger, PoolParams, PriceFeed, RewardPoolInfo,
    UserRewardInfo,
};

/// The Storage trait holds every mapper of the lending core, one section per concern.
#[multiversx_sc::module]
pub trait Storage {
    /// Assets that have a pool.
    #[view(getPools)]
    #[storage_mapper("pools")]
    fn pools(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Asset Parameter Store entry of a pool.
    ///
    /// # Returns
    /// - `PoolParams<Self::Api>`: Curve, caps and distribution parts of the pool.
    #[view(getPoolParams)]
    #[storage_mapper("pool_params")]
    fn pool_params(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PoolParams<Self::Api>>;

    /// Aggregated accounting of a pool as of its last accrual.
    #[view(getPoolLedger)]
    #[storage_mapper("pool_ledger")]
    fn pool_ledger(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PoolLedger<Self::Api>>;

    /// Stored compound rate of a pool. Use `getCurrentCompoundRate` for the projected value.
    #[view(getStoredCompoundRate)]
    #[storage_mapper("compound_rate")]
    fn compound_rate(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<CompoundRate<Self::Api>>;

    /// Reward accumulators of a pool as of `last_update_block`.
    #[view(getRewardPoolInfo)]
    #[storage_mapper("reward_pool_info")]
    fn reward_pool_info(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<RewardPoolInfo<Self::Api>>;

    /// Pool shares of a user, raw WAD units. An empty mapper reads as zero.
    #[view(getUserShares)]
    #[storage_mapper("user_shares")]
    fn user_shares(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[view(getBorrowPosition)]
    #[storage_mapper("borrow_positions")]
    fn borrow_positions(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BorrowPosition<Self::Api>>;

    #[storage_mapper("user_reward_info")]
    fn user_reward_info(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
    ) -> SingleValueMapper<UserRewardInfo<Self::Api>>;

    /// Pools a user holds shares in.
    #[view(getUserSuppliedAssets)]
    #[storage_mapper("user_supplied_assets")]
    fn user_supplied_assets(
        &self,
        user: &ManagedAddress,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Pools a user owes debt to.
    #[view(getUserBorrowedAssets)]
    #[storage_mapper("user_borrowed_assets")]
    fn user_borrowed_assets(
        &self,
        user: &ManagedAddress,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Per-second rate factors (RAY), one entry per library step starting at 0%.
    #[storage_mapper("rates_library")]
    fn rates_library(&self) -> VecMapper<BigUint>;

    #[view(getOracleAddress)]
    #[storage_mapper("oracle_address")]
    fn oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Owner configured price used when the oracle has no valid quote.
    #[view(getFallbackPrice)]
    #[storage_mapper("fallback_price")]
    fn fallback_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>>;

    #[view(getRewardToken)]
    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Reward tokens funded and not yet claimed.
    #[view(getRewardReserve)]
    #[storage_mapper("reward_reserve")]
    fn reward_reserve(&self) -> SingleValueMapper<BigUint>;

    /// Debt to borrow limit ratio (RAY) above which an account is liquidatable.
    #[view(getLiquidationBoundary)]
    #[storage_mapper("liquidation_boundary")]
    fn liquidation_boundary(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
