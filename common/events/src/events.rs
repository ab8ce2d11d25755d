#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("pool_created")]
    fn pool_created_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] params: &PoolParams<Self::Api>,
    );

    #[event("pool_params_updated")]
    fn pool_params_updated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] params: &PoolParams<Self::Api>,
    );

    #[event("reward_per_block_updated")]
    fn reward_per_block_updated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] old_reward_per_block: &BigUint,
        #[indexed] new_reward_per_block: &BigUint,
    );

    // Emitted whenever accrual moved the compound rate forward
    #[event("update_pool_state")]
    fn update_pool_state_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] timestamp: u64,
        #[indexed] compound_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] aggregated_liquidity: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] aggregated_borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] total_reserves: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("liquidity_added")]
    fn liquidity_added_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("liquidity_withdrawn")]
    fn liquidity_withdrawn_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("borrowed")]
    fn borrowed_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    // `payer` differs from `user` when the repayment is part of a liquidation
    #[event("borrow_repaid")]
    fn borrow_repaid_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] payer: &ManagedAddress,
        #[indexed] amount: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("shares_transferred")]
    fn shares_transferred_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("reward_claimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] reward_token: &EgldOrEsdtTokenIdentifier,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("liquidation")]
    fn liquidation_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] debt_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] repaid_amount: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] collateral_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] seized_shares: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("rate_library_extended")]
    fn rate_library_extended_event(
        &self,
        #[indexed] start_percentage: &BigUint,
        #[indexed] max_supported_percentage: &BigUint,
    );
}
