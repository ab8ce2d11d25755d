#![no_std]

use common_constants::{RAY, RAY_PRECISION, WAD_PRECISION};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Growth factor of a pool since its creation, in RAY.
///
/// `rate` starts at one and never decreases. `last_update` is the block timestamp
/// (seconds) the rate was last advanced to.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CompoundRate<M: ManagedTypeApi> {
    pub rate: ManagedDecimal<M, NumDecimals>,
    pub last_update: u64,
}

impl<M: ManagedTypeApi> CompoundRate<M> {
    /// A fresh pool starts compounding from one at `now`.
    pub fn starting_at(now: u64) -> Self {
        CompoundRate {
            rate: ManagedDecimal::from_raw_units(BigUint::from(RAY), RAY_PRECISION),
            last_update: now,
        }
    }

    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_update)
    }
}

/// Two segment (kinked) borrow curve, every value a RAY percentage.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct InterestRateParams<M: ManagedTypeApi> {
    pub base_percentage: ManagedDecimal<M, NumDecimals>,
    pub first_slope: ManagedDecimal<M, NumDecimals>,
    pub second_slope: ManagedDecimal<M, NumDecimals>,
    pub utilization_breaking_point: ManagedDecimal<M, NumDecimals>,
}

/// Per pool configuration. Only the owner writes it; the accrual engine reads it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolParams<M: ManagedTypeApi> {
    pub asset_decimals: usize,
    pub interest_rate_params: InterestRateParams<M>,
    pub max_utilization_ratio: ManagedDecimal<M, NumDecimals>,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
    pub liquidation_discount: ManagedDecimal<M, NumDecimals>,
    pub loan_to_value: ManagedDecimal<M, NumDecimals>,
    pub min_supply_distribution_part: ManagedDecimal<M, NumDecimals>,
    pub min_borrow_distribution_part: ManagedDecimal<M, NumDecimals>,
    pub is_collateral: bool,
    pub is_borrowing_frozen: bool,
}

impl<M: ManagedTypeApi> PoolParams<M> {
    #[inline]
    pub fn can_borrow(&self) -> bool {
        !self.is_borrowing_frozen
    }

    #[inline]
    pub fn can_be_collateral(&self) -> bool {
        self.is_collateral
    }
}

/// Debt of one user in one pool.
///
/// `normalized_amount` is RAY scaled and interest independent. `borrow_amount` is the
/// principal still owed, in asset decimals, without interest.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct BorrowPosition<M: ManagedTypeApi> {
    pub normalized_amount: ManagedDecimal<M, NumDecimals>,
    pub borrow_amount: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> BorrowPosition<M> {
    pub fn new(
        normalized_amount: ManagedDecimal<M, NumDecimals>,
        borrow_amount: ManagedDecimal<M, NumDecimals>,
    ) -> Self {
        BorrowPosition {
            normalized_amount,
            borrow_amount,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_amount.into_raw_units() == &BigUint::zero()
    }
}

/// Aggregated accounting of a pool.
///
/// - `aggregated_liquidity`: cash held for the pool, reserves included (asset decimals).
/// - `aggregated_borrowed_amount`: absolute debt at the last accrual (asset decimals).
/// - `aggregated_normalized_borrowed_amount`: sum of the users' normalized debt (RAY).
/// - `total_reserves`: protocol spread accumulated from interest (asset decimals).
/// - `total_share_supply`: outstanding pool shares (WAD).
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolLedger<M: ManagedTypeApi> {
    pub aggregated_liquidity: ManagedDecimal<M, NumDecimals>,
    pub aggregated_borrowed_amount: ManagedDecimal<M, NumDecimals>,
    pub aggregated_normalized_borrowed_amount: ManagedDecimal<M, NumDecimals>,
    pub total_reserves: ManagedDecimal<M, NumDecimals>,
    pub total_share_supply: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> PoolLedger<M> {
    pub fn new(asset_decimals: usize) -> Self {
        let zero_asset = ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals);
        PoolLedger {
            aggregated_liquidity: zero_asset.clone(),
            aggregated_borrowed_amount: zero_asset.clone(),
            aggregated_normalized_borrowed_amount: ManagedDecimal::from_raw_units(
                BigUint::zero(),
                RAY_PRECISION,
            ),
            total_reserves: zero_asset,
            total_share_supply: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
        }
    }
}

/// Reward accumulators of a pool. Both sums are RAY and never decrease.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RewardPoolInfo<M: ManagedTypeApi> {
    pub supply_cumulative_sum: ManagedDecimal<M, NumDecimals>,
    pub borrow_cumulative_sum: ManagedDecimal<M, NumDecimals>,
    pub reward_per_block: BigUint<M>,
    pub last_update_block: u64,
}

impl<M: ManagedTypeApi> RewardPoolInfo<M> {
    pub fn new(last_update_block: u64) -> Self {
        RewardPoolInfo {
            supply_cumulative_sum: ManagedDecimal::from_raw_units(BigUint::zero(), RAY_PRECISION),
            borrow_cumulative_sum: ManagedDecimal::from_raw_units(BigUint::zero(), RAY_PRECISION),
            reward_per_block: BigUint::zero(),
            last_update_block,
        }
    }
}

/// Lazily settled reward ledger of a user in a pool.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct UserRewardInfo<M: ManagedTypeApi> {
    pub last_supply_cumulative_sum: ManagedDecimal<M, NumDecimals>,
    pub last_borrow_cumulative_sum: ManagedDecimal<M, NumDecimals>,
    pub aggregated_reward: BigUint<M>,
}

impl<M: ManagedTypeApi> UserRewardInfo<M> {
    /// A user first seen at the pool's current sums owes nothing for the past.
    pub fn starting_at(pool: &RewardPoolInfo<M>) -> Self {
        UserRewardInfo {
            last_supply_cumulative_sum: pool.supply_cumulative_sum.clone(),
            last_borrow_cumulative_sum: pool.borrow_cumulative_sum.clone(),
            aggregated_reward: BigUint::zero(),
        }
    }
}

/// Price quote returned by the oracle, `value / 10^decimals` units of the quote currency.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub value: BigUint<M>,
    pub decimals: u8,
}

impl<M: ManagedTypeApi> PriceFeed<M> {
    pub fn is_valid(&self) -> bool {
        self.value > BigUint::zero()
    }

    pub fn to_decimal(&self) -> ManagedDecimal<M, NumDecimals> {
        ManagedDecimal::from_raw_units(self.value.clone(), self.decimals as usize)
    }
}
