use common_constants::{RAY_PRECISION, WAD_PRECISION};
use common_structs::{BorrowPosition, CompoundRate, PoolLedger, PoolParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// A snapshot of one pool, cached from on-chain storage for the duration of a call.
///
/// **Scope**: Params, ledger and compound rate of a single pool plus the block time
/// the call runs at.
///
/// **Goal**: Let accrual and position changes work on an in-memory copy that is written
/// back once, when the cache is dropped.
///
/// **Fields**:
/// - Ledger amounts are in asset decimals, shares in WAD, the normalized total and the rate in RAY.
/// - `timestamp` (seconds) drives interest, `block_nonce` drives rewards.
///
/// A cache built with `new_readonly` projects the same state but never persists, which is
/// what views use.
pub struct PoolCache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    persist: bool,
    pub asset: EgldOrEsdtTokenIdentifier<C::Api>,
    pub params: PoolParams<C::Api>,
    pub ledger: PoolLedger<C::Api>,
    pub compound_rate: CompoundRate<C::Api>,
    /// Zero in asset decimals, for comparisons.
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
    pub timestamp: u64,
    pub block_nonce: u64,
}

impl<'a, C> PoolCache<'a, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule + common_rates::InterestRates,
{
    /// Loads the pool behind `asset`; changes are committed on drop.
    ///
    /// The caller is responsible for checking that the pool exists.
    pub fn new(sc_ref: &'a C, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> Self {
        Self::load(sc_ref, asset, true)
    }

    /// Loads the pool behind `asset` for a read-only projection.
    pub fn new_readonly(sc_ref: &'a C, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> Self {
        Self::load(sc_ref, asset, false)
    }

    fn load(sc_ref: &'a C, asset: &EgldOrEsdtTokenIdentifier<C::Api>, persist: bool) -> Self {
        let params = sc_ref.pool_params(asset).get();
        PoolCache {
            zero: sc_ref.to_decimal(BigUint::zero(), params.asset_decimals),
            ledger: sc_ref.pool_ledger(asset).get(),
            compound_rate: sc_ref.compound_rate(asset).get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            block_nonce: sc_ref.blockchain().get_block_nonce(),
            asset: asset.clone(),
            params,
            persist,
            sc_ref,
        }
    }
}

impl<C> Drop for PoolCache<'_, C>
where
    C: crate::storage::Storage,
{
    /// Commits the ledger and the compound rate back to storage for persistent caches.
    fn drop(&mut self) {
        if !self.persist {
            return;
        }

        self.sc_ref.pool_ledger(&self.asset).set(&self.ledger);
        self.sc_ref
            .compound_rate(&self.asset)
            .set(&self.compound_rate);
    }
}

impl<C> PoolCache<'_, C>
where
    C: crate::storage::Storage + common_math::SharedMathModule + common_rates::InterestRates,
{
    #[inline]
    pub fn is_readonly(&self) -> bool {
        !self.persist
    }

    /// Converts a raw token amount into the pool's asset decimals.
    pub fn get_decimal_value(&self, value: &BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(value.clone(), self.params.asset_decimals)
    }

    #[inline]
    pub fn is_same_asset(&self, asset: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        &self.asset == asset
    }

    /// Cash the pool holds, reserves included.
    ///
    /// Reserves are booked out of accrued interest, which arrives as debt rather than
    /// cash, so they are a claim on the pool value and not a slice of the cash.
    pub fn available_liquidity(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.ledger.aggregated_liquidity.clone()
    }

    pub fn has_liquidity(&self, amount: &ManagedDecimal<C::Api, NumDecimals>) -> bool {
        &self.available_liquidity() >= amount
    }

    /// Utilization ratio (RAY) of the cached ledger.
    pub fn utilization(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.get_utilization(
            &self.ledger.aggregated_borrowed_amount,
            &self.available_liquidity(),
        )
    }

    /// Value owned by the share holders: `cash + borrowed - reserves`.
    pub fn total_pool_value(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        let gross = self.ledger.aggregated_liquidity.clone()
            + self.ledger.aggregated_borrowed_amount.clone();
        self.sc_ref
            .saturating_sub(&gross, &self.ledger.total_reserves)
    }

    /// Asset units one share is worth, in RAY.
    ///
    /// **Formula**: `total_pool_value * RAY / total_share_supply`, one when the pool holds
    /// no shares or no value.
    pub fn exchange_rate(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        let total_value = self.total_pool_value();
        if self.ledger.total_share_supply.into_raw_units() == &BigUint::zero()
            || total_value == self.zero
        {
            return self.sc_ref.ray();
        }

        self.sc_ref.div_floor(
            &total_value,
            &self.ledger.total_share_supply,
            RAY_PRECISION,
        )
    }

    /// Shares (WAD) minted for, or burned by, `amount` asset units at the current exchange rate.
    pub fn amount_to_shares(
        &self,
        amount: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .div_floor(amount, &self.exchange_rate(), RAY_PRECISION)
            .rescale(WAD_PRECISION)
    }

    /// Asset units `shares` are worth at the current exchange rate.
    pub fn shares_to_amount(
        &self,
        shares: &ManagedDecimal<C::Api, NumDecimals>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .mul_floor(shares, &self.exchange_rate(), RAY_PRECISION)
            .rescale(self.params.asset_decimals)
    }

    /// Absolute debt of a position at the cached compound rate.
    pub fn current_debt(
        &self,
        position: &BorrowPosition<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.to_absolute(
            &position.normalized_amount,
            &self.compound_rate.rate,
            self.params.asset_decimals,
        )
    }

    /// Recomputes `aggregated_borrowed_amount` from the normalized total.
    pub fn refresh_borrowed(&mut self) {
        self.ledger.aggregated_borrowed_amount = self.sc_ref.to_absolute(
            &self.ledger.aggregated_normalized_borrowed_amount,
            &self.compound_rate.rate,
            self.params.asset_decimals,
        );
    }
}
