multiversx_sc::imports!();

use common_constants::RAY_PRECISION;

use crate::{cache::PoolCache, rate_library, storage};

/// The AccrualModule brings a cached pool up to the current block timestamp.
///
/// **Scope**: Advances the compound rate, refreshes the absolute debt of the pool and
/// books the reserve factor share of the new interest.
///
/// **Goal**: Every pool touching operation starts from a ledger that already contains
/// the interest owed up to now.
#[multiversx_sc::module]
pub trait AccrualModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + rate_library::RateLibraryModule
{
    /// Accrues interest on a cached pool.
    ///
    /// **Process**:
    /// 1. Skips when the rate was already advanced in this block.
    /// 2. Derives the per-second rate from the utilization before the operation.
    /// 3. Advances the compound rate and recomputes `aggregated_borrowed_amount`.
    /// 4. Adds `interest * reserve_factor` to `total_reserves`.
    /// 5. Emits `update_pool_state` for persistent caches.
    ///
    /// # Arguments
    /// - `cache`: Pool snapshot to update in place.
    fn accrue_interest(&self, cache: &mut PoolCache<Self>) {
        if cache.compound_rate.elapsed(cache.timestamp) == 0 {
            let compound_rate = cache.compound_rate.rate.clone();
            sc_print!("accrual skipped at compound rate {}", compound_rate);
            return;
        }

        let per_second_rate = self.current_rate_per_second(cache);
        self.update_compound_rate(&mut cache.compound_rate, &per_second_rate, cache.timestamp);

        let previous_borrowed = cache.ledger.aggregated_borrowed_amount.clone();
        cache.refresh_borrowed();

        let interest =
            self.saturating_sub(&cache.ledger.aggregated_borrowed_amount, &previous_borrowed);
        let reserve = self
            .mul_floor(&interest, &cache.params.reserve_factor, RAY_PRECISION)
            .rescale(cache.params.asset_decimals);
        cache.ledger.total_reserves += &reserve;

        if !cache.is_readonly() {
            self.emit_pool_state(cache);
        }
    }

    /// Annual borrow rate (RAY) at the cached utilization.
    fn current_annual_rate(&self, cache: &PoolCache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_annual_rate(&cache.utilization(), &cache.params.interest_rate_params)
    }

    /// Per-second rate (RAY) at the cached utilization.
    fn current_rate_per_second(
        &self,
        cache: &PoolCache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_rate_per_second(&self.current_annual_rate(cache))
    }

    #[inline]
    fn emit_pool_state(&self, cache: &PoolCache<Self>) {
        self.update_pool_state_event(
            &cache.asset,
            cache.timestamp,
            &cache.compound_rate.rate,
            &cache.ledger.aggregated_liquidity,
            &cache.ledger.aggregated_borrowed_amount,
            &cache.ledger.total_reserves,
        );
    }
}
