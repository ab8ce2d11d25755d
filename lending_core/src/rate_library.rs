multiversx_sc::imports!();

use common_constants::{BUILTIN_RATES_PER_SECOND, LIBRARY_PRECISION, RAY_PRECISION};
use common_errors::{
    ERROR_EMPTY_RATES_RANGE, ERROR_INTEREST_RATE_NOT_SUPPORTED, ERROR_INVALID_RATES_START,
    ERROR_RATES_NOT_MONOTONIC, ERROR_UNSUPPORTED_PERCENTAGE,
};

use crate::storage;

/// Interest rate lookup table: annual percentages in steps of `LIBRARY_PRECISION`
/// mapped to per-second rate factors.
///
/// **Scope**: Entry `i` (0 based) holds the RAY per-second factor of the annual
/// percentage `i * LIBRARY_PRECISION`. The table only ever grows at its upper end.
///
/// **Goal**: Replace `ln(1 + p) / SECONDS_PER_YEAR` with a storage read plus one linear
/// interpolation.
#[multiversx_sc::module]
pub trait RateLibraryModule:
    storage::Storage + common_events::EventsModule + common_math::SharedMathModule
{
    /// Appends a contiguous range of per-second rates to the table.
    ///
    /// # Arguments
    /// - `start_percentage`: Annual percentage (RAY) of the first new entry. Must be the
    ///   current maximum plus one step, or zero for an empty table.
    /// - `rates`: Per-second factors (RAY), one per step, non-decreasing.
    ///
    /// # Errors
    /// - `ERROR_INVALID_RATES_START`: The range does not extend the table contiguously.
    /// - `ERROR_EMPTY_RATES_RANGE`: No rate was provided.
    /// - `ERROR_RATES_NOT_MONOTONIC`: A rate is lower than its predecessor.
    #[only_owner]
    #[endpoint(addNewRates)]
    fn add_new_rates(&self, start_percentage: BigUint, rates: MultiValueEncoded<BigUint>) {
        let mut library = self.rates_library();
        let step = BigUint::from(LIBRARY_PRECISION);
        let expected_start = BigUint::from(library.len() as u64) * &step;

        require!(start_percentage == expected_start, ERROR_INVALID_RATES_START);
        require!(!rates.is_empty(), ERROR_EMPTY_RATES_RANGE);

        let mut previous = if library.is_empty() {
            None
        } else {
            Some(library.get(library.len()))
        };

        for rate in rates.into_iter() {
            if let Some(previous_rate) = &previous {
                require!(&rate >= previous_rate, ERROR_RATES_NOT_MONOTONIC);
            }
            library.push(&rate);
            previous = Some(rate);
        }

        self.rate_library_extended_event(
            &start_percentage,
            self.max_supported_percentage().into_raw_units(),
        );
    }

    /// Stored per-second rate of the largest step not above `percentage`.
    ///
    /// # Arguments
    /// - `percentage`: Annual percentage, raw RAY units (100% = 10^27).
    ///
    /// # Errors
    /// - `ERROR_UNSUPPORTED_PERCENTAGE`: `percentage` is above the table maximum.
    #[view(getRateForPercentage)]
    fn get_rate_for_percentage_view(&self, percentage: BigUint) -> BigUint {
        self.get_rate_for_percentage(&self.to_decimal_ray(percentage))
            .into_raw_units()
            .clone()
    }

    /// Highest annual percentage (raw RAY) the table can price.
    #[view(getMaxSupportedPercentage)]
    fn get_max_supported_percentage(&self) -> BigUint {
        self.max_supported_percentage().into_raw_units().clone()
    }

    /// Seeds the builtin 0%..=100% range into an empty table.
    fn seed_builtin_rates(&self) {
        let mut library = self.rates_library();
        if !library.is_empty() {
            return;
        }

        for rate in BUILTIN_RATES_PER_SECOND.iter() {
            library.push(&BigUint::from(*rate));
        }
    }

    fn max_supported_percentage(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let len = self.rates_library().len();
        if len == 0 {
            return self.ray_zero();
        }

        self.to_decimal_ray(BigUint::from((len - 1) as u64) * BigUint::from(LIBRARY_PRECISION))
    }

    /// Splits a percentage into its 0 based table index and the remainder below that step.
    ///
    /// The index stays a `u64` so it is compared against the table length before it is
    /// narrowed to the 32 bit `usize` of the contract target.
    fn library_position(
        &self,
        percentage: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (u64, BigUint) {
        let raw = percentage.rescale(RAY_PRECISION).into_raw_units().clone();
        let step = BigUint::from(LIBRARY_PRECISION);

        let index = (&raw / &step).to_u64().unwrap_or(u64::MAX);
        let remainder = raw % step;

        (index, remainder)
    }

    /// Floor lookup: non multiples of the step resolve to the nearest lower step.
    fn get_rate_for_percentage(
        &self,
        percentage: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let library = self.rates_library();
        let (index, _) = self.library_position(percentage);
        require!(index < library.len() as u64, ERROR_UNSUPPORTED_PERCENTAGE);

        self.to_decimal_ray(library.get(index as usize + 1))
    }

    /// Per-second rate (RAY) for an annual percentage.
    ///
    /// **Formula**: `lower + (upper - lower) * remainder / LIBRARY_PRECISION` between the two
    /// steps bracketing `annual_rate`; an exact step returns its stored value.
    ///
    /// # Errors
    /// - `ERROR_INTEREST_RATE_NOT_SUPPORTED`: `annual_rate` is above the table maximum.
    fn get_rate_per_second(
        &self,
        annual_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let library = self.rates_library();
        let (index, remainder) = self.library_position(annual_rate);
        require!(
            index < library.len() as u64,
            ERROR_INTEREST_RATE_NOT_SUPPORTED
        );

        let index = index as usize;
        let lower = library.get(index + 1);
        if remainder == BigUint::zero() {
            return self.to_decimal_ray(lower);
        }

        require!(index + 1 < library.len(), ERROR_INTEREST_RATE_NOT_SUPPORTED);
        let upper = library.get(index + 2);
        let span = if upper > lower {
            upper - &lower
        } else {
            BigUint::zero()
        };

        let offset = span * remainder / BigUint::from(LIBRARY_PRECISION);
        self.to_decimal_ray(lower + offset)
    }
}
