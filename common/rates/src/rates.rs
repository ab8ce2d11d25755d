#![no_std]
use common_constants::RAY_PRECISION;
use common_structs::{CompoundRate, InterestRateParams};

multiversx_sc::imports!();

/// The InterestRates module holds the pure pieces of the interest and reward model:
/// the kinked annual rate curve, the compound rate keeper, the normalized-balance
/// conversions and the reward cumulative-sum arithmetic.
///
/// **Scope**: Stateless math over RAY based `ManagedDecimal` values; storage lives in the contract.
///
/// **Goal**: Keep every rounding decision in one place, always truncating.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the annual borrow rate for a utilization ratio.
    ///
    /// **Formula**:
    /// - If `utilization == 0`: `base_percentage`.
    /// - If `utilization <= breaking_point`: `base + utilization * (first_slope - base) / breaking_point`.
    /// - If `utilization > breaking_point`: `first_slope + (utilization - breaking_point) * (second_slope - first_slope) / (RAY - breaking_point)`.
    ///
    /// Slopes are not required to be ordered, each segment may rise or fall.
    ///
    /// # Arguments
    /// - `utilization`: Current utilization ratio (RAY).
    /// - `params`: The pool's curve.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Annual percentage (RAY, 100% = RAY).
    fn calc_annual_rate(
        &self,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        params: &InterestRateParams<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = utilization.rescale(RAY_PRECISION);
        if utilization == self.ray_zero() {
            return params.base_percentage.rescale(RAY_PRECISION);
        }

        let breaking_point = params.utilization_breaking_point.rescale(RAY_PRECISION);
        if utilization <= breaking_point {
            return self.interpolate(
                &params.base_percentage,
                &params.first_slope,
                &utilization,
                &breaking_point,
            );
        }

        let excess = utilization.clone() - breaking_point.clone();
        let remaining_range = self.ray() - breaking_point;
        self.interpolate(
            &params.first_slope,
            &params.second_slope,
            &excess,
            &remaining_range,
        )
    }

    /// `from + (to - from) * numerator / denominator`, truncated, for either ordering of `from` and `to`.
    fn interpolate(
        &self,
        from: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedDecimal<Self::Api, NumDecimals>,
        numerator: &ManagedDecimal<Self::Api, NumDecimals>,
        denominator: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let from = from.rescale(RAY_PRECISION);
        let to = to.rescale(RAY_PRECISION);
        if denominator.into_raw_units() == &BigUint::zero() {
            return to;
        }

        if to >= from {
            let span = to - from.clone();
            let step = self.div_floor(
                &self.mul_floor(&span, numerator, RAY_PRECISION),
                denominator,
                RAY_PRECISION,
            );
            from + step
        } else {
            let span = from.clone() - to;
            let step = self.div_floor(
                &self.mul_floor(&span, numerator, RAY_PRECISION),
                denominator,
                RAY_PRECISION,
            );
            self.saturating_sub(&from, &step)
        }
    }

    /// Computes the utilization ratio of a pool.
    ///
    /// **Formula**: `borrowed / (available + borrowed)`, 0 when the pool is empty.
    ///
    /// # Arguments
    /// - `borrowed`: Absolute borrowed amount (asset decimals).
    /// - `available`: Cash held by the pool (asset decimals).
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Utilization ratio (RAY).
    fn get_utilization(
        &self,
        borrowed: &ManagedDecimal<Self::Api, NumDecimals>,
        available: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total = available.rescale(RAY_PRECISION) + borrowed.rescale(RAY_PRECISION);
        if total == self.ray_zero() {
            return self.ray_zero();
        }

        self.div_floor(borrowed, &total, RAY_PRECISION)
    }

    /// Growth of the compound rate over `delta` seconds: `(RAY + per_second_rate)^delta`.
    fn calc_growth_factor(
        &self,
        per_second_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        delta: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let base = self.ray() + per_second_rate.rescale(RAY_PRECISION);
        self.rpow_floor(&base, delta, RAY_PRECISION)
    }

    /// Advances a compound rate to `now`.
    ///
    /// **Process**:
    /// 1. `delta = now - last_update`; a zero delta leaves the rate untouched.
    /// 2. `rate = rate * (RAY + per_second_rate)^delta / RAY`.
    /// 3. `last_update = now`.
    ///
    /// # Returns
    /// - `bool`: Whether the rate was advanced.
    fn update_compound_rate(
        &self,
        compound_rate: &mut CompoundRate<Self::Api>,
        per_second_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        now: u64,
    ) -> bool {
        let delta = compound_rate.elapsed(now);
        if delta == 0 {
            return false;
        }

        compound_rate.rate = self.project_compound_rate(compound_rate, per_second_rate, now);
        compound_rate.last_update = now;

        true
    }

    /// Same computation as `update_compound_rate` without touching the stored rate.
    fn project_compound_rate(
        &self,
        compound_rate: &CompoundRate<Self::Api>,
        per_second_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        now: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let delta = compound_rate.elapsed(now);
        if delta == 0 {
            return compound_rate.rate.clone();
        }

        let growth = self.calc_growth_factor(per_second_rate, delta);
        self.mul_floor(&compound_rate.rate, &growth, RAY_PRECISION)
    }

    /// Converts an absolute amount into its normalized form: `amount * RAY / rate`.
    fn to_normalized(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_floor(amount, rate, RAY_PRECISION)
    }

    /// Converts a normalized amount into asset units: `normalized * rate / RAY`, truncated to `asset_decimals`.
    fn to_absolute(
        &self,
        normalized: &ManagedDecimal<Self::Api, NumDecimals>,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(normalized, rate, RAY_PRECISION)
            .rescale(asset_decimals)
    }

    /// Computes the normalized amount of a position after a change of `delta` asset units.
    ///
    /// **Formula**:
    /// - Increase: `existing_normalized + delta * RAY / rate`.
    /// - Decrease: `existing_normalized - delta * RAY / rate`, floored at zero.
    ///
    /// A decrease that leaves no principal (`amount_without_interest == 0`) is a full
    /// repayment and always returns zero, so no normalized dust survives.
    ///
    /// # Arguments
    /// - `existing_normalized`: Current normalized amount (RAY).
    /// - `amount_without_interest`: Principal left once the change is applied (asset decimals).
    /// - `delta`: Absolute amount added or removed (asset decimals).
    /// - `rate`: Current compound rate (RAY).
    /// - `is_increase`: Direction of the change.
    fn get_normalized_amount(
        &self,
        existing_normalized: &ManagedDecimal<Self::Api, NumDecimals>,
        amount_without_interest: &ManagedDecimal<Self::Api, NumDecimals>,
        delta: &ManagedDecimal<Self::Api, NumDecimals>,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        is_increase: bool,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let existing = existing_normalized.rescale(RAY_PRECISION);
        let normalized_delta = self.to_normalized(delta, rate);

        if is_increase {
            return existing + normalized_delta;
        }

        if amount_without_interest.into_raw_units() == &BigUint::zero() {
            return self.ray_zero();
        }

        self.saturating_sub(&existing, &normalized_delta)
    }

    /// Splits a pool's reward per block between suppliers and borrowers.
    ///
    /// **Formula**:
    /// - `supply_part = min_supply + (RAY - min_supply - min_borrow) * utilization / RAY`.
    /// - `supply = reward_per_block * supply_part / RAY`, `borrow = reward_per_block - supply`.
    ///
    /// At zero utilization suppliers get exactly their minimum part; at full utilization
    /// borrowers get exactly theirs.
    ///
    /// # Returns
    /// - `(BigUint, BigUint)`: Supply and borrow reward per block, in reward token units.
    fn calc_reward_split(
        &self,
        reward_per_block: &BigUint,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        min_supply_part: &ManagedDecimal<Self::Api, NumDecimals>,
        min_borrow_part: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (BigUint, BigUint) {
        let min_supply = min_supply_part.rescale(RAY_PRECISION);
        let free_part = self.saturating_sub(
            &self.saturating_sub(&self.ray(), &min_supply),
            min_borrow_part,
        );
        let supply_part =
            min_supply + self.mul_floor(&free_part, utilization, RAY_PRECISION);

        let supply_reward =
            reward_per_block * supply_part.into_raw_units() / self.ray().into_raw_units();
        let borrow_reward = if &supply_reward > reward_per_block {
            BigUint::zero()
        } else {
            reward_per_block - &supply_reward
        };

        (supply_reward, borrow_reward)
    }

    /// Increase of a cumulative sum: `side_reward * RAY / total_size * blocks`.
    ///
    /// `total_size` is the raw balance the sum is shared over; an empty side accrues nothing.
    fn calc_cumulative_sum_increase(
        &self,
        side_reward_per_block: &BigUint,
        total_size: &BigUint,
        blocks: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if total_size == &BigUint::zero() || blocks == 0 {
            return self.ray_zero();
        }

        let ray_raw = self.ray().into_raw_units().clone();
        let per_block = side_reward_per_block * &ray_raw / total_size;
        self.to_decimal_ray(per_block * BigUint::from(blocks))
    }

    /// Reward earned by `balance` between two cumulative sums: `balance * (current - last) / RAY`.
    fn calc_accrued_reward(
        &self,
        balance: &BigUint,
        current_sum: &ManagedDecimal<Self::Api, NumDecimals>,
        last_sum: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let delta = self.saturating_sub(current_sum, last_sum);
        balance * delta.into_raw_units() / self.ray().into_raw_units()
    }
}
