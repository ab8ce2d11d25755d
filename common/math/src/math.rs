#![no_std]

use common_constants::{RAY, RAY_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Fixed-point helpers shared by every module of the protocol.
///
/// All operations truncate (floor) and widen inside `BigUint`, so `a * b` never
/// overflows before the division by the target precision.
#[multiversx_sc::module]
pub trait SharedMathModule {
    /// `floor(a * b / 10^precision)`, both operands rescaled to `precision` first.
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    /// `floor(a * 10^precision / b)`, both operands rescaled to `precision` first.
    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;

        self.to_decimal(numerator / scaled_b.into_raw_units(), precision)
    }

    /// Raises `base` to an integer power with exponentiation by squaring.
    ///
    /// Every intermediate product is floored at `precision`, which keeps the
    /// number of multiplications at `O(log exponent)`.
    fn rpow_floor(
        &self,
        base: &ManagedDecimal<Self::Api, NumDecimals>,
        exponent: u64,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut result = self.to_decimal(BigUint::from(10u64).pow(precision as u32), precision);
        let mut factor = base.rescale(precision);
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining % 2 == 1 {
                result = self.mul_floor(&result, &factor, precision);
            }
            remaining >>= 1;
            if remaining > 0 {
                factor = self.mul_floor(&factor, &factor, precision);
            }
        }

        result
    }

    /// `a - b`, or zero when `b > a`. Result keeps the precision of `a`.
    fn saturating_sub(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let precision = a.scale();
        let b_scaled = b.rescale(precision);
        if b_scaled.into_raw_units() >= a.into_raw_units() {
            return self.to_decimal(BigUint::zero(), precision);
        }

        self.to_decimal(a.into_raw_units() - b_scaled.into_raw_units(), precision)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }
}
