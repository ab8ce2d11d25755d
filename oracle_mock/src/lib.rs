#![no_std]

use common_structs::PriceFeed;

multiversx_sc::imports!();

/// Minimal price source used by the lending core tests.
///
/// Prices are set by the owner and read back unchanged; an unset asset quotes zero,
/// which the lending core treats as no valid price.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, value: BigUint, decimals: u8) {
        self.prices(&asset).set(PriceFeed { value, decimals });
    }

    #[view(latestPrice)]
    fn latest_price(&self, asset: EgldOrEsdtTokenIdentifier) -> MultiValue2<BigUint, u8> {
        let mapper = self.prices(&asset);
        if mapper.is_empty() {
            return (BigUint::zero(), 0u8).into();
        }

        let feed = mapper.get();
        (feed.value, feed.decimals).into()
    }

    #[storage_mapper("prices")]
    fn prices(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;
}
