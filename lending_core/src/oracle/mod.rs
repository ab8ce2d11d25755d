multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_errors::ERROR_NO_VALID_PRICE;
use common_proxies::proxy_price_oracle;
use common_structs::PriceFeed;

use crate::storage;

/// The OracleModule resolves USD prices and converts between asset units and USD (WAD).
#[multiversx_sc::module]
pub trait OracleModule: storage::Storage + common_math::SharedMathModule {
    /// Fetches the price of `asset` from the oracle.
    ///
    /// A zero quote is treated as no valid price and resolves to the owner configured
    /// fallback price of the asset.
    ///
    /// # Errors
    /// - `ERROR_NO_VALID_PRICE`: Neither the oracle nor the fallback can price the asset.
    fn get_price_feed(&self, asset: &EgldOrEsdtTokenIdentifier) -> PriceFeed<Self::Api> {
        let oracle = self.oracle_address().get();
        let (value, decimals) = self
            .tx()
            .to(&oracle)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .latest_price(asset.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple();

        let feed = PriceFeed { value, decimals };
        if feed.is_valid() {
            return feed;
        }

        let fallback = self.fallback_price(asset);
        require!(!fallback.is_empty(), ERROR_NO_VALID_PRICE);

        let fallback_feed = fallback.get();
        require!(fallback_feed.is_valid(), ERROR_NO_VALID_PRICE);
        sc_print!("fallback price: {}", fallback_feed.value);

        fallback_feed
    }

    /// USD price of one whole unit of `asset`, in the feed's decimals.
    fn get_usd_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_price_feed(asset).to_decimal()
    }

    /// `amount * price`, in WAD.
    fn get_usd_value(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.mul_floor(amount, price, WAD_PRECISION)
    }

    /// `usd_value / price`, truncated to `asset_decimals`.
    fn get_asset_amount(
        &self,
        usd_value: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        asset_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_floor(usd_value, price, WAD_PRECISION)
            .rescale(asset_decimals)
    }
}
