#![no_std]

pub mod proxy_price_oracle;
