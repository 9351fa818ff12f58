//! USD pricing of the entrance fee through a Pyth price feed.

use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;

use crate::{
    constants::{LAMPORTS_PER_SOL, USD_FEE_DECIMALS},
    errors::LotteryError,
    states::LotteryConfig,
};

/// A live SOL/USD quote: `price * 10^exponent` dollars per SOL.
///
/// Quotes are never stored; every admission reads its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceQuote {
    pub price: i64,
    pub exponent: i32,
    /// Publish time reported by the feed
    pub observed_at: i64,
}

impl PriceQuote {
    pub fn new(price: i64, exponent: i32, observed_at: i64) -> Result<Self> {
        require!(price > 0, LotteryError::OracleUnavailable);
        Ok(Self {
            price,
            exponent,
            observed_at,
        })
    }

    /// Read the configured feed, rejecting anything older than `max_price_age`.
    pub fn from_feed(
        price_update: &PriceUpdateV2,
        clock: &Clock,
        config: &LotteryConfig,
    ) -> Result<Self> {
        let price = price_update
            .get_price_no_older_than(clock, config.max_price_age, &config.price_feed_id)
            .map_err(|_| LotteryError::OracleUnavailable)?;
        Self::new(price.price, price.exponent, price.publish_time)
    }

    /// Lamports needed to cover `entrance_fee_usd` micro-dollars, rounded up.
    pub fn required_fee(&self, entrance_fee_usd: u64) -> Result<u64> {
        let ten = 10u128;
        let mut numerator = (entrance_fee_usd as u128)
            .checked_mul(LAMPORTS_PER_SOL)
            .ok_or(LotteryError::MathOverflow)?;
        let mut denominator = (self.price as u128)
            .checked_mul(ten.pow(USD_FEE_DECIMALS))
            .ok_or(LotteryError::MathOverflow)?;

        let scale = ten
            .checked_pow(self.exponent.unsigned_abs())
            .ok_or(LotteryError::MathOverflow)?;
        if self.exponent < 0 {
            numerator = numerator
                .checked_mul(scale)
                .ok_or(LotteryError::MathOverflow)?;
        } else {
            denominator = denominator
                .checked_mul(scale)
                .ok_or(LotteryError::MathOverflow)?;
        }

        let fee = numerator
            .checked_add(denominator - 1)
            .ok_or(LotteryError::MathOverflow)?
            / denominator;
        u64::try_from(fee).map_err(|_| error!(LotteryError::MathOverflow))
    }
}
