use anchor_lang::prelude::*;
/// Constants module for the lottery program
///
/// Seeds, account bounds and the fixed-point scales used by fee conversion.

/// Maximum number of entrants a single round can hold.
/// The lottery account is allocated for this many entries up front, which
/// keeps it under the 10 KiB limit for accounts created through CPI.
#[constant]
pub const MAX_ENTRANTS: usize = 200;

/// Maximum slot difference allowed between a randomness commit and the close
/// instruction that registers it
#[constant]
pub const MAX_SLOT_DIFFERENCE: u64 = 20;

/// Upper bound accepted for the configured price staleness window (seconds)
#[constant]
pub const MAX_PRICE_AGE_LIMIT: u64 = 3_600;

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u128 = 1_000_000_000;

/// The USD entry fee is configured in micro-dollars (6 decimals)
pub const USD_FEE_DECIMALS: u32 = 6;

/// Seeds for PDA derivation

/// Seed for the lottery state PDA
#[constant]
pub const LOTTERY: &[u8] = b"lottery";

/// Seed for the utility token vault PDA
#[constant]
pub const TOKEN_VAULT: &[u8] = b"token_vault";

/// Seed for the per-round settlement record PDA
#[constant]
pub const ROUND_RECORD: &[u8] = b"round_record";
