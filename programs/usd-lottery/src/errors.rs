/// Error definitions for the lottery program
///
/// Every failure is returned to the immediate caller; nothing is retried on-chain.
use anchor_lang::prelude::*;

/// Custom error codes for the lottery program
#[error_code]
pub enum LotteryError {
    #[msg("Only the lottery controller can perform this action.")]
    Unauthorized,
    #[msg("A round is already open or being settled.")]
    RoundAlreadyOpen,
    #[msg("The lottery is not open for this action.")]
    LotteryNotOpen,
    #[msg("The round cannot be closed without entrants.")]
    NoEntrants,
    #[msg("The payment is below the current entrance fee.")]
    BelowMinimumFee,
    #[msg("The price feed is unavailable, stale or non-positive.")]
    OracleUnavailable,
    #[msg("The lottery does not hold enough utility token to fund the randomness oracle.")]
    InsufficientTokenBalance,
    #[msg("A randomness request is already pending.")]
    AlreadyPending,
    #[msg("The randomness callback does not match the pending request.")]
    UnknownRequest,
    #[msg("The lottery is not waiting for randomness.")]
    NotCalculating,
    #[msg("The payout exceeds the custodied balance.")]
    InsufficientBalance,
    #[msg("The lamport transfer could not be completed.")]
    TransferFailed,
    #[msg("The round has reached its maximum number of entrants.")]
    RoundFull,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("The lottery configuration is invalid.")]
    InvalidConfig,
    #[msg("The randomness account is invalid")]
    InvalidRandomnessAccount,
    #[msg("The randomness commit is not from the current slot window.")]
    RandomnessNotCurrent,
    #[msg("The randomness account was already revealed.")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness has not been resolved by the oracle yet.")]
    RandomnessNotResolved,
    #[msg("The winner account does not match the selected entrant.")]
    WinnerAccountMismatch,
    #[msg("The oracle token account does not match the configuration.")]
    InvalidOracleAccount,
}
