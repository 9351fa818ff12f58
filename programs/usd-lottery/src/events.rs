/// Events module for the lottery program
/// Every state transition emits one of these for off-chain tracking and for
/// the harness that waits on the randomness callback.
use anchor_lang::prelude::*;

/// Emitted when a lottery is initialized
#[event]
pub struct LotteryInitialized {
    pub controller: Pubkey,
    pub lottery: Pubkey,
    pub entrance_fee_usd: u64,
    pub utility_mint: Pubkey,
}

/// Emitted when the controller opens a round
#[event]
pub struct RoundStarted {
    pub lottery: Pubkey,
    pub round_id: u64,
    pub entrance_fee_snapshot: u64,
}

/// Emitted for every admitted entry
#[event]
pub struct LotteryEntered {
    pub lottery: Pubkey,
    pub round_id: u64,
    pub entrant: Pubkey,
    pub amount: u64,
    pub required_fee: u64,
    pub total_entrants: u16,
}

/// Emitted when the randomness oracle is paid with the utility token
#[event]
pub struct OracleFunded {
    pub lottery: Pubkey,
    pub round_id: u64,
    pub oracle_fee_account: Pubkey,
    pub amount: u64,
}

/// Emitted when a round is closed and randomness is requested
#[event]
pub struct RandomnessRequested {
    pub lottery: Pubkey,
    pub round_id: u64,
    pub request_id: Pubkey,
    pub seed_slot: u64,
    pub total_entrants: u16,
}

/// Emitted when the randomness callback settles a round
#[event]
pub struct WinnerPaid {
    pub lottery: Pubkey,
    pub round_id: u64,
    pub request_id: Pubkey,
    pub winner: Pubkey,
    pub winner_index: u16,
    pub prize: u64,
}

/// Emitted when the controller changes the lottery parameters
#[event]
pub struct ConfigUpdated {
    pub controller: Pubkey,
    pub lottery: Pubkey,
    pub entrance_fee_usd: u64,
    pub max_price_age: u64,
    pub oracle_fee: u64,
    pub oracle_fee_account: Pubkey,
}

/// Emitted when controller privileges are transferred
#[event]
pub struct ControllerTransferred {
    pub previous_controller: Pubkey,
    pub new_controller: Pubkey,
    pub lottery: Pubkey,
}
