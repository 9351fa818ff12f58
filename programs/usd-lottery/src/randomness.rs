//! Randomness oracle client
//!
//! Requests are issued against a Switchboard on-demand randomness account: the
//! harness commits the account in the same transaction as `close_round`, and the
//! account key together with its seed slot is the correlation token that the
//! later `fulfill_randomness` callback must present.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{constants::*, errors::LotteryError};

/// The single in-flight randomness request
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PendingRandomnessRequest {
    /// Switchboard randomness account the oracle will reveal into
    pub request_id: Pubkey,
    /// Round the request was issued for
    pub round_id: u64,
    /// Slot the randomness account was committed at
    pub seed_slot: u64,
    /// Unix timestamp of the request, for operators watching a stuck oracle
    pub requested_at: i64,
    /// Utility token paid to the oracle for this request
    pub oracle_fee: u64,
}

/// Request bookkeeping stored inside the lottery account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RandomnessRequests {
    pub pending: Option<PendingRandomnessRequest>,
    /// Number of callbacks that completed a round
    pub fulfilled: u64,
}

impl RandomnessRequests {
    pub fn ensure_idle(&self) -> Result<()> {
        require!(self.pending.is_none(), LotteryError::AlreadyPending);
        Ok(())
    }

    /// Record a new request; at most one may be outstanding.
    pub fn request(
        &mut self,
        funding: OracleFunding,
        request_id: Pubkey,
        round_id: u64,
        seed_slot: u64,
        requested_at: i64,
    ) -> Result<()> {
        self.ensure_idle()?;
        self.pending = Some(PendingRandomnessRequest {
            request_id,
            round_id,
            seed_slot,
            requested_at,
            oracle_fee: funding.amount,
        });
        Ok(())
    }

    /// Checks only the request key. Used before reading the oracle account so a
    /// replayed callback reports `UnknownRequest` rather than an oracle error.
    pub fn verify_id(&self, request_id: &Pubkey) -> Result<&PendingRandomnessRequest> {
        let pending = self
            .pending
            .as_ref()
            .ok_or(LotteryError::UnknownRequest)?;
        require_keys_eq!(
            pending.request_id,
            *request_id,
            LotteryError::UnknownRequest
        );
        Ok(pending)
    }

    /// Full correlation check: the key must match and the account must still
    /// carry the commit that was registered (a re-committed account is a new request).
    pub fn verify(&self, request_id: &Pubkey, seed_slot: u64) -> Result<&PendingRandomnessRequest> {
        let pending = self.verify_id(request_id)?;
        require_eq!(pending.seed_slot, seed_slot, LotteryError::UnknownRequest);
        Ok(pending)
    }

    /// Consume the pending request.
    pub fn clear(&mut self, request_id: &Pubkey) -> Result<PendingRandomnessRequest> {
        let pending = *self.verify_id(request_id)?;
        self.pending = None;
        self.fulfilled = self
            .fulfilled
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(pending)
    }
}

/// Reduce a 32-byte random value, read as a little-endian 256-bit integer,
/// modulo `entrant_count`.
pub fn winner_index(random_value: &[u8; 32], entrant_count: usize) -> Option<usize> {
    if entrant_count == 0 {
        return None;
    }
    let modulus = entrant_count as u128;
    let index = random_value
        .iter()
        .rev()
        .fold(0u128, |acc, &byte| (acc * 256 + byte as u128) % modulus);
    Some(index as usize)
}

/// Check that a commit is recent and has not been revealed yet.
///
/// A reveal for this commit lands strictly after `seed_slot`, so a
/// `reveal_slot` at or below it is either unset or left over from an earlier commit.
pub fn check_commit(seed_slot: u64, reveal_slot: u64, clock_slot: u64) -> Result<()> {
    require!(
        clock_slot >= seed_slot && clock_slot - seed_slot <= MAX_SLOT_DIFFERENCE,
        LotteryError::RandomnessNotCurrent
    );
    require!(
        reveal_slot <= seed_slot,
        LotteryError::RandomnessAlreadyRevealed
    );
    Ok(())
}

/// Validate a freshly committed randomness account and return its seed slot.
pub fn committed_seed_slot(randomness_account: &AccountInfo, clock: &Clock) -> Result<u64> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
    check_commit(randomness_data.seed_slot, randomness_data.reveal_slot, clock.slot)?;
    Ok(randomness_data.seed_slot)
}

/// Read the revealed value of a randomness account.
///
/// Switchboard only exposes the value in the reveal slot, so the harness submits
/// the reveal and `fulfill_randomness` in one transaction.
pub fn revealed_value(randomness_account: &AccountInfo, clock: &Clock) -> Result<(u64, [u8; 32])> {
    let randomness_data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
    let value = randomness_data
        .get_value(clock.slot)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;
    Ok((randomness_data.seed_slot, value))
}

pub fn ensure_token_balance(held: u64, amount: u64) -> Result<()> {
    require!(held >= amount, LotteryError::InsufficientTokenBalance);
    Ok(())
}

/// Utility token paid to the oracle for one request.
///
/// Only produced once the vault balance has been checked, and required by
/// `Lottery::close_round` to register the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleFunding {
    pub amount: u64,
}

impl OracleFunding {
    pub fn from_vault(held: u64, amount: u64) -> Result<Self> {
        ensure_token_balance(held, amount)?;
        Ok(Self { amount })
    }
}

/// Pays the randomness oracle its fee in the utility token, signed by the lottery PDA.
pub fn fund_oracle<'info>(
    token_vault: &Account<'info, TokenAccount>,
    oracle_fee_account: &Account<'info, TokenAccount>,
    lottery: AccountInfo<'info>,
    token_program: &Program<'info, Token>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<OracleFunding> {
    let funding = OracleFunding::from_vault(token_vault.amount, amount)?;
    if amount == 0 {
        return Ok(funding);
    }

    let cpi_accounts = Transfer {
        from: token_vault.to_account_info(),
        to: oracle_fee_account.to_account_info(),
        authority: lottery,
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    Ok(funding)
}
