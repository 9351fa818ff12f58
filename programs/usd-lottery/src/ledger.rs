//! Fund custody ledger
//!
//! Entry payments are held as lamports on the lottery PDA itself. The ledger
//! tracks the portion of those lamports that belongs to the current round so the
//! rent-exempt reserve is never paid out.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ENTRANTS,
    errors::LotteryError,
    states::{Entrant, Round},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Ledger {
    /// Lamports currently custodied for the prize
    pub balance: u64,
    /// Lamports ever deposited by entrants
    pub total_deposited: u64,
    /// Lamports ever paid to winners
    pub total_paid_out: u64,
}

impl Ledger {
    /// Smallest accepted entry: the USD fee, but never less than what keeps an
    /// emptied system account rent-exempt once it receives the prize.
    pub fn minimum_entry(required_fee: u64, rent_exempt_minimum: u64) -> u64 {
        required_fee.max(rent_exempt_minimum)
    }

    pub fn check_minimum(amount: u64, required_fee: u64) -> Result<()> {
        require_gte!(amount, required_fee, LotteryError::BelowMinimumFee);
        Ok(())
    }

    /// Append a deposit to the round and credit it to the balance.
    ///
    /// Anything paid above `required_fee` is kept in the pot.
    pub fn record_deposit(
        &mut self,
        round: &mut Round,
        address: Pubkey,
        amount: u64,
        required_fee: u64,
    ) -> Result<()> {
        Self::check_minimum(amount, required_fee)?;
        require!(
            round.entrants.len() < MAX_ENTRANTS,
            LotteryError::RoundFull
        );

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;

        round.entrants.push(Entrant { address, amount });
        self.balance = balance;
        self.total_deposited = total_deposited;
        Ok(())
    }

    /// Debit a completed payout.
    pub fn payout(&mut self, amount: u64) -> Result<()> {
        require_gte!(self.balance, amount, LotteryError::InsufficientBalance);
        let total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;

        self.balance -= amount;
        self.total_paid_out = total_paid_out;
        Ok(())
    }
}

/// Move lamports out of a program-owned account, leaving at least `reserve` behind.
///
/// Both balances are computed before either is written, so a failure leaves
/// the accounts untouched.
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64, reserve: u64) -> Result<()> {
    let spendable = from
        .lamports()
        .checked_sub(reserve)
        .ok_or(LotteryError::InsufficientBalance)?;
    require_gte!(spendable, amount, LotteryError::InsufficientBalance);

    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LotteryError::TransferFailed)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(LotteryError::TransferFailed)?;

    **from
        .try_borrow_mut_lamports()
        .map_err(|_| LotteryError::TransferFailed)? = debited;
    **to
        .try_borrow_mut_lamports()
        .map_err(|_| LotteryError::TransferFailed)? = credited;

    Ok(())
}
