use anchor_lang::prelude::*;

use crate::{
    contexts::*,
    events::*,
    ledger::move_lamports,
    randomness::revealed_value,
};

/// ========================================
/// Oracle Callback
/// ========================================

/// Deliver randomness for the pending request and pay the winner
///
/// Callable by anyone: the request key and commit slot tie the callback to the
/// request made at `close_round`, and the winner account must match the entrant
/// the revealed value selects.
///
/// Process:
/// 1. Correlate the randomness account with the pending request
/// 2. Read the revealed value and pick `value mod entrants`
/// 3. Transfer the whole round balance to the winner
/// 4. Reset the round to Closed and write the round record
///
/// Args:
/// - ctx: Context containing the lottery, randomness account and winner
///
/// Returns: Result indicating success or failure
pub fn fulfill_randomness(ctx: Context<FulfillRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let request_id = ctx.accounts.randomness_account_data.key();

    // ============ REQUEST CORRELATION ============
    ctx.accounts.lottery.randomness.verify_id(&request_id)?;
    let (seed_slot, random_value) = revealed_value(&ctx.accounts.randomness_account_data, &clock)?;
    let settlement = ctx
        .accounts
        .lottery
        .prepare_settlement(&request_id, seed_slot, &random_value)?;

    settlement.ensure_recipient(&ctx.accounts.winner.key())?;

    // ============ PRIZE TRANSFER ============
    let lottery_info = ctx.accounts.lottery.to_account_info();
    let reserve = Rent::get()?.minimum_balance(lottery_info.data_len());
    move_lamports(
        &lottery_info,
        &ctx.accounts.winner,
        settlement.prize,
        reserve,
    )?;

    // ============ ROUND RESET ============
    ctx.accounts.lottery.complete_settlement(&settlement)?;

    let record = &mut ctx.accounts.round_record;
    record.lottery = ctx.accounts.lottery.key();
    record.round_id = settlement.round_id;
    record.request_id = settlement.request_id;
    record.winner = settlement.winner;
    record.winner_index = settlement.winner_index;
    record.entrant_count = settlement.entrant_count;
    record.prize = settlement.prize;
    record.random_value = settlement.random_value;
    record.settled_at = clock.unix_timestamp;
    record.bump = ctx.bumps.round_record;

    msg!(
        "Round {} won by {} (entrant {} of {}), prize {} lamports",
        settlement.round_id,
        settlement.winner,
        settlement.winner_index,
        settlement.entrant_count,
        settlement.prize
    );
    emit!(WinnerPaid {
        lottery: ctx.accounts.lottery.key(),
        round_id: settlement.round_id,
        request_id: settlement.request_id,
        winner: settlement.winner,
        winner_index: settlement.winner_index,
        prize: settlement.prize,
    });

    Ok(())
}
