use anchor_lang::prelude::*;

use crate::{contexts::*, events::*, helpers::collect_entry_payment, ledger::Ledger, price::PriceQuote};

/// ========================================
/// User Instructions
/// ========================================

/// Enter the open round
///
/// The entry is priced against a fresh SOL/USD quote, so the required lamports
/// move with the market during a round. Entries never go below the rent-exempt
/// minimum of an empty account, so the prize can always be credited to the winner.
/// Anything paid above the fee stays in the pot.
///
/// Process:
/// 1. Validate the round is Open
/// 2. Quote the price and compute the required fee
/// 3. Move the payment into the lottery PDA
/// 4. Append the entrant and credit the ledger
///
/// Args:
/// - ctx: Context containing the lottery, entrant and price update
/// - amount: Lamports the entrant pays
///
/// Returns: Result indicating success or failure
pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    // ============ ROUND VALIDATION ============
    ctx.accounts.lottery.ensure_open()?;

    // ============ PRICING ============
    let quote = PriceQuote::from_feed(
        &ctx.accounts.price_update,
        &clock,
        &ctx.accounts.lottery.config,
    )?;
    let required_fee = Ledger::minimum_entry(
        quote.required_fee(ctx.accounts.lottery.config.entrance_fee_usd)?,
        Rent::get()?.minimum_balance(0),
    );
    Ledger::check_minimum(amount, required_fee)?;

    // ============ PAYMENT PROCESSING ============
    collect_entry_payment(
        &ctx.accounts.entrant,
        &ctx.accounts.lottery,
        &ctx.accounts.system_program,
        amount,
    )?;

    // ============ ADMISSION ============
    let entrant = ctx.accounts.entrant.key();
    let lottery = &mut ctx.accounts.lottery;
    let total_entrants = lottery.enter(entrant, amount, required_fee)?;

    msg!(
        "Entrant {} paid {} lamports (fee {}) in round {}",
        entrant,
        amount,
        required_fee,
        lottery.round.id
    );
    emit!(LotteryEntered {
        lottery: lottery.key(),
        round_id: lottery.round.id,
        entrant,
        amount,
        required_fee,
        total_entrants,
    });

    Ok(())
}

/// Quote the lamports currently required to enter
///
/// Read-only; the value is returned through the transaction return data.
pub fn get_entrance_fee(ctx: Context<EntranceFee>) -> Result<u64> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.lottery.config;
    let quote = PriceQuote::from_feed(&ctx.accounts.price_update, &clock, config)?;
    Ok(Ledger::minimum_entry(
        quote.required_fee(config.entrance_fee_usd)?,
        Rent::get()?.minimum_balance(0),
    ))
}
