use anchor_lang::prelude::*;

use crate::{
    contexts::*,
    errors::LotteryError,
    events::*,
    helpers::with_lottery_seeds,
    price::PriceQuote,
    randomness::{committed_seed_slot, fund_oracle},
    states::{LotteryConfig, LotteryParams, RoundStatus},
};

/// ========================================
/// Controller Instructions
/// ========================================

/// Initialize a new lottery
///
/// Creates the lottery PDA with the caller as controller, and the token vault
/// the randomness oracle is paid from. The lottery starts Closed.
///
/// Args:
/// - ctx: Context containing the lottery PDA, token vault and oracle accounts
/// - params: USD fee, price feed and oracle fee configuration
///
/// Returns: Result indicating success or failure
pub fn initialize(ctx: Context<Initialize>, params: LotteryParams) -> Result<()> {
    let config = LotteryConfig::new(
        params,
        ctx.accounts.utility_mint.key(),
        ctx.accounts.oracle_fee_account.key(),
    );
    config.validate()?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.controller = ctx.accounts.controller.key();
    lottery.creator = ctx.accounts.controller.key();
    lottery.bump = ctx.bumps.lottery;
    lottery.vault_bump = ctx.bumps.token_vault;
    lottery.config = config;

    emit!(LotteryInitialized {
        controller: lottery.controller,
        lottery: lottery.key(),
        entrance_fee_usd: config.entrance_fee_usd,
        utility_mint: config.utility_mint,
    });
    Ok(())
}

/// Open a new round
///
/// Snapshots the entrance fee from a live quote. Entries are still priced
/// individually at admission time.
///
/// Constraints:
/// - Caller must be the controller
/// - Lottery must be Closed
pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
    let clock = Clock::get()?;
    let controller = ctx.accounts.controller.key();
    let lottery = &mut ctx.accounts.lottery;

    lottery.require_controller(&controller)?;
    lottery.ensure_startable()?;

    let quote = PriceQuote::from_feed(&ctx.accounts.price_update, &clock, &lottery.config)?;
    let entrance_fee_snapshot = quote.required_fee(lottery.config.entrance_fee_usd)?;
    let round_id = lottery.start_round(&controller, entrance_fee_snapshot)?;

    msg!(
        "Round {} open, entrance fee {} lamports",
        round_id,
        entrance_fee_snapshot
    );
    emit!(RoundStarted {
        lottery: lottery.key(),
        round_id,
        entrance_fee_snapshot,
    });
    Ok(())
}

/// Close the open round and request randomness
///
/// Process:
/// 1. Validate controller, round state and that the randomness commit is fresh and unrevealed
/// 2. Fund the randomness oracle from the token vault
/// 3. Record the pending request and move to Calculating
///
/// Constraints:
/// - Caller must be the controller
/// - Lottery must be Open with at least one entrant
pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
    let clock = Clock::get()?;
    let controller = ctx.accounts.controller.key();

    // ============ VALIDATIONS ============
    ctx.accounts.lottery.require_controller(&controller)?;
    ctx.accounts.lottery.ensure_closable()?;
    let seed_slot = committed_seed_slot(&ctx.accounts.randomness_account_data, &clock)?;

    // ============ ORACLE FUNDING ============
    let lottery = &ctx.accounts.lottery;
    let oracle_fee = lottery.config.oracle_fee;
    let funding = with_lottery_seeds(lottery, |signer_seeds| {
        fund_oracle(
            &ctx.accounts.token_vault,
            &ctx.accounts.oracle_fee_account,
            lottery.to_account_info(),
            &ctx.accounts.token_program,
            signer_seeds,
            oracle_fee,
        )
    })?;
    emit!(OracleFunded {
        lottery: lottery.key(),
        round_id: lottery.round.id,
        oracle_fee_account: ctx.accounts.oracle_fee_account.key(),
        amount: funding.amount,
    });

    // ============ RANDOMNESS REQUEST ============
    let request_id = ctx.accounts.randomness_account_data.key();
    let lottery = &mut ctx.accounts.lottery;
    lottery.close_round(&controller, funding, request_id, seed_slot, clock.unix_timestamp)?;

    msg!(
        "Round {} calculating with {} entrants, request {}",
        lottery.round.id,
        lottery.round.entrants.len(),
        request_id
    );
    emit!(RandomnessRequested {
        lottery: lottery.key(),
        round_id: lottery.round.id,
        request_id,
        seed_slot,
        total_entrants: lottery.round.entrants.len() as u16,
    });
    Ok(())
}

/// Replace the lottery parameters
///
/// Only allowed between rounds so an open round keeps the terms it was opened with.
/// The utility mint is fixed at initialization.
pub fn update_config(ctx: Context<UpdateConfig>, params: LotteryParams) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.require_controller(&ctx.accounts.controller.key())?;
    require!(
        lottery.status() == RoundStatus::Closed,
        LotteryError::RoundAlreadyOpen
    );

    let config = LotteryConfig::new(
        params,
        lottery.config.utility_mint,
        ctx.accounts.oracle_fee_account.key(),
    );
    config.validate()?;
    lottery.config = config;

    emit!(ConfigUpdated {
        controller: ctx.accounts.controller.key(),
        lottery: lottery.key(),
        entrance_fee_usd: config.entrance_fee_usd,
        max_price_age: config.max_price_age,
        oracle_fee: config.oracle_fee,
        oracle_fee_account: config.oracle_fee_account,
    });
    Ok(())
}

/// Transfer controller privileges to a new account
///
/// The lottery PDA stays derived from its creator, so its address does not change.
pub fn transfer_controller(ctx: Context<ControllerAction>, new_controller: Pubkey) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.require_controller(&ctx.accounts.controller.key())?;

    let previous_controller = lottery.controller;
    lottery.controller = new_controller;

    emit!(ControllerTransferred {
        previous_controller,
        new_controller,
        lottery: lottery.key(),
    });
    Ok(())
}
