//! USD Lottery Program
//!
//! A Solana program that runs repeated lottery rounds where:
//! - The entrance fee is set in USD and converted to lamports with a Pyth SOL/USD feed
//! - Entry payments are custodied on the lottery PDA until a winner is drawn
//! - The winner is picked with Switchboard on-demand randomness, paid for in a utility token
//!
//! A single controller opens and closes rounds; anyone may relay the randomness callback.

#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod guard;
pub mod helpers;
pub mod instructions;
pub mod ledger;
pub mod price;
pub mod randomness;
pub mod states;

pub use contexts::*;
use states::LotteryParams;

declare_id!("5kNRZPqyq9vJ8mXcTgWJwY7GzC8gM6QxrbQ3sD1uLtYa");

#[program]
pub mod usd_lottery {
    use super::*;

    // ========================================
    // Controller Instructions
    // ========================================

    /// Create a lottery owned by the caller
    pub fn initialize(ctx: Context<Initialize>, params: LotteryParams) -> Result<()> {
        instructions::admin::initialize(ctx, params)
    }

    /// Open a new round (Closed -> Open)
    pub fn start_round(ctx: Context<StartRound>) -> Result<()> {
        instructions::admin::start_round(ctx)
    }

    /// Fund the oracle and request randomness (Open -> Calculating)
    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        instructions::admin::close_round(ctx)
    }

    /// Replace the lottery parameters between rounds
    pub fn update_config(ctx: Context<UpdateConfig>, params: LotteryParams) -> Result<()> {
        instructions::admin::update_config(ctx, params)
    }

    /// Hand controller privileges to another account
    pub fn transfer_controller(
        ctx: Context<ControllerAction>,
        new_controller: Pubkey,
    ) -> Result<()> {
        instructions::admin::transfer_controller(ctx, new_controller)
    }

    // ========================================
    // User Instructions
    // ========================================

    /// Pay into the open round
    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        instructions::user::enter(ctx, amount)
    }

    /// Lamports currently required to enter
    pub fn get_entrance_fee(ctx: Context<EntranceFee>) -> Result<u64> {
        instructions::user::get_entrance_fee(ctx)
    }

    // ========================================
    // Oracle Callback
    // ========================================

    /// Deliver randomness and pay the winner (Calculating -> Closed)
    pub fn fulfill_randomness(ctx: Context<FulfillRandomness>) -> Result<()> {
        instructions::oracle::fulfill_randomness(ctx)
    }
}
