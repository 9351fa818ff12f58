use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use switchboard_on_demand::get_switchboard_on_demand_program_id;

use crate::{constants::*, errors::*, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for creating a lottery
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The lottery state account (PDA), also the custodian of entry payments
    #[account(
        init,
        payer = controller,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY, controller.key().as_ref()],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Vault holding the utility token used to pay the randomness oracle (PDA)
    #[account(
        init,
        payer = controller,
        seeds = [TOKEN_VAULT, lottery.key().as_ref()],
        bump,
        token::mint = utility_mint,
        token::authority = lottery,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Mint of the utility token
    pub utility_mint: Account<'info, Mint>,

    /// Token account of the randomness service receiving its fee
    #[account(
        constraint = oracle_fee_account.mint == utility_mint.key() @ LotteryError::InvalidOracleAccount
    )]
    pub oracle_fee_account: Account<'info, TokenAccount>,

    /// The controller that will own the lottery
    #[account(mut)]
    pub controller: Signer<'info>,

    /// Token program for vault creation
    pub token_program: Program<'info, Token>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for opening a round
#[derive(Accounts)]
pub struct StartRound<'info> {
    /// The lottery state account
    #[account(
        mut,
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Controller account (checked against lottery.controller in the handler)
    pub controller: Signer<'info>,

    /// Pyth SOL/USD price update used for the fee snapshot
    pub price_update: Account<'info, PriceUpdateV2>,
}

/// Accounts required for entering the open round
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The lottery state account, receiving the entry payment
    #[account(
        mut,
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Entrant paying for the entry
    #[account(mut)]
    pub entrant: Signer<'info>,

    /// Pyth SOL/USD price update used to price this entry
    pub price_update: Account<'info, PriceUpdateV2>,

    /// System program for SOL transfers
    pub system_program: Program<'info, System>,
}

/// Accounts required for quoting the current entrance fee
#[derive(Accounts)]
pub struct EntranceFee<'info> {
    /// The lottery state account
    #[account(
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Pyth SOL/USD price update
    pub price_update: Account<'info, PriceUpdateV2>,
}

/// Accounts required for closing the round and requesting randomness
#[derive(Accounts)]
pub struct CloseRound<'info> {
    /// The lottery state account
    #[account(
        mut,
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Controller account (checked against lottery.controller in the handler)
    pub controller: Signer<'info>,

    /// Utility token vault paying the oracle fee
    #[account(
        mut,
        seeds = [TOKEN_VAULT, lottery.key().as_ref()],
        bump = lottery.vault_bump,
        token::mint = lottery.config.utility_mint,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Token account of the randomness service
    #[account(
        mut,
        address = lottery.config.oracle_fee_account @ LotteryError::InvalidOracleAccount,
    )]
    pub oracle_fee_account: Account<'info, TokenAccount>,

    /// Switchboard randomness account committed in this transaction
    /// CHECK: Owned by Switchboard; the commit slot is validated in the handler
    #[account(
        owner = get_switchboard_on_demand_program_id() @ LotteryError::InvalidRandomnessAccount
    )]
    pub randomness_account_data: AccountInfo<'info>,

    /// Token program for the oracle fee transfer
    pub token_program: Program<'info, Token>,
}

/// Accounts required for delivering randomness and settling the round
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    /// The lottery state account, paying the prize
    #[account(
        mut,
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Settlement record of the current round (PDA). Replayed callbacks find it
    /// already written and fail correlation in the handler.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + RoundRecord::INIT_SPACE,
        seeds = [ROUND_RECORD, lottery.key().as_ref(), &lottery.round.id.to_le_bytes()],
        bump
    )]
    pub round_record: Account<'info, RoundRecord>,

    /// Switchboard randomness account holding the revealed value
    /// CHECK: Owned by Switchboard; must be the pending request, checked in the handler
    #[account(
        owner = get_switchboard_on_demand_program_id() @ LotteryError::InvalidRandomnessAccount
    )]
    pub randomness_account_data: AccountInfo<'info>,

    /// Account of the selected entrant
    /// CHECK: Must equal the entrant picked by the randomness, checked in the handler
    #[account(mut)]
    pub winner: AccountInfo<'info>,

    /// Whoever relays the callback; pays for the settlement record
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for changing the lottery parameters
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The lottery state account
    #[account(
        mut,
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Token account of the randomness service receiving its fee
    #[account(
        constraint = oracle_fee_account.mint == lottery.config.utility_mint @ LotteryError::InvalidOracleAccount
    )]
    pub oracle_fee_account: Account<'info, TokenAccount>,

    /// Controller account (checked against lottery.controller in the handler)
    pub controller: Signer<'info>,
}

/// Accounts required for controller-only actions without extra accounts
#[derive(Accounts)]
pub struct ControllerAction<'info> {
    /// The lottery state account
    #[account(
        mut,
        seeds = [LOTTERY, lottery.creator.as_ref()],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// Controller account (checked against lottery.controller in the handler)
    pub controller: Signer<'info>,
}
