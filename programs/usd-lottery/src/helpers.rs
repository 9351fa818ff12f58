use crate::{constants::LOTTERY, errors::LotteryError, states::Lottery};

use anchor_lang::prelude::*;

/// ========================================
/// Payment Helper Functions
/// ========================================

/// Moves an entry payment from the entrant into the lottery PDA
///
/// The lottery account is program-owned, so the System Program can credit it
/// but only this program can debit it again at payout.
///
/// Args:
/// - entrant: Signer paying for the entry
/// - lottery: The lottery state account receiving the lamports
/// - system_program: System program used for the CPI
/// - amount: Lamports to transfer
///
/// Returns: Result indicating success or failure of the payment
pub fn collect_entry_payment<'info>(
    entrant: &Signer<'info>,
    lottery: &Account<'info, Lottery>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    // ============ BALANCE VERIFICATION ============
    require!(
        entrant.lamports() >= amount,
        LotteryError::TransferFailed
    );

    // ============ TRANSFER EXECUTION ============
    let cpi_context = CpiContext::new(
        system_program.to_account_info(),
        anchor_lang::system_program::Transfer {
            from: entrant.to_account_info(),
            to: lottery.to_account_info(),
        },
    );
    anchor_lang::system_program::transfer(cpi_context, amount)?;

    Ok(())
}

/// Runs `f` with the signer seeds of the lottery PDA
pub fn with_lottery_seeds<T>(lottery: &Lottery, f: impl FnOnce(&[&[&[u8]]]) -> T) -> T {
    let bump = [lottery.bump];
    let seeds: &[&[u8]] = &[LOTTERY, lottery.creator.as_ref(), &bump];
    f(&[seeds])
}
