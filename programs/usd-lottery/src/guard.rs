use anchor_lang::prelude::*;

use crate::{errors::LotteryError, states::Lottery};

impl Lottery {
    /// Capability check for privileged transitions.
    ///
    /// Called explicitly at the top of every controller-only handler, after the
    /// account constraints have resolved the `Lottery` PDA.
    pub fn require_controller(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.controller, LotteryError::Unauthorized);
        Ok(())
    }
}
