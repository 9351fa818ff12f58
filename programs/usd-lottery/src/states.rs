/// States module for the lottery program
///
/// Holds the lottery account and its round state machine:
/// `Closed -> Open -> Calculating -> Closed`. Handlers do their checks and
/// transfers, then call into these methods to mutate state.
use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::LotteryError,
    ledger::Ledger,
    randomness::{winner_index, OracleFunding, RandomnessRequests},
};

/// Lifecycle of a round
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum RoundStatus {
    /// No round running; the next `start_round` opens one
    #[default]
    Closed,
    /// Accepting entries
    Open,
    /// Waiting for the randomness callback; entries are frozen
    Calculating,
}

/// One admitted entry, in arrival order
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Entrant {
    pub address: Pubkey,
    /// Lamports paid, including anything above the fee
    pub amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Round {
    /// Monotonic round counter, 0 before the first round
    pub id: u64,
    pub status: RoundStatus,
    #[max_len(MAX_ENTRANTS)]
    pub entrants: Vec<Entrant>,
    /// Required fee in lamports when the round was opened
    pub entrance_fee_snapshot: u64,
    /// Set once, when the round settles
    pub winner: Option<Pubkey>,
}

/// Parameters injected by whoever deploys the lottery
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct LotteryConfig {
    /// Entrance fee in micro-dollars
    pub entrance_fee_usd: u64,
    /// Pyth feed id of the SOL/USD price
    pub price_feed_id: [u8; 32],
    /// Oldest accepted price, in seconds
    pub max_price_age: u64,
    /// Token the randomness oracle is paid in
    pub utility_mint: Pubkey,
    /// Utility token paid to the oracle per request
    pub oracle_fee: u64,
    /// Token account of the randomness service receiving the fee
    pub oracle_fee_account: Pubkey,
}

/// Instruction arguments for `initialize` and `update_config`; the mint and
/// oracle token account come in as accounts
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LotteryParams {
    pub entrance_fee_usd: u64,
    pub price_feed_id: [u8; 32],
    pub max_price_age: u64,
    pub oracle_fee: u64,
}

impl LotteryConfig {
    pub fn new(params: LotteryParams, utility_mint: Pubkey, oracle_fee_account: Pubkey) -> Self {
        Self {
            entrance_fee_usd: params.entrance_fee_usd,
            price_feed_id: params.price_feed_id,
            max_price_age: params.max_price_age,
            utility_mint,
            oracle_fee: params.oracle_fee,
            oracle_fee_account,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.entrance_fee_usd > 0, LotteryError::InvalidConfig);
        require!(
            self.max_price_age > 0 && self.max_price_age <= MAX_PRICE_AGE_LIMIT,
            LotteryError::InvalidConfig
        );
        require!(
            self.price_feed_id != [0u8; 32],
            LotteryError::InvalidConfig
        );
        Ok(())
    }
}

/// Main lottery account (PDA), also the custodian of entry payments
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct Lottery {
    /// Identity allowed to start and close rounds
    pub controller: Pubkey,
    /// Key the PDA was derived from; fixed even if the controller changes
    pub creator: Pubkey,
    /// PDA bump seed for this account
    pub bump: u8,
    /// PDA bump seed of the utility token vault
    pub vault_bump: u8,
    pub config: LotteryConfig,
    pub round: Round,
    pub randomness: RandomnessRequests,
    pub ledger: Ledger,
}

/// Outcome of a verified randomness callback, computed before any funds move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub round_id: u64,
    pub request_id: Pubkey,
    pub winner_index: u16,
    pub winner: Pubkey,
    pub prize: u64,
    pub entrant_count: u16,
    pub random_value: [u8; 32],
}

impl Lottery {
    pub fn status(&self) -> RoundStatus {
        self.round.status
    }

    pub fn ensure_startable(&self) -> Result<()> {
        require!(
            self.round.status == RoundStatus::Closed,
            LotteryError::RoundAlreadyOpen
        );
        Ok(())
    }

    /// `Closed -> Open`. Returns the new round id.
    pub fn start_round(&mut self, caller: &Pubkey, entrance_fee_snapshot: u64) -> Result<u64> {
        self.require_controller(caller)?;
        self.ensure_startable()?;
        let id = self
            .round
            .id
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;

        self.round = Round {
            id,
            status: RoundStatus::Open,
            entrants: Vec::new(),
            entrance_fee_snapshot,
            winner: None,
        };
        Ok(id)
    }

    pub fn ensure_open(&self) -> Result<()> {
        require!(
            self.round.status == RoundStatus::Open,
            LotteryError::LotteryNotOpen
        );
        Ok(())
    }

    /// Admit an entry whose payment has already been transferred in.
    /// Returns the number of entrants after admission.
    pub fn enter(&mut self, address: Pubkey, amount: u64, required_fee: u64) -> Result<u16> {
        self.ensure_open()?;
        self.ledger
            .record_deposit(&mut self.round, address, amount, required_fee)?;
        Ok(self.round.entrants.len() as u16)
    }

    pub fn ensure_closable(&self) -> Result<()> {
        self.ensure_open()?;
        require!(
            !self.round.entrants.is_empty(),
            LotteryError::NoEntrants
        );
        self.randomness.ensure_idle()
    }

    /// `Open -> Calculating`, once the oracle has been funded.
    pub fn close_round(
        &mut self,
        caller: &Pubkey,
        funding: OracleFunding,
        request_id: Pubkey,
        seed_slot: u64,
        requested_at: i64,
    ) -> Result<()> {
        self.require_controller(caller)?;
        self.ensure_closable()?;
        self.randomness
            .request(funding, request_id, self.round.id, seed_slot, requested_at)?;
        self.round.status = RoundStatus::Calculating;
        Ok(())
    }

    /// Verify a callback and pick the winner without touching state.
    pub fn prepare_settlement(
        &self,
        request_id: &Pubkey,
        seed_slot: u64,
        random_value: &[u8; 32],
    ) -> Result<Settlement> {
        let pending = self.randomness.verify(request_id, seed_slot)?;
        require!(
            self.round.status == RoundStatus::Calculating,
            LotteryError::NotCalculating
        );
        require_eq!(pending.round_id, self.round.id, LotteryError::UnknownRequest);

        let entrant_count = self.round.entrants.len();
        let index = winner_index(random_value, entrant_count).ok_or(LotteryError::NoEntrants)?;
        let winner = self
            .round
            .entrants
            .get(index)
            .ok_or(LotteryError::NoEntrants)?;

        Ok(Settlement {
            round_id: self.round.id,
            request_id: *request_id,
            winner_index: index as u16,
            winner: winner.address,
            prize: self.ledger.balance,
            entrant_count: entrant_count as u16,
            random_value: *random_value,
        })
    }

    /// `Calculating -> Closed`, once the prize has been transferred.
    pub fn complete_settlement(&mut self, settlement: &Settlement) -> Result<()> {
        require!(
            self.round.status == RoundStatus::Calculating,
            LotteryError::NotCalculating
        );
        require_eq!(settlement.round_id, self.round.id, LotteryError::UnknownRequest);
        self.randomness.verify_id(&settlement.request_id)?;

        self.ledger.payout(settlement.prize)?;
        self.randomness.clear(&settlement.request_id)?;
        self.round.winner = Some(settlement.winner);
        self.round.entrants.clear();
        self.round.status = RoundStatus::Closed;
        Ok(())
    }
}

impl Settlement {
    /// The account receiving the prize must be the selected entrant.
    pub fn ensure_recipient(&self, recipient: &Pubkey) -> Result<()> {
        require_keys_eq!(*recipient, self.winner, LotteryError::WinnerAccountMismatch);
        Ok(())
    }
}

/// Per-round settlement record, the durable answer to "who won round N"
#[account]
#[derive(InitSpace)]
pub struct RoundRecord {
    pub lottery: Pubkey,
    pub round_id: u64,
    pub request_id: Pubkey,
    pub winner: Pubkey,
    pub winner_index: u16,
    pub entrant_count: u16,
    pub prize: u64,
    pub random_value: [u8; 32],
    pub settled_at: i64,
    pub bump: u8,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_lottery() -> Lottery {
        Lottery {
            controller: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            config: LotteryConfig {
                entrance_fee_usd: 50_000_000,
                price_feed_id: [7u8; 32],
                max_price_age: 60,
                utility_mint: Pubkey::new_unique(),
                oracle_fee: 100_000_000,
                oracle_fee_account: Pubkey::new_unique(),
            },
            ..Lottery::default()
        }
    }

    fn random(n: u64) -> [u8; 32] {
        let mut value = [0u8; 32];
        value[..8].copy_from_slice(&n.to_le_bytes());
        value
    }

    const FEE: u64 = 25_000_000;

    fn start(lottery: &mut Lottery, entrance_fee_snapshot: u64) -> Result<u64> {
        let controller = lottery.controller;
        lottery.start_round(&controller, entrance_fee_snapshot)
    }

    fn close(lottery: &mut Lottery, request_id: Pubkey, seed_slot: u64, requested_at: i64) -> Result<()> {
        let controller = lottery.controller;
        let funding = OracleFunding::from_vault(
            lottery.config.oracle_fee,
            lottery.config.oracle_fee,
        )?;
        lottery.close_round(&controller, funding, request_id, seed_slot, requested_at)
    }

    #[test]
    fn full_round_pays_the_selected_entrant() {
        let mut lottery = sample_lottery();
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let request_id = Pubkey::new_unique();

        assert_eq!(start(&mut lottery, FEE).unwrap(), 1);
        lottery.enter(a, FEE, FEE).unwrap();
        lottery.enter(b, FEE, FEE).unwrap();
        close(&mut lottery, request_id, 10, 0).unwrap();
        assert_eq!(lottery.status(), RoundStatus::Calculating);

        let settlement = lottery
            .prepare_settlement(&request_id, 10, &random(7))
            .unwrap();
        assert_eq!(settlement.winner_index, 1);
        assert_eq!(settlement.winner, b);
        assert_eq!(settlement.prize, 2 * FEE);

        lottery.complete_settlement(&settlement).unwrap();
        assert_eq!(lottery.status(), RoundStatus::Closed);
        assert_eq!(lottery.round.winner, Some(b));
        assert!(lottery.round.entrants.is_empty());
        assert_eq!(lottery.ledger.balance, 0);
        assert_eq!(lottery.ledger.total_paid_out, 2 * FEE);
        assert!(lottery.randomness.pending.is_none());
    }

    #[test]
    fn rounds_can_repeat() {
        let mut lottery = sample_lottery();
        for expected_id in 1..=3u64 {
            let entrant = Pubkey::new_unique();
            let request_id = Pubkey::new_unique();
            assert_eq!(start(&mut lottery, FEE).unwrap(), expected_id);
            assert_eq!(lottery.round.winner, None);
            lottery.enter(entrant, FEE + 1, FEE).unwrap();
            close(&mut lottery, request_id, expected_id, 0).unwrap();
            let settlement = lottery
                .prepare_settlement(&request_id, expected_id, &random(expected_id))
                .unwrap();
            assert_eq!(settlement.prize, FEE + 1);
            lottery.complete_settlement(&settlement).unwrap();
            assert_eq!(lottery.round.winner, Some(entrant));
        }
        assert_eq!(lottery.randomness.fulfilled, 3);
        assert_eq!(lottery.ledger.total_paid_out, 3 * (FEE + 1));
    }

    #[test]
    fn start_round_only_from_closed() {
        let mut lottery = sample_lottery();
        start(&mut lottery, FEE).unwrap();

        let err = start(&mut lottery, FEE).unwrap_err();
        assert_eq!(err, LotteryError::RoundAlreadyOpen.into());
        assert_eq!(lottery.round.id, 1);

        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        close(&mut lottery, Pubkey::new_unique(), 1, 0).unwrap();
        let err = start(&mut lottery, FEE).unwrap_err();
        assert_eq!(err, LotteryError::RoundAlreadyOpen.into());
        assert_eq!(lottery.status(), RoundStatus::Calculating);
    }

    #[test]
    fn only_the_controller_opens_rounds() {
        let mut lottery = sample_lottery();
        let before = lottery.clone();

        let err = lottery
            .start_round(&Pubkey::new_unique(), FEE)
            .unwrap_err();
        assert_eq!(err, LotteryError::Unauthorized.into());
        assert_eq!(lottery.round, before.round);
        assert_eq!(lottery.status(), RoundStatus::Closed);
    }

    #[test]
    fn only_the_controller_closes_rounds() {
        let mut lottery = sample_lottery();
        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        let before = lottery.clone();

        let funding = OracleFunding::from_vault(FEE, FEE).unwrap();
        let err = lottery
            .close_round(&Pubkey::new_unique(), funding, Pubkey::new_unique(), 1, 0)
            .unwrap_err();
        assert_eq!(err, LotteryError::Unauthorized.into());
        assert_eq!(lottery.round, before.round);
        assert_eq!(lottery.randomness, before.randomness);
    }

    #[test]
    fn unfunded_oracle_leaves_the_round_open() {
        let mut lottery = sample_lottery();
        let controller = lottery.controller;
        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();

        let oracle_fee = lottery.config.oracle_fee;
        let err = OracleFunding::from_vault(oracle_fee - 1, oracle_fee)
            .and_then(|funding| {
                lottery.close_round(&controller, funding, Pubkey::new_unique(), 1, 0)
            })
            .unwrap_err();
        assert_eq!(err, LotteryError::InsufficientTokenBalance.into());
        assert_eq!(lottery.status(), RoundStatus::Open);
        assert!(lottery.randomness.pending.is_none());

        close(&mut lottery, Pubkey::new_unique(), 1, 0).unwrap();
        assert_eq!(
            lottery.randomness.pending.unwrap().oracle_fee,
            oracle_fee
        );
    }

    #[test]
    fn prize_only_goes_to_the_selected_entrant() {
        let mut lottery = sample_lottery();
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let request_id = Pubkey::new_unique();
        start(&mut lottery, FEE).unwrap();
        lottery.enter(a, FEE, FEE).unwrap();
        lottery.enter(b, FEE, FEE).unwrap();
        close(&mut lottery, request_id, 5, 0).unwrap();

        let settlement = lottery
            .prepare_settlement(&request_id, 5, &random(7))
            .unwrap();
        assert!(settlement.ensure_recipient(&b).is_ok());
        for other in [a, Pubkey::new_unique()] {
            let err = settlement.ensure_recipient(&other).unwrap_err();
            assert_eq!(err, LotteryError::WinnerAccountMismatch.into());
        }
        assert_eq!(lottery.status(), RoundStatus::Calculating);
    }

    #[test]
    fn entering_outside_open_changes_nothing() {
        let mut lottery = sample_lottery();
        let err = lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap_err();
        assert_eq!(err, LotteryError::LotteryNotOpen.into());
        assert_eq!(lottery.ledger.balance, 0);

        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        close(&mut lottery, Pubkey::new_unique(), 1, 0).unwrap();
        let before = lottery.clone();

        let err = lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap_err();
        assert_eq!(err, LotteryError::LotteryNotOpen.into());
        assert_eq!(lottery.round, before.round);
        assert_eq!(lottery.ledger, before.ledger);
    }

    #[test]
    fn fee_boundary() {
        let mut lottery = sample_lottery();
        start(&mut lottery, FEE).unwrap();

        let err = lottery
            .enter(Pubkey::new_unique(), FEE - 1, FEE)
            .unwrap_err();
        assert_eq!(err, LotteryError::BelowMinimumFee.into());
        assert!(lottery.round.entrants.is_empty());

        assert_eq!(lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap(), 1);
    }

    #[test]
    fn closing_requires_an_open_round_with_entrants() {
        let mut lottery = sample_lottery();
        let err = close(&mut lottery, Pubkey::new_unique(), 1, 0).unwrap_err();
        assert_eq!(err, LotteryError::LotteryNotOpen.into());

        start(&mut lottery, FEE).unwrap();
        let err = close(&mut lottery, Pubkey::new_unique(), 1, 0).unwrap_err();
        assert_eq!(err, LotteryError::NoEntrants.into());
        assert_eq!(lottery.status(), RoundStatus::Open);
        assert!(lottery.randomness.pending.is_none());
    }

    #[test]
    fn replayed_callback_is_unknown() {
        let mut lottery = sample_lottery();
        let request_id = Pubkey::new_unique();
        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        close(&mut lottery, request_id, 5, 0).unwrap();
        let settlement = lottery
            .prepare_settlement(&request_id, 5, &random(3))
            .unwrap();
        lottery.complete_settlement(&settlement).unwrap();
        let after_first = lottery.clone();

        let err = lottery
            .prepare_settlement(&request_id, 5, &random(3))
            .unwrap_err();
        assert_eq!(err, LotteryError::UnknownRequest.into());
        let err = lottery.complete_settlement(&settlement).unwrap_err();
        assert_eq!(err, LotteryError::NotCalculating.into());

        assert_eq!(lottery.round, after_first.round);
        assert_eq!(lottery.ledger, after_first.ledger);
        assert_eq!(lottery.randomness, after_first.randomness);
    }

    #[test]
    fn foreign_callbacks_are_rejected() {
        let mut lottery = sample_lottery();
        let request_id = Pubkey::new_unique();
        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();

        let err = lottery
            .prepare_settlement(&request_id, 5, &random(3))
            .unwrap_err();
        assert_eq!(err, LotteryError::UnknownRequest.into());

        close(&mut lottery, request_id, 5, 0).unwrap();
        let err = lottery
            .prepare_settlement(&Pubkey::new_unique(), 5, &random(3))
            .unwrap_err();
        assert_eq!(err, LotteryError::UnknownRequest.into());
        assert_eq!(lottery.status(), RoundStatus::Calculating);
    }

    #[test]
    fn pending_request_outside_calculating_is_not_settled() {
        let mut lottery = sample_lottery();
        let request_id = Pubkey::new_unique();
        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        lottery
            .randomness
            .request(OracleFunding { amount: 0 }, request_id, 1, 5, 0)
            .unwrap();

        let err = lottery
            .prepare_settlement(&request_id, 5, &random(0))
            .unwrap_err();
        assert_eq!(err, LotteryError::NotCalculating.into());
    }

    #[test]
    fn unfinished_payout_keeps_the_round_calculating() {
        let mut lottery = sample_lottery();
        let request_id = Pubkey::new_unique();
        start(&mut lottery, FEE).unwrap();
        lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        close(&mut lottery, request_id, 5, 0).unwrap();

        // the prize transfer failed, so complete_settlement never ran
        let settlement = lottery
            .prepare_settlement(&request_id, 5, &random(0))
            .unwrap();
        assert_eq!(lottery.status(), RoundStatus::Calculating);
        assert!(lottery.randomness.pending.is_some());

        // an operator retry settles normally
        let retry = lottery
            .prepare_settlement(&request_id, 5, &random(0))
            .unwrap();
        assert_eq!(retry, settlement);
        lottery.complete_settlement(&retry).unwrap();
        assert_eq!(lottery.status(), RoundStatus::Closed);
    }

    #[test]
    fn config_validation() {
        assert!(sample_lottery().config.validate().is_ok());

        let mut config = sample_lottery().config;
        config.entrance_fee_usd = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            LotteryError::InvalidConfig.into()
        );

        let mut config = sample_lottery().config;
        config.max_price_age = MAX_PRICE_AGE_LIMIT + 1;
        assert_eq!(
            config.validate().unwrap_err(),
            LotteryError::InvalidConfig.into()
        );

        let mut config = sample_lottery().config;
        config.price_feed_id = [0u8; 32];
        assert_eq!(
            config.validate().unwrap_err(),
            LotteryError::InvalidConfig.into()
        );
    }

    #[test]
    fn allocated_space_fits_a_full_round() {
        let mut lottery = sample_lottery();
        start(&mut lottery, FEE).unwrap();
        for _ in 0..MAX_ENTRANTS {
            lottery.enter(Pubkey::new_unique(), FEE, FEE).unwrap();
        }
        lottery
            .randomness
            .request(OracleFunding { amount: 1 }, Pubkey::new_unique(), 1, 1, 1)
            .unwrap();
        lottery.round.winner = Some(Pubkey::new_unique());

        let mut bytes = Vec::new();
        lottery.serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), Lottery::INIT_SPACE);
        assert!(8 + Lottery::INIT_SPACE <= 10 * 1024);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn each_admitted_entry_adds_exactly_one_entrant(
                attempts in prop::collection::vec((0u64..2_000, 1u64..2_000), 0..64)
            ) {
                let mut lottery = sample_lottery();
                start(&mut lottery, 1_000).unwrap();

                for (amount, fee) in attempts {
                    let before = lottery.round.entrants.len();
                    let balance = lottery.ledger.balance;
                    let address = Pubkey::new_unique();
                    match lottery.enter(address, amount, fee) {
                        Ok(count) => {
                            prop_assert!(amount >= fee);
                            prop_assert_eq!(count as usize, before + 1);
                            prop_assert_eq!(
                                *lottery.round.entrants.last().unwrap(),
                                Entrant { address, amount }
                            );
                            prop_assert_eq!(lottery.ledger.balance, balance + amount);
                        }
                        Err(_) => {
                            prop_assert!(amount < fee);
                            prop_assert_eq!(lottery.round.entrants.len(), before);
                            prop_assert_eq!(lottery.ledger.balance, balance);
                        }
                    }
                }

                let deposited: u64 = lottery.round.entrants.iter().map(|e| e.amount).sum();
                prop_assert_eq!(lottery.ledger.balance, deposited);
            }

            #[test]
            fn settlement_pays_the_whole_balance_to_the_indexed_entrant(
                amounts in prop::collection::vec(1u64..1_000_000, 1..32),
                seed in any::<[u8; 32]>()
            ) {
                let mut lottery = sample_lottery();
                let request_id = Pubkey::new_unique();
                start(&mut lottery, 1).unwrap();
                for amount in &amounts {
                    lottery.enter(Pubkey::new_unique(), *amount, 1).unwrap();
                }
                let entrants = lottery.round.entrants.clone();
                close(&mut lottery, request_id, 9, 0).unwrap();

                let settlement = lottery.prepare_settlement(&request_id, 9, &seed).unwrap();
                let expected = winner_index(&seed, entrants.len()).unwrap();
                prop_assert_eq!(settlement.winner, entrants[expected].address);
                prop_assert_eq!(settlement.prize, amounts.iter().sum::<u64>());

                lottery.complete_settlement(&settlement).unwrap();
                prop_assert_eq!(lottery.ledger.balance, 0);
                prop_assert_eq!(lottery.status(), RoundStatus::Closed);
            }
        }
    }
}
