use crate::{constants::*, error::MoneylineError, utils::*};
use anchor_lang::prelude::*;

/// Per-choice aggregates plus the insertion-ordered participant bucket that
/// finalize/invalidate page over.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, InitSpace)]
pub struct ChoicePool {
    pub total_ticket_count: u64, // Tickets staked on this choice.
    pub total_size: u64,         // Stake net of commission on this choice.
    #[max_len(MAX_PARTICIPANTS_PER_CHOICE)]
    pub participants: Vec<Pubkey>, // Bucket in insertion order; one entry per participant.
}

#[account]
#[derive(InitSpace)]
pub struct Market {
    // --- Identity ---
    pub id: u64,        // Unique identifier, incremental from config.latest_market_id.
    pub code: [u8; 32], // keccak-256 of the market category label.
    #[max_len(MAX_SIDE_LABEL_LEN)]
    pub side_a: String, // Display label of side A.
    #[max_len(MAX_SIDE_LABEL_LEN)]
    pub side_b: String, // Display label of side B.
    pub opens_at: i64,  // When wagering opens.
    pub closes_at: i64, // When wagering ends; close is allowed from here on.

    // --- Pricing ---
    pub price_per_ticket: u64,      // Stake per ticket.
    pub commission_per_ticket: u64, // Commission withheld per ticket, <= price_per_ticket.
    pub prize_per_ticket: u64,      // Computed once at close; stays 0 for Cancel.

    // --- Accounting ---
    pub injected_amount: u64, // Externally injected pool top-ups.
    pub treasury_amount: u64, // Accrued commission and swept remainders, until settled.

    // --- State ---
    pub outcome: Outcome,      // None while open.
    pub status: MarketStatus,  // Open -> Closed -> Finalized.
    pub win_pool: ChoicePool,  // Aggregates and bucket for Win.
    pub draw_pool: ChoicePool, // Aggregates and bucket for Draw.
    pub lose_pool: ChoicePool, // Aggregates and bucket for Lose.

    // --- Metadata ---
    pub created_at: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Market {
    pub fn pool(&self, choice: Outcome) -> Option<&ChoicePool> {
        match choice {
            Outcome::Win => Some(&self.win_pool),
            Outcome::Draw => Some(&self.draw_pool),
            Outcome::Lose => Some(&self.lose_pool),
            _ => None,
        }
    }

    pub fn pool_mut(&mut self, choice: Outcome) -> Option<&mut ChoicePool> {
        match choice {
            Outcome::Win => Some(&mut self.win_pool),
            Outcome::Draw => Some(&mut self.draw_pool),
            Outcome::Lose => Some(&mut self.lose_pool),
            _ => None,
        }
    }

    /// Net stakes across all choices plus injected funds.
    pub fn total_pool(&self) -> Result<u64> {
        self.win_pool
            .total_size
            .checked_add(self.draw_pool.total_size)
            .and_then(|x| x.checked_add(self.lose_pool.total_size))
            .and_then(|x| x.checked_add(self.injected_amount))
            .ok_or_else(|| error!(MoneylineError::Overflow))
    }

    /// Records a wager into the per-choice aggregates and accrues commission.
    /// `is_first` marks the participant's first bet on this market; only then
    /// do they join the choice bucket.
    pub fn record_wager(
        &mut self,
        participant: Pubkey,
        choice: Outcome,
        ticket_count: u64,
        paid_amount: u64,
        now: i64,
        is_first: bool,
    ) -> Result<()> {
        require!(self.status == MarketStatus::Open, MoneylineError::MarketNotOpen);
        require!(now < self.closes_at, MoneylineError::BettingClosed);
        require!(choice.is_choice(), MoneylineError::InvalidChoice);
        require!(ticket_count > 0, MoneylineError::InvalidTicketCount);

        let expected = self
            .price_per_ticket
            .checked_mul(ticket_count)
            .ok_or(MoneylineError::Overflow)?;
        require!(paid_amount == expected, MoneylineError::AmountMismatch);

        let net_per_ticket = self
            .price_per_ticket
            .checked_sub(self.commission_per_ticket)
            .ok_or(MoneylineError::Underflow)?;
        let net_size = net_per_ticket
            .checked_mul(ticket_count)
            .ok_or(MoneylineError::Overflow)?;
        let commission = self
            .commission_per_ticket
            .checked_mul(ticket_count)
            .ok_or(MoneylineError::Overflow)?;

        let pool = self.pool_mut(choice).ok_or(MoneylineError::InvalidChoice)?;
        if is_first {
            require!(
                pool.participants.len() < MAX_PARTICIPANTS_PER_CHOICE,
                MoneylineError::MarketFull
            );
            pool.participants.push(participant);
        }
        pool.total_ticket_count = pool
            .total_ticket_count
            .checked_add(ticket_count)
            .ok_or(MoneylineError::Overflow)?;
        pool.total_size = pool
            .total_size
            .checked_add(net_size)
            .ok_or(MoneylineError::Overflow)?;

        self.treasury_amount = self
            .treasury_amount
            .checked_add(commission)
            .ok_or(MoneylineError::Overflow)?;

        Ok(())
    }

    /// Closes the market with the given outcome and freezes the prize per
    /// ticket. The prize is never recomputed afterwards; injections arriving
    /// later only inflate the remainder swept to the treasury.
    pub fn close(&mut self, outcome: Outcome, now: i64) -> Result<()> {
        require!(self.status == MarketStatus::Open, MoneylineError::MarketNotOpen);
        require!(now >= self.closes_at, MoneylineError::BettingPeriodNotEnded);
        require!(outcome != Outcome::None, MoneylineError::InvalidOutcome);

        if outcome != Outcome::Cancel {
            let winning_tickets = self
                .pool(outcome)
                .ok_or(MoneylineError::InvalidOutcome)?
                .total_ticket_count;
            self.prize_per_ticket = prize_per_ticket(self.total_pool()?, winning_tickets);
        }

        self.outcome = outcome;
        self.status = MarketStatus::Closed;
        Ok(())
    }

    /// Gate for finalize pages.
    pub fn ensure_finalizable(&self) -> Result<()> {
        match self.status {
            MarketStatus::Finalized => err!(MoneylineError::AlreadyFinalized),
            MarketStatus::Open => err!(MoneylineError::NotClosed),
            MarketStatus::Closed => {
                require!(self.outcome != Outcome::Cancel, MoneylineError::MarketCanceled);
                Ok(())
            }
        }
    }

    /// Gate for invalidate pages.
    pub fn ensure_invalidatable(&self) -> Result<()> {
        require!(
            self.status == MarketStatus::Closed && self.outcome == Outcome::Cancel,
            MoneylineError::NotCanceledOrAlreadyFinalized
        );
        Ok(())
    }

    /// The `[offset, offset + limit)` slice of a choice bucket, clamped to
    /// the bucket length. Stable across calls: buckets only grow while the
    /// market is open, and settlement requires it closed.
    pub fn page(&self, choice: Outcome, offset: u64, limit: u64) -> Result<Vec<Pubkey>> {
        let pool = self.pool(choice).ok_or(MoneylineError::InvalidChoice)?;
        let (start, end) = page_bounds(pool.participants.len(), offset, limit);
        Ok(pool.participants[start..end].to_vec())
    }

    /// Prize owed to a winning wager.
    pub fn prize_for(&self, ticket_count: u64) -> Result<u64> {
        self.prize_per_ticket
            .checked_mul(ticket_count)
            .ok_or_else(|| error!(MoneylineError::Overflow))
    }

    /// Full-stake refund for a wager on a canceled market, commission
    /// included.
    pub fn refund_for(&self, ticket_count: u64) -> Result<u64> {
        self.price_per_ticket
            .checked_mul(ticket_count)
            .ok_or_else(|| error!(MoneylineError::Overflow))
    }

    /// Returns the commission accrued on refunded tickets to the refund
    /// pool; on a void market it was never earned.
    pub fn return_commission(&mut self, ticket_count: u64) -> Result<()> {
        let commission = self
            .commission_per_ticket
            .checked_mul(ticket_count)
            .ok_or(MoneylineError::Overflow)?;
        self.treasury_amount = self
            .treasury_amount
            .checked_sub(commission)
            .ok_or(MoneylineError::Underflow)?;
        Ok(())
    }

    /// Terminal step of finalize: sweeps everything not owed to winners into
    /// the treasury and locks the market. The remainder of the floor
    /// division, stakes of markets nobody won, and post-close injections all
    /// end up here.
    pub fn sweep_remainder(&mut self) -> Result<u64> {
        let owed = self
            .pool(self.outcome)
            .map(|p| p.total_ticket_count)
            .unwrap_or(0)
            .checked_mul(self.prize_per_ticket)
            .ok_or(MoneylineError::Overflow)?;
        let swept = self
            .total_pool()?
            .checked_sub(owed)
            .ok_or(MoneylineError::Underflow)?;
        self.treasury_amount = self
            .treasury_amount
            .checked_add(swept)
            .ok_or(MoneylineError::Overflow)?;
        self.status = MarketStatus::Finalized;
        Ok(swept)
    }

    /// Terminal step of invalidate: injected funds are never refunded to
    /// participants, so they fold into the treasury.
    pub fn fold_injected(&mut self) -> Result<()> {
        self.treasury_amount = self
            .treasury_amount
            .checked_add(self.injected_amount)
            .ok_or(MoneylineError::Overflow)?;
        self.status = MarketStatus::Finalized;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::ERROR_CODE_OFFSET;

    const DAY: i64 = 86_400;

    fn market(price_per_ticket: u64, commission_per_ticket: u64) -> Market {
        Market {
            id: 1,
            code: [0u8; 32],
            side_a: "Republic of Korea".to_string(),
            side_b: "Portugal".to_string(),
            opens_at: 0,
            closes_at: DAY,
            price_per_ticket,
            commission_per_ticket,
            prize_per_ticket: 0,
            injected_amount: 0,
            treasury_amount: 0,
            outcome: Outcome::None,
            status: MarketStatus::Open,
            win_pool: ChoicePool::default(),
            draw_pool: ChoicePool::default(),
            lose_pool: ChoicePool::default(),
            created_at: 0,
            bump: 255,
            vault_bump: 255,
        }
    }

    fn participant(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    fn bet(m: &mut Market, who: u8, choice: Outcome, tickets: u64) {
        let paid = m.price_per_ticket * tickets;
        m.record_wager(participant(who), choice, tickets, paid, 1, true)
            .unwrap();
    }

    fn assert_err<T: std::fmt::Debug>(res: Result<T>, expected: MoneylineError) {
        let code = match res.unwrap_err() {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
        };
        assert_eq!(code, ERROR_CODE_OFFSET + expected as u32);
    }

    #[test]
    fn records_wagers_into_choice_buckets() {
        let mut m = market(10, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Win, 5);
        bet(&mut m, 3, Outcome::Lose, 5);

        assert_eq!(m.win_pool.total_ticket_count, 15);
        assert_eq!(m.win_pool.total_size, 150);
        assert_eq!(m.win_pool.participants, vec![participant(1), participant(2)]);
        assert_eq!(m.lose_pool.total_ticket_count, 5);
        assert_eq!(m.treasury_amount, 0);
    }

    #[test]
    fn later_bets_extend_without_rejoining_the_bucket() {
        let mut m = market(10, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        m.record_wager(participant(1), Outcome::Win, 5, 50, 1, false)
            .unwrap();

        assert_eq!(m.win_pool.total_ticket_count, 15);
        assert_eq!(m.win_pool.participants.len(), 1);
    }

    #[test]
    fn commission_accrues_to_treasury_and_shrinks_pool_size() {
        let mut m = market(10, 1);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Win, 5);

        // 13.5 of 15 staked, at a 10% commission
        assert_eq!(m.win_pool.total_size, 135);
        assert_eq!(m.treasury_amount, 15);
    }

    #[test]
    fn rejects_invalid_wagers() {
        let mut m = market(10, 1);
        assert_err(
            m.record_wager(participant(1), Outcome::None, 10, 100, 1, true),
            MoneylineError::InvalidChoice,
        );
        assert_err(
            m.record_wager(participant(1), Outcome::Cancel, 10, 100, 1, true),
            MoneylineError::InvalidChoice,
        );
        assert_err(
            m.record_wager(participant(1), Outcome::Win, 0, 0, 1, true),
            MoneylineError::InvalidTicketCount,
        );
        assert_err(
            m.record_wager(participant(1), Outcome::Win, 10, 99, 1, true),
            MoneylineError::AmountMismatch,
        );
        assert_err(
            m.record_wager(participant(1), Outcome::Win, 10, 100, DAY, true),
            MoneylineError::BettingClosed,
        );

        m.close(Outcome::Cancel, DAY).unwrap();
        assert_err(
            m.record_wager(participant(1), Outcome::Win, 10, 100, DAY, true),
            MoneylineError::MarketNotOpen,
        );
    }

    #[test]
    fn close_computes_floor_prize_per_ticket() {
        // 1 token at 9 decimals per ticket, no commission. Pool of 20 split
        // over 15 winning tickets leaves a remainder of 5 base units.
        let one = 1_000_000_000u64;
        let mut m = market(one, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Lose, 5);
        bet(&mut m, 3, Outcome::Win, 5);

        m.close(Outcome::Win, DAY).unwrap();

        assert_eq!(m.status, MarketStatus::Closed);
        assert_eq!(m.outcome, Outcome::Win);
        assert_eq!(m.prize_per_ticket, 20 * one / 15);

        assert_eq!(m.prize_for(10).unwrap(), 20 * one / 15 * 10);
        let swept = m.sweep_remainder().unwrap();
        assert_eq!(swept, 20 * one - (20 * one / 15) * 15);
        assert_eq!(m.status, MarketStatus::Finalized);
    }

    #[test]
    fn close_with_commission_and_injection() {
        let mut m = market(10, 1);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Lose, 5);
        bet(&mut m, 3, Outcome::Win, 5);
        m.injected_amount = 7;

        // pool = 9 * 20 + 7 = 187, prize = 187 / 15 = 12
        m.close(Outcome::Win, DAY).unwrap();
        assert_eq!(m.prize_per_ticket, 12);

        // commission 20, plus remainder 187 - 180 = 7
        let swept = m.sweep_remainder().unwrap();
        assert_eq!(swept, 7);
        assert_eq!(m.treasury_amount, 27);
    }

    #[test]
    fn prize_frozen_at_close_despite_late_injection() {
        let mut m = market(10, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        m.close(Outcome::Win, DAY).unwrap();
        assert_eq!(m.prize_per_ticket, 10);

        // a late top-up does not change the prize, only the sweep
        m.injected_amount = 100;
        let swept = m.sweep_remainder().unwrap();
        assert_eq!(m.prize_per_ticket, 10);
        assert_eq!(swept, 100);
    }

    #[test]
    fn whole_pool_goes_to_treasury_when_nobody_won() {
        let mut m = market(10, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Win, 5);
        bet(&mut m, 3, Outcome::Win, 5);

        m.close(Outcome::Lose, DAY).unwrap();
        assert_eq!(m.prize_per_ticket, 0);

        let swept = m.sweep_remainder().unwrap();
        assert_eq!(swept, 200);
        assert_eq!(m.treasury_amount, 200);
    }

    #[test]
    fn close_gates() {
        let mut m = market(10, 0);
        assert_err(m.close(Outcome::Win, DAY - 1), MoneylineError::BettingPeriodNotEnded);
        assert_err(m.close(Outcome::None, DAY), MoneylineError::InvalidOutcome);

        m.close(Outcome::Win, DAY).unwrap();
        assert_err(m.close(Outcome::Win, DAY), MoneylineError::MarketNotOpen);
    }

    #[test]
    fn finalize_gates() {
        let mut m = market(10, 0);
        assert_err(m.ensure_finalizable(), MoneylineError::NotClosed);

        m.close(Outcome::Win, DAY).unwrap();
        m.ensure_finalizable().unwrap();

        m.sweep_remainder().unwrap();
        assert_err(m.ensure_finalizable(), MoneylineError::AlreadyFinalized);

        let mut canceled = market(10, 0);
        canceled.close(Outcome::Cancel, DAY).unwrap();
        assert_err(canceled.ensure_finalizable(), MoneylineError::MarketCanceled);
    }

    #[test]
    fn invalidate_refunds_full_stakes_and_leaves_injection_to_treasury() {
        let mut m = market(10, 1);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Lose, 5);
        bet(&mut m, 3, Outcome::Win, 5);
        m.injected_amount = 20;

        m.close(Outcome::Cancel, DAY).unwrap();
        assert_eq!(m.prize_per_ticket, 0);
        m.ensure_invalidatable().unwrap();

        // refunds include the commission share
        assert_eq!(m.refund_for(10).unwrap(), 100);
        m.return_commission(10).unwrap();
        m.return_commission(5).unwrap();
        m.return_commission(5).unwrap();
        assert_eq!(m.treasury_amount, 0);

        m.fold_injected().unwrap();
        assert_eq!(m.treasury_amount, 20);
        assert_eq!(m.status, MarketStatus::Finalized);
        assert_err(m.ensure_invalidatable(), MoneylineError::NotCanceledOrAlreadyFinalized);
    }

    #[test]
    fn invalidate_rejected_on_non_canceled_market() {
        let mut m = market(10, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        m.close(Outcome::Win, DAY).unwrap();
        assert_err(m.ensure_invalidatable(), MoneylineError::NotCanceledOrAlreadyFinalized);
    }

    #[test]
    fn pages_clamp_to_bucket_length() {
        let mut m = market(10, 0);
        bet(&mut m, 1, Outcome::Win, 10);
        bet(&mut m, 2, Outcome::Lose, 5);
        bet(&mut m, 3, Outcome::Win, 5);

        assert_eq!(m.page(Outcome::Win, 0, 1).unwrap(), vec![participant(1)]);
        assert_eq!(m.page(Outcome::Win, 1, 1).unwrap(), vec![participant(3)]);
        assert_eq!(m.page(Outcome::Win, 0, 100).unwrap().len(), 2);
        assert!(m.page(Outcome::Win, 2, 100).unwrap().is_empty());
        assert!(m.page(Outcome::Draw, 0, 100).unwrap().is_empty());
        assert_err(m.page(Outcome::None, 0, 100), MoneylineError::InvalidChoice);
    }

    #[test]
    fn payout_plus_treasury_never_exceeds_pool() {
        let mut m = market(7, 2);
        bet(&mut m, 1, Outcome::Win, 3);
        bet(&mut m, 2, Outcome::Draw, 11);
        bet(&mut m, 3, Outcome::Win, 6);
        m.injected_amount = 13;

        let collected = 7 * (3 + 11 + 6) + 13;
        m.close(Outcome::Win, DAY).unwrap();

        let owed = m.prize_for(3).unwrap() + m.prize_for(6).unwrap();
        m.sweep_remainder().unwrap();
        assert!(owed + m.treasury_amount <= collected);
        assert_eq!(owed + m.treasury_amount, collected);
    }
}
