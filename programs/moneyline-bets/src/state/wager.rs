use crate::constants::*;
use anchor_lang::prelude::*;

/// One participant's position on one market. The choice is fixed by the
/// first bet; later bets on the same market may only add tickets to it.
#[account]
#[derive(InitSpace)]
pub struct Wager {
    // --- Identity ---
    pub market: Pubkey,      // The market this wager belongs to.
    pub participant: Pubkey, // The bettor.

    // --- Position ---
    pub choice: Outcome,   // Win, Draw or Lose; never None once the wager exists.
    pub ticket_count: u64, // Total tickets bought across all bets.

    // --- Settlement ---
    pub claimable: u64, // Amount owed to the participant; zeroed on claim.

    // --- Metadata ---
    pub created_at: i64,
    pub bump: u8,
}
