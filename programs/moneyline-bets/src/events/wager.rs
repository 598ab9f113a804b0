use crate::constants::*;
use anchor_lang::prelude::*;

#[event]
pub struct BetMade {
    pub market_id: u64,
    pub participant: Pubkey,
    pub choice: Outcome,
    pub ticket_count: u64,
}

#[event]
pub struct BetInjected {
    pub market_id: u64,
    pub injector: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BetClaimed {
    pub market_id: u64,
    pub participant: Pubkey,
    pub amount: u64,
}
