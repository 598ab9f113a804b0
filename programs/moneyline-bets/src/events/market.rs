use crate::constants::*;
use anchor_lang::prelude::*;

#[event]
pub struct MarketOpened {
    pub id: u64,
    pub opens_at: i64,
    pub closes_at: i64,
    pub price_per_ticket: u64,
}

#[event]
pub struct MarketClosed {
    pub id: u64,
    pub outcome: Outcome,
    pub prize_per_ticket: u64,
}

#[event]
pub struct MarketFinalized {
    pub id: u64,
    pub swept_to_treasury: u64,
}

#[event]
pub struct MarketInvalidated {
    pub id: u64,
    pub choice: Outcome,
    pub refunded_wagers: u64,
    pub is_last: bool,
}
