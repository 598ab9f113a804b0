use crate::constants::*;
use anchor_lang::prelude::*;

#[event]
pub struct RoleGranted {
    pub role: Role,
    pub authority: Pubkey,
}

#[event]
pub struct RoleRevoked {
    pub role: Role,
    pub authority: Pubkey,
}

#[event]
pub struct TreasurySettled {
    pub market_id: u64,
    pub amount: u64,
}
