use crate::constants::*;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Config {
    // --- Authorities ---
    pub admin: Pubkey, // The administrator, set at initialization; grants and revokes roles.
    #[max_len(MAX_ROLE_MEMBERS)]
    pub operator_authorities: Vec<Pubkey>, // Accounts allowed to run market lifecycle transitions.
    #[max_len(MAX_ROLE_MEMBERS)]
    pub injector_authorities: Vec<Pubkey>, // Accounts allowed to top up prize pools.

    // --- Token & Treasury ---
    pub token_mint: Pubkey, // The token used for all stakes, prizes and commission.
    pub treasury: Pubkey,   // The fixed recipient of settled commission.

    // --- Global State ---
    pub latest_market_id: u64, // Monotonic counter; the id of the most recently opened market.

    // --- Metadata ---
    pub version: u8,
    pub bump: u8,
}

impl Config {
    pub fn is_operator(&self, key: &Pubkey) -> bool {
        self.operator_authorities.contains(key)
    }

    pub fn is_injector(&self, key: &Pubkey) -> bool {
        self.injector_authorities.contains(key)
    }

    pub fn role_members_mut(&mut self, role: Role) -> &mut Vec<Pubkey> {
        match role {
            Role::Operator => &mut self.operator_authorities,
            Role::Injector => &mut self.injector_authorities,
        }
    }
}
