use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const CONFIG_SEED: &str = "config";
#[constant]
pub const MARKET_SEED: &str = "market";
#[constant]
pub const VAULT_SEED: &str = "vault";
#[constant]
pub const WAGER_SEED: &str = "wager";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Upper bound on each role membership list.
pub const MAX_ROLE_MEMBERS: usize = 16;

/// Upper bound on participants per choice bucket. The three buckets plus the
/// side labels must fit a single account allocation, which caps bucket size.
pub const MAX_PARTICIPANTS_PER_CHOICE: usize = 100;

/// Upper bound on a side display label, in bytes.
pub const MAX_SIDE_LABEL_LEN: usize = 64;

/// Enum for market outcomes. `None` is the pre-close placeholder; wagers may
/// only pick `Win`, `Draw` or `Lose`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum Outcome {
    None,
    Win,
    Draw,
    Lose,
    Cancel,
}

impl Outcome {
    /// Whether a participant may stake on this value.
    pub fn is_choice(&self) -> bool {
        matches!(self, Outcome::Win | Outcome::Draw | Outcome::Lose)
    }
}

/// Enum for market lifecycle status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum MarketStatus {
    Open,
    Closed,
    Finalized,
}

/// Enum for grantable roles
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Operator,
    Injector,
}
