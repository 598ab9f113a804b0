#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod moneyline_bets {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        treasury: Pubkey,
        token_mint: Pubkey,
        operator_authorities: Vec<Pubkey>,
        injector_authorities: Vec<Pubkey>,
    ) -> Result<()> {
        initialize::handler(
            ctx,
            treasury,
            token_mint,
            operator_authorities,
            injector_authorities,
        )
    }

    pub fn grant_role(ctx: Context<GrantRole>, role: Role, authority: Pubkey) -> Result<()> {
        grant_role::handler(ctx, role, authority)
    }

    pub fn revoke_role(ctx: Context<RevokeRole>, role: Role, authority: Pubkey) -> Result<()> {
        revoke_role::handler(ctx, role, authority)
    }

    pub fn open_market(ctx: Context<OpenMarket>, request: OpenMarketRequest) -> Result<()> {
        open_market::handler(ctx, request)
    }

    pub fn make_bet(
        ctx: Context<MakeBet>,
        choice: Outcome,
        ticket_count: u64,
        paid_amount: u64,
    ) -> Result<()> {
        make_bet::handler(ctx, choice, ticket_count, paid_amount)
    }

    pub fn inject_bet(ctx: Context<InjectBet>, amount: u64) -> Result<()> {
        inject_bet::handler(ctx, amount)
    }

    pub fn close_market(ctx: Context<CloseMarket>, outcome: Outcome) -> Result<()> {
        close_market::handler(ctx, outcome)
    }

    pub fn finalize_bet<'info>(
        ctx: Context<'_, '_, 'info, 'info, FinalizeBet<'info>>,
        offset: u64,
        limit: u64,
        is_last: bool,
    ) -> Result<()> {
        finalize_bet::handler(ctx, offset, limit, is_last)
    }

    pub fn invalidate_bet<'info>(
        ctx: Context<'_, '_, 'info, 'info, InvalidateBet<'info>>,
        choice_filter: Outcome,
        offset: u64,
        limit: u64,
        is_last: bool,
    ) -> Result<()> {
        invalidate_bet::handler(ctx, choice_filter, offset, limit, is_last)
    }

    pub fn claim_bet(ctx: Context<ClaimBet>) -> Result<()> {
        claim_bet::handler(ctx)
    }

    pub fn settle_treasury(ctx: Context<SettleTreasury>) -> Result<()> {
        settle_treasury::handler(ctx)
    }
}
