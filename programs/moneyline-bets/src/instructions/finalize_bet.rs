use crate::{constants::*, error::MoneylineError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct FinalizeBet<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [MARKET_SEED.as_bytes(), &market.id.to_le_bytes()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,
}

impl<'info> FinalizeBet<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.is_operator(&self.signer.key()),
            MoneylineError::Unauthorized
        );

        self.market.ensure_finalizable()?;

        Ok(())
    }
}

/// Credits winners in the `[offset, offset + limit)` slice of the winning
/// bucket. Remaining accounts carry the wager PDAs of exactly that slice, in
/// bucket order. Ranges across calls must not overlap; re-processing a slot
/// credits it again.
pub fn handler(ctx: Context<FinalizeBet>, offset: u64, limit: u64, is_last: bool) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let market_key = ctx.accounts.market.key();
    let market = &mut ctx.accounts.market;

    let page = market.page(market.outcome, offset, limit)?;
    require!(
        ctx.remaining_accounts.len() == page.len(),
        MoneylineError::InvalidRemainingAccountsLength
    );

    for (acc_info, participant) in ctx.remaining_accounts.iter().zip(page.iter()) {
        let mut wager = load_page_wager(acc_info, ctx.program_id, &market_key, participant)?;

        wager.claimable = wager
            .claimable
            .checked_add(market.prize_for(wager.ticket_count)?)
            .ok_or(MoneylineError::Overflow)?;

        store_page_wager(acc_info, &wager)?;
    }

    if is_last {
        let swept = market.sweep_remainder()?;
        emit!(MarketFinalized {
            id: market.id,
            swept_to_treasury: swept,
        });
    }

    Ok(())
}
