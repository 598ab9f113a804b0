use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CloseMarket<'info> {
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

impl<'info> CloseMarket<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.is_operator(&self.signer.key()),
            MoneylineError::Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<CloseMarket>, outcome: Outcome) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let market = &mut ctx.accounts.market;
    Market::close(market, outcome, Clock::get()?.unix_timestamp)?;

    emit!(MarketClosed {
        id: market.id,
        outcome,
        prize_per_ticket: market.prize_per_ticket,
    });

    Ok(())
}
