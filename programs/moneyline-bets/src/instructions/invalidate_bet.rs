use crate::{constants::*, error::MoneylineError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InvalidateBet<'info> {
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

impl<'info> InvalidateBet<'info> {
    pub fn validate(&self, choice_filter: Outcome) -> Result<()> {
        require!(
            self.config.is_operator(&self.signer.key()),
            MoneylineError::Unauthorized
        );

        self.market.ensure_invalidatable()?;

        require!(choice_filter.is_choice(), MoneylineError::InvalidChoice);

        Ok(())
    }
}

/// Refunds full stakes, commission included, to the `[offset, offset +
/// limit)` slice of one choice bucket of a canceled market. One invocation
/// per non-empty bucket is needed to reach every participant; `is_last`
/// closes the book and leaves injected funds to the treasury.
pub fn handler(
    ctx: Context<InvalidateBet>,
    choice_filter: Outcome,
    offset: u64,
    limit: u64,
    is_last: bool,
) -> Result<()> {
    // validate
    ctx.accounts.validate(choice_filter)?;

    let market_key = ctx.accounts.market.key();
    let market = &mut ctx.accounts.market;

    let page = market.page(choice_filter, offset, limit)?;
    require!(
        ctx.remaining_accounts.len() == page.len(),
        MoneylineError::InvalidRemainingAccountsLength
    );

    for (acc_info, participant) in ctx.remaining_accounts.iter().zip(page.iter()) {
        let mut wager = load_page_wager(acc_info, ctx.program_id, &market_key, participant)?;

        wager.claimable = wager
            .claimable
            .checked_add(market.refund_for(wager.ticket_count)?)
            .ok_or(MoneylineError::Overflow)?;
        market.return_commission(wager.ticket_count)?;

        store_page_wager(acc_info, &wager)?;
    }

    if is_last {
        market.fold_injected()?;
    }

    emit!(MarketInvalidated {
        id: market.id,
        choice: choice_filter,
        refunded_wagers: page.len() as u64,
        is_last,
    });

    Ok(())
}
