use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct InjectBet<'info> {
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

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), market.key().as_ref()],
        bump = market.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer
    )]
    pub injector_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

impl<'info> InjectBet<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.is_injector(&self.signer.key()),
            MoneylineError::Unauthorized
        );

        // top-ups before close raise the prize, after close only the sweep;
        // once finalized the sweep has run and the funds would be stranded
        require!(
            self.market.status != MarketStatus::Finalized,
            MoneylineError::AlreadyFinalized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<InjectBet>, amount: u64) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    // custody the injected funds
    let transfer_accounts = Transfer {
        from: ctx.accounts.injector_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    let market = &mut ctx.accounts.market;
    market.injected_amount = market
        .injected_amount
        .checked_add(amount)
        .ok_or(MoneylineError::Overflow)?;

    emit!(BetInjected {
        market_id: market.id,
        injector: ctx.accounts.signer.key(),
        amount,
    });

    Ok(())
}
