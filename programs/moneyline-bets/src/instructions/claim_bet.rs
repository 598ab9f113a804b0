use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct ClaimBet<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [MARKET_SEED.as_bytes(), &market.id.to_le_bytes()],
        bump = market.bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [WAGER_SEED.as_bytes(), market.key().as_ref(), signer.key().as_ref()],
        bump = wager.bump
    )]
    pub wager: Account<'info, Wager>,

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
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ClaimBet<'info> {
    pub fn validate(&self) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.wager.participant,
            MoneylineError::Unauthorized
        );

        require!(self.wager.claimable > 0, MoneylineError::NothingToClaim);

        Ok(())
    }
}

pub fn handler(ctx: Context<ClaimBet>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    // debit before the transfer; a second claim finds nothing
    let amount = ctx.accounts.wager.claimable;
    ctx.accounts.wager.claimable = 0;

    let market = &ctx.accounts.market;
    let transfer_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.bettor_token_account.to_account_info(),
        authority: market.to_account_info(),
    };
    let market_id = market.id;
    let seeds = &[
        MARKET_SEED.as_bytes(),
        &market_id.to_le_bytes(),
        &[market.bump],
    ];
    let signer = &[&seeds[..]];
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
        signer,
    );
    transfer(transfer_ctx, amount)?;

    emit!(BetClaimed {
        market_id,
        participant: ctx.accounts.signer.key(),
        amount,
    });

    Ok(())
}
