use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer, Mint, Token, TokenAccount, Transfer},
};

#[derive(Accounts)]
pub struct SettleTreasury<'info> {
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

    /// CHECK: Treasury pubkey from config
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SettleTreasury<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.config.is_operator(&self.signer.key()),
            MoneylineError::Unauthorized
        );

        require!(
            self.treasury.key() == self.config.treasury,
            MoneylineError::InvalidTreasuryAuthority
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<SettleTreasury>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let market = &mut ctx.accounts.market;
    let amount = market.treasury_amount;

    // settling a zero balance is a no-op, not an error
    if amount > 0 {
        let transfer_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.treasury_token_account.to_account_info(),
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

        market.treasury_amount = 0;
    }

    emit!(TreasurySettled {
        market_id: market.id,
        amount,
    });

    Ok(())
}
