use crate::{constants::*, error::MoneylineError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Config::INIT_SPACE,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn validate(
        &self,
        operator_authorities: &[Pubkey],
        injector_authorities: &[Pubkey],
    ) -> Result<()> {
        // roles may also be granted later; only the capacity is enforced here
        require!(
            operator_authorities.len() <= MAX_ROLE_MEMBERS,
            MoneylineError::MaxRoleMembersReached
        );

        require!(
            injector_authorities.len() <= MAX_ROLE_MEMBERS,
            MoneylineError::MaxRoleMembersReached
        );

        Ok(())
    }
}

pub fn handler(
    ctx: Context<Initialize>,
    treasury: Pubkey,
    token_mint: Pubkey,
    operator_authorities: Vec<Pubkey>,
    injector_authorities: Vec<Pubkey>,
) -> Result<()> {
    // validate
    ctx.accounts
        .validate(&operator_authorities, &injector_authorities)?;

    let config = &mut ctx.accounts.config;

    // set fields
    config.admin = ctx.accounts.signer.key();
    config.operator_authorities = operator_authorities;
    config.injector_authorities = injector_authorities;
    config.token_mint = token_mint;
    config.treasury = treasury;
    config.latest_market_id = 0;
    config.version = 0;
    config.bump = ctx.bumps.config;

    Ok(())
}
