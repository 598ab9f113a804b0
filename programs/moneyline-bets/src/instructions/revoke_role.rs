use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RevokeRole<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> RevokeRole<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            MoneylineError::Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<RevokeRole>, role: Role, authority: Pubkey) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let members = ctx.accounts.config.role_members_mut(role);
    members.retain(|member| *member != authority);

    emit!(RoleRevoked { role, authority });

    Ok(())
}
