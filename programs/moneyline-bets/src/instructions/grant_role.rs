use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct GrantRole<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,
}

impl<'info> GrantRole<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.signer.key() == self.config.admin,
            MoneylineError::Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<GrantRole>, role: Role, authority: Pubkey) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let members = ctx.accounts.config.role_members_mut(role);

    // granting an already-held role is a no-op
    if !members.contains(&authority) {
        require!(
            members.len() < MAX_ROLE_MEMBERS,
            MoneylineError::MaxRoleMembersReached
        );
        members.push(authority);
    }

    emit!(RoleGranted { role, authority });

    Ok(())
}
