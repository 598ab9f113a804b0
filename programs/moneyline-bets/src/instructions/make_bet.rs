use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct MakeBet<'info> {
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
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Wager::INIT_SPACE,
        seeds = [WAGER_SEED.as_bytes(), market.key().as_ref(), signer.key().as_ref()],
        bump
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
    pub system_program: Program<'info, System>,
}

impl<'info> MakeBet<'info> {
    pub fn validate(&self, choice: Outcome) -> Result<()> {
        // the choice is fixed by the participant's first bet on this market
        if self.wager.ticket_count > 0 {
            require!(self.wager.choice == choice, MoneylineError::InvalidChoice);
        }

        Ok(())
    }
}

pub fn handler(
    ctx: Context<MakeBet>,
    choice: Outcome,
    ticket_count: u64,
    paid_amount: u64,
) -> Result<()> {
    // validate
    ctx.accounts.validate(choice)?;

    let is_first = ctx.accounts.wager.ticket_count == 0;
    let now = Clock::get()?.unix_timestamp;
    let participant = ctx.accounts.signer.key();

    let market = &mut ctx.accounts.market;
    market.record_wager(participant, choice, ticket_count, paid_amount, now, is_first)?;

    // custody the stake
    let transfer_accounts = Transfer {
        from: ctx.accounts.bettor_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, paid_amount)?;

    // set wager fields
    let wager = &mut ctx.accounts.wager;
    if is_first {
        wager.market = ctx.accounts.market.key();
        wager.participant = participant;
        wager.choice = choice;
        wager.claimable = 0;
        wager.created_at = now;
        wager.bump = ctx.bumps.wager;
    }
    wager.ticket_count = wager
        .ticket_count
        .checked_add(ticket_count)
        .ok_or(MoneylineError::Overflow)?;

    emit!(BetMade {
        market_id: ctx.accounts.market.id,
        participant,
        choice,
        ticket_count,
    });

    Ok(())
}
