use crate::{constants::*, error::MoneylineError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_spl::token::{Mint, Token, TokenAccount};

/// Opening parameters for one market. Batched opens are a transaction
/// carrying one `open_market` instruction per request; each instruction
/// succeeds or fails on its own terms.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct OpenMarketRequest {
    pub code: String,
    pub side_a: String,
    pub side_b: String,
    pub opens_at: i64,
    pub closes_at: i64,
    pub price_per_ticket: u64,
    pub commission_per_ticket: u64,
}

impl OpenMarketRequest {
    pub fn validate(&self, now: i64) -> Result<()> {
        require!(
            !self.side_a.is_empty()
                && !self.side_b.is_empty()
                && self.side_a != self.side_b
                && self.side_a.len() <= MAX_SIDE_LABEL_LEN
                && self.side_b.len() <= MAX_SIDE_LABEL_LEN,
            MoneylineError::InvalidMarketRequest
        );

        require!(
            self.closes_at > self.opens_at && self.closes_at > now,
            MoneylineError::InvalidMarketRequest
        );

        require!(
            self.price_per_ticket > 0
                && self.commission_per_ticket <= self.price_per_ticket,
            MoneylineError::InvalidMarketRequest
        );

        Ok(())
    }
}

#[derive(Accounts)]
pub struct OpenMarket<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Market::INIT_SPACE,
        seeds = [MARKET_SEED.as_bytes(), &(config.latest_market_id + 1).to_le_bytes()],
        bump
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = market,
        seeds = [VAULT_SEED.as_bytes(), market.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> OpenMarket<'info> {
    pub fn validate(&self, request: &OpenMarketRequest) -> Result<()> {
        require!(
            self.config.is_operator(&self.signer.key()),
            MoneylineError::Unauthorized
        );

        request.validate(Clock::get()?.unix_timestamp)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<OpenMarket>, request: OpenMarketRequest) -> Result<()> {
    // validate
    ctx.accounts.validate(&request)?;

    let config = &mut ctx.accounts.config;
    let market = &mut ctx.accounts.market;

    // set market fields
    market.id = config
        .latest_market_id
        .checked_add(1)
        .ok_or(MoneylineError::Overflow)?;
    market.code = keccak::hash(request.code.as_bytes()).to_bytes();
    market.side_a = request.side_a;
    market.side_b = request.side_b;
    market.opens_at = request.opens_at;
    market.closes_at = request.closes_at;
    market.price_per_ticket = request.price_per_ticket;
    market.commission_per_ticket = request.commission_per_ticket;
    market.prize_per_ticket = 0;
    market.injected_amount = 0;
    market.treasury_amount = 0;
    market.outcome = Outcome::None;
    market.status = MarketStatus::Open;
    market.win_pool = ChoicePool::default();
    market.draw_pool = ChoicePool::default();
    market.lose_pool = ChoicePool::default();
    market.created_at = Clock::get()?.unix_timestamp;
    market.bump = ctx.bumps.market;
    market.vault_bump = ctx.bumps.vault;

    // advance the global id counter
    config.latest_market_id = market.id;

    emit!(MarketOpened {
        id: market.id,
        opens_at: market.opens_at,
        closes_at: market.closes_at,
        price_per_ticket: market.price_per_ticket,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OpenMarketRequest {
        OpenMarketRequest {
            code: "2022_WORLD_CUP".to_string(),
            side_a: "Republic of Korea".to_string(),
            side_b: "Portugal".to_string(),
            opens_at: 1_000,
            closes_at: 1_000 + 86_400,
            price_per_ticket: 1_000_000_000,
            commission_per_ticket: 0,
        }
    }

    #[test]
    fn test_accepts_well_formed_request() {
        assert!(request().validate(1_000).is_ok());
    }

    #[test]
    fn test_rejects_malformed_requests() {
        let mut r = request();
        r.side_a = String::new();
        assert!(r.validate(1_000).is_err());

        let mut r = request();
        r.side_b = String::new();
        assert!(r.validate(1_000).is_err());

        let mut r = request();
        r.side_b = r.side_a.clone();
        assert!(r.validate(1_000).is_err());

        let mut r = request();
        r.closes_at = r.opens_at;
        assert!(r.validate(1_000).is_err());

        let mut r = request();
        r.closes_at = r.opens_at - 86_400;
        assert!(r.validate(1_000).is_err());

        let mut r = request();
        r.commission_per_ticket = r.price_per_ticket + 1;
        assert!(r.validate(1_000).is_err());

        let mut r = request();
        r.price_per_ticket = 0;
        r.commission_per_ticket = 0;
        assert!(r.validate(1_000).is_err());

        // already past its close at creation time
        assert!(request().validate(1_000 + 86_400).is_err());
    }
}
