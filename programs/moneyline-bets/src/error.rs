use anchor_lang::prelude::*;

#[error_code]
pub enum MoneylineError {
    // General Program Errors
    #[msg("Unauthorized action for this account")]
    Unauthorized,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,

    // Configuration Errors
    #[msg("Role membership list is full")]
    MaxRoleMembersReached,

    // Market Management Errors
    #[msg("Invalid request")]
    InvalidMarketRequest,

    #[msg("Not open")]
    MarketNotOpen,

    #[msg("Betting period has not ended")]
    BettingPeriodNotEnded,

    #[msg("Cannot pick None as an outcome")]
    InvalidOutcome,

    #[msg("Not closed")]
    NotClosed,

    #[msg("Bet canceled")]
    MarketCanceled,

    #[msg("Already finalized")]
    AlreadyFinalized,

    #[msg("Already finalized or not canceled")]
    NotCanceledOrAlreadyFinalized,

    // Wagering Errors
    #[msg("Cannot pick this choice")]
    InvalidChoice,

    #[msg("Ticket count must be greater than 0")]
    InvalidTicketCount,

    #[msg("Wrong amount paid for the requested tickets")]
    AmountMismatch,

    #[msg("Betting period is over")]
    BettingClosed,

    #[msg("Choice bucket is full")]
    MarketFull,

    #[msg("Nothing to claim")]
    NothingToClaim,

    // Settlement & Account Errors
    #[msg("Remaining accounts do not match the requested page")]
    InvalidRemainingAccountsLength,

    #[msg("Invalid wager account")]
    InvalidWagerAccount,

    #[msg("Invalid wager account data")]
    InvalidWagerAccountData,

    #[msg("Account data too small")]
    AccountDataTooSmall,

    #[msg("Failed to serialize account data")]
    SerializeError,

    #[msg("Treasury account does not match program configuration")]
    InvalidTreasuryAuthority,
}
