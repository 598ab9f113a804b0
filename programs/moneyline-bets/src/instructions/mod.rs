#![allow(ambiguous_glob_reexports)]

pub mod claim_bet;
pub mod close_market;
pub mod finalize_bet;
pub mod grant_role;
pub mod initialize;
pub mod inject_bet;
pub mod invalidate_bet;
pub mod make_bet;
pub mod open_market;
pub mod revoke_role;
pub mod settle_treasury;

pub use claim_bet::*;
pub use close_market::*;
pub use finalize_bet::*;
pub use grant_role::*;
pub use initialize::*;
pub use inject_bet::*;
pub use invalidate_bet::*;
pub use make_bet::*;
pub use open_market::*;
pub use revoke_role::*;
pub use settle_treasury::*;
