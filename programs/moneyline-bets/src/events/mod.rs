pub mod admin;
pub mod market;
pub mod wager;

pub use admin::*;
pub use market::*;
pub use wager::*;
