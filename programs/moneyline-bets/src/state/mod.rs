pub mod config;
pub mod market;
pub mod wager;

pub use config::*;
pub use market::*;
pub use wager::*;
