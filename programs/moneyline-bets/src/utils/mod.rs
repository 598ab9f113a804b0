pub mod accounts;
pub mod settlement;

pub use accounts::*;
pub use settlement::*;
