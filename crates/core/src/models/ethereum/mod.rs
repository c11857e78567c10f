mod eth_account_id;
mod eth_hash;
mod eth_signer;
mod units;

pub use eth_account_id::*;
pub use eth_hash::*;
pub use eth_signer::*;
pub use units::*;
