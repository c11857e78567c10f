mod get_nonce;
mod rpc_client;
mod spammer;
mod winnings_scanner;

#[cfg(test)]
mod mock_rpc;

pub use get_nonce::*;
pub use rpc_client::*;
pub use winnings_scanner::*;

#[cfg(test)]
pub(crate) use mock_rpc::*;
