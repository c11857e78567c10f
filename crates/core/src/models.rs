mod block_range;
mod connection_status;
mod diagnostic_log;
mod error;
mod ethereum;
mod nonce_counter;
mod rpc;
mod run_metrics;
mod spammer;
mod spammer_parameters;
mod transaction;
mod winnings;
mod winnings_parameters;

pub use block_range::*;
pub use connection_status::*;
pub use diagnostic_log::*;
pub use error::*;
pub use ethereum::*;
pub use nonce_counter::*;
pub use rpc::*;
pub use run_metrics::*;
pub use spammer::*;
pub use spammer_parameters::*;
pub use transaction::*;
pub use winnings::*;
pub use winnings_parameters::*;
