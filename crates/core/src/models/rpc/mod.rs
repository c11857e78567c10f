mod eth_log;
mod log_filter;
pub mod quantity;
mod rpc_error;

pub use eth_log::*;
pub use log_filter::*;
pub use quantity::{format_quantity, parse_quantity_u256, parse_quantity_u64, InvalidQuantity};
pub use rpc_error::*;
