mod token_transfer;

pub use token_transfer::*;
