#[allow(clippy::module_inception)]
mod cli_args;
mod spam_args;
mod winnings_args;

pub use cli_args::*;
pub use spam_args::*;
pub use winnings_args::*;
