mod init_logging;
mod metrics_endpoint;
mod run;
mod run_spammer;
mod run_winnings;

pub use init_logging::*;
pub use metrics_endpoint::*;
pub use run::*;
pub(crate) use run_spammer::*;
pub(crate) use run_winnings::*;
