mod logic;
mod models;

mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    pub use evm_stps_core::prelude::*;
}

#[tokio::main]
async fn main() {
    use clap::Parser as _;
    use prelude::*;

    init_logging();
    let cli_args = CliArgs::parse();
    if run(cli_args).await.is_err() {
        std::process::exit(1);
    }
}
