use crate::prelude::*;

async fn run_subcommand(command: Command) -> Result<(), CliError> {
    match command {
        Command::Spam(spam_args) => run_spammer(SpamConfig::try_from(spam_args)?).await,
        Command::Winnings(winnings_args) => {
            run_winnings(WinningsConfig::try_from(winnings_args)?).await
        }
    }
}

pub async fn run(cli_args: CliArgs) -> Result<(), CliError> {
    run_subcommand(cli_args.command)
        .await
        .inspect(|_| info!("{} ran successfully", BINARY_NAME))
        .inspect_err(|e| error!("Error running {}: {}", BINARY_NAME, e))
}
