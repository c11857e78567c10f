use crate::prelude::*;

/// Prints the claimed winnings of every wallet. All wallets are attempted,
/// the first failure is returned afterwards.
pub(crate) async fn run_winnings(config: WinningsConfig) -> Result<(), CliError> {
    let scanner = WinningsScanner::connect(config.parameters).await?;

    let mut first_error = None;
    for (wallet, result) in scanner.scan_all(config.wallets).await {
        match result {
            Ok(summary) => info!(
                "{wallet}: {} ({} ETH in {} withdrawals)",
                summary.display_total(DISPLAY_DECIMALS, &config.symbol),
                summary.total_ether(),
                summary.withdrawals()
            ),
            Err(e) => {
                error!("Failed to fetch winnings of {wallet}: {e}");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(Error::from(e).into()),
        None => Ok(()),
    }
}
