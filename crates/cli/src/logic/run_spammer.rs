use crate::prelude::*;

use std::sync::Arc;
use tokio::time::{interval, sleep, Duration, MissedTickBehavior};

const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

async fn wait_for(duration: Option<Duration>) {
    match duration {
        Some(duration) => sleep(duration).await,
        None => std::future::pending().await,
    }
}

fn report_progress(spammer: &Spammer, gauges: Option<&SpamMetrics>) {
    let Some(metrics) = spammer.live_metrics() else {
        return;
    };
    info!(
        "Sent {} | Failed {} | {:.2} TPS | nonce {}",
        metrics.total_tx(),
        metrics.failed_tx(),
        metrics.tps(),
        spammer.nonce().current()
    );
    if let Some(gauges) = gauges {
        gauges.set(&metrics);
    }
}

/// Runs until the configured duration elapses or Ctrl-C is pressed, logging
/// progress every second, then stops and prints the final metrics.
pub(crate) async fn run_spammer(config: SpamConfig) -> Result<(), CliError> {
    let gauges = config
        .prometheus
        .as_ref()
        .map(|(host, port)| run_prometheus_endpoint(host, *port))
        .transpose()
        .map_err(CliError::PrometheusSetupFailed)?;

    let spammer = Arc::new(Spammer::connect(config.parameters).await?);
    info!("{}", spammer.connection_status());

    let handle = spammer.start().map_err(Error::from)?;

    let mut ticker = interval(PROGRESS_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    let deadline = wait_for(config.duration);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(deadline, ctrl_c);

    let interrupted = loop {
        tokio::select! {
            _ = &mut deadline => {
                info!("Duration elapsed, stopping");
                break None;
            }
            result = &mut ctrl_c => {
                info!("Received Ctrl-C, stopping");
                break result.err();
            }
            _ = ticker.tick() => report_progress(&spammer, gauges.as_ref()),
        }
    };

    if let Some(metrics) = spammer.stop() {
        if let Some(gauges) = &gauges {
            gauges.set(&metrics);
        }
        info!("Failed TX: {}", metrics.failed_tx());
    }
    handle.join().await?;

    match interrupted {
        Some(e) => Err(CliError::SignalHandlerFailed {
            underlying: e.to_string(),
        }),
        None => Ok(()),
    }
}
