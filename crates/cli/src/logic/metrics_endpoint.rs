use crate::prelude::*;

use prometheus_endpoint::{
    prometheus::{Gauge, IntGauge},
    Registry,
};
use std::net::ToSocketAddrs;

const METRICS_PREFIX: &str = "evm_stps";

/// Gauges mirroring the live metrics of a throughput run.
pub struct SpamMetrics {
    tps: Gauge,
    tx_success_count: IntGauge,
    tx_failed_count: IntGauge,
}

impl SpamMetrics {
    pub fn set(&self, metrics: &FinalMetrics) {
        self.tps.set(*metrics.tps());
        self.tx_success_count.set(*metrics.total_tx() as i64);
        self.tx_failed_count.set(*metrics.failed_tx() as i64);
    }
}

/// Registers the gauges and serves them on every address `host:port`
/// resolves to.
pub fn run_prometheus_endpoint(host: &str, port: u16) -> anyhow::Result<SpamMetrics> {
    let registry = Registry::new_custom(Some(METRICS_PREFIX.into()), None)?;
    let metrics = register_metrics(&registry)?;
    for addr in (host, port).to_socket_addrs()? {
        info!("Serving Prometheus metrics on http://{addr}/metrics");
        tokio::spawn(prometheus_endpoint::init_prometheus(addr, registry.clone()));
    }
    Ok(metrics)
}

fn register_metrics(registry: &Registry) -> anyhow::Result<SpamMetrics> {
    Ok(SpamMetrics {
        tps: prometheus_endpoint::register(
            Gauge::new("tps", "Accepted transactions per second of the current run")?,
            registry,
        )?,
        tx_success_count: prometheus_endpoint::register(
            IntGauge::new("tx_success_count", "Distinct transactions accepted by the node")?,
            registry,
        )?,
        tx_failed_count: prometheus_endpoint::register(
            IntGauge::new("tx_failed_count", "Submissions rejected by the node")?,
            registry,
        )?,
    })
}
