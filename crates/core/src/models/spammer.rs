use crate::prelude::*;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

/// Locks ignoring poisoning, the guarded values stay consistent across panics.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State of a single throughput run, shared by its batch loops. A new run
/// gets a fresh instance so that loops of a stopped run can never touch it.
#[derive(Debug)]
pub struct ThroughputRun {
    running: AtomicBool,
    metrics: Mutex<RunMetrics>,
}

impl ThroughputRun {
    pub(crate) fn start() -> Self {
        Self {
            running: AtomicBool::new(true),
            metrics: Mutex::new(RunMetrics::start_now()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub(crate) fn halt(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub(crate) fn metrics(&self) -> MutexGuard<'_, RunMetrics> {
        lock(&self.metrics)
    }
}

/// Fires signed transfers from one funded account as fast as the node
/// accepts them and measures the rate of accepted transactions.
#[derive(Debug, Getters)]
pub struct Spammer<R = JsonRpcClient> {
    #[getset(get = "pub")]
    rpc: Arc<R>,

    #[getset(get = "pub")]
    signer: EthereumSigner,

    #[getset(get = "pub")]
    chain_id: ChainId,

    #[getset(get = "pub")]
    parameters: SpammerParameters,

    #[getset(get = "pub")]
    connection_status: ConnectionStatus,

    #[getset(get = "pub")]
    nonce: NonceCounter,

    current_run: Mutex<Option<Arc<ThroughputRun>>>,

    diagnostics: Mutex<DiagnosticLog>,
}

impl<R> Spammer<R> {
    pub(crate) fn new(
        rpc: R,
        signer: EthereumSigner,
        chain_id: ChainId,
        parameters: SpammerParameters,
        connection_status: ConnectionStatus,
        nonce: Nonce,
        diagnostics: DiagnosticLog,
    ) -> Self {
        Self {
            rpc: Arc::new(rpc),
            signer,
            chain_id,
            parameters,
            connection_status,
            nonce: NonceCounter::new(nonce),
            current_run: Mutex::new(None),
            diagnostics: Mutex::new(diagnostics),
        }
    }

    pub(crate) fn current_run(&self) -> Option<Arc<ThroughputRun>> {
        lock(&self.current_run).clone()
    }

    /// Replaces the current run unless one is still going.
    pub(crate) fn begin_run(&self) -> Result<Arc<ThroughputRun>, SpammerError> {
        let mut current = lock(&self.current_run);
        if current.as_ref().is_some_and(|run| run.is_running()) {
            return Err(SpammerError::AlreadyRunning);
        }
        let run = Arc::new(ThroughputRun::start());
        *current = Some(Arc::clone(&run));
        Ok(run)
    }

    pub fn is_running(&self) -> bool {
        self.current_run().is_some_and(|run| run.is_running())
    }

    /// Summary of the current (or last) run up to now.
    pub fn live_metrics(&self) -> Option<FinalMetrics> {
        let run = self.current_run()?;
        let summary = run.metrics().summary_at(tokio::time::Instant::now());
        Some(summary)
    }

    pub(crate) fn diagnostic(&self, level: log::Level, message: impl AsRef<str>) {
        lock(&self.diagnostics).record(level, message);
    }

    /// Snapshot of the diagnostic log, oldest first.
    pub fn diagnostics(&self) -> Vec<String> {
        lock(&self.diagnostics).entries().map(str::to_owned).collect()
    }
}

/// The batch loops of a started run.
#[derive(Debug)]
pub struct SpammerHandle {
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl SpammerHandle {
    pub(crate) fn new(handles: Vec<tokio::task::JoinHandle<()>>) -> Self {
        Self { handles }
    }

    pub fn batch_loops(&self) -> usize {
        self.handles.len()
    }

    /// Waits for every batch loop to observe the stop flag and exit.
    pub async fn join(self) -> Result<(), Error> {
        futures::future::try_join_all(self.handles)
            .await
            .map_err(|e| Error::JoinSendersError(Box::new(e)))?;
        Ok(())
    }
}
