use std::sync::{mpsc, Arc};
use std::thread;

use analyzer_core::RequestId;
use analyzer_logging::{analyzer_debug, analyzer_info, analyzer_warn};

use crate::{AnalysisClient, AnalysisEvent};

/// Receives completions from the worker thread.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: AnalysisEvent);
}

impl EventSink for mpsc::Sender<AnalysisEvent> {
    fn emit(&self, event: AnalysisEvent) {
        let _ = self.send(event);
    }
}

enum WorkerCommand {
    Analyze { request_id: RequestId, query: String },
    ProbeHealth,
}

/// Runs analysis requests on a background tokio runtime.
///
/// Every submitted request produces exactly one [`AnalysisEvent::Completed`].
/// Dropping the handle stops the worker and abandons requests still in flight.
pub struct AnalysisHandle {
    cmd_tx: mpsc::Sender<WorkerCommand>,
}

impl AnalysisHandle {
    pub fn new(client: Arc<dyn AnalysisClient>, sink: impl EventSink) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("analysis-worker")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let sink: Arc<dyn EventSink> = Arc::new(sink);

        thread::Builder::new()
            .name("analysis-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, sink.as_ref()).await;
                    });
                }
                analyzer_debug!("analysis dispatcher stopped");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(WorkerCommand::Analyze {
            request_id,
            query: query.into(),
        });
    }

    /// Checks the service's health endpoint and logs the outcome.
    pub fn probe_health(&self) {
        let _ = self.cmd_tx.send(WorkerCommand::ProbeHealth);
    }
}

async fn handle_command(client: &dyn AnalysisClient, command: WorkerCommand, sink: &dyn EventSink) {
    match command {
        WorkerCommand::Analyze { request_id, query } => {
            analyzer_debug!("request {} sending", request_id);
            let result = client.analyze(&query).await;
            if let Err(err) = &result {
                analyzer_debug!("request {} error: {}", request_id, err);
            }
            sink.emit(AnalysisEvent::Completed { request_id, result });
        }
        WorkerCommand::ProbeHealth => match client.health().await {
            Ok(status) => analyzer_info!("analysis service status: {}", status),
            Err(err) => analyzer_warn!("analysis service unreachable: {}", err),
        },
    }
}
