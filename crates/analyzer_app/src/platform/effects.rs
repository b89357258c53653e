use std::sync::{mpsc, Arc};

use analyzer_client::{
    AnalysisEvent, AnalysisHandle, ClientSettings, EventSink, ReqwestAnalysisClient,
};
use analyzer_core::Effect;
use analyzer_logging::analyzer_info;

use super::app::AppEvent;

pub struct EffectRunner {
    handle: AnalysisHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, tx: mpsc::Sender<AppEvent>) -> std::io::Result<Self> {
        let client = Arc::new(ReqwestAnalysisClient::new(settings));
        let handle = AnalysisHandle::new(client, AppEventSink { tx })?;
        Ok(Self { handle })
    }

    pub fn probe_health(&self) {
        self.handle.probe_health();
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze { request_id, query } => {
                    analyzer_info!(
                        "Analyze request_id={} query_len={}",
                        request_id,
                        query.len()
                    );
                    self.handle.submit(request_id, query);
                }
            }
        }
    }
}

struct AppEventSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for AppEventSink {
    fn emit(&self, event: AnalysisEvent) {
        let _ = self.tx.send(AppEvent::Analysis(event.into_msg()));
    }
}
