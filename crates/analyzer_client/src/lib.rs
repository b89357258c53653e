//! Analyzer client: HTTP access to the analysis endpoint and effect execution.
mod client;
mod settings;
mod types;
mod worker;

pub use client::{resolve_endpoint, AnalysisClient, ReqwestAnalysisClient};
pub use settings::{ClientSettings, DEFAULT_BASE_URL};
pub use types::{AnalysisEvent, AnalyzeError, FailureKind};
pub use worker::{AnalysisHandle, EventSink};
