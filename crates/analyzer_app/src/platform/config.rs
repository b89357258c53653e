use std::time::Duration;

use analyzer_client::ClientSettings;
use clap::{builder::ArgAction, Parser, ValueEnum};

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(author, version, about = "Terminal client for the research paper analysis service")]
pub struct Cli {
    /// Origin of the analysis service; empty uses http://127.0.0.1:8000
    #[arg(long, env = "ANALYZER_API_URL", default_value = "")]
    pub api_url: String,

    /// Seconds to wait for a TCP connection
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Overall request deadline in seconds; unset waits for the service
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Largest accepted response body
    #[arg(long, default_value_t = ClientSettings::default().max_response_bytes)]
    pub max_response_bytes: u64,

    /// Where log records go
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Open the analyzer page instead of the home page
    #[arg(long)]
    pub analyze: bool,

    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl Cli {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
