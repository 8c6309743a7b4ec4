//! TCP client for the stats service.
//!
//! Connection parameters come from the environment so the game binary never
//! owns credentials. The whole exchange is bounded by one timeout; there is
//! no retry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::protocol::{RecordRequest, RecordResponse};
use crate::types::ResultSummary;

/// Upper bound on the connect-write-read exchange.
const CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub host: String,
    pub port: u16,
    /// Externally-authenticated user identity. None disables reporting.
    pub user_id: Option<String>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            user_id: None,
        }
    }
}

impl ReporterConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let host = env::var("WORDGAMES_STATS_HOST").unwrap_or(defaults.host);
        let port = env::var("WORDGAMES_STATS_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let user_id = env::var("WORDGAMES_USER")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            host,
            port,
            user_id,
        }
    }

    /// Reporting happens only for authenticated users.
    pub fn is_enabled(&self) -> bool {
        self.user_id.is_some()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Record one result: connect, write one request line, read one response
/// line. Single best-effort call.
pub async fn report(config: &ReporterConfig, summary: ResultSummary) -> Result<RecordResponse> {
    let user_id = config
        .user_id
        .as_deref()
        .ok_or_else(|| anyhow!("no authenticated user"))?;

    let exchange = async {
        let stream = TcpStream::connect((config.host.as_str(), config.port))
            .await
            .with_context(|| format!("connect {}:{}", config.host, config.port))?;
        let (read_half, mut write_half) = stream.into_split();

        let request = RecordRequest::new(user_id, summary, 0, now_ms());
        let mut line = serde_json::to_string(&request)?;
        line.push('\n');
        write_half.write_all(line.as_bytes()).await?;

        let mut reply = String::new();
        BufReader::new(read_half).read_line(&mut reply).await?;
        let response: RecordResponse =
            serde_json::from_str(reply.trim()).context("malformed stats service response")?;
        Ok(response)
    };

    timeout(CALL_TIMEOUT, exchange)
        .await
        .map_err(|_| anyhow!("stats service call timed out"))?
}

/// Fire-and-forget dispatch from the synchronous event loop.
///
/// Skips silently (debug log only) when no user is authenticated. The call
/// runs on a background thread with its own small runtime; the outcome is
/// logged and never blocks or reverses game state. The returned handle lets
/// the process join still-pending reports before exiting; gameplay never
/// waits on it.
pub fn spawn_report(
    config: ReporterConfig,
    summary: ResultSummary,
) -> Option<std::thread::JoinHandle<()>> {
    if !config.is_enabled() {
        log::debug!("no authenticated user, result not recorded");
        return None;
    }

    let handle = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("reporter runtime failed to start: {e}");
                return;
            }
        };

        match runtime.block_on(report(&config, summary)) {
            Ok(response) if response.is_ok() => {
                log::info!(
                    "recorded {} result: {} points in {} s",
                    summary.kind.as_str(),
                    summary.score,
                    summary.elapsed_seconds
                );
            }
            Ok(response) => {
                log::warn!(
                    "stats service rejected result: {}",
                    response.message.as_deref().unwrap_or("no reason given")
                );
            }
            Err(e) => {
                log::warn!("failed to record result: {e:#}");
            }
        }
    });
    Some(handle)
}
