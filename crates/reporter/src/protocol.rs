//! Protocol module - JSON message types for the stats service
//!
//! Line-delimited JSON: one request line out, one response line back.
//! Every message carries: type, seq (sequence number), ts (timestamp in ms).

use serde::{Deserialize, Serialize};

use crate::types::ResultSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "record")]
    Record,
}

impl Default for RecordType {
    fn default() -> Self {
        Self::Record
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultType {
    #[serde(rename = "result")]
    Result,
}

impl Default for ResultType {
    fn default() -> Self {
        Self::Result
    }
}

/// Outcome flag in the service's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "error")]
    Error,
}

/// One recorded game result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: RecordType,
    pub seq: u64,
    /// Unix timestamp in milliseconds.
    pub ts: u64,
    pub user_id: String,
    /// Game variant tag ("word_search", "crossword").
    pub game: String,
    pub score: u32,
    pub elapsed_seconds: u32,
}

impl RecordRequest {
    pub fn new(user_id: &str, summary: ResultSummary, seq: u64, ts: u64) -> Self {
        Self {
            msg_type: RecordType::Record,
            seq,
            ts,
            user_id: user_id.to_string(),
            game: summary.kind.as_str().to_string(),
            score: summary.score,
            elapsed_seconds: summary.elapsed_seconds,
        }
    }
}

/// Service acknowledgement for a record request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ResultType,
    pub seq: u64,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecordResponse {
    pub fn is_ok(&self) -> bool {
        self.status == RecordStatus::Ok
    }
}
