//! Result reporter - the persistence boundary.
//!
//! Packages a finished session's score and elapsed time and hands them to
//! the external stats service over a line-delimited JSON/TCP call. One
//! best-effort call per session, no retry, no backoff; failures are logged
//! and never reach the player. Without an authenticated user id the call is
//! skipped entirely - unauthenticated play is supported, it is simply not
//! recorded.

pub mod client;
pub mod protocol;

pub use tui_wordsearch_types as types;

pub use client::{report, spawn_report, ReporterConfig};
pub use protocol::{RecordRequest, RecordResponse, RecordStatus};
