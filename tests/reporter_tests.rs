//! Reporter tests - one best-effort JSON line over TCP, suppressed without
//! an authenticated user.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use tui_wordsearch::reporter::{report, ReporterConfig};
use tui_wordsearch::types::{GameKind, ResultSummary};

fn summary() -> ResultSummary {
    ResultSummary {
        kind: GameKind::WordSearch,
        score: 130,
        elapsed_seconds: 61,
    }
}

#[tokio::test]
async fn test_record_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Single-shot stats service: read one request line, acknowledge it.
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();

        let mut line = String::new();
        BufReader::new(read_half).read_line(&mut line).await.unwrap();
        let request: serde_json::Value = serde_json::from_str(line.trim()).unwrap();

        let reply = format!(
            "{{\"type\":\"result\",\"seq\":{},\"status\":\"ok\"}}\n",
            request["seq"]
        );
        write_half.write_all(reply.as_bytes()).await.unwrap();
        request
    });

    let config = ReporterConfig {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
        user_id: Some("user-1".to_string()),
    };

    let response = report(&config, summary()).await.unwrap();
    assert!(response.is_ok());

    let request = server.await.unwrap();
    assert_eq!(request["type"], "record");
    assert_eq!(request["user_id"], "user-1");
    assert_eq!(request["game"], "word_search");
    assert_eq!(request["score"], 130);
    assert_eq!(request["elapsed_seconds"], 61);
}

#[tokio::test]
async fn test_service_error_status_comes_back_as_a_value() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = stream.into_split();
        let mut line = String::new();
        BufReader::new(read_half).read_line(&mut line).await.unwrap();
        write_half
            .write_all(b"{\"seq\":0,\"status\":\"error\",\"message\":\"unknown user\"}\n")
            .await
            .unwrap();
    });

    let config = ReporterConfig {
        host: "127.0.0.1".to_string(),
        port: addr.port(),
        user_id: Some("ghost".to_string()),
    };

    // A rejection is an answered call, not a transport error; the caller
    // just logs it.
    let response = report(&config, summary()).await.unwrap();
    assert!(!response.is_ok());
    assert_eq!(response.message.as_deref(), Some("unknown user"));
}

#[tokio::test]
async fn test_unreachable_service_is_an_error_not_a_panic() {
    // Bind-then-drop to find a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ReporterConfig {
        host: "127.0.0.1".to_string(),
        port,
        user_id: Some("user-1".to_string()),
    };

    assert!(report(&config, summary()).await.is_err());
}

#[tokio::test]
async fn test_missing_user_suppresses_the_call() {
    let config = ReporterConfig {
        host: "127.0.0.1".to_string(),
        port: 1, // would fail if ever dialed
        user_id: None,
    };

    assert!(!config.is_enabled());
    assert!(report(&config, summary()).await.is_err());
}
