//! End-to-end orchestrator behavior over a real socket: a healthy remote
//! wins, and a dead remote still yields a resolved assessment tagged with
//! a fallback source - within a bounded delay and without raising.

use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use safescan_core::features::RiskInputs;
use safescan_core::verdict::{RiskLabel, ScoreSource};
use safescan_core::{analyze_scan, score};

fn sample_inputs() -> RiskInputs {
    RiskInputs {
        amount_risk: 0.8,
        payee_risk: 0.7,
        frequency_risk: 0.1,
        timing_risk: 0.7,
        device_risk: 0.0,
        payee_id: Some("urgent-prize@fake".to_string()),
        amount_value: Some(15_000.0),
        hour_of_day: Some(2),
    }
}

/// One-shot HTTP server returning a canned /analyze response.
async fn spawn_mock_server(body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                // Drain headers and body so the client finishes writing.
                let mut buf = Vec::new();
                let mut chunk = [0u8; 4096];
                loop {
                    match socket.read(&mut chunk).await {
                        Ok(0) => break,
                        Ok(n) => {
                            buf.extend_from_slice(&chunk[..n]);
                            if request_complete(&buf) {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }

                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]);
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    buf.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn remote_path_then_fallback_path() {
    // --- Healthy remote: the orchestrator reports the remote verdict,
    // with the label re-derived by the shared classifier.
    let base_url = spawn_mock_server(
        r#"{"risk_label":"warning","risk_score":55,"reasons":["Unverified payment provider: @fake"]}"#,
    )
    .await;
    std::env::set_var("SAFESCAN_API_URL", &base_url);

    let assessment = score(&sample_inputs(), 2_000).await;
    assert_eq!(assessment.source, ScoreSource::Remote);
    assert_eq!(assessment.risk_score, 55);
    assert_eq!(assessment.risk_label, RiskLabel::Warning);
    assert!(assessment.reasons[0].contains("Unverified"));

    // --- Dead remote: the evaluation must still resolve, promptly and
    // through a fallback path, never raising to the caller.
    std::env::set_var("SAFESCAN_API_URL", "http://127.0.0.1:9");

    let started = Instant::now();
    let assessment = score(&sample_inputs(), 500).await;

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_ne!(assessment.source, ScoreSource::Remote);
    assert!(!assessment.reasons.is_empty());
    assert!((0..=100).contains(&assessment.risk_score));

    // --- Full pipeline over a dead remote: parse errors are the only
    // failure a caller can observe.
    let assessment = analyze_scan("upi://pay?pa=urgent-prize@fake&am=15000", 2, 500)
        .await
        .expect("scan resolves");
    let details = assessment.details.expect("details echoed");
    assert_eq!(details.payee_address, "urgent-prize@fake");
    assert_eq!(details.original_link, "upi://pay?pa=urgent-prize@fake&am=15000");
    assert_eq!(details.merchant, "Unknown Merchant");

    assert!(analyze_scan("upi://pay?pn=NoPayee", 2, 500).await.is_err());
}
