//! reqwest implementation of the prediction gateway
//!
//! One `POST` per submission with the answers as a flat JSON object. The
//! response body must be a flat JSON object of model name → label.
//!
//! | Outcome                              | Error                        |
//! |--------------------------------------|------------------------------|
//! | connect / DNS / timeout              | `SubmissionError::Transport` |
//! | non-2xx status                       | `SubmissionError::Service`   |
//! | body is not a string → string object | `SubmissionError::Service`   |

use super::error::HttpGatewayError;
use async_trait::async_trait;
use neuroscreen_application::{PredictionGateway, SubmissionError};
use neuroscreen_domain::core::string::truncate;
use neuroscreen_domain::{AnswerStore, PredictionResult};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest slice of an error body echoed into messages
const BODY_PREVIEW: usize = 200;

/// Prediction gateway backed by a shared `reqwest::Client`
pub struct ReqwestPredictionGateway {
    client: Client,
}

impl ReqwestPredictionGateway {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, HttpGatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Use a pre-configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PredictionGateway for ReqwestPredictionGateway {
    async fn predict(
        &self,
        endpoint: &str,
        answers: &AnswerStore,
    ) -> Result<PredictionResult, SubmissionError> {
        debug!("POST {} ({} fields)", endpoint, answers.len());

        let response = self
            .client
            .post(endpoint)
            .json(answers)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!("Prediction service returned {}", status);
            return Err(SubmissionError::Service(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(body.trim(), BODY_PREVIEW)
            )));
        }

        serde_json::from_str::<PredictionResult>(&body).map_err(|e| {
            warn!("Unparsable prediction body: {}", truncate(&body, BODY_PREVIEW));
            SubmissionError::Service(format!("Unparsable response: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn gateway() -> ReqwestPredictionGateway {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        ReqwestPredictionGateway::with_client(client)
    }

    /// Accept one connection, answer with `status` + `body`, return the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{addr}/predict_headache"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let length = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn answers() -> AnswerStore {
        [("Age", "42"), ("Aura", "Yes")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_posts_flat_json_and_parses_labels() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"Gradient_Boosting_Prediction":"Migraine","Random_Forest_Prediction":"Migraine","SVM_Prediction":"Cluster"}"#,
        )
        .await;

        let result = gateway().predict(&url, &answers()).await.unwrap();
        assert_eq!(result.get("SVM_Prediction"), Some("Cluster"));
        assert_eq!(result.len(), 3);

        let request = server.await.unwrap();
        let lower = request.to_lowercase();
        assert!(request.starts_with("POST /predict_headache HTTP/1.1"));
        assert!(lower.contains("content-type: application/json"));
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json, serde_json::json!({"Age": "42", "Aura": "Yes"}));
    }

    #[tokio::test]
    async fn test_non_success_status_is_service_error() {
        let (url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

        let err = gateway().predict(&url, &answers()).await.unwrap_err();
        match err {
            SubmissionError::Service(msg) => {
                assert!(msg.starts_with("HTTP 500"));
                assert!(msg.contains("boom"));
            }
            other => panic!("expected Service, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unparsable_body_is_service_error() {
        let (url, server) = serve_once("200 OK", r#"{"GB": 1}"#).await;

        let err = gateway().predict(&url, &answers()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Service(msg) if msg.starts_with("Unparsable")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = gateway()
            .predict(&format!("http://{addr}/predict"), &answers())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
    }

    #[tokio::test]
    async fn test_new_builds_client() {
        assert!(ReqwestPredictionGateway::new(Duration::from_secs(30), "neuroscreen/test").is_ok());
    }
}
