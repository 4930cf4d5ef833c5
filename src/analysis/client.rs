use async_trait::async_trait;
use reqwest::redirect::Policy;

use crate::analysis::report::AnalysisResult;
use crate::analysis::submission::Submission;
use crate::config::Config;
use crate::core::constants::endpoints;
use crate::core::error::{CredCheckError, Result};

/// Seam over the HTTP exchange with the analysis service.
#[async_trait]
pub trait AnalyzeContent {
    /// Issue one analysis request for the given submission.
    ///
    /// Exactly one POST per call: no retry, no debounce, no cancellation.
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult>;
}

/// reqwest-backed analysis client
#[derive(Debug)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Build a client from configuration: timeout, redirect policy, and
    /// User-Agent come from the config, the endpoint path is fixed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let http = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.server_base(),
        })
    }

    /// Full URL of the analysis endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, endpoints::ANALYZE_PATH)
    }
}

#[async_trait]
impl AnalyzeContent for AnalysisClient {
    async fn analyze(&self, submission: &Submission) -> Result<AnalysisResult> {
        let form = submission.to_form()?;

        let response = self.http.post(self.endpoint()).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Failure: the body is not read, let alone parsed
            return Err(CredCheckError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let report: AnalysisResult = serde_json::from_str(&body)?;
        Ok(report)
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use mockito::Server;

    fn config_for(server_url: &str) -> Config {
        Config {
            server: Some(server_url.to_string()),
            ..Default::default()
        }
    }

    fn text_submission() -> Submission {
        Submission::builder().text("some claim").build().unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let client = AnalysisClient::from_config(&config_for("http://localhost:5000")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/analyze");

        // Trailing slash on the base does not double up
        let client = AnalysisClient::from_config(&config_for("http://localhost:5000/")).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/analyze");
    }

    #[tokio::test]
    async fn test_analyze_parses_success_response() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"credibility_score": 85, "text_score": 90, "suspicious_phrases": [], "media_score": 70}"#)
            .create_async()
            .await;

        let client = AnalysisClient::from_config(&config_for(&server.url())).unwrap();
        let report = client.analyze(&text_submission()).await.unwrap();

        assert_eq!(report.credibility_score, Some(85.0));
        assert_eq!(report.text_score, Some(90.0));
        assert_eq!(report.suspicious_phrases, Some(vec![]));
        assert_eq!(report.media_score, Some(70.0));
    }

    #[tokio::test]
    async fn test_analyze_handles_missing_fields() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"credibility_score": 65}"#)
            .create_async()
            .await;

        let client = AnalysisClient::from_config(&config_for(&server.url())).unwrap();
        let report = client.analyze(&text_submission()).await.unwrap();

        assert_eq!(report.credibility_score, Some(65.0));
        assert_eq!(report.text_score, None);
        assert_eq!(report.suspicious_phrases, None);
        assert_eq!(report.media_score, None);
    }

    #[tokio::test]
    async fn test_analyze_non_success_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = AnalysisClient::from_config(&config_for(&server.url())).unwrap();
        let err = client.analyze(&text_submission()).await.unwrap_err();

        assert!(matches!(err, CredCheckError::Server { status: 500 }));
    }

    #[tokio::test]
    async fn test_analyze_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let client = AnalysisClient::from_config(&config_for(&server.url())).unwrap();
        let err = client.analyze(&text_submission()).await.unwrap_err();

        assert!(matches!(err, CredCheckError::JsonParsing(_)));
    }

    #[tokio::test]
    async fn test_analyze_unreachable_server() {
        // Port 1 is reserved and nothing listens on it
        let client = AnalysisClient::from_config(&config_for("http://127.0.0.1:1")).unwrap();
        let err = client.analyze(&text_submission()).await.unwrap_err();

        assert!(matches!(err, CredCheckError::Http(_)));
    }
}
