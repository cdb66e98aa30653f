use crate::domain::model::Energy;
use crate::domain::ports::Scorer;
use crate::utils::error::{DockError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Delegates scoring to an external HTTP service.
///
/// Sends `GET <endpoint>?sequence=...` and expects `{"value": <number>}` back.
pub struct RemoteScorer {
    client: Client,
    endpoint: String,
}

impl RemoteScorer {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Scorer for RemoteScorer {
    async fn score(&self, sequence: Option<&str>) -> Result<Energy> {
        let mut request = self.client.get(&self.endpoint);
        // 沒有 sequence 就不帶參數，讓遠端自行決定
        if let Some(sequence) = sequence {
            request = request.query(&[("sequence", sequence)]);
        }

        tracing::debug!("Making scorer request to: {}", self.endpoint);
        let response = request.send().await.map_err(scorer_error)?;
        tracing::debug!("Scorer response status: {}", response.status());

        if !response.status().is_success() {
            return Err(DockError::ScorerError(format!(
                "Remote scorer returned {}",
                response.status()
            )));
        }

        response.json::<Energy>().await.map_err(scorer_error)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// 回給客戶端的訊息不能帶出內部評分服務的 URL
fn scorer_error(err: reqwest::Error) -> DockError {
    let kind = if err.is_timeout() {
        "timed out"
    } else if err.is_decode() {
        "returned an unreadable body"
    } else {
        "request failed"
    };
    DockError::ScorerError(format!("Remote scorer {}: {}", kind, err.without_url()))
}
