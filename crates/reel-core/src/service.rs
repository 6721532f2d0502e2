//! Video list fetching
//!
//! One GET against the configured endpoint, decoded as a JSON array of
//! [`Video`] records. No retries and no pagination.

use crate::{config::ClientConfig, types::Video, Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Source of the video list
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Fetch every video the server knows about
    async fn fetch_videos(&self) -> Result<Vec<Video>>;
}

/// [`VideoService`] backed by the HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpVideoService {
    client: Client,
    config: ClientConfig,
}

impl HttpVideoService {
    /// Build a service from a validated config
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Endpoint this service reads from
    pub fn endpoint(&self) -> &url::Url {
        &self.config.endpoint
    }
}

#[async_trait]
impl VideoService for HttpVideoService {
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn fetch_videos(&self) -> Result<Vec<Video>> {
        let response = self.client.get(self.config.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body: Bytes = response.bytes().await?;
        debug!(bytes = body.len(), "Video list received");

        let videos = decode_videos(&body)?;
        info!(count = videos.len(), "Video list decoded");

        Ok(videos)
    }
}

/// Decode a response body into video records
pub fn decode_videos(body: &[u8]) -> Result<Vec<Video>> {
    if body.is_empty() {
        return Err(Error::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Run one fetch on a tokio task and deliver the outcome over `tx`.
///
/// The receiver side belongs to whoever owns the controller; a dropped
/// receiver just discards the result.
pub fn spawn_fetch(
    service: Arc<dyn VideoService>,
    tx: mpsc::Sender<Result<Vec<Video>>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = service.fetch_videos().await;
        if tx.send(outcome).await.is_err() {
            debug!("Fetch result dropped, receiver gone");
        }
    })
}
