use super::attachment_fetcher::AttachmentFetcher;
use crate::repost::repostable_message::AttachmentSource;
use anyhow::Context as _;
use serenity::async_trait;
use serenity::builder::CreateAttachment;
use std::time::Duration;
use tracing::debug;

/// Implementation for fetching attachments over HTTP
pub struct HttpAttachmentFetcher {
    client: reqwest::Client,
}

impl HttpAttachmentFetcher {
    /// Create a new HttpAttachmentFetcher
    ///
    /// # Arguments
    ///
    /// * `timeout` - Total request timeout per download
    /// * `connect_timeout` - Connection establishment timeout
    pub fn new(timeout: Duration, connect_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl AttachmentFetcher for HttpAttachmentFetcher {
    async fn fetch(&self, source: &AttachmentSource) -> anyhow::Result<CreateAttachment> {
        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .with_context(|| format!("Requesting attachment '{}'", source.filename))?
            .error_for_status()
            .with_context(|| format!("Downloading attachment '{}'", source.filename))?;

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Reading attachment body '{}'", source.filename))?;

        debug!(
            filename = %source.filename,
            size = bytes.len(),
            "Fetched attachment for re-upload"
        );

        Ok(CreateAttachment::bytes(
            bytes.to_vec(),
            source.filename.clone(),
        ))
    }
}
