use crate::repost::repostable_message::AttachmentSource;
use serenity::async_trait;
use serenity::builder::CreateAttachment;

/// Interface for fetching original attachment bytes for re-upload
#[async_trait]
pub trait AttachmentFetcher: Send + Sync {
    /// Download an attachment and wrap its bytes for upload
    ///
    /// # Arguments
    ///
    /// * `source` - URL and filename of the original attachment
    async fn fetch(&self, source: &AttachmentSource) -> anyhow::Result<CreateAttachment>;
}
