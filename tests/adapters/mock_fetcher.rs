use mirrorbot::adapters::AttachmentFetcher;
use mirrorbot::repost::AttachmentSource;
use serenity::async_trait;
use serenity::builder::CreateAttachment;
use std::sync::{Arc, Mutex};

/// Mock implementation of AttachmentFetcher for testing
///
/// Records every fetch and hands back a stub attachment instead of touching
/// the network.
pub struct MockAttachmentFetcher {
    fetched: Arc<Mutex<Vec<AttachmentSource>>>,
}

impl Default for MockAttachmentFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAttachmentFetcher {
    pub fn new() -> Self {
        Self {
            fetched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_fetched(&self) -> Vec<AttachmentSource> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttachmentFetcher for MockAttachmentFetcher {
    async fn fetch(&self, source: &AttachmentSource) -> anyhow::Result<CreateAttachment> {
        self.fetched.lock().unwrap().push(source.clone());
        Ok(CreateAttachment::bytes(
            vec![0u8; 4],
            source.filename.clone(),
        ))
    }
}
