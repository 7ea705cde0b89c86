use mirrorbot::adapters::DiscordService;
use serenity::async_trait;
use serenity::builder::CreateAttachment;
use serenity::model::id::ChannelId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock implementation of DiscordService for testing
///
/// Records every forwarded message; destination channels resolve as live
/// unless configured otherwise.
pub struct MockDiscordService {
    sends: Arc<Mutex<Vec<RecordedSend>>>,
    liveness: Arc<Mutex<HashMap<ChannelId, Liveness>>>,
}

#[derive(Debug, Clone)]
pub struct RecordedSend {
    pub channel_id: ChannelId,
    pub content: String,
    pub attachment_count: usize,
}

#[derive(Debug, Clone, Copy)]
enum Liveness {
    Live,
    Gone,
    Error,
}

impl Default for MockDiscordService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDiscordService {
    pub fn new() -> Self {
        Self {
            sends: Arc::new(Mutex::new(Vec::new())),
            liveness: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Make a channel resolve as not a live guild channel
    pub fn set_channel_gone(&self, channel_id: ChannelId) {
        self.liveness
            .lock()
            .unwrap()
            .insert(channel_id, Liveness::Gone);
    }

    /// Make channel resolution fail with an error
    pub fn set_channel_error(&self, channel_id: ChannelId) {
        self.liveness
            .lock()
            .unwrap()
            .insert(channel_id, Liveness::Error);
    }

    pub fn get_sends(&self) -> Vec<RecordedSend> {
        self.sends.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordService for MockDiscordService {
    async fn channel_is_live(&self, channel_id: ChannelId) -> Result<bool, serenity::Error> {
        match self
            .liveness
            .lock()
            .unwrap()
            .get(&channel_id)
            .copied()
            .unwrap_or(Liveness::Live)
        {
            Liveness::Live => Ok(true),
            Liveness::Gone => Ok(false),
            Liveness::Error => Err(serenity::Error::Other("channel not resolvable")),
        }
    }

    async fn send_to_channel(
        &self,
        channel_id: ChannelId,
        content: &str,
        attachments: Vec<CreateAttachment>,
    ) -> Result<(), serenity::Error> {
        self.sends.lock().unwrap().push(RecordedSend {
            channel_id,
            content: content.to_string(),
            attachment_count: attachments.len(),
        });
        Ok(())
    }
}
