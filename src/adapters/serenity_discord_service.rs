use super::discord_service::DiscordService;
use serenity::async_trait;
use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::channel::Channel;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::debug;

/// Implementation for Discord operations via Serenity
///
/// Channel resolution is cache-first with API fallback.
pub struct SerenityDiscordService {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityDiscordService {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl DiscordService for SerenityDiscordService {
    async fn channel_is_live(&self, channel_id: ChannelId) -> Result<bool, serenity::Error> {
        // Try cache first (fast path)
        // Channel kind is extracted without holding cache references across
        // await points; all cached guilds are searched for the channel
        let cached = self.cache.guilds().iter().any(|guild_id| {
            self.cache
                .guild(*guild_id)
                .is_some_and(|guild_ref| guild_ref.channels.contains_key(&channel_id))
        });

        if cached {
            debug!(channel_id = %channel_id, "Channel resolved from cache");
            return Ok(true);
        }

        // Cache miss - fallback to API (slow path)
        debug!(
            channel_id = %channel_id,
            "Cache miss, fetching channel info from API"
        );

        let channel = self.http.get_channel(channel_id).await?;
        Ok(matches!(channel, Channel::Guild(_)))
    }

    async fn send_to_channel(
        &self,
        channel_id: ChannelId,
        content: &str,
        attachments: Vec<CreateAttachment>,
    ) -> Result<(), serenity::Error> {
        let builder = CreateMessage::new().content(content).add_files(attachments);

        channel_id.send_message(&self.http, builder).await?;
        Ok(())
    }
}
