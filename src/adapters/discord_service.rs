use serenity::async_trait;
use serenity::builder::CreateAttachment;
use serenity::model::id::ChannelId;

/// Interface over the Discord operations the repost engine needs
#[async_trait]
pub trait DiscordService: Send + Sync {
    /// Check whether a channel id currently resolves to a live guild channel
    ///
    /// # Returns
    ///
    /// `true` when the channel exists and can receive a forward, `false` when
    /// it resolves to something that cannot (e.g. a DM channel). Deleted or
    /// inaccessible channels surface as `Err`.
    async fn channel_is_live(&self, channel_id: ChannelId) -> Result<bool, serenity::Error>;

    /// Send a message with pre-built attachments to a channel
    ///
    /// # Arguments
    ///
    /// * `channel_id` - The channel to send into
    /// * `content` - The message text
    /// * `attachments` - Files to upload alongside the text
    async fn send_to_channel(
        &self,
        channel_id: ChannelId,
        content: &str,
        attachments: Vec<CreateAttachment>,
    ) -> Result<(), serenity::Error>;
}
