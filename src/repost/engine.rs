use crate::adapters::{AttachmentFetcher, DiscordService};
use crate::repost::forward_text::forward_content;
use crate::repost::repostable_message::RepostableMessage;
use crate::store::RuleStore;
use anyhow::Context as _;
use std::sync::Arc;
use tracing::{debug, info};

/// Mirror matching messages into their configured destination channel
///
/// For every incoming message the engine looks up the guild's rule in the
/// store and forwards the message when both the author and the channel match.
/// Everything platform-facing goes through the injected adapters so the
/// decision logic runs in tests without a live connection.
pub struct RepostEngine<D, F>
where
    D: DiscordService,
    F: AttachmentFetcher,
{
    store: Arc<RuleStore>,
    discord_service: Arc<D>,
    attachment_fetcher: Arc<F>,
}

impl<D, F> RepostEngine<D, F>
where
    D: DiscordService,
    F: AttachmentFetcher,
{
    pub fn new(store: Arc<RuleStore>, discord_service: Arc<D>, attachment_fetcher: Arc<F>) -> Self {
        Self {
            store,
            discord_service,
            attachment_fetcher,
        }
    }

    /// Handle a message event
    ///
    /// Messages from automated accounts are always ignored, as are messages
    /// outside guilds or in guilds without a committed rule. A matching
    /// message is forwarded with its attachments re-uploaded; an unresolvable
    /// destination channel skips the forward silently.
    pub async fn handle_message<M: RepostableMessage>(&self, message: &M) -> anyhow::Result<()> {
        if message.is_bot() {
            return Ok(());
        }

        let Some(guild_id) = message.guild_id() else {
            return Ok(());
        };

        let Some(rule) = self.store.get(guild_id) else {
            return Ok(());
        };

        if !rule.matches(message.author_id(), message.channel_id()) {
            return Ok(());
        }

        debug!(
            guild_id = %guild_id,
            author_id = %message.author_id(),
            source_channel = %message.channel_id(),
            "Message matches repost rule"
        );

        // Resolve the destination to a live channel; a deleted or
        // inaccessible channel drops the forward without surfacing an error
        match self
            .discord_service
            .channel_is_live(rule.destination_channel)
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                debug!(
                    channel_id = %rule.destination_channel,
                    "Destination channel is not a live guild channel, skipping forward"
                );
                return Ok(());
            }
            Err(err) => {
                debug!(
                    channel_id = %rule.destination_channel,
                    ?err,
                    "Failed to resolve destination channel, skipping forward"
                );
                return Ok(());
            }
        }

        // Re-upload every original attachment; bytes are fetched before the
        // forward call, suspending only this event's handling
        let sources = message.attachments();
        let mut files = Vec::with_capacity(sources.len());
        for source in &sources {
            let file = self
                .attachment_fetcher
                .fetch(source)
                .await
                .with_context(|| format!("Fetching attachment '{}'", source.filename))?;
            files.push(file);
        }

        let content = forward_content(&message.author_display_name(), message.content());
        let attachment_count = files.len();

        self.discord_service
            .send_to_channel(rule.destination_channel, &content, files)
            .await
            .context("Forwarding message to destination channel")?;

        info!(
            guild_id = %guild_id,
            destination = %rule.destination_channel,
            attachments = attachment_count,
            "Forwarded message to destination channel"
        );

        Ok(())
    }
}
