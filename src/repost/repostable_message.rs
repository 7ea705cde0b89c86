use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId, UserId};

/// Attachment on an incoming message, reduced to what re-upload needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentSource {
    pub url: String,
    pub filename: String,
}

/// Trait for messages the repost engine can evaluate
///
/// This trait abstracts the properties the engine reads from a message,
/// allowing the mirroring logic to be tested without depending on serenity's
/// Message type.
pub trait RepostableMessage {
    fn guild_id(&self) -> Option<GuildId>;
    fn author_id(&self) -> UserId;
    fn channel_id(&self) -> ChannelId;
    fn is_bot(&self) -> bool;
    fn content(&self) -> &str;
    fn author_display_name(&self) -> String;
    fn attachments(&self) -> Vec<AttachmentSource>;
}

impl RepostableMessage for Message {
    fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    fn author_id(&self) -> UserId {
        self.author.id
    }

    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    fn is_bot(&self) -> bool {
        self.author.bot
    }

    fn content(&self) -> &str {
        &self.content
    }

    /// Guild nickname when the gateway included member data, otherwise the
    /// author's global display name
    fn author_display_name(&self) -> String {
        self.member
            .as_ref()
            .and_then(|member| member.nick.clone())
            .unwrap_or_else(|| self.author.display_name().to_string())
    }

    fn attachments(&self) -> Vec<AttachmentSource> {
        self.attachments
            .iter()
            .map(|attachment| AttachmentSource {
                url: attachment.url.clone(),
                filename: attachment.filename.clone(),
            })
            .collect()
    }
}
