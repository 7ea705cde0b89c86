use mirrorbot::repost::{AttachmentSource, RepostableMessage};
use serenity::model::id::{ChannelId, GuildId, UserId};

/// Mock message implementation for driving the repost engine in tests
#[derive(Debug, Clone)]
pub struct MockMessage {
    guild_id: Option<GuildId>,
    author_id: UserId,
    channel_id: ChannelId,
    is_bot: bool,
    content: String,
    display_name: String,
    attachments: Vec<AttachmentSource>,
}

impl MockMessage {
    pub fn new(author_id: u64, channel_id: u64) -> Self {
        Self {
            guild_id: None,
            author_id: UserId::new(author_id),
            channel_id: ChannelId::new(channel_id),
            is_bot: false,
            content: String::new(),
            display_name: "someone".to_string(),
            attachments: Vec::new(),
        }
    }

    pub fn guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(GuildId::new(guild_id));
        self
    }

    pub fn bot(mut self) -> Self {
        self.is_bot = true;
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = name.to_string();
        self
    }

    pub fn attachment(mut self, url: &str, filename: &str) -> Self {
        self.attachments.push(AttachmentSource {
            url: url.to_string(),
            filename: filename.to_string(),
        });
        self
    }
}

impl RepostableMessage for MockMessage {
    fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    fn author_id(&self) -> UserId {
        self.author_id
    }

    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    fn is_bot(&self) -> bool {
        self.is_bot
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn author_display_name(&self) -> String {
        self.display_name.clone()
    }

    fn attachments(&self) -> Vec<AttachmentSource> {
        self.attachments.clone()
    }
}
