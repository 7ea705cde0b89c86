use serenity::model::id::{ChannelId, GuildId, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

/// Committed repost configuration for one guild
///
/// A rule only exists once all three fields have been selected; partial
/// drafts never leave the settings session (see `settings::draft`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepostRule {
    pub watched_user: UserId,
    pub source_channel: ChannelId,
    pub destination_channel: ChannelId,
}

impl RepostRule {
    /// Check whether a message from `author` in `channel` should be mirrored
    pub fn matches(&self, author: UserId, channel: ChannelId) -> bool {
        author == self.watched_user && channel == self.source_channel
    }
}

/// In-memory mapping from guild to its active repost rule
///
/// An absent entry means no repost is active for that guild. The mapping is
/// never persisted and resets on restart. Committing a rule replaces any
/// prior rule for the guild wholesale; concurrent saves are not coordinated
/// beyond the lock, so the last writer wins.
#[derive(Debug, Default)]
pub struct RuleStore {
    rules: Mutex<HashMap<GuildId, RepostRule>>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the active rule for a guild, if any
    pub fn get(&self, guild_id: GuildId) -> Option<RepostRule> {
        self.rules
            .lock()
            .expect("rule store lock poisoned")
            .get(&guild_id)
            .copied()
    }

    /// Commit a rule for a guild, replacing any prior rule
    pub fn insert(&self, guild_id: GuildId, rule: RepostRule) {
        self.rules
            .lock()
            .expect("rule store lock poisoned")
            .insert(guild_id, rule);
    }
}
