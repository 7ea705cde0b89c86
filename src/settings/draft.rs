use crate::store::RepostRule;
use serenity::model::id::{ChannelId, UserId};

/// In-progress selections of one settings session
///
/// Each selection fills exactly one field. A draft only becomes a
/// `RepostRule` once all three fields are present; `commit` returns `None`
/// until then, so partial drafts can never reach the rule store.
#[derive(Debug, Default, Clone, Copy)]
pub struct Draft {
    watched_user: Option<UserId>,
    source_channel: Option<ChannelId>,
    destination_channel: Option<ChannelId>,
}

impl Draft {
    pub fn choose_watched_user(&mut self, user: UserId) {
        self.watched_user = Some(user);
    }

    pub fn choose_source_channel(&mut self, channel: ChannelId) {
        self.source_channel = Some(channel);
    }

    pub fn choose_destination_channel(&mut self, channel: ChannelId) {
        self.destination_channel = Some(channel);
    }

    pub fn is_complete(&self) -> bool {
        self.watched_user.is_some()
            && self.source_channel.is_some()
            && self.destination_channel.is_some()
    }

    /// Produce the rule for this draft, or `None` while any field is unset
    pub fn commit(&self) -> Option<RepostRule> {
        Some(RepostRule {
            watched_user: self.watched_user?,
            source_channel: self.source_channel?,
            destination_channel: self.destination_channel?,
        })
    }
}
