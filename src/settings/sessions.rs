use super::draft::Draft;
use crate::store::RepostRule;
use serenity::model::id::{GuildId, MessageId};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Inactivity timeout after which a settings session is discarded
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(300);

/// Result of a save attempt on a settings session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft was complete; the session is closed and the rule returned
    Saved { guild_id: GuildId, rule: RepostRule },
    /// One or more fields are still unset; the session stays open
    Incomplete,
    /// No live session exists for this menu message
    Expired,
}

struct Session {
    guild_id: GuildId,
    draft: Draft,
    touched_at: Instant,
}

impl Session {
    fn is_expired(&self, timeout: Duration) -> bool {
        self.touched_at.elapsed() >= timeout
    }
}

/// Open settings sessions, keyed by the menu message they belong to
///
/// Sessions expire lazily: every access checks the inactivity timeout and
/// drops stale entries, so no background task is needed. Two sessions for
/// the same guild are not coordinated; whichever saves last wins.
pub struct SessionStore {
    sessions: Mutex<HashMap<MessageId, Session>>,
    timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_timeout(SESSION_TIMEOUT)
    }

    /// Create a store with a custom timeout (for testing expiry)
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    /// Register a fresh session for a newly opened settings menu
    pub fn open(&self, message_id: MessageId, guild_id: GuildId) {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");

        // Opening is also when stale sessions get swept
        let timeout = self.timeout;
        sessions.retain(|_, session| !session.is_expired(timeout));

        sessions.insert(
            message_id,
            Session {
                guild_id,
                draft: Draft::default(),
                touched_at: Instant::now(),
            },
        );
    }

    /// Apply a selection to the session's draft
    ///
    /// Returns `false` when no live session exists for the message, in which
    /// case nothing is mutated.
    pub fn update(&self, message_id: MessageId, apply: impl FnOnce(&mut Draft)) -> bool {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");

        let Some(session) = sessions.get_mut(&message_id) else {
            return false;
        };

        if session.is_expired(self.timeout) {
            sessions.remove(&message_id);
            return false;
        }

        apply(&mut session.draft);
        session.touched_at = Instant::now();
        true
    }

    /// Attempt to save the session's draft
    ///
    /// A complete draft closes the session and yields the rule; an incomplete
    /// one leaves the session open for further edits.
    pub fn save(&self, message_id: MessageId) -> SaveOutcome {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");

        let Some(session) = sessions.get_mut(&message_id) else {
            return SaveOutcome::Expired;
        };

        if session.is_expired(self.timeout) {
            sessions.remove(&message_id);
            return SaveOutcome::Expired;
        }

        match session.draft.commit() {
            Some(rule) => {
                let guild_id = session.guild_id;
                sessions.remove(&message_id);
                SaveOutcome::Saved { guild_id, rule }
            }
            None => {
                session.touched_at = Instant::now();
                SaveOutcome::Incomplete
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::model::id::{ChannelId, UserId};

    const MENU: MessageId = MessageId::new(555);
    const GUILD: GuildId = GuildId::new(1);

    fn complete(store: &SessionStore) {
        assert!(store.update(MENU, |d| d.choose_watched_user(UserId::new(42))));
        assert!(store.update(MENU, |d| d.choose_source_channel(ChannelId::new(100))));
        assert!(store.update(MENU, |d| d.choose_destination_channel(ChannelId::new(200))));
    }

    #[test]
    fn test_save_without_session_is_expired() {
        let store = SessionStore::new();
        assert_eq!(store.save(MENU), SaveOutcome::Expired);
    }

    #[test]
    fn test_incomplete_save_keeps_session_open() {
        let store = SessionStore::new();
        store.open(MENU, GUILD);
        assert!(store.update(MENU, |d| d.choose_watched_user(UserId::new(42))));

        assert_eq!(store.save(MENU), SaveOutcome::Incomplete);

        // Session is still live and can be completed
        assert!(store.update(MENU, |d| d.choose_source_channel(ChannelId::new(100))));
        assert!(store.update(MENU, |d| d.choose_destination_channel(ChannelId::new(200))));
        assert!(matches!(store.save(MENU), SaveOutcome::Saved { .. }));
    }

    #[test]
    fn test_complete_save_closes_session() {
        let store = SessionStore::new();
        store.open(MENU, GUILD);
        complete(&store);

        let outcome = store.save(MENU);
        let SaveOutcome::Saved { guild_id, rule } = outcome else {
            panic!("expected Saved, got {:?}", outcome);
        };
        assert_eq!(guild_id, GUILD);
        assert_eq!(rule.watched_user, UserId::new(42));
        assert_eq!(rule.source_channel, ChannelId::new(100));
        assert_eq!(rule.destination_channel, ChannelId::new(200));

        // Saving terminated the session
        assert_eq!(store.save(MENU), SaveOutcome::Expired);
        assert!(!store.update(MENU, |d| d.choose_watched_user(UserId::new(7))));
    }

    #[test]
    fn test_expired_session_is_discarded() {
        let store = SessionStore::with_timeout(Duration::ZERO);
        store.open(MENU, GUILD);

        assert!(!store.update(MENU, |d| d.choose_watched_user(UserId::new(42))));
        assert_eq!(store.save(MENU), SaveOutcome::Expired);
    }

    #[test]
    fn test_reopen_resets_draft() {
        let store = SessionStore::new();
        store.open(MENU, GUILD);
        complete(&store);

        // A second /settings on the same message starts a fresh draft
        store.open(MENU, GUILD);
        assert_eq!(store.save(MENU), SaveOutcome::Incomplete);
    }
}
