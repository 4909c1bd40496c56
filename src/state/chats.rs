//! Chat rooms cache and the rosters nested inside it.
//!
//! A room's roster lives inside its [`Chat`] value, so it is created, mutated
//! and dropped together with the room and only ever under the `ChatsList`
//! write lock. Callers receive rosters as part of a cloned `Chat`; there is no
//! handle to a live roster.

use super::cache::{Entity, EntityCache};
use std::collections::HashMap;
use steam_social_proto::{ChatPermissions, ClanPermissions, MemberRecord, SteamId};

/// A member of a chat room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatMember {
    pub id: SteamId,
    pub chat_permissions: ChatPermissions,
    pub clan_permissions: ClanPermissions,
}

impl From<MemberRecord> for ChatMember {
    fn from(record: MemberRecord) -> Self {
        Self {
            id: record.id,
            chat_permissions: record.chat_permissions,
            clan_permissions: record.clan_permissions,
        }
    }
}

/// A chat room the local session has entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chat {
    pub id: SteamId,
    /// Clan owning the room, zero for rooms without one.
    pub group_id: SteamId,
    members: HashMap<SteamId, ChatMember>,
}

impl Chat {
    /// A room with an empty roster.
    pub fn new(id: SteamId, group_id: SteamId) -> Self {
        Self {
            id,
            group_id,
            members: HashMap::new(),
        }
    }

    /// Current roster.
    pub fn members(&self) -> &HashMap<SteamId, ChatMember> {
        &self.members
    }

    /// Roster entry for `id`.
    pub fn member(&self, id: SteamId) -> Option<&ChatMember> {
        self.members.get(&id)
    }
}

impl Entity for Chat {
    fn id(&self) -> SteamId {
        self.id
    }
}

/// Thread-safe chat rooms table.
pub type ChatsList = EntityCache<Chat>;

impl EntityCache<Chat> {
    /// Record entry into a room, replacing any previous state for it.
    ///
    /// The roster starts empty; the room-entry message carries the full
    /// member list.
    pub(crate) fn enter(&self, id: SteamId, group_id: SteamId) {
        self.replace(Chat::new(id, group_id));
    }

    /// Insert or overwrite `member` in the roster of `chat_id`.
    ///
    /// Creates the room if it is not known yet: member info can arrive before
    /// the room entry.
    pub(crate) fn add_chat_member(&self, chat_id: SteamId, member: ChatMember) {
        self.upsert_with(
            chat_id,
            |id| Chat::new(id, SteamId::default()),
            |chat| {
                chat.members.insert(member.id, member);
            },
        );
    }

    /// Drop `member_id` from the roster of `chat_id`, if both exist.
    pub(crate) fn remove_chat_member(&self, chat_id: SteamId, member_id: SteamId) {
        self.update(chat_id, |chat| {
            chat.members.remove(&member_id);
        });
    }
}
