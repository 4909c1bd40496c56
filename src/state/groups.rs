//! Groups (clans) cache.

use super::cache::{Entity, EntityCache, field_setter};
use steam_social_proto::{ClanRelationship, SteamId};

/// A clan the local account is related to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub id: SteamId,
    pub name: String,
    pub avatar: String,
    pub relationship: ClanRelationship,
    pub member_total_count: u32,
    pub member_online_count: u32,
    pub member_chatting_count: u32,
    pub member_in_game_count: u32,
}

impl Group {
    /// A freshly discovered clan carrying only its relationship.
    pub fn new(id: SteamId, relationship: ClanRelationship) -> Self {
        Self {
            id,
            relationship,
            ..Self::default()
        }
    }
}

impl Entity for Group {
    fn id(&self) -> SteamId {
        self.id
    }
}

/// Thread-safe clans table.
pub type GroupsList = EntityCache<Group>;

impl EntityCache<Group> {
    field_setter!(set_name, name: String);
    field_setter!(set_avatar, avatar: String);
    field_setter!(set_relationship, relationship: ClanRelationship);
    field_setter!(set_member_total_count, member_total_count: u32);
    field_setter!(set_member_online_count, member_online_count: u32);
    field_setter!(set_member_chatting_count, member_chatting_count: u32);
    field_setter!(set_member_in_game_count, member_in_game_count: u32);
}
