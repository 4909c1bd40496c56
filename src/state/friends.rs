//! Friends cache.

use super::cache::{Entity, EntityCache, field_setter};
use steam_social_proto::{FriendRelationship, PersonaState, PersonaStateFlags, SteamId};

/// An individual the local account has a relationship with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Friend {
    pub id: SteamId,
    pub relationship: FriendRelationship,
    pub name: String,
    /// 40-character hex fingerprint, empty until known.
    pub avatar: String,
    pub persona_state: PersonaState,
    pub persona_state_flags: PersonaStateFlags,
    pub game_app_id: u32,
    pub game_id: u64,
    pub game_name: String,
}

impl Friend {
    /// A freshly discovered friend carrying only its relationship.
    pub fn new(id: SteamId, relationship: FriendRelationship) -> Self {
        Self {
            id,
            relationship,
            ..Self::default()
        }
    }
}

impl Entity for Friend {
    fn id(&self) -> SteamId {
        self.id
    }
}

/// Thread-safe friends table.
///
/// ```
/// use steam_social::state::{Friend, FriendsList};
/// use steam_social_proto::{FriendRelationship, SteamId};
///
/// let friends = FriendsList::new();
/// let id = SteamId::from_parts(1, 1, 1, 7);
/// friends.add(Friend::new(id, FriendRelationship::Friend));
/// friends.set_name(id, "gabe".to_string());
/// for (id, friend) in friends.get_copy() {
///     println!("{id}: {}", friend.name);
/// }
/// ```
pub type FriendsList = EntityCache<Friend>;

impl EntityCache<Friend> {
    field_setter!(
        /// Set the persona name.
        set_name, name: String
    );
    field_setter!(
        /// Set the avatar fingerprint.
        set_avatar, avatar: String
    );
    field_setter!(set_relationship, relationship: FriendRelationship);
    field_setter!(set_persona_state, persona_state: PersonaState);
    field_setter!(set_persona_state_flags, persona_state_flags: PersonaStateFlags);
    field_setter!(set_game_app_id, game_app_id: u32);
    field_setter!(set_game_id, game_id: u64);
    field_setter!(set_game_name, game_name: String);
}
