//! Friends lists, persona state and one-to-one messages.

use super::{Social, until_nul};
use crate::events::{ChatMsgEvent, PersonaStateEvent, SocialEvent};
use crate::state::{Friend, Group};
use chrono::DateTime;
use steam_social_proto::message::{FriendMsgIncoming, FriendsList, PersonaRecord, PersonaStateList};
use steam_social_proto::{
    ClanRelationship, ClientPersonaStateFlags, FriendRelationship, Outbound,
    PersonaState, PersonaStateFlags, avatar_hex, is_valid_avatar,
};
use tracing::debug;

impl Social {
    pub(super) fn handle_account_info(&self) {
        if !self.config.request_own_persona {
            return;
        }
        let me = self.local_id();
        self.send_or_warn(Outbound::RequestFriendData {
            flags: self.config.own_persona_flags,
            friends: vec![me],
        });
    }

    pub(super) fn handle_friends_list(&self, list: FriendsList) {
        let mut requested = Vec::new();

        for entry in list.friends {
            let id = entry.id;
            if id.is_clan() {
                let relationship = ClanRelationship::from(entry.relationship);
                if relationship == ClanRelationship::None {
                    self.groups.remove(id);
                } else {
                    self.groups.add(Group::new(id, relationship));
                }
                if list.incremental {
                    self.emit(SocialEvent::GroupState { id, relationship });
                }
            } else {
                let relationship = FriendRelationship::from(entry.relationship);
                if relationship == FriendRelationship::None {
                    self.friends.remove(id);
                } else {
                    self.friends.add(Friend::new(id, relationship));
                }
                if list.incremental {
                    self.emit(SocialEvent::FriendState { id, relationship });
                } else {
                    requested.push(id);
                }
            }
        }

        if list.incremental {
            return;
        }

        debug!(
            friends = self.friends.count(),
            groups = self.groups.count(),
            "full friends list applied"
        );
        if !requested.is_empty() {
            self.send_or_warn(Outbound::RequestFriendData {
                flags: self.config.snapshot_info_flags,
                friends: requested,
            });
        }
        self.emit(SocialEvent::FriendsList);
    }

    pub(super) fn handle_persona_state(&self, list: PersonaStateList) {
        let flags = list.status_flags;
        let me = self.local_id();

        for record in list.friends {
            let id = record.friend_id;
            let avatar = avatar_hex(&record.avatar_hash);

            if id == me {
                let mut local = self.local.write();
                if !record.player_name.is_empty() {
                    local.name = record.player_name.clone();
                }
                if is_valid_avatar(&avatar) {
                    local.avatar = avatar.clone();
                }
            } else if id.is_individual() {
                self.apply_friend_persona(flags, &record, &avatar);
            } else if id.is_clan() {
                self.apply_clan_persona(flags, &record, &avatar);
            }

            self.emit(SocialEvent::PersonaState(Box::new(persona_event(
                flags, record, avatar,
            ))));
        }
    }

    /// Apply the flagged fields of one record in a single critical section.
    fn apply_friend_persona(
        &self,
        flags: ClientPersonaStateFlags,
        record: &PersonaRecord,
        avatar: &str,
    ) {
        self.friends.update(record.friend_id, |friend| {
            if flags.contains(ClientPersonaStateFlags::PLAYER_NAME)
                && !record.player_name.is_empty()
            {
                friend.name = record.player_name.clone();
            }
            if flags.contains(ClientPersonaStateFlags::PRESENCE) {
                if is_valid_avatar(avatar) {
                    friend.avatar = avatar.to_string();
                }
                friend.persona_state = PersonaState::from(record.persona_state);
                friend.persona_state_flags =
                    PersonaStateFlags::from_bits_retain(record.persona_state_flags);
            }
            if flags.contains(ClientPersonaStateFlags::GAME_DATA_BLOB) {
                friend.game_app_id = record.game_played_app_id;
                friend.game_id = record.game_id;
                friend.game_name = record.game_name.clone();
            }
        });
    }

    fn apply_clan_persona(
        &self,
        flags: ClientPersonaStateFlags,
        record: &PersonaRecord,
        avatar: &str,
    ) {
        self.groups.update(record.friend_id, |group| {
            if flags.contains(ClientPersonaStateFlags::PLAYER_NAME)
                && !record.player_name.is_empty()
            {
                group.name = record.player_name.clone();
            }
            if flags.contains(ClientPersonaStateFlags::PRESENCE) && is_valid_avatar(avatar) {
                group.avatar = avatar.to_string();
            }
        });
    }

    pub(super) fn handle_friend_msg(&self, msg: FriendMsgIncoming) {
        self.emit(SocialEvent::ChatMsg(ChatMsgEvent {
            chat_room_id: None,
            chatter_id: msg.from,
            message: until_nul(&msg.message),
            entry_type: msg.entry_type,
            timestamp: DateTime::from_timestamp(i64::from(msg.server_timestamp), 0),
        }));
    }
}

fn persona_event(
    status_flags: ClientPersonaStateFlags,
    record: PersonaRecord,
    avatar: String,
) -> PersonaStateEvent {
    PersonaStateEvent {
        status_flags,
        friend_id: record.friend_id,
        state: PersonaState::from(record.persona_state),
        state_flags: PersonaStateFlags::from_bits_retain(record.persona_state_flags),
        game_app_id: record.game_played_app_id,
        game_id: record.game_id,
        game_name: record.game_name,
        game_server_ip: record.game_server_ip,
        game_server_port: record.game_server_port,
        query_port: record.query_port,
        source_steam_id: record.source_id,
        game_data_blob: record.game_data_blob,
        name: record.player_name,
        avatar,
        last_log_off: record.last_logoff,
        last_log_on: record.last_logon,
        clan_rank: record.clan_rank,
        clan_tag: record.clan_tag,
        online_session_instances: record.online_session_instances,
        published_session_id: record.published_instance_id,
        persona_set_by_user: record.persona_set_by_user,
        facebook_name: record.facebook_name,
        facebook_id: record.facebook_id,
    }
}
