//! Outbound actions.
//!
//! Each action builds one [`Outbound`] request and hands it to the transport.
//! Only the persona setters touch local state; everything else is reflected
//! in the caches once the service answers.

use crate::error::TransportError;
use crate::handlers::Social;
use crate::telemetry::spans;
use bytes::Bytes;
use steam_social_proto::{
    AccountType, ChatAction, ChatEntryType, ChatInfoType, ChatMemberStateChange,
    ClientPersonaStateFlags, Outbound, PersonaState, StateChange, SteamId,
};
use tracing::debug;

/// Result of an outbound action.
pub type ActionResult = Result<(), TransportError>;

impl Social {
    /// Set the local persona name and broadcast it with the current state.
    pub fn set_persona_name(&self, name: impl Into<String>) -> ActionResult {
        let name = name.into();
        let persona_state = {
            let mut local = self.local.write();
            local.name = name.clone();
            local.persona_state
        };
        self.send(
            "set_persona_name",
            None,
            Outbound::ChangeStatus {
                persona_state,
                player_name: Some(name),
            },
        )
    }

    /// Set the local persona state and broadcast it.
    pub fn set_persona_state(&self, state: PersonaState) -> ActionResult {
        self.local.write().persona_state = state;
        self.send(
            "set_persona_state",
            None,
            Outbound::ChangeStatus {
                persona_state: state,
                player_name: None,
            },
        )
    }

    /// Send a chat line to a friend or a room.
    ///
    /// Individuals and console users get a one-to-one message; clans and
    /// rooms get a room line addressed to the room form of the id. Other
    /// account types cannot receive messages.
    pub fn send_message(
        &self,
        to: SteamId,
        entry_type: ChatEntryType,
        message: &str,
    ) -> ActionResult {
        let msg = match to.account_type() {
            AccountType::Individual | AccountType::ConsoleUser => Outbound::FriendMsg {
                to,
                entry_type,
                message: message.as_bytes().to_vec(),
            },
            AccountType::Clan | AccountType::Chat => Outbound::ChatMsg {
                chat_room: to.clan_to_chat(),
                chatter: self.local_id(),
                entry_type,
                message: message.as_bytes().to_vec(),
            },
            other => {
                debug!(to = %to, account_type = ?other, "not a message recipient");
                return Err(TransportError::Rejected(format!(
                    "cannot message account type {other:?}"
                )));
            }
        };
        self.send("send_message", Some(to), msg)
    }

    /// Send a friend request, or accept one. The answer arrives as a
    /// `FriendAdded` event and a friends-list delta.
    pub fn add_friend(&self, id: SteamId) -> ActionResult {
        self.send("add_friend", Some(id), Outbound::AddFriend { id })
    }

    /// Remove a friend.
    pub fn remove_friend(&self, id: SteamId) -> ActionResult {
        self.send("remove_friend", Some(id), Outbound::RemoveFriend { id })
    }

    /// Ignore or stop ignoring a friend.
    pub fn ignore_friend(&self, id: SteamId, ignore: bool) -> ActionResult {
        self.send(
            "ignore_friend",
            Some(id),
            Outbound::SetIgnoreFriend {
                me: self.local_id(),
                friend: id,
                ignore,
            },
        )
    }

    /// Request persona data for `ids`.
    pub fn request_friend_info(
        &self,
        ids: Vec<SteamId>,
        flags: ClientPersonaStateFlags,
    ) -> ActionResult {
        self.send(
            "request_friend_info",
            None,
            Outbound::RequestFriendData {
                flags,
                friends: ids,
            },
        )
    }

    /// Request profile details for `id`.
    pub fn request_profile_info(&self, id: SteamId) -> ActionResult {
        self.send(
            "request_profile_info",
            Some(id),
            Outbound::FriendProfileInfo { id },
        )
    }

    /// Ask to join a room (or the room of a clan).
    pub fn join_chat(&self, id: SteamId) -> ActionResult {
        self.send(
            "join_chat",
            Some(id),
            Outbound::JoinChat {
                chat_id: id.clan_to_chat(),
            },
        )
    }

    /// Leave a room (or the room of a clan).
    pub fn leave_chat(&self, id: SteamId) -> ActionResult {
        let me = self.local_id();
        let payload: Bytes = StateChange {
            acted_on: me,
            change: ChatMemberStateChange::Left,
            acted_by: me,
            member: None,
        }
        .encode();
        self.send(
            "leave_chat",
            Some(id),
            Outbound::ChatMemberInfo {
                chat_id: id.clan_to_chat(),
                info_type: ChatInfoType::StateChange,
                payload,
            },
        )
    }

    /// Kick `member` from `room`.
    pub fn kick_chat_member(&self, room: SteamId, member: SteamId) -> ActionResult {
        self.chat_action("kick_chat_member", room, member, ChatAction::Kick)
    }

    /// Ban `member` from `room`.
    pub fn ban_chat_member(&self, room: SteamId, member: SteamId) -> ActionResult {
        self.chat_action("ban_chat_member", room, member, ChatAction::Ban)
    }

    /// Lift the ban of `member` in `room`.
    pub fn unban_chat_member(&self, room: SteamId, member: SteamId) -> ActionResult {
        self.chat_action("unban_chat_member", room, member, ChatAction::UnBan)
    }

    fn chat_action(
        &self,
        name: &'static str,
        room: SteamId,
        target: SteamId,
        action: ChatAction,
    ) -> ActionResult {
        self.send(
            name,
            Some(target),
            Outbound::ChatAction {
                chat_id: room.clan_to_chat(),
                target,
                action,
            },
        )
    }

    fn send(&self, name: &'static str, target: Option<SteamId>, msg: Outbound) -> ActionResult {
        let _span = spans::action(name, target).entered();
        debug!("sending request");
        self.transport.send(msg)
    }
}
