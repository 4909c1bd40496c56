//! Outbound requests.
//!
//! These are handed to the transport as values; serializing them onto the wire
//! is the transport's job.

use bytes::Bytes;

use crate::enums::{
    ChatAction, ChatEntryType, ChatInfoType, ClientPersonaStateFlags, PersonaState,
};
use crate::id::SteamId;

/// A request for the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Broadcast the local persona state, and optionally a new name.
    ChangeStatus {
        persona_state: PersonaState,
        player_name: Option<String>,
    },
    /// One-to-one chat line.
    FriendMsg {
        to: SteamId,
        entry_type: ChatEntryType,
        message: Vec<u8>,
    },
    /// Chat-room line.
    ChatMsg {
        chat_room: SteamId,
        chatter: SteamId,
        entry_type: ChatEntryType,
        message: Vec<u8>,
    },
    AddFriend { id: SteamId },
    RemoveFriend { id: SteamId },
    SetIgnoreFriend {
        me: SteamId,
        friend: SteamId,
        ignore: bool,
    },
    /// Ask for persona data of the given accounts.
    RequestFriendData {
        flags: ClientPersonaStateFlags,
        friends: Vec<SteamId>,
    },
    FriendProfileInfo { id: SteamId },
    JoinChat { chat_id: SteamId },
    /// Member-info message; the payload is an encoded
    /// [`StateChange`](crate::codec::StateChange).
    ChatMemberInfo {
        chat_id: SteamId,
        info_type: ChatInfoType,
        payload: Bytes,
    },
    ChatAction {
        chat_id: SteamId,
        target: SteamId,
        action: ChatAction,
    },
}
