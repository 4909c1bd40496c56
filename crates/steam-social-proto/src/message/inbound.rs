//! Inbound message bodies.
//!
//! Structured messages arrive already decoded by the transport. Client messages
//! with a fixed header arrive as the decoded header plus the raw payload that
//! follows it; the payload is interpreted by [`crate::codec`].

use bytes::Bytes;

use crate::enums::{
    ChatAction, ChatActionResult, ChatEntryType, ChatInfoType, ChatRoomEnterResponse,
    ChatRoomType, ClientPersonaStateFlags, ResultCode,
};
use crate::id::SteamId;

/// One entry of a friends list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendListEntry {
    /// Friend or clan id.
    pub id: SteamId,
    /// Raw relationship code; its meaning depends on the id's account type.
    pub relationship: u32,
}

/// Friends and clans list, either complete or a delta.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendsList {
    /// True for a delta, false for a full snapshot.
    pub incremental: bool,
    /// Entries in arrival order.
    pub friends: Vec<FriendListEntry>,
}

/// Persona data for one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaRecord {
    pub friend_id: SteamId,
    pub persona_state: u32,
    pub persona_state_flags: u32,
    pub game_played_app_id: u32,
    pub game_id: u64,
    pub game_name: String,
    pub game_server_ip: u32,
    pub game_server_port: u32,
    pub query_port: u32,
    pub source_id: SteamId,
    pub game_data_blob: Vec<u8>,
    pub player_name: String,
    pub avatar_hash: Vec<u8>,
    pub last_logoff: u32,
    pub last_logon: u32,
    pub clan_rank: u32,
    pub clan_tag: String,
    pub online_session_instances: u32,
    pub published_instance_id: u32,
    pub persona_set_by_user: bool,
    pub facebook_name: String,
    pub facebook_id: u64,
}

/// Batch of persona updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaStateList {
    /// Which fields of each record are meaningful.
    pub status_flags: ClientPersonaStateFlags,
    pub friends: Vec<PersonaRecord>,
}

/// Clan name and avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanNameInfo {
    pub clan_name: String,
    pub sha_avatar: Vec<u8>,
}

/// Clan member gauges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClanUserCounts {
    pub members: u32,
    pub online: u32,
    pub chatting: u32,
    pub in_game: u32,
}

/// A clan event or announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanEventRecord {
    pub gid: u64,
    pub event_time: u32,
    pub headline: String,
    pub game_id: u64,
    pub just_posted: bool,
}

/// Aggregate clan state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanState {
    pub clan_id: SteamId,
    pub status_flags: ClientPersonaStateFlags,
    pub clan_account_flags: u32,
    pub name_info: Option<ClanNameInfo>,
    pub user_counts: Option<ClanUserCounts>,
    pub events: Vec<ClanEventRecord>,
    pub announcements: Vec<ClanEventRecord>,
}

/// One-to-one chat line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendMsgIncoming {
    pub from: SteamId,
    pub entry_type: ChatEntryType,
    /// Message bytes, possibly followed by NUL padding.
    pub message: Vec<u8>,
    /// Server time in unix seconds.
    pub server_timestamp: u32,
}

/// Header of a chat-room line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatMsgHeader {
    pub entry_type: ChatEntryType,
    pub chatter: SteamId,
    pub chat_room: SteamId,
}

/// Header of a room-entry result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatEnterHeader {
    pub chat_id: SteamId,
    pub friend_id: SteamId,
    pub room_type: ChatRoomType,
    pub owner_id: SteamId,
    pub clan_id: SteamId,
    pub chat_flags: u8,
    pub enter_response: ChatRoomEnterResponse,
    /// Number of member records in the payload.
    pub num_members: i32,
}

/// Header of a member-info message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatMemberInfoHeader {
    pub chat_id: SteamId,
    pub info_type: ChatInfoType,
}

/// Result of a room action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatActionResultMsg {
    pub chat_id: SteamId,
    pub acted_on: SteamId,
    pub action: ChatAction,
    pub result: ChatActionResult,
}

/// Invitation to a chat room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatInvite {
    pub invited: SteamId,
    pub chat_id: SteamId,
    pub patron: SteamId,
    pub room_type: ChatRoomType,
    pub friend_chat_id: SteamId,
    pub chat_name: String,
    pub game_id: u64,
}

/// Answer to a friend request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFriendResponse {
    pub result: ResultCode,
    pub id_added: SteamId,
    pub persona_name_added: String,
}

/// Answer to an ignore request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetIgnoreFriendResponse {
    pub result: ResultCode,
}

/// Profile details of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendProfileInfoResponse {
    pub result: ResultCode,
    pub friend_id: SteamId,
    pub time_created: u32,
    pub real_name: String,
    pub city_name: String,
    pub state_name: String,
    pub country_name: String,
    pub headline: String,
    pub summary: String,
}

/// A message handed over by the transport, identified by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Account details after login.
    AccountInfo,
    FriendsList(FriendsList),
    PersonaState(PersonaStateList),
    ClanState(Box<ClanState>),
    FriendMsgIncoming(FriendMsgIncoming),
    ChatMsg { header: ChatMsgHeader, payload: Bytes },
    ChatEnter { header: ChatEnterHeader, payload: Bytes },
    ChatMemberInfo { header: ChatMemberInfoHeader, payload: Bytes },
    ChatActionResult(ChatActionResultMsg),
    ChatInvite(ChatInvite),
    AddFriendResponse(AddFriendResponse),
    SetIgnoreFriendResponse(SetIgnoreFriendResponse),
    FriendProfileInfoResponse(Box<FriendProfileInfoResponse>),
    /// Any kind this crate does not model.
    Other { kind: u32, payload: Bytes },
}

impl Inbound {
    /// Kind tag of this message.
    #[must_use]
    pub fn kind(&self) -> super::MessageKind {
        use super::MessageKind;
        match self {
            Self::AccountInfo => MessageKind::AccountInfo,
            Self::FriendsList(_) => MessageKind::FriendsList,
            Self::PersonaState(_) => MessageKind::PersonaState,
            Self::ClanState(_) => MessageKind::ClanState,
            Self::FriendMsgIncoming(_) => MessageKind::FriendMsgIncoming,
            Self::ChatMsg { .. } => MessageKind::ChatMsg,
            Self::ChatEnter { .. } => MessageKind::ChatEnter,
            Self::ChatMemberInfo { .. } => MessageKind::ChatMemberInfo,
            Self::ChatActionResult(_) => MessageKind::ChatActionResult,
            Self::ChatInvite(_) => MessageKind::ChatInvite,
            Self::AddFriendResponse(_) => MessageKind::AddFriendResponse,
            Self::SetIgnoreFriendResponse(_) => MessageKind::SetIgnoreFriendResponse,
            Self::FriendProfileInfoResponse(_) => MessageKind::FriendProfileInfoResponse,
            Self::Other { kind, .. } => MessageKind::Other(*kind),
        }
    }
}
