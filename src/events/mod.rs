//! Domain events published after each applied update.
//!
//! Every event is emitted only once the cache mutation it describes has been
//! committed, so a consumer that sees an event can read the affected cache and
//! observe the change.

mod emitter;

pub use emitter::{EventEmitter, EventStream, channel};

use chrono::{DateTime, Utc};
use steam_social_proto::{
    ChatAction, ChatActionResult, ChatEntryType, ChatInfoType, ChatMemberStateChange,
    ChatRoomEnterResponse, ChatRoomType, ClanRelationship, ClientPersonaStateFlags,
    FriendRelationship, PersonaState, PersonaStateFlags, ResultCode, SteamId,
};

/// Everything the dispatcher publishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialEvent {
    /// A friend relationship changed (incremental lists only).
    FriendState {
        id: SteamId,
        relationship: FriendRelationship,
    },

    /// A clan relationship changed (incremental lists only).
    GroupState {
        id: SteamId,
        relationship: ClanRelationship,
    },

    /// A full friends list has been applied.
    FriendsList,

    /// Persona data for one account.
    PersonaState(Box<PersonaStateEvent>),

    /// Aggregate clan state.
    ClanState(Box<ClanStateEvent>),

    /// A chat line, one-to-one or in a room.
    ChatMsg(ChatMsgEvent),

    /// The local session entered a room and its roster is loaded.
    ChatEnter(Box<ChatEnterEvent>),

    /// A room member's state changed.
    ChatMemberInfo {
        chat_room_id: SteamId,
        info_type: ChatInfoType,
        state_change: StateChangeDetails,
    },

    /// Result of a room action.
    ChatActionResult {
        chat_room_id: SteamId,
        chatter_id: SteamId,
        action: ChatAction,
        result: ChatActionResult,
    },

    /// Invitation to a room.
    ChatInvite(Box<ChatInviteEvent>),

    /// Answer to a friend request.
    FriendAdded {
        result: ResultCode,
        id: SteamId,
        persona_name: String,
    },

    /// Answer to an ignore request.
    IgnoreFriend { result: ResultCode },

    /// Profile details of an account.
    ProfileInfo(Box<ProfileInfoEvent>),
}

impl SocialEvent {
    /// Static label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FriendState { .. } => "friend_state",
            Self::GroupState { .. } => "group_state",
            Self::FriendsList => "friends_list",
            Self::PersonaState(_) => "persona_state",
            Self::ClanState(_) => "clan_state",
            Self::ChatMsg(_) => "chat_msg",
            Self::ChatEnter(_) => "chat_enter",
            Self::ChatMemberInfo { .. } => "chat_member_info",
            Self::ChatActionResult { .. } => "chat_action_result",
            Self::ChatInvite(_) => "chat_invite",
            Self::FriendAdded { .. } => "friend_added",
            Self::IgnoreFriend { .. } => "ignore_friend",
            Self::ProfileInfo(_) => "profile_info",
        }
    }
}

/// Persona data as received, independent of what the caches applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaStateEvent {
    pub status_flags: ClientPersonaStateFlags,
    pub friend_id: SteamId,
    pub state: PersonaState,
    pub state_flags: PersonaStateFlags,
    pub game_app_id: u32,
    pub game_id: u64,
    pub game_name: String,
    pub game_server_ip: u32,
    pub game_server_port: u32,
    pub query_port: u32,
    pub source_steam_id: SteamId,
    pub game_data_blob: Vec<u8>,
    pub name: String,
    pub avatar: String,
    pub last_log_off: u32,
    pub last_log_on: u32,
    pub clan_rank: u32,
    pub clan_tag: String,
    pub online_session_instances: u32,
    pub published_session_id: u32,
    pub persona_set_by_user: bool,
    pub facebook_name: String,
    pub facebook_id: u64,
}

/// A clan event or announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanEventDetails {
    pub id: u64,
    pub event_time: u32,
    pub headline: String,
    pub game_id: u64,
    pub just_posted: bool,
}

/// Aggregate clan state as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanStateEvent {
    pub clan_id: SteamId,
    pub state_flags: ClientPersonaStateFlags,
    pub account_flags: u32,
    pub clan_name: String,
    pub avatar: String,
    pub member_total_count: u32,
    pub member_online_count: u32,
    pub member_chatting_count: u32,
    pub member_in_game_count: u32,
    pub events: Vec<ClanEventDetails>,
    pub announcements: Vec<ClanEventDetails>,
}

/// A chat line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMsgEvent {
    /// Room the line was sent to; `None` for one-to-one messages.
    pub chat_room_id: Option<SteamId>,
    pub chatter_id: SteamId,
    pub message: String,
    pub entry_type: ChatEntryType,
    /// Server time, carried by one-to-one messages only.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Room metadata from a room-entry result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatEnterEvent {
    pub chat_room_id: SteamId,
    pub friend_id: SteamId,
    pub chat_room_type: ChatRoomType,
    pub owner_id: SteamId,
    pub clan_id: SteamId,
    pub chat_flags: u8,
    pub enter_response: ChatRoomEnterResponse,
    pub name: String,
}

/// Decoded fields of a member state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChangeDetails {
    pub chatter_acted_on: SteamId,
    pub state_change: ChatMemberStateChange,
    pub chatter_acted_by: SteamId,
}

/// Invitation to a room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatInviteEvent {
    pub invited_id: SteamId,
    pub chat_room_id: SteamId,
    pub patron_id: SteamId,
    pub chat_room_type: ChatRoomType,
    pub friend_chat_id: SteamId,
    pub chat_room_name: String,
    pub game_id: u64,
}

/// Profile details of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileInfoEvent {
    pub result: ResultCode,
    pub id: SteamId,
    pub time_created: u32,
    pub real_name: String,
    pub city_name: String,
    pub state_name: String,
    pub country_name: String,
    pub headline: String,
    pub summary: String,
}
