//! Message types exchanged with the transport.

mod inbound;
mod outbound;

pub use inbound::{
    AddFriendResponse, ChatActionResultMsg, ChatEnterHeader, ChatInvite, ChatMemberInfoHeader,
    ChatMsgHeader, ClanEventRecord, ClanNameInfo, ClanState, ClanUserCounts,
    FriendListEntry, FriendMsgIncoming, FriendProfileInfoResponse, FriendsList, Inbound,
    PersonaRecord, PersonaStateList, SetIgnoreFriendResponse,
};
pub use outbound::Outbound;

/// Kind tag of an inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    AccountInfo,
    FriendsList,
    PersonaState,
    ClanState,
    FriendMsgIncoming,
    ChatMsg,
    ChatEnter,
    ChatMemberInfo,
    ChatActionResult,
    ChatInvite,
    AddFriendResponse,
    SetIgnoreFriendResponse,
    FriendProfileInfoResponse,
    /// A kind the dispatcher does not handle.
    Other(u32),
}

impl MessageKind {
    /// Static label for logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccountInfo => "account_info",
            Self::FriendsList => "friends_list",
            Self::PersonaState => "persona_state",
            Self::ClanState => "clan_state",
            Self::FriendMsgIncoming => "friend_msg_incoming",
            Self::ChatMsg => "chat_msg",
            Self::ChatEnter => "chat_enter",
            Self::ChatMemberInfo => "chat_member_info",
            Self::ChatActionResult => "chat_action_result",
            Self::ChatInvite => "chat_invite",
            Self::AddFriendResponse => "add_friend_response",
            Self::SetIgnoreFriendResponse => "set_ignore_friend_response",
            Self::FriendProfileInfoResponse => "friend_profile_info_response",
            Self::Other(_) => "other",
        }
    }
}
