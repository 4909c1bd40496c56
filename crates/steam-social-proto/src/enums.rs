//! Wire enumerations and flag sets.
//!
//! Every enum keeps an `Other` variant so that codes added by the service after
//! this crate was written survive a decode/encode cycle untouched.

use bitflags::bitflags;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty {
            $(#[$fmeta:meta])* $first:ident = $fval:literal,
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(#[$fmeta])* $first,
            $( $(#[$vmeta])* $variant, )*
            /// A code this crate does not know.
            Other($repr),
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$first
            }
        }

        impl From<$repr> for $name {
            fn from(code: $repr) -> Self {
                match code {
                    $fval => Self::$first,
                    $( $value => Self::$variant, )*
                    other => Self::Other(other),
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                match value {
                    $name::$first => $fval,
                    $( $name::$variant => $value, )*
                    $name::Other(code) => code,
                }
            }
        }
    };
}

wire_enum! {
    /// Relationship between the local account and another individual.
    pub enum FriendRelationship: u32 {
        /// No relationship; never stored.
        None = 0,
        /// Blocked by the local account.
        Blocked = 1,
        /// They sent the local account a friend request.
        RequestRecipient = 2,
        /// Mutual friends.
        Friend = 3,
        /// The local account sent them a friend request.
        RequestInitiator = 4,
        /// Ignored.
        Ignored = 5,
        /// Ignored after having been a friend.
        IgnoredFriend = 6,
        /// Suggested by the service.
        SuggestedFriend = 7,
    }
}

wire_enum! {
    /// Relationship between the local account and a clan.
    pub enum ClanRelationship: u32 {
        /// No relationship; never stored.
        None = 0,
        /// Blocked.
        Blocked = 1,
        /// Invited to join.
        Invited = 2,
        /// Member.
        Member = 3,
        /// Kicked.
        Kicked = 4,
        /// Kick acknowledged by the local account.
        KickAcknowledged = 5,
    }
}

wire_enum! {
    /// Online status of an account.
    pub enum PersonaState: u32 {
        /// Offline.
        Offline = 0,
        /// Online.
        Online = 1,
        /// Busy.
        Busy = 2,
        /// Away.
        Away = 3,
        /// Snooze.
        Snooze = 4,
        /// Looking to trade.
        LookingToTrade = 5,
        /// Looking to play.
        LookingToPlay = 6,
    }
}

wire_enum! {
    /// Kind of a chat line.
    pub enum ChatEntryType: i32 {
        /// Invalid.
        Invalid = 0,
        /// Plain chat message.
        ChatMsg = 1,
        /// Typing notification.
        Typing = 2,
        /// Game invite.
        InviteGame = 3,
        /// Emote.
        Emote = 4,
        /// The other side left the conversation.
        LeftConversation = 6,
        /// A user entered the room.
        Entered = 7,
        /// A user was kicked.
        WasKicked = 8,
        /// A user was banned.
        WasBanned = 9,
        /// A user disconnected.
        Disconnected = 10,
        /// Replayed history line.
        HistoricalChat = 11,
        /// A link was blocked.
        LinkBlocked = 14,
    }
}

wire_enum! {
    /// Kind of chat room.
    pub enum ChatRoomType: i32 {
        /// Friends chat.
        Friend = 1,
        /// Multi-user chat.
        Muc = 2,
        /// Game lobby.
        Lobby = 3,
    }
}

wire_enum! {
    /// Answer to a room join attempt.
    pub enum ChatRoomEnterResponse: i32 {
        /// Joined.
        Success = 1,
        /// Room does not exist.
        DoesntExist = 2,
        /// Not allowed.
        NotAllowed = 3,
        /// Room is full.
        Full = 4,
        /// Unexpected error.
        Error = 5,
        /// Banned from the room.
        Banned = 6,
        /// Limited account.
        Limited = 7,
        /// Clan chat is disabled.
        ClanDisabled = 8,
        /// Community ban.
        CommunityBan = 9,
        /// A member blocked the local account.
        MemberBlockedYou = 10,
        /// The local account blocked a member.
        YouBlockedMember = 11,
    }
}

wire_enum! {
    /// Change code of a member-info state change.
    pub enum ChatMemberStateChange: i32 {
        /// Member entered the room.
        Entered = 1,
        /// Member left.
        Left = 2,
        /// Member disconnected.
        Disconnected = 4,
        /// Member was kicked.
        Kicked = 8,
        /// Member was banned.
        Banned = 16,
        /// Member started speaking on voice.
        VoiceSpeaking = 4096,
        /// Member stopped speaking on voice.
        VoiceDoneSpeaking = 8192,
    }
}

impl ChatMemberStateChange {
    /// True for the codes that take the member out of the roster.
    #[must_use]
    pub fn removes_member(self) -> bool {
        matches!(
            self,
            Self::Left | Self::Disconnected | Self::Kicked | Self::Banned
        )
    }
}

wire_enum! {
    /// Sub-type of a member-info message.
    pub enum ChatInfoType: i32 {
        /// Member state change.
        StateChange = 1,
        /// Member info update.
        InfoUpdate = 2,
        /// Room member limit changed.
        MemberLimitChange = 3,
    }
}

wire_enum! {
    /// Moderation and room actions.
    pub enum ChatAction: i32 {
        /// Invite to the room.
        InviteChat = 1,
        /// Kick a member.
        Kick = 2,
        /// Ban a member.
        Ban = 3,
        /// Lift a ban.
        UnBan = 4,
        /// Start voice.
        StartVoiceSpeak = 5,
        /// End voice.
        EndVoiceSpeak = 6,
        /// Lock the room.
        LockChat = 7,
        /// Unlock the room.
        UnlockChat = 8,
        /// Close the room.
        CloseChat = 9,
        /// Make joinable.
        SetJoinable = 10,
        /// Make unjoinable.
        SetUnjoinable = 11,
        /// Transfer ownership.
        SetOwner = 12,
        /// Hide from friends.
        SetInvisibleToFriends = 13,
        /// Show to friends.
        SetVisibleToFriends = 14,
        /// Enable moderation.
        SetModerated = 15,
        /// Disable moderation.
        SetUnmoderated = 16,
    }
}

wire_enum! {
    /// Outcome of a [`ChatAction`].
    pub enum ChatActionResult: i32 {
        /// Done.
        Success = 1,
        /// Failed.
        Error = 2,
        /// Missing permission.
        NotPermitted = 3,
        /// Target is a clan member.
        NotAllowedOnClanMember = 4,
        /// Target is banned.
        NotAllowedOnBannedUser = 5,
        /// Target owns the room.
        NotAllowedOnChatOwner = 6,
        /// Target is the acting account.
        NotAllowedOnSelf = 7,
        /// Room does not exist.
        ChatDoesntExist = 8,
        /// Room is full.
        ChatFull = 9,
        /// No free voice slot.
        VoiceSlotsFull = 10,
    }
}

wire_enum! {
    /// Generic service result code.
    pub enum ResultCode: i32 {
        /// Invalid.
        Invalid = 0,
        /// Success.
        Ok = 1,
        /// Generic failure.
        Fail = 2,
        /// No connection.
        NoConnection = 3,
        /// Bad password.
        InvalidPassword = 5,
        /// Logged in elsewhere.
        LoggedInElsewhere = 6,
        /// Protocol version mismatch.
        InvalidProtocolVer = 7,
        /// Bad parameter.
        InvalidParam = 8,
        /// Not found.
        FileNotFound = 9,
        /// Busy.
        Busy = 10,
        /// Invalid state.
        InvalidState = 11,
        /// Invalid name.
        InvalidName = 12,
        /// Invalid email.
        InvalidEmail = 13,
        /// Duplicate name.
        DuplicateName = 14,
        /// Access denied.
        AccessDenied = 15,
        /// Timed out.
        Timeout = 16,
        /// Banned.
        Banned = 17,
        /// Account not found.
        AccountNotFound = 18,
        /// Invalid identifier.
        InvalidSteamId = 19,
        /// Service unavailable.
        ServiceUnavailable = 20,
        /// Not logged on.
        NotLoggedOn = 21,
        /// Pending.
        Pending = 22,
        /// Rate or count limit exceeded.
        LimitExceeded = 25,
        /// Blocked.
        Blocked = 40,
        /// Ignored.
        Ignored = 41,
    }
}

bitflags! {
    /// Which persona fields a persona-state message carries, or a request
    /// asks for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ClientPersonaStateFlags: u32 {
        /// Online status.
        const STATUS = 1;
        /// Persona name.
        const PLAYER_NAME = 1 << 1;
        /// Game server query port.
        const QUERY_PORT = 1 << 2;
        /// Source id.
        const SOURCE_ID = 1 << 3;
        /// Avatar, persona state and state flags.
        const PRESENCE = 1 << 4;
        /// Metadata.
        const METADATA = 1 << 5;
        /// Last logon/logoff.
        const LAST_SEEN = 1 << 6;
        /// Clan info.
        const CLAN_INFO = 1 << 7;
        /// Extra game info.
        const GAME_EXTRA_INFO = 1 << 8;
        /// Game played (app id, game id, name).
        const GAME_DATA_BLOB = 1 << 9;
        /// Clan tag.
        const CLAN_TAG = 1 << 10;
        /// Facebook info.
        const FACEBOOK = 1 << 11;
    }
}

impl ClientPersonaStateFlags {
    /// Flags requested for friends after a full friends list.
    pub const DEFAULT_INFO_REQUEST: Self = Self::PLAYER_NAME
        .union(Self::PRESENCE)
        .union(Self::SOURCE_ID)
        .union(Self::GAME_EXTRA_INFO);

    /// Flags requested for the local account after login.
    pub const OWN_INFO_REQUEST: Self = Self::PLAYER_NAME
        .union(Self::PRESENCE)
        .union(Self::SOURCE_ID);
}

bitflags! {
    /// Extra persona state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PersonaStateFlags: u32 {
        /// Has rich presence.
        const HAS_RICH_PRESENCE = 1;
        /// In a joinable game.
        const IN_JOINABLE_GAME = 1 << 1;
        /// Golden profile.
        const GOLDEN = 1 << 2;
        /// Remote play together.
        const REMOTE_PLAY_TOGETHER = 1 << 3;
        /// Online through the web client.
        const CLIENT_TYPE_WEB = 1 << 8;
        /// Online through the mobile client.
        const CLIENT_TYPE_MOBILE = 1 << 9;
        /// Online through big picture.
        const CLIENT_TYPE_TENFOOT = 1 << 10;
        /// Online through VR.
        const CLIENT_TYPE_VR = 1 << 11;
        /// Launched with a gamepad.
        const LAUNCH_TYPE_GAMEPAD = 1 << 12;
        /// Launched through a compatibility tool.
        const LAUNCH_TYPE_COMPAT_TOOL = 1 << 13;
    }
}

bitflags! {
    /// Room-level permissions of a chat member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChatPermissions: i32 {
        /// Close the room.
        const CLOSE = 1;
        /// Invite others.
        const INVITE = 1 << 1;
        /// Talk.
        const TALK = 1 << 3;
        /// Kick members.
        const KICK = 1 << 4;
        /// Mute members.
        const MUTE = 1 << 5;
        /// Edit room metadata.
        const SET_METADATA = 1 << 6;
        /// Change permissions.
        const CHANGE_PERMISSIONS = 1 << 7;
        /// Ban members.
        const BAN = 1 << 8;
        /// Change access.
        const CHANGE_ACCESS = 1 << 9;
    }
}

bitflags! {
    /// Clan-level permissions of a chat member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClanPermissions: i32 {
        /// Clan owner.
        const OWNER = 1;
        /// Clan officer.
        const OFFICER = 1 << 1;
        /// Clan member.
        const MEMBER = 1 << 2;
        /// Clan moderator.
        const MODERATOR = 1 << 3;
        /// Owner of the clan's game.
        const OGG_GAME_OWNER = 1 << 4;
        /// Not a clan member.
        const NON_MEMBER = 1 << 7;
    }
}

macro_rules! empty_default {
    ($($flags:ty),+) => {
        $(
            impl Default for $flags {
                fn default() -> Self {
                    Self::empty()
                }
            }
        )+
    };
}

empty_default!(
    ClientPersonaStateFlags,
    PersonaStateFlags,
    ChatPermissions,
    ClanPermissions
);
