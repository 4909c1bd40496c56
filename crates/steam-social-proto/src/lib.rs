//! # steam-social-proto
//!
//! Wire-level building blocks for the social state synchronizer:
//!
//! - [`SteamId`]: 64-bit account identifiers and clan/chat conversion
//! - [`enums`]: relationship, persona, chat and result codes, plus flag sets
//! - [`message`]: inbound message bodies and outbound requests
//! - [`codec`]: the strict decoder for binary member records embedded in room
//!   messages
//!
//! ## Example
//!
//! ```rust
//! use steam_social_proto::codec::StateChange;
//! use steam_social_proto::{ChatMemberStateChange, SteamId};
//!
//! let me = SteamId::from_parts(1, 1, 1, 42);
//! let leave = StateChange {
//!     acted_on: me,
//!     change: ChatMemberStateChange::Left,
//!     acted_by: me,
//!     member: None,
//! };
//! let decoded = StateChange::decode(&leave.encode()).unwrap();
//! assert_eq!(decoded.change, ChatMemberStateChange::Left);
//! ```

#![deny(clippy::all)]

pub mod avatar;
pub mod codec;
pub mod enums;
pub mod error;
pub mod id;
pub mod message;

pub use self::avatar::{avatar_hex, is_valid_avatar};
pub use self::codec::{MemberRecord, RosterReader, StateChange};
pub use self::enums::{
    ChatAction, ChatActionResult, ChatEntryType, ChatInfoType, ChatMemberStateChange,
    ChatPermissions, ChatRoomEnterResponse, ChatRoomType, ClanPermissions, ClanRelationship,
    ClientPersonaStateFlags, FriendRelationship, PersonaState, PersonaStateFlags, ResultCode,
};
pub use self::error::DecodeError;
pub use self::id::{AccountType, SteamId};
pub use self::message::{Inbound, MessageKind, Outbound};
