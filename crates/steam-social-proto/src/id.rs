//! 64-bit account identifiers.
//!
//! A [`SteamId`] packs four fields into a single `u64`:
//!
//! | bits  | field          |
//! |-------|----------------|
//! | 0-31  | account number |
//! | 32-51 | instance       |
//! | 52-55 | account type   |
//! | 56-63 | universe       |
//!
//! Clans and chat rooms share an account number: a chat room is the transient
//! session object of a clan, and [`SteamId::clan_to_chat`] /
//! [`SteamId::chat_to_clan`] convert between the two forms.

use std::fmt;

const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;
const INSTANCE_SHIFT: u32 = 32;
const INSTANCE_MASK: u64 = 0x000F_FFFF;
const ACCOUNT_TYPE_SHIFT: u32 = 52;
const ACCOUNT_TYPE_MASK: u64 = 0xF;
const UNIVERSE_SHIFT: u32 = 56;
const UNIVERSE_MASK: u64 = 0xFF;

/// Instance flag marking a chat id as the chat form of a clan.
pub const CHAT_INSTANCE_FLAG_CLAN: u32 = ((INSTANCE_MASK + 1) >> 1) as u32;

/// Account type encoded in bits 52-55 of a [`SteamId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Not a valid account.
    Invalid,
    /// A single user account.
    Individual,
    /// Multiseat account (cybercafe).
    Multiseat,
    /// Persistent game server.
    GameServer,
    /// Anonymous game server.
    AnonGameServer,
    /// Pending account.
    Pending,
    /// Content server.
    ContentServer,
    /// A clan (group).
    Clan,
    /// A chat room.
    Chat,
    /// A console user.
    ConsoleUser,
    /// An anonymous user.
    AnonUser,
    /// A type code this crate does not know.
    Other(u8),
}

impl From<u8> for AccountType {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Invalid,
            1 => Self::Individual,
            2 => Self::Multiseat,
            3 => Self::GameServer,
            4 => Self::AnonGameServer,
            5 => Self::Pending,
            6 => Self::ContentServer,
            7 => Self::Clan,
            8 => Self::Chat,
            9 => Self::ConsoleUser,
            10 => Self::AnonUser,
            other => Self::Other(other),
        }
    }
}

impl From<AccountType> for u8 {
    fn from(ty: AccountType) -> Self {
        match ty {
            AccountType::Invalid => 0,
            AccountType::Individual => 1,
            AccountType::Multiseat => 2,
            AccountType::GameServer => 3,
            AccountType::AnonGameServer => 4,
            AccountType::Pending => 5,
            AccountType::ContentServer => 6,
            AccountType::Clan => 7,
            AccountType::Chat => 8,
            AccountType::ConsoleUser => 9,
            AccountType::AnonUser => 10,
            AccountType::Other(code) => code,
        }
    }
}

/// An account or session identifier.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SteamId(u64);

impl SteamId {
    /// Build an id from its parts. Fields wider than their slot are truncated.
    #[must_use]
    pub const fn from_parts(
        universe: u8,
        account_type: u8,
        instance: u32,
        account_id: u32,
    ) -> Self {
        let raw = ((universe as u64 & UNIVERSE_MASK) << UNIVERSE_SHIFT)
            | ((account_type as u64 & ACCOUNT_TYPE_MASK) << ACCOUNT_TYPE_SHIFT)
            | ((instance as u64 & INSTANCE_MASK) << INSTANCE_SHIFT)
            | (account_id as u64 & ACCOUNT_ID_MASK);
        Self(raw)
    }

    /// Wrap a raw 64-bit value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw 64-bit value.
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Account number (low 32 bits).
    #[must_use]
    pub const fn account_id(self) -> u32 {
        (self.0 & ACCOUNT_ID_MASK) as u32
    }

    /// Instance field.
    #[must_use]
    pub const fn instance(self) -> u32 {
        ((self.0 >> INSTANCE_SHIFT) & INSTANCE_MASK) as u32
    }

    /// Universe field.
    #[must_use]
    pub const fn universe(self) -> u8 {
        ((self.0 >> UNIVERSE_SHIFT) & UNIVERSE_MASK) as u8
    }

    /// Decoded account type.
    #[must_use]
    pub fn account_type(self) -> AccountType {
        AccountType::from(((self.0 >> ACCOUNT_TYPE_SHIFT) & ACCOUNT_TYPE_MASK) as u8)
    }

    /// True for [`AccountType::Clan`] ids.
    #[must_use]
    pub fn is_clan(self) -> bool {
        self.account_type() == AccountType::Clan
    }

    /// True for [`AccountType::Individual`] ids.
    #[must_use]
    pub fn is_individual(self) -> bool {
        self.account_type() == AccountType::Individual
    }

    fn with_account_type(self, ty: AccountType) -> Self {
        let cleared = self.0 & !(ACCOUNT_TYPE_MASK << ACCOUNT_TYPE_SHIFT);
        Self(cleared | ((u8::from(ty) as u64 & ACCOUNT_TYPE_MASK) << ACCOUNT_TYPE_SHIFT))
    }

    fn with_instance(self, instance: u32) -> Self {
        let cleared = self.0 & !(INSTANCE_MASK << INSTANCE_SHIFT);
        Self(cleared | ((instance as u64 & INSTANCE_MASK) << INSTANCE_SHIFT))
    }

    /// Chat form of a clan id. Non-clan ids are returned unchanged.
    #[must_use]
    pub fn clan_to_chat(self) -> Self {
        if self.account_type() != AccountType::Clan {
            return self;
        }
        self.with_account_type(AccountType::Chat)
            .with_instance(CHAT_INSTANCE_FLAG_CLAN)
    }

    /// Clan form of a chat id. Non-chat ids are returned unchanged.
    #[must_use]
    pub fn chat_to_clan(self) -> Self {
        if self.account_type() != AccountType::Chat {
            return self;
        }
        self.with_account_type(AccountType::Clan).with_instance(0)
    }
}

impl From<u64> for SteamId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<SteamId> for u64 {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl fmt::Debug for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SteamId({})", self.0)
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
