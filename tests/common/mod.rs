//! Integration test common infrastructure.
//!
//! Provides a transport that records outbound requests and builders for the
//! binary payloads of room messages.

#![allow(dead_code)]

use bytes::{BufMut, Bytes, BytesMut};
use parking_lot::Mutex;
use std::sync::Arc;
use steam_social::config::SocialConfig;
use steam_social::{EventStream, Social, Transport, TransportError};
use steam_social_proto::codec::ROSTER_ENTRY_PADDING;
use steam_social_proto::{
    ChatPermissions, ClanPermissions, MemberRecord, Outbound, StateChange, SteamId,
};

/// Transport that keeps every request for later inspection.
#[derive(Debug)]
pub struct RecordingTransport {
    local_id: SteamId,
    sent: Mutex<Vec<Outbound>>,
    closed: bool,
}

impl RecordingTransport {
    pub fn new(local_id: SteamId) -> Self {
        Self {
            local_id,
            sent: Mutex::new(Vec::new()),
            closed: false,
        }
    }

    /// A transport whose every send fails.
    pub fn closed(local_id: SteamId) -> Self {
        Self {
            closed: true,
            ..Self::new(local_id)
        }
    }

    pub fn sent(&self) -> Vec<Outbound> {
        self.sent.lock().clone()
    }
}

impl Transport for RecordingTransport {
    fn local_id(&self) -> SteamId {
        self.local_id
    }

    fn send(&self, msg: Outbound) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.sent.lock().push(msg);
        Ok(())
    }
}

pub fn me() -> SteamId {
    individual(42)
}

pub fn individual(account: u32) -> SteamId {
    SteamId::from_parts(1, 1, 1, account)
}

pub fn clan(account: u32) -> SteamId {
    SteamId::from_parts(1, 7, 0, account)
}

pub fn room(account: u32) -> SteamId {
    clan(account).clan_to_chat()
}

/// A dispatcher for [`me`] with default settings.
pub fn social() -> (Social, EventStream, Arc<RecordingTransport>) {
    social_with(SocialConfig::default())
}

pub fn social_with(config: SocialConfig) -> (Social, EventStream, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new(me()));
    let (social, events) = Social::new(transport.clone(), config);
    (social, events, transport)
}

pub fn member(id: SteamId, chat: i32, clan: i32) -> MemberRecord {
    MemberRecord {
        id,
        chat_permissions: ChatPermissions::from_bits_retain(chat),
        clan_permissions: ClanPermissions::from_bits_retain(clan),
    }
}

/// Room-entry payload: name, reserved byte, then each record and its padding.
pub fn roster_payload(name: &str, members: &[MemberRecord]) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_slice(name.as_bytes());
    buf.put_u8(0);
    buf.put_u8(0);
    for m in members {
        m.encode(&mut buf);
        buf.put_bytes(0, ROSTER_ENTRY_PADDING);
    }
    buf.freeze()
}

pub fn state_change_payload(change: StateChange) -> Bytes {
    change.encode()
}
