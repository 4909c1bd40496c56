//! Strict cursor decoder for the binary records embedded in room messages.
//!
//! Room-entry and member-info messages carry a fixed header (decoded by the
//! transport) followed by a payload in the service's binary key-value layout.
//! Only the handful of shapes the room roster needs are understood here:
//!
//! - a member record: tag string, reserved byte, name string, `u64` id,
//!   reserved byte, name string, `i32` chat permissions, reserved byte,
//!   name string, `i32` clan permissions
//! - a room-entry body: room name, reserved byte, then one member record plus
//!   [`ROSTER_ENTRY_PADDING`] opaque bytes per advertised member
//! - a state change: `u64` acted-on id, `i32` change code, `u64` acted-by id,
//!   and for [`ChatMemberStateChange::Entered`] a reserved byte and one member
//!   record
//!
//! Strings are UTF-8 runs terminated by a single `0x00`. All integers are
//! little endian. Running out of bytes anywhere is a
//! [`DecodeError::MalformedRecord`]; nothing is guessed or skipped.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::enums::{ChatMemberStateChange, ChatPermissions, ClanPermissions};
use crate::error::{DecodeError, Result};
use crate::id::SteamId;

/// Width of each reserved (type marker) byte inside a record.
pub const RESERVED_BYTE_LEN: usize = 1;

/// Opaque bytes following every member record of a room-entry roster.
pub const ROSTER_ENTRY_PADDING: usize = 6;

const STRING_TERMINATOR: u8 = 0x00;

const MEMBER_TAG: &str = "MessageObject";
const MEMBER_ID_KEY: &str = "steamid";
const CHAT_PERMISSIONS_KEY: &str = "Permissions";
const CLAN_PERMISSIONS_KEY: &str = "Details";
const TYPE_UINT64: u8 = 7;
const TYPE_INT32: u8 = 2;

/// Sequential reader over a payload slice.
///
/// Every read either consumes exactly the bytes of its field or fails
/// without consuming anything.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Start reading at the beginning of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, field: &'static str, needed: usize) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(DecodeError::MalformedRecord {
                field,
                offset: self.offset,
                needed,
                available: self.buf.remaining(),
            });
        }
        Ok(())
    }

    /// Skip `len` bytes.
    pub fn skip(&mut self, field: &'static str, len: usize) -> Result<()> {
        self.ensure(field, len)?;
        self.buf.advance(len);
        self.offset += len;
        Ok(())
    }

    /// Read one byte.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        self.ensure(field, 1)?;
        self.offset += 1;
        Ok(self.buf.get_u8())
    }

    /// Read a little-endian `u64`.
    pub fn read_u64_le(&mut self, field: &'static str) -> Result<u64> {
        self.ensure(field, 8)?;
        self.offset += 8;
        Ok(self.buf.get_u64_le())
    }

    /// Read a little-endian `i32`.
    pub fn read_i32_le(&mut self, field: &'static str) -> Result<i32> {
        self.ensure(field, 4)?;
        self.offset += 4;
        Ok(self.buf.get_i32_le())
    }

    /// Read a terminated string, decoding invalid UTF-8 lossily.
    pub fn read_string(&mut self, field: &'static str) -> Result<String> {
        let Some(len) = self.buf.iter().position(|&b| b == STRING_TERMINATOR) else {
            return Err(DecodeError::MalformedRecord {
                field,
                offset: self.offset,
                needed: self.buf.len() + 1,
                available: self.buf.len(),
            });
        };
        let text = String::from_utf8_lossy(&self.buf[..len]).into_owned();
        self.buf.advance(len + 1);
        self.offset += len + 1;
        Ok(text)
    }
}

/// One room member as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRecord {
    /// Member identifier.
    pub id: SteamId,
    /// Room-level permissions.
    pub chat_permissions: ChatPermissions,
    /// Clan-level permissions.
    pub clan_permissions: ClanPermissions,
}

impl MemberRecord {
    /// Decode one record, advancing `cursor` past it.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        cursor.read_string("member tag")?;
        cursor.skip("member id type", RESERVED_BYTE_LEN)?;
        cursor.read_string("member id key")?;
        let id = cursor.read_u64_le("member id")?;
        cursor.skip("chat permissions type", RESERVED_BYTE_LEN)?;
        cursor.read_string("chat permissions key")?;
        let chat = cursor.read_i32_le("chat permissions")?;
        cursor.skip("clan permissions type", RESERVED_BYTE_LEN)?;
        cursor.read_string("clan permissions key")?;
        let clan = cursor.read_i32_le("clan permissions")?;

        Ok(Self {
            id: SteamId::new(id),
            chat_permissions: ChatPermissions::from_bits_retain(chat),
            clan_permissions: ClanPermissions::from_bits_retain(clan),
        })
    }

    /// Append the wire form of this record to `buf`.
    pub fn encode(&self, buf: &mut BytesMut) {
        put_string(buf, MEMBER_TAG);
        buf.put_u8(TYPE_UINT64);
        put_string(buf, MEMBER_ID_KEY);
        buf.put_u64_le(self.id.to_u64());
        buf.put_u8(TYPE_INT32);
        put_string(buf, CHAT_PERMISSIONS_KEY);
        buf.put_i32_le(self.chat_permissions.bits());
        buf.put_u8(TYPE_INT32);
        put_string(buf, CLAN_PERMISSIONS_KEY);
        buf.put_i32_le(self.clan_permissions.bits());
    }
}

fn put_string(buf: &mut BytesMut, text: &str) {
    buf.put_slice(text.as_bytes());
    buf.put_u8(STRING_TERMINATOR);
}

/// Incremental reader for the body of a room-entry message.
///
/// Yields one member at a time so that callers can apply each record as soon
/// as it is decoded. After the first error the reader is exhausted.
#[derive(Debug)]
pub struct RosterReader<'a> {
    cursor: Cursor<'a>,
    room_name: String,
    left: usize,
}

impl<'a> RosterReader<'a> {
    /// Read the room name and prepare to decode `member_count` records.
    pub fn new(payload: &'a [u8], member_count: usize) -> Result<Self> {
        let mut cursor = Cursor::new(payload);
        let room_name = cursor.read_string("room name")?;
        cursor.skip("roster type", RESERVED_BYTE_LEN)?;
        Ok(Self {
            cursor,
            room_name,
            left: member_count,
        })
    }

    /// Display name of the room.
    #[must_use]
    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    /// Records not yet decoded.
    #[must_use]
    pub fn members_left(&self) -> usize {
        self.left
    }

    fn next_member(&mut self) -> Result<MemberRecord> {
        let member = MemberRecord::decode(&mut self.cursor)?;
        self.cursor.skip("roster entry padding", ROSTER_ENTRY_PADDING)?;
        Ok(member)
    }
}

impl Iterator for RosterReader<'_> {
    type Item = Result<MemberRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        match self.next_member() {
            Ok(member) => {
                self.left -= 1;
                Some(Ok(member))
            }
            Err(e) => {
                self.left = 0;
                Some(Err(e))
            }
        }
    }
}

/// A member state change from a member-info message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    /// Member the change applies to.
    pub acted_on: SteamId,
    /// What happened.
    pub change: ChatMemberStateChange,
    /// Member who caused it.
    pub acted_by: SteamId,
    /// Permissions of a member who just entered.
    pub member: Option<MemberRecord>,
}

impl StateChange {
    /// Decode a state-change payload.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(payload);
        let acted_on = SteamId::new(cursor.read_u64_le("acted on")?);
        let change = ChatMemberStateChange::from(cursor.read_i32_le("state change")?);
        let acted_by = SteamId::new(cursor.read_u64_le("acted by")?);

        let member = if change == ChatMemberStateChange::Entered {
            cursor.skip("member record type", RESERVED_BYTE_LEN)?;
            Some(MemberRecord::decode(&mut cursor)?)
        } else {
            None
        };

        Ok(Self {
            acted_on,
            change,
            acted_by,
            member,
        })
    }

    /// Wire form of this change.
    #[must_use]
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(20);
        buf.put_u64_le(self.acted_on.to_u64());
        buf.put_i32_le(i32::from(self.change));
        buf.put_u64_le(self.acted_by.to_u64());
        if let Some(member) = &self.member {
            buf.put_u8(0);
            member.encode(&mut buf);
        }
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(account: u32, chat: i32, clan: i32) -> MemberRecord {
        MemberRecord {
            id: SteamId::from_parts(1, 1, 1, account),
            chat_permissions: ChatPermissions::from_bits_retain(chat),
            clan_permissions: ClanPermissions::from_bits_retain(clan),
        }
    }

    fn roster(name: &str, members: &[MemberRecord]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        put_string(&mut buf, name);
        buf.put_u8(0);
        for m in members {
            m.encode(&mut buf);
            buf.put_bytes(0x08, ROSTER_ENTRY_PADDING);
        }
        buf.to_vec()
    }

    #[test]
    fn test_member_record_layout() {
        let mut buf = BytesMut::new();
        member(5, 0x1a, 4).encode(&mut buf);
        // "MessageObject\0" 7 "steamid\0" u64 2 "Permissions\0" i32 2 "Details\0" i32
        assert_eq!(buf.len(), 14 + 1 + 8 + 8 + 1 + 12 + 4 + 1 + 8 + 4);
        assert_eq!(buf[14], TYPE_UINT64);
        assert_eq!(&buf[15..23], b"steamid\0");
    }

    #[test]
    fn test_decode_consumes_exactly_one_record() {
        let mut buf = BytesMut::new();
        member(5, 0x1a, 4).encode(&mut buf);
        buf.put_slice(b"tail");

        let mut cursor = Cursor::new(&buf);
        let decoded = MemberRecord::decode(&mut cursor).unwrap();
        assert_eq!(decoded, member(5, 0x1a, 4));
        assert_eq!(cursor.remaining(), 4);
        assert_eq!(cursor.position(), buf.len() - 4);
    }

    #[test]
    fn test_unknown_permission_bits_are_kept() {
        let mut buf = BytesMut::new();
        member(5, -1, 1 << 20).encode(&mut buf);
        let decoded = MemberRecord::decode(&mut Cursor::new(&buf)).unwrap();
        assert_eq!(decoded.chat_permissions.bits(), -1);
        assert_eq!(decoded.clan_permissions.bits(), 1 << 20);
    }

    #[test]
    fn test_truncated_record_reports_field() {
        let mut buf = BytesMut::new();
        member(5, 1, 1).encode(&mut buf);
        // Cut in the middle of the member id.
        let truncated = &buf[..27];
        let err = MemberRecord::decode(&mut Cursor::new(truncated)).unwrap_err();
        assert_eq!(err.field(), "member id");
        assert!(matches!(
            err,
            DecodeError::MalformedRecord {
                offset: 23,
                needed: 8,
                available: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Cursor::new(b"MessageObj").read_string("member tag").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedRecord {
                field: "member tag",
                offset: 0,
                needed: 11,
                available: 10,
            }
        );
    }

    #[test]
    fn test_failed_read_consumes_nothing() {
        let mut cursor = Cursor::new(&[1, 2, 3]);
        assert!(cursor.read_u64_le("x").is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u8("y").unwrap(), 1);
    }

    #[test]
    fn test_roster_reader_yields_members_and_name() {
        let members = [member(1, 8, 4), member(2, 10, 2)];
        let payload = roster("Lobby", &members);

        let mut reader = RosterReader::new(&payload, 2).unwrap();
        assert_eq!(reader.room_name(), "Lobby");
        let decoded: Vec<_> = reader.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(decoded, members);
        assert_eq!(reader.members_left(), 0);
    }

    #[test]
    fn test_roster_reader_stops_after_error() {
        let payload = roster("Lobby", &[member(1, 8, 4), member(2, 10, 2)]);
        // Drop the padding of the second record.
        let truncated = &payload[..payload.len() - 3];

        let mut reader = RosterReader::new(truncated, 2).unwrap();
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.field(), "roster entry padding");
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_roster_reader_ignores_extra_bytes() {
        let mut payload = roster("Lobby", &[member(1, 8, 4)]);
        payload.extend_from_slice(&[0xff; 16]);
        let decoded: Vec<_> = RosterReader::new(&payload, 1)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn test_state_change_entered() {
        let change = StateChange {
            acted_on: SteamId::from_parts(1, 1, 1, 7),
            change: ChatMemberStateChange::Entered,
            acted_by: SteamId::from_parts(1, 1, 1, 7),
            member: Some(member(7, 8, 4)),
        };
        assert_eq!(StateChange::decode(&change.encode()).unwrap(), change);
    }

    #[test]
    fn test_state_change_left_has_fixed_size() {
        let change = StateChange {
            acted_on: SteamId::from_parts(1, 1, 1, 7),
            change: ChatMemberStateChange::Left,
            acted_by: SteamId::from_parts(1, 1, 1, 9),
            member: None,
        };
        let bytes = change.encode();
        assert_eq!(bytes.len(), 20);
        assert_eq!(StateChange::decode(&bytes).unwrap(), change);
    }

    #[test]
    fn test_state_change_entered_without_record_is_malformed() {
        let mut buf = BytesMut::new();
        buf.put_u64_le(1);
        buf.put_i32_le(1);
        buf.put_u64_le(2);
        let err = StateChange::decode(&buf).unwrap_err();
        assert_eq!(err.field(), "member record type");
    }
}
