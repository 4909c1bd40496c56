//! Chat rooms: entry and roster load, member changes, lines, actions, invites.

use super::{Social, until_nul};
use crate::error::{DispatchError, DispatchResult};
use crate::events::{
    ChatEnterEvent, ChatInviteEvent, ChatMsgEvent, SocialEvent, StateChangeDetails,
};
use crate::state::ChatMember;
use steam_social_proto::message::{
    ChatActionResultMsg, ChatEnterHeader, ChatInvite, ChatMemberInfoHeader, ChatMsgHeader,
};
use steam_social_proto::{
    ChatInfoType, ChatMemberStateChange, MessageKind, RosterReader, StateChange,
};
use tracing::{debug, trace};

impl Social {
    pub(super) fn handle_chat_msg(&self, header: ChatMsgHeader, payload: &[u8]) {
        self.emit(SocialEvent::ChatMsg(ChatMsgEvent {
            chat_room_id: Some(header.chat_room),
            chatter_id: header.chatter,
            message: until_nul(payload),
            entry_type: header.entry_type,
            timestamp: None,
        }));
    }

    /// Replace the room, load its roster, then announce the entry.
    ///
    /// Members decoded before a malformed record stay in the roster; the
    /// entry event is only published for a complete roster.
    pub(super) fn handle_chat_enter(
        &self,
        header: ChatEnterHeader,
        payload: &[u8],
    ) -> DispatchResult {
        let malformed = |e| DispatchError::malformed(MessageKind::ChatEnter, e);
        let chat_id = header.chat_id;
        self.chats.enter(chat_id, header.clan_id);

        let member_count = usize::try_from(header.num_members).unwrap_or(0);
        let mut roster = RosterReader::new(payload, member_count).map_err(malformed)?;
        let name = roster.room_name().to_owned();
        trace!(chat = %chat_id, pending = roster.members_left(), "decoding room roster");
        for member in roster.by_ref() {
            let member = member.map_err(malformed)?;
            self.chats.add_chat_member(chat_id, ChatMember::from(member));
        }
        debug!(chat = %chat_id, members = member_count, "room roster loaded");

        self.emit(SocialEvent::ChatEnter(Box::new(ChatEnterEvent {
            chat_room_id: chat_id,
            friend_id: header.friend_id,
            chat_room_type: header.room_type,
            owner_id: header.owner_id,
            clan_id: header.clan_id,
            chat_flags: header.chat_flags,
            enter_response: header.enter_response,
            name,
        })));
        Ok(())
    }

    pub(super) fn handle_chat_member_info(
        &self,
        header: ChatMemberInfoHeader,
        payload: &[u8],
    ) -> DispatchResult {
        if header.info_type != ChatInfoType::StateChange {
            trace!(info_type = ?header.info_type, "ignoring member info");
            return Ok(());
        }

        let change = StateChange::decode(payload)
            .map_err(|e| DispatchError::malformed(MessageKind::ChatMemberInfo, e))?;
        let chat_id = header.chat_id;

        match (change.change, change.member) {
            (ChatMemberStateChange::Entered, Some(record)) => {
                if !self.chats.contains(chat_id) {
                    debug!(chat = %chat_id, "member entered a room not yet known");
                }
                let member = ChatMember {
                    id: change.acted_on,
                    ..ChatMember::from(record)
                };
                self.chats.add_chat_member(chat_id, member);
            }
            (state, _) if state.removes_member() => {
                self.chats.remove_chat_member(chat_id, change.acted_on);
            }
            _ => {}
        }

        self.emit(SocialEvent::ChatMemberInfo {
            chat_room_id: chat_id,
            info_type: header.info_type,
            state_change: StateChangeDetails {
                chatter_acted_on: change.acted_on,
                state_change: change.change,
                chatter_acted_by: change.acted_by,
            },
        });
        Ok(())
    }

    pub(super) fn handle_chat_action_result(&self, msg: ChatActionResultMsg) {
        self.emit(SocialEvent::ChatActionResult {
            chat_room_id: msg.chat_id,
            chatter_id: msg.acted_on,
            action: msg.action,
            result: msg.result,
        });
    }

    pub(super) fn handle_chat_invite(&self, msg: ChatInvite) {
        self.emit(SocialEvent::ChatInvite(Box::new(ChatInviteEvent {
            invited_id: msg.invited,
            chat_room_id: msg.chat_id,
            patron_id: msg.patron,
            chat_room_type: msg.room_type,
            friend_chat_id: msg.friend_chat_id,
            chat_room_name: msg.chat_name,
            game_id: msg.game_id,
        })));
    }
}
