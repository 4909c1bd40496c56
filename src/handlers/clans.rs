//! Aggregate clan state.

use super::Social;
use crate::events::{ClanEventDetails, ClanStateEvent, SocialEvent};
use steam_social_proto::message::{ClanEventRecord, ClanState};
use steam_social_proto::{ClientPersonaStateFlags, avatar_hex, is_valid_avatar};

impl Social {
    pub(super) fn handle_clan_state(&self, state: ClanState) {
        let clan_id = state.clan_id;
        let flags = state.status_flags;
        let (name, avatar) = state
            .name_info
            .map(|info| (info.clan_name, avatar_hex(&info.sha_avatar)))
            .unwrap_or_default();

        let set_name = flags.contains(ClientPersonaStateFlags::PLAYER_NAME) && !name.is_empty();
        let set_avatar =
            flags.contains(ClientPersonaStateFlags::PRESENCE) && is_valid_avatar(&avatar);
        let counts = state.user_counts.unwrap_or_default();
        self.groups.update(clan_id, |group| {
            if set_name {
                group.name = name.clone();
            }
            if set_avatar {
                group.avatar = avatar.clone();
            }
            if state.user_counts.is_some() {
                group.member_total_count = counts.members;
                group.member_online_count = counts.online;
                group.member_chatting_count = counts.chatting;
                group.member_in_game_count = counts.in_game;
            }
        });

        self.emit(SocialEvent::ClanState(Box::new(ClanStateEvent {
            clan_id,
            state_flags: flags,
            account_flags: state.clan_account_flags,
            clan_name: name,
            avatar,
            member_total_count: counts.members,
            member_online_count: counts.online,
            member_chatting_count: counts.chatting,
            member_in_game_count: counts.in_game,
            events: state.events.into_iter().map(event_details).collect(),
            announcements: state.announcements.into_iter().map(event_details).collect(),
        })));
    }
}

fn event_details(record: ClanEventRecord) -> ClanEventDetails {
    ClanEventDetails {
        id: record.gid,
        event_time: record.event_time,
        headline: record.headline,
        game_id: record.game_id,
        just_posted: record.just_posted,
    }
}
