//! Answers to friend, ignore and profile requests.

use super::Social;
use crate::events::{ProfileInfoEvent, SocialEvent};
use steam_social_proto::message::{
    AddFriendResponse, FriendProfileInfoResponse, SetIgnoreFriendResponse,
};

impl Social {
    pub(super) fn handle_add_friend_response(&self, msg: AddFriendResponse) {
        self.emit(SocialEvent::FriendAdded {
            result: msg.result,
            id: msg.id_added,
            persona_name: msg.persona_name_added,
        });
    }

    pub(super) fn handle_ignore_friend_response(&self, msg: SetIgnoreFriendResponse) {
        self.emit(SocialEvent::IgnoreFriend { result: msg.result });
    }

    pub(super) fn handle_profile_info_response(&self, msg: FriendProfileInfoResponse) {
        self.emit(SocialEvent::ProfileInfo(Box::new(ProfileInfoEvent {
            result: msg.result,
            id: msg.friend_id,
            time_created: msg.time_created,
            real_name: msg.real_name,
            city_name: msg.city_name,
            state_name: msg.state_name,
            country_name: msg.country_name,
            headline: msg.headline,
            summary: msg.summary,
        })));
    }
}
