//! Outbound actions.

mod common;

use common::*;
use std::sync::Arc;
use steam_social::TransportError;
use steam_social::config::SocialConfig;
use steam_social_proto::{
    ChatAction, ChatEntryType, ChatInfoType, ChatMemberStateChange, ClientPersonaStateFlags,
    Outbound, PersonaState, StateChange, SteamId,
};

#[test]
fn persona_setters_update_local_state() {
    let (social, _events, transport) = social();
    social.set_persona_state(PersonaState::Busy).unwrap();
    social.set_persona_name("Freeman").unwrap();

    assert_eq!(social.persona_state(), PersonaState::Busy);
    assert_eq!(social.persona_name(), "Freeman");
    assert_eq!(
        transport.sent(),
        vec![
            Outbound::ChangeStatus {
                persona_state: PersonaState::Busy,
                player_name: None,
            },
            Outbound::ChangeStatus {
                persona_state: PersonaState::Busy,
                player_name: Some("Freeman".to_string()),
            },
        ]
    );
}

#[test]
fn message_routing_by_account_type() {
    let (social, _events, transport) = social();
    social
        .send_message(individual(1), ChatEntryType::ChatMsg, "hi")
        .unwrap();
    social
        .send_message(clan(5), ChatEntryType::ChatMsg, "hello room")
        .unwrap();

    assert_eq!(
        transport.sent(),
        vec![
            Outbound::FriendMsg {
                to: individual(1),
                entry_type: ChatEntryType::ChatMsg,
                message: b"hi".to_vec(),
            },
            Outbound::ChatMsg {
                chat_room: room(5),
                chatter: me(),
                entry_type: ChatEntryType::ChatMsg,
                message: b"hello room".to_vec(),
            },
        ]
    );
}

#[test]
fn message_to_game_server_is_rejected() {
    let (social, _events, transport) = social();
    let server = SteamId::from_parts(1, 3, 0, 1);
    let err = social
        .send_message(server, ChatEntryType::ChatMsg, "hi")
        .unwrap_err();

    assert!(matches!(err, TransportError::Rejected(_)));
    assert!(transport.sent().is_empty());
}

#[test]
fn friend_requests() {
    let (social, _events, transport) = social();
    social.add_friend(individual(1)).unwrap();
    social.remove_friend(individual(1)).unwrap();
    social.ignore_friend(individual(2), true).unwrap();
    social
        .request_friend_info(vec![individual(3)], ClientPersonaStateFlags::PRESENCE)
        .unwrap();
    social.request_profile_info(individual(4)).unwrap();

    assert_eq!(
        transport.sent(),
        vec![
            Outbound::AddFriend { id: individual(1) },
            Outbound::RemoveFriend { id: individual(1) },
            Outbound::SetIgnoreFriend {
                me: me(),
                friend: individual(2),
                ignore: true,
            },
            Outbound::RequestFriendData {
                flags: ClientPersonaStateFlags::PRESENCE,
                friends: vec![individual(3)],
            },
            Outbound::FriendProfileInfo { id: individual(4) },
        ]
    );
}

#[test]
fn room_requests_use_chat_form() {
    let (social, _events, transport) = social();
    social.join_chat(clan(5)).unwrap();
    social.kick_chat_member(clan(5), individual(1)).unwrap();
    social.ban_chat_member(room(5), individual(1)).unwrap();
    social.unban_chat_member(room(5), individual(1)).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0], Outbound::JoinChat { chat_id: room(5) });
    let actions: Vec<_> = sent[1..]
        .iter()
        .map(|msg| match msg {
            Outbound::ChatAction {
                chat_id, action, ..
            } => {
                assert_eq!(*chat_id, room(5));
                *action
            }
            other => panic!("unexpected request {other:?}"),
        })
        .collect();
    assert_eq!(actions, [ChatAction::Kick, ChatAction::Ban, ChatAction::UnBan]);
}

#[test]
fn leave_chat_sends_state_change() {
    let (social, _events, transport) = social();
    social.leave_chat(clan(5)).unwrap();

    match transport.sent().as_slice() {
        [
            Outbound::ChatMemberInfo {
                chat_id,
                info_type,
                payload,
            },
        ] => {
            assert_eq!(*chat_id, room(5));
            assert_eq!(*info_type, ChatInfoType::StateChange);
            let change = StateChange::decode(payload).unwrap();
            assert_eq!(change.change, ChatMemberStateChange::Left);
            assert_eq!(change.acted_on, me());
            assert_eq!(change.acted_by, me());
            assert_eq!(payload.len(), 20);
        }
        other => panic!("unexpected requests {other:?}"),
    }
}

#[test]
fn closed_transport_reports_error() {
    let transport = Arc::new(RecordingTransport::closed(me()));
    let (social, _events) = steam_social::Social::new(transport, SocialConfig::default());
    assert_eq!(
        social.add_friend(individual(1)).unwrap_err(),
        TransportError::Closed
    );
}
