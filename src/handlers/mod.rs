//! Inbound message dispatch.
//!
//! [`Social`] owns the three caches, the local persona and the event emitter.
//! Each inbound message is routed by kind to one handler, which mutates the
//! caches and then publishes its event(s). Handlers never hold a cache lock
//! while emitting or talking to the transport.
//!
//! Handlers are grouped by area:
//! - [`friends`]: friends lists, persona state, account info, 1:1 messages
//! - [`clans`]: aggregate clan state
//! - [`chat`]: room entry, room members, room lines, actions and invites
//! - [`responses`]: answers to friend, ignore and profile requests

mod chat;
mod clans;
mod friends;
mod responses;

use crate::config::SocialConfig;
use crate::error::DispatchResult;
use crate::events::{self, EventEmitter, EventStream, SocialEvent};
use crate::state::{ChatsList, FriendsList, GroupsList, LocalPersona};
use crate::telemetry::spans;
use crate::transport::Transport;
use parking_lot::RwLock;
use std::sync::Arc;
use steam_social_proto::{Inbound, Outbound, PersonaState, SteamId};
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

/// Social state of one session.
pub struct Social {
    /// Individuals the local account has a relationship with.
    pub friends: FriendsList,
    /// Clans the local account has a relationship with.
    pub groups: GroupsList,
    /// Rooms the local session has entered, with their rosters.
    pub chats: ChatsList,
    pub(crate) local: RwLock<LocalPersona>,
    pub(crate) transport: Arc<dyn Transport>,
    events: EventEmitter,
    config: SocialConfig,
}

impl std::fmt::Debug for Social {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Social")
            .field("friends", &self.friends.count())
            .field("groups", &self.groups.count())
            .field("chats", &self.chats.count())
            .field("local", &*self.local.read())
            .finish_non_exhaustive()
    }
}

impl Social {
    /// Create the dispatcher and the stream its events are published on.
    pub fn new(transport: Arc<dyn Transport>, config: SocialConfig) -> (Self, EventStream) {
        let (events, stream) = events::channel();
        let social = Self {
            friends: FriendsList::new(),
            groups: GroupsList::new(),
            chats: ChatsList::new(),
            local: RwLock::new(LocalPersona::default()),
            transport,
            events,
            config,
        };
        (social, stream)
    }

    /// Id of the logged-in account.
    pub fn local_id(&self) -> SteamId {
        self.transport.local_id()
    }

    /// Persona name of the local account, empty until known.
    pub fn persona_name(&self) -> String {
        self.local.read().name.clone()
    }

    /// Avatar fingerprint of the local account, empty until known.
    pub fn avatar(&self) -> String {
        self.local.read().avatar.clone()
    }

    /// Last persona state set through this session.
    pub fn persona_state(&self) -> PersonaState {
        self.local.read().persona_state
    }

    /// Copy of the whole local persona.
    pub fn local_persona(&self) -> LocalPersona {
        self.local.read().clone()
    }

    /// Apply one inbound message and publish its events.
    ///
    /// A returned error concerns this message only; effects applied before
    /// the failure are kept and the dispatcher stays usable.
    pub fn handle(&self, msg: Inbound) -> DispatchResult {
        let kind = msg.kind();
        let _span = spans::dispatch(kind).entered();
        debug!("dispatching inbound message");

        match msg {
            Inbound::AccountInfo => self.handle_account_info(),
            Inbound::FriendsList(list) => self.handle_friends_list(list),
            Inbound::PersonaState(list) => self.handle_persona_state(list),
            Inbound::ClanState(state) => self.handle_clan_state(*state),
            Inbound::FriendMsgIncoming(msg) => self.handle_friend_msg(msg),
            Inbound::ChatMsg { header, payload } => self.handle_chat_msg(header, &payload),
            Inbound::ChatEnter { header, payload } => {
                return self.handle_chat_enter(header, &payload);
            }
            Inbound::ChatMemberInfo { header, payload } => {
                return self.handle_chat_member_info(header, &payload);
            }
            Inbound::ChatActionResult(msg) => self.handle_chat_action_result(msg),
            Inbound::ChatInvite(msg) => self.handle_chat_invite(msg),
            Inbound::AddFriendResponse(msg) => self.handle_add_friend_response(msg),
            Inbound::SetIgnoreFriendResponse(msg) => self.handle_ignore_friend_response(msg),
            Inbound::FriendProfileInfoResponse(msg) => self.handle_profile_info_response(*msg),
            Inbound::Other { kind, payload } => {
                trace!(kind, len = payload.len(), "dropping unhandled message kind");
            }
        }
        Ok(())
    }

    /// Dispatch messages from `rx` in arrival order until the sender closes.
    pub async fn run(self: Arc<Self>, mut rx: mpsc::Receiver<Inbound>) {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = self.handle(msg) {
                warn!(
                    kind = e.kind().as_str(),
                    error_code = e.error_code(),
                    error = %e,
                    "inbound message failed"
                );
            }
        }
        debug!("inbound channel closed");
    }

    fn emit(&self, event: SocialEvent) {
        self.events.emit(event);
    }

    /// Send a request on behalf of the dispatcher. Failures are logged, never
    /// propagated: the inbound message has already been applied.
    fn send_or_warn(&self, msg: Outbound) {
        if let Err(e) = self.transport.send(msg) {
            warn!(error = %e, "failed to send follow-up request");
        }
    }
}

/// Text up to the first NUL, decoded lossily.
fn until_nul(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_nul() {
        assert_eq!(until_nul(b"hello\0world"), "hello");
        assert_eq!(until_nul(b"no terminator"), "no terminator");
        assert_eq!(until_nul(b"\0"), "");
        assert_eq!(until_nul(b""), "");
    }

    #[test]
    fn test_until_nul_lossy() {
        assert_eq!(until_nul(&[b'a', 0xff, b'b', 0]), "a\u{fffd}b");
    }
}
