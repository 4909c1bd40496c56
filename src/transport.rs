//! Interface to the session layer.
//!
//! The transport authenticates, frames and decodes traffic; the dispatcher
//! only needs to know who the local account is and how to hand over a
//! request.

use crate::error::TransportError;
use std::sync::atomic::{AtomicU64, Ordering};
use steam_social_proto::{Outbound, SteamId};
use tokio::sync::mpsc;

/// The session collaborator.
pub trait Transport: Send + Sync {
    /// Id of the logged-in account.
    fn local_id(&self) -> SteamId;

    /// Hand over a request. Must not block.
    fn send(&self, msg: Outbound) -> Result<(), TransportError>;
}

/// A [`Transport`] that queues requests on a channel for a writer task.
#[derive(Debug)]
pub struct ChannelTransport {
    local_id: AtomicU64,
    tx: mpsc::UnboundedSender<Outbound>,
}

impl ChannelTransport {
    /// Create the transport and the receiver its writer task drains.
    pub fn new(local_id: SteamId) -> (Self, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = Self {
            local_id: AtomicU64::new(local_id.to_u64()),
            tx,
        };
        (transport, rx)
    }

    /// Update the local id, e.g. once logon completes.
    pub fn set_local_id(&self, id: SteamId) {
        self.local_id.store(id.to_u64(), Ordering::Release);
    }
}

impl Transport for ChannelTransport {
    fn local_id(&self) -> SteamId {
        SteamId::new(self.local_id.load(Ordering::Acquire))
    }

    fn send(&self, msg: Outbound) -> Result<(), TransportError> {
        self.tx.send(msg).map_err(|_| TransportError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_queues_in_order() {
        let (transport, mut rx) = ChannelTransport::new(SteamId::new(1));
        transport
            .send(Outbound::AddFriend { id: SteamId::new(2) })
            .unwrap();
        transport
            .send(Outbound::RemoveFriend { id: SteamId::new(2) })
            .unwrap();

        assert!(matches!(rx.try_recv(), Ok(Outbound::AddFriend { .. })));
        assert!(matches!(rx.try_recv(), Ok(Outbound::RemoveFriend { .. })));
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (transport, rx) = ChannelTransport::new(SteamId::new(1));
        drop(rx);
        let err = transport
            .send(Outbound::AddFriend { id: SteamId::new(2) })
            .unwrap_err();
        assert_eq!(err, TransportError::Closed);
    }

    #[test]
    fn test_local_id_update() {
        let (transport, _rx) = ChannelTransport::new(SteamId::default());
        transport.set_local_id(SteamId::new(76561197960265729));
        assert_eq!(transport.local_id().to_u64(), 76561197960265729);
    }
}
