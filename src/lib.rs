//! # steam-social
//!
//! Session-local social state for a chat/presence service client.
//!
//! A [`Social`] keeps three caches (friends, clans and chat rooms with their
//! rosters) consistent with the stream of update messages the transport hands
//! it, and republishes every applied change on an ordered [`EventStream`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use steam_social::config::Config;
//! use steam_social::transport::ChannelTransport;
//! use steam_social::{Social, telemetry};
//! use steam_social_proto::SteamId;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("social.toml")?;
//! telemetry::init(&config.logging);
//!
//! let (transport, _outbound) = ChannelTransport::new(SteamId::from_parts(1, 1, 1, 42));
//! let (social, mut events) = Social::new(Arc::new(transport), config.social);
//! let social = Arc::new(social);
//!
//! let (inbound_tx, inbound_rx) = tokio::sync::mpsc::channel(256);
//! tokio::spawn(Arc::clone(&social).run(inbound_rx));
//! # drop(inbound_tx);
//!
//! while let Some(event) = events.recv().await {
//!     println!("{}: {} friends", event.name(), social.friends.count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;
pub mod telemetry;
pub mod transport;

pub use actions::ActionResult;
pub use error::{DispatchError, DispatchResult, TransportError};
pub use events::{EventStream, SocialEvent};
pub use handlers::Social;
pub use transport::{ChannelTransport, Transport};
