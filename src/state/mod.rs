//! Social state caches.
//!
//! Three independent [`EntityCache`] instantiations (friends, groups, chat
//! rooms) plus the local persona. Each cache has its own lock, so work on one
//! never blocks another.

pub mod cache;
mod chats;
mod friends;
mod groups;
mod persona;

pub use cache::{Entity, EntityCache};
pub use chats::{Chat, ChatMember, ChatsList};
pub use friends::{Friend, FriendsList};
pub use groups::{Group, GroupsList};
pub use persona::LocalPersona;
