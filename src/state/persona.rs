//! Persona of the local session.

use steam_social_proto::PersonaState;

/// Name, avatar and status of the local account.
///
/// Kept outside the entity caches: the local account is never its own friend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalPersona {
    pub name: String,
    pub avatar: String,
    pub persona_state: PersonaState,
}
