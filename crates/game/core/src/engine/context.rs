use crate::state::ActorId;

/// Identity of whoever is executing the current call.
///
/// Supplied by the hosting executor (the account signing a transaction, the
/// connection a command arrived on), never by the call's own arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallerContext {
    actor: ActorId,
}

impl CallerContext {
    pub fn new(actor: impl Into<ActorId>) -> Self {
        Self {
            actor: actor.into(),
        }
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }
}

impl From<ActorId> for CallerContext {
    fn from(actor: ActorId) -> Self {
        Self { actor }
    }
}
