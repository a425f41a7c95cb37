//! Identity-bearing entity base.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, globally unique entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueEntityId(Uuid);

impl UniqueEntityId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UniqueEntityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for UniqueEntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for UniqueEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Entity wrapping a property bag behind a fixed identity.
///
/// Two entities are equal iff their ids match; props are ignored.
/// Concrete entities wrap this type privately and expose accessors
/// and domain methods over `props`.
#[derive(Debug, Clone)]
pub struct Entity<P> {
    id: UniqueEntityId,
    props: P,
}

impl<P> Entity<P> {
    /// Create an entity, generating an id when none is supplied.
    pub fn create(props: P, id: Option<UniqueEntityId>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            props,
        }
    }

    pub fn id(&self) -> &UniqueEntityId {
        &self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    /// Mutable access for domain methods. The id stays fixed.
    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }
}

impl<P> PartialEq for Entity<P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<P> Eq for Entity<P> {}

impl<P> Hash for Entity<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
