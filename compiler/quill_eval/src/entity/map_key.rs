//! Hashable, ordered keys for map entities.

use std::fmt;
use std::rc::Rc;

use super::Entity;

/// The entity types allowed as map keys.
///
/// Ordering (integers, then booleans, then strings) is the order maps
/// print their entries in.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MapKey {
    Integer(i64),
    Boolean(bool),
    Str(Rc<str>),
}

impl MapKey {
    /// Convert an entity to a key, or `None` if its type cannot be a key.
    pub fn from_entity(entity: &Entity) -> Option<MapKey> {
        match entity {
            Entity::Integer(n) => Some(MapKey::Integer(*n)),
            Entity::Boolean(b) => Some(MapKey::Boolean(*b)),
            Entity::Str(s) => Some(MapKey::Str(Rc::clone(s))),
            _ => None,
        }
    }

    pub fn to_entity(&self) -> Entity {
        match self {
            MapKey::Integer(n) => Entity::Integer(*n),
            MapKey::Boolean(b) => Entity::Boolean(*b),
            MapKey::Str(s) => Entity::Str(Rc::clone(s)),
        }
    }
}

/// Same text as the key's `inspect`.
impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Integer(n) => write!(f, "{n}"),
            MapKey::Boolean(b) => write!(f, "{b}"),
            MapKey::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<i64> for MapKey {
    fn from(n: i64) -> Self {
        MapKey::Integer(n)
    }
}

impl From<bool> for MapKey {
    fn from(b: bool) -> Self {
        MapKey::Boolean(b)
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.into())
    }
}
