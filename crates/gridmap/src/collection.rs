//! Ordered, uniquely keyed entity storage with attribute filtering.
//!
//! A [`Collection`] maps each entity's [`Identified::id`] to the entity and
//! iterates in insertion order. Filters never mutate the source: they build
//! a new collection holding clones of the matching entities.
//!
//! # Example
//!
//! ```
//! use gridmap::{Collection, Point};
//!
//! let points: Collection<Point> = [Point::new(1, 1), Point::new(7, 2), Point::new(9, 9)]
//!     .into_iter()
//!     .collect();
//!
//! let east = points.filter("x", ">", 5)?;
//! assert_eq!(east.ids(), vec![Point::new(7, 2), Point::new(9, 9)]);
//! assert_eq!(points.count(), 3);
//! # Ok::<(), gridmap::GridError>(())
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attribute::{AttributeValue, Comparator, Filterable};
use crate::entity::Identified;
use crate::error::{GridError, Result};

/// An insertion-ordered mapping from identity key to entity.
///
/// # Replacement
///
/// [`add`](Self::add) with a key that is already present replaces the stored
/// entity in place. [`update`](Self::update) removes and re-inserts, so the
/// entity moves to the end. Both leave the same entity stored and the same
/// count; callers must not depend on positional order after a replacement.
pub struct Collection<T: Identified> {
    entities: IndexMap<T::Key, T>,
}

impl<T: Identified> Collection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: IndexMap::new(),
        }
    }

    /// Creates a collection by adding each entity in turn.
    ///
    /// Later entities overwrite earlier ones with the same key.
    pub fn from_entities(entities: impl IntoIterator<Item = T>) -> Self {
        entities.into_iter().collect()
    }

    /// Inserts an entity under its key, replacing any entity already there.
    ///
    /// Returns the replaced entity, if any.
    pub fn add(&mut self, entity: T) -> Option<T> {
        self.entities.insert(entity.id(), entity)
    }

    /// Removes the entity with the same key, then adds this one.
    ///
    /// Returns the replaced entity, if any.
    pub fn update(&mut self, entity: T) -> Option<T> {
        let previous = self.remove(&entity.id());
        self.add(entity);
        previous
    }

    /// Removes and returns the entity stored under `key`.
    ///
    /// An absent key is a no-op.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        self.entities.shift_remove(key)
    }

    /// Returns the entity stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::KeyNotFound`] if no entity has that key.
    pub fn get(&self, key: &T::Key) -> Result<&T> {
        self.entities
            .get(key)
            .ok_or_else(|| GridError::KeyNotFound {
                key: format!("{key:?}"),
            })
    }

    /// Returns `true` if an entity is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &T::Key) -> bool {
        self.entities.contains_key(key)
    }

    /// Returns the entities in iteration order.
    #[must_use]
    pub fn all(&self) -> Vec<&T> {
        self.entities.values().collect()
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the collection holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the keys in iteration order.
    #[must_use]
    pub fn ids(&self) -> Vec<T::Key> {
        self.entities.keys().cloned().collect()
    }

    /// Returns an iterator over the entities in iteration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entities.values()
    }
}

impl<T: Identified + Clone> Collection<T> {
    /// Returns a new collection of the entities matching `predicate`, in
    /// their original relative order. `self` is left unchanged.
    #[must_use]
    pub fn retain_where(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        self.entities
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }
}

impl<T: Identified + Filterable + Clone> Collection<T> {
    /// Returns a new collection of the entities whose `property` satisfies
    /// `comparator` against `value`.
    ///
    /// Recognized comparators: `=`, `!=`, `>`, `>=`, `<`, `<=`, `has`,
    /// `not has`, `in`, `not in`. See [`crate::attribute`] for the
    /// comparison rules.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnsupportedComparator`] for any other token,
    /// even when the collection is empty.
    pub fn filter(
        &self,
        property: &str,
        comparator: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<Self> {
        let comparator = comparator.parse::<Comparator>().inspect_err(|_| {
            tracing::debug!(property, comparator, "filter rejected unsupported comparator");
        })?;
        Ok(self.filter_with(property, comparator, value))
    }

    /// Like [`filter`](Self::filter), with an already parsed comparator.
    #[must_use]
    pub fn filter_with(
        &self,
        property: &str,
        comparator: Comparator,
        value: impl Into<AttributeValue>,
    ) -> Self {
        let operand = value.into();
        let result = self.retain_where(|entity| {
            let actual = entity.attribute(property).unwrap_or_default();
            comparator.evaluate(&actual, &operand)
        });
        tracing::trace!(
            property,
            %comparator,
            source = self.count(),
            matched = result.count(),
            "filtered collection"
        );
        result
    }

    /// Returns the entities whose `property` equals `true`.
    #[must_use]
    pub fn filter_flag(&self, property: &str) -> Self {
        self.filter_with(property, Comparator::Eq, true)
    }
}

impl<T: Identified> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified + Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            entities: self.entities.clone(),
        }
    }
}

impl<T: Identified + fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entities.values()).finish()
    }
}

/// Collections are equal when they hold equal entities in the same order.
impl<T: Identified + PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl<T: Identified> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T: Identified> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entity in iter {
            self.add(entity);
        }
    }
}

impl<T: Identified> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = indexmap::map::IntoValues<T::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_values()
    }
}

impl<'a, T: Identified> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, T::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.values()
    }
}

/// Serialized as the sequence of entities; keys are re-derived on load.
impl<T: Identified + Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entities.values())
    }
}

impl<'de, T: Identified + Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Vec::<T>::deserialize(deserializer)?.into_iter().collect())
    }
}
