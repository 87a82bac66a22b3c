use super::CollectionChange;
use crate::model::FeedEntity;
use itertools::Itertools;
use std::collections::HashMap;

/// a collection of feed entities keyed by identity which remembers its size at
/// the last checkpoint. entities can only be removed, never added, once the
/// collection is built.
#[derive(Debug, Clone)]
pub struct TrackedCollection<T: FeedEntity> {
    entities: HashMap<T::Key, T>,
    checkpoint_size: usize,
}

impl<T: FeedEntity> TrackedCollection<T> {
    /// builds the collection and sets its checkpoint to the resulting size.
    /// entities sharing a key collapse into one, the last one wins.
    pub fn from_entities<I>(entities: I) -> TrackedCollection<T>
    where
        I: IntoIterator<Item = T>,
    {
        let entities: HashMap<T::Key, T> = entities.into_iter().map(|e| (e.key(), e)).collect();
        let checkpoint_size = entities.len();
        TrackedCollection {
            entities,
            checkpoint_size,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.entities.contains_key(key)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entities.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entities.values_mut()
    }

    /// keeps only the entities matching the predicate.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.entities.retain(|_, entity| predicate(entity));
    }

    /// entities ordered by key.
    pub fn sorted(&self) -> Vec<&T> {
        self.entities
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, entity)| entity)
            .collect()
    }

    /// owned copies of the entities ordered by key.
    pub fn to_vec(&self) -> Vec<T> {
        self.sorted().into_iter().cloned().collect()
    }

    /// compares the current size with the size at the last checkpoint. when
    /// they differ the change is returned and the checkpoint moves to the
    /// current size.
    pub fn checkpoint(&mut self) -> Option<CollectionChange> {
        let size = self.entities.len();
        if size == self.checkpoint_size {
            return None;
        }
        let change = CollectionChange {
            kind: T::KIND,
            before: self.checkpoint_size,
            after: size,
        };
        self.checkpoint_size = size;
        Some(change)
    }
}

impl<T: FeedEntity> Default for TrackedCollection<T> {
    fn default() -> Self {
        TrackedCollection {
            entities: HashMap::new(),
            checkpoint_size: 0,
        }
    }
}
