use std::collections::HashMap;

use storefront_core::Entity;

/// In-memory keyed collection for one entity kind.
///
/// Keys are entity ids and are unique. Iteration order is unspecified.
/// Mutation takes `&mut self`; share a store across threads by wrapping it
/// in a lock.
#[derive(Debug, Clone)]
pub struct Store<T> {
    kind: &'static str,
    items: HashMap<String, T>,
}

impl<T: Entity + Clone> Store<T> {
    /// `kind` labels the entity in error messages, e.g. "Product"
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: HashMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Insert a new entity. Fails if the id is already taken.
    pub fn add(&mut self, item: T) -> Result<(), StoreError> {
        let id = item.id().to_string();
        if self.items.contains_key(&id) {
            return Err(StoreError::DuplicateId { kind: self.kind, id });
        }

        tracing::debug!(kind = self.kind, id = %id, "entity added");
        self.items.insert(id, item);
        Ok(())
    }

    /// Replace the entity stored under `item.id()` wholesale
    pub fn update(&mut self, item: T) -> Result<(), StoreError> {
        let slot = self
            .items
            .get_mut(item.id())
            .ok_or_else(|| StoreError::NotFound {
                kind: self.kind,
                id: item.id().to_string(),
            })?;

        tracing::debug!(kind = self.kind, id = item.id(), "entity replaced");
        *slot = item;
        Ok(())
    }

    /// Remove an entity, handing it back to the caller
    pub fn delete(&mut self, id: &str) -> Result<T, StoreError> {
        let removed = self.items.remove(id).ok_or_else(|| StoreError::NotFound {
            kind: self.kind,
            id: id.to_string(),
        })?;

        tracing::debug!(kind = self.kind, id = %id, "entity deleted");
        Ok(removed)
    }

    /// Snapshot of every stored entity. Mutating the result does not touch the store.
    pub fn find_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} ID already exists: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl StoreError {
    pub fn id(&self) -> &str {
        match self {
            StoreError::DuplicateId { id, .. } | StoreError::NotFound { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_core::Customer;

    fn ids(store: &Store<Customer>) -> Vec<String> {
        let mut ids: Vec<String> = store.find_all().into_iter().map(|c| c.id().to_string()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_add_and_find_all() {
        let mut store = Store::new("Customer");
        store.add(Customer::new("c1", "Alice")).unwrap();
        store.add(Customer::new("c2", "Bob")).unwrap();

        assert_eq!(ids(&store), vec!["c1", "c2"]);
        assert_eq!(store.len(), 2);

        store.delete("c1").unwrap();
        assert_eq!(ids(&store), vec!["c2"]);
    }

    #[test]
    fn test_duplicate_id_keeps_first_entity() {
        let mut store = Store::new("Customer");
        store.add(Customer::new("c1", "Alice")).unwrap();

        let err = store.add(Customer::new("c1", "Mallory")).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: "Customer",
                id: "c1".to_string()
            }
        );
        assert_eq!(err.to_string(), "Customer ID already exists: c1");
        assert_eq!(store.get("c1").unwrap().name(), "Alice");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_replaces_whole_entity() {
        let mut store = Store::new("Customer");
        store.add(Customer::new("c1", "Alice")).unwrap();

        store.update(Customer::new("c1", "Alice Smith")).unwrap();
        assert_eq!(store.get("c1").unwrap().name(), "Alice Smith");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = Store::new("Customer");
        store.add(Customer::new("c1", "Alice")).unwrap();

        let err = store.update(Customer::new("c9", "Ghost")).unwrap_err();
        assert_eq!(err.to_string(), "Customer not found: c9");
        assert!(matches!(store.delete("c9"), Err(StoreError::NotFound { .. })));
        assert_eq!(ids(&store), vec!["c1"]);

        // Deleted ids behave like ids never added
        store.delete("c1").unwrap();
        assert!(matches!(store.delete("c1"), Err(StoreError::NotFound { .. })));
        assert!(store.update(Customer::new("c1", "Alice")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = Store::new("Customer");
        store.add(Customer::new("c1", "Alice")).unwrap();

        let mut snapshot = store.find_all();
        snapshot[0] = Customer::new("c1", "Changed");
        snapshot.clear();

        assert_eq!(store.get("c1").unwrap().name(), "Alice");
    }

    #[test]
    fn test_store_of_shared_handles() {
        let mut store: Store<Arc<Customer>> = Store::new("Customer");
        let alice = Arc::new(Customer::new("c1", "Alice"));
        store.add(alice.clone()).unwrap();

        assert!(store.contains("c1"));
        assert!(Arc::ptr_eq(store.get("c1").unwrap(), &alice));
        assert_eq!(store.add(alice).unwrap_err().id(), "c1");
    }
}
