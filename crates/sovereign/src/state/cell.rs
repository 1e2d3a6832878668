//! PersistentCell - state that survives a reload
//!
//! A cell owns one value and one storage key. It reads the store once, on
//! creation, and writes the serialized value back on every change, so call
//! sites never load or save explicitly.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::errors::DomainError;
use crate::ports::KeyValueStore;

/// Value persisted under a single key
///
/// Each write replaces the in-memory value, performs exactly one
/// `store.set`, and bumps the revision seen by subscribers once.
pub struct PersistentCell<T> {
    key: String,
    store: Arc<dyn KeyValueStore>,
    value: RwLock<T>,
    revision: watch::Sender<u64>,
}

impl<T> PersistentCell<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Hydrate a cell from `store`, falling back to `default` when the key is
    /// absent or its content no longer parses as `T`
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        default: T,
    ) -> Result<Self, DomainError> {
        let key = key.into();

        let initial = match store.get(&key)? {
            Some(raw) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => {
                    debug!(key = %key, "Hydrated cell from store");
                    value
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Stored value is malformed, using default");
                    default
                }
            },
            None => default,
        };

        let (revision, _) = watch::channel(0);

        Ok(Self {
            key,
            store,
            value: RwLock::new(initial),
            revision,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current value (clone). Never touches the store.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the current value without cloning
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.value.read();
        f(&*guard)
    }

    /// Replace the value and persist it
    pub fn set(&self, value: T) -> Result<(), DomainError> {
        self.update(|_| value)
    }

    /// Replace the value with a transform of the previous one and persist it
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Result<(), DomainError> {
        self.try_update(|current| Some(f(current))).map(|_| ())
    }

    /// Like [`update`](Self::update), but `f` may decline by returning `None`,
    /// in which case nothing is written and no one is notified.
    ///
    /// Returns whether a write happened. A persistence fault is returned as
    /// an error after the in-memory value has been replaced and subscribers
    /// notified.
    pub fn try_update(&self, f: impl FnOnce(&T) -> Option<T>) -> Result<bool, DomainError> {
        let mut guard = self.value.write();

        let Some(next) = f(&*guard) else {
            return Ok(false);
        };

        let serialized = serde_json::to_string(&next);
        *guard = next;

        // Lock is held across the write so the store sees writes in order
        let persisted = serialized
            .map_err(DomainError::from)
            .and_then(|raw| self.store.set(&self.key, &raw));
        drop(guard);

        self.revision.send_modify(|rev| *rev += 1);

        match persisted {
            Ok(()) => {
                debug!(key = %self.key, "Persisted cell");
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }

    /// Number of writes since the cell was created
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver that is marked changed after every write
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PersistentCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentCell")
            .field("key", &self.key)
            .field("value", &*self.value.read())
            .field("revision", &*self.revision.borrow())
            .finish()
    }
}
