//! [`Tx`] client definitions.

use std::{mem, sync::Arc};

use tokio::sync::{Mutex, MutexGuard, OwnedMutexGuard};
use tracerr::Traced;

use crate::infra::database::{
    self,
    memory::{self, Collection, Connection},
};

use super::NonTx;

/// Transactional in-memory database client.
///
/// Exclusively locks the shared [`Collection`] on its first operation and
/// holds the lock until committed or dropped. All the writes are applied to a
/// private copy of the [`Collection`], which replaces the shared one on
/// [`Tx::commit()`] only.
#[derive(Clone, Debug)]
pub struct Tx {
    /// Shared [`Collection`] of the database.
    collection: Arc<Mutex<Collection>>,

    /// [`State`] of this transaction.
    state: Arc<Mutex<State>>,
}

/// State of a [`Tx`].
#[derive(Debug, Default)]
enum State {
    /// No operation has been performed yet.
    #[default]
    Pending,

    /// Shared [`Collection`] is locked.
    Active {
        /// Lock of the shared [`Collection`].
        guard: OwnedMutexGuard<Collection>,

        /// Private copy of the shared [`Collection`] to apply writes to.
        staged: Collection,
    },

    /// Transaction is committed.
    Finished,
}

impl Tx {
    /// Creates a new [`Tx`] client from the provided [`NonTx`] client.
    #[must_use]
    pub fn from_non_tx(client: &NonTx) -> Self {
        Self {
            collection: Arc::clone(&client.collection),
            state: Arc::new(Mutex::new(State::Pending)),
        }
    }

    /// Returns the [`State`] of this [`Tx`], locking the shared
    /// [`Collection`] if it's not locked yet.
    async fn activate(&self) -> MutexGuard<'_, State> {
        let mut state = self.state.lock().await;
        if matches!(*state, State::Pending) {
            let guard = Arc::clone(&self.collection).lock_owned().await;
            let staged = guard.clone();
            *state = State::Active { guard, staged };
        }
        state
    }

    /// Commits this [`Tx`] client, publishing all its writes.
    ///
    /// # Errors
    ///
    /// If this [`Tx`] has been committed already.
    pub async fn commit(&self) -> Result<(), Traced<database::Error>> {
        let mut state = self.state.lock().await;
        match mem::replace(&mut *state, State::Finished) {
            State::Active { mut guard, staged } => {
                *guard = staged;
                Ok(())
            }
            // Nothing was touched, so nothing to publish.
            State::Pending => Ok(()),
            State::Finished => Err(finished()),
        }
    }
}

impl Connection for Tx {
    async fn read<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&Collection) -> R,
    {
        match &*self.activate().await {
            State::Active { staged, .. } => Ok(f(staged)),
            State::Pending | State::Finished => Err(finished()),
        }
    }

    async fn write<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&mut Collection) -> R,
    {
        match &mut *self.activate().await {
            State::Active { staged, .. } => Ok(f(staged)),
            State::Pending | State::Finished => Err(finished()),
        }
    }
}

/// Creates a new [`memory::Error::TxFinished`].
fn finished() -> Traced<database::Error> {
    tracerr::map_from(tracerr::new!(memory::Error::TxFinished))
}
