//! [`NonTx`] client definitions.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracerr::Traced;

use crate::infra::database::{
    self,
    memory::{Collection, Connection},
};

/// Non-transactional in-memory database client.
///
/// Every operation is applied to the shared [`Collection`] immediately.
#[derive(Clone, Debug, Default)]
pub struct NonTx {
    /// Shared [`Collection`] of the database.
    pub(crate) collection: Arc<Mutex<Collection>>,
}

impl Connection for NonTx {
    async fn read<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&Collection) -> R,
    {
        Ok(f(&*self.collection.lock().await))
    }

    async fn write<F, R>(&self, f: F) -> Result<R, Traced<database::Error>>
    where
        F: FnOnce(&mut Collection) -> R,
    {
        Ok(f(&mut *self.collection.lock().await))
    }
}
