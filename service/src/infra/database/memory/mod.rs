//! In-memory [`Database`] implementation.
//!
//! Data lives only as long as the process does.

pub mod client;
mod impls;

use std::future::Future;

use derive_more::{Deref, Display, Error as StdError};
use tracerr::Traced;

use crate::{domain::Project, infra::database};
#[cfg(doc)]
use crate::infra::Database;

pub use self::client::{NonTx, Tx};

/// In-memory [`Database`] client.
#[derive(Clone, Debug, Default, Deref)]
pub struct Memory<T = NonTx>(T);

impl Memory {
    /// Creates a new empty [`Memory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Whole data set stored in a [`Memory`] database.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    /// All the stored [`Project`]s in their insertion order.
    pub projects: Vec<Project>,
}

/// Access to a [`Collection`] of a [`Memory`] database.
pub trait Connection {
    /// Runs the provided function over a read-only [`Collection`].
    ///
    /// # Errors
    ///
    /// If the [`Collection`] cannot be accessed anymore.
    fn read<F, R>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>
    where
        F: FnOnce(&Collection) -> R;

    /// Runs the provided function over a mutable [`Collection`].
    ///
    /// # Errors
    ///
    /// If the [`Collection`] cannot be accessed anymore.
    fn write<F, R>(
        &self,
        f: F,
    ) -> impl Future<Output = Result<R, Traced<database::Error>>>
    where
        F: FnOnce(&mut Collection) -> R;
}

/// [`Memory`] database [`Error`].
///
/// [`Error`]: enum@Error
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Tx`] was used after being committed.
    #[display("Transaction is already finished")]
    TxFinished,
}
