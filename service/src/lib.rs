//! Service contains the business logic of construction projects tracking.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
#[cfg(test)]
mod fixture;
pub mod infra;
pub mod query;
pub mod read;

use std::sync::Arc;

#[cfg(test)]
use serde_json as _;

#[cfg(doc)]
use infra::{Advisor, Database};

use self::domain::{unit, Unit};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Reference list of [`Unit`]s, in their display order.
    pub units: Vec<Unit>,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, Adv> {
    /// Configuration of this [`Service`].
    config: Arc<Config>,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`Advisor`] of this [`Service`].
    advisor: Adv,
}

impl<Db, Adv> Service<Db, Adv> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, database: Db, advisor: Adv) -> Self {
        Self {
            config: Arc::new(config),
            database,
            advisor,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns [`Advisor`] of this [`Service`].
    #[must_use]
    pub fn advisor(&self) -> &Adv {
        &self.advisor
    }

    /// Returns the reference list of [`Unit`]s.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.config.units
    }

    /// Returns the [`Unit`] with the provided ID, if it exists.
    #[must_use]
    pub fn unit(&self, id: &unit::Id) -> Option<&Unit> {
        self.config.units.iter().find(|u| &u.id == id)
    }
}
